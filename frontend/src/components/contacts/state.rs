use outreach_common::forms::contact::ContactForm;
use outreach_common::model::contact::{find_contact, ContactList};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// State of the contacts panel and its two dialogs (add and details).
pub struct ContactsComponent {
    pub lists: Vec<ContactList>,
    pub loading: bool,

    /// Set while `contact/create` is in flight; the submit button is disabled.
    pub saving: bool,

    /// Id of the list being deleted, if any.
    pub deleting: Option<String>,

    /// Form fields plus the chosen file, kept so toggling the import format
    /// can re-read it without asking for the file again.
    pub form: ContactForm,

    /// List shown in the details dialog.
    pub selected: Option<String>,

    pub add_dialog_ref: NodeRef,
    pub details_dialog_ref: NodeRef,
    pub file_input_ref: NodeRef,
}

impl ContactsComponent {
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            loading: false,
            saving: false,
            deleting: None,
            form: ContactForm::default(),
            selected: None,
            add_dialog_ref: NodeRef::default(),
            details_dialog_ref: NodeRef::default(),
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn selected_list(&self) -> Option<&ContactList> {
        self.selected
            .as_deref()
            .and_then(|id| find_contact(&self.lists, id))
    }

    /// Clears the add form, including the file chooser.
    pub fn reset_form(&mut self) {
        self.form.reset();
        if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
