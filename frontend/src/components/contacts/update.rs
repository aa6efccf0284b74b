//! Update function for the contacts panel.
//!
//! Requests run in `spawn_local` and report back through a message; the
//! matching flag (`loading`, `saving`, `deleting`) is reset on both outcomes
//! so a failure never leaves an action disabled.

use gloo_console::error;
use gloo_file::futures::read_as_bytes;
use outreach_common::api::Endpoint;
use outreach_common::forms::contact::ContactForm;
use outreach_common::forms::summary;
use outreach_common::import::ImportFormat;
use outreach_common::model::contact::{ContactList, ContactResponse};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{report, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::ContactsComponent;

pub fn update(component: &mut ContactsComponent, ctx: &Context<ContactsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api
                    .fetch::<Vec<ContactResponse>>(Endpoint::ListContacts)
                    .await
                    .map(|ack| ack.result);
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(Ok(responses)) => {
            component.loading = false;
            component.lists = responses
                .into_iter()
                .filter_map(|response| {
                    let id = response.id.clone();
                    ContactList::try_from(response)
                        .map_err(|e| error!(format!("contact list {} is malformed: {}", id, e)))
                        .ok()
                })
                .collect();
            ctx.props().on_change.emit(component.lists.clone());
            true
        }
        Msg::Loaded(Err(e)) => {
            component.loading = false;
            report("Loading contacts", &e);
            true
        }
        Msg::OpenAddDialog => {
            open_top_sheet(component.add_dialog_ref.clone());
            false
        }
        Msg::CloseAddDialog => {
            component.reset_form();
            close_top_sheet(component.add_dialog_ref.clone());
            true
        }
        Msg::SetName(name) => {
            component.form.name = name;
            true
        }
        Msg::SetDescription(description) => {
            component.form.description = description;
            true
        }
        Msg::SetQuoted(quoted) => {
            component.form.set_format(if quoted {
                ImportFormat::Quoted
            } else {
                ImportFormat::Plain
            });
            true
        }
        Msg::FileSelected(file) => {
            let file = gloo_file::File::from(file);
            if let Err(e) = ContactForm::check_file_size(&ctx.props().config, file.size()) {
                show_toast(&e.to_string());
                component.reset_form();
                return true;
            }
            let ticket = component.form.select_file(file.name());
            let link = ctx.link().clone();
            spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::FileRead { ticket, bytes }),
                    Err(e) => link.send_message(Msg::FileFailed {
                        ticket,
                        reason: e.to_string(),
                    }),
                }
            });
            true
        }
        Msg::FileRead { ticket, bytes } => {
            if !component.form.load_file(ticket, bytes) {
                return false;
            }
            if component.form.table.as_ref().is_some_and(|t| t.is_blank()) {
                show_toast("The selected file is empty.");
            }
            true
        }
        Msg::FileFailed { ticket, reason } => {
            if !component.form.is_current(ticket) {
                return false;
            }
            error!(format!("could not read contact file: {}", reason));
            show_toast("Could not read the selected file.");
            component.reset_form();
            true
        }
        Msg::Create => {
            if component.saving {
                return false;
            }
            let request = match component.form.validate() {
                Ok(request) => request,
                Err(errors) => {
                    show_toast(&summary(&errors));
                    return false;
                }
            };
            component.saving = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.submit(Endpoint::CreateContact, &request).await;
                link.send_message(Msg::Created(result));
            });
            true
        }
        Msg::Created(Ok(ack)) => {
            component.saving = false;
            show_toast(&ack.message);
            ctx.link()
                .send_message_batch(vec![Msg::CloseAddDialog, Msg::Load]);
            true
        }
        Msg::Created(Err(e)) => {
            component.saving = false;
            report("Creating contact", &e);
            true
        }
        Msg::Delete(id) => {
            if component.deleting.is_some() || !confirm("Delete this contact list?") {
                return false;
            }
            component.deleting = Some(id.clone());
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.call(Endpoint::DeleteContact(id)).await;
                link.send_message(Msg::Deleted(result));
            });
            true
        }
        Msg::Deleted(Ok(ack)) => {
            component.deleting = None;
            show_toast(&ack.message);
            ctx.link().send_message(Msg::Load);
            true
        }
        Msg::Deleted(Err(e)) => {
            component.deleting = None;
            report("Deleting contact", &e);
            true
        }
        Msg::ShowDetails(id) => {
            component.selected = Some(id);
            open_top_sheet(component.details_dialog_ref.clone());
            true
        }
        Msg::CloseDetails => {
            component.selected = None;
            close_top_sheet(component.details_dialog_ref.clone());
            true
        }
    }
}

fn confirm(question: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(question).ok())
        .unwrap_or(false)
}
