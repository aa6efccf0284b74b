//! View rendering for the contacts panel: the list itself, the add dialog
//! (form, file chooser and preview) and the details dialog.

use outreach_common::import::ImportFormat;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::data_table::data_table;
use crate::helpers::{checkbox_checked, format_count, input_value, textarea_value, truncate};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::ContactsComponent;

const DESCRIPTION_WIDTH: usize = 50;
const PREVIEW_ROWS: usize = 5;

pub fn view(component: &ContactsComponent, ctx: &Context<ContactsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <section class="panel contacts-panel">
            <div class="panel-header">
                <h2>{"Contacts"}</h2>
                <button class="icon-btn wide" onclick={link.callback(|_| Msg::OpenAddDialog)}>
                    <i class="material-icons">{"person_add"}</i>
                    <span class="icon-label">{"Add Contact"}</span>
                </button>
            </div>
            { build_list(component, link) }
            { add_dialog(component, link) }
            { details_dialog(component, link) }
        </section>
    }
}

fn build_list(component: &ContactsComponent, link: &Scope<ContactsComponent>) -> Html {
    if component.loading && component.lists.is_empty() {
        return html! { <p class="muted">{"Loading contacts..."}</p> };
    }
    if component.lists.is_empty() {
        return html! { <p class="muted">{"No contacts yet."}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"Name"}</th>
                    <th>{"Description"}</th>
                    <th>{"Rows"}</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                { for component.lists.iter().map(|list| {
                    let details_id = list.id.clone();
                    let delete_id = list.id.clone();
                    let deleting = component.deleting.as_deref() == Some(list.id.as_str());
                    html! {
                        <tr key={list.id.clone()}>
                            <td>{ list.name.clone() }</td>
                            <td title={list.description.clone()}>{ truncate(&list.description, DESCRIPTION_WIDTH) }</td>
                            <td>{ format_count(list.count) }</td>
                            <td class="actions">
                                <button class="icon-btn" title="Details"
                                    onclick={link.callback(move |_| Msg::ShowDetails(details_id.clone()))}>
                                    <i class="material-icons">{"visibility"}</i>
                                </button>
                                <button class="icon-btn danger" title="Delete"
                                    disabled={component.deleting.is_some()}
                                    onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                                    <i class="material-icons">{ if deleting { "hourglass_empty" } else { "delete" } }</i>
                                </button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn add_dialog(component: &ContactsComponent, link: &Scope<ContactsComponent>) -> Html {
    let form = &component.form;
    html! {
        <YwMaterialTopSheet
            node_ref={component.add_dialog_ref.clone()}
            title="Add Contact"
            on_close={link.callback(|_| Msg::CloseAddDialog)}
        >
            <div class="form">
                <label>{"Name"}
                    <input type="text" value={form.name.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetName(input_value(&e)))} />
                </label>
                <label>{"Description"}
                    <textarea value={form.description.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::SetDescription(textarea_value(&e)))} />
                </label>
                <label>{"Contact file"}
                    <input type="file" accept=".csv,text/csv,text/plain"
                        ref={component.file_input_ref.clone()}
                        onchange={link.batch_callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            input.files().and_then(|files| files.get(0)).map(Msg::FileSelected)
                        })} />
                </label>
                <label class="checkbox">
                    <input type="checkbox" checked={form.format == ImportFormat::Quoted}
                        onchange={link.callback(|e: Event| Msg::SetQuoted(checkbox_checked(&e)))} />
                    {"Quoted fields"}
                </label>
                { build_preview(component) }
                <div class="form-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::CloseAddDialog)}>{"Cancel"}</button>
                    <button class="btn primary" disabled={component.saving}
                        onclick={link.callback(|_| Msg::Create)}>
                        { if component.saving { "Saving..." } else { "Create Contact" } }
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn build_preview(component: &ContactsComponent) -> Html {
    let Some(table) = component.form.table.as_ref().filter(|t| !t.is_blank()) else {
        return html! {};
    };
    html! {
        <div class="preview">
            <p class="muted">
                { format!(
                    "{}: {} rows, {} columns",
                    component.form.file_name().unwrap_or_default(),
                    format_count(table.len()),
                    table.headers.len()
                ) }
            </p>
            { data_table(table, Some(PREVIEW_ROWS)) }
        </div>
    }
}

fn details_dialog(component: &ContactsComponent, link: &Scope<ContactsComponent>) -> Html {
    let list = component.selected_list();
    let title = list.map_or_else(|| "Contact".to_string(), |l| l.name.clone());
    html! {
        <YwMaterialTopSheet
            node_ref={component.details_dialog_ref.clone()}
            title={title}
            on_close={link.callback(|_| Msg::CloseDetails)}
        >
            {
                match list {
                    Some(list) => html! {
                        <>
                            <p>{ list.description.clone() }</p>
                            <p class="muted">{ format!("{} rows", format_count(list.count)) }</p>
                            { data_table(&list.table, None) }
                        </>
                    },
                    None => html! {},
                }
            }
        </YwMaterialTopSheet>
    }
}
