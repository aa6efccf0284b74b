//! View rendering for the campaigns panel.
//!
//! The composer shows the active header list as clickable badges that append
//! `{header}` tokens to the message, a preview of the message for the first
//! row of the selected list, and a warning for tokens no header resolves.

use outreach_common::forms::campaign::{ComposeState, DraftEvent};
use outreach_common::model::campaign::{Campaign, ScheduleKind};
use outreach_common::model::contact::find_contact;
use outreach_common::template::{preview, token, unknown_tokens};
use yew::html::Scope;
use yew::prelude::*;

use crate::helpers::{input_value, select_value, textarea_value, truncate};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::CampaignsComponent;

const MESSAGE_WIDTH: usize = 60;

pub fn view(component: &CampaignsComponent, ctx: &Context<CampaignsComponent>) -> Html {
    let link = ctx.link();
    html! {
        <section class="panel campaigns-panel">
            <div class="panel-header">
                <h2>{"Campaigns"}</h2>
                <button class="icon-btn wide" onclick={link.callback(|_| Msg::OpenComposer)}>
                    <i class="material-icons">{"campaign"}</i>
                    <span class="icon-label">{"Create Campaign"}</span>
                </button>
            </div>
            { build_table(component, ctx) }
            { composer(component, ctx) }
        </section>
    }
}

fn build_table(component: &CampaignsComponent, ctx: &Context<CampaignsComponent>) -> Html {
    if component.loading && component.campaigns.is_empty() {
        return html! { <p class="muted">{"Loading campaigns..."}</p> };
    }
    if component.campaigns.is_empty() {
        return html! { <p class="muted">{"No campaigns yet."}</p> };
    }
    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"#"}</th>
                    <th>{"Contact"}</th>
                    <th>{"Message"}</th>
                    <th>{"Status"}</th>
                    <th>{"Date"}</th>
                </tr>
            </thead>
            <tbody>
                { for component.campaigns.iter().enumerate().map(|(i, campaign)| html! {
                    <tr key={campaign.id.clone()}>
                        <td>{ i + 1 }</td>
                        <td>{ contact_name(campaign, ctx) }</td>
                        <td title={campaign.message.clone()}>{ truncate(&campaign.message, MESSAGE_WIDTH) }</td>
                        <td>{ status_badge(campaign) }</td>
                        <td>{ campaign.scheduled_date.clone() }</td>
                    </tr>
                }) }
            </tbody>
        </table>
    }
}

fn contact_name(campaign: &Campaign, ctx: &Context<CampaignsComponent>) -> String {
    if !campaign.contact_name.is_empty() {
        return campaign.contact_name.clone();
    }
    find_contact(&ctx.props().contacts, &campaign.contact)
        .map_or_else(|| campaign.contact.clone(), |list| list.name.clone())
}

fn status_badge(campaign: &Campaign) -> Html {
    let class = if campaign.status.is_completed() {
        "badge success"
    } else {
        "badge warning"
    };
    html! { <span class={class}>{ campaign.status.to_string() }</span> }
}

fn composer(component: &CampaignsComponent, ctx: &Context<CampaignsComponent>) -> Html {
    let link = ctx.link();
    let draft = &component.draft;
    let contacts = &ctx.props().contacts;
    let selected_schedule = draft.scheduled.map(ScheduleKind::as_str).unwrap_or_default();

    html! {
        <YwMaterialTopSheet
            node_ref={component.composer_ref.clone()}
            title="Create Campaign"
            on_close={link.callback(|_| Msg::CloseComposer)}
        >
            <div class="form">
                <label>{"Contact"}
                    <select onchange={link.callback(|e: Event| Msg::Draft(DraftEvent::SelectContact {
                        id: select_value(&e),
                        headers: None,
                    }))}>
                        <option value="" selected={draft.contact.is_empty()}>{"Select a contact list"}</option>
                        { for contacts.iter().map(|list| html! {
                            <option value={list.id.clone()} selected={draft.contact == list.id}>
                                { list.name.clone() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>{"Type"}
                    <select onchange={link.callback(|e: Event| {
                        Msg::Draft(DraftEvent::SelectSchedule(ScheduleKind::parse(&select_value(&e))))
                    })}>
                        <option value="" selected={draft.scheduled.is_none()}>{"Select a type"}</option>
                        { for ScheduleKind::ALL.into_iter().map(|kind| html! {
                            <option value={kind.as_str()} selected={selected_schedule == kind.as_str()}>
                                { kind.label() }
                            </option>
                        }) }
                    </select>
                </label>
                { header_badges(component, link) }
                <label>{"Message"}
                    <textarea rows="4" value={draft.message.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Draft(DraftEvent::EditMessage(textarea_value(&e))))} />
                </label>
                { message_checks(component, ctx) }
                <label>{"Phone column"}
                    <select disabled={draft.headers.is_empty()}
                        onchange={link.callback(|e: Event| Msg::Draft(DraftEvent::SelectPhoneColumn(select_value(&e))))}>
                        <option value="" selected={draft.phone_column.is_empty()}>{"Select a column"}</option>
                        { for draft.headers.iter().map(|header| html! {
                            <option value={header.clone()} selected={&draft.phone_column == header}>
                                { header.clone() }
                            </option>
                        }) }
                    </select>
                </label>
                <label>{"Scheduled date"}
                    <input type="datetime-local" value={draft.scheduled_date.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Draft(DraftEvent::SetScheduledDate(input_value(&e))))} />
                </label>
                <div class="form-actions">
                    <button class="btn" onclick={link.callback(|_| Msg::CloseComposer)}>{"Cancel"}</button>
                    <button class="btn primary"
                        disabled={component.saving}
                        title={ if draft.state() == ComposeState::ReadyToSubmit { "" } else { "Some fields are missing" } }
                        onclick={link.callback(|_| Msg::Create)}>
                        { if component.saving { "Saving..." } else { "Create Campaign" } }
                    </button>
                </div>
            </div>
        </YwMaterialTopSheet>
    }
}

fn header_badges(component: &CampaignsComponent, link: &Scope<CampaignsComponent>) -> Html {
    match component.draft.state() {
        ComposeState::NoContactSelected => html! {
            <p class="muted">{"Select a contact list to insert its columns."}</p>
        },
        ComposeState::ContactSelected { headers } => badges(headers, link),
        ComposeState::ReadyToSubmit => badges(&component.draft.headers, link),
    }
}

fn badges(headers: &[String], link: &Scope<CampaignsComponent>) -> Html {
    html! {
        <div class="badges">
            { for headers.iter().map(|header| {
                let name = header.clone();
                html! {
                    <span class="badge clickable" title="Insert into message"
                        onclick={link.callback(move |_| Msg::Draft(DraftEvent::AppendToken(name.clone())))}>
                        { token(header) }
                    </span>
                }
            }) }
        </div>
    }
}

fn message_checks(component: &CampaignsComponent, ctx: &Context<CampaignsComponent>) -> Html {
    let draft = &component.draft;
    if draft.message.trim().is_empty() {
        return html! {};
    }
    let unknown = unknown_tokens(&draft.message, &draft.headers);
    let sample = find_contact(&ctx.props().contacts, &draft.contact)
        .filter(|list| !list.table.is_empty())
        .map(|list| preview(&draft.message, &list.table));

    html! {
        <>
            if !draft.contact.is_empty() && !unknown.is_empty() {
                <p class="warning">
                    { format!("Not a column of this list: {}", unknown.iter().map(|t| token(t)).collect::<Vec<_>>().join(", ")) }
                </p>
            }
            if let Some(sample) = sample {
                <div class="preview">
                    <span class="muted">{"Preview (first row)"}</span>
                    <p>{ sample }</p>
                </div>
            }
        </>
    }
}
