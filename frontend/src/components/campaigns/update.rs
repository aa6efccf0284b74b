use gloo_console::error;
use outreach_common::api::Endpoint;
use outreach_common::forms::campaign::{CampaignDraft, DraftEvent};
use outreach_common::forms::summary;
use outreach_common::model::campaign::Campaign;
use outreach_common::model::{split_valid, Lenient};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{report, show_toast};
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::CampaignsComponent;

pub fn update(component: &mut CampaignsComponent, ctx: &Context<CampaignsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api
                    .fetch::<Vec<Lenient<Campaign>>>(Endpoint::ListCampaigns)
                    .await
                    .map(|ack| {
                        let (campaigns, invalid) = split_valid(ack.result);
                        for reason in invalid {
                            error!(format!("skipping malformed campaign: {}", reason));
                        }
                        campaigns
                    });
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(result) => {
            component.loading = false;
            match result {
                Ok(campaigns) => component.campaigns = campaigns,
                Err(e) => report("Loading campaigns", &e),
            }
            true
        }
        Msg::OpenComposer => {
            open_top_sheet(component.composer_ref.clone());
            false
        }
        Msg::CloseComposer => {
            component.draft = CampaignDraft::default();
            close_top_sheet(component.composer_ref.clone());
            true
        }
        Msg::Draft(event) => {
            // Contact ids from the select are resolved against the current
            // lists here, so the draft always gets that list's headers.
            let event = match event {
                DraftEvent::SelectContact { id, .. } => {
                    DraftEvent::select_from(&ctx.props().contacts, &id)
                }
                other => other,
            };
            component.draft = std::mem::take(&mut component.draft).apply(event);
            true
        }
        Msg::Create => {
            if component.saving {
                return false;
            }
            let request = match component.draft.validate() {
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
                let result = api.submit(Endpoint::CreateCampaign, &request).await;
                link.send_message(Msg::Created(result));
            });
            true
        }
        Msg::Created(Ok(ack)) => {
            component.saving = false;
            show_toast(&ack.message);
            ctx.link()
                .send_message_batch(vec![Msg::CloseComposer, Msg::Load]);
            true
        }
        Msg::Created(Err(e)) => {
            component.saving = false;
            report("Creating campaign", &e);
            true
        }
    }
}
