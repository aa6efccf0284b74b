//! Campaigns panel: the campaign table and the composer dialog.
//!
//! The composer's state is a `CampaignDraft`; every input is turned into a
//! `DraftEvent` and applied, so switching contact lists always resets the
//! phone column.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CampaignsProps;
pub use state::CampaignsComponent;

impl Component for CampaignsComponent {
    type Message = Msg;
    type Properties = CampaignsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CampaignsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().contacts != old_props.contacts {
            self.draft = std::mem::take(&mut self.draft).resync(&ctx.props().contacts);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
