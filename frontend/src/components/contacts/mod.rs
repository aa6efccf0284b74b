//! Contacts panel: lists the uploaded contact lists and hosts the dialogs to
//! add one from a delimited file and to inspect a list's full table.
//!
//! Loading starts on first render. Every successful load is reported to the
//! parent through `on_change`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ContactsProps;
pub use state::ContactsComponent;

impl Component for ContactsComponent {
    type Message = Msg;
    type Properties = ContactsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ContactsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
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
