//! Account page: profile details and password change, each with its own
//! form, flag and request.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AccountProps;
pub use state::AccountComponent;

impl Component for AccountComponent {
    type Message = Msg;
    type Properties = AccountProps;

    fn create(ctx: &Context<Self>) -> Self {
        AccountComponent::new(&ctx.props().user)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().user != old_props.user {
            self.profile = ctx.props().user.clone();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
