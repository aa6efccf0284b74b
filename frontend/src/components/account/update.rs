use outreach_common::api::Endpoint;
use outreach_common::forms::account::{profile, PasswordForm};
use outreach_common::forms::summary;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{report, show_toast};

use super::messages::Msg;
use super::state::AccountComponent;

pub fn update(component: &mut AccountComponent, ctx: &Context<AccountComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetProfile(field, value) => {
            component.set_profile_field(field, value);
            true
        }
        Msg::SaveProfile => {
            if component.saving_profile {
                return false;
            }
            let request = profile(&component.profile);
            component.saving_profile = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.submit(Endpoint::UpdateProfile, &request).await;
                link.send_message(Msg::ProfileSaved(result));
            });
            true
        }
        Msg::ProfileSaved(Ok(ack)) => {
            component.saving_profile = false;
            show_toast(&ack.message);
            ctx.props().on_saved.emit(component.profile.clone());
            true
        }
        Msg::ProfileSaved(Err(e)) => {
            component.saving_profile = false;
            report("Updating profile", &e);
            true
        }
        Msg::SetPassword(field, value) => {
            component.set_password_field(field, value);
            true
        }
        Msg::SavePassword => {
            if component.saving_password {
                return false;
            }
            let request = match component.passwords.validate() {
                Ok(request) => request,
                Err(errors) => {
                    show_toast(&summary(&errors));
                    return false;
                }
            };
            component.saving_password = true;
            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.submit(Endpoint::UpdatePassword, &request).await;
                link.send_message(Msg::PasswordSaved(result));
            });
            true
        }
        Msg::PasswordSaved(Ok(ack)) => {
            component.saving_password = false;
            component.passwords = PasswordForm::default();
            show_toast(&ack.message);
            true
        }
        Msg::PasswordSaved(Err(e)) => {
            component.saving_password = false;
            report("Updating password", &e);
            true
        }
    }
}
