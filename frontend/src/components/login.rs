use outreach_common::api::{Ack, ApiError, Endpoint};
use outreach_common::forms::account::login;
use outreach_common::forms::summary;
use outreach_common::model::user::AuthUser;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::Api;
use crate::helpers::{input_value, report, show_toast};

#[derive(Properties, PartialEq, Clone)]
pub struct LoginProps {
    pub api: Api,
    /// Receives the authenticated user; the owner starts the session.
    pub on_login: Callback<AuthUser>,
}

pub enum Msg {
    SetUsername(String),
    SetPassword(String),
    Submit,
    Done(Result<Ack<AuthUser>, ApiError>),
}

#[derive(Default)]
pub struct LoginComponent {
    username: String,
    password: String,
    submitting: bool,
}

impl Component for LoginComponent {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetUsername(username) => self.username = username,
            Msg::SetPassword(password) => self.password = password,
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                let request = match login(&self.username, &self.password) {
                    Ok(request) => request,
                    Err(errors) => {
                        show_toast(&summary(&errors));
                        return false;
                    }
                };
                self.submitting = true;
                let api = ctx.props().api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.submit_for(Endpoint::Login, &request).await;
                    link.send_message(Msg::Done(result));
                });
            }
            Msg::Done(Ok(ack)) => {
                self.submitting = false;
                self.password.clear();
                show_toast(&ack.message);
                ctx.props().on_login.emit(ack.result);
            }
            Msg::Done(Err(e)) => {
                self.submitting = false;
                report("Signing in", &e);
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="panel login-panel">
                <h2>{"Sign in"}</h2>
                <form class="form" onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <label>{"Username"}
                        <input type="text" autocomplete="username" value={self.username.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetUsername(input_value(&e)))} />
                    </label>
                    <label>{"Password"}
                        <input type="password" autocomplete="current-password" value={self.password.clone()}
                            oninput={link.callback(|e: InputEvent| Msg::SetPassword(input_value(&e)))} />
                    </label>
                    <div class="form-actions">
                        <button class="btn primary" type="submit" disabled={self.submitting}>
                            { if self.submitting { "Signing in..." } else { "Sign in" } }
                        </button>
                    </div>
                </form>
            </section>
        }
    }
}
