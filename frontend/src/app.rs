//! Root component: owns the session and the console configuration, and
//! switches between the login screen and the signed-in pages.

use crate::api::{load_config, Api};
use crate::components::account::AccountComponent;
use crate::components::campaigns::CampaignsComponent;
use crate::components::contacts::ContactsComponent;
use crate::components::login::LoginComponent;
use crate::helpers::show_toast;
use crate::storage::LocalStore;
use gloo_console::error;
use outreach_common::config::ConsoleConfig;
use outreach_common::model::contact::ContactList;
use outreach_common::model::user::AuthUser;
use outreach_common::session::Session;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Account,
}

pub enum Msg {
    ConfigLoaded(ConsoleConfig),
    Navigate(Page),
    LoggedIn(AuthUser),
    ProfileSaved(AuthUser),
    Logout,
    ContactsChanged(Vec<ContactList>),
}

pub struct App {
    config: Option<ConsoleConfig>,
    session: Session,
    store: LocalStore,
    page: Page,
    contacts: Vec<ContactList>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let store = LocalStore;
        let session = Session::restore(&store).unwrap_or_else(|e| {
            error!(format!("could not restore session: {}", e));
            Session::default()
        });
        ctx.link()
            .send_future(async { Msg::ConfigLoaded(load_config().await) });
        Self {
            config: None,
            session,
            store,
            page: Page::Home,
            contacts: Vec::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
            Msg::Navigate(page) => {
                self.page = page;
                true
            }
            Msg::LoggedIn(user) => {
                if let Err(e) = self.session.login(&self.store, user) {
                    error!(format!("could not persist session: {}", e));
                }
                self.page = Page::Home;
                true
            }
            Msg::ProfileSaved(profile) => {
                if let Err(e) = self.session.update_user(&self.store, profile) {
                    error!(format!("could not persist profile: {}", e));
                }
                true
            }
            Msg::Logout => {
                if let Err(e) = self.session.logout(&self.store) {
                    error!(format!("could not clear session: {}", e));
                }
                self.contacts.clear();
                self.page = Page::Home;
                show_toast("Signed out.");
                true
            }
            Msg::ContactsChanged(contacts) => {
                self.contacts = contacts;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(config) = &self.config else {
            return html! { <div class="loading">{"Loading..."}</div> };
        };
        let link = ctx.link();
        let api = Api::new(config, &self.session);

        let Some(user) = self.session.user().filter(|_| self.session.is_authenticated()) else {
            return html! {
                <div class="app-root">
                    <LoginComponent api={api} on_login={link.callback(Msg::LoggedIn)} />
                </div>
            };
        };

        let page = match self.page {
            Page::Home => html! {
                <div class="home">
                    <ContactsComponent
                        api={api.clone()}
                        config={config.clone()}
                        on_change={link.callback(Msg::ContactsChanged)}
                    />
                    <CampaignsComponent api={api} contacts={self.contacts.clone()} />
                </div>
            },
            Page::Account => html! {
                <AccountComponent
                    api={api}
                    user={user.clone()}
                    on_saved={link.callback(Msg::ProfileSaved)}
                />
            },
        };

        html! {
            <div class="app-root">
                <nav class="top-bar">
                    { nav_button("home", "Home", self.page == Page::Home, link.callback(|_| Msg::Navigate(Page::Home))) }
                    { nav_button("person", "Account", self.page == Page::Account, link.callback(|_| Msg::Navigate(Page::Account))) }
                    <span class="user-name">{ user.display_name() }</span>
                    { nav_button("logout", "Logout", false, link.callback(|_| Msg::Logout)) }
                </nav>
                { page }
            </div>
        }
    }
}

fn nav_button(icon: &str, label: &str, active: bool, on_click: Callback<MouseEvent>) -> Html {
    let class = if active { "icon-btn active" } else { "icon-btn" };
    html! {
        <button class={class} onclick={on_click}>
            <i class="material-icons">{ icon.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
