use crate::api::Api;
use outreach_common::model::user::AuthUser;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AccountProps {
    pub api: Api,
    /// The signed-in user; the form edits a copy.
    pub user: AuthUser,
    /// Receives the edited profile once the backend accepted it.
    pub on_saved: Callback<AuthUser>,
}
