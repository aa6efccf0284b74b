use crate::api::Api;
use outreach_common::config::ConsoleConfig;
use outreach_common::model::contact::ContactList;
use yew::prelude::*;

/// Properties for the `ContactsComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ContactsProps {
    pub api: Api,
    /// Import limits handed out by the host.
    pub config: ConsoleConfig,
    /// Receives the full list after every successful load, so the campaign
    /// composer can offer the same contact lists.
    pub on_change: Callback<Vec<ContactList>>,
}
