use crate::api::Api;
use outreach_common::model::contact::ContactList;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CampaignsProps {
    pub api: Api,
    /// Contact lists offered in the composer.
    #[prop_or_default]
    pub contacts: Vec<ContactList>,
}
