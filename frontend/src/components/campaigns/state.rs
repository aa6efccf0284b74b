use outreach_common::forms::campaign::CampaignDraft;
use outreach_common::model::campaign::Campaign;
use yew::prelude::*;

pub struct CampaignsComponent {
    pub campaigns: Vec<Campaign>,
    pub loading: bool,
    pub saving: bool,
    pub draft: CampaignDraft,
    pub composer_ref: NodeRef,
}

impl CampaignsComponent {
    pub fn new() -> Self {
        Self {
            campaigns: Vec::new(),
            loading: false,
            saving: false,
            draft: CampaignDraft::default(),
            composer_ref: NodeRef::default(),
        }
    }
}
