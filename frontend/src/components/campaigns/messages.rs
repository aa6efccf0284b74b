use outreach_common::api::{Ack, ApiError};
use outreach_common::forms::campaign::DraftEvent;
use outreach_common::model::campaign::Campaign;

pub enum Msg {
    Load,
    Loaded(Result<Vec<Campaign>, ApiError>),
    OpenComposer,
    CloseComposer,
    /// Any edit to the draft, applied through `CampaignDraft::apply`.
    Draft(DraftEvent),
    Create,
    Created(Result<Ack<()>, ApiError>),
}
