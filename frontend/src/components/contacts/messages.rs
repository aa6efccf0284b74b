use outreach_common::api::{Ack, ApiError};
use outreach_common::model::contact::ContactResponse;

pub enum Msg {
    Load,
    Loaded(Result<Vec<ContactResponse>, ApiError>),
    OpenAddDialog,
    CloseAddDialog,
    SetName(String),
    SetDescription(String),
    SetQuoted(bool),
    FileSelected(web_sys::File),
    FileRead { ticket: u64, bytes: Vec<u8> },
    FileFailed { ticket: u64, reason: String },
    Create,
    Created(Result<Ack<()>, ApiError>),
    Delete(String),
    Deleted(Result<Ack<()>, ApiError>),
    ShowDetails(String),
    CloseDetails,
}
