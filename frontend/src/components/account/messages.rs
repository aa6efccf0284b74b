use outreach_common::api::{Ack, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    Address,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordField {
    Current,
    New,
    Confirm,
}

pub enum Msg {
    SetProfile(ProfileField, String),
    SaveProfile,
    ProfileSaved(Result<Ack<()>, ApiError>),
    SetPassword(PasswordField, String),
    SavePassword,
    PasswordSaved(Result<Ack<()>, ApiError>),
}
