//! Client-side form validation. A form that fails validation never reaches
//! the backend; the user gets the full list of problems at once.

pub mod account;
pub mod campaign;
pub mod contact;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("'{0}' is not a column of the selected contact list")]
    UnknownColumn(String),

    #[error("Invalid scheduled date: {0}")]
    InvalidDate(String),

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("The file is larger than {limit} bytes")]
    FileTooLarge { limit: u64 },

    #[error("Could not encode the contact table: {0}")]
    Encoding(String),
}

/// Joins errors into one line for a toast.
pub fn summary(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(". ")
}

pub(crate) fn require(value: &str, field: &'static str, errors: &mut Vec<FormError>) {
    if value.trim().is_empty() {
        errors.push(FormError::Required(field));
    }
}
