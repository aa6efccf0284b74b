//! Request bodies sent to the backend.
//!
//! Field names follow the backend's wire format, which mixes `snake_case`
//! and `camelCase` keys; the Rust side is always `snake_case`.

use crate::model::campaign::{CampaignStatus, ScheduleKind};
use crate::model::table::Table;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `contact/create`. Header and rows travel as JSON-encoded strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateContactRequest {
    pub name: String,
    pub description: String,
    pub header: String,
    pub content: String,
}

impl CreateContactRequest {
    pub fn new(name: &str, description: &str, table: &Table) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            header: serde_json::to_string(&table.headers)?,
            content: serde_json::to_string(&table.rows)?,
        })
    }
}

/// Body of `campaign/create`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateCampaignRequest {
    pub phone_column: String,
    pub contact: String,
    pub message: String,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: String,
    pub scheduled: ScheduleKind,
    pub status: CampaignStatus,
}

/// Body of `auth/update`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub firstname: String,
    pub middlename: String,
    pub lastname: String,
}

/// Body of `auth/update-password`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}
