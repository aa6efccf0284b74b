use crate::model::{id_string, string_or_null};
use serde::{Deserialize, Serialize};
use std::fmt;

/// When a campaign goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleKind {
    /// Saved for later; sent manually.
    Save,
    /// Sent automatically at the scheduled date.
    Scheduled,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 2] = [ScheduleKind::Save, ScheduleKind::Scheduled];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Save => "save",
            Self::Scheduled => "scheduled",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Save => "Save for Later",
            Self::Scheduled => "Schedule",
        }
    }

    /// Parses the value of a schedule `<select>`; empty or unknown is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }
}

/// Delivery status reported by the backend. Statuses this console does not
/// know about are kept as they were sent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CampaignStatus {
    #[default]
    Pending,
    Completed,
    Other(String),
}

impl CampaignStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Other(status) => status,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl From<String> for CampaignStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Pending" => Self::Pending,
            "Completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A campaign as listed by `campaign/get`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub message: String,
    pub scheduled: ScheduleKind,
    /// Empty when the backend has no date for the campaign.
    #[serde(rename = "scheduledDate", default, deserialize_with = "string_or_null")]
    pub scheduled_date: String,
    #[serde(deserialize_with = "id_string")]
    pub contact: String,
    #[serde(rename = "contactName", default)]
    pub contact_name: String,
    #[serde(rename = "phone_column", default)]
    pub phone_column: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
}
