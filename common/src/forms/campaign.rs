//! Campaign composition.
//!
//! ```text
//! NoContactSelected ──select contact──▶ ContactSelected(headers) ──all fields set──▶ ReadyToSubmit
//!         ▲                                   │  ▲
//!         └───────── clear contact ───────────┘  └── select another contact (phone column reset)
//! ```
//!
//! [`CampaignDraft::apply`] is the only way the draft changes. Choosing a
//! contact list swaps the active header list and always drops the phone
//! column, since the old choice may name a header the new list lacks.

use super::{FormError, require};
use crate::model::campaign::{CampaignStatus, ScheduleKind};
use crate::model::contact::{ContactList, find_contact};
use crate::model::table::HeaderList;
use crate::requests::CreateCampaignRequest;
use crate::template::append_token;
use chrono::NaiveDateTime;

const INPUT_DATE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignDraft {
    pub contact: String,
    /// Headers of the selected contact list.
    pub headers: HeaderList,
    pub phone_column: String,
    pub message: String,
    pub scheduled: Option<ScheduleKind>,
    /// Value of the `datetime-local` input, e.g. `2024-05-01T10:30`.
    pub scheduled_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// `headers` is `None` when the id is not a known contact list.
    SelectContact {
        id: String,
        headers: Option<HeaderList>,
    },
    SelectPhoneColumn(String),
    EditMessage(String),
    AppendToken(String),
    SelectSchedule(Option<ScheduleKind>),
    SetScheduledDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeState<'a> {
    NoContactSelected,
    ContactSelected { headers: &'a [String] },
    ReadyToSubmit,
}

impl DraftEvent {
    /// Builds the event for choosing `id` from `lists`.
    pub fn select_from(lists: &[ContactList], id: &str) -> Self {
        Self::SelectContact {
            id: id.to_string(),
            headers: find_contact(lists, id).map(|c| c.headers().clone()),
        }
    }
}

impl CampaignDraft {
    pub fn apply(self, event: DraftEvent) -> Self {
        match event {
            DraftEvent::SelectContact { id, headers } => Self {
                headers: if id.is_empty() {
                    Vec::new()
                } else {
                    headers.unwrap_or_default()
                },
                contact: id,
                phone_column: String::new(),
                ..self
            },
            DraftEvent::SelectPhoneColumn(column) => {
                let phone_column = if self.headers.contains(&column) {
                    column
                } else {
                    String::new()
                };
                Self {
                    phone_column,
                    ..self
                }
            }
            DraftEvent::EditMessage(message) => Self { message, ..self },
            DraftEvent::AppendToken(header) => Self {
                message: append_token(&self.message, &header),
                ..self
            },
            DraftEvent::SelectSchedule(scheduled) => Self { scheduled, ..self },
            DraftEvent::SetScheduledDate(scheduled_date) => Self {
                scheduled_date,
                ..self
            },
        }
    }

    /// Re-reads the selected list's headers after `lists` was reloaded. The
    /// phone column survives only if the new headers still contain it.
    pub fn resync(self, lists: &[ContactList]) -> Self {
        if self.contact.is_empty() {
            return self;
        }
        let headers = find_contact(lists, &self.contact)
            .map(|c| c.headers().clone())
            .unwrap_or_default();
        let phone_column = if headers.contains(&self.phone_column) {
            self.phone_column
        } else {
            String::new()
        };
        Self {
            headers,
            phone_column,
            ..self
        }
    }

    pub fn state(&self) -> ComposeState<'_> {
        if self.contact.is_empty() {
            ComposeState::NoContactSelected
        } else if self.problems().is_empty() {
            ComposeState::ReadyToSubmit
        } else {
            ComposeState::ContactSelected {
                headers: &self.headers,
            }
        }
    }

    /// Everything that keeps the draft from being submitted.
    pub fn problems(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        require(&self.contact, "Contact", &mut errors);
        if self.scheduled.is_none() {
            errors.push(FormError::Required("Scheduled type"));
        }
        require(&self.message, "Message", &mut errors);
        if self.phone_column.is_empty() {
            errors.push(FormError::Required("Phone column"));
        } else if !self.headers.contains(&self.phone_column) {
            errors.push(FormError::UnknownColumn(self.phone_column.clone()));
        }
        if self.scheduled_date.trim().is_empty() {
            errors.push(FormError::Required("Scheduled date"));
        } else if let Err(e) = format_scheduled_date(&self.scheduled_date) {
            errors.push(e);
        }
        errors
    }

    /// Produces the request body, or every reason it cannot be sent yet.
    pub fn validate(&self) -> Result<CreateCampaignRequest, Vec<FormError>> {
        let errors = self.problems();
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(scheduled), Ok(scheduled_date)) =
            (self.scheduled, format_scheduled_date(&self.scheduled_date))
        else {
            return Err(self.problems());
        };
        Ok(CreateCampaignRequest {
            phone_column: self.phone_column.clone(),
            contact: self.contact.clone(),
            message: self.message.clone(),
            scheduled_date,
            scheduled,
            status: CampaignStatus::Pending,
        })
    }
}

/// Converts a `datetime-local` value into the backend's
/// `YYYY-MM-DD HH:MM:SS` format.
pub fn format_scheduled_date(input: &str) -> Result<String, FormError> {
    let input = input.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|date| date.format(WIRE_DATE_FORMAT).to_string())
        .ok_or_else(|| FormError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::table::Table;
    use pretty_assertions::assert_eq;

    fn list(id: &str, headers: &[&str]) -> ContactList {
        ContactList {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
            table: Table::new(headers.iter().map(|h| h.to_string()).collect(), vec![]),
            count: 0,
        }
    }

    fn lists() -> Vec<ContactList> {
        vec![list("a", &["name", "phone"]), list("b", &["email"])]
    }

    fn complete() -> CampaignDraft {
        CampaignDraft::default()
            .apply(DraftEvent::select_from(&lists(), "a"))
            .apply(DraftEvent::SelectPhoneColumn("phone".into()))
            .apply(DraftEvent::EditMessage("Hello ".into()))
            .apply(DraftEvent::AppendToken("name".into()))
            .apply(DraftEvent::SelectSchedule(Some(ScheduleKind::Scheduled)))
            .apply(DraftEvent::SetScheduledDate("2024-05-01T10:30".into()))
    }

    #[test]
    fn starts_with_no_contact() {
        assert_eq!(CampaignDraft::default().state(), ComposeState::NoContactSelected);
    }

    #[test]
    fn selecting_contact_exposes_its_headers() {
        let draft = CampaignDraft::default().apply(DraftEvent::select_from(&lists(), "a"));
        assert_eq!(
            draft.state(),
            ComposeState::ContactSelected {
                headers: &["name".to_string(), "phone".to_string()]
            }
        );
    }

    #[test]
    fn switching_contact_clears_phone_column() {
        let draft = CampaignDraft::default()
            .apply(DraftEvent::select_from(&lists(), "a"))
            .apply(DraftEvent::SelectPhoneColumn("phone".into()));
        assert_eq!(draft.phone_column, "phone");

        let draft = draft.apply(DraftEvent::select_from(&lists(), "b"));
        assert_eq!(draft.headers, vec!["email".to_string()]);
        assert_eq!(draft.phone_column, "");
    }

    #[test]
    fn reselecting_same_contact_also_resets_phone_column() {
        let draft = complete().apply(DraftEvent::select_from(&lists(), "a"));
        assert_eq!(draft.phone_column, "");
        assert!(draft.problems().contains(&FormError::Required("Phone column")));
    }

    #[test]
    fn unknown_contact_id_leaves_no_headers() {
        let draft = CampaignDraft::default().apply(DraftEvent::select_from(&lists(), "zz"));
        assert_eq!(draft.contact, "zz");
        assert!(draft.headers.is_empty());
    }

    #[test]
    fn clearing_contact_returns_to_initial_state() {
        let draft = complete().apply(DraftEvent::select_from(&lists(), ""));
        assert_eq!(draft.state(), ComposeState::NoContactSelected);
        assert!(draft.headers.is_empty());
    }

    #[test]
    fn reload_without_selected_list_drops_its_headers() {
        let draft = complete().resync(&[list("b", &["email"])]);
        assert!(draft.headers.is_empty());
        assert_eq!(draft.phone_column, "");
        assert!(draft.problems().contains(&FormError::Required("Phone column")));
    }

    #[test]
    fn reload_keeps_phone_column_still_in_headers() {
        let draft = complete().resync(&[list("a", &["phone", "city"])]);
        assert_eq!(draft.headers, vec!["phone".to_string(), "city".to_string()]);
        assert_eq!(draft.phone_column, "phone");

        let draft = draft.resync(&[list("a", &["mobile"])]);
        assert_eq!(draft.headers, vec!["mobile".to_string()]);
        assert_eq!(draft.phone_column, "");
    }

    #[test]
    fn reload_with_no_contact_is_a_no_op() {
        let draft = CampaignDraft::default().resync(&lists());
        assert_eq!(draft, CampaignDraft::default());
    }

    #[test]
    fn phone_column_must_be_an_active_header() {
        let draft = CampaignDraft::default()
            .apply(DraftEvent::select_from(&lists(), "b"))
            .apply(DraftEvent::SelectPhoneColumn("phone".into()));
        assert_eq!(draft.phone_column, "");
    }

    #[test]
    fn append_token_extends_message() {
        let draft = CampaignDraft::default()
            .apply(DraftEvent::EditMessage("Hi ".into()))
            .apply(DraftEvent::AppendToken("name".into()))
            .apply(DraftEvent::AppendToken("name".into()));
        assert_eq!(draft.message, "Hi {name}{name}");
    }

    #[test]
    fn complete_draft_is_ready_and_validates() {
        let draft = complete();
        assert_eq!(draft.state(), ComposeState::ReadyToSubmit);

        let request = draft.validate().unwrap();
        assert_eq!(request.contact, "a");
        assert_eq!(request.phone_column, "phone");
        assert_eq!(request.message, "Hello {name}");
        assert_eq!(request.scheduled_date, "2024-05-01 10:30:00");
        assert_eq!(request.status, CampaignStatus::Pending);
    }

    #[test]
    fn empty_draft_reports_every_missing_field() {
        let errors = CampaignDraft::default().validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FormError::Required("Contact"),
                FormError::Required("Scheduled type"),
                FormError::Required("Message"),
                FormError::Required("Phone column"),
                FormError::Required("Scheduled date"),
            ]
        );
    }

    #[test]
    fn whitespace_message_is_missing() {
        let draft = complete().apply(DraftEvent::EditMessage("   ".into()));
        assert_eq!(draft.validate().unwrap_err(), vec![FormError::Required("Message")]);
    }

    #[test]
    fn scheduled_date_formats() {
        assert_eq!(format_scheduled_date("2024-05-01T10:30").unwrap(), "2024-05-01 10:30:00");
        assert_eq!(format_scheduled_date("2024-05-01T10:30:15").unwrap(), "2024-05-01 10:30:15");
        assert_eq!(format_scheduled_date("2024-05-01 10:30:15").unwrap(), "2024-05-01 10:30:15");
        assert!(matches!(
            format_scheduled_date("tomorrow"),
            Err(FormError::InvalidDate(_))
        ));
    }
}
