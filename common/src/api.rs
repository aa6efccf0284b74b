//! The backend's request/response contract.
//!
//! Every endpoint answers with the same envelope,
//! `{"status": bool, "message": string, "result": any?}`. This module turns
//! that envelope into a `Result` once, at the boundary, so callers only ever
//! see an [`Ack`] carrying a typed result or an [`ApiError`].

use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// Backend routes used by the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    UpdateProfile,
    UpdatePassword,
    CreateContact,
    ListContacts,
    DeleteContact(String),
    CreateCampaign,
    ListCampaigns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Endpoint {
    /// Path relative to the API base URL.
    pub fn path(&self) -> String {
        match self {
            Self::Login => "auth/login".to_string(),
            Self::UpdateProfile => "auth/update".to_string(),
            Self::UpdatePassword => "auth/update-password".to_string(),
            Self::CreateContact => "contact/create".to_string(),
            Self::ListContacts => "contact/get".to_string(),
            Self::DeleteContact(id) => format!("contact/delete/{}", id),
            Self::CreateCampaign => "campaign/create".to_string(),
            Self::ListCampaigns => "campaign/get".to_string(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::ListContacts | Self::DeleteContact(_) | Self::ListCampaigns => Method::Get,
            _ => Method::Post,
        }
    }

    /// Absolute URL under `api_base`, which may or may not end in `/`.
    pub fn url(&self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: bool,
    #[serde(default)]
    message: String,
    #[serde(default)]
    result: Option<serde_json::Value>,
}

/// A successful backend reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Ack<T> {
    /// User-facing confirmation text.
    pub message: String,
    pub result: T,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered `status: false`.
    #[error("{message}")]
    Rejected { message: String },

    /// The request never produced a response body.
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the expected envelope or result shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text shown to the user. Only backend rejections carry a message meant
    /// for users; everything else gets a generic one.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message } => message.clone(),
            Self::Transport(_) | Self::Decode(_) => {
                "Something went wrong, please try again.".to_string()
            }
        }
    }
}

fn envelope(body: &str) -> Result<Envelope, ApiError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.status {
        return Err(ApiError::Rejected {
            message: envelope.message,
        });
    }
    Ok(envelope)
}

/// Decodes a reply whose `result` is required.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Ack<T>, ApiError> {
    let envelope = envelope(body)?;
    let raw = envelope
        .result
        .ok_or_else(|| ApiError::Decode("missing result".to_string()))?;
    let result = serde_json::from_value(raw).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(Ack {
        message: envelope.message,
        result,
    })
}

/// Decodes a reply where only the status and message matter.
pub fn decode_unit(body: &str) -> Result<Ack<()>, ApiError> {
    let envelope = envelope(body)?;
    Ok(Ack {
        message: envelope.message,
        result: (),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::ContactResponse;
    use pretty_assertions::assert_eq;

    #[test]
    fn endpoint_paths_and_methods() {
        assert_eq!(Endpoint::DeleteContact("9".into()).path(), "contact/delete/9");
        assert_eq!(Endpoint::DeleteContact("9".into()).method(), Method::Get);
        assert_eq!(Endpoint::CreateCampaign.method(), Method::Post);
        assert_eq!(Endpoint::ListCampaigns.path(), "campaign/get");
    }

    #[test]
    fn url_joins_with_single_slash() {
        assert_eq!(
            Endpoint::ListContacts.url("http://api.test/api/"),
            "http://api.test/api/contact/get"
        );
        assert_eq!(
            Endpoint::ListContacts.url("http://api.test/api"),
            "http://api.test/api/contact/get"
        );
    }

    #[test]
    fn decodes_typed_result() {
        let body = r#"{"status": true, "message": "ok", "result": [
            {"id": "1", "name": "A", "description": "", "header": "[]", "content": "[]"}
        ]}"#;
        let ack = decode::<Vec<ContactResponse>>(body).unwrap();
        assert_eq!(ack.message, "ok");
        assert_eq!(ack.result.len(), 1);
    }

    #[test]
    fn status_false_is_a_rejection_with_backend_message() {
        let err = decode_unit(r#"{"status": false, "message": "Name taken"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: "Name taken".into()
            }
        );
        assert_eq!(err.user_message(), "Name taken");
    }

    #[test]
    fn missing_result_is_a_decode_error() {
        let err = decode::<Vec<String>>(r#"{"status": true, "message": "ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let err = decode_unit("<html>502</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.user_message(), "Something went wrong, please try again.");
    }

    #[test]
    fn unit_decode_ignores_result() {
        let ack = decode_unit(r#"{"status": true, "message": "Deleted", "result": {"x": 1}}"#)
            .unwrap();
        assert_eq!(ack.message, "Deleted");
    }
}
