//! Browser client for the backend API.
//!
//! Every call goes through [`Api::request`], which attaches the session's
//! bearer token and hands the raw body to the shared envelope decoder. Call
//! sites only ever see `Result<Ack<T>, ApiError>`.

use gloo_console::error;
use gloo_net::http::Request;
use outreach_common::api::{decode, decode_unit, Ack, ApiError, Endpoint, Method};
use outreach_common::config::ConsoleConfig;
use outreach_common::session::Session;
use serde::de::DeserializeOwned;
use serde::Serialize;

const CONFIG_URL: &str = "/console/config.json";

#[derive(Clone, Debug, PartialEq)]
pub struct Api {
    base: String,
    bearer: Option<String>,
}

impl Api {
    pub fn new(config: &ConsoleConfig, session: &Session) -> Self {
        Self {
            base: config.api_base.clone(),
            bearer: session.bearer(),
        }
    }

    /// Calls an endpoint that answers with a typed `result`.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<Ack<T>, ApiError> {
        let body = self.request::<()>(&endpoint, None).await?;
        decode(&body)
    }

    /// Posts `payload` and decodes a typed `result`.
    pub async fn submit_for<T, B>(&self, endpoint: Endpoint, payload: &B) -> Result<Ack<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let body = self.request(&endpoint, Some(payload)).await?;
        decode(&body)
    }

    /// Posts `payload` when only the acknowledgement matters.
    pub async fn submit<B: Serialize>(&self, endpoint: Endpoint, payload: &B) -> Result<Ack<()>, ApiError> {
        let body = self.request(&endpoint, Some(payload)).await?;
        decode_unit(&body)
    }

    /// Calls a bodiless endpoint when only the acknowledgement matters.
    pub async fn call(&self, endpoint: Endpoint) -> Result<Ack<()>, ApiError> {
        let body = self.request::<()>(&endpoint, None).await?;
        decode_unit(&body)
    }

    async fn request<B: Serialize>(&self, endpoint: &Endpoint, payload: Option<&B>) -> Result<String, ApiError> {
        let url = endpoint.url(&self.base);
        let mut builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        if let Some(bearer) = &self.bearer {
            builder = builder.header("Authorization", bearer);
        }
        let request = match payload {
            Some(payload) => builder.json(payload),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request.send().await.map_err(|e| {
            error!(format!("{} {}: {}", endpoint, url, e));
            ApiError::Transport(e.to_string())
        })?;
        response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

/// Loads the host-provided settings, falling back to defaults when the
/// console is served from somewhere else.
pub async fn load_config() -> ConsoleConfig {
    let response = match Request::get(CONFIG_URL).send().await {
        Ok(resp) if resp.ok() => resp,
        Ok(resp) => {
            error!(format!("{} answered {}, using defaults", CONFIG_URL, resp.status()));
            return ConsoleConfig::default();
        }
        Err(e) => {
            error!(format!("{} unavailable: {}, using defaults", CONFIG_URL, e));
            return ConsoleConfig::default();
        }
    };
    response.json::<ConsoleConfig>().await.unwrap_or_else(|e| {
        error!(format!("{} is not valid: {}, using defaults", CONFIG_URL, e));
        ConsoleConfig::default()
    })
}
