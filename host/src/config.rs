//! Host settings, read from `OUTREACH_*` environment variables. Unset
//! variables fall back to a logged default; a set but unparsable value stops
//! startup.

use log::info;
use outreach_common::config::{ConsoleConfig, DEFAULT_MAX_IMPORT_BYTES};
use std::{env, fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub console: ConsoleConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_import_bytes = DEFAULT_MAX_IMPORT_BYTES.to_string();
        Ok(Self {
            host: try_load(&lookup, "OUTREACH_HOST", "127.0.0.1")?,
            port: try_load(&lookup, "OUTREACH_PORT", "8080")?,
            open_browser: try_load(&lookup, "OUTREACH_OPEN_BROWSER", "true")?,
            console: ConsoleConfig {
                api_base: try_load(&lookup, "OUTREACH_API_BASE", "http://127.0.0.1:8000/api/")?,
                max_import_bytes: try_load(&lookup, "OUTREACH_MAX_IMPORT_BYTES", &max_import_bytes)?,
            },
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.open_browser);
        assert_eq!(config.console.max_import_bytes, DEFAULT_MAX_IMPORT_BYTES);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("OUTREACH_PORT", "9000"),
            ("OUTREACH_API_BASE", "https://api.example.com/"),
            ("OUTREACH_OPEN_BROWSER", "false"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.console.api_base, "https://api.example.com/");
        assert!(!config.open_browser);
    }

    #[test]
    fn unparsable_values_are_errors() {
        let err = Config::from_lookup(lookup(&[("OUTREACH_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "OUTREACH_PORT", .. }));
    }
}
