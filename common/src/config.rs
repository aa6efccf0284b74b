use serde::{Deserialize, Serialize};

/// Largest contact file the console will read, unless configured otherwise.
pub const DEFAULT_MAX_IMPORT_BYTES: u64 = 5 * 1024 * 1024;

/// Runtime settings the host hands to the console at
/// `GET /console/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Base URL of the backend API, e.g. `https://example.com/api/`.
    pub api_base: String,
    pub max_import_bytes: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/".to_string(),
            max_import_bytes: DEFAULT_MAX_IMPORT_BYTES,
        }
    }
}

impl ConsoleConfig {
    pub fn accepts_file_size(&self, size: u64) -> bool {
        size <= self.max_import_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: ConsoleConfig =
            serde_json::from_str(r#"{"api_base": "http://x/api"}"#).unwrap();
        assert_eq!(config.api_base, "http://x/api");
        assert_eq!(config.max_import_bytes, DEFAULT_MAX_IMPORT_BYTES);
    }

    #[test]
    fn file_size_limit_is_inclusive() {
        let config = ConsoleConfig {
            max_import_bytes: 10,
            ..ConsoleConfig::default()
        };
        assert!(config.accepts_file_size(10));
        assert!(!config.accepts_file_size(11));
    }
}
