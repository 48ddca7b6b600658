//! Device configuration with defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or applying a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown initial state '{0}'")]
    UnknownState(String),
}

/// Settings for constructing a device.
///
/// Every field is optional in the serialized form.
///
/// ```rust
/// use switchyard::config::DeviceConfig;
///
/// let config = DeviceConfig::from_json(r#"{ "initial": "On" }"#).unwrap();
/// assert_eq!(config.initial.as_deref(), Some("On"));
/// assert!(config.record_history);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Name of the state to start in; the state type's default when absent
    #[serde(default)]
    pub initial: Option<String>,

    /// Whether accepted transitions are kept in the device history
    #[serde(default = "default_record_history")]
    pub record_history: bool,

    /// Upper bound on kept transitions; unbounded when absent
    #[serde(default)]
    pub max_history: Option<usize>,
}

fn default_record_history() -> bool {
    true
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            initial: None,
            record_history: default_record_history(),
            max_history: None,
        }
    }
}

impl DeviceConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidJson(e.to_string()))
    }
}
