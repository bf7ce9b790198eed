use crate::engine::WalkConfig;
use crate::error::GraphError;
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings for conversation handling, loadable from a JSON file.
///
/// ```json
/// { "timeoutMinutes": 30, "walk": { "maxSteps": 64 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    /// How long a parked conversation waits for an answer. Zero or less disables the timeout.
    pub timeout_minutes: i64,
    pub walk: WalkConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_minutes: 60,
            walk: WalkConfig::default(),
        }
    }
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::JsonParse(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The deadline for a conversation parked at `now`.
    pub fn timeout_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        if self.timeout_minutes <= 0 {
            return None;
        }
        TimeDelta::try_minutes(self.timeout_minutes).and_then(|delta| now.checked_add_signed(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SessionConfig::from_json(r#"{ "walk": { "maxSteps": 8 } }"#).unwrap();
        assert_eq!(config.timeout_minutes, 60);
        assert_eq!(config.walk.max_steps, 8);
    }

    #[test]
    fn non_positive_timeout_disables_deadline() {
        let config = SessionConfig {
            timeout_minutes: 0,
            ..SessionConfig::default()
        };
        assert_eq!(config.timeout_at(Utc::now()), None);
    }
}
