//! Engine configuration, loaded from an optional TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, RulesError};
use crate::profile::DEFAULT_USER_NAME;

/// Tunables shared by every session a host creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum activity log entries kept per session.
    pub log_capacity: usize,

    /// How many entries the show-log intent renders.
    pub recent_log_entries: usize,

    /// Name used before the user introduces themselves.
    pub default_user_name: String,

    pub bot_name: String,

    /// Fixed RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_capacity: 100,
            recent_log_entries: 10,
            default_user_name: DEFAULT_USER_NAME.to_string(),
            bot_name: "AwarenessBot".to_string(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RulesError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Check the values a session relies on.
    pub fn validate(&self) -> Result<()> {
        if self.log_capacity == 0 {
            return Err(RulesError::InvalidConfig {
                field: "log_capacity",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.default_user_name.trim().is_empty() {
            return Err(RulesError::InvalidConfig {
                field: "default_user_name",
                reason: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.log_capacity, 100);
        assert_eq!(config.recent_log_entries, 10);
        assert_eq!(config.default_user_name, "User");
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = EngineConfig::from_toml_str("seed = 42\nbot_name = \"Sentry\"").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bot_name, "Sentry");
        assert_eq!(config.log_capacity, 100);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = EngineConfig::from_toml_str("log_capacity = 0").unwrap_err();
        assert!(matches!(
            err,
            RulesError::InvalidConfig {
                field: "log_capacity",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_bad_toml() {
        let err = EngineConfig::from_toml_str("log_capacity = \"many\"").unwrap_err();
        assert!(matches!(err, RulesError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, RulesError::ConfigRead { .. }));
    }
}
