//! Error types for the rules crate.

use thiserror::Error;

/// Failures raised while loading or validating engine configuration.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, RulesError>;
