//! Error types for configuration loading and value parsing.

use thiserror::Error;

/// Errors raised while reading run configuration or parsing enum labels.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("unknown script type '{0}' (expected shell, perl or python)")]
    UnknownScriptType(String),

    #[error("unknown output format '{0}' (expected modern, compatible or minimal)")]
    UnknownOutputFormat(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
