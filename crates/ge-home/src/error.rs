//! Error types for the GE Home integration

use ge_erd::ErdError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading the integration config
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML
    #[error("failed to parse YAML: {0}")]
    ParseYaml(#[from] serde_yaml::Error),

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

/// Why a start/stop command or state read did not go through
///
/// These never reach the host; the switch logs them and falls back to a
/// safe default.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartStopError {
    /// The dishwasher has not been armed for remote start
    #[error("remote start is not enabled")]
    RemoteStartDisabled,

    /// Register access failed
    #[error(transparent)]
    Erd(#[from] ErdError),
}
