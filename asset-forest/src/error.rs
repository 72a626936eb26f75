//! Error types for the asset forest

use thiserror::Error;

/// Result type for fallible asset forest operations
pub type Result<T> = std::result::Result<T, ForestError>;

/// Errors that can occur while preparing a forest.
///
/// Building and querying a forest never fails; unresolvable records are
/// dropped and lookups return `None`. Only configuration can be rejected.
#[derive(Debug, Error)]
pub enum ForestError {
    /// Configuration could not be read or extracted
    #[error("failed to load configuration: {source}")]
    Config {
        #[from]
        source: figment::Error,
    },

    /// Configuration was read but holds an unusable value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ForestError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
