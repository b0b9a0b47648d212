//! Error types for the biomax_core library.
//!
//! Formula guards never surface here: a formula that cannot be evaluated
//! reports `None` for its own entry. Errors are reserved for bad record
//! construction, unknown block names and the configuration/input plumbing.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for biomax_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A measurement was missing, non-numeric or not finite
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Block identifier not in the catalog
    #[error("Unknown block '{0}' (expected one of: anthropometry, energy, cardio, renal, lipid, insulin, pharmacokinetics, all)")]
    UnknownBlock(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
