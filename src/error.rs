// src/error.rs

use thiserror::Error;

/// Failures of the layers around the engine: reading and checking plan
/// inputs, and writing reports. The engine itself cannot fail.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("invalid date `{value}`: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("failed to parse plan file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

impl PlanError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PlanError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
