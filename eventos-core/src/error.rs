//! Error types for eventos.

use thiserror::Error;

/// Errors that can occur in store and configuration operations.
#[derive(Error, Debug)]
pub enum EventosError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(u64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse data file {path}: {reason}")]
    DocumentParse { path: String, reason: String },

    #[error("Could not write data file {path}: {reason}")]
    DocumentWrite { path: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Reasons a create or update request is rejected before anything is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    MissingTitle,

    #[error("category is required")]
    MissingCategory,

    #[error("date and time (dateTime) are required")]
    MissingDateTime,

    #[error(
        "Invalid dateTime format. Use ISO 8601: YYYY-MM-DDTHH:mm:ssZ (e.g. 2025-10-16T10:00:00Z)"
    )]
    InvalidDateTime(#[source] TargetError),
}

/// Why a target instant text could not be turned into a concrete instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    #[error("no target date supplied")]
    MissingTarget,

    #[error("'{0}' is not in YYYY-MM-DDTHH:mm:ss[.sss]Z format")]
    InvalidFormat(String),

    #[error("'{0}' is not a valid date/time")]
    UnparsableInstant(String),
}

/// Result type alias for eventos operations.
pub type EventosResult<T> = Result<T, EventosError>;
