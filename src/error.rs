//! Error types for the crate.
//!
//! Parsing a report never fails; these only surface at the edges where a
//! caller hands us a code or a serialized record to interpret.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataParseError {
    #[error("invalid string: {0}")]
    InvalidString(String),

    #[error("invalid runway designator: {0}")]
    InvalidRunway(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, DataParseError>;
