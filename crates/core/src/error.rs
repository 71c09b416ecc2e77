//! Error types for the catasto extraction and calculation library.
//!
//! Missing or malformed field data is never an error: extractors leave the
//! field unset and the calculator skips the month. These variants cover
//! misuse, configuration and the fragment source boundary.

use thiserror::Error;

use crate::classify::DocumentVariant;

/// Primary error type for catasto operations.
#[derive(Error, Debug)]
pub enum CatastoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed fragment source: {0}")]
    MalformedSource(String),

    #[error("invalid year range: {first} > {last}")]
    InvalidYearRange { first: i32, last: i32 },

    #[error("wrong document variant: expected {expected}, got {got:?}")]
    WrongVariant {
        expected: &'static str,
        got: DocumentVariant,
    },
}

/// Convenience Result type alias for CatastoError.
pub type Result<T> = std::result::Result<T, CatastoError>;
