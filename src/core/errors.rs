// src/core/errors.rs

//! Defines the primary error type for the entire crate.

use thiserror::Error;

/// The main error enum, representing all possible failures during a conversion.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
///
/// Both variants are terminal for the invocation that produced them: the caller
/// owns any retry policy, and no output headers are written on failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AttrMapError {
    /// The message body is neither a decoded JSON tree nor a byte stream that
    /// decodes to one, or the decoded tree has the wrong shape for a document.
    #[error("Failed to decode message body as JSON: {0}")]
    BodyDecode(String),

    /// The resolved operation name is not one of the supported store operations.
    #[error("Unsupported operation '{0}'")]
    UnsupportedOperation(String),
}

// --- From trait implementations for easy error conversion ---

impl From<serde_json::Error> for AttrMapError {
    fn from(e: serde_json::Error) -> Self {
        AttrMapError::BodyDecode(e.to_string())
    }
}
