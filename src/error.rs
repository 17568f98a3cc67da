//! Error types for CartKit Core
//!
//! Codec and storage helpers return [`ListError`]; store mutations absorb
//! these locally (log and continue) instead of propagating them, so callers
//! never need recovery logic.

use thiserror::Error;

/// Errors surfaced by the persistence codec
#[derive(Debug, Error)]
pub enum ListError {
    /// A collection could not be serialized for storage
    #[error("Encode error: {0}")]
    Encode(String),

    /// Persisted bytes could not be decoded into a collection
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias using ListError
pub type Result<T> = std::result::Result<T, ListError>;
