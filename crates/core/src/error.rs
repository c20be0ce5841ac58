//! Error types for the forum data layer
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for data-layer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pagination cursor decode failure
///
/// A malformed cursor is a client error: it is surfaced directly to the
/// caller, never retried, and never fatal to the process. A well-formed
/// cursor that points at a since-deleted record is NOT malformed; the
/// paginator continues from the cursor's values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Cursor string cannot be decoded into the expected two-field shape
    #[error("invalid pagination cursor")]
    Malformed,
}

/// Error types for the forum data layer
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed pagination cursor (client error)
    #[error(transparent)]
    Cursor(#[from] CursorError),

    /// Record store failure, passed through unchanged
    #[error("store error: {0}")]
    Store(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Record not found in its collection
    #[error("{collection} not found: {id}")]
    NotFound {
        /// Collection the lookup ran against
        collection: &'static str,
        /// Id that was requested
        id: String,
    },

    /// Invalid operation or state
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl Error {
    /// True if this error should be reported to the caller as a client error
    ///
    /// Malformed cursors map to a "bad request" style response; everything
    /// else is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Cursor(_))
    }
}
