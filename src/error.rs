//! Error types for survey-questions.
//!
//! Malformed documents are not errors: a document with no recognisable
//! structure simply yields no questions. The variants here cover rejected
//! configuration or input.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied `Options` are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The document exceeds the configured size limit.
    #[error("Document too large: {len} bytes (limit {max})")]
    DocumentTooLarge {
        /// Length of the rejected document in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },

    /// A serialized question record violates the record invariants.
    #[error("Invalid question record: {0}")]
    InvalidRecord(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
