//! Error types for STL decoding.

use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while decoding an STL buffer.
///
/// Every variant aborts the decode; no partial mesh is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// The input buffer is empty or otherwise unusable.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// Binary layout does not reconcile with the buffer length.
    ///
    /// Raised for a truncated header, a declared triangle count that does
    /// not match the buffer, or a record cut short mid-stream.
    #[error("malformed binary STL: expected {expected} bytes, {available} available")]
    MalformedBinary {
        /// Byte length implied by the header (or the header itself).
        expected: u64,
        /// Byte length actually present.
        available: usize,
    },

    /// A `vertex` line inside a facet could not be parsed.
    #[error("malformed ASCII STL at line {line}: {reason}: `{content}`")]
    MalformedText {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

impl IoError {
    /// Create an `InvalidInput` error with the given message.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
