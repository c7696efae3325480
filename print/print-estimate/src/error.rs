//! Error types for estimation.

use mesh_io::IoError;
use thiserror::Error;

/// Result type for estimation operations.
pub type EstimateResult<T> = Result<T, EstimateError>;

/// A print setting that violates its precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    /// A length or speed that must be strictly positive is not.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A float field holds NaN or an infinity.
    #[error("{field} must be a finite number, got {value}")]
    NotFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Infill percentage outside `[0, 100]`.
    #[error("infillPercentage must be between 0 and 100, got {value}")]
    InfillOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// A layer or wall count below zero.
    #[error("{field} must not be negative, got {value}")]
    NegativeCount {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i32,
    },
}

/// Errors that abort an estimate.
///
/// There is no partial result: any error means no estimate at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// The STL buffer could not be decoded.
    #[error(transparent)]
    Mesh(#[from] IoError),

    /// The print settings were rejected before any decoding.
    #[error("invalid print settings: {0}")]
    Settings(#[from] SettingsError),
}

/// Coarse classification of an [`EstimateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Empty or absent byte buffer.
    InvalidInput,
    /// Binary layout inconsistent with the buffer length.
    MalformedBinary,
    /// Unparsable `vertex` line in ASCII STL.
    MalformedText,
    /// A print setting violates its precondition.
    Configuration,
}

impl ErrorKind {
    /// Get a stable identifier for the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::MalformedBinary => "malformed_binary",
            Self::MalformedText => "malformed_text",
            Self::Configuration => "configuration",
        }
    }
}

impl EstimateError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Mesh(IoError::InvalidInput { .. }) => ErrorKind::InvalidInput,
            Self::Mesh(IoError::MalformedBinary { .. }) => ErrorKind::MalformedBinary,
            Self::Mesh(IoError::MalformedText { .. }) => ErrorKind::MalformedText,
            Self::Settings(_) => ErrorKind::Configuration,
        }
    }
}
