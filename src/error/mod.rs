//! Error handling for the roster core.
//!
//! Validation and parse failures are structured values handed back to the
//! caller, never panics. Only the registry's backing store and identifier
//! generation produce `RosterError`.

use thiserror::Error;

/// Specialized error type for roster-core operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// Error reading or writing the registry backing store
    #[error("Store error: {message}")]
    Store {
        /// What failed
        message: String,
        /// Underlying cause, when one exists
        #[source]
        source: Option<std::io::Error>,
    },

    /// Identifier generation exhausted its retry budget. Signals a stuck or
    /// corrupted backing store rather than a normal-path condition.
    #[error("No unique identifier found after {attempts} attempts")]
    KeyspaceExhausted {
        /// How many candidates were tried before giving up
        attempts: usize,
    },
}

impl RosterError {
    /// Create a store error with a message only
    #[must_use]
    pub fn store_error(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error wrapping an I/O cause
    #[must_use]
    pub fn store_error_with_source(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Store {
            message: message.into(),
            source: Some(source),
        }
    }
}

/// A rejected employee identifier
///
/// Format rules are checked in order; the first violated rule is reported.
/// Uniqueness is only checked once the format passes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Candidate was empty after trimming
    #[error("Employee ID is required")]
    Empty,

    /// Candidate was shorter than the minimum length
    #[error("Employee ID must be at least 3 characters (got {len})")]
    TooShort {
        /// Length of the normalized candidate
        len: usize,
    },

    /// Candidate was longer than the maximum length
    #[error("Employee ID must be at most 20 characters (got {len})")]
    TooLong {
        /// Length of the normalized candidate
        len: usize,
    },

    /// Candidate contained a character outside `[A-Z0-9-]`
    #[error("Employee ID may only contain letters, digits, and hyphens (found '{ch}')")]
    InvalidCharacter {
        /// First offending character
        ch: char,
    },

    /// Candidate is already committed in the registry
    #[error("Employee ID '{id}' is already in use")]
    AlreadyTaken {
        /// The normalized identifier that collided
        id: String,
    },
}

/// A rejected currency display string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Input was empty after trimming
    #[error("Currency value is empty")]
    Empty,

    /// Input had no parseable numeric remainder after stripping symbols
    #[error("Currency value '{input}' is not a number")]
    NotNumeric {
        /// The offending input, trimmed
        input: String,
    },
}

/// Result type for roster-core operations
pub type Result<T> = std::result::Result<T, RosterError>;
