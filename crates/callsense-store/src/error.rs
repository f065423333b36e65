//! Error types for the call store

use callsense_core::CallId;
use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in call store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A record with the same id already exists
    #[error("Call id {id} already exists in the store")]
    DuplicateId {
        /// Conflicting call id
        id: CallId,
    },

    /// Record failed validation
    #[error("Invalid call record: {message}")]
    InvalidRecord {
        /// Validation failure description
        message: String,
    },
}

impl StoreError {
    /// Create a duplicate-id error
    #[must_use]
    pub const fn duplicate(id: CallId) -> Self {
        Self::DuplicateId { id }
    }

    /// Create an invalid-record error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

impl From<StoreError> for callsense_core::Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err.to_string())
    }
}
