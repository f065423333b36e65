//! Error types for live sessions

use thiserror::Error;

/// Result type alias for live session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while driving a live session
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called while a session is already running or paused
    #[error("A live session is already in progress")]
    AlreadyRunning,

    /// `pause` or `end` was called without a running session
    #[error("No live session is running")]
    NotRunning,

    /// `resume` was called while the session was not paused
    #[error("The live session is not paused")]
    NotPaused,
}

impl From<SessionError> for callsense_core::Error {
    fn from(err: SessionError) -> Self {
        Self::Session(err.to_string())
    }
}
