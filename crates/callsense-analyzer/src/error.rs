//! Error types for the upload analyzer

use thiserror::Error;

/// Result type alias for analysis operations
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;

/// Errors that can occur while analyzing an uploaded call recording
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// `analyze` was called without a selected file
    #[error("No audio file selected")]
    NoFileSelected,

    /// A request is already in flight
    #[error("An analysis request is already in flight")]
    AlreadyRunning,

    /// The in-flight request was cancelled by the user
    #[error("Analysis cancelled")]
    Cancelled,

    /// Selected file has an extension outside the allow list
    #[error("Unsupported audio file: {filename}. Supported extensions: {supported:?}")]
    UnsupportedFormat {
        /// Offending file name
        filename: String,
        /// Allowed extensions
        supported: Vec<String>,
    },

    /// Selected file exceeds the upload size limit
    #[error("File size {size} exceeds maximum of {max_size}")]
    FileTooLarge {
        /// Actual file size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max_size: u64,
    },

    /// The backend answered with a non-2xx status
    #[error("Analysis backend error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Server-provided error string
        message: String,
    },

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body did not match the analysis contract
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalyzeError {
    /// Create an unsupported-format error
    pub fn unsupported_format(filename: impl Into<String>, supported: Vec<String>) -> Self {
        Self::UnsupportedFormat {
            filename: filename.into(),
            supported,
        }
    }

    /// Create a file-too-large error
    #[must_use]
    pub const fn file_too_large(size: u64, max_size: u64) -> Self {
        Self::FileTooLarge { size, max_size }
    }

    /// Create a server error from a status code and message body
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is the cooperative-cancellation outcome
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<AnalyzeError> for callsense_core::Error {
    fn from(err: AnalyzeError) -> Self {
        Self::Analysis(err.to_string())
    }
}
