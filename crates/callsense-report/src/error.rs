//! Error types for report generation

use thiserror::Error;

/// Result type alias for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that can occur while generating a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Nothing to export
    ///
    /// The export dialog disables its options instead of producing an empty
    /// file; the library enforces the same rule.
    #[error("No records to export for the selected filters")]
    Empty,

    /// CSV serialization failed
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// PDF rendering failed
    #[error("PDF rendering failed: {message}")]
    Pdf {
        /// Failure description
        message: String,
    },

    /// Generated bytes were not valid UTF-8
    #[error("Report output was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// I/O error while flushing report output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Create a PDF rendering error
    pub fn pdf(message: impl Into<String>) -> Self {
        Self::Pdf {
            message: message.into(),
        }
    }
}

impl From<ReportError> for callsense_core::Error {
    fn from(err: ReportError) -> Self {
        Self::Report(err.to_string())
    }
}
