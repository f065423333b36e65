//! Report exporters for the `CallSense` engine
//!
//! CSV and paginated-PDF exports share the same six-column view of a
//! filtered record subset; transcripts export as plain text. Every exporter
//! refuses an empty subset so callers never hand the user an empty file.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod csv;
pub mod error;
pub mod pdf;
pub mod transcript;

pub use csv::csv_report;
pub use error::{ReportError, ReportResult};
pub use pdf::pdf_report;
pub use transcript::{TranscriptStyle, transcript_text};

use callsense_core::{CallId, CallRecord};
use chrono::NaiveDate;

/// The six fixed report columns, in order
pub const REPORT_COLUMNS: [&str; 6] = [
    "Call ID",
    "Agent",
    "Date & Time",
    "Duration",
    "Agent Sentiment",
    "Customer Sentiment",
];

/// Output formats offered by the export dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Comma-separated values
    Csv,
    /// Paginated PDF table
    Pdf,
}

impl ReportFormat {
    /// File extension for the format
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

/// One table row for a record, in [`REPORT_COLUMNS`] order
#[must_use]
pub fn report_row(record: &CallRecord) -> [String; 6] {
    [
        record.id.to_string(),
        record.agent.clone(),
        record.date_time_display(),
        record.duration.clone(),
        record.agent_sentiment.to_string(),
        record.customer_sentiment.to_string(),
    ]
}

/// Date-stamped download name for a tabular report
#[must_use]
pub fn report_filename(basename: &str, format: ReportFormat, date: NaiveDate) -> String {
    let stamp = date.format("%Y-%m-%d");
    match format {
        ReportFormat::Csv => format!("{basename}_{stamp}.csv"),
        ReportFormat::Pdf => format!("{basename}_table_{stamp}.pdf"),
    }
}

/// Download name for a live session transcript
#[must_use]
pub const fn live_transcript_filename() -> &'static str {
    "live_transcript.txt"
}

/// Download name for a stored call's transcript
#[must_use]
pub fn call_transcript_filename(id: CallId) -> String {
    format!("call_{id}_transcript.txt")
}
