//! CSV report serialization

use crate::error::{ReportError, ReportResult};
use crate::{REPORT_COLUMNS, report_row};
use callsense_core::CallRecord;
use tracing::debug;

/// Serialize a filtered record subset to CSV text
///
/// One header row of the six fixed column names, then one row per record.
/// The human-readable timestamp embeds commas, so the `csv` writer quotes
/// that field.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] for an empty subset, or a serialization
/// error if writing fails.
pub fn csv_report(records: &[CallRecord]) -> ReportResult<String> {
    if records.is_empty() {
        return Err(ReportError::Empty);
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(REPORT_COLUMNS)?;

    for record in records {
        writer.write_record(report_row(record))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Io(std::io::Error::other(e.to_string())))?;

    debug!(rows = records.len(), "serialized CSV report");
    Ok(String::from_utf8(bytes)?)
}
