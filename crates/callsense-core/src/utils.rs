//! Utility functions shared across the `CallSense` crates

use crate::Result;
use std::path::Path;

/// Format a clock reading in whole seconds as `mm:ss`, or `hh:mm:ss` once the
/// reading reaches one hour
#[must_use]
pub fn format_clock(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Parse a `mm:ss` or `hh:mm:ss` clock string back to whole seconds
///
/// # Errors
///
/// Returns an error if the string is not two or three colon-separated
/// numeric fields.
pub fn parse_clock(clock: &str) -> Result<u64> {
    let parts: Vec<&str> = clock.split(':').collect();

    let invalid = || crate::Error::Validation {
        field: "clock".to_string(),
        message: format!("Invalid clock string: {clock}"),
    };

    let numbers = parts
        .iter()
        .map(|part| part.parse::<u64>().map_err(|_| invalid()))
        .collect::<Result<Vec<u64>>>()?;

    match numbers.as_slice() {
        [minutes, seconds] => Ok(minutes * 60 + seconds),
        [hours, minutes, seconds] => Ok(hours * 3600 + minutes * 60 + seconds),
        _ => Err(invalid()),
    }
}

/// Human-readable timestamp, e.g. `Nov 5, 2025, 10:30 AM`
#[must_use]
pub fn format_date_time(date_time: &chrono::NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Validate file extension against an allow list
#[must_use]
pub fn validate_file_extension(filename: &str, allowed: &[String]) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            allowed
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(ext))
        })
}
