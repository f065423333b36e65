//! Plain-text transcript serialization

use crate::error::{ReportError, ReportResult};
use callsense_core::{TranscriptLine, sentiment::score_badge};

/// Text layout for an exported transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptStyle {
    /// `[00:12] Agent (Score: 0.78): Hello!`, used by live and detail views
    Scored,
    /// `[00:00:03] SPEAKER_00: Hello! (Positive)`, used for analyzed uploads
    Badged,
}

fn format_line(line: &TranscriptLine, style: TranscriptStyle) -> String {
    match style {
        TranscriptStyle::Scored => format!(
            "[{}] {} (Score: {:.2}): {}",
            line.time, line.speaker, line.score, line.text
        ),
        TranscriptStyle::Badged => format!(
            "[{}] {}: {} ({})",
            line.time,
            line.speaker,
            line.text,
            score_badge(line.score)
        ),
    }
}

/// Serialize a transcript to downloadable plain text, one line per utterance
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when there is no transcript to export; the
/// download button upstream is disabled in that state.
pub fn transcript_text(lines: &[TranscriptLine], style: TranscriptStyle) -> ReportResult<String> {
    if lines.is_empty() {
        return Err(ReportError::Empty);
    }

    Ok(lines
        .iter()
        .map(|line| format_line(line, style))
        .collect::<Vec<_>>()
        .join("\n"))
}
