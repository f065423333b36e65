//! Flattening of speaker-keyed analysis results into transcript lines

use crate::types::AnalyzeResponse;
use callsense_core::TranscriptLine;
use std::cmp::Ordering;

/// Clock stamp from a segment start, always `hh:mm:ss`
fn segment_stamp(start_seconds: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total = start_seconds.max(0.0).floor() as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Flatten a speaker-keyed response into one chronological transcript
///
/// Each segment becomes one line carrying the speaker label, the segment
/// text, the classifier confidence rescaled to a `[0, 1]` score and an
/// `hh:mm:ss` stamp. Lines are stable-sorted by segment start so the
/// transcript reads in recording order even though the backend groups
/// segments per speaker.
#[must_use]
pub fn flatten_response(response: &AnalyzeResponse) -> Vec<TranscriptLine> {
    let mut stamped: Vec<(f64, TranscriptLine)> = Vec::new();

    for (speaker, analysis) in &response.speakers {
        for segment in &analysis.segments {
            let score = (segment.confidence / 100.0).clamp(0.0, 1.0);
            stamped.push((
                segment.start,
                TranscriptLine::labeled(
                    speaker.clone(),
                    segment.text.clone(),
                    score,
                    segment_stamp(segment.start),
                ),
            ));
        }
    }

    stamped.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
    stamped.into_iter().map(|(_, line)| line).collect()
}
