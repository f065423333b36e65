//! Wire types for the `/analyze` backend contract
//!
//! Field-for-field the JSON the analysis backend emits: one entry per
//! diarized speaker, each carrying its transcript, scored segments and
//! sentiment percentages. Speaker order is preserved as sent.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sentiment label the backend attaches to a segment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentSentiment {
    /// Positive classification
    Positive,
    /// Neutral classification (low-confidence fallback)
    Neutral,
    /// Negative classification
    Negative,
}

impl std::fmt::Display for SegmentSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "POSITIVE"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Negative => write!(f, "NEGATIVE"),
        }
    }
}

/// One transcribed and scored slice of a speaker's audio
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzedSegment {
    /// Segment start in seconds from the beginning of the recording
    pub start: f64,

    /// Segment end in seconds
    pub end: f64,

    /// Transcribed text
    pub text: String,

    /// Sentiment classification
    pub sentiment: SegmentSentiment,

    /// Classifier confidence as a percentage (0–100)
    pub confidence: f64,
}

/// Per-speaker analysis results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SpeakerAnalysis {
    /// Concatenated transcript for the speaker
    #[serde(default)]
    pub transcript: String,

    /// Scored segments in backend order
    #[serde(default)]
    pub segments: Vec<AnalyzedSegment>,

    /// Positive share of the speaker's confidence mass, percent
    #[serde(default)]
    pub positive: f64,

    /// Negative share, percent
    #[serde(default)]
    pub negative: f64,

    /// Neutral share, percent
    #[serde(default)]
    pub neutral: f64,
}

/// Successful `/analyze` response body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AnalyzeResponse {
    /// Analysis keyed by diarized speaker label, in backend order
    pub speakers: IndexMap<String, SpeakerAnalysis>,
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendError {
    /// Human-readable failure description
    pub error: String,
}

/// One analysis request
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Unique request ID
    pub id: Uuid,

    /// Original file name of the uploaded audio
    pub file_name: String,

    /// Raw audio bytes
    pub bytes: Vec<u8>,

    /// Request timestamp
    pub requested_at: DateTime<Utc>,
}

impl AnalyzeRequest {
    /// Create a new analysis request
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            bytes,
            requested_at: Utc::now(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Response body in the exact shape the backend emits
    const SAMPLE_RESPONSE: &str = r#"{
        "speakers": {
            "SPEAKER_00": {
                "transcript": "Hello, how can I help you today?",
                "segments": [
                    {
                        "start": 0.4,
                        "end": 3.1,
                        "text": "Hello, how can I help you today?",
                        "sentiment": "POSITIVE",
                        "confidence": 91.25
                    }
                ],
                "positive": 100.0,
                "negative": 0.0,
                "neutral": 0.0
            },
            "SPEAKER_01": {
                "transcript": "My connection keeps dropping.",
                "segments": [
                    {
                        "start": 3.6,
                        "end": 6.8,
                        "text": "My connection keeps dropping.",
                        "sentiment": "NEGATIVE",
                        "confidence": 87.5
                    }
                ],
                "positive": 0.0,
                "negative": 100.0,
                "neutral": 0.0
            }
        }
    }"#;

    #[test]
    fn test_response_deserializes_backend_shape() {
        let response: AnalyzeResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();

        assert_eq!(response.speakers.len(), 2);
        // Map order is preserved as sent
        let labels: Vec<&String> = response.speakers.keys().collect();
        assert_eq!(labels, ["SPEAKER_00", "SPEAKER_01"]);

        let first = &response.speakers["SPEAKER_00"];
        assert_eq!(first.segments.len(), 1);
        assert_eq!(first.segments[0].sentiment, SegmentSentiment::Positive);
        assert_eq!(first.segments[0].confidence, 91.25);
        assert_eq!(first.positive, 100.0);
    }

    #[test]
    fn test_missing_percentages_default() {
        let json = r#"{"speakers": {"SPEAKER_00": {"transcript": "", "segments": []}}}"#;
        let response: AnalyzeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.speakers["SPEAKER_00"].positive, 0.0);
    }

    #[test]
    fn test_segment_sentiment_serde_uppercase() {
        let serialized = serde_json::to_string(&SegmentSentiment::Negative).unwrap();
        assert_eq!(serialized, "\"NEGATIVE\"");

        let parsed: SegmentSentiment = serde_json::from_str("\"NEUTRAL\"").unwrap();
        assert_eq!(parsed, SegmentSentiment::Neutral);
        assert_eq!(parsed.to_string(), "NEUTRAL");
    }

    #[test]
    fn test_backend_error_shape() {
        let parsed: BackendError = serde_json::from_str(r#"{"error": "No audio uploaded"}"#).unwrap();
        assert_eq!(parsed.error, "No audio uploaded");
    }

    #[test]
    fn test_request_construction() {
        let request = AnalyzeRequest::new("call.wav", vec![0u8; 16]);
        assert_eq!(request.file_name, "call.wav");
        assert_eq!(request.bytes.len(), 16);
    }
}
