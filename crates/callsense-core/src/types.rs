//! Core data types for the `CallSense` engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Call record identifier type
pub type CallId = i64;

/// Sentiment label attached to a call participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Positive sentiment
    Positive,
    /// Neutral sentiment
    Neutral,
    /// Negative sentiment
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positive => write!(f, "Positive"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Negative => write!(f, "Negative"),
        }
    }
}

impl std::str::FromStr for Sentiment {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Self::Positive),
            "Neutral" => Ok(Self::Neutral),
            "Negative" => Ok(Self::Negative),
            other => Err(crate::Error::Validation {
                field: "sentiment".to_string(),
                message: format!("Unknown sentiment label: {other}"),
            }),
        }
    }
}

/// Call participant role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Speaker {
    /// The call-center agent side of the call
    Agent,
    /// The customer side of the call
    Customer,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Agent => write!(f, "Agent"),
            Self::Customer => write!(f, "Customer"),
        }
    }
}

/// Verdict for a whole call, derived from averaged line scores
///
/// Never stored; recomputed whenever the underlying transcript changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallSentiment {
    /// Mean score at or above the satisfied threshold
    Satisfied,
    /// Mean score between the neutral and satisfied thresholds
    Neutral,
    /// Mean score below the neutral threshold
    Unsatisfied,
}

impl std::fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfied => write!(f, "Satisfied"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Unsatisfied => write!(f, "Unsatisfied"),
        }
    }
}

/// Summary row for one handled call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct CallRecord {
    /// Unique identifier within a store
    pub id: CallId,

    /// Handling agent's display name
    #[validate(length(min = 1, max = 255))]
    pub agent: String,

    /// Call duration, preformatted as "M:SS"
    pub duration: String,

    /// Sentiment label for the agent side
    pub agent_sentiment: Sentiment,

    /// Sentiment label for the customer side
    pub customer_sentiment: Sentiment,

    /// When the call took place (local wall-clock, ISO 8601)
    pub date_time: NaiveDateTime,
}

impl CallRecord {
    /// ISO calendar date (`YYYY-MM-DD`) portion of the call timestamp
    #[must_use]
    pub fn date(&self) -> String {
        self.date_time.format("%Y-%m-%d").to_string()
    }

    /// Human-readable timestamp, e.g. `Nov 5, 2025, 10:30 AM`
    #[must_use]
    pub fn date_time_display(&self) -> String {
        crate::utils::format_date_time(&self.date_time)
    }
}

/// One utterance of a call transcript
///
/// Produced by the live session feed, by the seeded per-call transcripts, or
/// by flattening an analysis response. The speaker is a free-form label so
/// diarization output (`SPEAKER_00`, ...) and the fixed [`Speaker`] roles can
/// share one type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct TranscriptLine {
    /// Speaker label
    #[validate(length(min = 1, max = 255))]
    pub speaker: String,

    /// Utterance text
    pub text: String,

    /// Sentiment score in `[0, 1]`, higher is more positive
    #[validate(range(min = 0.0, max = 1.0))]
    pub score: f64,

    /// Clock stamp, `mm:ss` or `hh:mm:ss`
    pub time: String,
}

impl TranscriptLine {
    /// Create a line for a fixed participant role
    pub fn new(speaker: Speaker, text: impl Into<String>, score: f64, time: impl Into<String>) -> Self {
        Self {
            speaker: speaker.to_string(),
            text: text.into(),
            score,
            time: time.into(),
        }
    }

    /// Create a line for an arbitrary speaker label
    pub fn labeled(
        speaker: impl Into<String>,
        text: impl Into<String>,
        score: f64,
        time: impl Into<String>,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            score,
            time: time.into(),
        }
    }
}
