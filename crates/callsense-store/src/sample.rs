//! Seeded demo data set
//!
//! Stands in for a real backend query layer during development and demos.
//! Everything here flows through [`crate::CallRepository`], so swapping in a
//! live data source does not touch callers.

use callsense_core::{CallId, CallRecord, Sentiment, Speaker, TranscriptLine};
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    // Components are compile-time constants below; fall back rather than
    // panic if one is ever malformed.
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

fn call(
    id: CallId,
    agent: &str,
    duration: &str,
    agent_sentiment: Sentiment,
    customer_sentiment: Sentiment,
    date_time: NaiveDateTime,
) -> CallRecord {
    CallRecord {
        id,
        agent: agent.to_string(),
        duration: duration.to_string(),
        agent_sentiment,
        customer_sentiment,
        date_time,
    }
}

/// Demo call records, in store order
#[must_use]
pub fn sample_calls() -> Vec<CallRecord> {
    use Sentiment::{Negative, Neutral, Positive};

    vec![
        call(101, "Nadia", "4:35", Positive, Positive, at(2025, 11, 5, 10, 30)),
        call(102, "Kasun", "6:12", Neutral, Negative, at(2025, 11, 5, 11, 15)),
        call(103, "Anjali", "5:20", Positive, Positive, at(2025, 11, 6, 9, 5)),
        call(104, "Ravi", "8:02", Positive, Positive, at(2025, 11, 6, 14, 22)),
        call(105, "Saman", "3:15", Neutral, Negative, at(2025, 11, 7, 8, 30)),
        call(106, "Nimal", "7:45", Positive, Positive, at(2025, 11, 7, 10, 10)),
        call(107, "Nadia", "5:55", Neutral, Negative, at(2025, 11, 7, 11, 0)),
        call(108, "Kamal", "4:10", Positive, Neutral, at(2025, 11, 7, 12, 0)),
    ]
}

/// Demo transcripts keyed by call id
///
/// Not every call has one; a missing transcript renders as a placeholder.
#[must_use]
pub fn sample_transcripts() -> HashMap<CallId, Vec<TranscriptLine>> {
    let mut transcripts = HashMap::new();

    transcripts.insert(
        101,
        vec![
            TranscriptLine::new(
                Speaker::Agent,
                "Thank you for calling, this is Nadia. How can I help you?",
                0.8,
                "00:12",
            ),
            TranscriptLine::new(
                Speaker::Customer,
                "Hi, I just wanted to say the new connection is working perfectly.",
                0.95,
                "00:25",
            ),
            TranscriptLine::new(
                Speaker::Agent,
                "That is wonderful to hear! Glad the setup went smoothly.",
                0.9,
                "00:38",
            ),
            TranscriptLine::new(Speaker::Customer, "Yes, thanks so much for the help.", 0.85, "00:49"),
        ],
    );

    transcripts.insert(
        102,
        vec![
            TranscriptLine::new(Speaker::Agent, "Thank you for calling, this is Kasun.", 0.6, "00:08"),
            TranscriptLine::new(
                Speaker::Customer,
                "My internet has been down for three hours and I have work to do!",
                0.1,
                "00:20",
            ),
            TranscriptLine::new(
                Speaker::Agent,
                "I'm very sorry to hear that. Let me check for outages in your area.",
                0.4,
                "00:35",
            ),
            TranscriptLine::new(Speaker::Customer, "I pay far too much for this to keep happening.", 0.15, "00:47"),
            TranscriptLine::new(
                Speaker::Agent,
                "I understand your frustration. I'm looking into it right now.",
                0.3,
                "01:02",
            ),
        ],
    );

    transcripts.insert(
        105,
        vec![
            TranscriptLine::new(Speaker::Agent, "Thank you for calling, Saman speaking.", 0.6, "00:11"),
            TranscriptLine::new(
                Speaker::Customer,
                "My bill is wrong again! This is the third time.",
                0.1,
                "00:24",
            ),
            TranscriptLine::new(
                Speaker::Agent,
                "I apologize for that. Let's pull up your account and review the charges.",
                0.3,
                "00:40",
            ),
        ],
    );

    transcripts.insert(
        108,
        vec![
            TranscriptLine::new(Speaker::Agent, "Customer service, Kamal speaking.", 0.7, "00:06"),
            TranscriptLine::new(
                Speaker::Customer,
                "Hi, I'm calling to check the status of my router order.",
                0.6,
                "00:18",
            ),
            TranscriptLine::new(Speaker::Agent, "Certainly, can I have your order reference?", 0.75, "00:29"),
            TranscriptLine::new(Speaker::Customer, "Yes, it's 123-456.", 0.65, "00:40"),
            TranscriptLine::new(
                Speaker::Agent,
                "Thank you. It's scheduled for delivery tomorrow.",
                0.7,
                "00:55",
            ),
        ],
    );

    transcripts
}
