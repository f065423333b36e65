//! Pure filter engine over call records
//!
//! All four predicates must pass for a record to be kept. Empty filter
//! values and the dropdown sentinels are wildcards, and filtering always
//! preserves input order.

use callsense_core::CallRecord;
use serde::{Deserialize, Serialize};

/// Agent dropdown sentinel meaning "no agent restriction"
pub const ALL_AGENTS: &str = "All Agents";

/// Sentiment dropdown sentinel meaning "no sentiment restriction"
pub const ALL_SENTIMENTS: &str = "All Sentiments";

/// Filter parameters for listing call records
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallFilter {
    /// Case-insensitive substring match against the agent name or the
    /// stringified call id
    #[serde(default)]
    pub search: String,

    /// Exact agent name, or empty / [`ALL_AGENTS`] for any
    #[serde(default)]
    pub agent: String,

    /// ISO date prefix (`YYYY-MM-DD`), or empty for any
    #[serde(default)]
    pub date: String,

    /// Sentiment label matched against either side of the call, or empty /
    /// [`ALL_SENTIMENTS`] for any
    #[serde(default)]
    pub sentiment: String,
}

impl CallFilter {
    /// Filter with a search term only
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one agent
    #[must_use]
    pub fn with_agent(mut self, agent: impl Into<String>) -> Self {
        self.agent = agent.into();
        self
    }

    /// Restrict to one calendar date (`YYYY-MM-DD`)
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Restrict to calls where either side carries the given sentiment
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: impl Into<String>) -> Self {
        self.sentiment = sentiment.into();
        self
    }

    /// Whether every predicate is a wildcard
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches_any_search()
            && self.matches_any_agent()
            && self.date.is_empty()
            && self.matches_any_sentiment()
    }

    /// Test a single record against all active predicates
    #[must_use]
    pub fn matches(&self, record: &CallRecord) -> bool {
        self.matches_search(record)
            && self.matches_agent(record)
            && self.matches_date(record)
            && self.matches_sentiment(record)
    }

    fn matches_any_search(&self) -> bool {
        self.search.is_empty()
    }

    fn matches_any_agent(&self) -> bool {
        self.agent.is_empty() || self.agent == ALL_AGENTS
    }

    fn matches_any_sentiment(&self) -> bool {
        self.sentiment.is_empty() || self.sentiment == ALL_SENTIMENTS
    }

    fn matches_search(&self, record: &CallRecord) -> bool {
        if self.matches_any_search() {
            return true;
        }

        let needle = self.search.to_lowercase();
        record.agent.to_lowercase().contains(&needle) || record.id.to_string().contains(&needle)
    }

    fn matches_agent(&self, record: &CallRecord) -> bool {
        self.matches_any_agent() || record.agent == self.agent
    }

    fn matches_date(&self, record: &CallRecord) -> bool {
        if self.date.is_empty() {
            return true;
        }

        record
            .date_time
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string()
            .starts_with(&self.date)
    }

    fn matches_sentiment(&self, record: &CallRecord) -> bool {
        self.matches_any_sentiment()
            || record.agent_sentiment.to_string() == self.sentiment
            || record.customer_sentiment.to_string() == self.sentiment
    }
}

/// Apply a filter to a record slice, preserving input order
///
/// An empty result is a valid output; callers render it as an explicit
/// "no results" row.
#[must_use]
pub fn filter_calls(records: &[CallRecord], filter: &CallFilter) -> Vec<CallRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
