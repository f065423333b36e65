//! In-memory call store

use crate::error::{StoreError, StoreResult};
use crate::filter::{CallFilter, filter_calls};
use crate::repository::CallRepository;
use crate::sample;
use async_trait::async_trait;
use callsense_core::{CallId, CallRecord, TranscriptLine};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use validator::Validate;

#[derive(Debug, Default)]
struct Inner {
    /// Records in insertion order
    calls: Vec<CallRecord>,

    /// Transcript lines keyed by call id
    transcripts: HashMap<CallId, Vec<TranscriptLine>>,
}

/// Ordered in-memory implementation of [`CallRepository`]
///
/// Holds the session's working set of call records. Records are immutable
/// once inserted; the only mutations are insert, transcript attachment and
/// delete-by-id.
#[derive(Debug, Default)]
pub struct MemoryCallStore {
    inner: RwLock<Inner>,
}

impl MemoryCallStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the demo data set
    #[must_use]
    pub fn sample() -> Self {
        Self {
            inner: RwLock::new(Inner {
                calls: sample::sample_calls(),
                transcripts: sample::sample_transcripts(),
            }),
        }
    }
}

#[async_trait]
impl CallRepository for MemoryCallStore {
    async fn list_calls(&self, filter: &CallFilter) -> StoreResult<Vec<CallRecord>> {
        let inner = self.inner.read().await;
        Ok(filter_calls(&inner.calls, filter))
    }

    async fn get_call(&self, id: CallId) -> StoreResult<Option<CallRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.calls.iter().find(|call| call.id == id).cloned())
    }

    async fn get_transcript(&self, id: CallId) -> StoreResult<Vec<TranscriptLine>> {
        let inner = self.inner.read().await;
        Ok(inner.transcripts.get(&id).cloned().unwrap_or_default())
    }

    async fn insert_call(&self, record: CallRecord) -> StoreResult<()> {
        record
            .validate()
            .map_err(|e| StoreError::invalid(e.to_string()))?;

        let mut inner = self.inner.write().await;
        if inner.calls.iter().any(|call| call.id == record.id) {
            return Err(StoreError::duplicate(record.id));
        }

        debug!(id = record.id, agent = %record.agent, "inserting call record");
        inner.calls.push(record);
        Ok(())
    }

    async fn set_transcript(&self, id: CallId, lines: Vec<TranscriptLine>) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        if !inner.calls.iter().any(|call| call.id == id) {
            return Err(StoreError::invalid(format!(
                "No call record with id {id} to attach a transcript to"
            )));
        }

        inner.transcripts.insert(id, lines);
        Ok(())
    }

    async fn delete_call(&self, id: CallId) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.calls.len();
        inner.calls.retain(|call| call.id != id);
        inner.transcripts.remove(&id);

        let removed = inner.calls.len() < before;
        if removed {
            debug!(id, "deleted call record");
        }
        Ok(removed)
    }

    async fn agents(&self) -> StoreResult<Vec<String>> {
        let inner = self.inner.read().await;
        let mut agents: Vec<String> = Vec::new();
        for call in &inner.calls {
            if !agents.contains(&call.agent) {
                agents.push(call.agent.clone());
            }
        }
        Ok(agents)
    }

    async fn count(&self) -> StoreResult<usize> {
        let inner = self.inner.read().await;
        Ok(inner.calls.len())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use callsense_core::Sentiment;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(id: CallId, agent: &str) -> CallRecord {
        CallRecord {
            id,
            agent: agent.to_string(),
            duration: "2:10".to_string(),
            agent_sentiment: Sentiment::Positive,
            customer_sentiment: Sentiment::Neutral,
            date_time: NaiveDate::from_ymd_opt(2025, 11, 5)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();

        let found = store.get_call(1).await.unwrap();
        assert_eq!(found.map(|c| c.agent), Some("Nadia".to_string()));
        assert!(store.get_call(2).await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_id() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();

        let err = store.insert_call(record(1, "Kasun")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { id: 1 }));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_invalid_record() {
        let store = MemoryCallStore::new();
        let err = store.insert_call(record(1, "")).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_record_and_transcript() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();
        store
            .set_transcript(
                1,
                vec![TranscriptLine::new(
                    callsense_core::Speaker::Agent,
                    "Hello",
                    0.8,
                    "00:05",
                )],
            )
            .await
            .unwrap();

        assert!(store.delete_call(1).await.unwrap());
        assert!(store.get_call(1).await.unwrap().is_none());
        assert!(store.get_transcript(1).await.unwrap().is_empty());

        // Deleting again is a no-op, not an error
        assert!(!store.delete_call(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_set_transcript_requires_record() {
        let store = MemoryCallStore::new();
        let err = store.set_transcript(42, Vec::new()).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidRecord { .. }));
    }

    #[tokio::test]
    async fn test_missing_transcript_is_empty_not_error() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();
        assert!(store.get_transcript(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_agents_distinct_first_seen_order() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();
        store.insert_call(record(2, "Kasun")).await.unwrap();
        store.insert_call(record(3, "Nadia")).await.unwrap();

        assert_eq!(store.agents().await.unwrap(), vec!["Nadia", "Kasun"]);
    }

    #[tokio::test]
    async fn test_list_calls_applies_filter_in_order() {
        let store = MemoryCallStore::new();
        store.insert_call(record(1, "Nadia")).await.unwrap();
        store.insert_call(record(2, "Kasun")).await.unwrap();
        store.insert_call(record(3, "Nadia")).await.unwrap();

        let filter = CallFilter::default().with_agent("Nadia");
        let listed = store.list_calls(&filter).await.unwrap();
        assert_eq!(listed.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_sample_store_is_seeded() {
        let store = MemoryCallStore::sample();
        assert!(store.count().await.unwrap() > 0);

        // Seeded transcripts belong to seeded calls
        let calls = store.list_calls(&CallFilter::default()).await.unwrap();
        let first = &calls[0];
        assert!(!store.get_transcript(first.id).await.unwrap().is_empty());
    }
}
