//! Repository seam over call records
//!
//! The dashboard's record and transcript tables are reached only through
//! this trait, so the in-memory implementation can later be swapped for a
//! real backend query layer without touching callers.

use crate::error::StoreResult;
use crate::filter::CallFilter;
use async_trait::async_trait;
use callsense_core::{CallId, CallRecord, TranscriptLine};

/// Query and mutation interface over stored call records
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// List records matching a filter, in store order
    async fn list_calls(&self, filter: &CallFilter) -> StoreResult<Vec<CallRecord>>;

    /// Fetch a single record by id
    async fn get_call(&self, id: CallId) -> StoreResult<Option<CallRecord>>;

    /// Fetch the transcript for a call
    ///
    /// A call without a stored transcript yields an empty list; that is a
    /// valid state rendered upstream as a placeholder, not an error.
    async fn get_transcript(&self, id: CallId) -> StoreResult<Vec<TranscriptLine>>;

    /// Insert a new record, enforcing id uniqueness
    async fn insert_call(&self, record: CallRecord) -> StoreResult<()>;

    /// Attach a transcript to an existing call
    async fn set_transcript(&self, id: CallId, lines: Vec<TranscriptLine>) -> StoreResult<()>;

    /// Delete a record (and its transcript) by id
    ///
    /// Returns whether a record was actually removed.
    async fn delete_call(&self, id: CallId) -> StoreResult<bool>;

    /// Distinct agent names in first-seen order, for the filter dropdown
    async fn agents(&self) -> StoreResult<Vec<String>>;

    /// Number of stored records
    async fn count(&self) -> StoreResult<usize>;
}
