//! Analysis service seam

use crate::error::AnalyzeResult;
use crate::types::{AnalyzeRequest, AnalyzeResponse};
use async_trait::async_trait;

/// Interface to an audio analysis backend
///
/// The backend is an opaque collaborator: it receives audio bytes and
/// answers with speaker-keyed, scored segments. Implementations are
/// pluggable so tests can run against a canned service.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Analyze one audio recording
    async fn analyze(&self, request: &AnalyzeRequest) -> AnalyzeResult<AnalyzeResponse>;

    /// Service name for logging
    fn name(&self) -> &str;
}
