//! Mock analysis service for testing

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::service::AnalysisService;
use crate::types::{AnalyzeRequest, AnalyzeResponse, AnalyzedSegment, SegmentSentiment, SpeakerAnalysis};
use async_trait::async_trait;
use tokio::time::{Duration, sleep};

/// Canned analysis backend for tests and demos
#[derive(Debug, Clone)]
pub struct MockAnalysisService {
    /// Mock processing delay
    delay_ms: u64,

    /// Should fail analysis requests
    should_fail: bool,

    /// Failure message
    failure_message: String,

    /// Response returned on success
    response: AnalyzeResponse,
}

impl MockAnalysisService {
    /// Create a mock that answers immediately with a two-speaker exchange
    #[must_use]
    pub fn new() -> Self {
        let mut response = AnalyzeResponse::default();
        response.speakers.insert(
            "SPEAKER_00".to_string(),
            SpeakerAnalysis {
                transcript: "Hello, how can I help you today?".to_string(),
                segments: vec![AnalyzedSegment {
                    start: 0.4,
                    end: 3.1,
                    text: "Hello, how can I help you today?".to_string(),
                    sentiment: SegmentSentiment::Positive,
                    confidence: 91.25,
                }],
                positive: 100.0,
                negative: 0.0,
                neutral: 0.0,
            },
        );
        response.speakers.insert(
            "SPEAKER_01".to_string(),
            SpeakerAnalysis {
                transcript: "My connection keeps dropping.".to_string(),
                segments: vec![AnalyzedSegment {
                    start: 3.6,
                    end: 6.8,
                    text: "My connection keeps dropping.".to_string(),
                    sentiment: SegmentSentiment::Negative,
                    confidence: 87.5,
                }],
                positive: 0.0,
                negative: 100.0,
                neutral: 0.0,
            },
        );

        Self {
            delay_ms: 0,
            should_fail: false,
            failure_message: "Mock failure".to_string(),
            response,
        }
    }

    /// Set processing delay for testing
    #[must_use]
    pub const fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Configure to fail requests
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    /// Override the canned response
    #[must_use]
    pub fn with_response(mut self, response: AnalyzeResponse) -> Self {
        self.response = response;
        self
    }
}

impl Default for MockAnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisService for MockAnalysisService {
    async fn analyze(&self, _request: &AnalyzeRequest) -> AnalyzeResult<AnalyzeResponse> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }

        if self.should_fail {
            return Err(AnalyzeError::server(500, self.failure_message.clone()));
        }

        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
