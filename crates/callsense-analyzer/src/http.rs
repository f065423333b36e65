//! HTTP implementation of the analysis service

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::service::AnalysisService;
use crate::types::{AnalyzeRequest, AnalyzeResponse, BackendError};
use async_trait::async_trait;
use callsense_core::config::AnalyzerConfig;
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::{debug, info};

/// Analysis backend reached over multipart HTTP
///
/// Issues `POST {endpoint}/analyze` with the audio bytes as the `audio`
/// form part and decodes the speaker-keyed JSON reply.
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    config: AnalyzerConfig,
    client: reqwest::Client,
}

impl HttpAnalysisService {
    /// Create a service against the configured backend endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: AnalyzerConfig) -> AnalyzeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .build()?;

        Ok(Self { config, client })
    }

    /// Backend base URL
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, request: &AnalyzeRequest) -> AnalyzeResult<AnalyzeResponse> {
        let url = format!("{}/analyze", self.config.endpoint);
        debug!(
            request_id = %request.id,
            file = %request.file_name,
            bytes = request.bytes.len(),
            "posting audio for analysis"
        );

        let part = Part::bytes(request.bytes.clone()).file_name(request.file_name.clone());
        let form = Form::new().part("audio", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // The backend wraps failures as {"error": "..."}; fall back to
            // the raw body if it sent something else.
            let message = serde_json::from_str::<BackendError>(&body)
                .map_or(body, |parsed| parsed.error);
            return Err(AnalyzeError::server(status.as_u16(), message));
        }

        let analysis = response.json::<AnalyzeResponse>().await?;
        info!(
            request_id = %request.id,
            speakers = analysis.speakers.len(),
            "analysis completed"
        );
        Ok(analysis)
    }

    fn name(&self) -> &str {
        "http"
    }
}
