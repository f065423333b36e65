//! Upload analysis session
//!
//! Owns the view state of the "analyze a recorded call" flow: one selected
//! file, at most one in-flight request, and the last analysis outcome.
//! Cancellation is cooperative; the in-flight request loses a select race
//! against the session's cancellation token.

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::flatten::flatten_response;
use crate::http::HttpAnalysisService;
use crate::service::AnalysisService;
use crate::types::{AnalyzeRequest, AnalyzeResponse};
use callsense_core::TranscriptLine;
use callsense_core::config::AnalyzerConfig;
use callsense_core::utils::validate_file_extension;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// An audio file staged for analysis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Original file name
    pub name: String,

    /// Raw audio bytes
    pub bytes: Vec<u8>,
}

/// Result of a completed analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    /// The backend's speaker-keyed response
    pub response: AnalyzeResponse,

    /// The response flattened into a chronological transcript
    pub transcript: Vec<TranscriptLine>,
}

#[derive(Debug, Default)]
struct AnalyzerState {
    file: Option<SelectedFile>,
    result: Option<AnalysisOutcome>,
    loading: bool,
    cancel: Option<CancellationToken>,
}

/// Single-file upload analysis session
///
/// Clones share one session; the UI holds a clone wherever it needs to
/// trigger cancellation while a request is pending.
#[derive(Clone)]
pub struct UploadAnalyzer {
    config: AnalyzerConfig,
    service: Arc<dyn AnalysisService>,
    state: Arc<RwLock<AnalyzerState>>,
}

impl UploadAnalyzer {
    /// Create a session over an arbitrary analysis service
    #[must_use]
    pub fn new(config: AnalyzerConfig, service: Arc<dyn AnalysisService>) -> Self {
        Self {
            config,
            service,
            state: Arc::new(RwLock::new(AnalyzerState::default())),
        }
    }

    /// Create a session over the HTTP backend from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_http(config: AnalyzerConfig) -> AnalyzeResult<Self> {
        let service = Arc::new(HttpAnalysisService::new(config.clone())?);
        Ok(Self::new(config, service))
    }

    /// Stage a file for analysis, replacing any previous selection
    ///
    /// Clears the previous result so stale output never shows next to a
    /// fresh selection.
    ///
    /// # Errors
    ///
    /// Refuses files while a request is in flight, files with extensions
    /// outside the allow list, and files over the size limit.
    pub async fn select_file(&self, name: impl Into<String>, bytes: Vec<u8>) -> AnalyzeResult<()> {
        let name = name.into();
        let mut state = self.state.write().await;
        if state.loading {
            return Err(AnalyzeError::AlreadyRunning);
        }

        if !validate_file_extension(&name, &self.config.allowed_extensions) {
            return Err(AnalyzeError::unsupported_format(
                name,
                self.config.allowed_extensions.clone(),
            ));
        }

        let size = bytes.len() as u64;
        if size > self.config.max_upload_size {
            return Err(AnalyzeError::file_too_large(size, self.config.max_upload_size));
        }

        state.file = Some(SelectedFile { name, bytes });
        state.result = None;
        Ok(())
    }

    /// Drop the selected file and any previous result
    ///
    /// # Errors
    ///
    /// Refused while a request is in flight; use [`Self::cancel`] first.
    pub async fn clear_file(&self) -> AnalyzeResult<()> {
        let mut state = self.state.write().await;
        if state.loading {
            return Err(AnalyzeError::AlreadyRunning);
        }

        state.file = None;
        state.result = None;
        Ok(())
    }

    /// Analyze the selected file
    ///
    /// Issues one request against the backend and stores the flattened
    /// outcome. The loading flag is cleared on every exit path before the
    /// outcome is reported.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError::NoFileSelected`] without a staged file,
    /// [`AnalyzeError::AlreadyRunning`] while a request is in flight,
    /// [`AnalyzeError::Cancelled`] when cancelled mid-flight (which also
    /// clears the file selection), or the transport/backend error.
    pub async fn analyze(&self) -> AnalyzeResult<AnalysisOutcome> {
        let (request, token) = {
            let mut state = self.state.write().await;
            if state.loading {
                return Err(AnalyzeError::AlreadyRunning);
            }
            let Some(file) = state.file.as_ref() else {
                return Err(AnalyzeError::NoFileSelected);
            };

            let request = AnalyzeRequest::new(file.name.clone(), file.bytes.clone());
            let token = CancellationToken::new();
            state.loading = true;
            state.result = None;
            state.cancel = Some(token.clone());
            (request, token)
        };

        let outcome = tokio::select! {
            () = token.cancelled() => Err(AnalyzeError::Cancelled),
            result = self.service.analyze(&request) => result,
        };

        let mut state = self.state.write().await;
        state.loading = false;
        state.cancel = None;

        match outcome {
            Ok(response) => {
                let transcript = flatten_response(&response);
                info!(request_id = %request.id, lines = transcript.len(), "analysis stored");
                let outcome = AnalysisOutcome { response, transcript };
                state.result = Some(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                if err.is_cancelled() {
                    // Cancellation abandons the selection along with the request
                    state.file = None;
                    warn!(request_id = %request.id, "analysis cancelled by user");
                } else {
                    warn!(request_id = %request.id, error = %err, "analysis failed");
                }
                Err(err)
            }
        }
    }

    /// Cancel the in-flight request, if any
    pub async fn cancel(&self) {
        let state = self.state.read().await;
        if let Some(token) = &state.cancel {
            token.cancel();
        }
    }

    /// Whether a request is in flight
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// Name of the staged file, if any
    pub async fn selected_file_name(&self) -> Option<String> {
        self.state.read().await.file.as_ref().map(|f| f.name.clone())
    }

    /// Last stored analysis outcome, if any
    pub async fn result(&self) -> Option<AnalysisOutcome> {
        self.state.read().await.result.clone()
    }

    /// Name of the backing analysis service
    #[must_use]
    pub fn service_name(&self) -> &str {
        self.service.name()
    }
}
