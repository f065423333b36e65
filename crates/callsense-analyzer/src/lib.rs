//! Audio upload analysis client for the `CallSense` engine
//!
//! Posts a selected call recording to the analysis backend as multipart
//! form data, decodes the speaker-keyed response and flattens it into a
//! chronological transcript. At most one request is in flight per session,
//! and the user can cancel it cooperatively mid-flight.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod analyzer;
pub mod error;
pub mod flatten;
pub mod http;
pub mod mock;
pub mod service;
pub mod types;

pub use analyzer::{AnalysisOutcome, SelectedFile, UploadAnalyzer};
pub use error::{AnalyzeError, AnalyzeResult};
pub use flatten::flatten_response;
pub use http::HttpAnalysisService;
pub use mock::MockAnalysisService;
pub use service::AnalysisService;
pub use types::{
    AnalyzeRequest, AnalyzeResponse, AnalyzedSegment, BackendError, SegmentSentiment,
    SpeakerAnalysis,
};
