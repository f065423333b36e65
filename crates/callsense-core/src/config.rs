//! Configuration management for the `CallSense` engine

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upload analyzer configuration
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Live session configuration
    #[serde(default)]
    pub live: LiveConfig,

    /// Report exporter configuration
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Upload analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Base URL of the analysis backend
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Total request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// Maximum upload size in bytes
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size: u64,

    /// Allowed audio file extensions
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

/// Live session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveConfig {
    /// Elapsed-clock tick period in seconds
    #[serde(default = "default_clock_tick")]
    pub clock_tick_secs: u64,

    /// Transcript feed tick period in seconds
    #[serde(default = "default_transcript_tick")]
    pub transcript_tick_secs: u64,
}

/// Report exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title rendered at the top of PDF reports
    #[serde(default = "default_report_title")]
    pub title: String,

    /// Base name for date-stamped report files
    #[serde(default = "default_report_basename")]
    pub basename: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

const fn default_request_timeout() -> u64 {
    30
}

const fn default_connect_timeout() -> u64 {
    5
}

const fn default_max_upload_size() -> u64 {
    100_000_000 // 100MB
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["wav".to_string(), "mp3".to_string()]
}

const fn default_clock_tick() -> u64 {
    1
}

const fn default_transcript_tick() -> u64 {
    4
}

fn default_report_title() -> String {
    "Call Report".to_string()
}

fn default_report_basename() -> String {
    "call_report".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: default_request_timeout(),
            connect_timeout: default_connect_timeout(),
            max_upload_size: default_max_upload_size(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            clock_tick_secs: default_clock_tick(),
            transcript_tick_secs: default_transcript_tick(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: default_report_title(),
            basename: default_report_basename(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("callsense").required(false))
            .add_source(config::Environment::with_prefix("CALLSENSE").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}
