//! Error types for the exporter

use thiserror::Error;

/// Result type alias for the exporter
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Main error type for the exporter
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Non-success response from the PagerDuty API
    #[error("PagerDuty API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Paging metadata that cannot be followed
    #[error("Pagination error: {0}")]
    Pagination(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Metric registration or encoding errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),

    /// Timeout errors
    #[error("Timeout error: {0}")]
    Timeout(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),
}
