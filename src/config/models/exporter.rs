//! Main exporter configuration

#![allow(missing_docs)]

use super::*;
use serde::Deserialize;

/// Main exporter configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ExporterConfig {
    /// PagerDuty API configuration
    #[serde(default)]
    pub pagerduty: PagerDutyConfig,
    /// Collection scheduling
    #[serde(default)]
    pub collector: CollectorConfig,
    /// Metrics server
    #[serde(default)]
    pub server: ServerConfig,
}
