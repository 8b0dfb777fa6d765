//! Configuration management for the exporter
//!
//! This module handles loading, validation, and management of all exporter configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ExporterError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the exporter
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Exporter configuration
    pub exporter: ExporterConfig,
}

impl Config {
    /// Load configuration from file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ExporterError::config(format!("Failed to read config file: {}", e)))?;

        let exporter = Self::parse_yaml(&content)?.apply_env()?;
        let config = Self { exporter };

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let exporter = ExporterConfig::from_env()?;
        let config = Self { exporter };

        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document without touching the environment
    pub fn parse_yaml(content: &str) -> Result<ExporterConfig> {
        serde_yaml::from_str(content)
            .map_err(|e| ExporterError::config(format!("Failed to parse config: {}", e)))
    }

    /// Get PagerDuty configuration
    pub fn pagerduty(&self) -> &PagerDutyConfig {
        &self.exporter.pagerduty
    }

    /// Get collector configuration
    pub fn collector(&self) -> &CollectorConfig {
        &self.exporter.collector
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.exporter.server
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.exporter
            .pagerduty
            .validate()
            .map_err(|e| ExporterError::config(format!("PagerDuty config error: {}", e)))?;

        self.exporter
            .collector
            .validate()
            .map_err(|e| ExporterError::config(format!("Collector config error: {}", e)))?;

        self.exporter
            .server
            .validate()
            .map_err(|e| ExporterError::config(format!("Server config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

}
