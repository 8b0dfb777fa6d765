//! Configuration loading utilities
//!
//! Environment variables override whatever the YAML file set.

use super::models::*;
use crate::utils::error::{ExporterError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ExporterError::config(format!("Invalid {}: {}", key, e)))
}

impl ExporterConfig {
    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env()
    }

    /// Apply overrides from the process environment
    pub fn apply_env(self) -> Result<Self> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        // PagerDuty configuration
        if let Some(token) = lookup("PAGERDUTY_AUTH_TOKEN") {
            self.pagerduty.auth_token = token;
        }
        if let Some(api_base) = lookup("PAGERDUTY_API_BASE") {
            self.pagerduty.api_base = api_base;
        }
        if let Some(timeout) = lookup("PAGERDUTY_TIMEOUT") {
            self.pagerduty.timeout_secs = parse_var("PAGERDUTY_TIMEOUT", &timeout)?;
        }
        if let Some(limit) = lookup("PAGERDUTY_LIST_LIMIT") {
            self.pagerduty.list_limit = parse_var("PAGERDUTY_LIST_LIMIT", &limit)?;
        }
        if let Some(teams) = lookup("PAGERDUTY_TEAM_FILTER") {
            self.pagerduty.team_filter = teams
                .split(',')
                .map(str::trim)
                .filter(|team| !team.is_empty())
                .map(str::to_string)
                .collect();
        }

        // Collector configuration
        if let Some(interval) = lookup("COLLECTOR_INTERVAL") {
            self.collector.interval_secs = parse_var("COLLECTOR_INTERVAL", &interval)?;
        }
        if let Some(timeout) = lookup("COLLECTOR_TIMEOUT") {
            self.collector.timeout_secs = parse_var("COLLECTOR_TIMEOUT", &timeout)?;
        }
        if let Some(policy) = lookup("COLLECTOR_ON_ERROR") {
            self.collector.on_error = parse_var("COLLECTOR_ON_ERROR", &policy)?;
        }

        // Server configuration
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.server.port = parse_var("SERVER_PORT", &port)?;
        }
        if let Some(path) = lookup("SERVER_METRICS_PATH") {
            self.server.metrics_path = path;
        }

        Ok(self)
    }
}
