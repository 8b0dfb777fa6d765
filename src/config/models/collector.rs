//! Collection scheduling configuration

use super::*;
use serde::Deserialize;
use std::time::Duration;

/// What the runner does when a collection pass fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop the runner and surface the error, the process exits non-zero
    #[default]
    Exit,
    /// Log the error, keep the last published metrics and wait for the next pass
    Keep,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exit" => Ok(Self::Exit),
            "keep" => Ok(Self::Keep),
            other => Err(format!(
                "unknown failure policy '{}', expected 'exit' or 'keep'",
                other
            )),
        }
    }
}

/// Collector configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CollectorConfig {
    /// Seconds between the start of two collection passes
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    /// Upper bound for a single pass in seconds
    #[serde(default = "default_pass_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub on_error: FailurePolicy,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval(),
            timeout_secs: default_pass_timeout(),
            on_error: FailurePolicy::default(),
        }
    }
}

impl CollectorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
