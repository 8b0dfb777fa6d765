//! Configuration data models
//!
//! This module defines all configuration structures used throughout the exporter.

#![allow(missing_docs)]

pub mod collector;
pub mod exporter;
pub mod pagerduty;
pub mod server;

// Re-export all configuration types
pub use collector::*;
pub use exporter::*;
pub use pagerduty::*;
pub use server::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

pub fn default_metrics_path() -> String {
    "/metrics".to_string()
}

pub fn default_api_base() -> String {
    "https://api.pagerduty.com".to_string()
}

/// Default HTTP timeout towards PagerDuty in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_list_limit() -> u32 {
    crate::pagerduty::PAGERDUTY_LIST_LIMIT
}

/// Default time between collection passes in seconds
pub fn default_interval() -> u64 {
    300
}

/// Default upper bound for one collection pass in seconds
pub fn default_pass_timeout() -> u64 {
    120
}
