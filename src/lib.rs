//! # pagerduty-exporter
//!
//! Publishes the PagerDuty user directory as the Prometheus info metric
//! `pagerduty_user_info`, one series per user with value `1` and the user's
//! attributes as labels.
//!
//! ## Collecting once
//!
//! ```rust,no_run
//! use pagerduty_exporter::{Config, ExporterMetrics, PagerDutyClient, UserCollector};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let metrics = ExporterMetrics::new()?;
//!
//!     let collector = UserCollector::new(
//!         Arc::new(PagerDutyClient::new(config.pagerduty())?),
//!         metrics.user_info(),
//!         metrics.api_counter(),
//!     )
//!     .with_list_limit(config.pagerduty().list_limit)
//!     .with_team_filter(config.pagerduty().team_filter.clone());
//!
//!     collector.collect().await?.apply()?;
//!     println!("{}", metrics.render()?);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod collector;
pub mod config;
pub mod metrics;
pub mod pagerduty;
pub mod server;
pub mod utils;

// Re-export main types
pub use collector::{
    ApiCallCounter, CollectionStatus, CollectorRunner, PagerDutyApiCounter, Publication,
    UserCollector, UserInfoGauge, UserInfoSample,
};
pub use config::Config;
pub use metrics::ExporterMetrics;
pub use pagerduty::{PagerDutyClient, UserDirectory};
pub use utils::error::{ExporterError, Result};
