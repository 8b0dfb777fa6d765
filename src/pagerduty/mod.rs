//! PagerDuty REST API access
//!
//! The exporter only needs one endpoint, the paged user list. It is reached
//! through the [`UserDirectory`] trait so collectors can run against a scripted
//! directory in tests.

pub mod client;
pub mod directory;
pub mod types;

pub use client::PagerDutyClient;
pub use directory::UserDirectory;
pub use types::{ListUsersOptions, ListUsersResponse, TeamReference, User};

/// Maximum page size accepted by the PagerDuty list endpoints
pub const PAGERDUTY_LIST_LIMIT: u32 = 100;
