//! PagerDuty user collection
//!
//! A [`UserCollector`] walks the paged user list and produces a
//! [`Publication`]; applying it swaps the `pagerduty_user_info` gauge vector in
//! one step. [`CollectorRunner`] drives passes on an interval.

mod api_counter;
mod runner;
mod sample;
mod sink;
mod user;

pub use api_counter::{API_COUNTER_METRIC, ApiCallCounter, PagerDutyApiCounter};
pub use runner::{CollectionStatus, CollectorRunner};
pub use sample::{USER_INFO_LABELS, UserInfoSample, UserMetricList};
pub use sink::{USER_INFO_HELP, USER_INFO_METRIC, UserInfoGauge};
pub use user::{LIST_USERS_OPERATION, Publication, UserCollector};
