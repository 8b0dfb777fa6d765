//! Collection of the PagerDuty user directory

use super::api_counter::ApiCallCounter;
use super::sample::{UserInfoSample, UserMetricList};
use super::sink::UserInfoGauge;
use crate::pagerduty::{ListUsersOptions, PAGERDUTY_LIST_LIMIT, UserDirectory};
use crate::utils::error::{ExporterError, Result};
use std::sync::Arc;
use tracing::debug;

/// Operation name recorded on the API counter for every page request
pub const LIST_USERS_OPERATION: &str = "ListUsers";

/// Fetches every user page by page and turns each user into an info sample
pub struct UserCollector {
    directory: Arc<dyn UserDirectory>,
    gauge: UserInfoGauge,
    api_counter: Arc<dyn ApiCallCounter>,
    list_limit: u32,
    team_filter: Vec<String>,
}

impl UserCollector {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        gauge: UserInfoGauge,
        api_counter: Arc<dyn ApiCallCounter>,
    ) -> Self {
        Self {
            directory,
            gauge,
            api_counter,
            list_limit: PAGERDUTY_LIST_LIMIT,
            team_filter: Vec::new(),
        }
    }

    /// Page size requested from the API
    pub fn with_list_limit(mut self, list_limit: u32) -> Self {
        self.list_limit = list_limit.max(1);
        self
    }

    /// Only collect members of these teams; empty collects everyone
    pub fn with_team_filter(mut self, team_filter: Vec<String>) -> Self {
        self.team_filter = team_filter;
        self
    }

    pub fn gauge(&self) -> &UserInfoGauge {
        &self.gauge
    }

    /// Fetch all users and prepare, but do not apply, their publication
    ///
    /// The first failing page aborts the pass. Nothing is published in that
    /// case, so the previously published vector stays in place.
    pub async fn collect(&self) -> Result<Publication> {
        let mut options = ListUsersOptions::new(self.list_limit);
        if !self.team_filter.is_empty() {
            options.team_ids = self.team_filter.clone();
        }

        let mut user_metrics = UserMetricList::new();

        loop {
            debug!(
                "fetch users (offset: {}, limit: {})",
                options.offset, options.limit
            );

            let result = self.directory.list_users(&options).await;
            self.api_counter.inc(LIST_USERS_OPERATION);
            let page = result?;

            for user in &page.users {
                user_metrics.add_info(UserInfoSample::from_user(user));
            }

            if !page.more {
                break;
            }

            // A page that reports no limit still advances by what was asked for.
            let step = if page.limit > 0 { page.limit } else { options.limit };
            options.offset = options.offset.checked_add(step).ok_or_else(|| {
                ExporterError::pagination(format!(
                    "next offset overflows (offset: {}, limit: {})",
                    options.offset, step
                ))
            })?;
        }

        Ok(Publication {
            gauge: self.gauge.clone(),
            samples: user_metrics,
        })
    }

    /// Clear everything this collector has published
    pub fn reset(&self) {
        self.gauge.reset();
    }
}

/// Samples of a finished pass, waiting to replace the published vector
#[must_use = "a publication does nothing until applied"]
#[derive(Debug)]
pub struct Publication {
    gauge: UserInfoGauge,
    samples: UserMetricList,
}

impl Publication {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[UserInfoSample] {
        self.samples.samples()
    }

    /// Swap the published vector for this pass
    pub fn apply(self) -> Result<()> {
        self.gauge.publish(self.samples.samples())
    }
}
