//! Prometheus registry owned by the exporter

use crate::collector::{LIST_USERS_OPERATION, PagerDutyApiCounter, UserInfoGauge};
use crate::utils::error::Result;
use prometheus::{Registry, TextEncoder};
use std::sync::Arc;

/// Everything the exporter exposes on its metrics endpoint
#[derive(Clone)]
pub struct ExporterMetrics {
    registry: Registry,
    user_info: UserInfoGauge,
    api_counter: Arc<PagerDutyApiCounter>,
}

impl std::fmt::Debug for ExporterMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExporterMetrics")
            .field("user_info", &self.user_info)
            .field("api_counter", &self.api_counter)
            .finish_non_exhaustive()
    }
}

impl ExporterMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let user_info = UserInfoGauge::new()?;
        registry.register(Box::new(user_info.clone()))?;

        let api_counter = PagerDutyApiCounter::new()?.with_operations(&[LIST_USERS_OPERATION]);
        registry.register(Box::new(api_counter.counter_vec().clone()))?;

        Ok(Self {
            registry,
            user_info,
            api_counter: Arc::new(api_counter),
        })
    }

    /// Handle to the user info gauge, to be injected into a collector
    pub fn user_info(&self) -> UserInfoGauge {
        self.user_info.clone()
    }

    pub fn api_counter(&self) -> Arc<PagerDutyApiCounter> {
        Arc::clone(&self.api_counter)
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> Result<String> {
        Ok(TextEncoder::new().encode_to_string(&self.registry.gather())?)
    }
}
