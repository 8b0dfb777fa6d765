//! Validators for the exporter configuration sections

use super::trait_def::Validate;
use crate::config::models::*;
use crate::pagerduty::PAGERDUTY_LIST_LIMIT;
use url::Url;

impl Validate for PagerDutyConfig {
    fn validate(&self) -> Result<(), String> {
        if self.auth_token.trim().is_empty() {
            return Err("PagerDuty auth token is required".to_string());
        }

        let url = Url::parse(&self.api_base)
            .map_err(|e| format!("PagerDuty api_base has invalid URL format: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "PagerDuty api_base must use http:// or https:// scheme, got: {}",
                url.scheme()
            ));
        }

        if self.timeout_secs == 0 {
            return Err("PagerDuty timeout must be greater than 0".to_string());
        }

        if self.list_limit == 0 || self.list_limit > PAGERDUTY_LIST_LIMIT {
            return Err(format!(
                "PagerDuty list limit must be between 1 and {}",
                PAGERDUTY_LIST_LIMIT
            ));
        }

        if self.team_filter.iter().any(|team| team.trim().is_empty()) {
            return Err("Team filter cannot contain empty team IDs".to_string());
        }

        Ok(())
    }
}

impl Validate for CollectorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interval_secs == 0 {
            return Err("Collector interval must be greater than 0".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Collector timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if !self.metrics_path.starts_with('/') {
            return Err("Metrics path must start with '/'".to_string());
        }

        if self.metrics_path == "/health" {
            return Err("Metrics path cannot shadow the /health endpoint".to_string());
        }

        Ok(())
    }
}
