//! reqwest-backed PagerDuty REST API v2 client

use super::directory::UserDirectory;
use super::types::{ListUsersOptions, ListUsersResponse};
use crate::config::PagerDutyConfig;
use crate::utils::error::{ExporterError, Result};
use crate::utils::truncate_string;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const PAGERDUTY_ACCEPT: &str = "application/vnd.pagerduty+json;version=2";

/// Longest error body carried into an error message
const MAX_ERROR_BODY_LEN: usize = 512;

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    errors: Vec<String>,
}

/// PagerDuty API client
#[derive(Debug, Clone)]
pub struct PagerDutyClient {
    http: Client,
    api_base: String,
}

impl PagerDutyClient {
    /// Build a client from the `pagerduty` configuration section
    pub fn new(config: &PagerDutyConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(PAGERDUTY_ACCEPT));

        let mut auth = HeaderValue::from_str(&format!("Token token={}", config.auth_token))
            .map_err(|e| ExporterError::config(format!("Invalid auth token: {}", e)))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("pagerduty-exporter/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if parsed.error.errors.is_empty() => parsed.error.message,
            Ok(parsed) => format!(
                "{} ({})",
                parsed.error.message,
                parsed.error.errors.join("; ")
            ),
            Err(_) => truncate_string(body.trim(), MAX_ERROR_BODY_LEN),
        }
    }
}

#[async_trait]
impl UserDirectory for PagerDutyClient {
    async fn list_users(&self, options: &ListUsersOptions) -> Result<ListUsersResponse> {
        let url = format!("{}/users", self.api_base);
        debug!(url = %url, offset = options.offset, limit = options.limit, "GET users");

        let response = self
            .http
            .get(&url)
            .query(&options.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExporterError::api(
                status.as_u16(),
                Self::error_message(&body),
            ));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
