//! PagerDuty API configuration

use super::*;
use serde::Deserialize;

/// PagerDuty API configuration
#[derive(Clone, Deserialize)]
pub struct PagerDutyConfig {
    /// REST API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// API access token
    #[serde(default)]
    pub auth_token: String,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Page size used when listing users
    #[serde(default = "default_list_limit")]
    pub list_limit: u32,
    /// Only export members of these team IDs
    #[serde(default)]
    pub team_filter: Vec<String>,
}

impl Default for PagerDutyConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            auth_token: String::new(),
            timeout_secs: default_timeout(),
            list_limit: default_list_limit(),
            team_filter: Vec::new(),
        }
    }
}

// The token never ends up in logs.
impl std::fmt::Debug for PagerDutyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerDutyConfig")
            .field("api_base", &self.api_base)
            .field(
                "auth_token",
                &if self.auth_token.is_empty() {
                    ""
                } else {
                    "[REDACTED]"
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .field("list_limit", &self.list_limit)
            .field("team_filter", &self.team_filter)
            .finish()
    }
}
