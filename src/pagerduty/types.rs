//! Wire types for the PagerDuty `GET /users` endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reference to a team embedded in a user record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamReference {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Human readable team name
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(rename = "self", default, deserialize_with = "null_as_default")]
    pub self_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub html_url: String,
}

/// A PagerDuty user as returned by the list endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_zone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<TeamReference>,
}

impl User {
    /// Team summaries joined with `,` in the order the API returned them
    pub fn team_summaries(&self) -> String {
        self.teams
            .iter()
            .map(|team| team.summary.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Query options for one page of `GET /users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsersOptions {
    pub limit: u32,
    pub offset: u32,
    /// Restrict the listing to members of these teams; empty means no scoping
    pub team_ids: Vec<String>,
}

impl ListUsersOptions {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            offset: 0,
            team_ids: Vec::new(),
        }
    }

    /// Query string pairs in the form the REST API expects
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        pairs.extend(
            self.team_ids
                .iter()
                .map(|team_id| ("team_ids[]", team_id.clone())),
        );
        pairs
    }
}

/// One page of users
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub total: Option<u64>,
}
