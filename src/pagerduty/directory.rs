//! Paged user listing abstraction

use super::types::{ListUsersOptions, ListUsersResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of user records, one page per call
///
/// Callers keep requesting with `offset += response.limit` until
/// `response.more` is false. No total count is promised up front.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch one page of users
    async fn list_users(&self, options: &ListUsersOptions) -> Result<ListUsersResponse>;
}
