//! Scripted in-memory user directory

use async_trait::async_trait;
use pagerduty_exporter::pagerduty::{ListUsersOptions, ListUsersResponse, UserDirectory};
use pagerduty_exporter::{ExporterError, Result};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// One scripted answer to `list_users`
#[derive(Debug, Clone)]
pub enum Step {
    Page(ListUsersResponse),
    Fail { status: u16, message: String },
    Slow(Duration, ListUsersResponse),
}

impl Step {
    pub fn fail(status: u16, message: &str) -> Self {
        Step::Fail {
            status,
            message: message.to_string(),
        }
    }
}

/// Replays its script in order, then repeats the fallback step if one is set
#[derive(Debug, Default)]
pub struct ScriptedDirectory {
    script: Mutex<VecDeque<Step>>,
    fallback: Option<Step>,
    requests: Mutex<Vec<ListUsersOptions>>,
}

impl ScriptedDirectory {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(steps.into()),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_fallback(mut self, step: Step) -> Self {
        self.fallback = Some(step);
        self
    }

    /// Every options value `list_users` was called with
    pub fn requests(&self) -> Vec<ListUsersOptions> {
        self.requests.lock().clone()
    }

    pub fn offsets(&self) -> Vec<u32> {
        self.requests.lock().iter().map(|o| o.offset).collect()
    }
}

#[async_trait]
impl UserDirectory for ScriptedDirectory {
    async fn list_users(&self, options: &ListUsersOptions) -> Result<ListUsersResponse> {
        self.requests.lock().push(options.clone());

        let step = self.script.lock().pop_front().or_else(|| self.fallback.clone());
        match step {
            Some(Step::Page(page)) => Ok(page),
            Some(Step::Fail { status, message }) => Err(ExporterError::api(status, message)),
            Some(Step::Slow(delay, page)) => {
                tokio::time::sleep(delay).await;
                Ok(page)
            }
            None => Err(ExporterError::api(599, "script exhausted")),
        }
    }
}
