//! Counting of PagerDuty API calls

use crate::utils::error::Result;
use parking_lot::RwLock;
use prometheus::{IntCounterVec, Opts};
use std::collections::HashSet;
use std::sync::Arc;

pub const API_COUNTER_METRIC: &str = "pagerduty_api_counter";

/// Increment-only counter of outgoing API calls, keyed by operation name
pub trait ApiCallCounter: Send + Sync {
    fn inc(&self, operation: &str);
}

/// `pagerduty_api_counter{name}` backed by a prometheus counter vector
#[derive(Clone)]
pub struct PagerDutyApiCounter {
    counter: IntCounterVec,
    /// Operations whose series exists in `counter`
    known: Arc<RwLock<HashSet<String>>>,
}

impl std::fmt::Debug for PagerDutyApiCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerDutyApiCounter")
            .field("metric", &API_COUNTER_METRIC)
            .finish()
    }
}

impl PagerDutyApiCounter {
    pub fn new() -> Result<Self> {
        let counter = IntCounterVec::new(
            Opts::new(API_COUNTER_METRIC, "PagerDuty api counter"),
            &["name"],
        )?;
        Ok(Self {
            counter,
            known: Arc::new(RwLock::new(HashSet::new())),
        })
    }

    /// Create the series for `operations` up front so they are exported as 0
    pub fn with_operations(self, operations: &[&str]) -> Self {
        for operation in operations {
            self.track(operation);
        }
        self
    }

    /// Current count for one operation
    ///
    /// Reading an operation that was never counted does not create its series.
    pub fn get(&self, operation: &str) -> u64 {
        if !self.known.read().contains(operation) {
            return 0;
        }
        self.counter.with_label_values(&[operation]).get()
    }

    fn track(&self, operation: &str) {
        if self.known.read().contains(operation) {
            return;
        }
        let _ = self.counter.with_label_values(&[operation]);
        self.known.write().insert(operation.to_string());
    }

    /// Underlying vector, for registration in a registry
    pub fn counter_vec(&self) -> &IntCounterVec {
        &self.counter
    }
}

impl ApiCallCounter for PagerDutyApiCounter {
    fn inc(&self, operation: &str) {
        self.track(operation);
        self.counter.with_label_values(&[operation]).inc();
    }
}
