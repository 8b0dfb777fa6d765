//! Periodic execution of collection passes

use super::user::UserCollector;
use crate::config::{CollectorConfig, FailurePolicy};
use crate::utils::error::{ExporterError, Result};
use crate::utils::format_duration;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tokio::time::{MissedTickBehavior, interval, timeout};
use tracing::{error, info, warn};

/// Outcome bookkeeping shared with the health endpoint
#[derive(Debug, Default)]
pub struct CollectionStatus {
    last_success: RwLock<Option<DateTime<Utc>>>,
    last_error: RwLock<Option<String>>,
    passes: AtomicU64,
    failures: AtomicU64,
}

impl CollectionStatus {
    pub fn new() -> Self {
        Self::default()
    }

    fn record_success(&self) {
        self.passes.fetch_add(1, Ordering::Relaxed);
        *self.last_success.write() = Some(Utc::now());
        *self.last_error.write() = None;
    }

    fn record_failure(&self, err: &ExporterError) {
        self.passes.fetch_add(1, Ordering::Relaxed);
        self.failures.fetch_add(1, Ordering::Relaxed);
        *self.last_error.write() = Some(err.to_string());
    }

    pub fn last_success(&self) -> Option<DateTime<Utc>> {
        *self.last_success.read()
    }

    pub fn last_error(&self) -> Option<String> {
        self.last_error.read().clone()
    }

    /// Passes attempted so far, failed ones included
    pub fn passes(&self) -> u64 {
        self.passes.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Runs collection passes one after another
///
/// Passes never overlap: the next tick is only awaited once the current pass
/// has published or failed.
pub struct CollectorRunner {
    collector: UserCollector,
    interval: Duration,
    timeout: Duration,
    on_error: FailurePolicy,
    status: Arc<CollectionStatus>,
}

impl CollectorRunner {
    pub fn new(collector: UserCollector, config: &CollectorConfig) -> Self {
        Self {
            collector,
            interval: config.interval(),
            timeout: config.timeout(),
            on_error: config.on_error,
            status: Arc::new(CollectionStatus::new()),
        }
    }

    pub fn status(&self) -> Arc<CollectionStatus> {
        Arc::clone(&self.status)
    }

    pub fn collector(&self) -> &UserCollector {
        &self.collector
    }

    /// Run a single pass and publish its result, returning the sample count
    pub async fn run_once(&self) -> Result<usize> {
        let started = Instant::now();

        let outcome = match timeout(self.timeout, self.collector.collect()).await {
            Ok(Ok(publication)) => {
                let samples = publication.len();
                publication.apply().map(|()| samples)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(ExporterError::timeout(format!(
                "collection pass exceeded {}",
                format_duration(self.timeout.as_millis() as u64)
            ))),
        };

        match &outcome {
            Ok(samples) => {
                self.status.record_success();
                info!(
                    samples = *samples,
                    elapsed = %format_duration(started.elapsed().as_millis() as u64),
                    "Published PagerDuty user metrics"
                );
            }
            Err(e) => self.status.record_failure(e),
        }

        outcome
    }

    /// Run passes on the configured interval until `shutdown` resolves
    ///
    /// Shutdown is honoured mid-pass too; the in-flight pass is dropped
    /// before it publishes.
    ///
    /// With [`FailurePolicy::Exit`] the first failing pass ends the loop with
    /// its error. With [`FailurePolicy::Keep`] the failure is logged and the
    /// previously published metrics stay until a later pass succeeds.
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        info!(
            interval = %format_duration(self.interval.as_millis() as u64),
            on_error = ?self.on_error,
            "Starting user collector"
        );

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping user collector");
                    return Ok(());
                }
                _ = ticker.tick() => {}
            }

            // A pass publishes nothing before it completes.
            let outcome = tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping user collector during a collection pass");
                    return Ok(());
                }
                outcome = self.run_once() => outcome,
            };

            if let Err(e) = outcome {
                match self.on_error {
                    FailurePolicy::Exit => {
                        error!(error = %e, "User collection failed, stopping");
                        return Err(e);
                    }
                    FailurePolicy::Keep => {
                        if e.is_fetch_failure() {
                            warn!(error = %e, "Fetching PagerDuty users failed");
                        } else {
                            error!(error = %e, "User collection failed");
                        }
                        warn!(
                            series = self.collector.gauge().len(),
                            "Keeping previously published user metrics"
                        );
                    }
                }
            }
        }
    }
}
