//! Published `pagerduty_user_info` gauge vector

use super::sample::{USER_INFO_LABELS, UserInfoSample};
use crate::utils::error::Result;
use arc_swap::ArcSwap;
use prometheus::core::{Collector, Desc};
use prometheus::proto::MetricFamily;
use prometheus::{GaugeVec, Opts};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

pub const USER_INFO_METRIC: &str = "pagerduty_user_info";
pub const USER_INFO_HELP: &str = "PagerDuty user";

/// An immutable published pass
struct Snapshot {
    vec: GaugeVec,
    samples: Vec<UserInfoSample>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("series", &self.samples.len())
            .finish()
    }
}

impl Snapshot {
    fn build(samples: &[UserInfoSample]) -> Result<Self> {
        let vec = GaugeVec::new(
            Opts::new(USER_INFO_METRIC, USER_INFO_HELP),
            &USER_INFO_LABELS,
        )?;

        let mut seen = HashSet::with_capacity(samples.len());
        let mut kept = Vec::with_capacity(samples.len());
        for sample in samples {
            // A repeated tuple maps onto the same series.
            if !seen.insert(sample) {
                continue;
            }
            vec.get_metric_with_label_values(&sample.label_values())?
                .set(1.0);
            kept.push(sample.clone());
        }

        Ok(Self { vec, samples: kept })
    }
}

#[derive(Debug)]
struct Inner {
    desc: Desc,
    current: ArcSwap<Snapshot>,
}

/// Shared handle to the user info gauge vector
///
/// Every clone observes the same published snapshot. Publishing builds the next
/// vector off to the side and swaps it in with a single pointer store, so a
/// scrape sees either the previous pass or the new one in full.
#[derive(Debug, Clone)]
pub struct UserInfoGauge {
    inner: Arc<Inner>,
}

impl UserInfoGauge {
    pub fn new() -> Result<Self> {
        let desc = Desc::new(
            USER_INFO_METRIC.to_string(),
            USER_INFO_HELP.to_string(),
            USER_INFO_LABELS.iter().map(|label| label.to_string()).collect(),
            HashMap::new(),
        )?;

        Ok(Self {
            inner: Arc::new(Inner {
                desc,
                current: ArcSwap::from_pointee(Snapshot::build(&[])?),
            }),
        })
    }

    /// Replace everything published with exactly `samples`
    pub fn publish(&self, samples: &[UserInfoSample]) -> Result<()> {
        let snapshot = Snapshot::build(samples)?;
        debug!(series = snapshot.samples.len(), "Publishing user info snapshot");
        self.inner.current.store(Arc::new(snapshot));
        Ok(())
    }

    /// Drop all published series
    pub fn reset(&self) {
        if let Ok(empty) = Snapshot::build(&[]) {
            self.inner.current.store(Arc::new(empty));
        }
    }

    /// Number of published series
    pub fn len(&self) -> usize {
        self.inner.current.load().samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples of the currently published pass
    pub fn snapshot(&self) -> Vec<UserInfoSample> {
        self.inner.current.load().samples.clone()
    }
}

impl Collector for UserInfoGauge {
    fn desc(&self) -> Vec<&Desc> {
        vec![&self.inner.desc]
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let snapshot = self.inner.current.load();
        // The text encoder rejects families without series.
        if snapshot.samples.is_empty() {
            return Vec::new();
        }
        snapshot.vec.collect()
    }
}
