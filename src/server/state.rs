//! Application state shared across HTTP handlers

use crate::collector::CollectionStatus;
use crate::metrics::ExporterMetrics;
use std::sync::Arc;

/// HTTP server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Registry rendered on the metrics path
    pub metrics: Arc<ExporterMetrics>,
    /// Outcome of the collection passes so far
    pub status: Arc<CollectionStatus>,
}

impl AppState {
    pub fn new(metrics: Arc<ExporterMetrics>, status: Arc<CollectionStatus>) -> Self {
        Self { metrics, status }
    }
}
