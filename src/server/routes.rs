//! Metrics and health endpoints

use crate::server::state::AppState;
use actix_web::{HttpResponse, Result as ActixResult, web};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Content type of the Prometheus text format
pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Configure exporter routes, serving metrics on `metrics_path`
pub fn configure_routes(cfg: &mut web::ServiceConfig, metrics_path: &str) {
    cfg.route(metrics_path, web::get().to(metrics))
        .route("/health", web::get().to(health_check));
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub version: Cow<'static, str>,
    pub last_success: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub passes: u64,
    pub failures: u64,
}

/// Prometheus scrape endpoint
async fn metrics(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Metrics requested");

    let body = state.metrics.render()?;
    Ok(HttpResponse::Ok()
        .content_type(PROMETHEUS_CONTENT_TYPE)
        .body(body))
}

/// Liveness plus the outcome of the latest collection pass
///
/// Reports `degraded` while the latest pass failed; the process itself is up.
async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let last_error = state.status.last_error();
    let health = HealthStatus {
        status: Cow::Borrowed(if last_error.is_some() {
            "degraded"
        } else {
            "healthy"
        }),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        last_success: state.status.last_success(),
        last_error,
        passes: state.status.passes(),
        failures: state.status.failures(),
    };

    Ok(HttpResponse::Ok().json(health))
}
