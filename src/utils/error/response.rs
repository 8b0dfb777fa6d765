//! HTTP response handling for errors

use super::types::ExporterError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// JSON body returned by the exporter's HTTP endpoints on failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

impl ResponseError for ExporterError {
    fn status_code(&self) -> StatusCode {
        match self {
            ExporterError::Api { .. }
            | ExporterError::HttpClient(_)
            | ExporterError::Pagination(_) => StatusCode::BAD_GATEWAY,
            ExporterError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = match self {
            ExporterError::Config(_) => "CONFIG_ERROR",
            ExporterError::HttpClient(_) => "HTTP_CLIENT_ERROR",
            ExporterError::Api { .. } => "PAGERDUTY_API_ERROR",
            ExporterError::Pagination(_) => "PAGINATION_ERROR",
            ExporterError::Serialization(_) | ExporterError::Yaml(_) => "SERIALIZATION_ERROR",
            ExporterError::Io(_) => "IO_ERROR",
            ExporterError::Metrics(_) => "METRICS_ERROR",
            ExporterError::Timeout(_) => "TIMEOUT",
            ExporterError::Server(_) => "INTERNAL_ERROR",
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            code,
            message: self.to_string(),
        })
    }
}
