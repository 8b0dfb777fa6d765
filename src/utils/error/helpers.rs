//! Helper functions for creating specific error types

use super::types::ExporterError;

/// Helper functions for creating specific errors
impl ExporterError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn pagination<S: Into<String>>(message: S) -> Self {
        Self::Pagination(message.into())
    }

    pub fn timeout<S: Into<String>>(message: S) -> Self {
        Self::Timeout(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Whether the error came from talking to PagerDuty rather than from the exporter itself
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::HttpClient(_)
                | Self::Api { .. }
                | Self::Pagination(_)
                | Self::Serialization(_)
                | Self::Timeout(_)
        )
    }
}
