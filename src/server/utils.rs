//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::ExporterError;
use tracing::{info, warn};

#[cfg(unix)]
async fn terminate() -> &'static str {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
            "SIGTERM"
        }
        Err(e) => {
            warn!(error = %e, "SIGTERM handler unavailable");
            std::future::pending().await
        }
    }
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending().await
}

impl HttpServer {
    /// Resolves on Ctrl+C or SIGTERM
    ///
    /// A signal whose handler cannot be installed is never waited on.
    pub async fn shutdown_signal() {
        let received = tokio::select! {
            res = tokio::signal::ctrl_c() => match res {
                Ok(()) => "Ctrl+C",
                Err(e) => {
                    warn!(error = %e, "Ctrl+C handler unavailable");
                    terminate().await
                }
            },
            name = terminate() => name,
        };
        info!(signal = received, "Shutdown requested");
    }

    /// Format a user-friendly error message for port binding failures
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> ExporterError {
        let error_str = error.to_string();

        if error.kind() == std::io::ErrorKind::AddrInUse
            || error_str.contains("os error 48")
            || error_str.contains("os error 98")
        {
            ExporterError::server(format!(
                "Port {} is already in use; pick another with server.port or SERVER_PORT={}",
                port,
                port.saturating_add(1)
            ))
        } else if error.kind() == std::io::ErrorKind::PermissionDenied {
            ExporterError::server(format!(
                "Permission denied for port {}; use a port >= 1024",
                port
            ))
        } else {
            ExporterError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
