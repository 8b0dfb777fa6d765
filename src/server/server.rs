//! HTTP server core implementation

use crate::config::ServerConfig;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::dev::Server;
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use tracing::info;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            config: config.clone(),
            state,
        }
    }

    /// Bind the listener and return the running server
    ///
    /// Signal handling is left to the caller, which stops the server through
    /// its handle.
    pub fn bind(self) -> Result<Server> {
        let bind_addr = self.config.bind_addr();
        let port = self.config.port;
        let metrics_path = self.config.metrics_path.clone();

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            let metrics_path = metrics_path.clone();
            App::new()
                .app_data(state.clone())
                .wrap(Logger::default())
                .configure(move |cfg| routes::configure_routes(cfg, &metrics_path))
        })
        .workers(1)
        .disable_signals()
        .bind(&bind_addr)
        .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
        .run();

        info!(
            "Serving metrics on http://{}{}",
            bind_addr, self.config.metrics_path
        );
        Ok(server)
    }
}
