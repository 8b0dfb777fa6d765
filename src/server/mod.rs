//! HTTP server implementation
//!
//! Serves the Prometheus exposition and a health endpoint.

pub mod routes;
pub mod server;
pub mod state;
mod utils;

pub use server::HttpServer;
pub use state::AppState;
