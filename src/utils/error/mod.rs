//! Error handling for the exporter
//!
//! This module defines all error types used throughout the exporter.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::ErrorResponse;
pub use types::{ExporterError, Result};
