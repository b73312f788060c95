//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - HTTP client (redirects disabled, timeouts applied)
//! - Logger

mod client;
mod logger;

// Re-export public API
pub use client::init_inspection_client;
pub use logger::init_logger_with;
