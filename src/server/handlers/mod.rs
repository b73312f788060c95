//! API server HTTP handlers.

mod check;
mod metrics;
mod status;

pub use check::{check_headers_get, check_headers_post};
pub use metrics::metrics_handler;
pub use status::status_handler;
