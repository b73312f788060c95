//! Error handling and inspection statistics.
//!
//! This module provides:
//! - The inspection error taxonomy (`InspectError`, `ErrorKind`)
//! - Categorization of transport errors into that taxonomy
//! - Outcome counters for monitoring

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::InspectionStats;
pub use types::{ErrorKind, InitializationError, InspectError, RedirectFailure};
