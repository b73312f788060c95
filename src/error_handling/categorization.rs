//! Error categorization.
//!
//! Maps transport-level `reqwest` failures onto the inspection error taxonomy.

use std::error::Error as StdError;
use std::time::Duration;

use super::types::InspectError;

/// Categorizes a `reqwest::Error` raised while sending one hop.
///
/// `budget` is the overall inspection budget, reported when the client-level
/// timeout fires before the outer one does.
///
/// # Returns
///
/// - `NetworkError` for connect failures, including the per-hop connect timeout
/// - `Timeout` for the client-level request timeout
/// - `InvalidInput` for request builder failures (the client refused the URL)
/// - `NetworkError` for everything else (DNS, TLS, protocol errors)
pub fn categorize_reqwest_error(error: &reqwest::Error, budget: Duration) -> InspectError {
    if error.is_connect() {
        InspectError::NetworkError(describe_reqwest_error(error))
    } else if error.is_timeout() {
        InspectError::Timeout(budget)
    } else if error.is_builder() {
        InspectError::InvalidInput(describe_reqwest_error(error))
    } else {
        InspectError::NetworkError(describe_reqwest_error(error))
    }
}

/// Builds a message from a reqwest error and its source chain.
///
/// reqwest's own `Display` is terse ("error sending request for url (...)"); the
/// useful detail (DNS failure, connection refused, certificate problem) lives in
/// the sources.
pub fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let mut msg = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_msg = cause.to_string();
        // hyper and rustls often repeat the same text at several levels
        if !msg.contains(&cause_msg) {
            msg.push_str(": ");
            msg.push_str(&cause_msg);
        }
        source = cause.source();
    }
    msg
}
