//! Error type definitions.
//!
//! This module defines the inspection error taxonomy and the initialization errors
//! raised while setting up shared resources.

use std::fmt;
use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a redirect chain was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectFailure {
    /// More redirects than the configured cap.
    HopLimit(usize),
    /// The chain returned to a URL it had already visited.
    Loop,
}

impl fmt::Display for RedirectFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectFailure::HopLimit(max) => {
                write!(f, "exceeded the limit of {} redirects", max)
            }
            RedirectFailure::Loop => f.write_str("redirect loop detected"),
        }
    }
}

/// Failure of a single inspection.
///
/// Every variant is terminal: nothing is retried and no partial result is
/// produced. The `Display` output is meant to be shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// The submitted URL was rejected before any network activity.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// DNS, connection, or TLS failure on some hop.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The overall inspection budget ran out.
    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The redirect chain was too long or looped.
    #[error("Too many redirects: {reason} (at {url})")]
    TooManyRedirects {
        /// Hop cap or loop.
        reason: RedirectFailure,
        /// The redirect target that tripped the check.
        url: String,
    },
}

/// Client setup fails only on local configuration (in practice an invalid
/// user agent), so it is reported as invalid input rather than a network fault.
impl From<InitializationError> for InspectError {
    fn from(error: InitializationError) -> Self {
        InspectError::InvalidInput(error.to_string())
    }
}

impl InspectError {
    /// Returns the stable category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            InspectError::InvalidInput(_) => ErrorKind::InvalidInput,
            InspectError::NetworkError(_) => ErrorKind::NetworkError,
            InspectError::Timeout(_) => ErrorKind::Timeout,
            InspectError::TooManyRedirects { .. } => ErrorKind::TooManyRedirects,
        }
    }
}

/// Categories of inspection failures, used for counters and API payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    InvalidInput,
    NetworkError,
    Timeout,
    TooManyRedirects,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::NetworkError => "NetworkError",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::TooManyRedirects => "TooManyRedirects",
        }
    }
}
