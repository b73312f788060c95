//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, redirect limits, and input size limits.

/// Overall inspection timeout in seconds.
///
/// This is a wall-clock budget covering every hop of a redirect chain, not a
/// per-request timeout. A slow chain of individually fast hops still fails once
/// the budget is spent.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// TCP connection timeout in seconds (applies to each hop)
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent string for outbound requests.
///
/// Used whenever an inspection request does not carry its own user agent.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; header_inspector/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

/// Status codes treated as redirects when a `Location` header is present.
pub const REDIRECT_STATUS_CODES: [u16; 5] = [301, 302, 303, 307, 308];

/// Maximum URL length (2048 characters) accepted for inspection.
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;

/// Default API server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;
