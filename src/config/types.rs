//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Args, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_REDIRECT_HOPS, TCP_CONNECT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// HTTP method used for every hop of an inspection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RequestMethod {
    /// GET (default; some servers answer HEAD differently or not at all)
    Get,
    /// HEAD
    Head,
}

impl From<RequestMethod> for reqwest::Method {
    fn from(m: RequestMethod) -> Self {
        match m {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Head => reqwest::Method::HEAD,
        }
    }
}

/// Library configuration.
///
/// Can be constructed programmatically or flattened into a clap command.
///
/// # Examples
///
/// ```no_run
/// use header_inspector::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     max_redirects: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Overall inspection timeout in seconds (covers all redirect hops)
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// TCP connect timeout in seconds (per hop)
    #[arg(long, global = true, default_value_t = TCP_CONNECT_TIMEOUT_SECS)]
    pub connect_timeout_seconds: u64,

    /// Maximum number of redirects to follow before failing
    #[arg(long, global = true, default_value_t = MAX_REDIRECT_HOPS)]
    pub max_redirects: usize,

    /// Default HTTP User-Agent header value, used when a request carries none
    #[arg(long, global = true, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// HTTP method used for each hop: get|head
    #[arg(long, global = true, value_enum, default_value_t = RequestMethod::Get)]
    pub method: RequestMethod,

    /// Refuse to contact private, loopback, and link-local addresses
    /// (checked for the submitted URL and every redirect target)
    #[arg(long, global = true)]
    pub block_private_targets: bool,
}

impl Config {
    /// Overall wall-clock budget for one inspection.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Connect timeout applied to each hop.
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connect_timeout_seconds: TCP_CONNECT_TIMEOUT_SECS,
            max_redirects: MAX_REDIRECT_HOPS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            method: RequestMethod::Get,
            block_private_targets: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_request_method_conversion() {
        assert_eq!(reqwest::Method::from(RequestMethod::Get), reqwest::Method::GET);
        assert_eq!(
            reqwest::Method::from(RequestMethod::Head),
            reqwest::Method::HEAD
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.connect_timeout_seconds, 5);
        assert_eq!(config.max_redirects, 10);
        assert_eq!(config.method, RequestMethod::Get);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.block_private_targets);
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_default_user_agent_identifies_tool() {
        assert!(DEFAULT_USER_AGENT.contains("header_inspector/"));
        assert!(DEFAULT_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
