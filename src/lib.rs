//! header_inspector library: redirect-tracing HTTP header inspection
//!
//! Given a URL (and optionally a User-Agent), the inspector requests it with
//! automatic redirects disabled, follows each 301/302/303/307/308 hop itself,
//! and reports the terminal status code, final URL, response headers, and the
//! ordered list of URLs it was redirected through.
//!
//! # Example
//!
//! ```no_run
//! use header_inspector::{Config, InspectionRequest, Inspector};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let inspector = Inspector::new(Config {
//!     max_redirects: 5,
//!     ..Default::default()
//! })?;
//!
//! let request = InspectionRequest::new("http://example.com").with_user_agent("my-bot/1.0");
//! let result = inspector.inspect(&request).await?;
//! println!("{} {} after {} redirects", result.status_code, result.url, result.redirects.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
mod error_handling;
pub mod initialization;
mod inspect;
pub mod security;
pub mod server;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, RequestMethod};
pub use error_handling::{
    categorize_reqwest_error, ErrorKind, InitializationError, InspectError, InspectionStats,
    RedirectFailure,
};
pub use inspect::{
    check_headers, fold_headers, HeaderList, InspectionRequest, InspectionResult, Inspector,
};
