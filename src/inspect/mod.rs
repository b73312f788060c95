//! HTTP header inspection.
//!
//! An inspection validates the submitted URL, follows its redirect chain hop by
//! hop, and reports the terminal response:
//!
//! 1. **Validation**: the URL must be an absolute http/https URL; nothing is
//!    sent otherwise.
//! 2. **Tracing**: follows redirects one hop at a time, bounded by the redirect cap, loop
//!    detection, and one overall timeout across all hops.
//! 3. **Normalization**: status, final URL, folded headers, and the visited
//!    URLs in order.

mod normalize;
mod redirects;
mod types;

use std::sync::Arc;

use log::{debug, info};
use reqwest::header::HeaderValue;

use crate::config::Config;
use crate::error_handling::{InitializationError, InspectError};
use crate::initialization::init_inspection_client;
use crate::security::{check_target_allowed, parse_inspection_url};

pub use normalize::fold_headers;
pub use types::{HeaderList, InspectionRequest, InspectionResult};

use normalize::normalize_chain;
use redirects::RedirectTracer;

/// Runs inspections with a shared client and configuration.
///
/// Cheap to clone. Concurrent inspections share only the immutable client and
/// config.
#[derive(Clone)]
pub struct Inspector {
    client: Arc<reqwest::Client>,
    config: Arc<Config>,
}

impl Inspector {
    /// Creates an inspector, building its HTTP client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built
    /// (e.g. the default user agent is not a valid header value).
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let client = init_inspection_client(&config)?;
        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Inspects one URL.
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: malformed or disallowed URL, or an invalid user agent;
    ///   raised before any network activity
    /// - `NetworkError`: DNS, connect, or TLS failure on any hop
    /// - `Timeout`: the overall budget (`Config::timeout_seconds`) ran out
    /// - `TooManyRedirects`: redirect cap exceeded or loop detected
    pub async fn inspect(
        &self,
        request: &InspectionRequest,
    ) -> Result<InspectionResult, InspectError> {
        let start = parse_inspection_url(&request.url)?;
        if self.config.block_private_targets {
            check_target_allowed(&start)?;
        }

        let user_agent = request
            .user_agent_override()
            .unwrap_or(self.config.user_agent.as_str());
        HeaderValue::from_str(user_agent).map_err(|_| {
            InspectError::InvalidInput("User agent contains invalid characters".to_string())
        })?;

        let budget = self.config.timeout();
        let tracer = RedirectTracer {
            client: &self.client,
            user_agent,
            method: self.config.method.into(),
            max_redirects: self.config.max_redirects,
            block_private_targets: self.config.block_private_targets,
            budget,
        };

        debug!("Inspecting {} (user agent: {})", start, user_agent);
        let outcome = match tokio::time::timeout(budget, tracer.trace(start.clone())).await {
            Ok(outcome) => outcome,
            // Dropping the trace future cancels the in-flight hop
            Err(_) => Err(InspectError::Timeout(budget)),
        };

        match outcome {
            Ok(chain) => {
                let result = normalize_chain(chain);
                info!(
                    "{} -> {} ({}, {} redirect{})",
                    start,
                    result.url,
                    result.status_code,
                    result.redirects.len(),
                    if result.redirects.len() == 1 { "" } else { "s" }
                );
                Ok(result)
            }
            Err(e) => {
                info!("Inspection of {} failed: {}", start, e);
                Err(e)
            }
        }
    }
}

/// One-shot inspection with the default configuration.
///
/// Equivalent to `checkHeaders(url, userAgent)` on the API.
///
/// # Examples
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let result = header_inspector::check_headers("https://example.com", None).await;
/// match result {
///     Ok(r) => println!("{} {} via {:?}", r.status_code, r.url, r.redirects),
///     Err(e) => eprintln!("{}", e),
/// }
/// # }
/// ```
pub async fn check_headers(
    url: &str,
    user_agent: Option<&str>,
) -> Result<InspectionResult, InspectError> {
    let inspector = Inspector::new(Config::default())?;
    let mut request = InspectionRequest::new(url);
    request.user_agent = user_agent.map(str::to_string);
    inspector.inspect(&request).await
}
