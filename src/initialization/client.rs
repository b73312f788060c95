//! HTTP client initialization.
//!
//! The inspection client never follows redirects on its own: every hop is
//! issued and examined by the redirect tracer.

use std::sync::Arc;

use crate::config::Config;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the shared HTTP client used for inspections.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following disabled (the tracer follows hops manually)
/// - Default User-Agent from the config (overridden per request when supplied)
/// - Per-hop connect timeout
/// - Per-request timeout equal to the overall budget (the tracer enforces the
///   real cross-hop budget; this is a backstop for a single stuck hop)
/// - No idle connection pool, so no connections outlive a request
/// - Rustls TLS backend
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_inspection_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(config.user_agent.clone())
        .connect_timeout(config.connect_timeout())
        .timeout(config.timeout())
        .pool_max_idle_per_host(0)
        .use_rustls_tls()
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_inspection_client_default_config() {
        let client = init_inspection_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_init_inspection_client_custom_user_agent() {
        let config = Config {
            user_agent: "custom-agent/2.0".to_string(),
            ..Default::default()
        };
        assert!(init_inspection_client(&config).is_ok());
    }

    #[test]
    fn test_init_inspection_client_rejects_invalid_user_agent() {
        // Header values cannot contain newlines
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            init_inspection_client(&config),
            Err(InitializationError::HttpClientError(_))
        ));
    }

    #[test]
    fn test_client_init_failure_is_invalid_input() {
        let config = Config {
            user_agent: "bad\nagent".to_string(),
            ..Default::default()
        };
        let err = init_inspection_client(&config).unwrap_err();
        let inspect_err = crate::error_handling::InspectError::from(err);
        assert_eq!(inspect_err.kind(), crate::error_handling::ErrorKind::InvalidInput);
    }
}
