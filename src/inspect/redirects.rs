//! HTTP redirect chain tracing.
//!
//! Follows a redirect chain one hop at a time with a client whose automatic
//! redirect handling is disabled, so every hop is individually recorded and
//! bounded. The loop is an explicit state machine: each step either moves to
//! the next URL, stops at a terminal response, or fails.

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, LOCATION, USER_AGENT};
use reqwest::{Method, StatusCode};
use url::Url;

use crate::config::REDIRECT_STATUS_CODES;
use crate::error_handling::{categorize_reqwest_error, InspectError, RedirectFailure};
use crate::security::{check_target_allowed, is_http_scheme};

/// Terminal response of a traced chain, with the URLs visited on the way.
#[derive(Debug)]
pub(crate) struct TracedChain {
    /// URL that produced the terminal response
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Pre-redirect URLs, in visit order
    pub visited: Vec<Url>,
}

enum TraceState {
    Following(Url),
    Terminal {
        url: Url,
        status: StatusCode,
        headers: HeaderMap,
    },
    Failed(InspectError),
}

/// Per-inspection redirect tracer.
pub(crate) struct RedirectTracer<'a> {
    pub client: &'a reqwest::Client,
    /// Sent on every hop
    pub user_agent: &'a str,
    pub method: Method,
    pub max_redirects: usize,
    pub block_private_targets: bool,
    /// Overall budget, reported if the client's own timeout fires first
    pub budget: Duration,
}

impl RedirectTracer<'_> {
    /// Follows redirects from `start` until a terminal response or a failure.
    ///
    /// # Errors
    ///
    /// - `TooManyRedirects` when the hop cap is exceeded or a URL is revisited
    /// - `NetworkError` / `Timeout` when a hop's request fails
    /// - `InvalidInput` when private-target blocking rejects a redirect target
    pub async fn trace(&self, start: Url) -> Result<TracedChain, InspectError> {
        let mut visited: Vec<Url> = Vec::new();
        let mut state = TraceState::Following(start);

        loop {
            state = match state {
                TraceState::Following(current) => self.step(current, &mut visited).await,
                TraceState::Terminal {
                    url,
                    status,
                    headers,
                } => {
                    return Ok(TracedChain {
                        url,
                        status,
                        headers,
                        visited,
                    })
                }
                TraceState::Failed(error) => return Err(error),
            };
        }
    }

    /// Issues one hop and decides the next state.
    async fn step(&self, current: Url, visited: &mut Vec<Url>) -> TraceState {
        debug!("Hop {}: {} {}", visited.len(), self.method, current);

        let response = match self
            .client
            .request(self.method.clone(), current.clone())
            .header(USER_AGENT, self.user_agent)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return TraceState::Failed(categorize_reqwest_error(&e, self.budget)),
        };

        let status = response.status();
        if !is_redirect_status(status) {
            debug!("Terminal response {} from {}", status.as_u16(), current);
            return TraceState::Terminal {
                url: current,
                status,
                headers: response.headers().clone(),
            };
        }

        let Some(next) = resolve_location(&current, response.headers()) else {
            warn!(
                "Redirect status {} for {} without a usable Location header; treating as terminal",
                status.as_u16(),
                current
            );
            return TraceState::Terminal {
                url: current,
                status,
                headers: response.headers().clone(),
            };
        };

        debug!("{} redirected ({}) to {}", current, status.as_u16(), next);
        visited.push(current);

        match self.admit(next, visited) {
            Ok(next) => TraceState::Following(next),
            Err(e) => TraceState::Failed(e),
        }
    }

    /// Decides whether a resolved redirect target may be requested.
    ///
    /// `visited` already includes the hop that redirected. The cap is checked
    /// before loop detection, and private-target blocking applies to every
    /// target when enabled.
    fn admit(&self, next: Url, visited: &[Url]) -> Result<Url, InspectError> {
        if visited.len() > self.max_redirects {
            return Err(InspectError::TooManyRedirects {
                reason: RedirectFailure::HopLimit(self.max_redirects),
                url: next.to_string(),
            });
        }

        let next_key = loop_key(&next);
        if visited.iter().any(|seen| loop_key(seen) == next_key) {
            return Err(InspectError::TooManyRedirects {
                reason: RedirectFailure::Loop,
                url: next.to_string(),
            });
        }

        if self.block_private_targets {
            check_target_allowed(&next)?;
        }

        Ok(next)
    }
}

/// Returns `true` for the redirect statuses the tracer follows.
pub(crate) fn is_redirect_status(status: StatusCode) -> bool {
    REDIRECT_STATUS_CODES.contains(&status.as_u16())
}

/// Resolves the `Location` header against the URL that returned it.
///
/// Returns `None` when the header is missing, not valid UTF-8, blank,
/// unparseable, or points at a non-http(s) scheme.
pub(crate) fn resolve_location(current: &Url, headers: &HeaderMap) -> Option<Url> {
    // Non-ASCII UTF-8 is allowed; join() percent-encodes it
    let location = std::str::from_utf8(headers.get(LOCATION)?.as_bytes())
        .ok()?
        .trim();
    if location.is_empty() {
        return None;
    }
    // join() handles both absolute and relative references
    let next = current.join(location).ok()?;
    is_http_scheme(&next).then_some(next)
}

/// Key used to detect revisits: the serialized URL without its fragment.
fn loop_key(url: &Url) -> &str {
    match url.as_str().split_once('#') {
        Some((before, _)) => before,
        None => url.as_str(),
    }
}
