//! URL validation and SSRF protection.
//!
//! Every submitted URL goes through [`parse_inspection_url`] before any network
//! activity. When private-target blocking is enabled, [`check_target_allowed`]
//! is applied to the submitted URL and to every redirect target, so a public
//! host cannot bounce the inspector into an internal service.

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::InspectError;

/// Parses and validates a user-submitted URL.
///
/// Accepts only absolute `http://` or `https://` URLs with a host. Surrounding
/// whitespace is ignored. No scheme is guessed: `example.com` is rejected.
///
/// # Errors
///
/// Returns `InspectError::InvalidInput` describing the first problem found.
///
/// # Examples
///
/// ```
/// use header_inspector::security::parse_inspection_url;
///
/// assert!(parse_inspection_url("https://example.com").is_ok());
/// assert!(parse_inspection_url("  http://example.com/path  ").is_ok());
/// assert!(parse_inspection_url("not a url").is_err());
/// assert!(parse_inspection_url("ftp://example.com").is_err());
/// ```
pub fn parse_inspection_url(raw: &str) -> Result<Url, InspectError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InspectError::InvalidInput("URL is empty".to_string()));
    }

    if trimmed.len() > MAX_URL_LENGTH {
        return Err(InspectError::InvalidInput(format!(
            "URL exceeds maximum length ({} > {})",
            trimmed.len(),
            MAX_URL_LENGTH
        )));
    }

    let url = Url::parse(trimmed)
        .map_err(|e| InspectError::InvalidInput(format!("'{}' is not a valid URL: {}", trimmed, e)))?;

    if !is_http_scheme(&url) {
        return Err(InspectError::InvalidInput(format!(
            "Unsupported URL scheme '{}' (only http:// and https:// allowed)",
            url.scheme()
        )));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(InspectError::InvalidInput(format!(
            "URL has no host component: {}",
            trimmed
        )));
    }

    Ok(url)
}

/// Returns `true` for `http` and `https` URLs.
pub fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Rejects URLs whose host is a localhost name or a non-public IP literal.
///
/// Only IP literals and localhost names are checked; a public name that
/// resolves to a private address is not detected here.
///
/// # Errors
///
/// Returns `InspectError::InvalidInput` naming the blocked host.
pub fn check_target_allowed(url: &Url) -> Result<(), InspectError> {
    match url.host() {
        Some(Host::Domain(domain)) if is_localhost_domain(domain) => Err(
            InspectError::InvalidInput(format!("localhost target '{}' is not allowed", domain)),
        ),
        Some(Host::Ipv4(ip)) if is_private_ipv4(ip) => Err(InspectError::InvalidInput(
            format!("private IPv4 address '{}' is not allowed", ip),
        )),
        Some(Host::Ipv6(ip)) if is_private_ipv6(ip) => Err(InspectError::InvalidInput(
            format!("private IPv6 address '{}' is not allowed", ip),
        )),
        Some(_) => Ok(()),
        None => Err(InspectError::InvalidInput(format!(
            "URL has no host component: {}",
            url
        ))),
    }
}

/// Checks if an IPv4 address is private, loopback, link-local, or otherwise
/// not publicly routable.
fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    let octets = ip.octets();
    ip.is_private()
        || ip.is_loopback()
        || ip.is_link_local()
        || ip.is_multicast()
        || ip.is_broadcast()
        || ip.is_unspecified()
        // 0.0.0.0/8 (this network)
        || octets[0] == 0
        // 100.64.0.0/10 (carrier-grade NAT)
        || (octets[0] == 100 && (octets[1] & 0xc0) == 64)
        // 240.0.0.0/4 (reserved)
        || octets[0] >= 240
}

/// Checks if an IPv6 address is loopback, unique-local, link-local, multicast,
/// or an IPv4-mapped private address.
fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(v4) = ip.to_ipv4_mapped() {
        return is_private_ipv4(v4);
    }
    let first = ip.segments()[0];
    ip.is_loopback()
        || ip.is_unspecified()
        || ip.is_multicast()
        // fc00::/7 (unique local addresses)
        || (first & 0xfe00) == 0xfc00
        // fe80::/10 (link-local)
        || (first & 0xffc0) == 0xfe80
}

/// Checks if a domain name is a localhost variant.
fn is_localhost_domain(domain: &str) -> bool {
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();
    domain == "localhost" || domain == "localhost.localdomain" || domain.ends_with(".localhost")
}
