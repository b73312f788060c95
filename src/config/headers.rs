//! HTTP header folding rules.
//!
//! Repeated response headers are folded into a single entry. Most headers use the
//! list separator from RFC 9110. `Set-Cookie` is the exception: cookie values
//! routinely contain commas (e.g. in `Expires`), so its values are joined with a
//! newline instead.

/// Set-Cookie header (lowercase, as reported by the HTTP stack)
pub const HEADER_SET_COOKIE: &str = "set-cookie";

/// Separator for repeated header values (RFC 9110 list syntax)
pub const HEADER_VALUE_SEPARATOR: &str = ", ";

/// Separator for repeated `Set-Cookie` values
pub const SET_COOKIE_SEPARATOR: &str = "\n";

/// Returns the separator used to fold repeated values of `header_name`.
pub fn fold_separator(header_name: &str) -> &'static str {
    if header_name.eq_ignore_ascii_case(HEADER_SET_COOKIE) {
        SET_COOKIE_SEPARATOR
    } else {
        HEADER_VALUE_SEPARATOR
    }
}
