//! Input validation for inspection targets.

mod url_validation;

pub use url_validation::{check_target_allowed, is_http_scheme, parse_inspection_url};
