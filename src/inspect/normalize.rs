//! Terminal response normalization.

use reqwest::header::HeaderMap;

use super::redirects::TracedChain;
use super::types::{HeaderList, InspectionResult};
use crate::config::fold_separator;

/// Builds the inspection result from a traced chain.
pub(crate) fn normalize_chain(chain: TracedChain) -> InspectionResult {
    InspectionResult {
        status_code: chain.status.as_u16(),
        url: chain.url.to_string(),
        headers: fold_headers(&chain.headers),
        redirects: chain.visited.iter().map(ToString::to_string).collect(),
    }
}

/// Folds a header map into one entry per name, in receipt order.
///
/// Repeated values are joined with `", "`, except `Set-Cookie`, which is
/// joined with a newline. Bytes that are not valid UTF-8 are replaced.
pub fn fold_headers(headers: &HeaderMap) -> HeaderList {
    let mut list = HeaderList::new();
    for (name, value) in headers {
        list.append(
            name.as_str(),
            &String::from_utf8_lossy(value.as_bytes()),
            fold_separator(name.as_str()),
        );
    }
    list
}
