//! Inspection request and result types.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One inspection submission.
///
/// Field names follow the client's JSON (`url`, `userAgent`); `user_agent` is
/// accepted as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InspectionRequest {
    /// Absolute http/https URL to inspect
    pub url: String,
    /// User-Agent override; the configured default applies when absent or blank
    #[serde(default, rename = "userAgent", alias = "user_agent")]
    pub user_agent: Option<String>,
}

impl InspectionRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            user_agent: None,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// The user agent override, ignoring blank values.
    pub fn user_agent_override(&self) -> Option<&str> {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
    }
}

/// Outcome of a successful inspection.
///
/// Serializes to `{ status_code, url, headers, redirects }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InspectionResult {
    /// Status code of the terminal response
    pub status_code: u16,
    /// URL of the terminal request, after all redirects
    pub url: String,
    /// Terminal response headers in receipt order
    pub headers: HeaderList,
    /// Every pre-redirect URL, in visit order (empty when nothing redirected)
    pub redirects: Vec<String>,
}

/// Response headers in receipt order, one entry per distinct name.
///
/// Serialized as a JSON object whose key order is the receipt order. When
/// deserializing, a repeated key keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderList(IndexMap<String, String>);

impl HeaderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under `name`, joining it onto an existing entry with
    /// `separator`. A new name goes to the end.
    pub fn append(&mut self, name: &str, value: &str, separator: &str) {
        match self.0.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                let folded = entry.get_mut();
                folded.push_str(separator);
                folded.push_str(value);
            }
            Entry::Vacant(entry) => {
                entry.insert(value.to_string());
            }
        }
    }

    /// Looks up a header value by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .or_else(|| {
                self.0
                    .iter()
                    .find(|(n, _)| n.eq_ignore_ascii_case(name))
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, String> {
        &self.0
    }
}

impl From<IndexMap<String, String>> for HeaderList {
    fn from(map: IndexMap<String, String>) -> Self {
        Self(map)
    }
}
