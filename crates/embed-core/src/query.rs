//! Overlay configuration and query-string serialization
//!
//! [`OverlayConfig`] holds the string options appended to the embed URL.
//! Options merge over defaults at construction time and are read on every
//! render; keys serialize in insertion order.

use serde::{Deserialize, Serialize};

/// Default autoplay flag forwarded to the embed player
pub const DEFAULT_AUTOPLAY: &str = "1";

/// Ordered string options appended to the embed URL as a query string
///
/// Defaults to `autoplay=1`. Setting a key that already exists replaces its
/// value in place; a new key appends, so serialization order is defined
/// insertion order. Keys are not validated: unrecognized options pass
/// through to the query string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayConfig {
    entries: Vec<(String, String)>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            entries: vec![("autoplay".to_string(), DEFAULT_AUTOPLAY.to_string())],
        }
    }
}

impl OverlayConfig {
    /// Create a config with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with no options at all (not even the autoplay default)
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Set an option, merging over any existing value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Look up an option value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of options
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the config holds no options
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serialize a config into a `?key=value&key=value…` string
///
/// Values are percent-encoded; keys are forwarded as-is. An empty config
/// yields `"?"`. There are no failure modes.
pub fn query_string(config: &OverlayConfig) -> String {
    let params: Vec<String> = config
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("?{}", params.join("&"))
}
