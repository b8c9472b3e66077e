//! API key handling for the Spoonacular API.
//!
//! Spoonacular authenticates every call with an `apiKey` query parameter.
//! The key is never validated locally: a missing or wrong key surfaces as a
//! 401 from the provider on the first request.

use std::fmt;

/// # Spoonacular API Key
///
/// Wraps the raw key so it never ends up in `Debug` output or log lines.
/// Use [`ApiKey::preview`] when a log line needs to identify which key is in
/// use.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First few characters of the key followed by an ellipsis.
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(4).collect();
        format!("{}...", head)
    }

    /// The `apiKey=...` query pair, percent-encoded.
    pub fn query_param(&self) -> String {
        format!("apiKey={}", urlencoding::encode(&self.0))
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}
