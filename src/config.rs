//! Runtime configuration read from the process environment.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::client::{ApiKey, SpoonacularClient, DEFAULT_BASE_URL};

pub const API_KEY_VAR: &str = "SPOONACULAR_API_KEY";
/// Alternate variable name, honoured as a fallback.
pub const LEGACY_API_KEY_VAR: &str = "VITE_SPOONACULAR_KEY";
pub const BASE_URL_VAR: &str = "SPOONACULAR_BASE_URL";
pub const TIMEOUT_VAR: &str = "CHEF_BOOK_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: ApiKey,
    pub base_url: String,
    /// `None` means requests may wait forever.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .or_else(|_| env::var(LEGACY_API_KEY_VAR))
            .map(ApiKey::from)
            .unwrap_or_default();

        if api_key.is_empty() {
            tracing::warn!(
                "{} is not set; the recipe API will reject every request",
                API_KEY_VAR
            );
        }

        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = match env::var(TIMEOUT_VAR) {
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{} must be a whole number of seconds, got '{}'", TIMEOUT_VAR, raw))?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }

    pub fn client(&self) -> SpoonacularClient {
        SpoonacularClient::with_base_url(self.base_url.clone(), self.api_key.clone())
            .with_timeout(self.timeout)
    }
}
