use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response};

use crate::client::{
    auth::ApiKey,
    types::*,
};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Result cap sent with every ingredient search.
pub const SEARCH_RESULT_LIMIT: u32 = 6;

pub struct SpoonacularClient {
    base_url: String,
    client: Client,
    api_key: ApiKey,
    timeout: Option<Duration>,
}

impl SpoonacularClient {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), api_key)
    }

    pub fn with_base_url(base_url: String, api_key: ApiKey) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            api_key,
            timeout: None,
        }
    }

    /// Applies a per-request timeout. Requests never time out without one.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Search operations
    pub async fn find_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Candidate>> {
        let path = "/recipes/findByIngredients";
        let params = [
            format!("ingredients={}", urlencoding::encode(&ingredients.join(","))),
            format!("number={}", SEARCH_RESULT_LIMIT),
            self.api_key.query_param(),
        ];
        let url = format!("{}{}?{}", self.base_url, path, params.join("&"));

        tracing::debug!(
            "Searching recipes for [{}] (key {})",
            ingredients.join(", "),
            self.api_key.preview()
        );

        let response = self.send_get(&url, path).await?;

        let candidates: Vec<Candidate> = response.json().await
            .map_err(|e| {
                tracing::error!("Failed to parse search response: {}", e);
                anyhow::anyhow!("Invalid response format from {}: {}", path, e)
            })?;

        tracing::debug!("Search returned {} candidates", candidates.len());
        Ok(candidates)
    }

    // Recipe operations
    pub async fn get_recipe_information(&self, id: i64) -> Result<Recipe> {
        let path = format!("/recipes/{}/information", id);
        let params = [self.api_key.query_param(), "includeNutrition=false".to_string()];
        let url = format!("{}{}?{}", self.base_url, path, params.join("&"));

        tracing::debug!("Requesting recipe information for {}", id);

        let response = self.send_get(&url, &path).await?;

        let recipe: Recipe = response.json().await
            .map_err(|e| {
                tracing::error!("Failed to parse recipe {} response: {}", id, e);
                anyhow::anyhow!("Invalid response format from {}: {}", path, e)
            })?;

        tracing::debug!("Retrieved recipe {}: {}", id, recipe.title);
        Ok(recipe)
    }

    async fn send_get(&self, url: &str, path: &str) -> Result<Response> {
        let mut request = self.client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error calling {}: {}", path, e);
                anyhow::anyhow!("Failed to connect to recipe API at {}: {}", self.base_url, e)
            })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", path, status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("{} failed with status {}: {}", path, status, error_body);

            match status.as_u16() {
                401 => anyhow::bail!("API key missing or invalid. Check SPOONACULAR_API_KEY."),
                402 => anyhow::bail!("Daily API quota exhausted: {}", error_body),
                404 => anyhow::bail!("Endpoint {} not found. Check the base URL: {}", path, self.base_url),
                500..=599 => anyhow::bail!("Recipe API server error ({}): {}", status, error_body),
                _ => anyhow::bail!("Request to {} failed with status {}: {}", path, status, error_body),
            }
        }

        Ok(response)
    }
}
