use reqwest::Client;

use crate::client::{source::RecipeSource, types::SearchResponse};
use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::search::Query;

/// HTTP client for the recipe search endpoint.
pub struct RecipeSearchClient {
    config: ApiConfig,
    client: Client,
}

impl RecipeSearchClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full request URL for `query`, credentials included.
    pub fn search_url(&self, query: &Query) -> String {
        format!(
            "{}/api/recipes/v2?app_id={}&app_key={}&q={}&type={}",
            self.config.base_url,
            urlencoding::encode(&self.config.app_id),
            urlencoding::encode(&self.config.app_key),
            urlencoding::encode(query.as_str()),
            urlencoding::encode(&self.config.recipe_type),
        )
    }

    /// Issues one GET for `query`. Never retries.
    pub async fn search_recipes(&self, query: &Query) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(query);
        tracing::debug!(
            "Making search request to: {}/api/recipes/v2 (q={}, type={})",
            self.config.base_url,
            query,
            self.config.recipe_type
        );

        let response = self
            .client
            .get(&url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Network error searching recipes: {}", e);
                SearchError::Transport(e.to_string())
            })?;

        let status = response.status();
        tracing::debug!("Search response status: {}", status);

        if let Err(e) = SearchError::check_status(status) {
            tracing::error!("Search for '{}' failed with status {}", query, status);
            return Err(e);
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to parse search response: {}", e);
            SearchError::Decode(e.to_string())
        })?;

        tracing::debug!(
            "Search for '{}' returned {} hits",
            query,
            body.hits.as_ref().map_or(0, Vec::len)
        );
        Ok(body)
    }
}

impl RecipeSource for RecipeSearchClient {
    async fn search(&self, query: &Query) -> Result<SearchResponse, SearchError> {
        self.search_recipes(query).await
    }
}
