//! Contextual source lookup via the Google Custom Search JSON API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use retell_core::{Error, Result};
use retell_extract::{extract_search_terms, DEFAULT_MAX_TERMS};

use crate::types::SearchResult;

const SEARCH_BASE_URL: &str = "https://www.googleapis.com/customsearch/v1";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Number of contextual sources requested per lookup.
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// Capability seam for the search backend, enabling test doubles.
#[async_trait]
pub trait SourceSearch: Send + Sync {
    /// Look up up to `num_results` contextual sources for
    /// `query_source_text`. An empty result list is not an error.
    async fn search(
        &self,
        query_source_text: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>>;
}

/// Google Programmable Search client.
///
/// NOTE: no `Debug` derive — `api_key` would be exposed.
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
    base_url: String,
}

impl GoogleSearchClient {
    pub fn new(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self::with_base_url(api_key, engine_id, SEARCH_BASE_URL)
    }

    /// Base URL override, for pointing tests at a local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        engine_id: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SourceSearch for GoogleSearchClient {
    async fn search(
        &self,
        query_source_text: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>> {
        let query = extract_search_terms(query_source_text, DEFAULT_MAX_TERMS);
        let num = num_results.to_string();

        debug!(query = %query, "Searching for contextual sources");

        let response = self
            .client
            .get(&self.base_url)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .query(&[
                ("key", &self.api_key),
                ("cx", &self.engine_id),
                ("q", &query),
                ("num", &num),
            ])
            .send()
            .await
            .map_err(|e| Error::Search(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Search(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Search(format!("Invalid response body: {}", e)))?;

        let items = match parsed.get("items").and_then(|i| i.as_array()) {
            Some(items) => items,
            None => return Ok(Vec::new()),
        };

        let results = items
            .iter()
            .map(|item| SearchResult {
                title: field(item, "title"),
                link: field(item, "link"),
                snippet: field(item, "snippet"),
            })
            .collect();

        Ok(results)
    }
}

fn field(item: &serde_json::Value, name: &str) -> String {
    item.get(name)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}
