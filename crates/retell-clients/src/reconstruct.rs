//! Text reconstruction via the Gemini generateContent API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use retell_core::{Error, Result};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Upper bound on one backend call. Single attempt, no retries.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Capability seam for the generative backend, enabling test doubles.
#[async_trait]
pub trait Reconstructor: Send + Sync {
    /// Expand and clarify `input_text`, returning the rewritten text.
    ///
    /// The backend is non-deterministic: repeated calls with identical
    /// input may legitimately return different text.
    async fn reconstruct(&self, input_text: &str) -> Result<String>;
}

/// Gemini-backed reconstructor.
///
/// NOTE: no `Debug` derive — `api_key` would be exposed.
pub struct GeminiReconstructor {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiReconstructor {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(api_key, model, GEMINI_BASE_URL)
    }

    /// Base URL override, for pointing tests at a local mock server.
    pub fn with_base_url(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }
}

/// Build the fixed instruction prompt around the user's fragment.
fn build_prompt(input_text: &str) -> String {
    format!(
        "You are a text reconstruction expert. Please analyze and reconstruct the following text:\n\
         \n\
         Original text: \"{input_text}\"\n\
         \n\
         Please perform the following tasks:\n\
         1. Expand all slang, abbreviations, and acronyms (e.g., \"lol\" -> \"laughing out loud\", \"brb\" -> \"be right back\")\n\
         2. Explain the context and meaning of any colloquial expressions (e.g., \"epic fail\" -> \"a significant and embarrassing mistake or failure\")\n\
         3. Fill in any missing words or complete incomplete sentences to make the text coherent\n\
         4. Maintain the original tone and intent while making the text clear and professional\n\
         5. If the text appears to be a fragment of a larger conversation, provide context about what might have been discussed\n\
         \n\
         Return only the reconstructed text without any additional commentary or formatting."
    )
}

#[async_trait]
impl Reconstructor for GeminiReconstructor {
    async fn reconstruct(&self, input_text: &str) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(input_text) }] }],
        });

        debug!(model = %self.model, "Requesting text reconstruction");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Reconstruction(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Reconstruction(format!("API error {}: {}", status, body)));
        }

        let parsed: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Reconstruction(format!("Invalid response body: {}", e)))?;

        let text = parsed["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| Error::Reconstruction("Response contained no text".to_string()))?;

        Ok(text.trim().to_string())
    }
}
