//! Process configuration, read once from the environment at startup.

use tracing::info;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Static configuration shared by both delivery adapters.
///
/// Built once in `main` and read-only afterwards; the client wrappers
/// receive their credentials from here rather than reading the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct RetellConfig {
    /// HTTP server port.
    pub port: u16,
    /// Generative backend credential.
    pub gemini_api_key: String,
    /// Generative model identifier, fixed for the process lifetime.
    pub gemini_model: String,
    /// Search backend credential.
    pub search_api_key: String,
    /// Search engine identifier (the `cx` parameter).
    pub search_engine_id: String,
}

impl RetellConfig {
    /// Load configuration from the environment.
    ///
    /// Any missing required secret is a fatal `Error::Config`.
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = require_env("GEMINI_API_KEY")?;
        let search_api_key = require_env("GOOGLE_SEARCH_API_KEY")?;
        let search_engine_id = require_env("GOOGLE_SEARCH_ENGINE_ID")?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let gemini_model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        info!(model = %gemini_model, port, "Configuration loaded");

        Ok(Self {
            port,
            gemini_api_key,
            gemini_model,
            search_api_key,
            search_engine_id,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            Error::Config(format!("{} not found in environment variables", name))
        })
}
