//! Shared application state.

use retell_clients::{GeminiReconstructor, GoogleSearchClient};
use retell_core::RetellConfig;
use retell_runtime::Orchestrator;

/// Read-only state shared by all route handlers. Each request runs its
/// own pipeline; nothing here mutates after startup.
pub struct AppState {
    pub config: RetellConfig,
    pub pipeline: Orchestrator<GeminiReconstructor, GoogleSearchClient>,
}

impl AppState {
    pub fn new(config: RetellConfig) -> Self {
        let reconstructor = GeminiReconstructor::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        );
        let search = GoogleSearchClient::new(
            config.search_api_key.clone(),
            config.search_engine_id.clone(),
        );
        Self::with_clients(config, reconstructor, search)
    }

    /// Construct with explicit clients (tests point these at local
    /// mock servers).
    pub fn with_clients(
        config: RetellConfig,
        reconstructor: GeminiReconstructor,
        search: GoogleSearchClient,
    ) -> Self {
        Self {
            config,
            pipeline: Orchestrator::new(reconstructor, search),
        }
    }
}
