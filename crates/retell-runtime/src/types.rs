//! Pipeline data model.

use retell_clients::SearchResult;
use serde::{Deserialize, Serialize};

/// Final assembled result: the original fragment, its reconstruction,
/// and contextual sources in backend relevance order.
///
/// Immutable once built; serialized directly by the HTTP adapter or
/// rendered as a plain-text report by the console adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconstructionResult {
    pub original_text: String,
    pub reconstructed_text: String,
    pub sources: Vec<SearchResult>,
}
