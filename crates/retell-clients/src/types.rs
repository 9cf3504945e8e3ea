//! Wire types for search backend results.

use serde::{Deserialize, Serialize};

/// One contextual source, in the relevance order the backend returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    pub snippet: String,
}
