//! External backend clients: generative text reconstruction (Gemini)
//! and contextual web search (Google Programmable Search).
//!
//! Both backends sit behind small capability traits so the pipeline
//! can be exercised with deterministic doubles.

pub mod reconstruct;
pub mod search;
pub mod types;

pub use reconstruct::{GeminiReconstructor, Reconstructor};
pub use search::{GoogleSearchClient, SourceSearch, DEFAULT_NUM_RESULTS};
pub use types::SearchResult;
