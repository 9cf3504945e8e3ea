//! Orchestrator — validate, reconstruct, search, assemble.

use tracing::info;

use retell_clients::{Reconstructor, SourceSearch, DEFAULT_NUM_RESULTS};
use retell_core::{Error, Result};

use crate::types::ReconstructionResult;

/// Sequences the reconstruction pipeline over the two backends.
///
/// Strictly sequential and fail-fast: the search stage consumes the
/// reconstruction output, any stage error aborts with no partial
/// result, and nothing is retried.
pub struct Orchestrator<R, S> {
    reconstructor: R,
    search: S,
}

impl<R: Reconstructor, S: SourceSearch> Orchestrator<R, S> {
    pub fn new(reconstructor: R, search: S) -> Self {
        Self {
            reconstructor,
            search,
        }
    }

    /// Run the full pipeline on one input fragment.
    pub async fn process(&self, input_text: &str) -> Result<ReconstructionResult> {
        let trimmed = input_text.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("Text cannot be empty".to_string()));
        }

        info!("Reconstructing text");
        let reconstructed_text = self.reconstructor.reconstruct(trimmed).await?;

        info!("Searching for contextual sources");
        let sources = self
            .search
            .search(&reconstructed_text, DEFAULT_NUM_RESULTS)
            .await?;
        info!("Found {} contextual sources", sources.len());

        Ok(ReconstructionResult {
            original_text: trimmed.to_string(),
            reconstructed_text,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use retell_clients::SearchResult;

    struct StubReconstructor {
        reply: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubReconstructor {
        fn ok(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Reconstructor for &StubReconstructor {
        async fn reconstruct(&self, _input_text: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Some(text) => Ok(text.to_string()),
                None => Err(Error::Reconstruction("backend unreachable".into())),
            }
        }
    }

    struct StubSearch {
        results: Vec<SearchResult>,
        fail: bool,
        calls: AtomicUsize,
        last_query: Mutex<Option<String>>,
    }

    impl StubSearch {
        fn with_results(results: Vec<SearchResult>) -> Self {
            Self {
                results,
                fail: false,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                results: Vec::new(),
                fail: true,
                calls: AtomicUsize::new(0),
                last_query: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl SourceSearch for &StubSearch {
        async fn search(
            &self,
            query_source_text: &str,
            _num_results: usize,
        ) -> Result<Vec<SearchResult>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_query.lock().unwrap() = Some(query_source_text.to_string());
            if self.fail {
                return Err(Error::Search("backend unreachable".into()));
            }
            Ok(self.results.clone())
        }
    }

    fn source(title: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            link: format!("https://example.com/{}", title),
            snippet: format!("About {}", title),
        }
    }

    #[tokio::test]
    async fn test_empty_input_fails_before_any_backend_call() {
        let reconstructor = StubReconstructor::ok("unused");
        let search = StubSearch::with_results(vec![]);
        let pipeline = Orchestrator::new(&reconstructor, &search);

        for input in ["", "   ", "\n\t "] {
            let err = pipeline.process(input).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
        }
        assert_eq!(reconstructor.calls.load(Ordering::SeqCst), 0);
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_reconstruction_failure_skips_search() {
        let reconstructor = StubReconstructor::failing();
        let search = StubSearch::with_results(vec![source("unused")]);
        let pipeline = Orchestrator::new(&reconstructor, &search);

        let err = pipeline.process("lol brb").await.unwrap_err();
        assert!(matches!(err, Error::Reconstruction(_)));
        assert_eq!(reconstructor.calls.load(Ordering::SeqCst), 1);
        assert_eq!(search.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_search_failure_discards_reconstruction() {
        let reconstructor = StubReconstructor::ok("Reconstructed text.");
        let search = StubSearch::failing();
        let pipeline = Orchestrator::new(&reconstructor, &search);

        let err = pipeline.process("lol brb").await.unwrap_err();
        assert!(matches!(err, Error::Search(_)));
    }

    #[tokio::test]
    async fn test_search_runs_on_reconstructed_text_not_original() {
        let reconstructor =
            StubReconstructor::ok("Laughing out loud, be right back.");
        let search = StubSearch::with_results(vec![]);
        let pipeline = Orchestrator::new(&reconstructor, &search);

        pipeline.process("lol brb").await.unwrap();
        assert_eq!(
            search.last_query.lock().unwrap().as_deref(),
            Some("Laughing out loud, be right back.")
        );
    }

    #[tokio::test]
    async fn test_zero_sources_is_success() {
        let reconstructor = StubReconstructor::ok("Nothing notable.");
        let search = StubSearch::with_results(vec![]);
        let pipeline = Orchestrator::new(&reconstructor, &search);

        let result = pipeline.process("meh").await.unwrap();
        assert!(result.sources.is_empty());
    }

    #[tokio::test]
    async fn test_happy_path_preserves_order_and_trims_input() {
        let reconstructor = StubReconstructor::ok("A clear version.");
        let search =
            StubSearch::with_results(vec![source("first"), source("second"), source("third")]);
        let pipeline = Orchestrator::new(&reconstructor, &search);

        let result = pipeline.process("  lol that was epic fail brb  ").await.unwrap();
        assert_eq!(result.original_text, "lol that was epic fail brb");
        assert_eq!(result.reconstructed_text, "A clear version.");
        let titles: Vec<&str> = result.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }
}
