//! Search-term extraction — turns free text into a short web query.
//!
//! Drops common English function words and very short tokens, keeping
//! the first few content words in their original order. The output is
//! fed directly to the search backend, so precision here determines
//! source relevance.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Maximum number of query terms kept by default.
pub const DEFAULT_MAX_TERMS: usize = 7;

/// Punctuation trimmed from token edges before filtering.
const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '"'];

/// Common English function words and pronouns excluded from queries.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
        "of", "with", "by", "is", "was", "are", "were", "be", "been", "have",
        "has", "had", "do", "does", "did", "will", "would", "could", "should",
        "may", "might", "can", "this", "that", "these", "those", "i", "you",
        "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
    ]
    .into_iter()
    .collect()
});

/// Extract up to `max_terms` content words from `text`, joined by
/// single spaces and kept in their original order.
///
/// Tokens are lower-cased, stripped of edge punctuation, and dropped
/// when they are stop-words or at most two characters long. Returns an
/// empty string when every token is filtered out.
pub fn extract_search_terms(text: &str, max_terms: usize) -> String {
    let lowered = text.to_lowercase();
    let keywords: Vec<&str> = lowered
        .split_whitespace()
        .map(|token| token.trim_matches(EDGE_PUNCTUATION))
        .filter(|token| token.len() > 2 && !STOP_WORDS.contains(*token))
        .take(max_terms)
        .collect();

    keywords.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_stop_words_and_short_tokens() {
        let query = extract_search_terms("the cat sat on an old mat", DEFAULT_MAX_TERMS);
        assert_eq!(query, "cat sat old mat");
    }

    #[test]
    fn test_strips_edge_punctuation() {
        let query = extract_search_terms("hello, world! \"quoted\" text.", DEFAULT_MAX_TERMS);
        assert_eq!(query, "hello world quoted text");
    }

    #[test]
    fn test_stop_word_after_stripping_is_dropped() {
        // "been." survives neither the strip nor the stop-word check.
        let query = extract_search_terms("been. testing", DEFAULT_MAX_TERMS);
        assert_eq!(query, "testing");
    }

    #[test]
    fn test_truncates_to_max_terms() {
        let query = extract_search_terms(
            "alpha bravo charlie delta echo foxtrot golf hotel india",
            DEFAULT_MAX_TERMS,
        );
        assert_eq!(query, "alpha bravo charlie delta echo foxtrot golf");

        let query = extract_search_terms("alpha bravo charlie", 2);
        assert_eq!(query, "alpha bravo");
    }

    #[test]
    fn test_everything_filtered_yields_empty_string() {
        assert_eq!(extract_search_terms("it is to be or not", DEFAULT_MAX_TERMS), "");
        assert_eq!(extract_search_terms("", DEFAULT_MAX_TERMS), "");
        assert_eq!(extract_search_terms("a b cd", DEFAULT_MAX_TERMS), "");
    }

    #[test]
    fn test_deterministic() {
        let input = "Laughing out loud, that was a significant failure.";
        let first = extract_search_terms(input, DEFAULT_MAX_TERMS);
        let second = extract_search_terms(input, DEFAULT_MAX_TERMS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_reconstructed_fragment_scenario() {
        // Query built from a reconstruction of "lol that was epic fail
        // brb": content words survive, function words do not.
        let reconstruction =
            "Laughing out loud, that was a significant and embarrassing failure. Be right back.";
        let query = extract_search_terms(reconstruction, DEFAULT_MAX_TERMS);
        assert_eq!(
            query,
            "laughing out loud significant embarrassing failure right"
        );
        for stop in ["that", "was", "be"] {
            assert!(!query.split(' ').any(|t| t == stop));
        }
    }

    #[test]
    fn test_no_output_token_is_short_or_stopped() {
        let query = extract_search_terms(
            "I was at the game, and it was: really!! great fun, you know",
            DEFAULT_MAX_TERMS,
        );
        for token in query.split_whitespace() {
            assert!(token.len() > 2);
            assert!(!STOP_WORDS.contains(token));
        }
    }
}
