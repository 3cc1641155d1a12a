//! Hardcoded English stopword set.
//!
//! High-frequency function words carry no lexical signal for similarity
//! matching, so the analyzer drops them during normalization. Hardcoded
//! rather than loaded from a resource — the fallback path must never
//! depend on anything that can be missing at runtime.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// ~60 English function words.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // articles & determiners
        "the", "a", "an", "this", "that", "these", "those",
        // be-verbs
        "is", "are", "was", "were", "be", "been", "being", "am",
        // auxiliaries
        "have", "has", "had", "do", "does", "did",
        // modals
        "will", "would", "shall", "should", "may", "might", "can", "could", "must",
        // prepositions
        "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
        // conjunctions & negation
        "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
        // pronouns
        "i", "you", "he", "she", "it", "we", "they",
        "me", "him", "her", "us", "them",
        "my", "your", "his", "our", "their", "its",
        // interrogatives
        "who", "what", "which", "when", "where", "how", "why",
    ]
    .into_iter()
    .collect()
});

/// True if `token` is a stopword. Expects lowercased input.
pub fn is_stopword(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopwords_contain_basics() {
        assert!(is_stopword("the"));
        assert!(is_stopword("is"));
        assert!(is_stopword("what"));
        assert!(is_stopword("how"));
        assert!(!is_stopword("name"));
        assert!(!is_stopword("rust"));
        assert!(!is_stopword("thanks"));
    }

    #[test]
    fn test_stopwords_are_lowercase_only() {
        // callers lowercase before lookup; uppercase is not a member
        assert!(!is_stopword("The"));
    }
}
