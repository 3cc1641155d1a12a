//! # Lexibot NLP
//! Text normalization for the retrieval pipeline.
//!
//! Raw text is lowercased and split on non-alphanumeric boundaries, then
//! optionally run through the English analyzer (lemmatize each token, drop
//! stopwords). Which path runs is decided once, when the [`Normalizer`] is
//! built from configuration. The fallback split has no failure modes and
//! no external resources, so normalization can never fail at query time.

pub mod lemmatizer;
pub mod stop_words;

use lexibot_core::config::NlpConfig;

/// Analyzer capability selected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Analyzer {
    English,
    None,
}

/// Turns raw text into a canonical ordered token sequence.
#[derive(Debug, Clone)]
pub struct Normalizer {
    analyzer: Analyzer,
}

impl Normalizer {
    /// Build a normalizer from configuration. The analyzer choice is
    /// resolved here, once; `normalize` never re-probes it.
    pub fn new(config: &NlpConfig) -> Self {
        let analyzer = match config.analyzer.as_str() {
            "english" => Analyzer::English,
            "none" => Analyzer::None,
            other => {
                tracing::warn!("unknown analyzer {other:?}, using plain tokenization");
                Analyzer::None
            }
        };
        Self { analyzer }
    }

    /// Normalizer with the English analyzer enabled.
    pub fn english() -> Self {
        Self { analyzer: Analyzer::English }
    }

    /// Normalizer that only lowercases and splits.
    pub fn plain() -> Self {
        Self { analyzer: Analyzer::None }
    }

    /// Normalize raw text into an ordered token sequence.
    ///
    /// Empty input yields an empty sequence; so does punctuation-only
    /// input. Neither is an error.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let tokens = split_tokens(text);
        match self.analyzer {
            Analyzer::None => tokens,
            Analyzer::English => analyze(tokens),
        }
    }
}

/// Lowercase and split on every non-alphanumeric boundary (underscore
/// counts as a word character). The guaranteed fallback path.
fn split_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Lemmatize tokens and drop stopwords.
///
/// A non-empty input made entirely of stopwords keeps its first token, so
/// short conversational queries ("how are you") still carry signal.
fn analyze(tokens: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for t in &tokens {
        if stop_words::is_stopword(t) {
            continue;
        }
        out.push(lemmatizer::lemmatize(t));
    }
    if out.is_empty()
        && let Some(first) = tokens.into_iter().next()
    {
        out.push(lemmatizer::lemmatize(&first));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_split() {
        let n = Normalizer::plain();
        assert_eq!(n.normalize("Hello, World!"), vec!["hello", "world"]);
        assert_eq!(n.normalize("what is RUST"), vec!["what", "is", "rust"]);
    }

    #[test]
    fn test_plain_never_empty_for_alphanumeric_input() {
        let n = Normalizer::plain();
        assert!(!n.normalize("the").is_empty());
        assert!(!n.normalize("x").is_empty());
    }

    #[test]
    fn test_empty_and_punctuation_input() {
        for n in [Normalizer::plain(), Normalizer::english()] {
            assert!(n.normalize("").is_empty());
            assert!(n.normalize("   ").is_empty());
            assert!(n.normalize("?!... --- !!!").is_empty());
        }
    }

    #[test]
    fn test_english_drops_stopwords_and_lemmatizes() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("what is your name"), vec!["name"]);
        assert_eq!(n.normalize("what is machine learning"), vec!["machine", "learn"]);
    }

    #[test]
    fn test_all_stopwords_keeps_first_token() {
        let n = Normalizer::english();
        assert_eq!(n.normalize("how are you"), vec!["how"]);
        assert_eq!(n.normalize("what can you do"), vec!["what"]);
    }

    #[test]
    fn test_unknown_analyzer_falls_back_to_plain() {
        let n = Normalizer::new(&lexibot_core::config::NlpConfig {
            analyzer: "klingon".into(),
        });
        // stopwords survive on the fallback path
        assert_eq!(n.normalize("what is this"), vec!["what", "is", "this"]);
    }

    #[test]
    fn test_ordering_is_preserved() {
        let n = Normalizer::english();
        assert_eq!(
            n.normalize("cosine similarity beats keyword matching"),
            vec!["cosine", "similarity", "beat", "keyword", "match"]
        );
    }
}
