//! # Lexibot Agent
//! The answer resolver — orchestrates intent detection, normalization,
//! vectorization, and best-match selection over an immutable knowledge
//! snapshot.
//!
//! Per query: intent short-circuit first, else vectorize-and-match, else
//! the fixed not-understood fallback. The snapshot (normalizer, vocabulary,
//! cached knowledge-base vectors) is built once in [`Engine::new`] and
//! read-only afterwards, so `&Engine` can be shared freely; a knowledge
//! reload means building a fresh engine and swapping it whole.

pub mod intent;

use lexibot_core::config::LexibotConfig;
use lexibot_core::error::{LexibotError, Result};
use lexibot_core::types::{Intent, Reply, ReplyKind};
use lexibot_knowledge::{KnowledgeBase, Vocabulary, best_match};
use lexibot_nlp::Normalizer;

/// The lexibot engine — resolves free-text queries to replies.
#[derive(Debug)]
pub struct Engine {
    config: LexibotConfig,
    normalizer: Normalizer,
    knowledge: KnowledgeBase,
    vocabulary: Vocabulary,
    kb_vectors: Vec<Vec<f32>>,
}

impl Engine {
    /// Build the engine: normalize every question, build the vocabulary,
    /// precompute one vector per entry.
    ///
    /// Fails on an empty knowledge base or on questions that normalize to
    /// an empty vocabulary — the engine could never answer anything.
    pub fn new(config: LexibotConfig, knowledge: KnowledgeBase) -> Result<Self> {
        if knowledge.is_empty() {
            return Err(LexibotError::Knowledge(
                "knowledge base has no entries".into(),
            ));
        }

        let normalizer = Normalizer::new(&config.nlp);
        let corpus: Vec<Vec<String>> = knowledge
            .entries()
            .iter()
            .map(|e| normalizer.normalize(&e.question))
            .collect();

        let vocabulary = Vocabulary::build(&corpus);
        if vocabulary.is_empty() {
            return Err(LexibotError::Knowledge(
                "knowledge base questions normalize to an empty vocabulary".into(),
            ));
        }

        let kb_vectors: Vec<Vec<f32>> = corpus
            .iter()
            .map(|tokens| vocabulary.vectorize(tokens))
            .collect();

        tracing::info!(
            entries = knowledge.len(),
            vocabulary = vocabulary.len(),
            threshold = config.confidence_threshold,
            "engine ready"
        );

        Ok(Self {
            config,
            normalizer,
            knowledge,
            vocabulary,
            kb_vectors,
        })
    }

    /// Engine over the built-in knowledge base.
    pub fn with_builtin(config: LexibotConfig) -> Result<Self> {
        Self::new(config, KnowledgeBase::builtin())
    }

    /// Resolve one query to a reply. Read-only; never fails.
    pub fn respond(&self, raw: &str) -> Reply {
        if raw.trim().is_empty() {
            return Reply::empty();
        }

        match intent::detect_intent(raw) {
            Intent::Greeting => {
                return self.intent_reply(ReplyKind::Greeting, &self.config.responses.greeting);
            }
            Intent::Farewell => {
                return self.intent_reply(ReplyKind::Farewell, &self.config.responses.farewell);
            }
            Intent::Thanks => {
                return self.intent_reply(ReplyKind::Thanks, &self.config.responses.thanks);
            }
            Intent::None => {}
        }

        let tokens = self.normalizer.normalize(raw);
        let query = self.vocabulary.vectorize(&tokens);
        let result = best_match(&query, &self.kb_vectors);

        match result.index {
            Some(i) if result.score >= self.config.confidence_threshold => {
                tracing::debug!(entry = i, score = result.score, "knowledge match");
                Reply {
                    kind: ReplyKind::Match,
                    text: self.knowledge.entries()[i].answer.clone(),
                    score: Some(result.score),
                }
            }
            _ => {
                tracing::debug!(score = result.score, "no match above threshold");
                Reply {
                    kind: ReplyKind::Unmatched,
                    text: self.config.responses.unmatched.clone(),
                    score: None,
                }
            }
        }
    }

    fn intent_reply(&self, kind: ReplyKind, text: &str) -> Reply {
        Reply {
            kind,
            text: text.to_string(),
            score: None,
        }
    }

    /// Number of knowledge-base entries.
    pub fn entry_count(&self) -> usize {
        self.knowledge.len()
    }

    /// Number of vocabulary dimensions.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// The configured acceptance threshold.
    pub fn threshold(&self) -> f32 {
        self.config.confidence_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexibot_core::types::KnowledgeEntry;

    fn engine_with(entries: &[(&str, &str)], threshold: f32) -> Engine {
        let config = LexibotConfig {
            confidence_threshold: threshold,
            ..LexibotConfig::default()
        };
        let kb = KnowledgeBase::from_entries(
            entries
                .iter()
                .map(|(q, a)| KnowledgeEntry::new(*q, *a))
                .collect(),
        );
        Engine::new(config, kb).unwrap()
    }

    #[test]
    fn test_exact_question_scores_one() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        let reply = engine.respond("what is your name");
        assert_eq!(reply.kind, ReplyKind::Match);
        assert_eq!(reply.text, "I am a chatbot");
        assert!((reply.score.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_greeting_short_circuits_knowledge() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        let reply = engine.respond("hello");
        assert_eq!(reply.kind, ReplyKind::Greeting);
        assert!(reply.score.is_none());
    }

    #[test]
    fn test_greeting_wins_even_with_kb_vocabulary() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        let reply = engine.respond("hello what is your name");
        assert_eq!(reply.kind, ReplyKind::Greeting);
    }

    #[test]
    fn test_unrelated_query_is_unmatched() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        let reply = engine.respond("xyz completely unrelated");
        assert_eq!(reply.kind, ReplyKind::Unmatched);
        assert!(reply.score.is_none());
    }

    #[test]
    fn test_empty_input() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        assert_eq!(engine.respond("").kind, ReplyKind::Empty);
        assert_eq!(engine.respond("   \t ").kind, ReplyKind::Empty);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // query shares one of four candidate tokens: cosine = 1/2 exactly
        let entries = &[("alpha beta gamma delta", "four words")];
        let engine = engine_with(entries, 0.5);
        let reply = engine.respond("alpha");
        assert_eq!(reply.kind, ReplyKind::Match);
        assert!((reply.score.unwrap() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_score_below_threshold_is_unmatched() {
        let entries = &[("alpha beta gamma delta", "four words")];
        let engine = engine_with(entries, 0.500_001);
        let reply = engine.respond("alpha");
        assert_eq!(reply.kind, ReplyKind::Unmatched);
    }

    #[test]
    fn test_duplicate_questions_first_wins() {
        let engine = engine_with(
            &[("what is rust", "first answer"), ("what is rust", "second answer")],
            0.2,
        );
        let reply = engine.respond("what is rust");
        assert_eq!(reply.kind, ReplyKind::Match);
        assert_eq!(reply.text, "first answer");
    }

    #[test]
    fn test_all_stopword_query_still_matches() {
        let engine = engine_with(&[("how are you", "doing fine")], 0.2);
        let reply = engine.respond("how are you");
        assert_eq!(reply.kind, ReplyKind::Match);
        assert!((reply.score.unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_kb_is_fatal() {
        let config = LexibotConfig::default();
        let err = Engine::new(config, KnowledgeBase::from_entries(vec![])).unwrap_err();
        assert!(matches!(err, LexibotError::Knowledge(_)));
    }

    #[test]
    fn test_empty_vocabulary_is_fatal() {
        let config = LexibotConfig::default();
        let kb = KnowledgeBase::from_entries(vec![KnowledgeEntry::new("?!...", "punctuation")]);
        let err = Engine::new(config, kb).unwrap_err();
        assert!(matches!(err, LexibotError::Knowledge(_)));
    }

    #[test]
    fn test_determinism_across_engines() {
        let a = engine_with(&[("what is rust", "a language"), ("tell me a joke", "no")], 0.2);
        let b = engine_with(&[("what is rust", "a language"), ("tell me a joke", "no")], 0.2);
        let ra = a.respond("is rust a joke");
        let rb = b.respond("is rust a joke");
        assert_eq!(ra.kind, rb.kind);
        assert_eq!(ra.score, rb.score);
        assert_eq!(ra.text, rb.text);
    }

    #[test]
    fn test_reply_serializes_without_score_when_absent() {
        let engine = engine_with(&[("what is your name", "I am a chatbot")], 0.2);
        let json = serde_json::to_value(engine.respond("hello")).unwrap();
        assert_eq!(json["kind"], "greeting");
        assert!(json.get("score").is_none());

        let json = serde_json::to_value(engine.respond("what is your name")).unwrap();
        assert_eq!(json["kind"], "match");
        assert!(json["score"].as_f64().is_some());
    }

    #[test]
    fn test_builtin_engine_answers_its_own_questions() {
        let engine = Engine::with_builtin(LexibotConfig::default()).unwrap();
        let reply = engine.respond("define machine learning");
        assert_eq!(reply.kind, ReplyKind::Match);
        assert!(reply.text.contains("Machine learning"));
    }
}
