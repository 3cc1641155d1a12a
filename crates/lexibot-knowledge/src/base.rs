//! Knowledge-base loading.
//!
//! Entries come from the built-in starter set or from a TOML file of
//! `[[entries]]` tables. Duplicate questions are allowed — the first
//! occurrence wins on a score tie downstream.

use std::path::Path;

use serde::Deserialize;

use lexibot_core::error::{LexibotError, Result};
use lexibot_core::types::KnowledgeEntry;

/// On-disk knowledge-base format.
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    entries: Vec<KnowledgeEntry>,
}

/// An ordered, immutable set of question/answer pairs.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// The built-in starter knowledge base.
    pub fn builtin() -> Self {
        let entries = [
            (
                "what is your name",
                "I'm Lexibot, a lexical-retrieval chatbot. You can call me Lexi.",
            ),
            (
                "how are you",
                "I'm a program, so I don't have feelings, but I'm ready to help you!",
            ),
            (
                "what can you do",
                "I can answer simple questions from my knowledge base and recognize greetings, farewells, and thanks.",
            ),
            (
                "how to add knowledge",
                "Point --kb at a TOML file with [[entries]] tables of question/answer pairs.",
            ),
            ("thank you", "You're welcome! Happy to help."),
            (
                "what is rust",
                "Rust is a systems programming language focused on safety, speed, and concurrency.",
            ),
            (
                "tell me a joke",
                "Why did the programmer quit his job? Because he didn't get arrays.",
            ),
            (
                "what is ai",
                "Artificial Intelligence (AI) is the simulation of human intelligence processes by machines, especially computer systems.",
            ),
            (
                "define machine learning",
                "Machine learning is a field of AI that uses statistical techniques to give computer systems the ability to learn from data.",
            ),
            (
                "what is natural language processing",
                "Natural Language Processing (NLP) is a field of AI focused on the interaction between computers and human languages.",
            ),
            (
                "how to use this chatbot",
                "Just type your question. Add new question/answer pairs to the knowledge base to expand what I know.",
            ),
            (
                "what is your purpose",
                "To assist users with information and answer questions.",
            ),
            (
                "what is your name?",
                "I'm Lexibot, a lexical-retrieval chatbot. You can call me Lexi.",
            ),
            (
                "who created you",
                "I was created as a demonstration of lexical retrieval techniques.",
            ),
            (
                "what is cosine similarity",
                "Cosine similarity measures the directional alignment of two vectors and is used here as a lexical-overlap score.",
            ),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(q, a)| KnowledgeEntry::new(q, a))
                .collect(),
        }
    }

    /// Wrap an explicit entry list.
    pub fn from_entries(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// Parse the `[[entries]]` TOML format.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: KnowledgeFile = toml::from_str(content)
            .map_err(|e| LexibotError::Knowledge(format!("Failed to parse knowledge base: {e}")))?;
        Ok(Self {
            entries: file.entries,
        })
    }

    /// Load entries from a TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexibotError::Knowledge(format!("Failed to read {}: {e}", path.display()))
        })?;
        let kb = Self::from_toml_str(&content)?;
        tracing::info!(entries = kb.len(), path = %path.display(), "knowledge base loaded");
        Ok(kb)
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_non_empty() {
        let kb = KnowledgeBase::builtin();
        assert!(kb.len() >= 10);
        assert_eq!(kb.entries()[0].question, "what is your name");
    }

    #[test]
    fn test_builtin_contains_duplicate_phrasing() {
        // same question with and without the question mark — exercises the
        // first-wins tie-break downstream
        let kb = KnowledgeBase::builtin();
        let questions: Vec<_> = kb.entries().iter().map(|e| e.question.as_str()).collect();
        assert!(questions.contains(&"what is your name"));
        assert!(questions.contains(&"what is your name?"));
    }

    #[test]
    fn test_from_toml_str() {
        let kb = KnowledgeBase::from_toml_str(
            r#"
            [[entries]]
            question = "what is toml"
            answer = "A config file format."

            [[entries]]
            question = "what is cargo"
            answer = "Rust's build tool."
            "#,
        )
        .unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.entries()[1].answer, "Rust's build tool.");
    }

    #[test]
    fn test_from_toml_str_rejects_garbage() {
        assert!(KnowledgeBase::from_toml_str("entries = 3").is_err());
    }

    #[test]
    fn test_from_toml_str_empty_file_is_empty_kb() {
        let kb = KnowledgeBase::from_toml_str("").unwrap();
        assert!(kb.is_empty());
    }
}
