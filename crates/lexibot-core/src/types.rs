//! Domain types shared across the workspace.

use serde::{Deserialize, Serialize};

/// One question/answer pair in the knowledge base. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

impl KnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Conversational intents handled outside the similarity path.
///
/// Checked in declaration order: greeting before farewell before thanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Farewell,
    Thanks,
    /// No conversational intent — the query goes down the vector path.
    None,
}

/// How a [`Reply`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Greeting,
    Farewell,
    Thanks,
    /// A knowledge-base entry scored at or above the confidence threshold.
    Match,
    /// Best score fell below the threshold; the fixed fallback text is used.
    Unmatched,
    /// Empty or whitespace-only input; the caller should re-prompt.
    Empty,
}

/// Caller-facing reply value. `score` is set only for `Match`.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl Reply {
    pub fn empty() -> Self {
        Self {
            kind: ReplyKind::Empty,
            text: String::new(),
            score: None,
        }
    }
}

/// Best-scoring knowledge-base candidate for one query.
///
/// `index` is `None` when no candidate scored above zero (for example a
/// query with no in-vocabulary tokens).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub index: Option<usize>,
    pub score: f32,
}

impl MatchResult {
    pub fn none() -> Self {
        Self {
            index: None,
            score: 0.0,
        }
    }
}
