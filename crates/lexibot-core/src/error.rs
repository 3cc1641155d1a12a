//! Lexibot error types.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LexibotError>;

/// Errors surfaced by the lexibot crates.
///
/// The steady-state query path never produces these. Absence of a match,
/// absence of an intent, and empty input are all modeled as reply values;
/// errors are reserved for startup (unreadable configuration, unusable
/// knowledge bases).
#[derive(Debug, Error)]
pub enum LexibotError {
    /// Configuration could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The knowledge base is unusable (missing, empty, or malformed).
    #[error("knowledge base error: {0}")]
    Knowledge(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
