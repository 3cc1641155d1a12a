//! # Lexibot Knowledge
//!
//! The retrieval side of lexibot: the static question/answer knowledge
//! base, the vocabulary built once from its questions, bag-of-words
//! vectorization over that vocabulary, and cosine-similarity best-match
//! selection.
//!
//! ## How it works
//! ```text
//! startup:  questions → normalize → Vocabulary (token → dimension)
//!                                 → one cached vector per entry
//! query:    tokens → Vocabulary::vectorize → best_match over cached vectors
//! ```
//!
//! Everything here is immutable after construction; a knowledge-base
//! change means rebuilding the whole snapshot and swapping it atomically.

pub mod base;
pub mod similarity;
pub mod vocabulary;

pub use base::KnowledgeBase;
pub use similarity::{best_match, cosine_similarity};
pub use vocabulary::Vocabulary;
