//! Vocabulary construction and bag-of-words vectorization.

use std::collections::HashMap;

/// Fixed token → dimension mapping, built once from the corpus.
///
/// Indices are assigned in first-seen order, which makes vectors
/// reproducible across runs for the same corpus and normalizer
/// configuration. Immutable after [`Vocabulary::build`].
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Build from tokenized corpus entries.
    pub fn build(corpus: &[Vec<String>]) -> Self {
        let mut index: HashMap<String, usize> = HashMap::new();
        for doc in corpus {
            for token in doc {
                if !index.contains_key(token) {
                    let next = index.len();
                    index.insert(token.clone(), next);
                }
            }
        }
        Self { index }
    }

    /// Number of dimensions.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Dimension index of a token, if it is in the vocabulary.
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Term-frequency vector over this vocabulary.
    ///
    /// Each in-vocabulary token increments its dimension by one; unknown
    /// tokens contribute nothing.
    pub fn vectorize(&self, tokens: &[String]) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.index.len()];
        for token in tokens {
            if let Some(&i) = self.index.get(token) {
                vec[i] += 1.0;
            }
        }
        vec
    }
}
