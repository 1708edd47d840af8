//! Bag-of-words retrieval shared by the component library and the guidance
//! corpus: tokenizer, growable vocabulary, term-frequency vectors, cosine
//! similarity with zero padding, and stable top-k ranking.

pub mod ranking;
pub mod vector;
pub mod vocabulary;

pub use ranking::{Scored, top_k};
pub use vector::{TermVector, cosine_similarity};
pub use vocabulary::{VocabularyStore, tokenize};

/// Vectorizer and comparator over a single [`VocabularyStore`].
///
/// One index is constructed per process and shared (`Arc<VectorIndex>`) by
/// every corpus, so dimension indices mean the same token everywhere.
#[derive(Debug, Default)]
pub struct VectorIndex {
    vocabulary: VocabularyStore,
}

impl VectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vectorize `text`, growing the vocabulary with any unseen tokens.
    pub fn vectorize(&self, text: &str) -> TermVector {
        self.vocabulary.vectorize(text)
    }

    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    pub fn vocabulary(&self) -> &VocabularyStore {
        &self.vocabulary
    }
}
