use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::vector::TermVector;

/// Split `text` into lower-case ASCII alphanumeric tokens.
///
/// Any run of other characters is a separator; empty tokens are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Token → dimension map that only ever grows.
///
/// A token gets the vocabulary size at first sight as its dimension, and keeps
/// it for the lifetime of the store. Growth is unbounded: a long-running
/// process ingesting open-ended text will keep allocating dimensions.
#[derive(Debug, Default)]
pub struct VocabularyStore {
    dimensions: Mutex<HashMap<String, usize>>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dimension_of(&self, token: &str) -> Option<usize> {
        self.lock().get(token).copied()
    }

    /// Term-frequency vector for `text`, assigning dimensions to unseen tokens.
    ///
    /// The vector is only as long as the highest dimension it touches; vectors
    /// built before later tokens were seen are shorter and get zero-padded at
    /// comparison time.
    pub fn vectorize(&self, text: &str) -> TermVector {
        let tokens = tokenize(text);
        let mut dimensions = self.lock();
        let mut vector = TermVector::new();

        for token in tokens {
            let next = dimensions.len();
            let dim = *dimensions.entry(token).or_insert(next);
            if vector.len() <= dim {
                vector.resize(dim + 1, 0.0);
            }
            vector[dim] += 1.0;
        }

        vector
    }

    // The whole read-modify-write of a text's tokens happens under one guard
    // so concurrent callers never hand out the same dimension twice.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, usize>> {
        self.dimensions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
