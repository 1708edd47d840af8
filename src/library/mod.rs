//! Brand-scoped library of previously produced artifacts, searchable by
//! bag-of-words similarity for reuse-first composition.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

use crate::contracts::Artifact;
use crate::retrieval::{Scored, TermVector, VectorIndex, top_k};

/// Result count when a search does not ask for one.
pub const DEFAULT_SEARCH_K: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameworkTag {
    #[default]
    React,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryItemType {
    Component,
    Page,
}

/// A stored library entry. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: String,
    pub brand_id: String,
    pub framework: FrameworkTag,
    #[serde(rename = "type")]
    pub item_type: LibraryItemType,
    pub name: String,
    #[serde(skip)]
    pub vector: TermVector,
    pub artifact: Artifact,
}

/// Ingestion payload; `index_text` defaults to the name plus serialized content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryIngest {
    pub id: String,
    pub brand_id: String,
    #[serde(default)]
    pub framework: FrameworkTag,
    #[serde(rename = "type")]
    pub item_type: LibraryItemType,
    pub name: String,
    pub artifact: Artifact,
    #[serde(default)]
    pub index_text: Option<String>,
}

impl LibraryIngest {
    pub fn component(brand_id: &str, artifact: Artifact) -> Self {
        Self {
            id: artifact.id.clone(),
            brand_id: brand_id.to_string(),
            framework: FrameworkTag::React,
            item_type: LibraryItemType::Component,
            name: artifact.name.clone(),
            artifact,
            index_text: None,
        }
    }

    pub fn with_index_text(mut self, text: &str) -> Self {
        self.index_text = Some(text.to_string());
        self
    }

    fn resolved_index_text(&self) -> String {
        match &self.index_text {
            Some(text) => text.clone(),
            None => format!("{} {}", self.name, self.artifact.content),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryQuery {
    pub brand_id: String,
    pub query: String,
    pub framework: Option<FrameworkTag>,
    pub k: usize,
}

impl LibraryQuery {
    pub fn new(brand_id: &str, query: &str) -> Self {
        Self {
            brand_id: brand_id.to_string(),
            query: query.to_string(),
            framework: None,
            k: DEFAULT_SEARCH_K,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_framework(mut self, framework: FrameworkTag) -> Self {
        self.framework = Some(framework);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryMatch {
    pub id: String,
    pub similarity: f32,
    pub item: LibraryItem,
}

pub struct ComponentLibrary {
    index: Arc<VectorIndex>,
    items: RwLock<Vec<LibraryItem>>,
}

impl ComponentLibrary {
    pub fn new(index: Arc<VectorIndex>) -> Self {
        Self {
            index,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Vectorize and append an item. Re-ingesting an id adds a second entry.
    pub fn ingest(&self, input: LibraryIngest) {
        let vector = self.index.vectorize(&input.resolved_index_text());
        let item = LibraryItem {
            id: input.id,
            brand_id: input.brand_id,
            framework: input.framework,
            item_type: input.item_type,
            name: input.name,
            vector,
            artifact: input.artifact,
        };

        tracing::debug!(item_id = %item.id, brand_id = %item.brand_id, "library item ingested");
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(item);
    }

    /// Top-`k` items of the query's brand, most similar first.
    pub fn search(&self, query: &LibraryQuery) -> Vec<LibraryMatch> {
        let q = self.index.vectorize(&query.query);
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);

        let candidates = items
            .iter()
            .filter(|item| item.brand_id == query.brand_id)
            .filter(|item| query.framework.is_none_or(|tag| item.framework == tag))
            .map(|item| Scored {
                score: self.index.similarity(&q, &item.vector),
                item,
            });

        top_k(candidates, query.k)
            .into_iter()
            .map(|scored| LibraryMatch {
                id: scored.item.id.clone(),
                similarity: scored.score,
                item: scored.item.clone(),
            })
            .collect()
    }

    /// First item with `id` belonging to `brand_id`.
    pub fn get(&self, brand_id: &str, id: &str) -> Option<LibraryItem> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items
            .iter()
            .find(|item| item.brand_id == brand_id && item.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
