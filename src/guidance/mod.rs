//! Brand guidance snippets and the context pack assembled from them.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

use crate::brand::BrandProfile;
use crate::contracts::JsonMap;
use crate::retrieval::{Scored, TermVector, VectorIndex, top_k};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceDoc {
    pub id: String,
    pub brand_id: String,
    pub text: String,
    #[serde(skip)]
    pub vector: TermVector,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceInput {
    pub id: String,
    pub brand_id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: Option<JsonMap>,
}

impl GuidanceInput {
    pub fn new(id: &str, brand_id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            brand_id: brand_id.to_string(),
            text: text.to_string(),
            metadata: None,
        }
    }
}

/// Brand profile plus the guidance matched for one intent.
///
/// Built once per job run and not yet read by synthesis or mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextPack {
    pub brand_id: String,
    /// `None` when the brand id has no registered profile.
    pub brand: Option<BrandProfile>,
    pub guidance: Vec<GuidanceDoc>,
}

pub struct GuidanceCorpus {
    index: Arc<VectorIndex>,
    docs: RwLock<Vec<GuidanceDoc>>,
}

impl GuidanceCorpus {
    pub fn new(index: Arc<VectorIndex>) -> Self {
        Self {
            index,
            docs: RwLock::new(Vec::new()),
        }
    }

    pub fn ingest(&self, inputs: Vec<GuidanceInput>) {
        let vectorized: Vec<GuidanceDoc> = inputs
            .into_iter()
            .map(|input| GuidanceDoc {
                vector: self.index.vectorize(&input.text),
                id: input.id,
                brand_id: input.brand_id,
                text: input.text,
                metadata: input.metadata,
            })
            .collect();

        tracing::debug!(count = vectorized.len(), "guidance docs ingested");
        self.docs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(vectorized);
    }

    /// Top-`k` docs of `brand_id` ranked by similarity to `query`.
    pub fn search(&self, brand_id: &str, query: &str, k: usize) -> Vec<GuidanceDoc> {
        let q = self.index.vectorize(query);
        let docs = self.docs.read().unwrap_or_else(PoisonError::into_inner);

        let candidates = docs
            .iter()
            .filter(|doc| doc.brand_id == brand_id)
            .map(|doc| Scored {
                score: self.index.similarity(&q, &doc.vector),
                item: doc,
            });

        top_k(candidates, k)
            .into_iter()
            .map(|scored| scored.item.clone())
            .collect()
    }

    pub fn build_context_pack(
        &self,
        brand_id: &str,
        brand: Option<BrandProfile>,
        intent: &str,
        matches: usize,
    ) -> ContextPack {
        let guidance = self.search(brand_id, intent, matches);
        ContextPack {
            brand_id: brand_id.to_string(),
            brand,
            guidance,
        }
    }

    pub fn len(&self) -> usize {
        self.docs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
