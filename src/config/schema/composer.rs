use serde::{Deserialize, Serialize};

/// Tuning for the compose pipeline and the retrieval endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Library hits must score strictly above this to be reused (default: 0.2)
    #[serde(default = "default_reuse_threshold")]
    pub reuse_threshold: f32,
    /// Library hits considered per job (default: 3)
    #[serde(default = "default_reuse_candidates")]
    pub reuse_candidates: usize,
    /// Guidance docs placed in a job's context pack (default: 5)
    #[serde(default = "default_guidance_matches")]
    pub guidance_matches: usize,
    /// Result count for search endpoints when the caller gives none (default: 5)
    #[serde(default = "default_search_k")]
    pub default_search_k: usize,
}

fn default_reuse_threshold() -> f32 {
    0.2
}

fn default_reuse_candidates() -> usize {
    3
}

fn default_guidance_matches() -> usize {
    5
}

fn default_search_k() -> usize {
    5
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            reuse_threshold: default_reuse_threshold(),
            reuse_candidates: default_reuse_candidates(),
            guidance_matches: default_guidance_matches(),
            default_search_k: default_search_k(),
        }
    }
}
