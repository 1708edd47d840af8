use serde::{Deserialize, Serialize};
use strum::Display;

use super::{Artifact, JsonMap};

/// Request to compose UI artifacts for a brand.
///
/// Presence of `intent` and `brandId` is the caller's to check before handing
/// the request to the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeRequest {
    pub intent: String,
    pub brand_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_library_ids: Option<Vec<String>>,
}

impl ComposeRequest {
    pub fn new(intent: &str, brand_id: &str) -> Self {
        Self {
            intent: intent.to_string(),
            brand_id: brand_id.to_string(),
            constraints: None,
            seed_library_ids: None,
        }
    }

    pub fn with_seed_library_ids(mut self, ids: Vec<String>) -> Self {
        self.seed_library_ids = Some(ids);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Running,
    Succeeded,
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// One compose job as seen by callers. Only the orchestrator writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub status: JobStatus,
    pub request: ComposeRequest,
    pub artifacts: Vec<Artifact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
