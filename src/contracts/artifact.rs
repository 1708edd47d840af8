use serde::{Deserialize, Serialize};
use strum::Display;

use super::JsonMap;

// ArtifactType — kind of produced UI deliverable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtifactType {
    Component,
    Page,
    Report,
}

/// A produced UI deliverable.
///
/// Artifacts are plain values: every pipeline stage that changes one returns a
/// new value and leaves its input untouched, so library entries never alias
/// the copies flowing through a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: String,
    #[serde(rename = "type")]
    pub artifact_type: ArtifactType,
    pub name: String,
    /// Opaque structured payload (code, tokens, report body).
    pub content: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonMap>,
}

impl Artifact {
    pub fn report(id: &str, name: &str, content: serde_json::Value) -> Self {
        Self {
            id: id.to_string(),
            artifact_type: ArtifactType::Report,
            name: name.to_string(),
            content,
            metadata: None,
        }
    }

    pub fn is_report(&self) -> bool {
        self.artifact_type == ArtifactType::Report
    }

    /// `content.code` when the payload carries a code string.
    pub fn code(&self) -> Option<&str> {
        self.content.get("code").and_then(serde_json::Value::as_str)
    }

    /// `content.tokens` when the payload carries a token object.
    pub fn tokens(&self) -> Option<&JsonMap> {
        self.content
            .get("tokens")
            .and_then(serde_json::Value::as_object)
    }
}
