use serde::{Deserialize, Serialize};
use strum::Display;

// MutationKind — declarative edit operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MutationKind {
    SetToken,
    AdjustSpacing,
    CopyEdit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationOperation {
    #[serde(rename = "type")]
    pub kind: MutationKind,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

impl MutationOperation {
    pub fn set_token(path: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            kind: MutationKind::SetToken,
            path: path.to_string(),
            value: Some(value.into()),
            delta: None,
        }
    }

    pub fn copy_edit(path: &str, value: impl Into<serde_json::Value>) -> Self {
        Self {
            kind: MutationKind::CopyEdit,
            path: path.to_string(),
            value: Some(value.into()),
            delta: None,
        }
    }

    pub fn adjust_spacing(path: &str, delta: f64) -> Self {
        Self {
            kind: MutationKind::AdjustSpacing,
            path: path.to_string(),
            value: None,
            delta: Some(delta),
        }
    }
}

/// Ordered edit script for one artifact. Later operations on the same path win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationDsl {
    /// Id of the artifact the script was written for.
    pub target: String,
    pub ops: Vec<MutationOperation>,
    #[serde(default)]
    pub constraints: Vec<String>,
}
