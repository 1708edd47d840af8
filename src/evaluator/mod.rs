//! Accessibility, brand and performance checks over a finished artifact batch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::contracts::Artifact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessibilityFindings {
    pub violations: u32,
    #[serde(rename = "contrastOK")]
    pub contrast_ok: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandFindings {
    pub token_adherence: f64,
    pub violations: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFindings {
    pub bundle_delta_kb: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accessibility: AccessibilityFindings,
    pub brand: BrandFindings,
    pub performance: PerformanceFindings,
}

#[async_trait]
pub trait ArtifactEvaluator: Send + Sync {
    fn name(&self) -> &str;

    async fn evaluate(&self, artifacts: &[Artifact]) -> anyhow::Result<EvaluationReport>;
}

/// Reports a fixed passing result regardless of the batch.
pub struct StaticEvaluator;

#[async_trait]
impl ArtifactEvaluator for StaticEvaluator {
    fn name(&self) -> &str {
        "static"
    }

    async fn evaluate(&self, _artifacts: &[Artifact]) -> anyhow::Result<EvaluationReport> {
        Ok(EvaluationReport {
            accessibility: AccessibilityFindings {
                violations: 0,
                contrast_ok: true,
            },
            brand: BrandFindings {
                token_adherence: 0.97,
                violations: 0,
            },
            performance: PerformanceFindings { bundle_delta_kb: 3 },
        })
    }
}
