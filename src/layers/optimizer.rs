use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::contracts::Artifact;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutMetrics {
    pub responsiveness: f64,
    pub alignment: f64,
    pub brand_adherence: f64,
}

impl LayoutMetrics {
    /// Per-metric `self - before`.
    pub fn diff(&self, before: &Self) -> Self {
        Self {
            responsiveness: self.responsiveness - before.responsiveness,
            alignment: self.alignment - before.alignment,
            brand_adherence: self.brand_adherence - before.brand_adherence,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationReport {
    pub before_metrics: LayoutMetrics,
    pub after_metrics: LayoutMetrics,
    pub diffs: LayoutMetrics,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Optimized {
    pub artifacts: Vec<Artifact>,
    pub report: OptimizationReport,
}

#[async_trait]
pub trait ArtifactOptimizer: Send + Sync {
    fn name(&self) -> &str;

    async fn optimize(&self, artifacts: Vec<Artifact>) -> anyhow::Result<Optimized>;
}

const BASELINE_BEFORE: LayoutMetrics = LayoutMetrics {
    responsiveness: 0.7,
    alignment: 0.7,
    brand_adherence: 0.9,
};

const BASELINE_AFTER: LayoutMetrics = LayoutMetrics {
    responsiveness: 0.85,
    alignment: 0.82,
    brand_adherence: 0.92,
};

/// Passes artifacts through unchanged and reports fixed before/after metrics.
///
/// The numbers do not depend on the input; no layout analysis happens yet.
pub struct BaselineOptimizer;

#[async_trait]
impl ArtifactOptimizer for BaselineOptimizer {
    fn name(&self) -> &str {
        "baseline"
    }

    async fn optimize(&self, artifacts: Vec<Artifact>) -> anyhow::Result<Optimized> {
        Ok(Optimized {
            artifacts,
            report: OptimizationReport {
                before_metrics: BASELINE_BEFORE,
                after_metrics: BASELINE_AFTER,
                diffs: BASELINE_AFTER.diff(&BASELINE_BEFORE),
            },
        })
    }
}
