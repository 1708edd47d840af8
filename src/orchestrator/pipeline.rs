use std::sync::Arc;

use crate::brand::BrandRegistry;
use crate::config::ComposerConfig;
use crate::contracts::{Artifact, ComposeRequest};
use crate::error::PipelineError;
use crate::evaluator::{ArtifactEvaluator, StaticEvaluator};
use crate::guidance::GuidanceCorpus;
use crate::layers::{
    ArtifactOptimizer, BaselineOptimizer, ElementSynthesizer, MutationEngine, TemplateSynthesizer,
};
use crate::library::{ComponentLibrary, LibraryQuery};

use super::JobStage;
use super::demo::{customization_dsl, default_button_schema};

/// The ordered stages of one compose job.
///
/// Holds shared handles only; one pipeline serves every job of an
/// orchestrator and runs are independent of each other.
pub struct ComposePipeline {
    library: Arc<ComponentLibrary>,
    guidance: Arc<GuidanceCorpus>,
    brands: Arc<BrandRegistry>,
    synthesizer: Arc<dyn ElementSynthesizer>,
    mutations: MutationEngine,
    optimizer: Arc<dyn ArtifactOptimizer>,
    evaluator: Arc<dyn ArtifactEvaluator>,
    settings: ComposerConfig,
}

impl ComposePipeline {
    pub fn new(
        library: Arc<ComponentLibrary>,
        guidance: Arc<GuidanceCorpus>,
        brands: Arc<BrandRegistry>,
        settings: ComposerConfig,
    ) -> Self {
        Self {
            library,
            guidance,
            brands,
            synthesizer: Arc::new(TemplateSynthesizer),
            mutations: MutationEngine::new(),
            optimizer: Arc::new(BaselineOptimizer),
            evaluator: Arc::new(StaticEvaluator),
            settings,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn ElementSynthesizer>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn with_optimizer(mut self, optimizer: Arc<dyn ArtifactOptimizer>) -> Self {
        self.optimizer = optimizer;
        self
    }

    pub fn with_evaluator(mut self, evaluator: Arc<dyn ArtifactEvaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Run every stage for `request` and return the job's final artifacts:
    /// the optimized candidates followed by the optimization and evaluation
    /// reports.
    pub async fn run(
        &self,
        job_id: &str,
        request: &ComposeRequest,
    ) -> Result<Vec<Artifact>, PipelineError> {
        let brand = self.brands.get(&request.brand_id);
        if brand.is_none() {
            tracing::warn!(
                job_id = %job_id,
                brand_id = %request.brand_id,
                "unknown brand; composing without a profile"
            );
        }

        let context = self.guidance.build_context_pack(
            &request.brand_id,
            brand,
            &request.intent,
            self.settings.guidance_matches,
        );
        tracing::debug!(
            job_id = %job_id,
            stage = %JobStage::Guidance,
            matches = context.guidance.len(),
            "context pack built"
        );
        tokio::task::yield_now().await;

        let mut candidates = self.reuse_candidates(job_id, request);
        tracing::debug!(
            job_id = %job_id,
            stage = %JobStage::Reuse,
            reused = candidates.len(),
            "library candidates selected"
        );

        if candidates.is_empty() {
            let schema = default_button_schema();
            let artifact = self
                .synthesizer
                .synthesize(&schema)
                .await
                .map_err(|error| PipelineError::stage(JobStage::Synthesis, &error))?;
            tracing::debug!(
                job_id = %job_id,
                stage = %JobStage::Synthesis,
                synthesizer = self.synthesizer.name(),
                artifact_id = %artifact.id,
                "element synthesized"
            );
            candidates.push(artifact);
        }
        tokio::task::yield_now().await;

        let customized = candidates
            .iter()
            .map(|artifact| self.mutations.apply(artifact, &customization_dsl(&artifact.id)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|error| PipelineError::stage(JobStage::Mutation, &error))?;
        tokio::task::yield_now().await;

        let optimized = self
            .optimizer
            .optimize(customized)
            .await
            .map_err(|error| PipelineError::stage(JobStage::Optimization, &error))?;
        tracing::debug!(
            job_id = %job_id,
            stage = %JobStage::Optimization,
            optimizer = self.optimizer.name(),
            "artifacts optimized"
        );

        let evaluation = self
            .evaluator
            .evaluate(&optimized.artifacts)
            .await
            .map_err(|error| PipelineError::stage(JobStage::Evaluation, &error))?;
        tracing::debug!(
            job_id = %job_id,
            stage = %JobStage::Evaluation,
            evaluator = self.evaluator.name(),
            "artifacts evaluated"
        );

        let optimization_report = serde_json::to_value(optimized.report)
            .map_err(|error| {
                PipelineError::stage(JobStage::Optimization, &anyhow::Error::from(error))
            })?;
        let evaluation_report = serde_json::to_value(evaluation)
            .map_err(|error| {
                PipelineError::stage(JobStage::Evaluation, &anyhow::Error::from(error))
            })?;

        let mut artifacts = optimized.artifacts;
        artifacts.push(Artifact::report(
            "optimizationReport",
            "optimization",
            optimization_report,
        ));
        artifacts.push(Artifact::report(
            "evaluationReport",
            "evaluation",
            evaluation_report,
        ));
        Ok(artifacts)
    }

    /// Pinned seed items first (in request order), then ranked library hits
    /// scoring strictly above the reuse threshold. A pinned id is not
    /// repeated by the ranked hits; entries sharing an unpinned id all count.
    fn reuse_candidates(&self, job_id: &str, request: &ComposeRequest) -> Vec<Artifact> {
        let mut pinned: Vec<String> = Vec::new();
        let mut picked: Vec<Artifact> = Vec::new();

        for seed_id in request.seed_library_ids.iter().flatten() {
            if pinned.contains(seed_id) {
                continue;
            }
            match self.library.get(&request.brand_id, seed_id) {
                Some(item) => {
                    pinned.push(item.id);
                    picked.push(item.artifact);
                }
                None => tracing::debug!(
                    job_id = %job_id,
                    seed_id = %seed_id,
                    "seed library id not found for brand; ignored"
                ),
            }
        }

        let query = LibraryQuery::new(&request.brand_id, &request.intent)
            .with_k(self.settings.reuse_candidates);
        for hit in self.library.search(&query) {
            if hit.similarity > self.settings.reuse_threshold && !pinned.contains(&hit.id) {
                picked.push(hit.item.artifact);
            }
        }

        picked
    }
}
