//! Service facade over the stores and the orchestrator.
//!
//! Everything the gateway and the CLI need goes through [`Composer`]: job
//! submission and lookup, library and guidance search, and ingestion.

use serde::Serialize;
use std::sync::Arc;

use crate::brand::demo::{acme_guidance, acme_profile};
use crate::brand::BrandRegistry;
use crate::config::ComposerConfig;
use crate::contracts::{ComposeRequest, JobRecord};
use crate::error::JobError;
use crate::evaluator::ArtifactEvaluator;
use crate::guidance::{GuidanceCorpus, GuidanceInput};
use crate::layers::{ArtifactOptimizer, ElementSynthesizer};
use crate::library::{ComponentLibrary, LibraryIngest, LibraryQuery};
use crate::orchestrator::{ComposePipeline, Orchestrator};
use crate::retrieval::VectorIndex;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarySearchHit {
    pub id: String,
    pub similarity: f32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibrarySearchResponse {
    pub matches: Vec<LibrarySearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceSearchResponse {
    pub answers: Vec<String>,
    pub sources: Vec<String>,
}

pub struct Composer {
    library: Arc<ComponentLibrary>,
    guidance: Arc<GuidanceCorpus>,
    brands: Arc<BrandRegistry>,
    orchestrator: Orchestrator,
    settings: ComposerConfig,
}

pub struct ComposerBuilder {
    settings: ComposerConfig,
    synthesizer: Option<Arc<dyn ElementSynthesizer>>,
    optimizer: Option<Arc<dyn ArtifactOptimizer>>,
    evaluator: Option<Arc<dyn ArtifactEvaluator>>,
}

impl ComposerBuilder {
    pub fn synthesizer(mut self, synthesizer: Arc<dyn ElementSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub fn optimizer(mut self, optimizer: Arc<dyn ArtifactOptimizer>) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    pub fn evaluator(mut self, evaluator: Arc<dyn ArtifactEvaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn build(self) -> Composer {
        // One vocabulary for library and guidance so their vectors share dimensions.
        let index = Arc::new(VectorIndex::new());
        let library = Arc::new(ComponentLibrary::new(Arc::clone(&index)));
        let guidance = Arc::new(GuidanceCorpus::new(index));
        let brands = Arc::new(BrandRegistry::new());

        let mut pipeline = ComposePipeline::new(
            Arc::clone(&library),
            Arc::clone(&guidance),
            Arc::clone(&brands),
            self.settings.clone(),
        );
        if let Some(synthesizer) = self.synthesizer {
            pipeline = pipeline.with_synthesizer(synthesizer);
        }
        if let Some(optimizer) = self.optimizer {
            pipeline = pipeline.with_optimizer(optimizer);
        }
        if let Some(evaluator) = self.evaluator {
            pipeline = pipeline.with_evaluator(evaluator);
        }

        Composer {
            library,
            guidance,
            brands,
            orchestrator: Orchestrator::new(pipeline),
            settings: self.settings,
        }
    }
}

impl Composer {
    pub fn new(settings: ComposerConfig) -> Self {
        Self::builder(settings).build()
    }

    pub fn builder(settings: ComposerConfig) -> ComposerBuilder {
        ComposerBuilder {
            settings,
            synthesizer: None,
            optimizer: None,
            evaluator: None,
        }
    }

    /// Register the `acme` demo brand and its guidance snippets.
    pub fn seed_demo_data(&self) {
        self.brands.insert(acme_profile());
        self.guidance.ingest(acme_guidance());
        tracing::info!(
            brands = self.brands.len(),
            guidance = self.guidance.len(),
            "demo data seeded"
        );
    }

    pub fn compose(&self, request: ComposeRequest) -> Result<String, JobError> {
        self.orchestrator.compose(request)
    }

    pub fn get_job(&self, job_id: &str) -> Option<JobRecord> {
        self.orchestrator.get_job(job_id)
    }

    pub async fn wait(&self, job_id: &str) -> Result<JobRecord, JobError> {
        self.orchestrator.wait(job_id).await
    }

    pub fn list_jobs(&self) -> Vec<JobRecord> {
        self.orchestrator.list()
    }

    pub fn library_search(
        &self,
        query: &str,
        brand_id: &str,
        k: Option<usize>,
    ) -> LibrarySearchResponse {
        let query = LibraryQuery::new(brand_id, query)
            .with_k(k.unwrap_or(self.settings.default_search_k));
        let matches = self
            .library
            .search(&query)
            .into_iter()
            .map(|hit| LibrarySearchHit {
                id: hit.id,
                similarity: hit.similarity,
                name: hit.item.name,
            })
            .collect();
        LibrarySearchResponse { matches }
    }

    pub fn guidance_search(
        &self,
        query: &str,
        brand_id: &str,
        k: Option<usize>,
    ) -> GuidanceSearchResponse {
        let docs = self
            .guidance
            .search(brand_id, query, k.unwrap_or(self.settings.default_search_k));
        let (answers, sources) = docs.into_iter().map(|doc| (doc.text, doc.id)).unzip();
        GuidanceSearchResponse { answers, sources }
    }

    pub fn ingest_library(&self, input: LibraryIngest) {
        self.library.ingest(input);
    }

    pub fn ingest_guidance(&self, inputs: Vec<GuidanceInput>) {
        self.guidance.ingest(inputs);
    }

    pub fn library(&self) -> &ComponentLibrary {
        &self.library
    }

    pub fn guidance(&self) -> &GuidanceCorpus {
        &self.guidance
    }

    pub fn brands(&self) -> &BrandRegistry {
        &self.brands
    }
}
