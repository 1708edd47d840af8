#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;

use agui::Composer;
use agui::config::ComposerConfig;
use agui::contracts::{Artifact, ArtifactType, ElementSchema};
use agui::evaluator::{ArtifactEvaluator, EvaluationReport};
use agui::layers::{ElementSynthesizer, synthesize_element};
use agui::library::LibraryIngest;

pub const BRAND: &str = "acme";

/// Template synthesizer that counts its invocations.
#[derive(Default)]
pub struct CountingSynthesizer {
    calls: AtomicUsize,
}

impl CountingSynthesizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ElementSynthesizer for CountingSynthesizer {
    fn name(&self) -> &str {
        "counting"
    }

    async fn synthesize(&self, schema: &ElementSchema) -> anyhow::Result<Artifact> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        synthesize_element(schema)
    }
}

pub struct FailingEvaluator;

#[async_trait]
impl ArtifactEvaluator for FailingEvaluator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn evaluate(&self, _artifacts: &[Artifact]) -> anyhow::Result<EvaluationReport> {
        anyhow::bail!("contrast checker unavailable")
    }
}

/// Demo-seeded composer whose synthesizer calls are observable.
pub fn counting_composer() -> (Composer, Arc<CountingSynthesizer>) {
    let synthesizer = Arc::new(CountingSynthesizer::default());
    let composer = Composer::builder(ComposerConfig::default())
        .synthesizer(synthesizer.clone())
        .build();
    composer.seed_demo_data();
    (composer, synthesizer)
}

pub fn seeded_composer() -> Composer {
    let composer = Composer::new(ComposerConfig::default());
    composer.seed_demo_data();
    composer
}

pub fn component(id: &str, name: &str) -> Artifact {
    Artifact {
        id: id.to_string(),
        artifact_type: ArtifactType::Component,
        name: name.to_string(),
        content: json!({
            "framework": "react",
            "code": format!("export function {name}(){{return (<button>{name}</button>);}}"),
            "tokens": {"color": "{brand.color.primary.600}", "radius": "{brand.radius.sm}"}
        }),
        metadata: None,
    }
}

pub fn library_item(brand_id: &str, id: &str, name: &str, index_text: &str) -> LibraryIngest {
    LibraryIngest::component(brand_id, component(id, name)).with_index_text(index_text)
}
