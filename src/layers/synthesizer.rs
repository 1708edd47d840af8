use async_trait::async_trait;
use rand::Rng;
use serde_json::json;

use crate::contracts::{Artifact, ArtifactType, ElementSchema, JsonMap};

const ID_SUFFIX_LEN: usize = 6;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const DEFAULT_ARIA_ROLE: &str = "button";

/// Produces a new component artifact from a declarative element schema.
#[async_trait]
pub trait ElementSynthesizer: Send + Sync {
    fn name(&self) -> &str;

    async fn synthesize(&self, schema: &ElementSchema) -> anyhow::Result<Artifact>;
}

/// Renders the fixed React template for a schema.
pub struct TemplateSynthesizer;

#[async_trait]
impl ElementSynthesizer for TemplateSynthesizer {
    fn name(&self) -> &str {
        "template"
    }

    async fn synthesize(&self, schema: &ElementSchema) -> anyhow::Result<Artifact> {
        synthesize_element(schema)
    }
}

/// Build a component artifact for `schema`.
///
/// The code is a one-line React component named after the schema with the
/// schema's ARIA role (default `button`). `baseTokens` become the artifact's
/// tokens and the schema itself is kept in metadata for traceability.
pub fn synthesize_element(schema: &ElementSchema) -> anyhow::Result<Artifact> {
    let role = schema
        .aria_role()
        .unwrap_or_else(|| DEFAULT_ARIA_ROLE.to_string());
    let name = &schema.name;
    let code = format!(
        "export function {name}(props: any){{return (<button role=\"{role}\">{name}</button>);}}"
    );

    let mut metadata = JsonMap::new();
    metadata.insert("schema".into(), serde_json::to_value(schema)?);

    Ok(Artifact {
        id: format!("comp_{name}_{}", random_suffix()),
        artifact_type: ArtifactType::Component,
        name: name.clone(),
        content: json!({
            "framework": "react",
            "code": code,
            "tokens": schema.base_tokens,
        }),
        metadata: Some(metadata),
    })
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..ID_SUFFIX_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
        .collect()
}
