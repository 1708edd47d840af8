//! Wire-level value types shared by every stage of the compose pipeline.
//!
//! Field names serialize in camelCase so records round-trip unchanged through
//! the HTTP gateway and UI clients.

pub mod artifact;
pub mod job;
pub mod mutation;
pub mod schema;

pub use artifact::{Artifact, ArtifactType};
pub use job::{ComposeRequest, JobRecord, JobStatus};
pub use mutation::{MutationDsl, MutationKind, MutationOperation};
pub use schema::{
    Breakpoint, CodeArtifacts, CodeTemplate, ElementSchema, ResponsiveRules, StyleStrategy,
    TestRequirements,
};

/// Free-form JSON object used for tokens, metadata and schema fragments.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;
