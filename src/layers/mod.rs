//! Artifact transformation stages: synthesis of new elements, declarative
//! mutation of existing ones, and batch optimization.

pub mod mutation;
pub mod optimizer;
pub mod synthesizer;

pub use mutation::MutationEngine;
pub use optimizer::{
    ArtifactOptimizer, BaselineOptimizer, LayoutMetrics, OptimizationReport, Optimized,
};
pub use synthesizer::{ElementSynthesizer, TemplateSynthesizer, synthesize_element};
