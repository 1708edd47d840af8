use thiserror::Error;

use crate::orchestrator::JobStage;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `agui`.
///
/// Each subsystem defines its own error variant. Library callers can match on
/// these to decide recovery strategy; pluggable pipeline stages keep returning
/// `anyhow::Result` and are wrapped at the orchestrator boundary.
#[derive(Debug, Error)]
pub enum AguiError {
    // ── Config ───────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Job lifecycle ───────────────────────────────────────────────────
    #[error("job: {0}")]
    Job(#[from] JobError),

    // ── Compose pipeline ────────────────────────────────────────────────
    #[error("pipeline: {0}")]
    Pipeline(#[from] PipelineError),

    // ── HTTP gateway ────────────────────────────────────────────────────
    #[error("gateway: {0}")]
    Gateway(#[from] GatewayError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Config errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Job errors ─────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum JobError {
    #[error("job not found: {0}")]
    NotFound(String),

    #[error("no async runtime available to run the job")]
    NoRuntime,
}

// ─── Pipeline errors ────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {message}")]
    Stage { stage: JobStage, message: String },

    #[error("run panicked: {0}")]
    Panicked(String),
}

impl PipelineError {
    pub fn stage(stage: JobStage, error: &anyhow::Error) -> Self {
        Self::Stage {
            stage,
            message: format!("{error:#}"),
        }
    }
}

// ─── Gateway errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },

    #[error("server error: {0}")]
    Serve(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, AguiError>;
