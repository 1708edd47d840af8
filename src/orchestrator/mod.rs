//! Asynchronous compose jobs: creation, background execution and lookup.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::Display;
use tokio::task::JoinError;
use uuid::Uuid;

use crate::contracts::{ComposeRequest, JobRecord};
use crate::error::{JobError, PipelineError};

pub mod demo;
pub mod pipeline;
pub mod store;

pub use pipeline::ComposePipeline;
pub use store::JobStore;

/// Pipeline stage named in failure messages and stage logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum JobStage {
    Guidance,
    Reuse,
    Synthesis,
    Mutation,
    Optimization,
    Evaluation,
}

/// Owns the job store and runs each compose job on the tokio runtime.
///
/// `compose` returns as soon as the record exists; the run happens in a
/// spawned task that moves the record through `running` to `succeeded` or
/// `failed`. A panicking stage fails its job instead of taking the
/// orchestrator down.
pub struct Orchestrator {
    jobs: Arc<JobStore>,
    pipeline: Arc<ComposePipeline>,
}

impl Orchestrator {
    pub fn new(pipeline: ComposePipeline) -> Self {
        Self {
            jobs: Arc::new(JobStore::new()),
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn compose(&self, request: ComposeRequest) -> Result<String, JobError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| JobError::NoRuntime)?;
        let job_id = Uuid::new_v4().to_string();
        self.jobs.create(&job_id, request.clone());
        tracing::info!(
            job_id = %job_id,
            brand_id = %request.brand_id,
            "compose job queued"
        );

        let jobs = Arc::clone(&self.jobs);
        let pipeline = Arc::clone(&self.pipeline);
        let id = job_id.clone();
        runtime.spawn(async move { supervise(jobs, pipeline, id, request).await });

        Ok(job_id)
    }

    pub fn get_job(&self, job_id: &str) -> Option<JobRecord> {
        self.jobs.get(job_id)
    }

    /// Resolve once the job reaches a terminal status.
    pub async fn wait(&self, job_id: &str) -> Result<JobRecord, JobError> {
        let mut status = self
            .jobs
            .subscribe(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))?;
        status
            .wait_for(|status| status.is_terminal())
            .await
            .map_err(|_| JobError::NotFound(job_id.to_string()))?;
        self.jobs
            .get(job_id)
            .ok_or_else(|| JobError::NotFound(job_id.to_string()))
    }

    pub fn list(&self) -> Vec<JobRecord> {
        self.jobs.list()
    }
}

async fn supervise(
    jobs: Arc<JobStore>,
    pipeline: Arc<ComposePipeline>,
    job_id: String,
    request: ComposeRequest,
) {
    jobs.mark_running(&job_id);

    let run = {
        let job_id = job_id.clone();
        tokio::spawn(async move { pipeline.run(&job_id, &request).await })
    };
    let outcome = match run.await {
        Ok(outcome) => outcome,
        Err(error) => Err(PipelineError::Panicked(join_failure(error))),
    };

    match outcome {
        Ok(artifacts) => {
            tracing::info!(
                job_id = %job_id,
                artifacts = artifacts.len(),
                "compose job succeeded"
            );
            jobs.mark_succeeded(&job_id, artifacts);
        }
        Err(error) => {
            tracing::error!(job_id = %job_id, "compose job failed: {error}");
            jobs.mark_failed(&job_id, error.to_string());
        }
    }
}

fn join_failure(error: JoinError) -> String {
    if !error.is_panic() {
        return "run was cancelled".into();
    }
    let payload = error.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".into())
}
