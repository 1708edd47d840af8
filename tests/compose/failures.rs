use std::sync::Arc;

use agui::Composer;
use agui::config::ComposerConfig;
use agui::contracts::{ComposeRequest, JobStatus};
use agui::error::JobError;

use super::fixtures::{BRAND, FailingEvaluator, seeded_composer};

#[tokio::test]
async fn evaluator_failure_marks_job_failed() {
    let composer = Composer::builder(ComposerConfig::default())
        .evaluator(Arc::new(FailingEvaluator))
        .build();
    composer.seed_demo_data();

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(record.status, JobStatus::Failed);
    assert!(record.artifacts.is_empty());
    assert_eq!(
        record.error.as_deref(),
        Some("evaluation stage failed: contrast checker unavailable")
    );
}

#[tokio::test]
async fn failed_job_does_not_affect_later_jobs() {
    let failing = Composer::builder(ComposerConfig::default())
        .evaluator(Arc::new(FailingEvaluator))
        .build();
    let failed_id = failing
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    assert_eq!(
        failing.wait(&failed_id).await.unwrap().status,
        JobStatus::Failed
    );

    let composer = seeded_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    assert_eq!(
        composer.wait(&job_id).await.unwrap().status,
        JobStatus::Succeeded
    );
}

#[tokio::test]
async fn unknown_brand_composes_without_profile() {
    let composer = seeded_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", "unregistered"))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();
    assert_eq!(record.status, JobStatus::Succeeded);
    assert_eq!(record.artifacts.len(), 3);
}

#[tokio::test]
async fn waiting_on_unknown_job_is_not_found() {
    let composer = seeded_composer();
    let err = composer.wait("missing").await.unwrap_err();
    assert!(matches!(err, JobError::NotFound(_)));
}

#[test]
fn compose_outside_runtime_reports_no_runtime() {
    let composer = seeded_composer();
    let err = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap_err();
    assert!(matches!(err, JobError::NoRuntime));
}
