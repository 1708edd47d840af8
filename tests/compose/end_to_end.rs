use agui::contracts::{ArtifactType, ComposeRequest, JobStatus};

use super::fixtures::{BRAND, counting_composer, seeded_composer};

#[tokio::test]
async fn empty_library_yields_customized_button_and_reports() {
    let (composer, synthesizer) = counting_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(record.status, JobStatus::Succeeded);
    assert!(record.error.is_none());
    assert_eq!(synthesizer.calls(), 1);
    assert_eq!(record.artifacts.len(), 3);

    let button = &record.artifacts[0];
    assert_eq!(button.artifact_type, ArtifactType::Component);
    assert_eq!(button.name, "Button");
    assert_eq!(
        button.tokens().unwrap()["color"],
        "{brand.color.primary.700}"
    );
    assert_eq!(button.tokens().unwrap()["radius"], "{brand.radius.sm}");
    assert!(button.code().unwrap().contains(">Continue<"));

    let mutations = &button.metadata.as_ref().unwrap()["mutations"];
    assert_eq!(mutations["target"], button.id.as_str());
    assert_eq!(mutations["ops"].as_array().unwrap().len(), 2);

    let optimization = &record.artifacts[1];
    assert_eq!(optimization.id, "optimizationReport");
    assert_eq!(optimization.name, "optimization");
    assert_eq!(optimization.artifact_type, ArtifactType::Report);
    assert_eq!(
        optimization.content["afterMetrics"]["responsiveness"],
        serde_json::json!(0.85)
    );

    let evaluation = &record.artifacts[2];
    assert_eq!(evaluation.id, "evaluationReport");
    assert_eq!(evaluation.name, "evaluation");
    assert_eq!(evaluation.content["accessibility"]["contrastOK"], true);
    assert_eq!(evaluation.content["performance"]["bundleDeltaKb"], 3);
}

#[tokio::test]
async fn job_is_visible_immediately_after_compose() {
    let composer = seeded_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();

    let record = composer.get_job(&job_id).unwrap();
    assert_eq!(record.id, job_id);
    assert!(matches!(
        record.status,
        JobStatus::Queued | JobStatus::Running
    ));
    assert_eq!(record.request.intent, "need a button");
}

#[tokio::test]
async fn unknown_job_id_is_absent() {
    let composer = seeded_composer();
    assert!(composer.get_job("no-such-job").is_none());
}

#[tokio::test]
async fn job_record_serializes_camel_case() {
    let composer = seeded_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["status"], "succeeded");
    assert_eq!(value["request"]["brandId"], BRAND);
    assert!(value["createdAt"].is_string());
    assert!(value["updatedAt"].is_string());
    assert_eq!(value["artifacts"][1]["type"], "report");
    assert!(value.get("error").is_none());
}

#[tokio::test]
async fn terminal_record_no_longer_changes() {
    let composer = seeded_composer();
    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let first = composer.wait(&job_id).await.unwrap();
    tokio::task::yield_now().await;
    let second = composer.get_job(&job_id).unwrap();
    assert_eq!(first, second);
}
