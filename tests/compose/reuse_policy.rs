use agui::contracts::{ComposeRequest, JobStatus};

use super::fixtures::{BRAND, counting_composer, library_item};

#[tokio::test]
async fn similar_item_is_reused_and_synthesizer_never_runs() {
    let (composer, synthesizer) = counting_composer();
    composer.ingest_library(library_item(
        BRAND,
        "lib-primary",
        "PrimaryButton",
        "need a primary button",
    ));

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(record.status, JobStatus::Succeeded);
    assert_eq!(synthesizer.calls(), 0);

    let first = &record.artifacts[0];
    assert_eq!(first.id, "lib-primary");
    assert!(first.code().unwrap().contains(">Continue<"));
    assert_eq!(first.tokens().unwrap()["color"], "{brand.color.primary.700}");
}

#[tokio::test]
async fn reuse_keeps_similarity_order_and_candidate_limit() {
    let (composer, synthesizer) = counting_composer();
    composer.ingest_library(library_item(BRAND, "weak", "Weak", "need a button for checkout flow"));
    composer.ingest_library(library_item(BRAND, "exact", "Exact", "need a button"));
    composer.ingest_library(library_item(BRAND, "close", "Close", "need a primary button"));
    composer.ingest_library(library_item(BRAND, "faint", "Faint", "need"));

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    let ids: Vec<&str> = record
        .artifacts
        .iter()
        .filter(|artifact| !artifact.is_report())
        .map(|artifact| artifact.id.as_str())
        .collect();
    assert_eq!(ids, vec!["exact", "close", "weak"]);
    assert_eq!(synthesizer.calls(), 0);
}

#[tokio::test]
async fn dissimilar_items_fall_back_to_synthesis() {
    let (composer, synthesizer) = counting_composer();
    composer.ingest_library(library_item(BRAND, "card", "Card", "surface card elevation"));

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(synthesizer.calls(), 1);
    assert!(record.artifacts[0].id.starts_with("comp_Button_"));
}

#[tokio::test]
async fn seeded_ids_lead_the_candidate_list() {
    let (composer, _) = counting_composer();
    composer.ingest_library(library_item(BRAND, "exact", "Exact", "need a button"));
    composer.ingest_library(library_item(BRAND, "card", "Card", "surface card elevation"));

    let request = ComposeRequest::new("need a button", BRAND)
        .with_seed_library_ids(vec!["card".into(), "exact".into()]);
    let job_id = composer.compose(request).unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(record.artifacts[0].id, "card");
    assert_eq!(record.artifacts[1].id, "exact");
    assert_eq!(record.artifacts.len(), 4);
}

#[tokio::test]
async fn seed_ids_of_another_brand_are_ignored() {
    let (composer, synthesizer) = counting_composer();
    composer.ingest_library(library_item("globex", "globex-card", "Card", "surface card"));

    let request = ComposeRequest::new("need a button", BRAND)
        .with_seed_library_ids(vec!["globex-card".into()]);
    let job_id = composer.compose(request).unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    assert_eq!(synthesizer.calls(), 1);
    assert!(record.artifacts.iter().all(|a| a.id != "globex-card"));
}

#[tokio::test]
async fn entries_sharing_an_id_are_each_reused() {
    let (composer, synthesizer) = counting_composer();
    composer.ingest_library(library_item(BRAND, "dup", "Dup", "need a button"));
    composer.ingest_library(library_item(BRAND, "dup", "Dup", "need a button"));

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();

    let ids: Vec<&str> = record.artifacts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["dup", "dup", "optimizationReport", "evaluationReport"]);
    assert_eq!(synthesizer.calls(), 0);
}

#[tokio::test]
async fn customizing_a_reused_item_leaves_the_library_entry_intact() {
    let (composer, _) = counting_composer();
    composer.ingest_library(library_item(
        BRAND,
        "lib-primary",
        "PrimaryButton",
        "need a primary button",
    ));

    let job_id = composer
        .compose(ComposeRequest::new("need a button", BRAND))
        .unwrap();
    let record = composer.wait(&job_id).await.unwrap();
    assert_eq!(record.status, JobStatus::Succeeded);
    assert!(record.artifacts[0].code().unwrap().contains(">Continue<"));

    let stored = composer.library().get(BRAND, "lib-primary").unwrap();
    let code = stored.artifact.code().unwrap();
    assert!(!code.contains(">Continue<"));
    assert!(code.contains(">PrimaryButton<"));
    assert_eq!(
        stored.artifact.tokens().unwrap()["color"],
        "{brand.color.primary.600}"
    );
    assert!(stored.artifact.metadata.is_none());
}
