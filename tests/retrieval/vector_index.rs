use std::sync::Arc;

use agui::retrieval::{VectorIndex, cosine_similarity, tokenize};

#[test]
fn tokenize_lowercases_and_splits_on_non_alphanumerics() {
    assert_eq!(
        tokenize("Primary-Button, v2!  CTA"),
        vec!["primary", "button", "v2", "cta"]
    );
    assert!(tokenize("--- !!!").is_empty());
}

#[test]
fn identical_texts_score_one() {
    let index = VectorIndex::new();
    let a = index.vectorize("primary button hover");
    let b = index.vectorize("Primary BUTTON hover");
    assert!((index.similarity(&a, &b) - 1.0).abs() < 1e-6);
}

#[test]
fn older_vectors_compare_with_newer_ones() {
    let index = VectorIndex::new();
    let old = index.vectorize("button");
    let newer = index.vectorize("button card surface elevation");
    assert!(old.len() < newer.len());

    let score = index.similarity(&old, &newer);
    assert!((score - 0.5).abs() < 1e-6);
    assert!((score - index.similarity(&newer, &old)).abs() < f32::EPSILON);
}

#[test]
fn empty_vectors_score_zero() {
    let index = VectorIndex::new();
    let empty = index.vectorize("");
    let full = index.vectorize("button");
    assert!(empty.is_empty());
    assert!(index.similarity(&empty, &full).abs() < f32::EPSILON);
    assert!(cosine_similarity(&[], &[]).abs() < f32::EPSILON);
}

#[test]
fn scores_stay_within_unit_interval() {
    let index = VectorIndex::new();
    let texts = [
        "need a button",
        "button button button",
        "a a a need",
        "unrelated words entirely",
    ];
    let vectors: Vec<_> = texts.iter().map(|text| index.vectorize(text)).collect();
    for a in &vectors {
        for b in &vectors {
            let score = index.similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "score out of range: {score}");
        }
    }
}

#[test]
fn concurrent_vectorization_assigns_unique_dimensions() {
    let index = Arc::new(VectorIndex::new());
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let index = Arc::clone(&index);
            std::thread::spawn(move || {
                for i in 0..50 {
                    index.vectorize(&format!("shared token{i} worker{worker}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // "shared", 50 distinct tokenN and 8 distinct workerN terms.
    assert_eq!(index.vocabulary().len(), 1 + 50 + 8);
    let probe = index.vectorize("shared");
    assert_eq!(probe.iter().filter(|weight| **weight > 0.0).count(), 1);
}
