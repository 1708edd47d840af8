use std::sync::Arc;

use agui::library::{ComponentLibrary, FrameworkTag, LibraryQuery};
use agui::retrieval::VectorIndex;

use super::fixtures::{BRAND, library_item};

fn library() -> ComponentLibrary {
    let library = ComponentLibrary::new(Arc::new(VectorIndex::new()));
    library.ingest(library_item(BRAND, "card", "Card", "card surface elevation"));
    library.ingest(library_item(BRAND, "cta", "CallToAction", "primary call to action button"));
    library.ingest(library_item(BRAND, "button", "PrimaryButton", "primary button"));
    library.ingest(library_item("globex", "g-button", "PrimaryButton", "primary button"));
    library
}

#[test]
fn results_are_brand_scoped_and_sorted_descending() {
    let hits = library().search(&LibraryQuery::new(BRAND, "primary button"));

    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|hit| hit.item.brand_id == BRAND));
    let ids: Vec<&str> = hits.iter().map(|hit| hit.id.as_str()).collect();
    assert_eq!(ids, vec!["button", "cta", "card"]);
    assert!(hits.windows(2).all(|pair| pair[0].similarity >= pair[1].similarity));
}

#[test]
fn k_limits_the_result_count() {
    let library = library();
    assert_eq!(library.search(&LibraryQuery::new(BRAND, "button").with_k(1)).len(), 1);
    assert!(library.search(&LibraryQuery::new(BRAND, "button").with_k(0)).is_empty());
    assert_eq!(library.search(&LibraryQuery::new(BRAND, "button").with_k(50)).len(), 3);
}

#[test]
fn unknown_brand_gets_no_results() {
    assert!(library().search(&LibraryQuery::new("initech", "button")).is_empty());
}

#[test]
fn framework_filter_keeps_react_items() {
    let hits = library().search(
        &LibraryQuery::new(BRAND, "primary button").with_framework(FrameworkTag::React),
    );
    assert_eq!(hits.len(), 3);
}

#[test]
fn search_before_any_ingest_is_empty() {
    let library = ComponentLibrary::new(Arc::new(VectorIndex::new()));
    assert!(library.search(&LibraryQuery::new(BRAND, "button")).is_empty());
}

#[test]
fn default_index_text_uses_name_and_content() {
    let library = ComponentLibrary::new(Arc::new(VectorIndex::new()));
    library.ingest(agui::library::LibraryIngest::component(
        BRAND,
        super::fixtures::component("hero", "HeroBanner"),
    ));

    let hits = library.search(&LibraryQuery::new(BRAND, "herobanner framework react"));
    assert_eq!(hits[0].id, "hero");
    assert!(hits[0].similarity > 0.2);
}
