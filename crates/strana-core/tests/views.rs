//! Derived views: filtering, classification, memoization, reset.

use strana_core::DerivedViewCache;
use strana_engine::boundary::{SUBTYPE_NON_DESIGN, SUBTYPE_SEISMIC};
use strana_engine::InMemoryEngine;
use strana_model::{ComboMember, NamedTable};

fn catalog_engine() -> InMemoryEngine {
    let engine = InMemoryEngine::new();
    engine.add_case("DEAD", 0);
    engine.add_case("LIVE", 0);
    engine.add_case("EQX", SUBTYPE_SEISMIC);
    engine.add_case("MASS", SUBTYPE_NON_DESIGN);
    engine.add_case("~INTERNAL", 0);
    engine.add_combo(
        "GRAV",
        vec![ComboMember::case("DEAD"), ComboMember::case("LIVE")],
    );
    engine.add_combo(
        "SEIS-ENV",
        vec![ComboMember::combo("GRAV"), ComboMember::case("EQX")],
    );
    engine.add_combo("~ENVELOPE", vec![ComboMember::case("DEAD")]);
    engine
}

#[test]
fn internal_names_are_filtered_from_cases_and_combos() {
    let engine = catalog_engine();
    let mut views = DerivedViewCache::new();

    assert_eq!(
        views.cases(&engine).expect("cases"),
        ["DEAD", "LIVE", "EQX", "MASS"]
    );
    assert_eq!(views.combos(&engine).expect("combos"), ["GRAV", "SEIS-ENV"]);
    assert_eq!(
        views.cases_and_combos(&engine).expect("union"),
        ["DEAD", "LIVE", "EQX", "MASS", "GRAV", "SEIS-ENV"]
    );
}

#[test]
fn design_views_exclude_the_non_design_subtype() {
    let engine = catalog_engine();
    let mut views = DerivedViewCache::new();

    assert_eq!(
        views.design_cases(&engine).expect("design cases"),
        ["DEAD", "LIVE", "EQX"]
    );
    assert_eq!(
        views
            .design_cases_and_combos(&engine)
            .expect("design union"),
        ["DEAD", "LIVE", "EQX", "GRAV", "SEIS-ENV"]
    );
}

#[test]
fn seismic_combos_classify_through_nested_membership() {
    let engine = catalog_engine();
    let mut views = DerivedViewCache::new();

    assert_eq!(views.seismic_cases(&engine).expect("seismic"), ["EQX"]);
    // GRAV reaches no seismic case; SEIS-ENV reaches EQX through nesting.
    assert_eq!(
        views.seismic_combos(&engine).expect("seismic combos"),
        ["SEIS-ENV"]
    );
    assert_eq!(
        views
            .seismic_cases_and_combos(&engine)
            .expect("seismic union"),
        ["EQX", "SEIS-ENV"]
    );
}

#[test]
fn views_query_the_engine_once_until_reset() {
    let engine = catalog_engine();
    let mut views = DerivedViewCache::new();

    views.cases(&engine).expect("first");
    views.cases(&engine).expect("second");
    views.cases(&engine).expect("third");
    assert_eq!(engine.calls("case_names"), 1);

    views.reset();
    views.cases(&engine).expect("after reset");
    assert_eq!(engine.calls("case_names"), 2);
}

#[test]
fn reset_clears_every_view_at_once() {
    let engine = catalog_engine();
    engine.set_stories(vec!["Story1".to_string(), "Story2".to_string()]);
    let mut views = DerivedViewCache::new();

    views.cases(&engine).expect("cases");
    views.stories(&engine).expect("stories");
    views.reset();
    views.cases(&engine).expect("cases again");
    views.stories(&engine).expect("stories again");

    assert_eq!(engine.calls("case_names"), 2);
    assert_eq!(engine.calls("story_names"), 2);
}

#[test]
fn editable_table_names_filter_by_import_type() {
    let engine = InMemoryEngine::new();
    engine.insert_table_with_type(NamedTable::new("Read Only", vec![]), 1);
    engine.insert_table_with_type(NamedTable::new("Importable", vec![]), 2);
    engine.insert_table_with_type(NamedTable::new("Interactive", vec![]), 3);
    let mut views = DerivedViewCache::new();

    assert_eq!(
        views.editable_table_names(&engine).expect("editable"),
        ["Importable", "Interactive"]
    );
}

#[test]
fn inventories_pass_through_and_memoize() {
    let engine = InMemoryEngine::new();
    engine.set_materials(vec!["M1".to_string()]);
    engine.set_frame_sections(vec!["S1".to_string(), "S2".to_string()]);
    let mut views = DerivedViewCache::new();

    assert_eq!(views.materials(&engine).expect("materials"), ["M1"]);
    assert_eq!(
        views.frame_sections(&engine).expect("sections"),
        ["S1", "S2"]
    );
    views.materials(&engine).expect("cached");
    assert_eq!(engine.calls("material_names"), 1);
}
