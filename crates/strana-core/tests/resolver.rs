//! Combination expansion: dedup, nesting, and the opt-in depth guard.

use std::collections::BTreeSet;

use strana_core::CaseComboResolver;
use strana_engine::InMemoryEngine;
use strana_model::{ComboMember, TableError};

fn names(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

#[test]
fn nested_combo_expands_to_deduplicated_case_set() {
    let engine = InMemoryEngine::new();
    engine.add_case("A", 0);
    engine.add_case("B", 0);
    engine.add_case("D", 0);
    engine.add_combo(
        "C2",
        vec![ComboMember::case("B"), ComboMember::case("D")],
    );
    engine.add_combo(
        "C1",
        vec![
            ComboMember::case("A"),
            ComboMember::case("B"),
            ComboMember::combo("C2"),
        ],
    );

    let cases = CaseComboResolver::new(&engine).expand("C1").expect("expand");
    assert_eq!(names(&cases), vec!["A", "B", "D"]);
}

#[test]
fn combo_of_only_cases_expands_flat() {
    let engine = InMemoryEngine::new();
    engine.add_combo(
        "ENV",
        vec![ComboMember::case("DEAD"), ComboMember::case("LIVE")],
    );

    let cases = CaseComboResolver::new(&engine).expand("ENV").expect("expand");
    assert_eq!(names(&cases), vec!["DEAD", "LIVE"]);
}

#[test]
fn unknown_combo_surfaces_engine_error() {
    let engine = InMemoryEngine::new();
    let error = CaseComboResolver::new(&engine)
        .expand("MISSING")
        .expect_err("unknown combo");
    assert!(matches!(error, TableError::Engine(_)));
}

#[test]
fn depth_guard_reports_cycles_instead_of_recursing() {
    let engine = InMemoryEngine::new();
    engine.add_combo("C1", vec![ComboMember::combo("C2")]);
    engine.add_combo("C2", vec![ComboMember::combo("C1")]);

    let error = CaseComboResolver::new(&engine)
        .with_max_depth(16)
        .expand("C1")
        .expect_err("cycle");
    assert!(matches!(error, TableError::CycleDetected { depth: 17, .. }));
}

#[test]
fn depth_guard_leaves_legitimate_nesting_alone() {
    let engine = InMemoryEngine::new();
    engine.add_combo("OUTER", vec![ComboMember::combo("INNER")]);
    engine.add_combo("INNER", vec![ComboMember::case("DEAD")]);

    let cases = CaseComboResolver::new(&engine)
        .with_max_depth(16)
        .expand("OUTER")
        .expect("expand");
    assert_eq!(names(&cases), vec!["DEAD"]);
}
