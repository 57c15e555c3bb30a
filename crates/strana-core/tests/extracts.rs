//! Result extracts: case selection and column narrowing.

use strana_core::ModelHandler;
use strana_engine::boundary::{SUBTYPE_NON_DESIGN, SUBTYPE_SEISMIC};
use strana_engine::InMemoryEngine;
use strana_model::{NamedTable, Row, TableError};

fn engine_with_results() -> InMemoryEngine {
    let engine = InMemoryEngine::new();
    engine.add_case("DEAD", 0);
    engine.add_case("EQX", SUBTYPE_SEISMIC);
    engine.add_case("MASS", SUBTYPE_NON_DESIGN);

    let mut forces = NamedTable::new(
        "Story Forces",
        vec![
            "Story".into(),
            "OutputCase".into(),
            "CaseType".into(),
            "StepNumber".into(),
            "StepLabel".into(),
            "P".into(),
        ],
    );
    forces.push_row(
        Row::new()
            .with("Story", "Story1")
            .with("OutputCase", "DEAD")
            .with("CaseType", "LinStatic")
            .with("StepNumber", "1")
            .with("StepLabel", "Max")
            .with("P", "120.5"),
    );
    engine.insert_result_table(forces);

    let mut displacements = NamedTable::new(
        "Story Max Over Avg Displacements",
        vec![
            "Story".into(),
            "OutputCase".into(),
            "CaseType".into(),
            "StepNumber".into(),
            "StepLabel".into(),
            "Maximum".into(),
            "Average".into(),
            "Ratio".into(),
        ],
    );
    displacements.push_row(
        Row::new()
            .with("Story", "Story1")
            .with("OutputCase", "EQX")
            .with("CaseType", "LinRespSpec")
            .with("StepNumber", "1")
            .with("StepLabel", "Max")
            .with("Maximum", "0.012")
            .with("Average", "0.010")
            .with("Ratio", "1.2"),
    );
    engine.insert_result_table(displacements);

    let mut drifts = NamedTable::new(
        "Diaphragm Max Over Avg Drifts",
        vec![
            "Story".into(),
            "OutputCase".into(),
            "CaseType".into(),
            "StepNumber".into(),
            "StepLabel".into(),
            "Max Drift".into(),
            "Max Loc X".into(),
            "Max Loc Y".into(),
            "Max Loc Z".into(),
            "Label".into(),
        ],
    );
    drifts.push_row(
        Row::new()
            .with("Story", "Story1")
            .with("OutputCase", "EQX")
            .with("Max Drift", "0.004")
            .with("Max Loc X", "1.0")
            .with("Max Loc Y", "2.0")
            .with("Max Loc Z", "3.0")
            .with("Label", "7"),
    );
    engine.insert_result_table(drifts);
    engine
}

#[test]
fn story_forces_select_design_cases_and_drop_step_bookkeeping() {
    let mut handler = ModelHandler::new(engine_with_results());

    let forces = handler.story_forces().expect("story forces");

    assert_eq!(forces.columns, ["Story", "OutputCase", "P"]);
    assert_eq!(forces.rows[0].get("P"), "120.5");
    // MASS is excluded from the display selection, EQX is not.
    assert_eq!(handler.engine().selected_cases(), vec!["DEAD", "EQX"]);
}

#[test]
fn story_displacements_select_seismic_cases_and_drop_step_bookkeeping() {
    let mut handler = ModelHandler::new(engine_with_results());

    let displacements = handler.story_displacements().expect("story displacements");

    assert_eq!(
        displacements.columns,
        ["Story", "OutputCase", "Maximum", "Average", "Ratio"]
    );
    assert_eq!(displacements.rows[0].get("Ratio"), "1.2");
    assert_eq!(handler.engine().selected_cases(), vec!["EQX"]);
}

#[test]
fn story_drifts_select_seismic_cases_and_drop_locations() {
    let mut handler = ModelHandler::new(engine_with_results());

    let drifts = handler.story_drifts().expect("story drifts");

    assert_eq!(drifts.columns, ["Story", "OutputCase", "Max Drift"]);
    assert_eq!(handler.engine().selected_cases(), vec!["EQX"]);
}

fn spectrum_table(name: &str, spectrum: &str) -> NamedTable {
    let mut table = NamedTable::new(
        name,
        vec![
            "Name".into(),
            "Period".into(),
            "Value".into(),
            "DampRatio".into(),
            "FuncType".into(),
        ],
    );
    for (period, value) in [("0.1", "0.8"), ("0.5", "1.2")] {
        table.push_row(
            Row::new()
                .with("Name", spectrum)
                .with("Period", period)
                .with("Value", value)
                .with("DampRatio", "0.05")
                .with("FuncType", "User"),
        );
    }
    table
}

#[test]
fn response_spectra_concatenate_across_function_tables() {
    let engine = InMemoryEngine::new();
    engine.insert_table(spectrum_table(
        "Functions - Response Spectrum - User Defined",
        "RS-X",
    ));
    engine.insert_table(spectrum_table(
        "Functions - Response Spectrum - ASCE 7-16",
        "RS-Y",
    ));
    engine.insert_table_with_type(NamedTable::new("Unrelated", vec![]), 1);
    let mut handler = ModelHandler::new(engine);

    let all = handler.response_spectra(None).expect("all spectra");
    assert_eq!(all.columns, ["Name", "Period", "Value", "DampRatio"]);
    assert_eq!(all.record_count(), 4);

    let filtered = handler
        .response_spectra(Some(&["RS-X".to_string()]))
        .expect("filtered");
    assert_eq!(filtered.record_count(), 2);
    assert!(filtered.rows.iter().all(|row| row.get("Name") == "RS-X"));
}

#[test]
fn unknown_spectrum_name_is_an_error() {
    let engine = InMemoryEngine::new();
    engine.insert_table(spectrum_table(
        "Functions - Response Spectrum - User Defined",
        "RS-X",
    ));
    let mut handler = ModelHandler::new(engine);

    let error = handler
        .response_spectra(Some(&["RS-MISSING".to_string()]))
        .expect_err("unknown spectrum");
    assert!(matches!(error, TableError::Engine(_)));
}
