//! Batch staging and commit against the in-memory engine.

use strana_build::{
    COMBO_TABLE, ComboDefinition, FrameSection, FrameSectionBatch, LoadComboBatch, MATERIAL_TABLE,
    MaterialBatch, MaterialDefinition, SECTION_TABLE,
};
use strana_core::{EditableTableStore, TransactionCommitter};
use strana_engine::InMemoryEngine;
use strana_model::{MaterialKind, NamedTable, Row, TableVersion};

#[test]
fn section_batch_creates_the_table_when_absent() {
    let engine = InMemoryEngine::new();
    let mut batch = FrameSectionBatch::new();
    batch
        .add(FrameSection::rectangle("B30x60", "C30", 0.6, 0.3))
        .add(FrameSection::circle("COL50", "C30", 0.5));

    batch.commit(&engine).expect("commit");

    let stored = engine.stored_table(SECTION_TABLE).expect("created");
    assert_eq!(stored.record_count(), 2);
    assert_eq!(stored.rows[0].get("Shape"), "Rectangular");
    assert_eq!(stored.rows[0].get("t3"), "0.6");
    assert_eq!(stored.rows[1].get("t2"), "");
}

#[test]
fn section_batch_upserts_into_an_existing_table() {
    let engine = InMemoryEngine::new();
    let mut existing = NamedTable::new(
        SECTION_TABLE,
        vec![
            "Name".into(),
            "Material".into(),
            "Shape".into(),
            "t3".into(),
            "t2".into(),
            "tf".into(),
            "tw".into(),
        ],
    );
    existing.push_row(
        Row::new()
            .with("Name", "B30x60")
            .with("Material", "C25")
            .with("Shape", "Rectangular")
            .with("t3", "0.6")
            .with("t2", "0.3"),
    );
    engine.insert_table(existing);

    let mut batch = FrameSectionBatch::new();
    batch
        .add(FrameSection::rectangle("B30x60", "C30", 0.6, 0.3))
        .add(FrameSection::tube("HSS1", "A36", 0.2, 0.2, 0.01, 0.01));
    batch.commit(&engine).expect("commit");

    let stored = engine.stored_table(SECTION_TABLE).expect("table");
    assert_eq!(stored.record_count(), 2);
    assert_eq!(stored.rows[0].get("Material"), "C30");
    assert_eq!(stored.rows[1].get("Shape"), "Box");
    assert_eq!(engine.stored_version(SECTION_TABLE), Some(TableVersion::new(2)));
}

#[test]
fn combo_batch_rebuilds_only_its_own_member_rows() {
    let engine = InMemoryEngine::new();
    let mut existing = NamedTable::new(
        COMBO_TABLE,
        vec![
            "ComboName".into(),
            "LoadName".into(),
            "Type".into(),
            "SF".into(),
        ],
    );
    for (combo, load, sf) in [("GRAV", "DEAD", "1.4"), ("GRAV", "LIVE", "1.7"), ("WIND", "WX", "1.0")] {
        existing.push_row(
            Row::new()
                .with("ComboName", combo)
                .with("LoadName", load)
                .with("Type", "Load Case")
                .with("SF", sf),
        );
    }
    engine.insert_table(existing);

    let mut batch = LoadComboBatch::new();
    batch.add(
        ComboDefinition::new("GRAV")
            .with_case("DEAD", 1.2)
            .with_case("LIVE", 1.6),
    );
    batch.commit(&engine).expect("commit");

    let stored = engine.stored_table(COMBO_TABLE).expect("table");
    // WIND row untouched, GRAV rows replaced wholesale.
    assert_eq!(stored.record_count(), 3);
    assert_eq!(stored.rows[0].get("ComboName"), "WIND");
    assert_eq!(stored.rows[1].get("SF"), "1.2");
    assert_eq!(stored.rows[2].get("SF"), "1.6");
}

#[test]
fn combo_batch_records_nested_members() {
    let engine = InMemoryEngine::new();
    let mut batch = LoadComboBatch::new();
    batch.add(
        ComboDefinition::new("ENV")
            .with_case("DEAD", 1.0)
            .with_combo("SEIS", 1.0),
    );
    batch.commit(&engine).expect("commit");

    let stored = engine.stored_table(COMBO_TABLE).expect("table");
    assert_eq!(stored.rows[1].get("Type"), "Load Combo");
    assert_eq!(stored.rows[1].get("LoadName"), "SEIS");
}

#[test]
fn several_batches_commit_atomically_through_one_store() {
    let engine = InMemoryEngine::new();
    let mut store = EditableTableStore::new();

    let mut materials = MaterialBatch::new();
    materials.add(MaterialDefinition {
        name: "C30".to_string(),
        kind: MaterialKind::Concrete,
        elastic_modulus: 25_000_000.0,
        poisson: 0.2,
        thermal_coeff: 0.00001,
        weight_per_volume: 24.0,
    });
    materials.stage(&engine, &mut store).expect("stage materials");

    let mut sections = FrameSectionBatch::new();
    sections.add(FrameSection::rectangle("B30x60", "C30", 0.6, 0.3));
    sections.stage(&engine, &mut store).expect("stage sections");

    TransactionCommitter::new(&engine)
        .commit_store(&mut store)
        .expect("commit");

    assert_eq!(engine.submit_log(), vec![MATERIAL_TABLE, SECTION_TABLE]);
    assert_eq!(engine.calls("apply_edits"), 1);
    assert!(engine.stored_table(MATERIAL_TABLE).is_some());
    assert!(engine.stored_table(SECTION_TABLE).is_some());
}

#[test]
fn restaging_a_batch_accumulates_rather_than_resets() {
    let engine = InMemoryEngine::new();
    let mut store = EditableTableStore::new();

    let mut first = FrameSectionBatch::new();
    first.add(FrameSection::rectangle("B1", "C30", 0.5, 0.25));
    first.stage(&engine, &mut store).expect("stage first");

    // The second batch sees the staged copy, not the engine's table.
    let mut second = FrameSectionBatch::new();
    second.add(FrameSection::circle("COL1", "C30", 0.4));
    second.stage(&engine, &mut store).expect("stage second");

    let staged = store.get(SECTION_TABLE).expect("staged");
    assert_eq!(staged.table.record_count(), 2);
    assert_eq!(engine.calls("open_for_edit"), 0);
}
