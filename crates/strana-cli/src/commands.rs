//! Subcommand implementations over a snapshot-backed engine.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Cell;
use strana_core::{CaseComboResolver, ModelHandler};
use strana_engine::{InMemoryEngine, ModelSnapshot, TableCatalog};
use strana_model::EnvelopeMode;

use crate::cli::{ExpandArgs, ShowArgs, SnapshotArgs};
use crate::render::{header_cell, render_named_table, styled_table, yes_no};

fn load_handler(path: &Path) -> Result<ModelHandler<InMemoryEngine>> {
    let snapshot = ModelSnapshot::from_path(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    tracing::debug!(model = %snapshot.name, tables = snapshot.tables.len(), "snapshot loaded");
    Ok(ModelHandler::new(InMemoryEngine::from_snapshot(snapshot)))
}

pub fn run_tables(args: &SnapshotArgs) -> Result<()> {
    let handler = load_handler(&args.snapshot)?;
    let mut infos = handler
        .engine()
        .available_tables()
        .context("failed to list tables")?;
    infos.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Import type"),
        header_cell("Editable"),
    ]);
    for info in &infos {
        table.add_row(vec![
            Cell::new(&info.name),
            Cell::new(info.import_type),
            yes_no(info.is_editable()),
        ]);
    }
    println!("{table}");
    println!("{} tables", infos.len());
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let handler = load_handler(&args.snapshot)?;
    if !args.select.is_empty() {
        handler
            .select_cases(&args.select)
            .context("failed to select cases for display")?;
    }
    let mode = if args.steps {
        EnvelopeMode::Steps
    } else {
        EnvelopeMode::Envelopes
    };
    let table = handler
        .table(&args.table, mode)
        .with_context(|| format!("failed to read table '{}'", args.table))?;
    println!("{}", render_named_table(&table));
    println!("{} records", table.record_count());
    Ok(())
}

pub fn run_cases(args: &SnapshotArgs) -> Result<()> {
    let mut handler = load_handler(&args.snapshot)?;
    let cases = handler.cases().context("failed to list cases")?.to_vec();
    let design = handler.design_cases().context("failed to classify cases")?.to_vec();
    let seismic = handler.seismic_cases().context("failed to classify cases")?.to_vec();
    let combos = handler.combos().context("failed to list combinations")?.to_vec();
    let seismic_combos = handler
        .seismic_combos()
        .context("failed to classify combinations")?
        .to_vec();

    let mut table = styled_table();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Design"),
        header_cell("Seismic"),
    ]);
    for case in &cases {
        table.add_row(vec![
            Cell::new(case),
            Cell::new("case"),
            yes_no(design.contains(case)),
            yes_no(seismic.contains(case)),
        ]);
    }
    for combo in &combos {
        table.add_row(vec![
            Cell::new(combo),
            Cell::new("combo"),
            yes_no(true),
            yes_no(seismic_combos.contains(combo)),
        ]);
    }
    println!("{table}");
    println!("{} cases, {} combinations", cases.len(), combos.len());
    Ok(())
}

pub fn run_expand(args: &ExpandArgs) -> Result<()> {
    let handler = load_handler(&args.snapshot)?;
    let mut resolver = CaseComboResolver::new(handler.engine());
    if let Some(max_depth) = args.max_depth {
        resolver = resolver.with_max_depth(max_depth);
    }
    let cases = resolver
        .expand(&args.combo)
        .with_context(|| format!("failed to expand combination '{}'", args.combo))?;

    for case in &cases {
        println!("{case}");
    }
    println!("{} cases in '{}'", cases.len(), args.combo);
    Ok(())
}
