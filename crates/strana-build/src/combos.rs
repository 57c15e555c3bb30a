#![deny(unsafe_code)]

//! Load-combination definition batch.

use strana_core::{EditableTableStore, TransactionCommitter};
use strana_engine::{TableCatalog, TableEdit};
use strana_model::{ComboMember, CommitDiagnostics, MemberKind, Result, Row};

pub const COMBO_TABLE: &str = "Load Combination Definitions";
const COLUMNS: [&str; 4] = ["ComboName", "LoadName", "Type", "SF"];

/// One combination definition: a name plus scaled members.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboDefinition {
    pub name: String,
    pub members: Vec<(ComboMember, f64)>,
}

impl ComboDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_case(mut self, case: impl Into<String>, scale: f64) -> Self {
        self.members.push((ComboMember::case(case), scale));
        self
    }

    pub fn with_combo(mut self, combo: impl Into<String>, scale: f64) -> Self {
        self.members.push((ComboMember::combo(combo), scale));
        self
    }
}

fn member_type_label(kind: MemberKind) -> &'static str {
    match kind {
        MemberKind::Case => "Load Case",
        MemberKind::Combo => "Load Combo",
    }
}

/// Accumulates combination definitions and stages them as one table edit.
///
/// The member table holds one row per (combination, member) pair, so there is
/// no single key column to upsert on. A batch therefore rebuilds each
/// defined combination wholesale: existing rows for that combination name
/// are dropped and the batch's member rows appended, while rows belonging to
/// other combinations stay untouched.
#[derive(Debug, Default)]
pub struct LoadComboBatch {
    combos: Vec<ComboDefinition>,
}

impl LoadComboBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, combo: ComboDefinition) -> &mut Self {
        self.combos.push(combo);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Merge this batch into the staged copy of the combination table.
    pub fn stage<E>(&self, engine: &E, store: &mut EditableTableStore) -> Result<()>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let (mut table, version) = match store.get(COMBO_TABLE) {
            Some(staged) => (staged.table.clone(), staged.version),
            None => EditableTableStore::get_or_create(engine, COMBO_TABLE, &COLUMNS)?,
        };
        for combo in &self.combos {
            table.rows.retain(|row| row.get("ComboName") != combo.name);
            for (member, scale) in &combo.members {
                table.push_row(
                    Row::new()
                        .with("ComboName", combo.name.clone())
                        .with("LoadName", member.name.clone())
                        .with("Type", member_type_label(member.kind))
                        .with("SF", scale.to_string()),
                );
            }
        }
        tracing::debug!(combos = self.combos.len(), "staged combination batch");
        store.stage(COMBO_TABLE, table, version);
        Ok(())
    }

    /// Stage and commit this batch alone.
    pub fn commit<E>(&self, engine: &E) -> Result<CommitDiagnostics>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let mut store = EditableTableStore::new();
        self.stage(engine, &mut store)?;
        TransactionCommitter::new(engine).commit_store(&mut store)
    }
}
