#![deny(unsafe_code)]

//! In-memory reference engine.
//!
//! Stands in for a live analysis engine in tests and offline tooling: it
//! serves the same capability traits from a [`ModelSnapshot`] (or from
//! tables inserted directly) and mimics the observable protocol behavior —
//! staleness until an analysis run, version-checked applies, and the
//! two-phase submit/apply diagnostics. Failure modes (rejected applies,
//! results that never become available) are scriptable per instance.
//!
//! Single-threaded by design, matching the single-writer engine contract.

use std::cell::RefCell;
use std::collections::BTreeMap;

use strana_model::{
    ComboMember, CommitDiagnostics, EngineError, EnvelopeMode, NamedTable, Row, TableVersion,
};

use crate::boundary::{
    CaseCatalog, DisplayPayload, EditPayload, FLAG_OK, FLAG_UNKNOWN_TABLE, ModelInventory,
    Recompute, TableCatalog, TableEdit, TableInfo, TableRead,
};
use crate::snapshot::ModelSnapshot;

#[derive(Debug, Clone)]
struct TableState {
    table: NamedTable,
    import_type: i32,
    requires_analysis: bool,
    version: TableVersion,
}

#[derive(Debug, Clone)]
struct StagedSubmit {
    name: String,
    version: TableVersion,
    columns: Vec<String>,
    record_count: usize,
    values: Vec<String>,
}

#[derive(Default)]
struct Inner {
    tables: BTreeMap<String, TableState>,
    cases: Vec<(String, i32)>,
    combos: Vec<(String, Vec<ComboMember>)>,
    stories: Vec<String>,
    materials: Vec<String>,
    frame_sections: Vec<String>,

    analyzed: bool,
    analysis_resolves_results: bool,
    display_mode: Option<EnvelopeMode>,
    selected_cases: Vec<String>,

    staged: Vec<StagedSubmit>,
    forced_diagnostics: Option<CommitDiagnostics>,

    calls: BTreeMap<String, usize>,
    submit_log: Vec<String>,
}

impl Inner {
    fn record(&mut self, op: &str) {
        *self.calls.entry(op.to_string()).or_insert(0) += 1;
    }
}

/// In-memory implementation of the full engine surface.
pub struct InMemoryEngine {
    inner: RefCell<Inner>,
}

impl Default for InMemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEngine {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(Inner {
                analysis_resolves_results: true,
                ..Inner::default()
            }),
        }
    }

    pub fn from_snapshot(snapshot: ModelSnapshot) -> Self {
        let engine = Self::new();
        {
            let mut inner = engine.inner.borrow_mut();
            for entry in snapshot.tables {
                let name = entry.table.name.clone();
                inner.tables.insert(
                    name,
                    TableState {
                        table: entry.table,
                        import_type: entry.import_type,
                        requires_analysis: entry.requires_analysis,
                        version: TableVersion::INITIAL,
                    },
                );
            }
            inner.cases = snapshot
                .cases
                .into_iter()
                .map(|c| (c.name, c.subtype))
                .collect();
            inner.combos = snapshot
                .combos
                .into_iter()
                .map(|c| (c.name, c.members))
                .collect();
            inner.stories = snapshot.stories;
            inner.materials = snapshot.materials;
            inner.frame_sections = snapshot.frame_sections;
        }
        engine
    }

    /// Insert an editable definition table (import type 3).
    pub fn insert_table(&self, table: NamedTable) {
        self.insert_table_with_type(table, 3);
    }

    pub fn insert_table_with_type(&self, table: NamedTable, import_type: i32) {
        let mut inner = self.inner.borrow_mut();
        inner.tables.insert(
            table.name.clone(),
            TableState {
                table,
                import_type,
                requires_analysis: false,
                version: TableVersion::INITIAL,
            },
        );
    }

    /// Insert a result table that stays unavailable until an analysis run.
    pub fn insert_result_table(&self, table: NamedTable) {
        let mut inner = self.inner.borrow_mut();
        inner.tables.insert(
            table.name.clone(),
            TableState {
                table,
                import_type: 0,
                requires_analysis: true,
                version: TableVersion::INITIAL,
            },
        );
    }

    pub fn add_case(&self, name: impl Into<String>, subtype: i32) {
        self.inner.borrow_mut().cases.push((name.into(), subtype));
    }

    pub fn add_combo(&self, name: impl Into<String>, members: Vec<ComboMember>) {
        self.inner.borrow_mut().combos.push((name.into(), members));
    }

    pub fn set_stories(&self, stories: Vec<String>) {
        self.inner.borrow_mut().stories = stories;
    }

    pub fn set_materials(&self, materials: Vec<String>) {
        self.inner.borrow_mut().materials = materials;
    }

    pub fn set_frame_sections(&self, sections: Vec<String>) {
        self.inner.borrow_mut().frame_sections = sections;
    }

    /// When disabled, analysis runs never make result tables available.
    pub fn set_analysis_resolves_results(&self, resolves: bool) {
        self.inner.borrow_mut().analysis_resolves_results = resolves;
    }

    /// Script the next apply response. One-shot: consumed by the next
    /// `apply_edits`. A rejecting response leaves the model untouched.
    pub fn set_apply_diagnostics(&self, diagnostics: CommitDiagnostics) {
        self.inner.borrow_mut().forced_diagnostics = Some(diagnostics);
    }

    /// How many times `op` was invoked (trait method name).
    pub fn calls(&self, op: &str) -> usize {
        self.inner.borrow().calls.get(op).copied().unwrap_or(0)
    }

    /// Table names submitted for edit, in submission order.
    pub fn submit_log(&self) -> Vec<String> {
        self.inner.borrow().submit_log.clone()
    }

    /// Current contents of a stored table.
    pub fn stored_table(&self, name: &str) -> Option<NamedTable> {
        self.inner.borrow().tables.get(name).map(|s| s.table.clone())
    }

    pub fn stored_version(&self, name: &str) -> Option<TableVersion> {
        self.inner.borrow().tables.get(name).map(|s| s.version)
    }

    /// Display option most recently set, if any.
    pub fn display_mode(&self) -> Option<EnvelopeMode> {
        self.inner.borrow().display_mode
    }

    pub fn selected_cases(&self) -> Vec<String> {
        self.inner.borrow().selected_cases.clone()
    }
}

fn flatten(table: &NamedTable) -> Vec<Option<String>> {
    let mut values = Vec::with_capacity(table.rows.len() * table.columns.len());
    for row in &table.rows {
        for column in &table.columns {
            let cell = row.get(column);
            values.push(if cell.is_empty() {
                None
            } else {
                Some(cell.to_string())
            });
        }
    }
    values
}

impl TableCatalog for InMemoryEngine {
    fn available_tables(&self) -> Result<Vec<TableInfo>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("available_tables");
        Ok(inner
            .tables
            .values()
            .map(|state| TableInfo {
                name: state.table.name.clone(),
                import_type: state.import_type,
            })
            .collect())
    }
}

impl TableRead for InMemoryEngine {
    fn set_display_options(&self, mode: EnvelopeMode) -> Result<(), EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("set_display_options");
        inner.display_mode = Some(mode);
        Ok(())
    }

    fn select_cases_for_display(&self, names: &[String]) -> Result<(), EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("select_cases_for_display");
        inner.selected_cases = names.to_vec();
        Ok(())
    }

    fn table_for_display(&self, table_name: &str) -> Result<DisplayPayload, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("table_for_display");
        let Some(state) = inner.tables.get(table_name) else {
            return Ok(DisplayPayload {
                status: FLAG_UNKNOWN_TABLE,
                columns: Vec::new(),
                record_count: 0,
                values: Vec::new(),
            });
        };
        if state.requires_analysis && !inner.analyzed {
            return Ok(DisplayPayload::unavailable());
        }
        Ok(DisplayPayload {
            status: FLAG_OK,
            columns: state.table.columns.clone(),
            record_count: state.table.record_count(),
            values: flatten(&state.table),
        })
    }
}

impl TableEdit for InMemoryEngine {
    fn open_for_edit(&self, table_name: &str) -> Result<EditPayload, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("open_for_edit");
        let state = inner
            .tables
            .get(table_name)
            .ok_or_else(|| EngineError::UnknownName("table", table_name.to_string()))?;
        Ok(EditPayload {
            version: state.version,
            columns: state.table.columns.clone(),
            record_count: state.table.record_count(),
            values: flatten(&state.table),
        })
    }

    fn submit_for_edit(
        &self,
        table_name: &str,
        version: TableVersion,
        columns: &[String],
        record_count: usize,
        values: &[String],
    ) -> Result<(), EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("submit_for_edit");
        inner.submit_log.push(table_name.to_string());
        inner.staged.push(StagedSubmit {
            name: table_name.to_string(),
            version,
            columns: columns.to_vec(),
            record_count,
            values: values.to_vec(),
        });
        Ok(())
    }

    fn apply_edits(&self) -> Result<CommitDiagnostics, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("apply_edits");
        let staged = std::mem::take(&mut inner.staged);
        let mut diagnostics = inner.forced_diagnostics.take().unwrap_or_default();

        if !diagnostics.is_rejected() {
            for submit in &staged {
                if let Some(state) = inner.tables.get(&submit.name)
                    && state.version != submit.version
                {
                    diagnostics.errors += 1;
                }
                if submit.values.len() != submit.record_count * submit.columns.len() {
                    diagnostics.errors += 1;
                }
            }
        }

        if diagnostics.is_rejected() {
            tracing::debug!(staged = staged.len(), %diagnostics, "apply rejected");
            return Ok(diagnostics);
        }

        for submit in staged {
            let mut table = NamedTable::new(submit.name.clone(), submit.columns.clone());
            if !submit.columns.is_empty() {
                for chunk in submit.values.chunks(submit.columns.len()) {
                    let row: Row = submit
                        .columns
                        .iter()
                        .cloned()
                        .zip(chunk.iter().cloned())
                        .collect();
                    table.push_row(row);
                }
            }
            match inner.tables.get_mut(&submit.name) {
                Some(state) => {
                    state.table = table;
                    state.version = state.version.next();
                }
                None => {
                    inner.tables.insert(
                        submit.name.clone(),
                        TableState {
                            table,
                            import_type: 3,
                            requires_analysis: false,
                            version: TableVersion::INITIAL.next(),
                        },
                    );
                }
            }
        }
        Ok(diagnostics)
    }

    fn discard_edits(&self) -> Result<(), EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("discard_edits");
        inner.staged.clear();
        Ok(())
    }
}

impl Recompute for InMemoryEngine {
    fn run_analysis(&self) -> Result<(), EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("run_analysis");
        if inner.analysis_resolves_results {
            inner.analyzed = true;
        }
        tracing::debug!("analysis run");
        Ok(())
    }
}

impl CaseCatalog for InMemoryEngine {
    fn case_names(&self) -> Result<Vec<String>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("case_names");
        Ok(inner.cases.iter().map(|(name, _)| name.clone()).collect())
    }

    fn combo_names(&self) -> Result<Vec<String>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("combo_names");
        Ok(inner.combos.iter().map(|(name, _)| name.clone()).collect())
    }

    fn case_subtype(&self, case_name: &str) -> Result<i32, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("case_subtype");
        inner
            .cases
            .iter()
            .find(|(name, _)| name == case_name)
            .map(|&(_, subtype)| subtype)
            .ok_or_else(|| EngineError::UnknownName("load case", case_name.to_string()))
    }

    fn combo_members(&self, combo_name: &str) -> Result<Vec<ComboMember>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("combo_members");
        inner
            .combos
            .iter()
            .find(|(name, _)| name == combo_name)
            .map(|(_, members)| members.clone())
            .ok_or_else(|| EngineError::UnknownName("combination", combo_name.to_string()))
    }
}

impl ModelInventory for InMemoryEngine {
    fn story_names(&self) -> Result<Vec<String>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("story_names");
        Ok(inner.stories.clone())
    }

    fn material_names(&self) -> Result<Vec<String>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("material_names");
        Ok(inner.materials.clone())
    }

    fn frame_section_names(&self) -> Result<Vec<String>, EngineError> {
        let mut inner = self.inner.borrow_mut();
        inner.record("frame_section_names");
        Ok(inner.frame_sections.clone())
    }
}
