#![deny(unsafe_code)]

//! Facade over one engine connection.
//!
//! Owns the engine plus the edit buffer and the derived-view cache, and wires
//! the reader, committer and resolver together so callers drive the model
//! through a single value.

use std::collections::BTreeSet;

use strana_engine::EngineModel;
use strana_model::{CommitDiagnostics, EnvelopeMode, NamedTable, Result, TableError, TableVersion};

use crate::committer::TransactionCommitter;
use crate::reader::DisplayTableReader;
use crate::resolver::CaseComboResolver;
use crate::store::EditableTableStore;
use crate::views::DerivedViewCache;

pub struct ModelHandler<E> {
    engine: E,
    store: EditableTableStore,
    views: DerivedViewCache,
}

impl<E: EngineModel> ModelHandler<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            store: EditableTableStore::new(),
            views: DerivedViewCache::new(),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    // ---- display reads ----

    pub fn table(&self, table_name: &str, mode: EnvelopeMode) -> Result<NamedTable> {
        DisplayTableReader::new(&self.engine).read(table_name, mode)
    }

    pub fn select_cases(&self, names: &[String]) -> Result<()> {
        DisplayTableReader::new(&self.engine).select_cases(names)
    }

    // ---- derived views ----

    pub fn cases(&mut self) -> Result<&[String]> {
        self.views.cases(&self.engine)
    }

    pub fn combos(&mut self) -> Result<&[String]> {
        self.views.combos(&self.engine)
    }

    pub fn cases_and_combos(&mut self) -> Result<&[String]> {
        self.views.cases_and_combos(&self.engine)
    }

    pub fn design_cases(&mut self) -> Result<&[String]> {
        self.views.design_cases(&self.engine)
    }

    pub fn design_cases_and_combos(&mut self) -> Result<&[String]> {
        self.views.design_cases_and_combos(&self.engine)
    }

    pub fn seismic_cases(&mut self) -> Result<&[String]> {
        self.views.seismic_cases(&self.engine)
    }

    pub fn seismic_combos(&mut self) -> Result<&[String]> {
        self.views.seismic_combos(&self.engine)
    }

    pub fn seismic_cases_and_combos(&mut self) -> Result<&[String]> {
        self.views.seismic_cases_and_combos(&self.engine)
    }

    pub fn stories(&mut self) -> Result<&[String]> {
        self.views.stories(&self.engine)
    }

    pub fn materials(&mut self) -> Result<&[String]> {
        self.views.materials(&self.engine)
    }

    pub fn frame_sections(&mut self) -> Result<&[String]> {
        self.views.frame_sections(&self.engine)
    }

    pub fn editable_table_names(&mut self) -> Result<&[String]> {
        self.views.editable_table_names(&self.engine)
    }

    /// Drop every cached view. Must be called after any commit that changes
    /// what the views report; `commit_staged` does this itself.
    pub fn reset_views(&mut self) {
        self.views.reset();
    }

    pub fn expand_combo(&self, combo_name: &str) -> Result<BTreeSet<String>> {
        CaseComboResolver::new(&self.engine).expand(combo_name)
    }

    // ---- editable tables ----

    pub fn open_table_for_edit(
        &self,
        table_name: &str,
        default_columns: &[&str],
    ) -> Result<(NamedTable, TableVersion)> {
        EditableTableStore::get_or_create(&self.engine, table_name, default_columns)
    }

    pub fn stage(&mut self, table_name: impl Into<String>, table: NamedTable, version: TableVersion) {
        self.store.stage(table_name, table, version);
    }

    pub fn pending_tables(&self) -> Vec<&str> {
        self.store.pending_names()
    }

    pub fn store_mut(&mut self) -> &mut EditableTableStore {
        &mut self.store
    }

    /// Commit every staged table, then drop the stale views.
    ///
    /// On success the buffer is cleared and the view cache reset, since the
    /// applied edits may have changed anything the views report. On
    /// [`TableError::CommitRejected`] the buffer is cleared too and the
    /// engine-side submissions discarded; the caller must re-open tables for
    /// fresh versions before retrying.
    pub fn commit_staged(&mut self) -> Result<CommitDiagnostics> {
        let committer = TransactionCommitter::new(&self.engine);
        match committer.commit(self.store.staged()) {
            Ok(diagnostics) => {
                self.store.clear_all();
                self.views.reset();
                Ok(diagnostics)
            }
            Err(TableError::CommitRejected(diagnostics)) => {
                self.store.clear_all();
                self.engine.discard_edits()?;
                Err(TableError::CommitRejected(diagnostics))
            }
            Err(other) => Err(other),
        }
    }

    /// Commit a single table immediately, bypassing the buffer.
    pub fn commit_one(
        &mut self,
        table_name: &str,
        table: NamedTable,
        version: TableVersion,
    ) -> Result<CommitDiagnostics> {
        let diagnostics =
            TransactionCommitter::new(&self.engine).commit_one(table_name, table, version)?;
        self.views.reset();
        Ok(diagnostics)
    }
}
