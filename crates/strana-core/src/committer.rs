#![deny(unsafe_code)]

//! Two-phase commit of staged table edits.

use strana_engine::TableEdit;
use strana_model::{CommitDiagnostics, NamedTable, Result, TableError, TableVersion};

use crate::codec;
use crate::store::{EditableTableStore, StagedTable};

/// Submits buffered tables to the engine and enforces commit-or-raise
/// semantics on the apply diagnostics.
pub struct TransactionCommitter<'a, E: ?Sized> {
    engine: &'a E,
}

impl<'a, E: TableEdit + ?Sized> TransactionCommitter<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Submit every staged table in the given order, then apply once.
    ///
    /// Per-table submits never confirm success; the apply diagnostics are
    /// the sole signal. Atomicity on rejection is the engine's guarantee
    /// and is not re-verified here. An empty staged set is a no-op that
    /// returns zero diagnostics without contacting the engine.
    ///
    /// # Errors
    ///
    /// [`TableError::CommitRejected`] when the apply reports any fatal or
    /// error count; the caller discards its staged edits and must re-fetch
    /// fresh versions before retrying.
    pub fn commit(&self, staged: &[(String, StagedTable)]) -> Result<CommitDiagnostics> {
        if staged.is_empty() {
            return Ok(CommitDiagnostics::clean());
        }

        for (name, entry) in staged {
            let values = codec::encode_table(&entry.table);
            tracing::debug!(table = %name, version = %entry.version, rows = entry.table.record_count(), "submitting table edit");
            self.engine.submit_for_edit(
                name,
                entry.version,
                &entry.table.columns,
                entry.table.record_count(),
                &values,
            )?;
        }

        let diagnostics = self.engine.apply_edits()?;
        if diagnostics.is_rejected() {
            return Err(TableError::CommitRejected(diagnostics));
        }
        if diagnostics.has_warnings() {
            tracing::warn!(%diagnostics, "commit applied with warnings");
        } else {
            tracing::info!(tables = staged.len(), "commit applied");
        }
        Ok(diagnostics)
    }

    /// Stage exactly one table and commit it immediately.
    pub fn commit_one(
        &self,
        table_name: &str,
        table: NamedTable,
        version: TableVersion,
    ) -> Result<CommitDiagnostics> {
        let staged = vec![(table_name.to_string(), StagedTable { table, version })];
        self.commit(&staged)
    }

    /// Commit a store's staged set and clear it on success.
    pub fn commit_store(&self, store: &mut EditableTableStore) -> Result<CommitDiagnostics> {
        let diagnostics = self.commit(store.staged())?;
        store.clear_all();
        Ok(diagnostics)
    }
}
