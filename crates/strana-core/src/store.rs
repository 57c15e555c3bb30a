#![deny(unsafe_code)]

//! Buffering for editable-table edits.
//!
//! Builder operations accumulate row changes across several calls before
//! anything is sent to the engine. The store holds each pending table with
//! the version stamp its edit was derived from, in staging order.

use strana_engine::{TableCatalog, TableEdit};
use strana_model::{NamedTable, Result, Row, TableVersion};

use crate::codec;

/// A buffered table edit awaiting commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedTable {
    pub table: NamedTable,
    pub version: TableVersion,
}

/// Per-table-name cache of pending edits.
///
/// Process-local and unsynchronized; not meant to be shared across
/// concurrent callers.
#[derive(Debug, Default)]
pub struct EditableTableStore {
    staged: Vec<(String, StagedTable)>,
}

impl EditableTableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a table for editing, or synthesize an empty one.
    ///
    /// A catalog hit opens the table for edit and uses the real version the
    /// engine reports (version 1 is never assumed). A miss yields an empty
    /// table with `default_columns` and the sentinel version, so builder
    /// operations can append rows uniformly whether or not the table
    /// pre-exists.
    pub fn get_or_create<E>(
        engine: &E,
        table_name: &str,
        default_columns: &[&str],
    ) -> Result<(NamedTable, TableVersion)>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let exists = engine
            .available_tables()?
            .iter()
            .any(|info| info.name == table_name);
        if exists {
            let payload = engine.open_for_edit(table_name)?;
            let table = codec::decode_table(
                table_name,
                &payload.columns,
                payload.record_count,
                &payload.values,
            )?;
            Ok((table, payload.version))
        } else {
            let columns = default_columns.iter().map(|c| (*c).to_string()).collect();
            Ok((NamedTable::new(table_name, columns), TableVersion::INITIAL))
        }
    }

    /// Buffer a table edit without contacting the engine.
    ///
    /// Re-staging a name replaces the previous entry in place, keeping its
    /// position in the commit order.
    pub fn stage(&mut self, table_name: impl Into<String>, table: NamedTable, version: TableVersion) {
        let table_name = table_name.into();
        let entry = StagedTable { table, version };
        if let Some(existing) = self
            .staged
            .iter_mut()
            .find(|(name, _)| *name == table_name)
        {
            existing.1 = entry;
        } else {
            self.staged.push((table_name, entry));
        }
    }

    /// Drop one staged entry. Returns whether it was present.
    pub fn clear(&mut self, table_name: &str) -> bool {
        let before = self.staged.len();
        self.staged.retain(|(name, _)| name != table_name);
        self.staged.len() != before
    }

    /// Drop everything, typically after a successful commit.
    pub fn clear_all(&mut self) {
        self.staged.clear();
    }

    /// Staged entries in staging order.
    pub fn staged(&self) -> &[(String, StagedTable)] {
        &self.staged
    }

    pub fn get(&self, table_name: &str) -> Option<&StagedTable> {
        self.staged
            .iter()
            .find(|(name, _)| name == table_name)
            .map(|(_, entry)| entry)
    }

    /// Names of tables with buffered, uncommitted changes.
    pub fn pending_names(&self) -> Vec<&str> {
        self.staged.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }
}

/// Replace the row whose `key_column` cell equals `key_value`, or append.
///
/// The only mutation primitive over pending tables; rows are never deleted
/// through this path.
pub fn upsert_row(table: &mut NamedTable, key_column: &str, key_value: &str, row: Row) {
    match table
        .rows
        .iter_mut()
        .find(|existing| existing.get(key_column) == key_value)
    {
        Some(existing) => *existing = row,
        None => table.rows.push(row),
    }
}
