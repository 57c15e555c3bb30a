#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;

/// A single table row: column name → cell value.
///
/// The empty string is the absent-value sentinel. The engine does not
/// distinguish "not applicable" from "equals empty string", and neither
/// does this model.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell value for a column, or the empty sentinel when unset.
    pub fn get(&self, column: &str) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.cells.insert(column.into(), value.into());
        self
    }

    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(column, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// A structured view of one engine-managed table.
///
/// Column names are unique and order-significant: encoding flattens cells in
/// exactly this order, which must match what the destination table expects.
/// Row order is preserved from the source payload.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NamedTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl NamedTable {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, in row order.
    pub fn column_values(&self, column: &str) -> Vec<String> {
        self.rows.iter().map(|r| r.get(column).to_string()).collect()
    }
}

/// Opaque version stamp attached to an editable-table snapshot.
///
/// Obtained on every open-for-edit, consumed exactly once by a submit. After
/// a successful commit a fresh version must be re-fetched before editing the
/// same table again; the engine rejects stale stamps at apply time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TableVersion(i32);

impl TableVersion {
    /// Sentinel used for tables synthesized locally before the engine has
    /// ever materialized them.
    pub const INITIAL: TableVersion = TableVersion(1);

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(self) -> i32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_reports_empty_sentinel_for_unset_columns() {
        let row = Row::new().with("Name", "S1");
        assert_eq!(row.get("Name"), "S1");
        assert_eq!(row.get("Material"), "");
    }

    #[test]
    fn column_values_follow_row_order() {
        let mut table = NamedTable::new("T", vec!["Name".into()]);
        table.push_row(Row::new().with("Name", "B"));
        table.push_row(Row::new().with("Name", "A"));
        assert_eq!(table.column_values("Name"), vec!["B", "A"]);
    }

    #[test]
    fn version_round_trips_through_json() {
        let version = TableVersion::new(7);
        let json = serde_json::to_string(&version).expect("serialize version");
        let round: TableVersion = serde_json::from_str(&json).expect("deserialize version");
        assert_eq!(round, version);
        assert_eq!(round.next().value(), 8);
    }
}
