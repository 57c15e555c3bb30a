#![deny(unsafe_code)]

//! Flat table codec.
//!
//! The engine exchanges tables as a single row-major value array plus a
//! column-name array and a record count. Decoding reshapes that into a
//! [`NamedTable`]; encoding flattens one back for edit submission.

use strana_model::{NamedTable, Result, Row, TableError};

/// Reshape a row-major flat payload into a structured table.
///
/// Every absent-value marker (`None`) is normalized to the empty string.
/// This is deliberately lossy: the result does not distinguish "field not
/// applicable" from "field equals empty string". Row order is preserved.
///
/// # Errors
///
/// [`TableError::Shape`] when the value count does not match
/// `record_count * columns.len()`.
pub fn decode_table(
    name: &str,
    columns: &[String],
    record_count: usize,
    values: &[Option<String>],
) -> Result<NamedTable> {
    if values.len() != record_count * columns.len() {
        return Err(TableError::Shape {
            table: name.to_string(),
            values: values.len(),
            records: record_count,
            columns: columns.len(),
        });
    }

    let mut table = NamedTable::new(name, columns.to_vec());
    if !columns.is_empty() {
        for chunk in values.chunks(columns.len()) {
            let row: Row = columns
                .iter()
                .cloned()
                .zip(chunk.iter().map(|v| v.clone().unwrap_or_default()))
                .collect();
            table.push_row(row);
        }
    }
    Ok(table)
}

/// Flatten a table's rows in row-major order, columns ordered exactly as
/// `table.columns`.
///
/// Cells a row never set encode as the empty string. No column reordering
/// is performed; the caller supplies columns in the order the destination
/// table expects.
pub fn encode_table(table: &NamedTable) -> Vec<String> {
    let mut values = Vec::with_capacity(table.rows.len() * table.columns.len());
    for row in &table.rows {
        for column in &table.columns {
            values.push(row.get(column).to_string());
        }
    }
    values
}
