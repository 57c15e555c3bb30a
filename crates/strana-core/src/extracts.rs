#![deny(unsafe_code)]

//! Table-backed result extracts.
//!
//! Each extract selects the relevant cases for display, reads one named
//! table, and narrows the columns to what downstream reporting consumes.
//! No numeric computation happens here; cells stay strings.

use strana_engine::EngineModel;
use strana_model::{EngineError, EnvelopeMode, NamedTable, Result, Row};

use crate::handler::ModelHandler;

const RESPONSE_SPECTRUM_MARKER: &str = "Functions - Response Spectrum";
const SPECTRUM_COLUMNS: [&str; 4] = ["Name", "Period", "Value", "DampRatio"];

/// Copy a table keeping only the named columns, in the given order.
fn narrow_columns(table: &NamedTable, keep: &[String]) -> NamedTable {
    let mut narrowed = NamedTable::new(table.name.clone(), keep.to_vec());
    for row in &table.rows {
        narrowed.push_row(
            keep.iter()
                .map(|column| (column.clone(), row.get(column).to_string()))
                .collect::<Row>(),
        );
    }
    narrowed
}

fn without_columns(table: &NamedTable, drop: &[&str]) -> NamedTable {
    let keep: Vec<String> = table
        .columns
        .iter()
        .filter(|column| !drop.contains(&column.as_str()))
        .cloned()
        .collect();
    narrow_columns(table, &keep)
}

impl<E: EngineModel> ModelHandler<E> {
    /// Per-story force summary over the design cases and combinations.
    pub fn story_forces(&mut self) -> Result<NamedTable> {
        let selection = self.design_cases_and_combos()?.to_vec();
        self.select_cases(&selection)?;
        let table = self.table("Story Forces", EnvelopeMode::Envelopes)?;
        Ok(without_columns(
            &table,
            &["CaseType", "StepNumber", "StepLabel"],
        ))
    }

    /// Max-over-average story displacements for the seismic cases and
    /// combinations.
    pub fn story_displacements(&mut self) -> Result<NamedTable> {
        let selection = self.seismic_cases_and_combos()?.to_vec();
        self.select_cases(&selection)?;
        let table = self.table("Story Max Over Avg Displacements", EnvelopeMode::Envelopes)?;
        Ok(without_columns(
            &table,
            &["CaseType", "StepNumber", "StepLabel"],
        ))
    }

    /// Max-over-average diaphragm drifts for the seismic cases and
    /// combinations. Location columns are dropped along with the step
    /// bookkeeping.
    pub fn story_drifts(&mut self) -> Result<NamedTable> {
        let selection = self.seismic_cases_and_combos()?.to_vec();
        self.select_cases(&selection)?;
        let table = self.table("Diaphragm Max Over Avg Drifts", EnvelopeMode::Envelopes)?;
        Ok(without_columns(
            &table,
            &[
                "CaseType",
                "StepNumber",
                "StepLabel",
                "Max Loc X",
                "Max Loc Y",
                "Max Loc Z",
                "Label",
            ],
        ))
    }

    /// Response-spectrum function points, concatenated across every
    /// spectrum-function table in the catalog.
    ///
    /// With `spectrum_names`, rows are filtered to those spectra; a name
    /// matching no row is an error rather than a silent empty result.
    pub fn response_spectra(&mut self, spectrum_names: Option<&[String]>) -> Result<NamedTable> {
        let table_names: Vec<String> = self
            .editable_table_names()?
            .iter()
            .filter(|name| name.contains(RESPONSE_SPECTRUM_MARKER))
            .cloned()
            .collect();

        let columns: Vec<String> = SPECTRUM_COLUMNS.iter().map(|c| (*c).to_string()).collect();
        let mut spectra = NamedTable::new("Response Spectrum Functions", columns.clone());
        for table_name in table_names {
            let table = self.table(&table_name, EnvelopeMode::Envelopes)?;
            spectra.rows.extend(narrow_columns(&table, &columns).rows);
        }

        if let Some(names) = spectrum_names {
            let defined = spectra.column_values("Name");
            for name in names {
                if !defined.contains(name) {
                    return Err(
                        EngineError::UnknownName("response spectrum", name.clone()).into(),
                    );
                }
            }
            spectra
                .rows
                .retain(|row| names.iter().any(|name| row.get("Name") == name));
        }
        Ok(spectra)
    }
}
