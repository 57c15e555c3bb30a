#![deny(unsafe_code)]

//! Display-table read path with bounded staleness retry.

use strana_engine::boundary::{FLAG_OK, FLAG_RESULTS_UNAVAILABLE, FLAG_UNKNOWN_TABLE};
use strana_engine::{Recompute, TableRead};
use strana_model::{EnvelopeMode, NamedTable, Result, TableError};

use crate::codec;

/// Reads named result/definition tables through the engine's display path.
pub struct DisplayTableReader<'a, E: ?Sized> {
    engine: &'a E,
}

impl<'a, E: TableRead + Recompute + ?Sized> DisplayTableReader<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Fetch a named table.
    ///
    /// The envelope option is global engine state shared by every read, so
    /// it is set explicitly on each call rather than assumed to persist.
    /// When the engine reports results unavailable, exactly one forced
    /// analysis run is issued and the read retried once; a second
    /// unavailable response is surfaced as an empty table, never retried
    /// again.
    ///
    /// # Errors
    ///
    /// [`TableError::UnknownTable`] when the name is not in the engine's
    /// catalog; [`TableError::Query`] with the raw status for any other
    /// non-success flag.
    pub fn read(&self, table_name: &str, mode: EnvelopeMode) -> Result<NamedTable> {
        self.engine.set_display_options(mode)?;
        let mut payload = self.engine.table_for_display(table_name)?;

        if payload.status == FLAG_RESULTS_UNAVAILABLE {
            tracing::debug!(table = table_name, "results unavailable; forcing analysis");
            self.engine.run_analysis()?;
            self.engine.set_display_options(mode)?;
            payload = self.engine.table_for_display(table_name)?;
            if payload.status == FLAG_RESULTS_UNAVAILABLE {
                return Ok(NamedTable::new(table_name, payload.columns));
            }
        }

        match payload.status {
            FLAG_OK => codec::decode_table(
                table_name,
                &payload.columns,
                payload.record_count,
                &payload.values,
            ),
            FLAG_UNKNOWN_TABLE => Err(TableError::UnknownTable(table_name.to_string())),
            status => Err(TableError::Query {
                table: table_name.to_string(),
                status,
            }),
        }
    }

    /// Restrict which cases and combinations result tables report.
    pub fn select_cases(&self, names: &[String]) -> Result<()> {
        self.engine.select_cases_for_display(names)?;
        Ok(())
    }
}
