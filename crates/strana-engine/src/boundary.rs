#![deny(unsafe_code)]

//! Capability traits for the opaque analysis engine.
//!
//! The engine is consumed through a fixed set of narrow, synchronous
//! contracts. A binding to a live engine implements these traits against
//! whatever client library the engine vendor ships; the in-memory engine in
//! this crate is the reference implementation. No wire format is specified
//! because the engine's protocol is proprietary.

use strana_model::{ComboMember, CommitDiagnostics, EngineError, EnvelopeMode, TableVersion};

/// Read succeeded and the payload is usable.
pub const FLAG_OK: i32 = 0;
/// Results do not exist yet because the model has not been (re)solved.
pub const FLAG_RESULTS_UNAVAILABLE: i32 = 1;
/// The requested table name is not in the engine's catalog.
pub const FLAG_UNKNOWN_TABLE: i32 = -96;

/// Design subtype code the engine assigns to seismic load cases.
pub const SUBTYPE_SEISMIC: i32 = 5;
/// Design subtype code for cases excluded from design.
pub const SUBTYPE_NON_DESIGN: i32 = 8;

/// Catalog entry for one named table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TableInfo {
    pub name: String,
    /// Raw engine import-type code; 2 and 3 mark editable tables.
    pub import_type: i32,
}

impl TableInfo {
    pub fn is_editable(&self) -> bool {
        matches!(self.import_type, 2 | 3)
    }
}

/// Flat payload of a display read, exactly as the engine reports it.
///
/// `values` is row-major with length `record_count * columns.len()` when
/// `status` is [`FLAG_OK`]. `None` entries are the engine's absent-value
/// marker; the codec normalizes them to empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPayload {
    pub status: i32,
    pub columns: Vec<String>,
    pub record_count: usize,
    pub values: Vec<Option<String>>,
}

impl DisplayPayload {
    pub fn unavailable() -> Self {
        Self {
            status: FLAG_RESULTS_UNAVAILABLE,
            columns: Vec::new(),
            record_count: 0,
            values: Vec::new(),
        }
    }
}

/// Snapshot of an editable table plus the version stamp that must accompany
/// the edited payload on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPayload {
    pub version: TableVersion,
    pub columns: Vec<String>,
    pub record_count: usize,
    pub values: Vec<Option<String>>,
}

/// Lists the named tables the engine exposes.
pub trait TableCatalog {
    fn available_tables(&self) -> Result<Vec<TableInfo>, EngineError>;
}

/// Fetches display tables and configures the global display state.
pub trait TableRead {
    /// Set the envelope/step option. Global engine state: affects every
    /// subsequent read until changed again.
    fn set_display_options(&self, mode: EnvelopeMode) -> Result<(), EngineError>;

    /// Restrict which cases and combinations result tables report.
    fn select_cases_for_display(&self, names: &[String]) -> Result<(), EngineError>;

    fn table_for_display(&self, table_name: &str) -> Result<DisplayPayload, EngineError>;
}

/// Two-phase editable-table protocol: per-table submits followed by one
/// global apply. Individual submits never confirm success; the apply
/// diagnostics are the sole success signal.
pub trait TableEdit {
    fn open_for_edit(&self, table_name: &str) -> Result<EditPayload, EngineError>;

    fn submit_for_edit(
        &self,
        table_name: &str,
        version: TableVersion,
        columns: &[String],
        record_count: usize,
        values: &[String],
    ) -> Result<(), EngineError>;

    fn apply_edits(&self) -> Result<CommitDiagnostics, EngineError>;

    /// Drop all submitted-but-unapplied payloads on the engine side.
    fn discard_edits(&self) -> Result<(), EngineError>;
}

/// Forces the engine to solve the model so result tables become available.
pub trait Recompute {
    fn run_analysis(&self) -> Result<(), EngineError>;
}

/// Load case and combination catalog.
pub trait CaseCatalog {
    fn case_names(&self) -> Result<Vec<String>, EngineError>;
    fn combo_names(&self) -> Result<Vec<String>, EngineError>;
    /// Raw design subtype code for a case (see [`SUBTYPE_SEISMIC`]).
    fn case_subtype(&self, case_name: &str) -> Result<i32, EngineError>;
    fn combo_members(&self, combo_name: &str) -> Result<Vec<ComboMember>, EngineError>;
}

/// Name inventories for model objects the derived views enumerate.
pub trait ModelInventory {
    fn story_names(&self) -> Result<Vec<String>, EngineError>;
    fn material_names(&self) -> Result<Vec<String>, EngineError>;
    fn frame_section_names(&self) -> Result<Vec<String>, EngineError>;
}

/// The full engine surface the marshaling core drives.
pub trait EngineModel:
    TableCatalog + TableRead + TableEdit + Recompute + CaseCatalog + ModelInventory
{
}

impl<T> EngineModel for T where
    T: TableCatalog + TableRead + TableEdit + Recompute + CaseCatalog + ModelInventory
{
}
