//! Boundary traits for the external analysis engine, plus an in-memory
//! reference implementation driven by serializable model snapshots.
//!
//! The live engine is an opaque, single-writer RPC surface; everything this
//! workspace does against it goes through the narrow traits in
//! [`boundary`]. Bindings to a real engine live outside this workspace.

pub mod boundary;
pub mod in_memory;
pub mod snapshot;

pub use boundary::{
    CaseCatalog, DisplayPayload, EditPayload, EngineModel, FLAG_OK, FLAG_RESULTS_UNAVAILABLE,
    FLAG_UNKNOWN_TABLE, ModelInventory, Recompute, SUBTYPE_NON_DESIGN, SUBTYPE_SEISMIC,
    TableCatalog, TableEdit, TableInfo, TableRead,
};
pub use in_memory::InMemoryEngine;
pub use snapshot::{CaseSnapshot, ComboSnapshot, ModelSnapshot, TableSnapshot};
