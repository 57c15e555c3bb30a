//! Definition batches staged through the editable-table transaction path.
//!
//! A batch accumulates definition rows in memory, merges them into a staged
//! copy of its target table (fetching the live table, or synthesizing an
//! empty one when the model has none yet), and commits through the two-phase
//! protocol. Several batches staged into one store commit atomically.

pub mod combos;
pub mod materials;
pub mod sections;

pub use combos::{COMBO_TABLE, ComboDefinition, LoadComboBatch};
pub use materials::{MATERIAL_TABLE, MaterialBatch, MaterialDefinition};
pub use sections::{FrameSection, FrameSectionBatch, SECTION_TABLE};
