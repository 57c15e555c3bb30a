//! Data model for structural-analysis table automation.
//!
//! Everything the marshaling core and the engine boundary exchange lives
//! here: structured tables with version stamps, commit diagnostics,
//! combination membership, display enums, and the error taxonomy.

pub mod combos;
pub mod diagnostics;
pub mod enums;
pub mod error;
pub mod table;

pub use combos::{ComboMember, MemberKind};
pub use diagnostics::CommitDiagnostics;
pub use enums::{EnvelopeMode, MaterialKind, SectionShape};
pub use error::{EngineError, Result, TableError};
pub use table::{NamedTable, Row, TableVersion};
