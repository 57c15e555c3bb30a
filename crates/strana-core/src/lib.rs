//! Table marshaling and transaction core.
//!
//! Everything between the structured data model and the engine's flat wire
//! shapes lives here: the row-major codec, the display read path with its
//! bounded staleness retry, the editable-table buffer and two-phase
//! committer, combination expansion, the derived-view cache, and the
//! [`ModelHandler`] facade that composes them over one engine connection.

pub mod codec;
pub mod committer;
pub mod extracts;
pub mod handler;
pub mod reader;
pub mod resolver;
pub mod store;
pub mod views;

pub use codec::{decode_table, encode_table};
pub use committer::TransactionCommitter;
pub use handler::ModelHandler;
pub use reader::DisplayTableReader;
pub use resolver::CaseComboResolver;
pub use store::{EditableTableStore, StagedTable, upsert_row};
pub use views::DerivedViewCache;
