#![deny(unsafe_code)]

use thiserror::Error;

use crate::CommitDiagnostics;

/// Transport-level failure at the RPC boundary.
///
/// A boundary call either returns or fails outright; there is no timeout or
/// cancellation model in the engine contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("not connected to an engine instance")]
    NotConnected,
    #[error("no {0} named '{1}' in the model")]
    UnknownName(&'static str, String),
    #[error("engine call failed: {0}")]
    Rpc(String),
}

/// Error taxonomy for the table marshaling and transaction core.
///
/// Every variant propagates to the immediate caller; the single staleness
/// retry in the display reader is the only internally handled condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableError {
    /// Flat payload length does not match the declared shape. Always a
    /// programming error in the caller, never retried.
    #[error(
        "table '{table}' payload has {values} values, expected {records} records x {columns} columns"
    )]
    Shape {
        table: String,
        values: usize,
        records: usize,
        columns: usize,
    },

    /// The engine reports the table name is not in its catalog.
    #[error("table '{0}' does not exist in the model")]
    UnknownTable(String),

    /// Any other non-success status from a read, with the raw engine code.
    #[error("engine returned status {status} reading table '{table}'")]
    Query { table: String, status: i32 },

    /// Apply-phase fatal or error counts were non-zero; the engine applied
    /// none of the staged edits.
    #[error("commit rejected: {0}")]
    CommitRejected(CommitDiagnostics),

    /// Combination expansion exceeded the opt-in depth guard, which usually
    /// means the membership graph contains a cycle.
    #[error("combination '{combo}' exceeded expansion depth {depth}; membership graph may be cyclic")]
    CycleDetected { combo: String, depth: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, TableError>;
