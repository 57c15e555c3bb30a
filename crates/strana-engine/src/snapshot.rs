#![deny(unsafe_code)]

//! Serializable model snapshots.
//!
//! A snapshot captures everything the in-memory engine needs to stand in for
//! a live model: tables with their import types and availability, the
//! case/combo catalog with design subtypes and member lists, and the object
//! inventories. Snapshots are plain JSON so they can be captured once against
//! a real engine and replayed offline.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strana_model::{ComboMember, NamedTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub table: NamedTable,
    /// Raw engine import-type code; 2 and 3 mark editable tables.
    #[serde(default)]
    pub import_type: i32,
    /// Result tables report unavailable until the model has been solved.
    #[serde(default)]
    pub requires_analysis: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSnapshot {
    pub name: String,
    /// Raw design subtype code (see the boundary constants).
    #[serde(default)]
    pub subtype: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboSnapshot {
    pub name: String,
    #[serde(default)]
    pub members: Vec<ComboMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tables: Vec<TableSnapshot>,
    #[serde(default)]
    pub cases: Vec<CaseSnapshot>,
    #[serde(default)]
    pub combos: Vec<ComboSnapshot>,
    #[serde(default)]
    pub stories: Vec<String>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub frame_sections: Vec<String>,
}

impl ModelSnapshot {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(io::Error::other)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
