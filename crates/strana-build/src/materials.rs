#![deny(unsafe_code)]

//! Material definition batch.

use strana_core::{EditableTableStore, TransactionCommitter, upsert_row};
use strana_engine::{TableCatalog, TableEdit};
use strana_model::{CommitDiagnostics, MaterialKind, Result, Row};

pub const MATERIAL_TABLE: &str = "Material Properties - Basic Mechanical Properties";
const COLUMNS: [&str; 6] = ["Material", "Type", "E", "U", "A", "UnitWeight"];

/// One isotropic material definition row.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDefinition {
    pub name: String,
    pub kind: MaterialKind,
    /// Modulus of elasticity.
    pub elastic_modulus: f64,
    /// Poisson's ratio.
    pub poisson: f64,
    /// Coefficient of thermal expansion.
    pub thermal_coeff: f64,
    pub weight_per_volume: f64,
}

impl MaterialDefinition {
    fn to_row(&self) -> Row {
        Row::new()
            .with("Material", self.name.clone())
            .with("Type", self.kind.label())
            .with("E", self.elastic_modulus.to_string())
            .with("U", self.poisson.to_string())
            .with("A", self.thermal_coeff.to_string())
            .with("UnitWeight", self.weight_per_volume.to_string())
    }
}

/// Accumulates material definitions and stages them as one table edit,
/// upserting by material name.
#[derive(Debug, Default)]
pub struct MaterialBatch {
    materials: Vec<MaterialDefinition>,
}

impl MaterialBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, material: MaterialDefinition) -> &mut Self {
        self.materials.push(material);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Merge this batch into the staged copy of the material table.
    pub fn stage<E>(&self, engine: &E, store: &mut EditableTableStore) -> Result<()>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let (mut table, version) = match store.get(MATERIAL_TABLE) {
            Some(staged) => (staged.table.clone(), staged.version),
            None => EditableTableStore::get_or_create(engine, MATERIAL_TABLE, &COLUMNS)?,
        };
        for material in &self.materials {
            upsert_row(&mut table, "Material", &material.name, material.to_row());
        }
        tracing::debug!(materials = self.materials.len(), "staged material batch");
        store.stage(MATERIAL_TABLE, table, version);
        Ok(())
    }

    /// Stage and commit this batch alone.
    pub fn commit<E>(&self, engine: &E) -> Result<CommitDiagnostics>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let mut store = EditableTableStore::new();
        self.stage(engine, &mut store)?;
        TransactionCommitter::new(engine).commit_store(&mut store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_row_carries_kind_label_and_properties() {
        let material = MaterialDefinition {
            name: "C30".to_string(),
            kind: MaterialKind::Concrete,
            elastic_modulus: 25_000_000.0,
            poisson: 0.2,
            thermal_coeff: 0.00001,
            weight_per_volume: 24.0,
        };
        let row = material.to_row();
        assert_eq!(row.get("Type"), "Concrete");
        assert_eq!(row.get("U"), "0.2");
        assert_eq!(row.get("UnitWeight"), "24");
    }
}
