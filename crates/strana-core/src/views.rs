#![deny(unsafe_code)]

//! Lazily computed derived views over the model catalog.
//!
//! Each view goes UNCOMPUTED → COMPUTED on first access, issuing exactly one
//! engine query (or reading a dependent view, which is forced first). Views
//! are never invalidated automatically: the cache deliberately has no
//! dependency tracking, and a caller that mutates the model must `reset` the
//! whole cache. Staleness after an un-reset mutation is the caller's
//! responsibility, by contract.

use std::collections::BTreeSet;

use strana_engine::boundary::{SUBTYPE_NON_DESIGN, SUBTYPE_SEISMIC};
use strana_engine::{CaseCatalog, ModelInventory, TableCatalog};
use strana_model::Result;

use crate::resolver::CaseComboResolver;

/// Names the engine uses for internal bookkeeping start with `~` and are
/// filtered from every case/combo view.
const INTERNAL_PREFIX: char = '~';

#[derive(Debug, Default)]
pub struct DerivedViewCache {
    cases: Option<Vec<String>>,
    combos: Option<Vec<String>>,
    cases_and_combos: Option<Vec<String>>,
    design_cases: Option<Vec<String>>,
    design_cases_and_combos: Option<Vec<String>>,
    seismic_cases: Option<Vec<String>>,
    seismic_combos: Option<Vec<String>>,
    seismic_cases_and_combos: Option<Vec<String>>,
    stories: Option<Vec<String>>,
    materials: Option<Vec<String>>,
    frame_sections: Option<Vec<String>>,
    editable_table_names: Option<Vec<String>>,
}

impl DerivedViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every computed view. All-or-nothing: there is no per-view
    /// invalidation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Elementary load cases, internal names filtered.
    pub fn cases<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.cases.is_none() {
            let names = engine
                .case_names()?
                .into_iter()
                .filter(|name| !name.starts_with(INTERNAL_PREFIX))
                .collect();
            self.cases = Some(names);
        }
        Ok(self.cases.as_deref().unwrap_or_default())
    }

    /// Load combinations, internal names filtered.
    pub fn combos<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.combos.is_none() {
            let names = engine
                .combo_names()?
                .into_iter()
                .filter(|name| !name.starts_with(INTERNAL_PREFIX))
                .collect();
            self.combos = Some(names);
        }
        Ok(self.combos.as_deref().unwrap_or_default())
    }

    pub fn cases_and_combos<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.cases_and_combos.is_none() {
            let mut names = self.cases(engine)?.to_vec();
            names.extend(self.combos(engine)?.iter().cloned());
            self.cases_and_combos = Some(names);
        }
        Ok(self.cases_and_combos.as_deref().unwrap_or_default())
    }

    /// Cases that participate in design (subtype is not the excluded kind).
    pub fn design_cases<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.design_cases.is_none() {
            let mut names = Vec::new();
            for case in self.cases(engine)?.to_vec() {
                if engine.case_subtype(&case)? != SUBTYPE_NON_DESIGN {
                    names.push(case);
                }
            }
            self.design_cases = Some(names);
        }
        Ok(self.design_cases.as_deref().unwrap_or_default())
    }

    pub fn design_cases_and_combos<E: CaseCatalog + ?Sized>(
        &mut self,
        engine: &E,
    ) -> Result<&[String]> {
        if self.design_cases_and_combos.is_none() {
            let mut names = self.design_cases(engine)?.to_vec();
            names.extend(self.combos(engine)?.iter().cloned());
            self.design_cases_and_combos = Some(names);
        }
        Ok(self.design_cases_and_combos.as_deref().unwrap_or_default())
    }

    pub fn seismic_cases<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.seismic_cases.is_none() {
            let mut names = Vec::new();
            for case in self.cases(engine)?.to_vec() {
                if engine.case_subtype(&case)? == SUBTYPE_SEISMIC {
                    names.push(case);
                }
            }
            self.seismic_cases = Some(names);
        }
        Ok(self.seismic_cases.as_deref().unwrap_or_default())
    }

    /// Combinations whose case closure intersects the seismic cases.
    pub fn seismic_combos<E: CaseCatalog + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.seismic_combos.is_none() {
            let combos = self.combos(engine)?.to_vec();
            let seismic: BTreeSet<String> =
                self.seismic_cases(engine)?.iter().cloned().collect();
            let resolver = CaseComboResolver::new(engine);
            let mut names = Vec::new();
            for combo in combos {
                let closure = resolver.expand(&combo)?;
                if closure.iter().any(|case| seismic.contains(case)) {
                    names.push(combo);
                }
            }
            self.seismic_combos = Some(names);
        }
        Ok(self.seismic_combos.as_deref().unwrap_or_default())
    }

    pub fn seismic_cases_and_combos<E: CaseCatalog + ?Sized>(
        &mut self,
        engine: &E,
    ) -> Result<&[String]> {
        if self.seismic_cases_and_combos.is_none() {
            let mut names = self.seismic_cases(engine)?.to_vec();
            names.extend(self.seismic_combos(engine)?.iter().cloned());
            self.seismic_cases_and_combos = Some(names);
        }
        Ok(self.seismic_cases_and_combos.as_deref().unwrap_or_default())
    }

    pub fn stories<E: ModelInventory + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.stories.is_none() {
            self.stories = Some(engine.story_names()?);
        }
        Ok(self.stories.as_deref().unwrap_or_default())
    }

    pub fn materials<E: ModelInventory + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.materials.is_none() {
            self.materials = Some(engine.material_names()?);
        }
        Ok(self.materials.as_deref().unwrap_or_default())
    }

    pub fn frame_sections<E: ModelInventory + ?Sized>(&mut self, engine: &E) -> Result<&[String]> {
        if self.frame_sections.is_none() {
            self.frame_sections = Some(engine.frame_section_names()?);
        }
        Ok(self.frame_sections.as_deref().unwrap_or_default())
    }

    /// Catalog entries whose import type marks them editable.
    pub fn editable_table_names<E: TableCatalog + ?Sized>(
        &mut self,
        engine: &E,
    ) -> Result<&[String]> {
        if self.editable_table_names.is_none() {
            let names = engine
                .available_tables()?
                .into_iter()
                .filter(|info| info.is_editable())
                .map(|info| info.name)
                .collect();
            self.editable_table_names = Some(names);
        }
        Ok(self.editable_table_names.as_deref().unwrap_or_default())
    }
}
