#![deny(unsafe_code)]

//! Combination → elementary case expansion.

use std::collections::BTreeSet;

use strana_engine::CaseCatalog;
use strana_model::{MemberKind, Result, TableError};

/// Expands a load combination into its closure of elementary load cases.
///
/// By default the membership graph is walked with no cycle detection,
/// matching the engine-facing contract: the engine does not guarantee
/// acyclic combination definitions, and a cyclic graph recurses without
/// bound. Callers that cannot trust their models can opt into a depth
/// guard, which surfaces [`TableError::CycleDetected`] instead of changing
/// the resolution semantics.
pub struct CaseComboResolver<'a, E: ?Sized> {
    engine: &'a E,
    max_depth: Option<usize>,
}

impl<'a, E: CaseCatalog + ?Sized> CaseComboResolver<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            max_depth: None,
        }
    }

    /// Bound the recursion depth. Exceeding the bound is reported as
    /// [`TableError::CycleDetected`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Deduplicated set of elementary case names reachable from
    /// `combo_name`. Insertion order is not preserved; callers needing a
    /// display order must re-sort against a canonical case list.
    pub fn expand(&self, combo_name: &str) -> Result<BTreeSet<String>> {
        let mut cases = BTreeSet::new();
        self.walk(combo_name, 0, &mut cases)?;
        Ok(cases)
    }

    fn walk(&self, combo_name: &str, depth: usize, cases: &mut BTreeSet<String>) -> Result<()> {
        if let Some(max_depth) = self.max_depth
            && depth > max_depth
        {
            return Err(TableError::CycleDetected {
                combo: combo_name.to_string(),
                depth,
            });
        }
        for member in self.engine.combo_members(combo_name)? {
            match member.kind {
                MemberKind::Case => {
                    cases.insert(member.name);
                }
                MemberKind::Combo => self.walk(&member.name, depth + 1, cases)?,
            }
        }
        Ok(())
    }
}
