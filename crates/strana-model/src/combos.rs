#![deny(unsafe_code)]

use std::fmt;

/// Whether a combination member is an elementary load case or a nested
/// combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MemberKind {
    Case,
    Combo,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Case => f.write_str("case"),
            MemberKind::Combo => f.write_str("combo"),
        }
    }
}

/// One entry in a combination's member list.
///
/// Combinations form a directed graph over case/combo names. The engine does
/// not guarantee the graph is acyclic.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ComboMember {
    pub name: String,
    pub kind: MemberKind,
}

impl ComboMember {
    pub fn case(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Case,
        }
    }

    pub fn combo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Combo,
        }
    }
}
