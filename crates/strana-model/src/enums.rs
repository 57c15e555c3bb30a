#![deny(unsafe_code)]

//! Enumerations for engine-side display settings and definition kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Engine-side display option controlling how multi-step results are
/// reported in result tables.
///
/// This is global engine state shared by every subsequent read, so readers
/// set it explicitly on each call rather than assuming it persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvelopeMode {
    /// Collapse multi-step cases into envelopes.
    #[default]
    Envelopes,
    /// Report every step of multi-step cases.
    Steps,
}

impl fmt::Display for EnvelopeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvelopeMode::Envelopes => f.write_str("envelopes"),
            EnvelopeMode::Steps => f.write_str("steps"),
        }
    }
}

/// Frame-section shapes supported by the definition batch builder.
///
/// The engine's catalog is much larger; these are the shapes expressible
/// through the `t3/t2/tf/tw` dimension columns of the section definition
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SectionShape {
    Rectangle,
    Circle,
    Pipe,
    Tube,
    ISection,
    Channel,
    Tee,
    Angle,
}

impl SectionShape {
    /// Label used in the section definition table's shape column.
    pub fn label(self) -> &'static str {
        match self {
            SectionShape::Rectangle => "Rectangular",
            SectionShape::Circle => "Circle",
            SectionShape::Pipe => "Pipe",
            SectionShape::Tube => "Box",
            SectionShape::ISection => "I",
            SectionShape::Channel => "Channel",
            SectionShape::Tee => "T",
            SectionShape::Angle => "Angle",
        }
    }
}

impl fmt::Display for SectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Material design kinds, matching the engine's material-type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MaterialKind {
    Steel,
    Concrete,
    NoDesign,
    Aluminum,
    ColdFormed,
    Rebar,
    Tendon,
    Masonry,
}

impl MaterialKind {
    pub fn code(self) -> i32 {
        match self {
            MaterialKind::Steel => 1,
            MaterialKind::Concrete => 2,
            MaterialKind::NoDesign => 3,
            MaterialKind::Aluminum => 4,
            MaterialKind::ColdFormed => 5,
            MaterialKind::Rebar => 6,
            MaterialKind::Tendon => 7,
            MaterialKind::Masonry => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Steel => "Steel",
            MaterialKind::Concrete => "Concrete",
            MaterialKind::NoDesign => "NoDesign",
            MaterialKind::Aluminum => "Aluminum",
            MaterialKind::ColdFormed => "ColdFormed",
            MaterialKind::Rebar => "Rebar",
            MaterialKind::Tendon => "Tendon",
            MaterialKind::Masonry => "Masonry",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_mode_defaults_to_envelopes() {
        assert_eq!(EnvelopeMode::default(), EnvelopeMode::Envelopes);
    }

    #[test]
    fn material_codes_match_engine_catalog() {
        assert_eq!(MaterialKind::Steel.code(), 1);
        assert_eq!(MaterialKind::Concrete.code(), 2);
        assert_eq!(MaterialKind::Masonry.code(), 8);
    }
}
