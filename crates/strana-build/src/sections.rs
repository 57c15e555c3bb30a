#![deny(unsafe_code)]

//! Frame-section definition batch.

use strana_core::{EditableTableStore, TransactionCommitter, upsert_row};
use strana_engine::{TableCatalog, TableEdit};
use strana_model::{CommitDiagnostics, Result, Row, SectionShape};

pub const SECTION_TABLE: &str = "Frame Section Property Definitions";
const COLUMNS: [&str; 7] = ["Name", "Material", "Shape", "t3", "t2", "tf", "tw"];

/// One frame-section definition row.
///
/// The four dimension columns mean different things per shape (t3 is depth
/// for a rectangle but outside diameter for a pipe); inapplicable dimensions
/// stay empty. The shape constructors below encode which dimensions each
/// shape takes.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSection {
    pub name: String,
    pub material: String,
    pub shape: SectionShape,
    t3: Option<f64>,
    t2: Option<f64>,
    tf: Option<f64>,
    tw: Option<f64>,
}

impl FrameSection {
    fn new(name: impl Into<String>, material: impl Into<String>, shape: SectionShape) -> Self {
        Self {
            name: name.into(),
            material: material.into(),
            shape,
            t3: None,
            t2: None,
            tf: None,
            tw: None,
        }
    }

    /// Solid rectangle: depth `t3`, width `t2`.
    pub fn rectangle(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
    ) -> Self {
        let mut section = Self::new(name, material, SectionShape::Rectangle);
        section.t3 = Some(t3);
        section.t2 = Some(t2);
        section
    }

    /// Solid circle of the given diameter.
    pub fn circle(name: impl Into<String>, material: impl Into<String>, diameter: f64) -> Self {
        let mut section = Self::new(name, material, SectionShape::Circle);
        section.t3 = Some(diameter);
        section
    }

    /// Hollow round: outside diameter `t3`, wall thickness `tw`.
    pub fn pipe(
        name: impl Into<String>,
        material: impl Into<String>,
        diameter: f64,
        wall: f64,
    ) -> Self {
        let mut section = Self::new(name, material, SectionShape::Pipe);
        section.t3 = Some(diameter);
        section.tw = Some(wall);
        section
    }

    /// Hollow rectangle (HSS): outside depth/width, flange/web thickness.
    pub fn tube(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        Self::open_shape(name, material, SectionShape::Tube, t3, t2, tf, tw)
    }

    pub fn i_section(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        Self::open_shape(name, material, SectionShape::ISection, t3, t2, tf, tw)
    }

    pub fn channel(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        Self::open_shape(name, material, SectionShape::Channel, t3, t2, tf, tw)
    }

    pub fn tee(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        Self::open_shape(name, material, SectionShape::Tee, t3, t2, tf, tw)
    }

    pub fn angle(
        name: impl Into<String>,
        material: impl Into<String>,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        Self::open_shape(name, material, SectionShape::Angle, t3, t2, tf, tw)
    }

    fn open_shape(
        name: impl Into<String>,
        material: impl Into<String>,
        shape: SectionShape,
        t3: f64,
        t2: f64,
        tf: f64,
        tw: f64,
    ) -> Self {
        let mut section = Self::new(name, material, shape);
        section.t3 = Some(t3);
        section.t2 = Some(t2);
        section.tf = Some(tf);
        section.tw = Some(tw);
        section
    }

    fn dimension(value: Option<f64>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    fn to_row(&self) -> Row {
        Row::new()
            .with("Name", self.name.clone())
            .with("Material", self.material.clone())
            .with("Shape", self.shape.label())
            .with("t3", Self::dimension(self.t3))
            .with("t2", Self::dimension(self.t2))
            .with("tf", Self::dimension(self.tf))
            .with("tw", Self::dimension(self.tw))
    }
}

/// Accumulates section definitions and stages them as one table edit.
///
/// Sections upsert by name: redefining an existing section replaces its row,
/// everything else in the table is left alone.
#[derive(Debug, Default)]
pub struct FrameSectionBatch {
    sections: Vec<FrameSection>,
}

impl FrameSectionBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, section: FrameSection) -> &mut Self {
        self.sections.push(section);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Merge this batch into the staged copy of the section table.
    pub fn stage<E>(&self, engine: &E, store: &mut EditableTableStore) -> Result<()>
    where
        E: TableCatalog + TableEdit + ?Sized,
    {
        let (mut table, version) = match store.get(SECTION_TABLE) {
            Some(staged) => (staged.table.clone(), staged.version),
            None => EditableTableStore::get_or_create(engine, SECTION_TABLE, &COLUMNS)?,
        };
        for section in &self.sections {
            upsert_row(&mut table, "Name", &section.name, section.to_row());
        }
        tracing::debug!(sections = self.sections.len(), "staged section batch");
        store.stage(SECTION_TABLE, table, version);
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
