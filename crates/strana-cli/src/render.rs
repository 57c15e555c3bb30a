//! Terminal rendering helpers.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use strana_model::NamedTable;

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render a structured table with its own columns as the header.
pub fn render_named_table(table: &NamedTable) -> Table {
    let mut rendered = styled_table();
    rendered.set_header(
        table
            .columns
            .iter()
            .map(|column| header_cell(column))
            .collect::<Vec<_>>(),
    );
    for row in &table.rows {
        rendered.add_row(
            table
                .columns
                .iter()
                .map(|column| Cell::new(row.get(column)))
                .collect::<Vec<_>>(),
        );
    }
    rendered
}

pub fn yes_no(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}
