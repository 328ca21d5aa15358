use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use csvnorm_cli::types::{RunSummary, SkippedRow};

/// Print the run summary to stderr.
pub fn print_summary(summary: &RunSummary, output: &Path) {
    eprintln!("Output: {}", output.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rows"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.rows_read)]);
    table.add_row(vec![
        Cell::new("Written"),
        Cell::new(summary.rows_written)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Skipped"),
        count_cell(summary.skipped.len(), Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Header"),
        if summary.header_written {
            Cell::new("✓").fg(Color::Green)
        } else {
            dim_cell("-")
        },
    ]);
    eprintln!("{table}");
    if summary.has_skipped() {
        print_skipped_table(&summary.skipped);
    }
}

fn print_skipped_table(skipped: &[SkippedRow]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("Line"),
        header_cell("Rule"),
        header_cell("Error"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for entry in skipped {
        table.add_row(vec![
            Cell::new(entry.row),
            Cell::new(entry.line),
            Cell::new(entry.error.rule()).fg(Color::Yellow),
            Cell::new(&entry.error),
        ]);
    }
    eprintln!();
    eprintln!("Skipped rows:");
    eprintln!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
