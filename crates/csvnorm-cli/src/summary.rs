use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use csvnorm_core::RunStats;

/// Print the run summary to stderr, keeping stdout clean for CSV data.
pub fn print_summary(stats: &RunStats) {
    let mut table = Table::new();
    table.set_header(vec!["Rows read", "Emitted", "Dropped"]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let dropped = if stats.rows_dropped > 0 {
        Cell::new(stats.rows_dropped).fg(Color::Red)
    } else {
        Cell::new(stats.rows_dropped)
    };
    table.add_row(vec![
        Cell::new(stats.rows_read),
        Cell::new(stats.rows_emitted),
        dropped,
    ]);
    eprintln!("{table}");
}

pub(crate) fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
