//! Plain-text rendering of a grid for previews and logs.

use roster_model::{GridCell, OutputGrid, format_numeric};

/// Renders one line per grid row with cells separated by `|`.
///
/// Trailing blank cells are dropped so blank separator rows render empty.
pub fn render_text(grid: &OutputGrid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            let line = row.iter().map(cell_text).collect::<Vec<_>>().join("|");
            line.trim_end_matches('|').to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn cell_text(cell: &GridCell) -> String {
    match cell {
        GridCell::Blank => String::new(),
        GridCell::Text(value) => value.clone(),
        GridCell::Number(value) => format_numeric(*value),
    }
}
