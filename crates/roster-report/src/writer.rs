//! Roster workbook writers.

use std::path::Path;

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet};
use tracing::{debug, warn};

use roster_model::{FIXED_COLUMNS, GridCell, OutputGrid};

use crate::error::{ReportError, Result};
use crate::style::{
    AUTOFIT_EMPLOYEE_WIDTH, AUTOFIT_IDENTITY_WIDTH, EMPLOYEE_COLUMN_WIDTH, EXAM_COLUMN_WIDTH,
    HEADER_ROW_HEIGHT, ID_COLUMN_WIDTH, IDENTITY_COLUMN_WIDTH, RosterFormats,
};

/// Name of the single worksheet in every roster workbook.
pub const SHEET_NAME: &str = "Roster";

/// Writes an [`OutputGrid`] to a file.
pub trait GridRenderer {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn render(&self, grid: &OutputGrid, path: &Path) -> Result<()>;
}

/// Rendering switches taken from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Try the styled renderer before the plain one.
    pub styled: bool,
    /// Autofit column widths in the styled renderer.
    pub autofit: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styled: true,
            autofit: true,
        }
    }
}

/// Which renderer produced the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedWith {
    Styled,
    Plain,
}

/// Formatted roster: bordered table, rotated exam titles, fixed widths.
#[derive(Debug, Clone, Default)]
pub struct StyledXlsxRenderer {
    formats: RosterFormats,
    autofit: bool,
}

impl StyledXlsxRenderer {
    pub fn new(autofit: bool) -> Self {
        Self {
            formats: RosterFormats::default(),
            autofit,
        }
    }

    fn format_for(&self, grid: &OutputGrid, row: usize, column: usize) -> Option<&Format> {
        let sections = grid.sections();
        if sections.metadata.contains(&row) {
            return match column {
                1 => Some(&self.formats.metadata_label),
                2 => Some(&self.formats.metadata_value),
                _ => None,
            };
        }
        if row == sections.header_row {
            return Some(if column >= FIXED_COLUMNS {
                &self.formats.exam_header
            } else {
                &self.formats.header
            });
        }
        if sections.patients.contains(&row) {
            return Some(if column >= FIXED_COLUMNS {
                &self.formats.mark
            } else {
                &self.formats.body
            });
        }
        None
    }

    fn size_columns(&self, sheet: &mut Worksheet, width: usize) -> Result<()> {
        sheet.set_column_width(0, ID_COLUMN_WIDTH)?;
        sheet.set_column_width(1, EMPLOYEE_COLUMN_WIDTH)?;
        sheet.set_column_width(2, IDENTITY_COLUMN_WIDTH)?;
        for column in FIXED_COLUMNS..width {
            sheet.set_column_width(col_num(0, column)?, EXAM_COLUMN_WIDTH)?;
        }
        if self.autofit {
            sheet.autofit();
            sheet.set_column_width(1, AUTOFIT_EMPLOYEE_WIDTH)?;
            sheet.set_column_width(2, AUTOFIT_IDENTITY_WIDTH)?;
        }
        Ok(())
    }
}

impl GridRenderer for StyledXlsxRenderer {
    fn name(&self) -> &'static str {
        "styled"
    }

    fn render(&self, grid: &OutputGrid, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;

        // One blank row above the metadata block.
        const ROW_OFFSET: usize = 1;
        for (row_index, row) in grid.rows().iter().enumerate() {
            let sheet_row = row_num(row_index + ROW_OFFSET, 0)?;
            for (column, cell) in row.iter().enumerate() {
                let sheet_col = col_num(row_index, column)?;
                match self.format_for(grid, row_index, column) {
                    Some(format) => write_formatted(sheet, sheet_row, sheet_col, cell, format)?,
                    None => write_plain(sheet, sheet_row, sheet_col, cell)?,
                }
            }
        }
        sheet.set_row_height(
            row_num(grid.sections().header_row + ROW_OFFSET, 0)?,
            HEADER_ROW_HEIGHT,
        )?;
        self.size_columns(sheet, grid.width())?;

        workbook.save(path)?;
        Ok(())
    }
}

/// Values only, written from the top-left cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainXlsxRenderer;

impl GridRenderer for PlainXlsxRenderer {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn render(&self, grid: &OutputGrid, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SHEET_NAME)?;
        for (row_index, row) in grid.rows().iter().enumerate() {
            let sheet_row = row_num(row_index, 0)?;
            for (column, cell) in row.iter().enumerate() {
                write_plain(sheet, sheet_row, col_num(row_index, column)?, cell)?;
            }
        }
        workbook.save(path)?;
        Ok(())
    }
}

/// Render with the styled writer, falling back to plain values when it fails.
pub fn render_with_fallback(
    grid: &OutputGrid,
    path: &Path,
    options: RenderOptions,
) -> Result<RenderedWith> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::OutputDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    if !options.styled {
        PlainXlsxRenderer.render(grid, path)?;
        return Ok(RenderedWith::Plain);
    }

    let styled = StyledXlsxRenderer::new(options.autofit);
    match styled.render(grid, path) {
        Ok(()) => {
            debug!(renderer = styled.name(), path = %path.display(), "roster written");
            Ok(RenderedWith::Styled)
        }
        Err(styled_error) => {
            warn!(
                path = %path.display(),
                error = %styled_error,
                "styled rendering failed, writing plain values"
            );
            match PlainXlsxRenderer.render(grid, path) {
                Ok(()) => Ok(RenderedWith::Plain),
                Err(plain_error) => Err(ReportError::Fallback {
                    styled: Box::new(styled_error),
                    plain: Box::new(plain_error),
                }),
            }
        }
    }
}

fn write_plain(sheet: &mut Worksheet, row: RowNum, col: ColNum, cell: &GridCell) -> Result<()> {
    match cell {
        GridCell::Blank => {}
        GridCell::Text(value) => {
            sheet.write_string(row, col, value.as_str())?;
        }
        GridCell::Number(value) => {
            sheet.write_number(row, col, *value)?;
        }
    }
    Ok(())
}

fn write_formatted(
    sheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    cell: &GridCell,
    format: &Format,
) -> Result<()> {
    match cell {
        GridCell::Blank => {
            sheet.write_blank(row, col, format)?;
        }
        GridCell::Text(value) => {
            sheet.write_string_with_format(row, col, value.as_str(), format)?;
        }
        GridCell::Number(value) => {
            sheet.write_number_with_format(row, col, *value, format)?;
        }
    }
    Ok(())
}

fn row_num(row: usize, column: usize) -> Result<RowNum> {
    RowNum::try_from(row).map_err(|_| ReportError::OutOfBounds { row, column })
}

fn col_num(row: usize, column: usize) -> Result<ColNum> {
    ColNum::try_from(column).map_err(|_| ReportError::OutOfBounds { row, column })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_model::GridSections;

    fn tiny_grid() -> OutputGrid {
        OutputGrid::new(
            vec![
                vec![GridCell::Blank, GridCell::text("Company"), GridCell::text("ACME")],
                vec![],
                vec![
                    GridCell::text("Id"),
                    GridCell::text("Employee"),
                    GridCell::text("IdentityNumber"),
                    GridCell::text("RX"),
                ],
                vec![
                    GridCell::Number(1.0),
                    GridCell::text("ANA"),
                    GridCell::text("20123456789"),
                    GridCell::text("X"),
                ],
            ],
            GridSections {
                metadata: 0..1,
                header_row: 2,
                patients: 3..4,
                tally: 4..4,
            },
        )
    }

    #[test]
    fn styled_formats_follow_sections() {
        let grid = tiny_grid();
        let renderer = StyledXlsxRenderer::new(false);
        assert!(renderer.format_for(&grid, 0, 0).is_none());
        assert!(renderer.format_for(&grid, 0, 1).is_some());
        assert!(renderer.format_for(&grid, 2, 3).is_some());
        assert!(renderer.format_for(&grid, 3, 1).is_some());
        assert!(renderer.format_for(&grid, 5, 0).is_none());
    }

    #[test]
    fn oversized_column_is_out_of_bounds() {
        assert!(matches!(
            col_num(4, 70_000),
            Err(ReportError::OutOfBounds {
                row: 4,
                column: 70_000
            })
        ));
    }

    #[test]
    fn default_options_are_styled_with_autofit() {
        let options = RenderOptions::default();
        assert!(options.styled);
        assert!(options.autofit);
    }
}
