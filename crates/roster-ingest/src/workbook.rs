//! Spreadsheet exports read through calamine.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, warn};

use roster_model::{CellValue, SourceTable};

use crate::error::{IngestError, Result};

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(value) => CellValue::from(value.as_str()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}

/// Reads the first worksheet of a workbook.
///
/// Columns keep their absolute sheet positions: a used range that starts
/// right of column A is padded with empty cells, so the fixed column layout
/// still applies. Leading blank rows are dropped and the first used row is
/// the label row.
pub fn read_workbook_source(path: &Path) -> Result<SourceTable> {
    let mut workbook = open_workbook_auto(path).map_err(|error| IngestError::Workbook {
        path: path.to_path_buf(),
        message: error.to_string(),
    })?;
    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::NoWorksheet {
            path: path.to_path_buf(),
        });
    };
    if sheet_names.len() > 1 {
        warn!(
            path = %path.display(),
            sheet = %sheet_name,
            sheets = sheet_names.len(),
            "workbook has several sheets; reading the first"
        );
    }
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|error| IngestError::Workbook {
            path: path.to_path_buf(),
            message: error.to_string(),
        })?;

    let column_offset = range
        .start()
        .map(|(_, column)| column as usize)
        .unwrap_or(0);
    let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(range.height());
    for source_row in range.rows() {
        let mut row = vec![CellValue::Empty; column_offset];
        row.extend(source_row.iter().map(convert_cell));
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = rows.len(),
        "workbook source loaded"
    );
    Ok(SourceTable::new(rows))
}
