//! CSV exports, read without header interpretation.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use roster_model::{CellValue, SourceTable};

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::from(raw.trim_matches('\u{feff}'))
}

/// Reads every record, header included, as text cells.
///
/// Rows may have different lengths; missing trailing cells read as empty.
/// Bytes that are not UTF-8 are replaced, so a Latin-1 row degrades
/// instead of failing the file.
pub fn read_csv_source(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(
            record
                .iter()
                .map(|field| normalize_cell(&String::from_utf8_lossy(field)))
                .collect(),
        );
    }
    debug!(path = %path.display(), rows = rows.len(), "csv source loaded");
    Ok(SourceTable::new(rows))
}
