//! Source loading for the exam roster converter.
//!
//! # Features
//!
//! - **Workbook loading**: first worksheet of xlsx/xlsm/xlsb/xls/ods exports
//! - **CSV loading**: headerless, ragged rows allowed
//! - **Input discovery**: exports in a folder, skipping lock files and outputs
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::{list_input_files, read_source_table};
//!
//! for path in list_input_files(Path::new("exports"))? {
//!     let table = read_source_table(&path)?;
//!     println!("{}: {} rows", path.display(), table.height());
//! }
//! ```

mod csv_source;
mod discovery;
mod error;
mod workbook;

use std::path::Path;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use csv_source::read_csv_source;
pub use workbook::read_workbook_source;

// === Input Discovery ===
pub use discovery::{OUTPUT_PREFIX, SourceFormat, list_input_files};

use roster_model::SourceTable;

/// Loads an export, choosing the reader from the file extension.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    if !path.is_file() {
        return Err(IngestError::SourceMissing {
            path: path.to_path_buf(),
        });
    }
    match SourceFormat::from_path(path) {
        Some(SourceFormat::Workbook) => read_workbook_source(path),
        Some(SourceFormat::Csv) => read_csv_source(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
