//! Error types for roster rendering.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("xlsx write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Grid position does not fit a worksheet.
    #[error("cell ({row}, {column}) is outside the worksheet limits")]
    OutOfBounds { row: usize, column: usize },

    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Styled and plain rendering both failed.
    #[error("styled rendering failed ({styled}); plain rendering failed ({plain})")]
    Fallback {
        styled: Box<ReportError>,
        plain: Box<ReportError>,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
