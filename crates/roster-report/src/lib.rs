//! Workbook rendering for the exam roster converter.
//!
//! Renderers only decide how a finished [`OutputGrid`](roster_model::OutputGrid)
//! looks on disk; they never change its contents.

pub mod error;
pub mod output;
pub mod style;
pub mod writer;

pub use error::{ReportError, Result};
pub use output::{OUTPUT_FILE_PREFIX, output_path_for};
pub use style::RosterFormats;
pub use writer::{
    GridRenderer, PlainXlsxRenderer, RenderOptions, RenderedWith, StyledXlsxRenderer,
    render_with_fallback,
};
