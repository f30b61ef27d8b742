//! Data model for the exam roster converter.
//!
//! The types here are shared by ingestion, the reshaping core and the
//! renderers. They carry no I/O.

pub mod cell;
pub mod company;
pub mod error;
pub mod grid;
pub mod options;
pub mod outcome;
pub mod patient;

pub use cell::{CellValue, SourceTable, format_numeric};
pub use company::{CompanyField, CompanyMetadata};
pub use error::{AssemblyFailure, Result, RosterError};
pub use grid::{
    EMPLOYEE_HEADER, FIXED_COLUMNS, GridCell, GridSections, ID_HEADER, IDENTITY_NUMBER_HEADER,
    OutputGrid,
};
pub use options::{
    DEFAULT_PREFERRED_EXAMS, DEFAULT_PRESENCE_MARK, IDENTITY_HEADER_LABEL, MIN_IDENTITY_LEN,
    MetadataColumns, PatientColumns, RosterOptions, SourceLayout,
};
pub use outcome::{DefaultReason, FieldValue, RowOutcome, SkipReason};
pub use patient::Patient;
