//! Reshaping core of the exam roster converter.
//!
//! A run turns one raw export into a roster grid:
//!
//! 1. **Metadata**: company fields from the first data row
//! 2. **Aggregate**: one [`Patient`](roster_model::Patient) per identity number
//! 3. **Order**: patients by name, exams by preferred list then alphabetically
//! 4. **Assemble**: metadata block, header, presence marks, exam tally
//!
//! No stage performs I/O; reading the export and writing the workbook belong
//! to `roster-ingest` and `roster-report`.

pub mod aggregate;
pub mod assemble;
pub mod metadata;
pub mod ordering;
pub mod pipeline;
pub mod privacy;
pub mod text;

pub use aggregate::{AggregatedPatients, Aggregation, AggregationStats, PatientAggregator};
pub use assemble::{AssemblyInput, assemble_grid};
pub use metadata::{CompanyExtraction, extract_company_metadata, read_company_field};
pub use ordering::{ExamCount, ExamTally, PatientOrder, order_exams};
pub use pipeline::{RosterRun, RunStats, build_roster};
pub use text::render_text;
