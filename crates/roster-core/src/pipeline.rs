//! One roster run over one source table.

use std::collections::BTreeMap;
use std::time::Instant;

use tracing::{debug, info, info_span};

use roster_model::{
    CompanyField, CompanyMetadata, OutputGrid, Result, RosterOptions, SkipReason, SourceTable,
};

use crate::aggregate::PatientAggregator;
use crate::assemble::{AssemblyInput, assemble_grid};
use crate::metadata::extract_company_metadata;
use crate::ordering::{ExamTally, PatientOrder, order_exams};

/// Counts reported for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Raw rows visited by the aggregator (header row excluded).
    pub rows_visited: usize,
    pub rows_skipped: BTreeMap<SkipReason, usize>,
    pub patients: usize,
    pub exam_types: usize,
    pub defaulted_fields: Vec<CompanyField>,
}

impl RunStats {
    pub fn skipped_total(&self) -> usize {
        self.rows_skipped.values().sum()
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRun {
    pub metadata: CompanyMetadata,
    pub exam_columns: Vec<String>,
    pub grid: OutputGrid,
    pub stats: RunStats,
}

/// Runs metadata extraction, aggregation, ordering and assembly.
pub fn build_roster(table: &SourceTable, options: &RosterOptions) -> Result<RosterRun> {
    options.validate()?;
    let span = info_span!("roster", rows = table.height(), columns = table.width());
    let _guard = span.enter();
    let start = Instant::now();

    let extraction = extract_company_metadata(table, &options.layout.metadata);
    let aggregation = PatientAggregator::new(options).aggregate(table);
    info!(
        patients = aggregation.patients.len(),
        rows = aggregation.stats.rows_visited,
        skipped = aggregation.stats.skipped_total(),
        "patients aggregated"
    );

    let order = PatientOrder::from_patients(&aggregation.patients);
    let tally = ExamTally::from_patients(&aggregation.patients);
    let exam_columns = order_exams(&tally.exam_types(), &options.preferred_exams);
    debug!(exam_columns = exam_columns.len(), "exam columns ordered");

    let grid = assemble_grid(&AssemblyInput {
        metadata: &extraction.metadata,
        patients: &aggregation.patients,
        order: &order,
        exams: &exam_columns,
        tally: &tally,
        presence_mark: &options.presence_mark,
    })?;

    let stats = RunStats {
        rows_visited: aggregation.stats.rows_visited,
        rows_skipped: aggregation.stats.skipped,
        patients: order.len(),
        exam_types: exam_columns.len(),
        defaulted_fields: extraction.defaulted,
    };
    info!(
        patients = stats.patients,
        exam_types = stats.exam_types,
        duration_ms = start.elapsed().as_millis(),
        "roster assembled"
    );
    Ok(RosterRun {
        metadata: extraction.metadata,
        exam_columns,
        grid,
        stats,
    })
}
