//! Assembly of the roster grid from ordered patients and exams.

use std::collections::HashSet;

use roster_model::{
    AssemblyFailure, CompanyMetadata, EMPLOYEE_HEADER, GridCell, GridSections, ID_HEADER,
    IDENTITY_NUMBER_HEADER, OutputGrid,
};

use crate::aggregate::AggregatedPatients;
use crate::ordering::{ExamTally, PatientOrder};

/// Everything the assembler consumes.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyInput<'a> {
    pub metadata: &'a CompanyMetadata,
    pub patients: &'a AggregatedPatients,
    pub order: &'a PatientOrder,
    pub exams: &'a [String],
    pub tally: &'a ExamTally,
    pub presence_mark: &'a str,
}

/// Builds the roster grid, or fails without returning a partial grid.
///
/// Layout: metadata label/value rows, a blank row, the header row, one row
/// per ordered patient, a blank row, then one `count | exam` row per exam
/// type in tally order.
pub fn assemble_grid(input: &AssemblyInput<'_>) -> Result<OutputGrid, AssemblyFailure> {
    check_structure(input)?;

    let mut rows: Vec<Vec<GridCell>> = Vec::new();

    let metadata_start = rows.len();
    for (label, value) in input.metadata.header_block() {
        rows.push(vec![GridCell::Blank, GridCell::text(label), GridCell::text(value)]);
    }
    let metadata = metadata_start..rows.len();
    rows.push(Vec::new());

    let header_row = rows.len();
    let mut header = vec![
        GridCell::text(ID_HEADER),
        GridCell::text(EMPLOYEE_HEADER),
        GridCell::text(IDENTITY_NUMBER_HEADER),
    ];
    header.extend(input.exams.iter().map(|exam| GridCell::text(exam.as_str())));
    rows.push(header);

    let patients_start = rows.len();
    let mut marks = vec![0usize; input.exams.len()];
    for (position, identity_number) in input.order.identity_numbers().iter().enumerate() {
        let position = position + 1;
        let patient = input
            .patients
            .get(identity_number)
            .ok_or(AssemblyFailure::UnknownPatient { position })?;
        let number = input
            .order
            .number_of(identity_number)
            .ok_or(AssemblyFailure::MissingNumber { position })?;
        let mut row = Vec::with_capacity(3 + input.exams.len());
        row.push(GridCell::Number(number as f64));
        row.push(GridCell::text(patient.name.as_str()));
        row.push(GridCell::text(patient.identity_number.as_str()));
        for (column, exam) in input.exams.iter().enumerate() {
            if patient.has_exam(exam) {
                marks[column] += 1;
                row.push(GridCell::text(input.presence_mark));
            } else {
                row.push(GridCell::Blank);
            }
        }
        rows.push(row);
    }
    let patients = patients_start..rows.len();
    rows.push(Vec::new());

    let tally_start = rows.len();
    for entry in input.tally.entries() {
        rows.push(vec![
            GridCell::Number(entry.count as f64),
            GridCell::text(entry.exam.as_str()),
        ]);
    }
    let tally = tally_start..rows.len();

    for (column, exam) in input.exams.iter().enumerate() {
        let counted = input.tally.count_of(exam.trim()).unwrap_or(0);
        if counted != marks[column] {
            return Err(AssemblyFailure::TallyMismatch {
                column: column + 1,
                marked: marks[column],
                counted,
            });
        }
    }

    Ok(OutputGrid::new(
        rows,
        GridSections {
            metadata,
            header_row,
            patients,
            tally,
        },
    ))
}

fn check_structure(input: &AssemblyInput<'_>) -> Result<(), AssemblyFailure> {
    let aggregated = input.patients.len();
    let ordered = input.order.len();
    if ordered != aggregated {
        return Err(AssemblyFailure::PatientCountMismatch {
            ordered,
            aggregated,
        });
    }

    let mut numbers: Vec<usize> = input
        .order
        .identity_numbers()
        .iter()
        .filter_map(|identity| input.order.number_of(identity))
        .collect();
    numbers.sort_unstable();
    if !numbers.iter().copied().eq(1..=ordered) {
        return Err(AssemblyFailure::NumberingGap { expected: ordered });
    }

    let mut seen = HashSet::new();
    for (column, exam) in input.exams.iter().enumerate() {
        if !seen.insert(exam.trim()) {
            return Err(AssemblyFailure::DuplicateExamColumn { column: column + 1 });
        }
    }
    Ok(())
}
