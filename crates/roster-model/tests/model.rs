//! Tests for roster-model types.

use roster_model::{
    AssemblyFailure, DefaultReason, FieldValue, GridCell, GridSections, OutputGrid, RosterError,
    RowOutcome, SkipReason,
};

fn sample_grid() -> OutputGrid {
    let rows = vec![
        vec![GridCell::Blank, GridCell::text("Company"), GridCell::text("ACME")],
        vec![],
        vec![
            GridCell::text("Id"),
            GridCell::text("Employee"),
            GridCell::text("IdentityNumber"),
            GridCell::text("AUDIOMETRIA"),
            GridCell::text("RX"),
        ],
        vec![
            GridCell::Number(1.0),
            GridCell::text("LOPEZ ANA"),
            GridCell::text("27111222333"),
            GridCell::text("X"),
            GridCell::Blank,
        ],
        vec![],
        vec![GridCell::Number(1.0), GridCell::text("AUDIOMETRIA")],
        vec![GridCell::Number(0.0), GridCell::text("RX")],
    ];
    let sections = GridSections {
        metadata: 0..1,
        header_row: 2,
        patients: 3..4,
        tally: 5..7,
    };
    OutputGrid::new(rows, sections)
}

#[test]
fn grid_sections_slice_rows() {
    let grid = sample_grid();
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.exam_columns(), vec!["AUDIOMETRIA", "RX"]);
    assert_eq!(grid.patient_rows().len(), 1);
    assert_eq!(grid.tally_rows().len(), 2);
    assert_eq!(grid.cell(3, 3).and_then(GridCell::as_text), Some("X"));
    assert_eq!(grid.cell(5, 0).and_then(GridCell::as_number), Some(1.0));
}

#[test]
fn empty_text_becomes_blank() {
    assert!(GridCell::text("").is_blank());
    assert!(!GridCell::text("X").is_blank());
}

#[test]
fn field_value_defaults_to_empty_string() {
    let value = FieldValue::Defaulted(DefaultReason::BlankCell);
    assert!(value.is_defaulted());
    assert_eq!(value.into_string(), "");
    assert_eq!(FieldValue::Value("ACME".into()).into_string(), "ACME");
}

#[test]
fn skip_reasons_display() {
    assert_eq!(
        SkipReason::IdentityTooShort.to_string(),
        "identity number too short"
    );
    assert_ne!(
        RowOutcome::Skipped(SkipReason::HeaderLabel),
        RowOutcome::Skipped(SkipReason::MissingIdentity)
    );
}

#[test]
fn assembly_failure_message_has_no_patient_data() {
    let error = RosterError::from(AssemblyFailure::TallyMismatch {
        column: 2,
        marked: 3,
        counted: 4,
    });
    assert_eq!(
        error.to_string(),
        "assembly failed: exam column #2 has 3 marks but a tally of 4"
    );
}
