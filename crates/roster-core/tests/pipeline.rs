//! End-to-end tests for a roster run.

mod common;

use roster_core::{PatientAggregator, build_roster, render_text};
use roster_model::{GridCell, RosterError, RosterOptions, SkipReason, SourceTable};

use common::{exam_row, header_row, table};

fn marks(row: &[GridCell]) -> Vec<bool> {
    row.iter().skip(3).map(|cell| !cell.is_blank()).collect()
}

#[test]
fn reshapes_two_patients_with_shared_exam() {
    let source = table(&[
        ("20111000111", "Ana Lopez", "X-RAY"),
        ("20111000111", "Ana Lopez", "SPIROMETRY"),
        ("20222000222", "Beto Cruz", "X-RAY"),
    ]);
    let options = RosterOptions::default().with_preferred_exams(["SPIROMETRY", "X-RAY"]);

    let run = build_roster(&source, &options).expect("roster");

    assert_eq!(run.exam_columns, vec!["SPIROMETRY", "X-RAY"]);
    let rows = run.grid.patient_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][0], GridCell::Number(1.0));
    assert_eq!(rows[0][1], GridCell::text("Ana Lopez"));
    assert_eq!(marks(&rows[0]), vec![true, true]);
    assert_eq!(rows[1][0], GridCell::Number(2.0));
    assert_eq!(rows[1][1], GridCell::text("Beto Cruz"));
    assert_eq!(marks(&rows[1]), vec![false, true]);

    let tally: Vec<(f64, &str)> = run
        .grid
        .tally_rows()
        .iter()
        .map(|row| (row[0].as_number().unwrap(), row[1].as_text().unwrap()))
        .collect();
    assert_eq!(tally, vec![(2.0, "X-RAY"), (1.0, "SPIROMETRY")]);
}

#[test]
fn short_identities_pass_when_minimum_is_lowered() {
    let source = table(&[
        ("111", "Ana Lopez", "X-RAY"),
        ("111", "Ana Lopez", "SPIROMETRY"),
        ("222", "Beto Cruz", "X-RAY"),
    ]);
    let preferred = RosterOptions::default().with_preferred_exams(["SPIROMETRY", "X-RAY"]);

    let strict = build_roster(&source, &preferred).expect("roster");
    assert_eq!(strict.stats.patients, 0);
    assert_eq!(
        strict.stats.rows_skipped.get(&SkipReason::IdentityTooShort),
        Some(&3)
    );

    let relaxed = build_roster(&source, &preferred.with_min_identity_len(1)).expect("roster");
    assert_eq!(relaxed.stats.patients, 2);
    assert_eq!(relaxed.exam_columns, vec!["SPIROMETRY", "X-RAY"]);
    let rows = relaxed.grid.patient_rows();
    assert_eq!(rows[0][2], GridCell::text("111"));
    assert_eq!(marks(&rows[0]), vec![true, true]);
    assert_eq!(marks(&rows[1]), vec![false, true]);
}

#[test]
fn malformed_rows_contribute_nothing() {
    let source = table(&[
        ("20111000111", "Ana Lopez", "X-RAY"),
        ("CUIL", "APELLIDO Y NOMBRE", "DESCRIPCION"),
        ("12345", "Ghost", "AUDIOMETRIA"),
        ("", "Nobody", "ECG"),
    ]);
    let options = RosterOptions::default();
    let aggregation = PatientAggregator::new(&options).aggregate(&source);

    assert_eq!(aggregation.patients.len(), 1);
    assert_eq!(aggregation.stats.rows_visited, 4);
    assert_eq!(aggregation.stats.skipped_total(), 3);
    assert_eq!(
        aggregation.stats.skipped.get(&SkipReason::HeaderLabel),
        Some(&1)
    );
    assert_eq!(
        aggregation.stats.skipped.get(&SkipReason::IdentityTooShort),
        Some(&1)
    );
    assert_eq!(
        aggregation.stats.skipped.get(&SkipReason::MissingIdentity),
        Some(&1)
    );

    let run = build_roster(&source, &options).expect("roster");
    assert_eq!(run.exam_columns, vec!["X-RAY"]);
}

#[test]
fn narrow_source_skips_every_row() {
    let source = SourceTable::from_text_rows(vec![
        vec!["A", "B", "CUIL"],
        vec!["", "", "20111000111"],
    ]);
    let run = build_roster(&source, &RosterOptions::default()).expect("roster");
    assert_eq!(run.stats.patients, 0);
    assert_eq!(
        run.stats.rows_skipped.get(&SkipReason::MissingColumns),
        Some(&1)
    );
    assert!(run.grid.patient_rows().is_empty());
}

#[test]
fn invalid_options_fail_the_run() {
    let source = table(&[("20111000111", "Ana Lopez", "X-RAY")]);
    let options = RosterOptions::default().with_presence_mark(" ");
    let error = build_roster(&source, &options).unwrap_err();
    assert!(matches!(error, RosterError::InvalidOptions(_)));
}

#[test]
fn rerun_produces_identical_grid() {
    let source = table(&[
        ("20333000333", "carla diaz", "RX LUMBAR"),
        ("20111000111", "Ana Lopez", "RX DE TORAX"),
        ("20222000222", "ANA LOPEZ", "AUDIOMETRIA"),
        ("20111000111", "Ana Lopez", "ECG"),
        ("20333000333", "carla diaz", "ACUIDAD VISUAL"),
    ]);
    let options = RosterOptions::default();
    let first = build_roster(&source, &options).expect("roster");
    let second = build_roster(&source, &options).expect("roster");
    assert_eq!(first, second);
    assert_eq!(render_text(&first.grid), render_text(&second.grid));
}

#[test]
fn roster_text_snapshot() {
    let mut first = exam_row("20111222333", "LOPEZ ANA", "RX DE TORAX");
    first[1] = "30-71234567-8".to_string();
    first[7] = "ACME SA".to_string();
    first[8] = "rrhh@acme.test".to_string();
    let source = SourceTable::from_text_rows(vec![
        header_row(),
        first,
        exam_row("20111222333", "LOPEZ ANA", "EXAMEN CLINICO"),
        exam_row("20444555666", "Cruz Beto", "EXAMEN CLINICO"),
        exam_row("20444555666", "", "ELECTROCARDIOGRAMA"),
        exam_row("CUIL", "APELLIDO Y NOMBRE", "DESCRIPCION"),
        exam_row("123", "Ghost", "AUDIOMETRIA"),
    ]);

    let run = build_roster(&source, &RosterOptions::default()).expect("roster");

    insta::assert_snapshot!(render_text(&run.grid), @r"
    |Process
    |Company|ACME SA
    |TaxId|30-71234567-8
    |Contract
    |Address
    |Locality
    |Province
    |Phone
    |Contact
    |Email|rrhh@acme.test

    Id|Employee|IdentityNumber|EXAMEN CLINICO|RX DE TORAX|ELECTROCARDIOGRAMA
    1|Cruz Beto|20444555666|X||X
    2|LOPEZ ANA|20111222333|X|X

    1|RX DE TORAX
    2|EXAMEN CLINICO
    1|ELECTROCARDIOGRAMA
    ");
}
