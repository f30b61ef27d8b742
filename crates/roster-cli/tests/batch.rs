//! Batch conversion over a folder of exports.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use roster_cli::batch::{ConvertSettings, convert_file, run_batch};
use roster_cli::types::FileStatus;
use roster_report::RenderedWith;

const WIDTH: usize = 17;

fn csv_line(cells: &[(usize, &str)]) -> String {
    let mut row = vec![String::new(); WIDTH];
    for (column, value) in cells {
        row[*column] = (*value).to_string();
    }
    row.join(",")
}

fn write_export(path: &Path, company: &str, rows: &[(&str, &str, &str)]) {
    let mut lines = vec![csv_line(&[(2, "CUIL"), (4, "DESCRIPCION"), (15, "APELLIDO Y NOMBRE")])];
    for (index, (identity, name, exam)) in rows.iter().enumerate() {
        let mut cells = vec![(2, *identity), (4, *exam), (15, *name)];
        if index == 0 {
            cells.push((7, company));
        }
        lines.push(csv_line(&cells));
    }
    std::fs::write(path, lines.join("\n")).expect("write export");
}

#[test]
fn batch_converts_every_export_and_skips_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_export(
        &dir.path().join("planta_norte.csv"),
        "ACME SA",
        &[
            ("20111111111", "PEREZ JUAN", "RX DE TORAX"),
            ("20222222222", "ACOSTA ANA", "EXAMEN CLINICO"),
        ],
    );
    write_export(
        &dir.path().join("output_sorted_old.csv"),
        "OLD SA",
        &[("20333333333", "GOMEZ LUIS", "RX")],
    );

    let result = run_batch(dir.path(), &ConvertSettings::default()).expect("batch");

    assert!(!result.has_errors);
    assert_eq!(result.files.len(), 1);
    let summary = &result.files[0];
    assert_eq!(summary.company, "ACME SA");
    assert_eq!(summary.employees, 2);
    assert_eq!(summary.exam_types, 2);
    assert_eq!(summary.status, FileStatus::Written(RenderedWith::Styled));

    let output = dir.path().join("output_sorted_planta_norte.xlsx");
    assert_eq!(summary.output.as_deref(), Some(output.as_path()));
    let mut workbook: Xlsx<_> = open_workbook(&output).expect("open output");
    let range = workbook.worksheet_range("Roster").expect("sheet");
    assert_eq!(
        range.get_value((2, 2)),
        Some(&Data::String("ACME SA".to_string()))
    );
}

#[test]
fn failing_file_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("a_broken.xlsx"), b"not a workbook").expect("write");
    write_export(
        &dir.path().join("b_good.csv"),
        "ACME SA",
        &[("20111111111", "PEREZ JUAN", "RX")],
    );

    let result = run_batch(dir.path(), &ConvertSettings::default()).expect("batch");

    assert!(result.has_errors);
    assert_eq!(result.failed_count(), 1);
    assert_eq!(result.succeeded_count(), 1);
    assert!(result.files[0].status.is_failed());
    assert!(dir.path().join("output_sorted_b_good.xlsx").is_file());
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("planta.csv");
    write_export(&input, "ACME SA", &[("20111111111", "PEREZ JUAN", "RX")]);
    let settings = ConvertSettings {
        dry_run: true,
        ..ConvertSettings::default()
    };

    let summary = convert_file(&input, None, &settings).expect("dry run");

    assert_eq!(summary.status, FileStatus::DryRun);
    assert_eq!(summary.output, None);
    assert_eq!(summary.employees, 1);
    assert!(!dir.path().join("output_sorted_planta.xlsx").exists());
}

#[test]
fn output_dir_and_explicit_output_are_honoured() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("planta.csv");
    write_export(&input, "ACME SA", &[("20111111111", "PEREZ JUAN", "RX")]);

    let settings = ConvertSettings {
        output_dir: Some(dir.path().join("rosters")),
        ..ConvertSettings::default()
    };
    convert_file(&input, None, &settings).expect("output dir");
    assert!(dir.path().join("rosters/output_sorted_planta.xlsx").is_file());

    let explicit = dir.path().join("custom.xlsx");
    let summary = convert_file(&input, Some(&explicit), &settings).expect("explicit");
    assert_eq!(summary.output.as_deref(), Some(explicit.as_path()));
    assert!(explicit.is_file());
}

#[test]
fn export_without_employees_still_produces_a_roster() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("empty.csv");
    write_export(&input, "ACME SA", &[]);

    let summary = convert_file(&input, None, &ConvertSettings::default()).expect("empty export");

    assert_eq!(summary.employees, 0);
    assert_eq!(summary.exam_types, 0);
    assert!(summary.defaulted_fields > 0);
}

#[test]
fn missing_folder_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(run_batch(&dir.path().join("absent"), &ConvertSettings::default()).is_err());
}
