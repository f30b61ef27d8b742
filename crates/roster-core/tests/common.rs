//! Shared fixtures for roster-core integration tests.

#![allow(dead_code)]

use roster_model::SourceTable;

pub const WIDTH: usize = 17;

/// Header row as exported: identity label at column 2.
pub fn header_row() -> Vec<String> {
    let mut row = vec![String::new(); WIDTH];
    row[1] = "CUIT".to_string();
    row[2] = "CUIL".to_string();
    row[4] = "DESCRIPCION".to_string();
    row[7] = "EMPRESA".to_string();
    row[15] = "APELLIDO Y NOMBRE".to_string();
    row
}

/// One exam row with identity at 2, exam at 4 and name at 15.
pub fn exam_row(identity: &str, name: &str, exam: &str) -> Vec<String> {
    let mut row = vec![String::new(); WIDTH];
    row[2] = identity.to_string();
    row[4] = exam.to_string();
    row[15] = name.to_string();
    row
}

pub fn table(rows: &[(&str, &str, &str)]) -> SourceTable {
    let mut raw = vec![header_row()];
    raw.extend(
        rows.iter()
            .map(|(identity, name, exam)| exam_row(identity, name, exam)),
    );
    SourceTable::from_text_rows(raw)
}
