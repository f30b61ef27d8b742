//! The assembled roster grid handed to renderers.

use std::ops::Range;

pub const ID_HEADER: &str = "Id";
pub const EMPLOYEE_HEADER: &str = "Employee";
pub const IDENTITY_NUMBER_HEADER: &str = "IdentityNumber";

/// Columns preceding the exam columns (`Id`, `Employee`, `IdentityNumber`).
pub const FIXED_COLUMNS: usize = 3;

/// An output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Blank,
    Text(String),
    Number(f64),
}

impl GridCell {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            GridCell::Blank
        } else {
            GridCell::Text(value)
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, GridCell::Blank)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            GridCell::Text(value) => Some(value),
            GridCell::Blank | GridCell::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            GridCell::Number(value) => Some(*value),
            GridCell::Blank | GridCell::Text(_) => None,
        }
    }
}

/// Row ranges of each grid section, used by renderers to pick formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSections {
    pub metadata: Range<usize>,
    pub header_row: usize,
    pub patients: Range<usize>,
    pub tally: Range<usize>,
}

/// Finalized roster: metadata block, header, patient rows, exam tally.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputGrid {
    rows: Vec<Vec<GridCell>>,
    sections: GridSections,
}

impl OutputGrid {
    pub fn new(rows: Vec<Vec<GridCell>>, sections: GridSections) -> Self {
        Self { rows, sections }
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn sections(&self) -> &GridSections {
        &self.sections
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.rows.get(row)?.get(column)
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn header(&self) -> &[GridCell] {
        self.rows
            .get(self.sections.header_row)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Exam column titles in column order.
    pub fn exam_columns(&self) -> Vec<&str> {
        self.header()
            .iter()
            .skip(FIXED_COLUMNS)
            .filter_map(GridCell::as_text)
            .collect()
    }

    pub fn patient_rows(&self) -> &[Vec<GridCell>] {
        self.rows
            .get(self.sections.patients.clone())
            .unwrap_or_default()
    }

    pub fn tally_rows(&self) -> &[Vec<GridCell>] {
        self.rows.get(self.sections.tally.clone()).unwrap_or_default()
    }
}
