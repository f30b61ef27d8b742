//! Positional source cells as read from a spreadsheet export.

use serde::{Deserialize, Serialize};

/// A single cell of the raw export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            CellValue::Number(_) | CellValue::Bool(_) => false,
        }
    }

    /// Text form of the cell, `None` when the cell is empty.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(text) => Some(text.clone()),
            CellValue::Number(value) => Some(format_numeric(*value)),
            CellValue::Bool(value) => Some(if *value { "TRUE" } else { "FALSE" }.to_string()),
        }
    }

    /// Trimmed text form; empty cells become an empty string.
    pub fn trimmed_text(&self) -> String {
        self.to_text()
            .map(|text| text.trim().to_string())
            .unwrap_or_default()
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value.to_string())
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Formats a number the way spreadsheet users read it.
///
/// Integral values drop the fractional part, so identity numbers stored as
/// numeric cells keep their digits (`20123456789.0` becomes `20123456789`).
pub fn format_numeric(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// The raw export as a grid of positional cells.
///
/// Row 0 is the sheet's header row. The same table is consumed two ways:
/// with header interpretation (row 0 are labels, data starts at row 1) and
/// without (every row is visited, row 0 included).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    rows: Vec<Vec<CellValue>>,
}

impl SourceTable {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Builds a table from text rows; empty strings become empty cells.
    pub fn from_text_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| CellValue::from(value.as_ref()))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of raw rows, header row included.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row length.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Raw cell access without header interpretation.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(column)
    }

    /// Number of data rows under header interpretation.
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Cell access under header interpretation (data row 0 is raw row 1).
    pub fn data_cell(&self, data_row: usize, column: usize) -> Option<&CellValue> {
        self.cell(data_row + 1, column)
    }
}
