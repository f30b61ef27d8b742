//! Per-row and per-field outcomes.
//!
//! Malformed rows and unreadable metadata cells are ordinary results of a
//! scan, not errors: they are counted and logged, and never abort a run.

use std::fmt;

/// Why a raw row did not contribute to the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    /// Row is narrower than the configured patient columns.
    MissingColumns,
    /// Identity-number cell is empty or blank.
    MissingIdentity,
    /// Identity-number cell holds the column's header label.
    HeaderLabel,
    /// Identity number is too short to be real.
    IdentityTooShort,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingColumns => "missing columns",
            SkipReason::MissingIdentity => "missing identity number",
            SkipReason::HeaderLabel => "header label",
            SkipReason::IdentityTooShort => "identity number too short",
        };
        f.write_str(text)
    }
}

/// Effect of one raw row on the aggregated patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// First row for this identity number.
    NewPatient,
    /// Known identity, new exam recorded.
    ExamAdded,
    /// Known identity, nothing new (blank or repeated exam).
    Unchanged,
    Skipped(SkipReason),
}

/// Why a metadata field fell back to an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultReason {
    NoDataRows,
    ColumnOutOfRange { column: usize, width: usize },
    BlankCell,
}

/// A metadata field read from the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Value(String),
    Defaulted(DefaultReason),
}

impl FieldValue {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, FieldValue::Defaulted(_))
    }

    /// The value, or an empty string when defaulted.
    pub fn into_string(self) -> String {
        match self {
            FieldValue::Value(value) => value,
            FieldValue::Defaulted(_) => String::new(),
        }
    }
}
