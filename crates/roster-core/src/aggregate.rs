//! Deduplication of raw exam rows into patients.
//!
//! The export has one row per exam performed. Rows are visited without
//! header interpretation, starting at raw row 1, and folded into one
//! [`Patient`] per identity number.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use roster_model::{
    CellValue, Patient, PatientColumns, RosterOptions, RowOutcome, SkipReason, SourceTable,
};

use crate::privacy::redact_value;

/// Patients keyed by identity number, kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedPatients {
    patients: Vec<Patient>,
    index: HashMap<String, usize>,
}

impl AggregatedPatients {
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    pub fn get(&self, identity_number: &str) -> Option<&Patient> {
        self.index
            .get(identity_number)
            .and_then(|position| self.patients.get(*position))
    }

    /// Patients in first-seen order.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Identity numbers in first-seen order.
    pub fn identity_numbers(&self) -> impl Iterator<Item = &str> {
        self.patients
            .iter()
            .map(|patient| patient.identity_number.as_str())
    }

    /// Folds one valid row into the collection.
    pub fn record(&mut self, identity_number: &str, name: &str, exam: &str) -> RowOutcome {
        if let Some(position) = self.index.get(identity_number) {
            let patient = &mut self.patients[*position];
            // The first non-blank name wins.
            if patient.name.is_empty() && !name.is_empty() {
                patient.name = name.to_string();
            }
            return if patient.add_exam(exam) {
                RowOutcome::ExamAdded
            } else {
                RowOutcome::Unchanged
            };
        }
        let mut patient = Patient::new(identity_number, name);
        patient.add_exam(exam);
        self.index
            .insert(identity_number.to_string(), self.patients.len());
        self.patients.push(patient);
        RowOutcome::NewPatient
    }
}

/// Row counts gathered while aggregating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationStats {
    /// Raw rows visited, header row excluded.
    pub rows_visited: usize,
    pub new_patients: usize,
    pub exams_added: usize,
    pub unchanged: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl AggregationStats {
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    fn count(&mut self, outcome: RowOutcome) {
        match outcome {
            RowOutcome::NewPatient => self.new_patients += 1,
            RowOutcome::ExamAdded => self.exams_added += 1,
            RowOutcome::Unchanged => self.unchanged += 1,
            RowOutcome::Skipped(reason) => *self.skipped.entry(reason).or_insert(0) += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub patients: AggregatedPatients,
    pub stats: AggregationStats,
}

/// The three per-exam fields of one raw row, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub identity_number: String,
    pub name: String,
    pub exam: String,
}

#[derive(Debug, Clone)]
pub struct PatientAggregator<'a> {
    columns: PatientColumns,
    header_label: &'a str,
    min_identity_len: usize,
}

impl<'a> PatientAggregator<'a> {
    pub fn new(options: &'a RosterOptions) -> Self {
        Self {
            columns: options.layout.patients,
            header_label: &options.identity_header_label,
            min_identity_len: options.min_identity_len,
        }
    }

    /// Reads the three fields of a row, or the reason it carries no patient.
    pub fn read_row(&self, row: &[CellValue]) -> Result<RowFields, SkipReason> {
        let field = |column: usize| {
            row.get(column)
                .map(CellValue::trimmed_text)
                .unwrap_or_default()
        };
        let identity_number = field(self.columns.identity_number);
        if identity_number.is_empty() {
            return Err(SkipReason::MissingIdentity);
        }
        if identity_number.to_lowercase() == self.header_label.to_lowercase() {
            return Err(SkipReason::HeaderLabel);
        }
        if identity_number.chars().count() < self.min_identity_len {
            return Err(SkipReason::IdentityTooShort);
        }
        Ok(RowFields {
            identity_number,
            name: field(self.columns.name),
            exam: field(self.columns.exam),
        })
    }

    /// Scans every raw row after row 0.
    pub fn aggregate(&self, table: &SourceTable) -> Aggregation {
        let mut aggregation = Aggregation::default();
        let required = self.columns.required_width();
        let table_too_narrow = table.width() < required;
        if table_too_narrow && table.height() > 1 {
            warn!(
                width = table.width(),
                required, "source is narrower than the patient columns"
            );
        }

        for (index, row) in table.rows().iter().enumerate().skip(1) {
            aggregation.stats.rows_visited += 1;
            let outcome = if table_too_narrow {
                RowOutcome::Skipped(SkipReason::MissingColumns)
            } else {
                match self.read_row(row) {
                    Ok(fields) => aggregation.patients.record(
                        &fields.identity_number,
                        &fields.name,
                        &fields.exam,
                    ),
                    Err(reason) => RowOutcome::Skipped(reason),
                }
            };
            if let RowOutcome::Skipped(reason) = outcome {
                debug!(row = index, %reason, "row skipped");
            }
            aggregation.stats.count(outcome);
        }

        debug!(
            patients = aggregation.patients.len(),
            rows = aggregation.stats.rows_visited,
            skipped = aggregation.stats.skipped_total(),
            "aggregation complete"
        );
        for patient in aggregation.patients.patients().iter().take(5) {
            debug!(
                name = redact_value(&patient.name),
                identity_number = redact_value(&patient.identity_number),
                exams = patient.exams().len(),
                "aggregated patient"
            );
        }
        aggregation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_first_name() {
        let mut patients = AggregatedPatients::default();
        assert_eq!(
            patients.record("20111222333", "LOPEZ ANA", "RX"),
            RowOutcome::NewPatient
        );
        assert_eq!(
            patients.record("20111222333", "ANA M. LOPEZ", "AUDIOMETRIA"),
            RowOutcome::ExamAdded
        );
        assert_eq!(
            patients.record("20111222333", "", "RX"),
            RowOutcome::Unchanged
        );
        let patient = patients.get("20111222333").expect("patient");
        assert_eq!(patient.name, "LOPEZ ANA");
        assert_eq!(patient.exams(), ["RX", "AUDIOMETRIA"]);
    }

    #[test]
    fn blank_first_name_is_filled_later() {
        let mut patients = AggregatedPatients::default();
        patients.record("20111222333", "", "RX");
        patients.record("20111222333", "LOPEZ ANA", "RX");
        patients.record("20111222333", "OTRA PERSONA", "RX");
        assert_eq!(patients.get("20111222333").unwrap().name, "LOPEZ ANA");
    }

    #[test]
    fn blank_first_exam_starts_empty() {
        let mut patients = AggregatedPatients::default();
        patients.record("20111222333", "LOPEZ ANA", "");
        assert!(patients.get("20111222333").unwrap().exams().is_empty());
    }

    #[test]
    fn read_row_rejects_header_and_short_identities() {
        let options = RosterOptions::default();
        let aggregator = PatientAggregator::new(&options);
        let row = |identity: &str| {
            let mut cells = vec![CellValue::Empty; 16];
            cells[2] = CellValue::from(identity);
            cells
        };
        assert_eq!(aggregator.read_row(&row("cuil")), Err(SkipReason::HeaderLabel));
        assert_eq!(
            aggregator.read_row(&row("12345")),
            Err(SkipReason::IdentityTooShort)
        );
        assert_eq!(
            aggregator.read_row(&row("  ")),
            Err(SkipReason::MissingIdentity)
        );
        assert!(aggregator.read_row(&row(" 123456 ")).is_ok());
    }

    #[test]
    fn numeric_identity_cells_keep_digits() {
        let options = RosterOptions::default();
        let aggregator = PatientAggregator::new(&options);
        let mut cells = vec![CellValue::Empty; 16];
        cells[2] = CellValue::Number(20111222333.0);
        cells[15] = CellValue::from(" LOPEZ ANA ");
        let fields = aggregator.read_row(&cells).expect("valid row");
        assert_eq!(fields.identity_number, "20111222333");
        assert_eq!(fields.name, "LOPEZ ANA");
        assert_eq!(fields.exam, "");
    }
}
