//! Deterministic ordering of patients and exam columns.

use std::collections::HashMap;

use crate::aggregate::AggregatedPatients;

/// Patients in roster order with their 1-based patient numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientOrder {
    ordered: Vec<String>,
    numbers: HashMap<String, usize>,
}

impl PatientOrder {
    /// Sorts by uppercased display name; ties keep first-seen order.
    pub fn from_patients(patients: &AggregatedPatients) -> Self {
        let mut ordered: Vec<(String, String)> = patients
            .patients()
            .iter()
            .map(|patient| (patient.name.to_uppercase(), patient.identity_number.clone()))
            .collect();
        // Stable: duplicate names must not reorder between runs.
        ordered.sort_by(|a, b| a.0.cmp(&b.0));
        let ordered: Vec<String> = ordered.into_iter().map(|(_, identity)| identity).collect();
        let numbers = ordered
            .iter()
            .enumerate()
            .map(|(position, identity)| (identity.clone(), position + 1))
            .collect();
        Self { ordered, numbers }
    }

    pub fn identity_numbers(&self) -> &[String] {
        &self.ordered
    }

    pub fn number_of(&self, identity_number: &str) -> Option<usize> {
        self.numbers.get(identity_number).copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Number of patients who underwent one exam type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamCount {
    pub exam: String,
    pub count: usize,
}

/// Distinct exam types in first-seen order with their patient counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamTally {
    entries: Vec<ExamCount>,
}

impl ExamTally {
    /// Counts each exam once per patient that has it.
    pub fn from_patients(patients: &AggregatedPatients) -> Self {
        let mut entries: Vec<ExamCount> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for patient in patients.patients() {
            for exam in patient.exams() {
                let exam = exam.trim();
                if exam.is_empty() {
                    continue;
                }
                match positions.get(exam) {
                    Some(position) => entries[*position].count += 1,
                    None => {
                        positions.insert(exam.to_string(), entries.len());
                        entries.push(ExamCount {
                            exam: exam.to_string(),
                            count: 1,
                        });
                    }
                }
            }
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[ExamCount] {
        &self.entries
    }

    pub fn exam_types(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.exam.clone()).collect()
    }

    pub fn count_of(&self, exam: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|entry| entry.exam == exam)
            .map(|entry| entry.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Orders exam columns: preferred fragments first, then the rest alphabetically.
///
/// For each preferred fragment, every remaining exam whose uppercase form
/// contains the fragment's uppercase form is moved to the output, in the
/// order of `exams`. An exam matching several fragments lands under the
/// first one.
pub fn order_exams(exams: &[String], preferred: &[String]) -> Vec<String> {
    let mut remaining: Vec<String> = exams.to_vec();
    let mut ordered = Vec::with_capacity(remaining.len());
    for label in preferred {
        let needle = label.to_uppercase();
        let snapshot = remaining.clone();
        let (matched, rest): (Vec<String>, Vec<String>) = snapshot
            .into_iter()
            .partition(|exam| exam.to_uppercase().contains(&needle));
        ordered.extend(matched);
        remaining = rest;
    }
    remaining.sort();
    ordered.extend(remaining);
    ordered
}
