//! Aggregated employee record.

use serde::{Deserialize, Serialize};

/// One employee, keyed by identity number.
///
/// The display name is the first non-blank one seen. Exams keep first-seen order and
/// never repeat (trimmed, case-sensitive equality).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub identity_number: String,
    pub name: String,
    exams: Vec<String>,
}

impl Patient {
    pub fn new(identity_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            identity_number: identity_number.into(),
            name: name.into(),
            exams: Vec::new(),
        }
    }

    pub fn exams(&self) -> &[String] {
        &self.exams
    }

    /// Records an exam; returns false for blank or already-present exams.
    pub fn add_exam(&mut self, exam: &str) -> bool {
        let exam = exam.trim();
        if exam.is_empty() || self.exams.iter().any(|known| known == exam) {
            return false;
        }
        self.exams.push(exam.to_string());
        true
    }

    /// Presence test used for roster marks: both sides trimmed, case kept.
    pub fn has_exam(&self, exam: &str) -> bool {
        let exam = exam.trim();
        self.exams.iter().any(|known| known.trim() == exam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exams_dedupe_on_trimmed_text() {
        let mut patient = Patient::new("20111222333", "LOPEZ ANA");
        assert!(patient.add_exam("AUDIOMETRIA"));
        assert!(!patient.add_exam("  AUDIOMETRIA "));
        assert!(!patient.add_exam("   "));
        assert!(patient.add_exam("audiometria"));
        assert_eq!(patient.exams(), ["AUDIOMETRIA", "audiometria"]);
    }

    #[test]
    fn presence_is_case_sensitive() {
        let mut patient = Patient::new("20111222333", "LOPEZ ANA");
        patient.add_exam("RX DE TORAX");
        assert!(patient.has_exam(" RX DE TORAX "));
        assert!(!patient.has_exam("rx de torax"));
    }
}
