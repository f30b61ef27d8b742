//! Configuration for reading the export and shaping the roster.
//!
//! Column positions are a contract with the exporting system; they are not
//! inferred from header labels. Every struct deserializes with defaults so a
//! config file only needs the values it changes.

use serde::{Deserialize, Serialize};

use crate::company::CompanyField;
use crate::error::{Result, RosterError};

/// Exam label fragments that lead the column order, in priority order.
pub const DEFAULT_PREFERRED_EXAMS: [&str; 7] = [
    "EXAMEN CLINICO",
    "AUDIOMETRIA",
    "ESPIROMETRIA",
    "CUESTIONARIO OSTEOARTICULAR COLUMNA LUMBOSACRA",
    "CUESTIONARIO DE SEGMENTOS COMPROMETIDOS",
    "RX",
    "RX DE TORAX",
];

/// Header label of the identity-number column in the export.
pub const IDENTITY_HEADER_LABEL: &str = "CUIL";

pub const DEFAULT_PRESENCE_MARK: &str = "X";

/// Identity numbers shorter than this are treated as corrupted values.
pub const MIN_IDENTITY_LEN: usize = 6;

/// 0-based positions of the per-exam fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientColumns {
    pub identity_number: usize,
    pub name: usize,
    pub exam: usize,
}

impl Default for PatientColumns {
    fn default() -> Self {
        Self {
            identity_number: 2,
            name: 15,
            exam: 4,
        }
    }
}

impl PatientColumns {
    /// Smallest row width that holds all three fields.
    pub fn required_width(&self) -> usize {
        self.identity_number.max(self.name).max(self.exam) + 1
    }
}

/// 0-based positions of the company fields in the first data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataColumns {
    pub name: usize,
    pub tax_id: usize,
    pub contract: usize,
    pub address: usize,
    pub locality: usize,
    pub province: usize,
    pub phone: usize,
    pub email: usize,
}

impl Default for MetadataColumns {
    fn default() -> Self {
        Self {
            name: 7,
            tax_id: 1,
            contract: 6,
            address: 9,
            locality: 16,
            province: 11,
            phone: 14,
            email: 8,
        }
    }
}

impl MetadataColumns {
    pub fn column_for(&self, field: CompanyField) -> usize {
        match field {
            CompanyField::Name => self.name,
            CompanyField::TaxId => self.tax_id,
            CompanyField::Contract => self.contract,
            CompanyField::Address => self.address,
            CompanyField::Locality => self.locality,
            CompanyField::Province => self.province,
            CompanyField::Phone => self.phone,
            CompanyField::Email => self.email,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    pub patients: PatientColumns,
    pub metadata: MetadataColumns,
}

/// Options for one roster run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterOptions {
    pub layout: SourceLayout,
    /// Exam label fragments matched case-insensitively as substrings.
    pub preferred_exams: Vec<String>,
    pub identity_header_label: String,
    pub presence_mark: String,
    pub min_identity_len: usize,
}

impl Default for RosterOptions {
    fn default() -> Self {
        Self {
            layout: SourceLayout::default(),
            preferred_exams: DEFAULT_PREFERRED_EXAMS
                .iter()
                .map(|label| (*label).to_string())
                .collect(),
            identity_header_label: IDENTITY_HEADER_LABEL.to_string(),
            presence_mark: DEFAULT_PRESENCE_MARK.to_string(),
            min_identity_len: MIN_IDENTITY_LEN,
        }
    }
}

impl RosterOptions {
    #[must_use]
    pub fn with_preferred_exams<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_exams = labels.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: SourceLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_min_identity_len(mut self, len: usize) -> Self {
        self.min_identity_len = len;
        self
    }

    #[must_use]
    pub fn with_presence_mark(mut self, mark: impl Into<String>) -> Self {
        self.presence_mark = mark.into();
        self
    }

    /// Rejects option sets that would produce a misleading roster.
    pub fn validate(&self) -> Result<()> {
        if self.presence_mark.trim().is_empty() {
            return Err(RosterError::InvalidOptions(
                "presence mark must not be blank".to_string(),
            ));
        }
        // A blank fragment matches every exam and would swallow the ordering.
        if let Some(position) = self
            .preferred_exams
            .iter()
            .position(|label| label.trim().is_empty())
        {
            return Err(RosterError::InvalidOptions(format!(
                "preferred exam #{} is blank",
                position + 1
            )));
        }
        Ok(())
    }
}
