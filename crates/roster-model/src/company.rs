//! Company metadata carried from the export into the roster header block.

use serde::{Deserialize, Serialize};

/// Organizational fields read from fixed positions of the first data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CompanyField {
    Name,
    TaxId,
    Contract,
    Address,
    Locality,
    Province,
    Phone,
    Email,
}

impl CompanyField {
    pub const ALL: [CompanyField; 8] = [
        CompanyField::Name,
        CompanyField::TaxId,
        CompanyField::Contract,
        CompanyField::Address,
        CompanyField::Locality,
        CompanyField::Province,
        CompanyField::Phone,
        CompanyField::Email,
    ];

    /// Label written next to the value in the roster header block.
    pub fn label(self) -> &'static str {
        match self {
            CompanyField::Name => "Company",
            CompanyField::TaxId => "TaxId",
            CompanyField::Contract => "Contract",
            CompanyField::Address => "Address",
            CompanyField::Locality => "Locality",
            CompanyField::Province => "Province",
            CompanyField::Phone => "Phone",
            CompanyField::Email => "Email",
        }
    }
}

/// Company metadata; every field defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyMetadata {
    pub name: String,
    pub tax_id: String,
    pub contract: String,
    pub address: String,
    pub locality: String,
    pub province: String,
    pub phone: String,
    pub email: String,
}

impl CompanyMetadata {
    pub fn get(&self, field: CompanyField) -> &str {
        match field {
            CompanyField::Name => &self.name,
            CompanyField::TaxId => &self.tax_id,
            CompanyField::Contract => &self.contract,
            CompanyField::Address => &self.address,
            CompanyField::Locality => &self.locality,
            CompanyField::Province => &self.province,
            CompanyField::Phone => &self.phone,
            CompanyField::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: CompanyField, value: String) {
        let slot = match field {
            CompanyField::Name => &mut self.name,
            CompanyField::TaxId => &mut self.tax_id,
            CompanyField::Contract => &mut self.contract,
            CompanyField::Address => &mut self.address,
            CompanyField::Locality => &mut self.locality,
            CompanyField::Province => &mut self.province,
            CompanyField::Phone => &mut self.phone,
            CompanyField::Email => &mut self.email,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        CompanyField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }

    /// Label/value pairs of the roster header block, in output order.
    ///
    /// `Process` and `Contact` are form fields filled in by hand after
    /// export, so they are always blank.
    pub fn header_block(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Process", ""),
            (CompanyField::Name.label(), self.name.as_str()),
            (CompanyField::TaxId.label(), self.tax_id.as_str()),
            (CompanyField::Contract.label(), self.contract.as_str()),
            (CompanyField::Address.label(), self.address.as_str()),
            (CompanyField::Locality.label(), self.locality.as_str()),
            (CompanyField::Province.label(), self.province.as_str()),
            (CompanyField::Phone.label(), self.phone.as_str()),
            ("Contact", ""),
            (CompanyField::Email.label(), self.email.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_block_keeps_form_order() {
        let mut metadata = CompanyMetadata::default();
        metadata.set(CompanyField::Name, "ACME SA".to_string());
        metadata.set(CompanyField::Email, "rrhh@acme.test".to_string());
        let block = metadata.header_block();
        let labels: Vec<&str> = block.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Process", "Company", "TaxId", "Contract", "Address", "Locality", "Province",
                "Phone", "Contact", "Email"
            ]
        );
        assert_eq!(block[1].1, "ACME SA");
        assert_eq!(block[9].1, "rrhh@acme.test");
    }

    #[test]
    fn default_is_empty() {
        assert!(CompanyMetadata::default().is_empty());
    }
}
