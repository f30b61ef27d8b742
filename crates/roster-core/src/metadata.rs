//! Company metadata from fixed positions of the first data row.

use tracing::debug;

use roster_model::{
    CompanyField, CompanyMetadata, DefaultReason, FieldValue, MetadataColumns, SourceTable,
};

/// Extracted metadata plus the fields that fell back to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyExtraction {
    pub metadata: CompanyMetadata,
    pub defaulted: Vec<CompanyField>,
}

/// Reads one company field under header interpretation.
pub fn read_company_field(table: &SourceTable, column: usize) -> FieldValue {
    if table.data_row_count() == 0 {
        return FieldValue::Defaulted(DefaultReason::NoDataRows);
    }
    let width = table.width();
    if column >= width {
        return FieldValue::Defaulted(DefaultReason::ColumnOutOfRange { column, width });
    }
    match table.data_cell(0, column) {
        Some(cell) if !cell.is_blank() => FieldValue::Value(cell.trimmed_text()),
        _ => FieldValue::Defaulted(DefaultReason::BlankCell),
    }
}

/// Reads every company field; unreadable fields become empty strings.
pub fn extract_company_metadata(
    table: &SourceTable,
    columns: &MetadataColumns,
) -> CompanyExtraction {
    let mut extraction = CompanyExtraction::default();
    for field in CompanyField::ALL {
        match read_company_field(table, columns.column_for(field)) {
            FieldValue::Value(value) => extraction.metadata.set(field, value),
            FieldValue::Defaulted(reason) => {
                debug!(field = field.label(), ?reason, "company field defaulted");
                extraction.defaulted.push(field);
            }
        }
    }
    extraction
}
