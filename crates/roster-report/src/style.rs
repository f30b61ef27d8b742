//! Formats and column sizes of the styled roster.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder};

/// Width of the `Id` column.
pub const ID_COLUMN_WIDTH: f64 = 4.86;
/// Width of the `Employee` column before autofit.
pub const EMPLOYEE_COLUMN_WIDTH: f64 = 53.0;
/// Width of the `IdentityNumber` column before autofit.
pub const IDENTITY_COLUMN_WIDTH: f64 = 13.29;
/// Width of each exam column.
pub const EXAM_COLUMN_WIDTH: f64 = 10.57;
/// Header row height; exam titles are rotated and need the room.
pub const HEADER_ROW_HEIGHT: f64 = 120.0;

/// `Employee` and `IdentityNumber` widths pinned after autofit.
pub const AUTOFIT_EMPLOYEE_WIDTH: f64 = 38.0;
pub const AUTOFIT_IDENTITY_WIDTH: f64 = 11.0;

/// Cell formats used by [`crate::StyledXlsxRenderer`].
#[derive(Debug, Clone)]
pub struct RosterFormats {
    pub metadata_label: Format,
    pub metadata_value: Format,
    pub header: Format,
    pub exam_header: Format,
    pub body: Format,
    pub mark: Format,
}

impl Default for RosterFormats {
    fn default() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        Self {
            metadata_label: Format::new()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            metadata_value: Format::new()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter),
            header: bordered
                .clone()
                .set_bold()
                .set_text_wrap()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::Bottom),
            exam_header: bordered
                .clone()
                .set_bold()
                .set_text_wrap()
                .set_rotation(90)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::Bottom),
            body: bordered.clone(),
            mark: bordered
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
        }
    }
}
