//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{ContactRow, OUTPUT_HEADERS, PHONE_COLUMN};
use rust_xlsxwriter::{Format, FormatBorder, Workbook as XlsxWorkbook};
use std::path::Path;

/// Index of Excel's built-in "Text" number format (`@`).
pub const TEXT_NUM_FORMAT_INDEX: u8 = 49;

const COLUMN_WIDTHS: [f64; 3] = [30.0, 34.0, 18.0];

/// Writes contacts to a single-sheet workbook with a
/// Name / Email / Phone Number header. Every phone cell is stored as a string
/// and carries the text number format so Excel keeps leading zeros.
pub fn save_contacts(rows: &[ContactRow], path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();
    let worksheet = xlsx.add_worksheet();

    let header_format = Format::new().set_bold().set_border(FormatBorder::Thin);
    let text_format = Format::new().set_num_format_index(TEXT_NUM_FORMAT_INDEX);

    for (col, (header, width)) in OUTPUT_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        worksheet.set_column_width(col as u16, width)?;
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (idx, contact) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        for (col, value) in contact.fields().iter().enumerate() {
            let col = col as u16;
            if col == PHONE_COLUMN {
                worksheet.write_string_with_format(row, col, *value, &text_format)?;
            } else if !value.is_empty() {
                worksheet.write_string(row, col, *value)?;
            }
        }
    }

    xlsx.save(path)?;
    log::debug!("wrote {} contact rows to {}", rows.len(), path.display());
    Ok(())
}
