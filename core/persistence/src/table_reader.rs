// FILENAME: core\persistence\src\table_reader.rs

use crate::PersistenceError;
use calamine::{open_workbook_auto, Data, Reader};
use engine::{CellValue, InputTable};
use std::path::Path;

/// Loads the first worksheet of an `.xls` or `.xlsx` file.
/// The first row of the used range is the header; every later row is data.
pub fn load_table(path: &Path) -> Result<InputTable, PersistenceError> {
    let mut workbook = open_workbook_auto(path)?;
    let sheet_names = workbook.sheet_names().to_vec();

    let first_sheet = sheet_names.first().ok_or_else(|| {
        PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
    })?;

    let range = workbook.worksheet_range(first_sheet)?;
    log::debug!(
        "read sheet '{}' from {} ({:?} cells)",
        first_sheet,
        path.display(),
        range.get_size()
    );

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(|cell| convert_cell(cell).to_text()).collect(),
        None => Vec::new(),
    };

    let data = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    Ok(InputTable::new(&headers, data))
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
