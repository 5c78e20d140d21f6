//! FILENAME: core/engine/src/table.rs
//! PURPOSE: In-memory form of one input sheet: a header row plus data rows.
//! CONTEXT: Header names are whitespace-trimmed on construction so layout
//! matching never trips over stray spaces exported by other tools.

use crate::cell::CellValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputTable {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl InputTable {
    pub fn new<S: AsRef<str>>(headers: &[S], rows: Vec<Vec<CellValue>>) -> Self {
        InputTable {
            headers: headers.iter().map(|h| h.as_ref().trim().to_string()).collect(),
            rows,
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column with this (trimmed) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.column_index(name).is_some())
    }

    /// Text of a cell; short rows and missing columns read as empty.
    pub fn cell_text(&self, row: usize, col: Option<usize>) -> String {
        col.and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .map(CellValue::to_text)
            .unwrap_or_default()
    }
}
