//! FILENAME: core/engine/src/cell.rs
//! PURPOSE: Defines the value held by a single cell of an input sheet.
//! CONTEXT: Readers convert their native cell types into `CellValue`; the
//! normalizer only ever consumes the text form produced by `to_text`.

/// Raw data within a cell as read from a workbook.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    /// Excel error code such as `#DIV/0!`.
    Error(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Returns the cell rendered as text.
    /// Missing values become the empty string; text is returned untouched so
    /// leading zeros survive.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => number_to_text(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::Error(code) => code.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// Formats a numeric cell the way a phone number should read.
/// Integral values never get a decimal point or scientific notation.
fn number_to_text(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.0}", value);
    }
    value.to_string()
}
