//! FILENAME: core/engine/src/normalizer.rs
//! PURPOSE: Turns one input table into normalized Name/Email/Phone rows.
//! CONTEXT: The layout is detected from the header, then every data row is
//! mapped. Missing cells become empty strings; rows are never dropped, even
//! when every contact field in them is blank.

use crate::contact::ContactRow;
use crate::layout::*;
use crate::outcome::SkipReason;
use crate::table::InputTable;

/// Rows extracted from one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub layout: Layout,
    pub rows: Vec<ContactRow>,
}

impl Normalized {
    /// Rows copied from the table. For buyer/attendee sheets this counts the
    /// buyer and attendee contacts separately.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Per-file result. A skipped file contributes no rows.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Copied(Normalized),
    Skipped(SkipReason),
}

impl FileOutcome {
    pub fn row_count(&self) -> usize {
        match self {
            FileOutcome::Copied(normalized) => normalized.row_count(),
            FileOutcome::Skipped(_) => 0,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, FileOutcome::Copied(_))
    }
}

impl From<Result<Normalized, SkipReason>> for FileOutcome {
    fn from(result: Result<Normalized, SkipReason>) -> Self {
        match result {
            Ok(normalized) => FileOutcome::Copied(normalized),
            Err(reason) => FileOutcome::Skipped(reason),
        }
    }
}

pub fn normalize(table: &InputTable) -> Result<Normalized, SkipReason> {
    let layout = Layout::detect(table).ok_or_else(|| SkipReason::UnrecognizedLayout {
        columns: table.headers().to_vec(),
    })?;

    let rows = match layout {
        Layout::SplitName => split_name_rows(table),
        Layout::BuyerAttendee => buyer_attendee_rows(table),
    };
    debug_assert_eq!(rows.len(), table.row_count() * layout.rows_per_record());

    Ok(Normalized { layout, rows })
}

fn split_name_rows(table: &InputTable) -> Vec<ContactRow> {
    let first = table.column_index(FIRST_NAME);
    let last = table.column_index(LAST_NAME);
    let email = table.column_index(EMAIL_ADDRESS);
    let phone = table.column_index(CELL_PHONE);

    (0..table.row_count())
        .map(|row| {
            let name = format!(
                "{} {}",
                table.cell_text(row, first).trim(),
                table.cell_text(row, last).trim()
            );
            ContactRow::new(name, table.cell_text(row, email), table.cell_text(row, phone))
        })
        .collect()
}

/// All buyer contacts first, then all attendee contacts.
fn buyer_attendee_rows(table: &InputTable) -> Vec<ContactRow> {
    let groups = [
        [BUYER_NAME, BUYER_EMAIL, BUYER_CONTACT],
        [FULL_NAME, ATTENDEE_EMAIL, MOBILE_NUMBER],
    ];

    let mut rows = Vec::with_capacity(table.row_count() * groups.len());
    for [name, email, phone] in groups {
        let (name, email, phone) = (
            table.column_index(name),
            table.column_index(email),
            table.column_index(phone),
        );
        rows.extend((0..table.row_count()).map(|row| {
            ContactRow::new(
                table.cell_text(row, name),
                table.cell_text(row, email),
                table.cell_text(row, phone),
            )
        }));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellValue;

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::text(*v)).collect()
    }

    #[test]
    fn test_split_name_rows() {
        let table = InputTable::new(
            &SPLIT_NAME_COLUMNS,
            vec![
                text_row(&[" Jon ", "Doe", "jon@x.com", "0123"]),
                vec![
                    CellValue::text("Ann"),
                    CellValue::Empty,
                    CellValue::text("ann@x.com"),
                    CellValue::Number(60123456789.0),
                ],
            ],
        );

        let normalized = normalize(&table).unwrap();
        assert_eq!(normalized.layout, Layout::SplitName);
        assert_eq!(normalized.row_count(), 2);
        assert_eq!(normalized.row_count(), table.row_count() * normalized.layout.rows_per_record());
        assert_eq!(normalized.rows[0], ContactRow::new("Jon Doe", "jon@x.com", "0123"));
        assert_eq!(normalized.rows[1], ContactRow::new("Ann ", "ann@x.com", "60123456789"));
    }

    #[test]
    fn test_split_name_blank_row_is_kept() {
        let table = InputTable::new(&SPLIT_NAME_COLUMNS, vec![Vec::new()]);
        let normalized = normalize(&table).unwrap();
        assert_eq!(normalized.rows, vec![ContactRow::new(" ", "", "")]);
    }

    #[test]
    fn test_buyer_rows_precede_attendee_rows() {
        let table = InputTable::new(
            &BUYER_ATTENDEE_COLUMNS,
            vec![
                text_row(&["B1", "b1@x.com", "0789", "F1", "f1@x.com", "0999"]),
                text_row(&["B2", "b2@x.com", "0111", "F2", "f2@x.com", "0222"]),
            ],
        );

        let normalized = normalize(&table).unwrap();
        assert_eq!(normalized.layout, Layout::BuyerAttendee);
        assert_eq!(normalized.row_count(), 4);
        assert_eq!(normalized.row_count(), table.row_count() * normalized.layout.rows_per_record());
        let names: Vec<&str> = normalized.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B1", "B2", "F1", "F2"]);
        assert_eq!(normalized.rows[3].phone, "0222");
    }

    #[test]
    fn test_buyer_attendee_blank_attendee_still_emitted() {
        let table = InputTable::new(
            &BUYER_ATTENDEE_COLUMNS,
            vec![text_row(&["B1", "b1@x.com", "0789"])],
        );
        let normalized = normalize(&table).unwrap();
        assert_eq!(normalized.rows[1], ContactRow::default());
    }

    #[test]
    fn test_unrecognized_layout_reports_columns() {
        let table = InputTable::new(&[" Name ", "Phone"], vec![text_row(&["a", "1"])]);
        let outcome = FileOutcome::from(normalize(&table));
        assert_eq!(outcome.row_count(), 0);
        assert_eq!(
            outcome,
            FileOutcome::Skipped(SkipReason::UnrecognizedLayout {
                columns: vec!["Name".to_string(), "Phone".to_string()],
            })
        );
    }

    #[test]
    fn test_empty_table_with_known_header() {
        let table = InputTable::new(&SPLIT_NAME_COLUMNS, Vec::new());
        let outcome = FileOutcome::from(normalize(&table));
        assert!(outcome.is_copied());
        assert_eq!(outcome.row_count(), 0);
    }
}
