//! FILENAME: tests/common/mod.rs
//! Fixture helpers for contact merge integration tests.

#![allow(dead_code)]

use engine::InputTable;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPLIT_NAME_HEADERS: [&str; 4] = ["First Name", "Last Name", "Email Address", "Cell Phone"];

pub const BUYER_ATTENDEE_HEADERS: [&str; 6] = [
    "Buyer Name",
    "Buyer Email",
    "Buyer Contact",
    "FULL NAME",
    "E-MAIL ADDRESS",
    "MOBILE NUMBER",
];

/// A cell written into a fixture workbook.
#[derive(Debug, Clone)]
pub enum FixtureCell {
    Text(String),
    Number(f64),
    Blank,
}

impl From<&str> for FixtureCell {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            FixtureCell::Blank
        } else {
            FixtureCell::Text(s.to_string())
        }
    }
}

impl From<f64> for FixtureCell {
    fn from(n: f64) -> Self {
        FixtureCell::Number(n)
    }
}

pub fn text_rows(rows: &[&[&str]]) -> Vec<Vec<FixtureCell>> {
    rows.iter()
        .map(|row| row.iter().map(|v| FixtureCell::from(*v)).collect())
        .collect()
}

/// Temporary input directory populated with fixture workbooks.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("combined_output.xlsx")
    }

    /// Write a single-sheet workbook with a header row and data rows.
    pub fn write_workbook(&self, name: &str, headers: &[&str], rows: &[Vec<FixtureCell>]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header).unwrap();
        }
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let (r, c) = (r as u32 + 1, c as u16);
                match cell {
                    FixtureCell::Text(s) => {
                        worksheet.write_string(r, c, s.as_str()).unwrap();
                    }
                    FixtureCell::Number(n) => {
                        worksheet.write_number(r, c, *n).unwrap();
                    }
                    FixtureCell::Blank => {}
                }
            }
        }

        workbook.save(&path).unwrap();
        path
    }

    /// Copy a checked-in fixture into the input directory.
    pub fn copy_fixture(&self, fixture: &str, name: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::copy(fixture_path(fixture), &path).unwrap();
        path
    }

    pub fn write_raw(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    /// Read back the combined workbook as (name, email, phone) tuples.
    pub fn read_output(&self) -> (InputTable, Vec<(String, String, String)>) {
        let table = persistence::load_table(&self.output_path()).unwrap();
        let rows = (0..table.row_count())
            .map(|r| {
                (
                    table.cell_text(r, Some(0)),
                    table.cell_text(r, Some(1)),
                    table.cell_text(r, Some(2)),
                )
            })
            .collect();
        (table, rows)
    }
}

/// Path of a checked-in workbook under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

pub fn contact(name: &str, email: &str, phone: &str) -> (String, String, String) {
    (name.to_string(), email.to_string(), phone.to_string())
}
