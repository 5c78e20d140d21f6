//! FILENAME: core/persistence/src/lib.rs
//! Contact Merge Persistence Module
//!
//! Reads input workbooks (`.xls` and `.xlsx`) into `InputTable`s and writes
//! the combined contact list back out as `.xlsx`.

mod error;
mod table_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use table_reader::load_table;
pub use xlsx_writer::{save_contacts, TEXT_NUM_FORMAT_INDEX};
