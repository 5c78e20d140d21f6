//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the contact normalization engine.
//! CONTEXT: Pure data model and transformation logic. No file I/O happens
//! here; readers and writers live in the `persistence` crate.

pub mod cell;
pub mod contact;
pub mod layout;
pub mod normalizer;
pub mod outcome;
pub mod source;
pub mod table;

// Re-export commonly used types at the crate root
pub use cell::CellValue;
pub use contact::{ContactRow, OUTPUT_HEADERS, PHONE_COLUMN};
pub use layout::Layout;
pub use normalizer::{normalize, FileOutcome, Normalized};
pub use outcome::SkipReason;
pub use source::{check_source, is_temporary, supported_extension, SUPPORTED_EXTENSIONS, TEMP_FILE_MARKER};
pub use table::InputTable;
