//! FILENAME: core/engine/src/outcome.rs
//! PURPOSE: Reasons a single input file is left out of the combined output.
//! CONTEXT: None of these abort a batch. They are returned per file and
//! reported, then processing moves on to the next file.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkipReason {
    #[error("temporary file")]
    TemporaryFile,

    #[error("unsupported file type")]
    UnsupportedExtension(Option<String>),

    #[error("missing required columns")]
    UnrecognizedLayout { columns: Vec<String> },

    #[error("{0}")]
    ReadFailure(String),
}

impl SkipReason {
    pub fn read_failure(err: impl std::fmt::Display) -> Self {
        SkipReason::ReadFailure(err.to_string())
    }
}
