//! FILENAME: core/engine/src/source.rs
//! PURPOSE: Decides from a file name alone whether it is worth opening.

use crate::outcome::SkipReason;
use std::path::Path;

/// Prefix office suites give lock files for documents currently open.
pub const TEMP_FILE_MARKER: &str = "~$";

/// Extensions (lowercase, no dot) of the workbook formats that can be read.
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

pub fn is_temporary(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(TEMP_FILE_MARKER))
        .unwrap_or(false)
}

/// The supported extension of `path`, compared ASCII case-insensitively.
pub fn supported_extension(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    SUPPORTED_EXTENSIONS
        .iter()
        .copied()
        .find(|supported| ext.eq_ignore_ascii_case(supported))
}

/// Temporary files are rejected before the extension is even looked at.
pub fn check_source(path: &Path) -> Result<&'static str, SkipReason> {
    if is_temporary(path) {
        return Err(SkipReason::TemporaryFile);
    }
    supported_extension(path).ok_or_else(|| {
        SkipReason::UnsupportedExtension(
            path.extension().and_then(|e| e.to_str()).map(str::to_string),
        )
    })
}
