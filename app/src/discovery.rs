//! FILENAME: app/src/discovery.rs
// PURPOSE: Find candidate input workbooks in a directory.

use engine::{supported_extension, SUPPORTED_EXTENSIONS};
use std::io;
use std::path::{Path, PathBuf};

/// Lists the workbooks directly inside `dir`: every `.xls` file, then every
/// `.xlsx` file, each group ordered by file name. `exclude` (the output
/// file) is never returned.
pub fn discover_inputs(dir: &Path, exclude: &Path) -> io::Result<Vec<PathBuf>> {
    let excluded_name = exclude.file_name();
    let mut candidates: Vec<(usize, PathBuf)> = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file() {
            continue;
        }
        if exclude.parent() == Some(dir) && path.file_name() == excluded_name {
            continue;
        }
        let Some(ext) = supported_extension(&path) else {
            continue;
        };
        let group = SUPPORTED_EXTENSIONS
            .iter()
            .position(|supported| *supported == ext)
            .unwrap_or(SUPPORTED_EXTENSIONS.len());
        candidates.push((group, path));
    }

    candidates.sort_by(|(ga, a), (gb, b)| ga.cmp(gb).then_with(|| a.file_name().cmp(&b.file_name())));
    Ok(candidates.into_iter().map(|(_, path)| path).collect())
}
