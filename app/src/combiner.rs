//! FILENAME: app/src/combiner.rs
// PURPOSE: Normalize each input workbook and write the combined contact list.
// CONTEXT: Files are handled strictly one after another. A file that cannot
// be used is reported and skipped; it never stops the batch.

use crate::logging::{log_debug, log_enter, log_exit, log_info, log_warn};
use engine::{check_source, normalize, ContactRow, FileOutcome, SkipReason};
use persistence::{load_table, save_contacts, PersistenceError};
use std::path::{Path, PathBuf};

/// What a batch did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombineSummary {
    pub files_copied: usize,
    pub files_skipped: usize,
    pub total_rows: usize,
    /// Set when the combined workbook was written.
    pub output: Option<PathBuf>,
}

/// Reads and normalizes a single file. Never fails: every problem becomes a
/// `FileOutcome::Skipped`.
pub fn process_file(path: &Path) -> FileOutcome {
    let result = check_source(path)
        .and_then(|_| load_table(path).map_err(SkipReason::read_failure))
        .and_then(|table| {
            log_debug!("FILE", "{}: {} data rows, columns {:?}", path.display(), table.row_count(), table.headers());
            normalize(&table)
        });

    let outcome = FileOutcome::from(result);
    report_outcome(path, &outcome);
    outcome
}

fn report_outcome(path: &Path, outcome: &FileOutcome) {
    let file = path.display();
    match outcome {
        FileOutcome::Copied(normalized) => {
            log_info!("FILE", "Copied {} rows from {} ({} layout)", normalized.row_count(), file, normalized.layout.name());
        }
        FileOutcome::Skipped(SkipReason::TemporaryFile) => {
            log_info!("FILE", "Skipping temporary file: {}", file);
        }
        FileOutcome::Skipped(SkipReason::UnrecognizedLayout { columns }) => {
            log_warn!("FILE", "Skipping {}: Missing required columns.", file);
            log_warn!("FILE", "Columns in {}: {:?}", file, columns);
        }
        FileOutcome::Skipped(SkipReason::ReadFailure(message)) => {
            log_warn!("FILE", "Error processing {}: {}", file, message);
        }
        FileOutcome::Skipped(reason) => {
            log_warn!("FILE", "Skipping {}: {}", file, reason);
        }
    }
}

/// Processes `inputs` in order and writes every copied row to `output`.
/// When no file yields rows nothing is written.
pub fn combine_files(inputs: &[PathBuf], output: &Path) -> Result<CombineSummary, PersistenceError> {
    log_enter!("MERGE", "combine_files", "{} candidate files", inputs.len());

    let mut summary = CombineSummary::default();
    let mut combined: Vec<ContactRow> = Vec::new();

    for path in inputs {
        match process_file(path) {
            FileOutcome::Copied(normalized) => {
                summary.files_copied += 1;
                summary.total_rows += normalized.row_count();
                combined.extend(normalized.rows);
            }
            FileOutcome::Skipped(_) => summary.files_skipped += 1,
        }
    }

    if summary.files_copied == 0 {
        log_info!("MERGE", "No valid files to process.");
        log_info!("MERGE", "Files skipped: {}", summary.files_skipped);
        log_exit!("MERGE", "combine_files", "skipped={}", summary.files_skipped);
        return Ok(summary);
    }

    save_contacts(&combined, output)?;
    summary.output = Some(output.to_path_buf());

    log_info!("MERGE", "Combined file saved as {}", output.display());
    log_info!("MERGE", "Files skipped: {}", summary.files_skipped);
    log_info!("MERGE", "Total rows copied: {}", summary.total_rows);
    log_exit!("MERGE", "combine_files", "rows={}", summary.total_rows);

    Ok(summary)
}
