//! FILENAME: app/src/lib.rs
// PURPOSE: Library entry point for the contact merge tool.

pub mod combiner;
pub mod config;
pub mod discovery;
pub mod logging;

pub use combiner::{combine_files, process_file, CombineSummary};
pub use config::{Config, DEFAULT_OUTPUT_NAME};
pub use discovery::discover_inputs;
pub use logging::init_log_file;

use anyhow::Context;

/// Discover the workbooks in `config.input_dir` and combine them.
/// Only an unreadable input directory or a failed output write is an error;
/// either one is logged before it is returned.
pub fn run(config: &Config) -> anyhow::Result<CombineSummary> {
    let result = discover_and_combine(config);
    if let Err(err) = &result {
        crate::log_error!("MERGE", "{:#}", err);
    }
    result
}

fn discover_and_combine(config: &Config) -> anyhow::Result<CombineSummary> {
    let output = config.output_path();
    let inputs = discover_inputs(&config.input_dir, &output)
        .with_context(|| format!("failed to read input directory {}", config.input_dir.display()))?;

    crate::log_info!("MERGE", "Found {} candidate files in {}", inputs.len(), config.input_dir.display());

    combine_files(&inputs, &output)
        .with_context(|| format!("failed to write {}", output.display()))
}
