//! FILENAME: app/src/main.rs
// PURPOSE: Command-line entry point.
// FORMAT: seq|level|category|message

use clap::Parser;
use contact_merge_lib::{init_log_file, logging, run, Config};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    logging::init(config.verbose);
    if let Some(path) = &config.log_file {
        init_log_file(path).map_err(anyhow::Error::msg)?;
    }

    run(&config)?;
    Ok(())
}
