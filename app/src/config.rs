//! FILENAME: app/src/config.rs
// PURPOSE: Command-line configuration.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Name of the combined workbook written into the input directory.
pub const DEFAULT_OUTPUT_NAME: &str = "combined_output.xlsx";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "contact-merge",
    about = "Combine exported contact list workbooks into one Name/Email/Phone sheet"
)]
pub struct Config {
    /// Directory holding the .xls/.xlsx exports (not searched recursively).
    #[arg(default_value = ".")]
    pub input_dir: PathBuf,

    /// File name of the combined workbook, created inside INPUT_DIR.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_NAME)]
    pub output: String,

    /// Also append every log line to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print debug lines.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Config {
    pub fn new(input_dir: impl AsRef<Path>) -> Self {
        Config {
            input_dir: input_dir.as_ref().to_path_buf(),
            output: DEFAULT_OUTPUT_NAME.to_string(),
            log_file: None,
            verbose: false,
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.input_dir.join(&self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["contact-merge"]);
        assert_eq!(config.input_dir, PathBuf::from("."));
        assert_eq!(config.output_path(), Path::new(".").join("combined_output.xlsx"));
        assert!(config.log_file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_arguments() {
        let config = Config::parse_from([
            "contact-merge",
            "exports/ipoh",
            "--output",
            "merged.xlsx",
            "--log-file",
            "merge.log",
            "-v",
        ]);
        assert_eq!(config.output_path(), Path::new("exports/ipoh").join("merged.xlsx"));
        assert_eq!(config.log_file, Some(PathBuf::from("merge.log")));
        assert!(config.verbose);
    }
}
