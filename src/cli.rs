use clap::Parser;
use std::path::PathBuf;

use crate::config::{CleanerConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Strip punctuation from a book and write its words one per line
#[derive(Parser, Debug)]
#[command(name = "book-tokens", version, about, long_about = None)]
pub struct Cli {
    /// Text file to clean
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// File to write the cleaned words to
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log per-stage details to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn into_config(self) -> CleanerConfig {
        CleanerConfig::new(self.input, self.output)
    }

    /// Log directive used when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "book_tokens=info",
            1 => "book_tokens=debug",
            _ => "book_tokens=trace",
        }
    }
}
