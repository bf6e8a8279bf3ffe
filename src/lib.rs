pub mod cleaning;
pub mod cli;
pub mod config;
pub mod input;
pub mod pipeline;

pub use config::CleanerConfig;
pub use pipeline::{CleanerError, RunReport, StageOutcome, TextTokenCleaner};
