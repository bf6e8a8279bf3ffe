use std::path::PathBuf;
use thiserror::Error;

/// Both variants are the "input not found" hard failure; `Unreadable` keeps
/// the underlying I/O cause.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unable to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered lines of an input file, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub lines: Vec<String>,
    pub source: String,
}

impl LoadedDocument {
    pub fn from_text(text: &str, source: String) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub mod text;

pub use text::load;
