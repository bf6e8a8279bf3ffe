use std::path::PathBuf;
use thiserror::Error;

use crate::input::LoadError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unable to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Hard failures that abort a pipeline run.
#[derive(Error, Debug)]
pub enum CleanerError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CleanerError {
    /// True for any input that could not be loaded, missing or unreadable.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CleanerError::Load(LoadError::FileNotFound(_) | LoadError::Unreadable { .. })
        )
    }
}
