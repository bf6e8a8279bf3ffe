// Paths for one cleaning run, defaulting to the bundled book assets

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "assets/books/illustration-of-today-english.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "assets/books/illustration-of-today-parsed-english.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    /// Text file to read
    pub input_path: PathBuf,

    /// Destination for the cleaned tokens, overwritten on every run
    pub output_path: PathBuf,
}

impl CleanerConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the default config points at the bundled book assets.
    #[test]
    fn test_default_points_at_book_assets() {
        let config = CleanerConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert!(config.input_path.starts_with("assets/books"));
    }

    #[test]
    fn test_new_accepts_str_and_pathbuf() {
        let config = CleanerConfig::new("in.txt", PathBuf::from("out.txt"));
        assert_eq!(config.input_path, PathBuf::from("in.txt"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }
}
