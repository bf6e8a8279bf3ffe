use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{CleanerError, StoreError};
use super::outcome::{RunReport, StageOutcome};
use crate::cleaning::{tokenize_line, TokenizeStats};
use crate::config::CleanerConfig;
use crate::input::{self, LoadedDocument};

/// Load → parse → store pipeline turning a book into one cleaned word per line.
///
/// Stages called out of order (parse before load, store before parse) log an
/// advisory and return `StageOutcome::SkippedNoContent` instead of failing.
/// Only a missing/unreadable input or a failed write is a hard error.
pub struct TextTokenCleaner {
    config: CleanerConfig,
    document: Option<LoadedDocument>,
    tokens: Vec<String>,
    stats: TokenizeStats,
}

impl TextTokenCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        Self {
            config,
            document: None,
            tokens: Vec::new(),
            stats: TokenizeStats::default(),
        }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Lines of the loaded document, empty before `load`.
    pub fn lines(&self) -> &[String] {
        self.document
            .as_ref()
            .map(|doc| doc.lines.as_slice())
            .unwrap_or(&[])
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Read `path` fully, replacing any previously loaded document.
    pub fn load(&mut self, path: &Path) -> Result<(), CleanerError> {
        let document = input::load(path)?;
        tracing::info!(source = %document.source, lines = document.lines.len(), "loaded document");
        self.document = Some(document);
        Ok(())
    }

    /// Rebuild the token list from the loaded lines.
    pub fn parse(&mut self) -> StageOutcome {
        let Some(document) = self.document.as_ref().filter(|doc| !doc.is_empty()) else {
            tracing::warn!("No file content found, try loading first");
            return StageOutcome::SkippedNoContent;
        };

        self.tokens.clear();
        self.stats = TokenizeStats::default();
        for line in &document.lines {
            tokenize_line(line, &mut self.tokens, &mut self.stats);
        }

        tracing::info!(
            words = self.stats.words_seen,
            tokens = self.tokens.len(),
            dropped = self.stats.words_dropped,
            "parsed document"
        );
        StageOutcome::Completed
    }

    /// Exact text `store` writes: every token followed by a newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.tokens.iter().map(|t| t.len() + 1).sum());
        for token in &self.tokens {
            out.push_str(token);
            out.push('\n');
        }
        out
    }

    /// Overwrite `path` with the token list. Leaves `path` untouched when
    /// there is nothing to write.
    pub fn store(&self, path: &Path) -> Result<StageOutcome, StoreError> {
        if self.tokens.is_empty() {
            tracing::warn!("Unable to find cleaned tokens, try parsing first");
            return Ok(StageOutcome::SkippedNoContent);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let write_err = |source: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
        for token in &self.tokens {
            writeln!(writer, "{}", token).map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        tracing::info!(path = %path.display(), tokens = self.tokens.len(), "stored tokens");
        Ok(StageOutcome::Completed)
    }

    /// Run all three stages against the configured paths, printing a notice
    /// before each stage and once finished.
    pub fn run(&mut self) -> Result<RunReport, CleanerError> {
        let input_path = self.config.input_path.clone();
        let output_path = self.config.output_path.clone();

        println!("Loading file content ...");
        self.load(&input_path)?;
        println!("Parsing file content ...");
        let parse = self.parse();
        println!("Storing parsed content ...");
        let store = self.store(&output_path)?;
        println!("Done!");

        Ok(RunReport {
            lines: self.lines().len(),
            words_seen: self.stats.words_seen,
            tokens_kept: self.tokens.len(),
            words_dropped: self.stats.words_dropped,
            parse,
            store,
        })
    }
}
