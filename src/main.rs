use anyhow::Result;
use book_tokens::cli::Cli;
use book_tokens::TextTokenCleaner;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics on stderr; stdout carries only the progress notices.
    // RUST_LOG wins over -v when set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut cleaner = TextTokenCleaner::new(cli.into_config());
    let report = cleaner.run()?;

    tracing::info!(
        lines = report.lines,
        tokens = report.tokens_kept,
        dropped = report.words_dropped,
        wrote_output = report.wrote_output(),
        "run finished"
    );
    Ok(())
}
