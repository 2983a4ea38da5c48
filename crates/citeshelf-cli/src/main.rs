//! Citeshelf CLI - Command-line interface for a citation library.

use citeshelf_cli::commands;
use citeshelf_cli::config::OutputFormat;
use citeshelf_cli::{Cli, Config, Formatter};
use citeshelf_store::{CitationStore, DataSource};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();
    let no_color = cli.no_color;

    if let Err(e) = run(cli).await {
        let formatter = Formatter::new(OutputFormat::Table, !no_color);
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> citeshelf_cli::Result<()> {
    init_tracing(cli.verbose);

    // Load config (defaults when no file exists)
    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    // Load the dataset
    let location = cli.data.unwrap_or_else(|| config.data_source.clone());
    let source: DataSource = location.parse()?;
    let mut store = CitationStore::new();
    store.load(&source).await?;

    commands::execute(cli.command, &store, &config, &formatter)
}

/// Log to stderr so exports on stdout stay clean.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
