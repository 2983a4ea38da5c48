//! CLI command definitions and argument parsing.

use crate::config::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Citeshelf CLI - Query and export a citation library.
#[derive(Debug, Parser)]
#[command(name = "citeshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset location (file path or http(s) URL)
    #[arg(short, long, global = true, env = "CITESHELF_DATA")]
    pub data: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List citations, optionally filtered
    List(FilterArgs),

    /// Free-text search over titles, authors, syntheses and keywords
    Search(SearchArgs),

    /// Show a single citation
    Show(ShowArgs),

    /// Summary statistics for the library
    Stats,

    /// Domains with counts and descriptions
    Domains,

    /// Distinct publication years
    Years,

    /// Risk factors used for charting
    RiskFactors,

    /// Export citations as text, BibTeX, HTML rows or chart data
    Export(ExportArgs),
}

/// Filters shared by list and export.
#[derive(Debug, Default, Clone, Args)]
pub struct FilterArgs {
    /// Domain code, or "all"
    #[arg(long)]
    pub domain: Option<String>,

    /// First publication year (inclusive)
    #[arg(long)]
    pub from: Option<i32>,

    /// Last publication year (inclusive)
    #[arg(long)]
    pub to: Option<i32>,

    /// Keyword substring (case-insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Exact study type
    #[arg(short, long)]
    pub study_type: Option<String>,

    /// Only citations that report an effect size
    #[arg(long)]
    pub with_effect_sizes: bool,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search text
    pub query: String,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Citation ID
    pub id: String,
}

/// Export target formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Numbered plain-text listing
    Text,
    /// BibTeX entries
    Bibtex,
    /// HTML table rows
    Html,
    /// Chart.js-ready JSON (risk factors and radar profile)
    Chart,
}

impl ExportFormat {
    /// Conventional file name for this export
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportFormat::Text => "citations.txt",
            ExportFormat::Bibtex => "citations.bib",
            ExportFormat::Html => "citations.html",
            ExportFormat::Chart => "charts.json",
        }
    }
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Export format
    #[arg(long = "as", value_enum, default_value = "text")]
    pub export_format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub filter: FilterArgs,
}
