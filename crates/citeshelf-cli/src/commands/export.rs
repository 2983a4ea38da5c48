//! Export command implementation.

use crate::cli::{ExportArgs, ExportFormat};
use crate::commands::list::validate_filter;
use crate::commands::select_citations;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{Local, NaiveDate};
use citeshelf_domain::CitationCatalog;
use citeshelf_present::{export_to_bibtex, export_to_text, render_citation_rows, risk_factor_series};
use citeshelf_store::CitationStore;
use std::fs;
use tracing::info;

/// Execute the export command.
///
/// With `--output` the content is written to that file and a confirmation
/// is returned; otherwise the content itself is returned for stdout.
pub fn execute_export(
    args: &ExportArgs,
    store: &CitationStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let content = render_export(args, store, config, Local::now().date_naive())?;

    match &args.output {
        Some(path) => {
            let path = if path.is_dir() {
                path.join(args.export_format.default_file_name())
            } else {
                path.clone()
            };
            fs::write(&path, &content)?;
            info!(path = %path.display(), bytes = content.len(), "Wrote export");
            Ok(formatter.success(&format!("Exported to {}", path.display())))
        }
        None => Ok(content),
    }
}

/// Render the export content for a fixed generation date.
pub fn render_export(
    args: &ExportArgs,
    store: &CitationStore,
    config: &Config,
    generated_on: NaiveDate,
) -> Result<String> {
    validate_filter(&args.filter)?;
    let citations = select_citations(store, &args.filter);

    let content = match args.export_format {
        ExportFormat::Text => export_to_text(citations, generated_on),
        ExportFormat::Bibtex => export_to_bibtex(citations),
        ExportFormat::Html => render_citation_rows(citations, &config.palette),
        ExportFormat::Chart => {
            let charts = serde_json::json!({
                "riskFactors": risk_factor_series(store.get_risk_factors()),
                "radar": {
                    "label": config.radar.label,
                    "max": config.radar.max,
                    "labels": config.radar.labels(),
                    "values": config.radar.values(),
                },
            });
            serde_json::to_string_pretty(&charts)?
        }
    };

    Ok(content)
}
