//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;
use tracing::debug;

/// Execute the search command.
pub fn execute_search(args: &SearchArgs, store: &CitationStore, formatter: &Formatter) -> Result<String> {
    if args.query.trim().is_empty() {
        return Err(CliError::InvalidInput("Search query must not be empty".to_string()));
    }

    let hits = store.search_citations(&args.query);
    debug!(query = %args.query, hits = hits.len(), "search");
    formatter.format_citations(&hits)
}
