//! Show command implementation.

use crate::cli::ShowArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;

/// Execute the show command.
pub fn execute_show(args: &ShowArgs, store: &CitationStore, formatter: &Formatter) -> Result<String> {
    let citation = store
        .get_citation_by_id(&args.id)
        .ok_or_else(|| CliError::NotFound(args.id.clone()))?;
    formatter.format_citation_detail(citation)
}
