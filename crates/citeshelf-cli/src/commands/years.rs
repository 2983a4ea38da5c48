//! Years command implementation.

use crate::error::Result;
use crate::output::Formatter;
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;

/// Execute the years command.
pub fn execute_years(store: &CitationStore, formatter: &Formatter) -> Result<String> {
    formatter.format_years(&store.get_unique_years())
}
