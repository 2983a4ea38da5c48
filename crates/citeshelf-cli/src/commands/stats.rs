//! Stats command implementation.

use crate::error::Result;
use crate::output::Formatter;
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;

/// Execute the stats command.
pub fn execute_stats(store: &CitationStore, formatter: &Formatter) -> Result<String> {
    formatter.format_statistics(&store.get_statistics())
}
