//! Risk factors command implementation.

use crate::error::Result;
use crate::output::Formatter;
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;

/// Execute the risk-factors command.
pub fn execute_risk_factors(store: &CitationStore, formatter: &Formatter) -> Result<String> {
    formatter.format_risk_factors(store.get_risk_factors())
}
