//! Domains command implementation.

use crate::error::Result;
use crate::output::{DomainSummary, Formatter};
use citeshelf_domain::CitationCatalog;
use citeshelf_store::CitationStore;

/// Execute the domains command.
pub fn execute_domains(store: &CitationStore, formatter: &Formatter) -> Result<String> {
    let summaries: Vec<DomainSummary<'_>> = store
        .get_unique_domains()
        .into_iter()
        .map(|domain| DomainSummary {
            domain,
            count: store.get_citations_by_domain(domain).len(),
            description: store.get_domain_description(domain),
        })
        .collect();

    formatter.format_domains(&summaries)
}
