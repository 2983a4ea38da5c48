//! Trait definitions for querying citations
//!
//! The catalog trait defines the read-only query surface. Storage
//! implementations live in other crates and only supply their data.

use crate::statistics::{rounded_mean, DomainCount, Statistics, StudyTypeCount, YearCount};
use crate::{Citation, RiskFactor};
use std::collections::BTreeSet;

/// Domain filter value that matches every citation
pub const ALL_DOMAINS: &str = "all";

/// Read-only queries over a citation collection
///
/// Implemented by the infrastructure layer (citeshelf-store). Every query
/// is a pure function of the data returned by the required methods; none
/// of them mutate anything, and calling one twice yields the same result.
/// Implementors may override a provided method with an indexed version as
/// long as the observable result is identical.
pub trait CitationCatalog {
    /// All citations in document order (empty before a load)
    fn get_all_citations(&self) -> &[Citation];

    /// Description text for a domain code
    fn get_domain_description(&self, domain: &str) -> Option<&str>;

    /// Risk factors for charting
    fn get_risk_factors(&self) -> &[RiskFactor];

    /// Citations in a domain; [`ALL_DOMAINS`] returns the whole collection
    fn get_citations_by_domain(&self, domain: &str) -> Vec<&Citation> {
        if domain == ALL_DOMAINS {
            return self.get_all_citations().iter().collect();
        }
        self.filter_citations(|c| c.domain == domain)
    }

    /// Citations published between `start` and `end`, both inclusive
    ///
    /// No check is made that `start <= end`; an inverted range is simply
    /// empty. Citations without a year never match.
    fn get_citations_by_year_range(&self, start: i32, end: i32) -> Vec<&Citation> {
        self.filter_citations(|c| c.year.is_some_and(|y| y >= start && y <= end))
    }

    /// Citations with a keyword containing `keyword`, ignoring case
    fn get_citations_by_keyword(&self, keyword: &str) -> Vec<&Citation> {
        let needle = keyword.to_lowercase();
        self.filter_citations(|c| c.keywords.iter().any(|k| k.to_lowercase().contains(&needle)))
    }

    /// Free-text search over title, authors, synthesis and keywords
    ///
    /// Matching is a case-insensitive substring test against the fields
    /// joined by spaces, so a query can span the end of one field and the
    /// start of the next.
    fn search_citations(&self, query: &str) -> Vec<&Citation> {
        let needle = query.to_lowercase();
        self.filter_citations(|c| c.search_text().contains(&needle))
    }

    /// Citations that report an effect size
    fn get_citations_with_effect_sizes(&self) -> Vec<&Citation> {
        self.filter_citations(Citation::has_effect_size)
    }

    /// Single citation lookup; the first match wins
    fn get_citation_by_id(&self, id: &str) -> Option<&Citation> {
        self.get_all_citations().iter().find(|c| c.id == id)
    }

    /// Citations with exactly this study type
    fn get_citations_by_study_type(&self, study_type: &str) -> Vec<&Citation> {
        self.filter_citations(|c| c.study_type == study_type)
    }

    /// Distinct publication years, ascending
    fn get_unique_years(&self) -> Vec<i32> {
        self.get_all_citations()
            .iter()
            .filter_map(|c| c.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct domains in first-seen order
    fn get_unique_domains(&self) -> Vec<&str> {
        first_seen(self.get_all_citations().iter().map(|c| c.domain.as_str()))
    }

    /// Aggregate counts and the mean evidence quality
    fn get_statistics(&self) -> Statistics {
        let citations = self.get_all_citations();

        let by_domain = self
            .get_unique_domains()
            .into_iter()
            .map(|domain| DomainCount {
                domain: domain.to_string(),
                count: citations.iter().filter(|c| c.domain == domain).count(),
            })
            .collect();

        let by_year = self
            .get_unique_years()
            .into_iter()
            .map(|year| YearCount {
                year,
                count: citations.iter().filter(|c| c.year == Some(year)).count(),
            })
            .collect();

        let by_study_type = first_seen(citations.iter().map(|c| c.study_type.as_str()))
            .into_iter()
            .map(|study_type| StudyTypeCount {
                study_type: study_type.to_string(),
                count: citations.iter().filter(|c| c.study_type == study_type).count(),
            })
            .collect();

        Statistics {
            total_citations: citations.len(),
            by_domain,
            by_year,
            with_effect_sizes: citations.iter().filter(|c| c.has_effect_size()).count(),
            by_study_type,
            avg_evidence_quality: rounded_mean(citations.iter().filter_map(|c| c.evidence_quality)),
        }
    }

    /// Citations satisfying an arbitrary predicate, in document order
    fn filter_citations<F>(&self, predicate: F) -> Vec<&Citation>
    where
        F: Fn(&Citation) -> bool,
    {
        self.get_all_citations().iter().filter(|c| predicate(*c)).collect()
    }
}

/// Deduplicate while keeping the order of first appearance
fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
