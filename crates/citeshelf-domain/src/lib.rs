//! Citeshelf Domain Layer
//!
//! This crate contains the data model and the read-only query contract for
//! a citation library. It has no I/O: loading lives in `citeshelf-store`
//! and rendering lives in `citeshelf-present`.
//!
//! ## Key Concepts
//!
//! - **Citation**: An immutable bibliographic record with a synthesis and
//!   optional effect-size and evidence-quality annotations
//! - **Dataset**: The whole input document (citations, metadata, domain
//!   descriptions, risk factors), created in one shot by a load
//! - **RiskFactor**: A chart datum independent of the citations
//! - **Statistics**: Aggregate counts computed over the citations
//!
//! ## Architecture
//!
//! Every filter, search and aggregation is a provided method on the
//! [`CitationCatalog`] trait, so any owner of citations answers queries the
//! same way. Implementors only supply access to their data and may override
//! individual lookups with indexed versions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod citation;
pub mod dataset;
pub mod risk_factor;
pub mod statistics;
pub mod traits;

// Re-exports for convenience
pub use citation::{Citation, JOURNAL_SOURCE_TYPE};
pub use dataset::Dataset;
pub use risk_factor::RiskFactor;
pub use statistics::{DomainCount, Statistics, StudyTypeCount, YearCount};
pub use traits::{CitationCatalog, ALL_DOMAINS};
