//! Citeshelf Storage Layer
//!
//! Owns a loaded citation dataset and implements the `CitationCatalog`
//! query trait over it.
//!
//! # Architecture
//!
//! - A single asynchronous `load` reads a JSON document from a file, a URL
//!   or memory, parses it completely, and only then replaces the held data
//! - Queries are synchronous borrows and never fail
//! - An id index answers `get_citation_by_id` without a scan
//!
//! # Examples
//!
//! ```no_run
//! use citeshelf_domain::CitationCatalog;
//! use citeshelf_store::{CitationStore, DataSource};
//!
//! # async fn example() -> Result<(), citeshelf_store::LoadError> {
//! let mut store = CitationStore::new();
//! store.load(&DataSource::default()).await?;
//! println!("{} citations", store.get_all_citations().len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod source;

pub use error::LoadError;
pub use source::{DataSource, DEFAULT_DATA_PATH};

use citeshelf_domain::traits::CitationCatalog;
use citeshelf_domain::{Citation, Dataset, RiskFactor};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// In-memory citation store
///
/// Empty until the first successful [`CitationStore::load`]. After that the
/// data is read-only until the next successful load replaces it wholesale.
///
/// # Thread Safety
///
/// `load` takes `&mut self`, so loads on one store are serialized by the
/// borrow checker. Share a store across tasks behind your own lock.
#[derive(Debug, Default)]
pub struct CitationStore {
    dataset: Dataset,
    id_index: HashMap<String, usize>,
    loaded: bool,
}

impl CitationStore {
    /// Create an empty, not-yet-loaded store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a parsed dataset
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut store = Self::new();
        store.replace(dataset);
        store
    }

    /// Fetch and parse a dataset document, then make it the store's data
    ///
    /// Returns a copy of the parsed dataset. On any failure the error is
    /// logged and returned, and the store keeps whatever it held before,
    /// including its `loaded` flag.
    pub async fn load(&mut self, source: &DataSource) -> Result<Dataset, LoadError> {
        match Self::read_dataset(source).await {
            Ok(dataset) => {
                info!(
                    source = %source,
                    citations = dataset.citations.len(),
                    "Loaded {} citations successfully",
                    dataset.citations.len()
                );
                self.replace(dataset.clone());
                Ok(dataset)
            }
            Err(e) => {
                error!(source = %source, "Error loading citation data: {}", e);
                Err(e)
            }
        }
    }

    /// Whether a load has succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Opaque collection metadata (`null` before a load)
    pub fn get_metadata(&self) -> &serde_json::Value {
        &self.dataset.metadata
    }

    /// The whole held dataset
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    async fn read_dataset(source: &DataSource) -> Result<Dataset, LoadError> {
        let bytes = source.fetch().await?;
        Ok(Dataset::from_slice(&bytes)?)
    }

    fn replace(&mut self, dataset: Dataset) {
        self.id_index = Self::build_index(&dataset.citations);
        self.dataset = dataset;
        self.loaded = true;
    }

    /// Map ids to positions; on duplicates the first occurrence wins
    fn build_index(citations: &[Citation]) -> HashMap<String, usize> {
        let mut index = HashMap::with_capacity(citations.len());
        for (position, citation) in citations.iter().enumerate() {
            if index.contains_key(&citation.id) {
                warn!(id = %citation.id, position, "Duplicate citation id; keeping first occurrence");
                continue;
            }
            index.insert(citation.id.clone(), position);
        }
        index
    }
}

impl CitationCatalog for CitationStore {
    fn get_all_citations(&self) -> &[Citation] {
        &self.dataset.citations
    }

    fn get_domain_description(&self, domain: &str) -> Option<&str> {
        self.dataset.domain_descriptions.get(domain).map(String::as_str)
    }

    fn get_risk_factors(&self) -> &[RiskFactor] {
        &self.dataset.risk_factors
    }

    fn get_citation_by_id(&self, id: &str) -> Option<&Citation> {
        self.id_index
            .get(id)
            .and_then(|&position| self.dataset.citations.get(position))
    }
}
