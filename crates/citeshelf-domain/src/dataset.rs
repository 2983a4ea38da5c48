//! The input document as a whole

use crate::{Citation, RiskFactor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Everything a single load produces
///
/// Top-level keys missing from the document deserialize as empty
/// collections (or `null` metadata); only malformed JSON or mistyped values
/// are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Citation records in document order
    #[serde(default)]
    pub citations: Vec<Citation>,

    /// Opaque description of the collection
    #[serde(default)]
    pub metadata: serde_json::Value,

    /// Domain code to description text
    #[serde(default)]
    pub domain_descriptions: HashMap<String, String>,

    /// Chart data independent of the citations
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
}

impl Dataset {
    /// Parse a dataset from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Parse a dataset from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_document() {
        let json = r#"{
            "metadata": {"title": "Evidence Library", "version": "1.0"},
            "citations": [{"id": "c1", "title": "T", "authors": "A", "year": 2001}],
            "domainDescriptions": {"Theory": "Theoretical frameworks"},
            "riskFactors": [{"name": "Prior violence", "magnitude": 2.5, "unit": "OR"}]
        }"#;

        let dataset = Dataset::from_json(json).unwrap();
        assert_eq!(dataset.citations.len(), 1);
        assert_eq!(dataset.metadata["title"], "Evidence Library");
        assert_eq!(dataset.domain_descriptions["Theory"], "Theoretical frameworks");
        assert_eq!(dataset.risk_factors[0], RiskFactor::new("Prior violence", 2.5, "OR"));
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let dataset = Dataset::from_json("{}").unwrap();
        assert!(dataset.citations.is_empty());
        assert!(dataset.metadata.is_null());
        assert!(dataset.domain_descriptions.is_empty());
        assert!(dataset.risk_factors.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(Dataset::from_json("{\"citations\": [").is_err());
        assert!(Dataset::from_json("not json").is_err());
    }

    #[test]
    fn test_mistyped_section_is_rejected() {
        assert!(Dataset::from_json(r#"{"citations": {"id": "c1"}}"#).is_err());
    }
}
