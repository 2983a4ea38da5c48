//! Citation module - the fundamental record of the library

use serde::{Deserialize, Deserializer, Serialize};

/// Source type value that switches on journal formatting rules
pub const JOURNAL_SOURCE_TYPE: &str = "journal";

/// A bibliographic citation
///
/// Citations are immutable once loaded. Free-text fields missing from the
/// input document deserialize as empty strings so that rendering degrades
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    /// Unique identifier within the collection
    pub id: String,

    /// Work title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Author list as a single display string
    #[serde(default, deserialize_with = "null_as_default")]
    pub authors: String,

    /// Publication year
    #[serde(default)]
    pub year: Option<i32>,

    /// Journal, publisher or site name
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    /// Source kind (`journal` or anything else)
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_type: String,

    /// Domain code (Theory, Structural, Bio, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,

    /// Short synthesis of the work's findings
    #[serde(default, deserialize_with = "null_as_default")]
    pub synthesis: String,

    /// Journal volume
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,

    /// Journal issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,

    /// Page range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,

    /// DOI without the resolver prefix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Link to the full text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Search keywords
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    /// Study design (meta-analysis, empirical, ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub study_type: String,

    /// Reported effect size
    #[serde(default)]
    pub effect_size: Option<f64>,

    /// Unit label for the effect size (d, r, OR, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_size_type: Option<String>,

    /// Evidence quality score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence_quality: Option<f64>,
}

impl Citation {
    /// Create a citation with the required fields set and everything else empty
    pub fn new(id: impl Into<String>, title: impl Into<String>, authors: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: authors.into(),
            year: Some(year),
            ..Default::default()
        }
    }

    /// Whether journal formatting rules apply
    pub fn is_journal(&self) -> bool {
        self.source_type == JOURNAL_SOURCE_TYPE
    }

    /// Whether an effect size was reported
    pub fn has_effect_size(&self) -> bool {
        self.effect_size.is_some()
    }

    /// Volume, treating an empty string as absent
    pub fn volume(&self) -> Option<&str> {
        present(&self.volume)
    }

    /// Issue, treating an empty string as absent
    pub fn issue(&self) -> Option<&str> {
        present(&self.issue)
    }

    /// Pages, treating an empty string as absent
    pub fn pages(&self) -> Option<&str> {
        present(&self.pages)
    }

    /// DOI, treating an empty string as absent
    pub fn doi(&self) -> Option<&str> {
        present(&self.doi)
    }

    /// URL, treating an empty string as absent
    pub fn url(&self) -> Option<&str> {
        present(&self.url)
    }

    /// Year rendered for display; empty when the year is missing
    pub fn year_label(&self) -> String {
        self.year.map(|y| y.to_string()).unwrap_or_default()
    }

    /// Lowercased haystack used by free-text search
    ///
    /// Fields are joined by single spaces, so a query may match across the
    /// boundary between two fields.
    pub fn search_text(&self) -> String {
        let mut text = format!("{} {} {}", self.title, self.authors, self.synthesis);
        for keyword in &self.keywords {
            text.push(' ');
            text.push_str(keyword);
        }
        text.to_lowercase()
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Treat an explicit `null` the same as a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
