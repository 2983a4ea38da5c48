//! Domain badge palette

use crate::error::PresentError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_CLASS: &str = "bg-gray-100 text-gray-800";

/// CSS classes for domain badges
///
/// Purely cosmetic: domains missing from `classes` get `default_class`.
///
/// # Examples
///
/// ```
/// use citeshelf_present::DomainPalette;
///
/// let palette = DomainPalette::default();
/// assert_eq!(palette.class_for("Bio"), "bg-orange-100 text-orange-800");
/// assert_eq!(palette.class_for("Economics"), "bg-gray-100 text-gray-800");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainPalette {
    /// Class list for unmapped domains
    #[serde(default = "default_class")]
    pub default_class: String,

    /// Domain code to class list
    #[serde(default = "default_classes")]
    pub classes: BTreeMap<String, String>,
}

fn default_classes() -> BTreeMap<String, String> {
    [
        ("Theory", "bg-blue-100 text-blue-800"),
        ("Structural", "bg-indigo-100 text-indigo-800"),
        ("Bio", "bg-orange-100 text-orange-800"),
        ("Psych", "bg-purple-100 text-purple-800"),
        ("Comm", "bg-green-100 text-green-800"),
        ("History", "bg-red-100 text-red-800"),
    ]
    .into_iter()
    .map(|(domain, class)| (domain.to_string(), class.to_string()))
    .collect()
}

fn default_class() -> String {
    DEFAULT_CLASS.to_string()
}

impl DomainPalette {
    /// Class list for a domain badge
    pub fn class_for(&self, domain: &str) -> &str {
        self.classes
            .get(domain)
            .map(String::as_str)
            .unwrap_or(&self.default_class)
    }

    /// Validate the palette
    pub fn validate(&self) -> Result<(), PresentError> {
        if self.default_class.trim().is_empty() {
            return Err(PresentError::InvalidConfig(
                "default_class must not be empty".to_string(),
            ));
        }
        if let Some((domain, _)) = self.classes.iter().find(|(_, class)| class.trim().is_empty()) {
            return Err(PresentError::InvalidConfig(format!(
                "class for domain '{}' must not be empty",
                domain
            )));
        }
        Ok(())
    }

    /// Load a palette from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PresentError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the palette to a TOML string
    pub fn to_toml(&self) -> Result<String, PresentError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for DomainPalette {
    fn default() -> Self {
        Self {
            default_class: default_class(),
            classes: default_classes(),
        }
    }
}
