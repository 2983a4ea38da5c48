//! Risk factors shown alongside the citations

use serde::{Deserialize, Serialize};

/// A named risk factor with its magnitude
///
/// Risk factors are independent of the citation records and are only used
/// for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Display name
    pub name: String,

    /// Effect size or prevalence
    pub magnitude: f64,

    /// Unit label shown next to the magnitude
    #[serde(default)]
    pub unit: String,
}

impl RiskFactor {
    /// Create a new risk factor
    pub fn new(name: impl Into<String>, magnitude: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            magnitude,
            unit: unit.into(),
        }
    }
}
