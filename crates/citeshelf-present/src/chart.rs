//! Chart-ready data for the charting collaborator

use crate::error::PresentError;
use citeshelf_domain::RiskFactor;
use serde::{Deserialize, Serialize};

/// Number of axes on the aggression-weighting radar
pub const RADAR_AXIS_COUNT: usize = 5;

/// Horizontal bar series of risk factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorSeries {
    /// Bar labels (risk factor names)
    pub labels: Vec<String>,
    /// Bar lengths (magnitudes)
    pub magnitudes: Vec<f64>,
    /// Per-bar tooltip text, `"<magnitude> <unit>"`
    pub tooltips: Vec<String>,
}

/// Build the bar series for a set of risk factors, keeping their order
pub fn risk_factor_series(risk_factors: &[RiskFactor]) -> RiskFactorSeries {
    RiskFactorSeries {
        labels: risk_factors.iter().map(|rf| rf.name.clone()).collect(),
        magnitudes: risk_factors.iter().map(|rf| rf.magnitude).collect(),
        tooltips: risk_factors
            .iter()
            .map(|rf| format!("{} {}", rf.magnitude, rf.unit))
            .collect(),
    }
}

/// One axis of the radar profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarAxis {
    /// Axis label
    pub name: String,
    /// Weight on this axis
    pub value: f64,
}

/// Fixed aggression-weighting radar profile
///
/// Supplied as configuration; it is not derived from the citations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarProfile {
    /// Dataset label
    #[serde(default = "default_label")]
    pub label: String,

    /// Upper bound of the radial scale
    #[serde(default = "default_max")]
    pub max: f64,

    /// Axes in drawing order
    #[serde(default = "default_axes")]
    pub axes: Vec<RadarAxis>,
}

fn default_label() -> String {
    "Internal Aggression Weighting".to_string()
}

fn default_max() -> f64 {
    100.0
}

fn default_axes() -> Vec<RadarAxis> {
    [
        ("Cognition", 80.0),
        ("Affect", 95.0),
        ("Arousal", 70.0),
        ("Trait/History", 85.0),
        ("Situation", 90.0),
    ]
    .into_iter()
    .map(|(name, value)| RadarAxis {
        name: name.to_string(),
        value,
    })
    .collect()
}

impl RadarProfile {
    /// Validate the profile
    pub fn validate(&self) -> Result<(), PresentError> {
        if self.axes.len() != RADAR_AXIS_COUNT {
            return Err(PresentError::InvalidConfig(format!(
                "radar profile needs {} axes, got {}",
                RADAR_AXIS_COUNT,
                self.axes.len()
            )));
        }
        if self.max <= 0.0 {
            return Err(PresentError::InvalidConfig(
                "radar max must be greater than 0".to_string(),
            ));
        }
        if let Some(axis) = self.axes.iter().find(|a| a.value < 0.0 || a.value > self.max) {
            return Err(PresentError::InvalidConfig(format!(
                "radar axis '{}' value {} outside 0..={}",
                axis.name, axis.value, self.max
            )));
        }
        Ok(())
    }

    /// Axis labels in drawing order
    pub fn labels(&self) -> Vec<&str> {
        self.axes.iter().map(|a| a.name.as_str()).collect()
    }

    /// Axis values in drawing order
    pub fn values(&self) -> Vec<f64> {
        self.axes.iter().map(|a| a.value).collect()
    }

    /// Load a profile from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PresentError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the profile to a TOML string
    pub fn to_toml(&self) -> Result<String, PresentError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for RadarProfile {
    fn default() -> Self {
        Self {
            label: default_label(),
            max: default_max(),
            axes: default_axes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_factor_series() {
        let factors = vec![
            RiskFactor::new("Prior violence", 2.8, "OR"),
            RiskFactor::new("Heat", 0.5, "%"),
        ];

        let series = risk_factor_series(&factors);
        assert_eq!(series.labels, vec!["Prior violence", "Heat"]);
        assert_eq!(series.magnitudes, vec![2.8, 0.5]);
        assert_eq!(series.tooltips, vec!["2.8 OR", "0.5 %"]);
    }

    #[test]
    fn test_empty_series() {
        let series = risk_factor_series(&[]);
        assert!(series.labels.is_empty());
        assert!(series.tooltips.is_empty());
    }

    #[test]
    fn test_series_json_shape() {
        let series = risk_factor_series(&[RiskFactor::new("Heat", 1.0, "d")]);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["labels"][0], "Heat");
        assert_eq!(json["tooltips"][0], "1 d");
    }

    #[test]
    fn test_default_radar_profile() {
        let profile = RadarProfile::default();
        assert!(profile.validate().is_ok());
        assert_eq!(
            profile.labels(),
            vec!["Cognition", "Affect", "Arousal", "Trait/History", "Situation"]
        );
        assert_eq!(profile.values(), vec![80.0, 95.0, 70.0, 85.0, 90.0]);
    }

    #[test]
    fn test_radar_wrong_axis_count() {
        let mut profile = RadarProfile::default();
        profile.axes.pop();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_radar_value_out_of_range() {
        let mut profile = RadarProfile::default();
        profile.axes[0].value = 120.0;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_radar_toml_round_trip() {
        let profile = RadarProfile::default();
        let toml_str = profile.to_toml().unwrap();
        assert_eq!(RadarProfile::from_toml(&toml_str).unwrap(), profile);
    }
}
