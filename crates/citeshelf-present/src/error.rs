//! Error types for presentation configuration

use thiserror::Error;

/// Errors that can occur while loading or checking presentation config
#[derive(Error, Debug)]
pub enum PresentError {
    /// TOML could not be parsed
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML could not be produced
    #[error("Failed to serialize to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
