//! Where a dataset document comes from

use crate::error::LoadError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Default location of the dataset document
pub const DEFAULT_DATA_PATH: &str = "data/citations.json";

/// Location of a dataset document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// JSON file on the local filesystem
    File(PathBuf),

    /// JSON document served over HTTP(S)
    Url(String),

    /// JSON text already held in memory
    Inline(String),
}

impl DataSource {
    /// Read the raw document bytes
    pub async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        match self {
            DataSource::File(path) => tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
            DataSource::Url(url) => {
                let response = reqwest::get(url.as_str()).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.bytes().await?.to_vec())
            }
            DataSource::Inline(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_PATH))
    }
}

impl FromStr for DataSource {
    type Err = LoadError;

    /// `http://` and `https://` locations are URLs, anything else is a path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LoadError::InvalidSource("empty location".to_string()));
        }

        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(DataSource::Url(trimmed.to_string()))
        } else {
            Ok(DataSource::File(PathBuf::from(trimmed)))
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::Inline(text) => write!(f, "<inline, {} bytes>", text.len()),
        }
    }
}
