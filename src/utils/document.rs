//! Structured document reading (JSON and YAML).
//!
//! Both the content document and the publications document go through here.
//! The format is picked from the file extension:
//!
//! | Extension        | Parser       |
//! |------------------|--------------|
//! | `.json`          | `serde_json` |
//! | `.yml`, `.yaml`  | `serde_yaml` |

use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while reading or parsing a structured document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid JSON in `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("invalid YAML in `{0}`")]
    Yaml(PathBuf, #[source] serde_yaml::Error),

    #[error("unsupported document format `{0}` (expected .json, .yml or .yaml)")]
    UnsupportedFormat(PathBuf),
}

/// Serialization format of a document on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Read a document from disk and deserialize it into `T`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;
    let text =
        fs::read_to_string(path).map_err(|err| DocumentError::Io(path.to_path_buf(), err))?;
    parse_document(&text, format, path)
}

/// Deserialize an in-memory document.
///
/// `origin` is only used for error messages.
pub fn parse_document<T: DeserializeOwned>(
    text: &str,
    format: DocumentFormat,
    origin: &Path,
) -> Result<T, DocumentError> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|err| DocumentError::Json(origin.to_path_buf(), err))
        }
        DocumentFormat::Yaml => {
            serde_yaml::from_str(text).map_err(|err| DocumentError::Yaml(origin.to_path_buf(), err))
        }
    }
}
