//! Errors raised while loading or saving a token registry document

use std::path::PathBuf;
use thiserror::Error;

/// Failure to turn a document into a registry (or back)
///
/// These are structural problems only. Literal values (colors, durations)
/// are opaque to the registry and never produce a `ConfigError`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No registry document at the expected location
    #[error("no {} found in {}", crate::registry::CONFIG_FILE_NAME, .0.display())]
    NotFound(PathBuf),

    /// The document exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML document with a bad shape (duplicate keys, wrong value kinds,
    /// replacement sections under `theme`)
    #[error("failed to parse token document: {0}")]
    Parse(#[from] toml::de::Error),

    /// Same as [`ConfigError::Parse`] but for a document read from disk
    #[error("failed to parse {}: {source}", .path.display())]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize token document: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid JSON token document: {0}")]
    Json(#[from] serde_json::Error),

    /// A color scale key outside `50, 100, ..., 900, 950`
    #[error("unknown shade key `{0}` (expected one of 50, 100, 200, ..., 900, 950)")]
    UnknownShade(String),
}
