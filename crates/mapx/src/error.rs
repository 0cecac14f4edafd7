//! Error types for mapx parsing and resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mapx operations.
pub type Result<T> = std::result::Result<T, MapxError>;

/// Errors raised while reading, resolving or assembling a grid definition.
///
/// Every variant aborts the whole pipeline call; nothing is defaulted past a failure.
#[derive(Error, Debug)]
pub enum MapxError {
    /// The requested definition file does not exist
    #[error("definition file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Grid-parameter file does not open with its map-projection declaration
    #[error(
        "{}: first line must declare the 'map projection parameters' file",
        path.display()
    )]
    MissingReference { path: PathBuf },

    /// A value must be derived but the projection has no documented fallback
    #[error("cannot derive {field} for projection '{projection}'")]
    UnsupportedDerivation {
        projection: String,
        field: &'static str,
    },

    /// Fields required to build the grid definition are absent
    #[error("missing mandatory fields: {}", fields.join(", "))]
    MissingMandatoryField { fields: Vec<&'static str> },

    /// A recognized key whose value cannot be converted
    #[error("{}:{line_number}: {reason} in line {line:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        line: String,
        reason: String,
    },

    /// Definitions directory configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(String),
}

impl MapxError {
    /// Map an I/O failure on `path`, keeping not-found distinct.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create a MissingMandatoryField error for a single field.
    pub fn missing(field: &'static str) -> Self {
        Self::MissingMandatoryField {
            fields: vec![field],
        }
    }
}

impl From<serde_yaml::Error> for MapxError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Config(format!("YAML error: {}", err))
    }
}
