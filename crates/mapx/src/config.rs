//! Location of the mapx definitions directory.
//!
//! The archive keeps its `.gpd` and `.mpp` files in a single directory, named
//! either in a YAML file of the form
//!
//! ```yaml
//! APP:
//!   MAPXPATH: /path/to/mapxmaps
//! ```
//!
//! or through the `MAPXPATH` environment variable.

use crate::error::{MapxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the definitions directory.
pub const MAPXPATH_ENV: &str = "MAPXPATH";

/// Resolved configuration for the mapx readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapxConfig {
    /// Directory holding paired `.gpd` / `.mpp` files
    pub definitions_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(rename = "APP")]
    app: AppSection,
}

#[derive(Debug, Deserialize)]
struct AppSection {
    #[serde(rename = "MAPXPATH")]
    mapx_path: PathBuf,
}

impl MapxConfig {
    pub fn new(definitions_dir: impl Into<PathBuf>) -> Self {
        Self {
            definitions_dir: definitions_dir.into(),
        }
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MapxError::from_io(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(Self::new(file.app.mapx_path))
    }

    /// Load configuration from the `MAPXPATH` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(MAPXPATH_ENV) {
            Some(dir) if !dir.is_empty() => Ok(Self::new(dir)),
            _ => Err(MapxError::Config(format!("{} is not set", MAPXPATH_ENV))),
        }
    }
}
