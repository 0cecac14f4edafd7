//! Handle on a directory of paired `.gpd` / `.mpp` files.

use crate::config::MapxConfig;
use crate::error::{MapxError, Result};
use crate::gpd::parse_grid_parameters;
use crate::grid_definition::GridDefinition;
use crate::mpp::parse_map_projection;
use crate::resolve::resolve;
use crate::table::FieldTable;
use std::path::{Path, PathBuf};
use tracing::info;
use walkdir::WalkDir;

pub const GPD_EXTENSION: &str = "gpd";
pub const MPP_EXTENSION: &str = "mpp";

/// Read-only view of a definitions directory.
///
/// Holds no state beyond its root, so independent callers can share or clone
/// it freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionsDir {
    root: PathBuf,
}

impl DefinitionsDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &MapxConfig) -> Self {
        Self::new(config.definitions_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a grid-parameter file; `.gpd` is appended unless already present.
    pub fn gpd_path(&self, name: &str) -> PathBuf {
        self.root.join(with_extension(name, GPD_EXTENSION))
    }

    /// Path of a map-projection file; `.mpp` is appended unless already present.
    pub fn mpp_path(&self, name: &str) -> PathBuf {
        self.root.join(with_extension(name, MPP_EXTENSION))
    }

    /// Sorted names (without extension) of the grid-parameter files in the root,
    /// symlinked files included.
    pub fn list_grids(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(&self.root).to_path_buf();
                match e.into_io_error() {
                    Some(source) => MapxError::from_io(path, source),
                    None => MapxError::Config(format!(
                        "cannot list definitions directory {}",
                        path.display()
                    )),
                }
            })?;
            let path = entry.path();
            // Follows symlinks; a broken link is skipped.
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(GPD_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Parse a grid-parameter file and its map-projection file.
    pub fn parse_grid_parameters(&self, name: &str) -> Result<FieldTable> {
        parse_grid_parameters(self, name)
    }

    /// Parse a map-projection file on its own.
    pub fn parse_map_projection(&self, name: &str) -> Result<FieldTable> {
        parse_map_projection(self, name)
    }

    /// Parse, resolve and assemble the named grid.
    pub fn load(&self, name: &str) -> Result<GridDefinition> {
        let mut table = self.parse_grid_parameters(name)?;
        resolve(&mut table)?;
        let definition = GridDefinition::from_table(&table)?;
        info!(
            grid = name,
            projection = %definition.map_projection,
            width = definition.grid_width,
            height = definition.grid_height,
            "Loaded grid definition"
        );
        Ok(definition)
    }
}

fn with_extension(name: &str, extension: &str) -> String {
    let suffix = format!(".{}", extension);
    if name.ends_with(&suffix) {
        name.to_string()
    } else {
        format!("{}{}", name, suffix)
    }
}
