//! Reader for legacy mapx grid definitions.
//!
//! A grid is described by two tab-delimited text files in one directory: a
//! grid-parameter file (`.gpd`) giving extent and origin in cell units, and the
//! map-projection file (`.mpp`) it references. Reading a grid runs three steps:
//!
//! - parse both files into a [`FieldTable`]
//! - [`resolve`] the parameters the files leave implicit (cell size, map
//!   origin, and the radius of projections that omit it)
//! - assemble the immutable [`GridDefinition`]
//!
//! ```ignore
//! use mapx::{DefinitionsDir, MapxConfig};
//!
//! let dir = DefinitionsDir::from_config(&MapxConfig::from_env()?);
//! let grid = dir.load("Nl")?;
//! println!("{}", grid);
//! ```

pub mod config;
pub mod definitions;
pub mod error;
pub mod fields;
pub mod gpd;
pub mod grid_definition;
pub mod mpp;
pub mod resolve;
pub mod table;

pub use config::{MapxConfig, MAPXPATH_ENV};
pub use definitions::DefinitionsDir;
pub use error::{MapxError, Result};
pub use gpd::parse_grid_parameters;
pub use grid_definition::GridDefinition;
pub use mpp::parse_map_projection;
pub use resolve::{resolve, DerivableProjection, Ellipsoid};
pub use table::FieldTable;
