//! Common georeferencing types shared across the NSIDC grid crates.

pub mod bbox;
pub mod epsg;
pub mod grid;

pub use bbox::BoundingBox;
pub use epsg::{EpsgCode, EpsgParseError};
pub use grid::{grids, GeoTransform, NsidcGrid};
