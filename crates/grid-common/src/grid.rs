//! Grid georeferencing and the catalog of well-known NSIDC grids.

use crate::{BoundingBox, EpsgCode};
use serde::{Deserialize, Serialize};

/// Affine transform from fractional (column, row) pixel coordinates to map x/y.
///
/// Follows the usual six-coefficient layout:
///
/// ```text
/// x = a * col + b * row + c
/// y = d * col + e * row + f
/// ```
///
/// Pixel (0, 0) is the outer corner of the upper-left cell, so cell centers sit
/// at half-integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl GeoTransform {
    /// North-up transform with no rotation terms.
    ///
    /// `cell_height` is negative for rasters whose row index increases downward.
    pub fn north_up(cell_width: f64, origin_x: f64, cell_height: f64, origin_y: f64) -> Self {
        Self {
            a: cell_width,
            b: 0.0,
            c: origin_x,
            d: 0.0,
            e: cell_height,
            f: origin_y,
        }
    }

    /// Map a (column, row) pixel coordinate to map x/y.
    pub fn apply(&self, col: f64, row: f64) -> (f64, f64) {
        (
            self.a * col + self.b * row + self.c,
            self.d * col + self.e * row + self.f,
        )
    }

    /// Extent covered by `cols` x `rows` cells.
    pub fn extent(&self, cols: usize, rows: usize) -> BoundingBox {
        let upper_left = self.apply(0.0, 0.0);
        let lower_right = self.apply(cols as f64, rows as f64);
        BoundingBox::from_corners(upper_left, lower_right)
    }
}

/// A well-known archive grid: projected CRS, extent and cell size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NsidcGrid {
    /// Human-readable grid name
    pub name: &'static str,
    /// Projected CRS the grid is defined in
    pub epsg: EpsgCode,
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Cell width in meters
    pub cell_width: f64,
    /// Cell height in meters (negative: rows increase downward)
    pub cell_height: f64,
    /// X of the outer upper-left corner in meters
    pub upper_left_x: f64,
    /// Y of the outer upper-left corner in meters
    pub upper_left_y: f64,
}

impl NsidcGrid {
    /// Affine transform for this grid.
    pub fn geotransform(&self) -> GeoTransform {
        GeoTransform::north_up(
            self.cell_width,
            self.upper_left_x,
            self.cell_height,
            self.upper_left_y,
        )
    }

    /// Cell-center x coordinates (one per column) and y coordinates (one per row).
    pub fn cell_centers(&self) -> (Vec<f64>, Vec<f64>) {
        let transform = self.geotransform();
        let xs = (0..self.cols)
            .map(|c| transform.apply(c as f64 + 0.5, 0.0).0)
            .collect();
        let ys = (0..self.rows)
            .map(|r| transform.apply(0.0, r as f64 + 0.5).1)
            .collect();
        (xs, ys)
    }

    /// Projected extent of the grid.
    pub fn bbox(&self) -> BoundingBox {
        self.geotransform().extent(self.cols, self.rows)
    }
}

/// Hand-maintained definitions of the grids used in NSIDC products.
pub mod grids {
    use super::*;

    /// Original EASE-Grid map scale in meters per map unit (N200correct.mpp).
    ///
    /// Cell sizes are a fraction of the equatorial radius chosen so the equator
    /// is spanned by a whole number of cells (Brodzik et al., 2012).
    pub const EASE_GRID_MAP_SCALE: f64 = 200.5402e3;
    /// Cells per map unit for the 25 km grids (Nl.gpd).
    pub const EASE_GRID_CELLS_PER_MAP_UNIT: f64 = 8.0;
    pub const EASE_GRID25_WIDTH: f64 = EASE_GRID_MAP_SCALE / EASE_GRID_CELLS_PER_MAP_UNIT;
    pub const EASE_GRID25_HEIGHT: f64 = -EASE_GRID_MAP_SCALE / EASE_GRID_CELLS_PER_MAP_UNIT;

    pub const EASE_GRID_NORTH_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid North 25 km",
        epsg: EpsgCode::Epsg3408,
        cols: 721,
        rows: 721,
        cell_width: EASE_GRID25_WIDTH,
        cell_height: EASE_GRID25_HEIGHT,
        upper_left_x: -9036842.76,
        upper_left_y: 9036842.76,
    };

    pub const EASE_GRID_SOUTH_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid South 25 km",
        epsg: EpsgCode::Epsg3409,
        cols: 721,
        rows: 721,
        cell_width: EASE_GRID25_WIDTH,
        cell_height: EASE_GRID25_HEIGHT,
        upper_left_x: -9036842.76,
        upper_left_y: 9036842.76,
    };

    pub const EASE_GRID_GLOBAL_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid Global 25 km",
        epsg: EpsgCode::Epsg3410,
        cols: 1383,
        rows: 586,
        cell_width: EASE_GRID25_WIDTH,
        cell_height: EASE_GRID25_HEIGHT,
        upper_left_x: -17334193.54,
        upper_left_y: 7344784.83,
    };

    pub const EASE_GRID2_GLOBAL_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid 2.0 Global 25 km",
        epsg: EpsgCode::Epsg6933,
        cols: 1388,
        rows: 584,
        cell_width: 25025.26,
        cell_height: -25025.26,
        upper_left_x: -17367530.45,
        upper_left_y: 7307375.92,
    };

    pub const EASE_GRID2_NORTH_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid 2.0 North 25 km",
        epsg: EpsgCode::Epsg6931,
        cols: 720,
        rows: 720,
        cell_width: 25000.0,
        cell_height: -25000.0,
        upper_left_x: -9000000.0,
        upper_left_y: 9000000.0,
    };

    pub const EASE_GRID2_SOUTH_25KM: NsidcGrid = NsidcGrid {
        name: "EASE-Grid 2.0 South 25 km",
        epsg: EpsgCode::Epsg6932,
        cols: 720,
        rows: 720,
        cell_width: 25000.0,
        cell_height: -25000.0,
        upper_left_x: -9000000.0,
        upper_left_y: 9000000.0,
    };

    pub const AVHRR_EASE_GRID_NORTH_25KM: NsidcGrid = NsidcGrid {
        name: "AVHRR EASE-Grid North 25 km (Na25)",
        epsg: EpsgCode::Epsg3408,
        cols: 361,
        rows: 361,
        cell_width: EASE_GRID25_WIDTH,
        cell_height: EASE_GRID25_HEIGHT,
        upper_left_x: -4524683.8,
        upper_left_y: 4524683.8,
    };

    pub const AVHRR_EASE_GRID_SOUTH_25KM: NsidcGrid = NsidcGrid {
        name: "AVHRR EASE-Grid South 25 km (Sa25)",
        epsg: EpsgCode::Epsg3409,
        cols: 321,
        rows: 321,
        cell_width: EASE_GRID25_WIDTH,
        cell_height: EASE_GRID25_HEIGHT,
        upper_left_x: -4023333.8,
        upper_left_y: 4023333.8,
    };

    pub const SSMI_POLAR_STEREO_NORTH_25KM: NsidcGrid = NsidcGrid {
        name: "SSM/I Polar Stereographic North 25 km (N3B)",
        epsg: EpsgCode::Epsg3411,
        cols: 304,
        rows: 448,
        cell_width: 25000.0,
        cell_height: -25000.0,
        upper_left_x: -3850000.0,
        upper_left_y: 5850000.0,
    };

    pub const SSMI_POLAR_STEREO_SOUTH_25KM: NsidcGrid = NsidcGrid {
        name: "SSM/I Polar Stereographic South 25 km (S3B)",
        epsg: EpsgCode::Epsg3412,
        cols: 316,
        rows: 332,
        cell_width: 25000.0,
        cell_height: -25000.0,
        upper_left_x: -3950000.0,
        upper_left_y: 4350000.0,
    };

    /// Every catalog grid.
    pub fn all() -> [NsidcGrid; 10] {
        [
            EASE_GRID_NORTH_25KM,
            EASE_GRID_SOUTH_25KM,
            EASE_GRID_GLOBAL_25KM,
            EASE_GRID2_GLOBAL_25KM,
            EASE_GRID2_NORTH_25KM,
            EASE_GRID2_SOUTH_25KM,
            AVHRR_EASE_GRID_NORTH_25KM,
            AVHRR_EASE_GRID_SOUTH_25KM,
            SSMI_POLAR_STEREO_NORTH_25KM,
            SSMI_POLAR_STEREO_SOUTH_25KM,
        ]
    }

    /// Find a grid by name, ignoring ASCII case.
    pub fn by_name(name: &str) -> Option<NsidcGrid> {
        all()
            .into_iter()
            .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
    }

    /// All grids defined in the given CRS.
    pub fn by_epsg(epsg: EpsgCode) -> Vec<NsidcGrid> {
        all().into_iter().filter(|g| g.epsg == epsg).collect()
    }
}
