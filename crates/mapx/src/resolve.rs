//! Derivation of grid parameters that the legacy files leave implicit.
//!
//! Every rule only fills a field that is still absent, so resolving an
//! already-resolved table changes nothing.

use crate::error::{MapxError, Result};
use crate::table::FieldTable;
use tracing::debug;

/// Reference ellipsoids whose constants can stand in for an omitted radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ellipsoid {
    /// Sphere of the same surface area as the International 1924 ellipsoid
    International1924AuthalicSphere,
}

impl Ellipsoid {
    /// Equatorial radius in meters.
    pub fn equatorial_radius(&self) -> f64 {
        match self {
            Ellipsoid::International1924AuthalicSphere => 6371228.0,
        }
    }
}

/// Projection families whose `.mpp` files are known to omit the equatorial
/// radius. Anything else must state it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivableProjection {
    /// Original EASE-Grid azimuthal projections
    AzimuthalEqualArea,
}

impl DerivableProjection {
    /// Match a (title-cased) projection name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.trim().eq_ignore_ascii_case("Azimuthal Equal-Area") {
            Some(DerivableProjection::AzimuthalEqualArea)
        } else {
            None
        }
    }

    /// Ellipsoid implied when the radius is omitted.
    pub fn ellipsoid(&self) -> Ellipsoid {
        match self {
            DerivableProjection::AzimuthalEqualArea => Ellipsoid::International1924AuthalicSphere,
        }
    }
}

/// Fill every derivable field that is absent from `table`.
pub fn resolve(table: &mut FieldTable) -> Result<()> {
    if table.map_equatorial_radius.is_none() {
        let projection = table
            .map_projection
            .as_deref()
            .ok_or_else(|| MapxError::missing("map_projection"))?;
        let family = DerivableProjection::from_name(projection).ok_or_else(|| {
            MapxError::UnsupportedDerivation {
                projection: projection.to_string(),
                field: "map_equatorial_radius",
            }
        })?;
        let radius = family.ellipsoid().equatorial_radius();
        debug!(projection, radius, "Using default equatorial radius");
        table.map_equatorial_radius = Some(radius);
    }

    if table.grid_map_units_per_cell.is_none() {
        let (scale, cells) = match (table.map_scale, table.grid_cells_per_map_unit) {
            (Some(scale), Some(cells)) => (scale, cells),
            (scale, cells) => {
                let mut fields = Vec::new();
                if scale.is_none() {
                    fields.push("map_scale");
                }
                if cells.is_none() {
                    fields.push("grid_cells_per_map_unit");
                }
                return Err(MapxError::MissingMandatoryField { fields });
            }
        };
        let units = map_units_per_cell(scale, cells);
        debug!(scale, cells, units, "Derived map units per cell");
        table.grid_map_units_per_cell = Some(units);
    }

    let units = table
        .grid_map_units_per_cell
        .ok_or_else(|| MapxError::missing("grid_map_units_per_cell"))?;

    if table.cell_width.is_none() {
        table.cell_width = Some(units);
    }
    if table.cell_height.is_none() {
        table.cell_height = Some(-units);
    }

    if table.map_origin_x.is_none() {
        let column = table
            .grid_map_origin_column
            .ok_or_else(|| MapxError::missing("grid_map_origin_column"))?;
        table.map_origin_x = Some(map_origin_x(units, column));
    }
    if table.map_origin_y.is_none() {
        let row = table
            .grid_map_origin_row
            .ok_or_else(|| MapxError::missing("grid_map_origin_row"))?;
        table.map_origin_y = Some(map_origin_y(units, row));
    }

    Ok(())
}

/// Grid resolution in meters from a scale in km per map unit.
pub fn map_units_per_cell(scale_km_per_map_unit: f64, cells_per_map_unit: f64) -> f64 {
    scale_km_per_map_unit * 1e3 / cells_per_map_unit
}

/// X of the upper-left outer corner. The origin column is a cell-center index,
/// hence the half-cell offset.
pub fn map_origin_x(map_units_per_cell: f64, origin_column: f64) -> f64 {
    -map_units_per_cell * (origin_column + 0.5)
}

/// Y of the upper-left outer corner.
pub fn map_origin_y(map_units_per_cell: f64, origin_row: f64) -> f64 {
    map_units_per_cell * (origin_row + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ease_north() -> FieldTable {
        FieldTable {
            map_projection: Some("Azimuthal Equal-Area".to_string()),
            map_scale: Some(200.5402),
            grid_cells_per_map_unit: Some(8.0),
            grid_map_origin_column: Some(360.0),
            grid_map_origin_row: Some(360.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_map_units_per_cell() {
        assert!((map_units_per_cell(200.5402, 16.0) - 12533.7625).abs() < 1e-9);
    }

    #[test]
    fn test_map_origin() {
        assert!((map_origin_x(12533.76, 720.0) + 9030574.08).abs() < 1e-6);
        assert!((map_origin_y(12533.76, 720.0) - 9030574.08).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_fills_derived_fields() {
        let mut table = ease_north();
        resolve(&mut table).unwrap();
        assert_eq!(table.map_equatorial_radius, Some(6371228.0));
        let units = table.grid_map_units_per_cell.unwrap();
        assert!((units - 25067.525).abs() < 1e-9);
        assert_eq!(table.cell_width, Some(units));
        assert_eq!(table.cell_height, Some(-units));
        assert!((table.map_origin_x.unwrap() + 9036842.7625).abs() < 1e-6);
        assert!((table.map_origin_y.unwrap() - 9036842.7625).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut once = ease_north();
        resolve(&mut once).unwrap();
        let mut twice = once.clone();
        resolve(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_existing_values_are_kept() {
        let mut table = ease_north();
        table.map_equatorial_radius = Some(6378137.0);
        table.cell_height = Some(-1.0);
        resolve(&mut table).unwrap();
        assert_eq!(table.map_equatorial_radius, Some(6378137.0));
        assert_eq!(table.cell_height, Some(-1.0));
    }

    #[test]
    fn test_radius_fallback_only_for_allow_listed_projection() {
        let mut table = ease_north();
        table.map_projection = Some("Polar Stereographic".to_string());
        match resolve(&mut table).unwrap_err() {
            MapxError::UnsupportedDerivation { projection, field } => {
                assert_eq!(projection, "Polar Stereographic");
                assert_eq!(field, "map_equatorial_radius");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_missing_scale_is_reported() {
        let mut table = ease_north();
        table.map_scale = None;
        match resolve(&mut table).unwrap_err() {
            MapxError::MissingMandatoryField { fields } => assert_eq!(fields, vec!["map_scale"]),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
