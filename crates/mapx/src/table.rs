//! The typed field table built by the parsers and completed by the resolver.

use crate::fields::{GpdField, MppField};
use serde::{Deserialize, Serialize};

/// Every field a mapx grid definition can carry.
///
/// Parsers fill the fields their file declares, the resolver fills the
/// derived ones. A later line for the same key overwrites an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldTable {
    // Grid-parameter file
    pub mpp_file: Option<String>,
    pub grid_width: Option<u32>,
    pub grid_height: Option<u32>,
    pub grid_map_origin_column: Option<f64>,
    pub grid_map_origin_row: Option<f64>,
    pub grid_cells_per_map_unit: Option<f64>,

    // Map-projection file
    pub map_projection: Option<String>,
    pub map_reference_latitude: Option<f64>,
    pub map_reference_longitude: Option<f64>,
    pub map_latitude_true_scale: Option<f64>,
    pub map_rotation: Option<f64>,
    /// Kilometers per map unit, as written in the file
    pub map_scale: Option<f64>,
    /// Meters
    pub map_equatorial_radius: Option<f64>,
    pub map_eccentricity: Option<f64>,

    // Derived
    /// Meters
    pub grid_map_units_per_cell: Option<f64>,
    pub cell_width: Option<f64>,
    pub cell_height: Option<f64>,
    pub map_origin_x: Option<f64>,
    pub map_origin_y: Option<f64>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a decoded grid-parameter field.
    pub fn apply_gpd(&mut self, field: GpdField) {
        match field {
            GpdField::MppFile(name) => self.mpp_file = Some(name),
            GpdField::ColumnsRows { width, height } => {
                self.grid_width = Some(width);
                self.grid_height = Some(height);
            }
            GpdField::MapOriginColumnRow { column, row } => {
                self.grid_map_origin_column = Some(column);
                self.grid_map_origin_row = Some(row);
            }
            GpdField::GridCellsPerMapUnit(cells) => self.grid_cells_per_map_unit = Some(cells),
        }
    }

    /// Record a decoded map-projection field.
    pub fn apply_mpp(&mut self, field: MppField) {
        match field {
            MppField::Reference { lat0, lon0 } => {
                self.map_reference_latitude = Some(lat0);
                self.map_reference_longitude = Some(lon0);
            }
            MppField::ReferenceTrueScale { lat0, lon0, lat1 } => {
                self.map_reference_latitude = Some(lat0);
                self.map_reference_longitude = Some(lon0);
                self.map_latitude_true_scale = Some(lat1);
            }
            MppField::Rotation(rotation) => self.map_rotation = Some(rotation),
            MppField::Scale(scale) => self.map_scale = Some(scale),
            MppField::EquatorialRadius(radius) => self.map_equatorial_radius = Some(radius),
            MppField::Eccentricity(eccentricity) => self.map_eccentricity = Some(eccentricity),
        }
    }

    /// Fill every field absent here from `other`; fields already set win.
    pub fn merge(&mut self, other: FieldTable) {
        macro_rules! fill {
            ($($field:ident),* $(,)?) => {
                $( if self.$field.is_none() { self.$field = other.$field; } )*
            };
        }
        fill!(
            mpp_file,
            grid_width,
            grid_height,
            grid_map_origin_column,
            grid_map_origin_row,
            grid_cells_per_map_unit,
            map_projection,
            map_reference_latitude,
            map_reference_longitude,
            map_latitude_true_scale,
            map_rotation,
            map_scale,
            map_equatorial_radius,
            map_eccentricity,
            grid_map_units_per_cell,
            cell_width,
            cell_height,
            map_origin_x,
            map_origin_y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_line_wins() {
        let mut table = FieldTable::new();
        table.apply_mpp(MppField::Rotation(0.0));
        table.apply_mpp(MppField::Rotation(45.0));
        assert_eq!(table.map_rotation, Some(45.0));
    }

    #[test]
    fn test_true_scale_key_sets_reference_too() {
        let mut table = FieldTable::new();
        table.apply_mpp(MppField::ReferenceTrueScale {
            lat0: 90.0,
            lon0: -45.0,
            lat1: 70.0,
        });
        assert_eq!(table.map_reference_latitude, Some(90.0));
        assert_eq!(table.map_reference_longitude, Some(-45.0));
        assert_eq!(table.map_latitude_true_scale, Some(70.0));
    }

    #[test]
    fn test_merge_keeps_existing_fields() {
        let mut gpd = FieldTable::new();
        gpd.apply_gpd(GpdField::GridCellsPerMapUnit(8.0));
        gpd.map_rotation = Some(1.0);

        let mut mpp = FieldTable::new();
        mpp.apply_mpp(MppField::Rotation(2.0));
        mpp.apply_mpp(MppField::Scale(200.5402));

        gpd.merge(mpp);
        assert_eq!(gpd.map_rotation, Some(1.0));
        assert_eq!(gpd.map_scale, Some(200.5402));
        assert_eq!(gpd.grid_cells_per_map_unit, Some(8.0));
    }
}
