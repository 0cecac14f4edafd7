//! The assembled, immutable grid definition.

use crate::error::{MapxError, Result};
use crate::table::FieldTable;
use grid_common::{BoundingBox, GeoTransform};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Projection and grid parameters of one mapx grid.
///
/// Linear quantities are in meters, angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDefinition {
    pub map_projection: String,
    pub map_reference_latitude: f64,
    pub map_reference_longitude: f64,
    /// Absent for azimuthal projections
    pub map_latitude_true_scale: Option<f64>,
    pub map_rotation: f64,
    pub map_equatorial_radius: f64,
    pub map_eccentricity: Option<f64>,
    pub map_origin_x: f64,
    pub map_origin_y: f64,
    pub grid_map_origin_column: f64,
    pub grid_map_origin_row: f64,
    pub grid_map_units_per_cell: f64,
    pub cell_width: f64,
    /// Negative: row index increases downward
    pub cell_height: f64,
    pub grid_width: u32,
    pub grid_height: u32,
}

impl GridDefinition {
    /// Build a definition from a resolved table.
    ///
    /// Reports every absent mandatory field at once.
    pub fn from_table(table: &FieldTable) -> Result<Self> {
        let mut missing = Vec::new();

        macro_rules! require {
            ($field:ident) => {
                match &table.$field {
                    Some(value) => value.clone(),
                    None => {
                        missing.push(stringify!($field));
                        Default::default()
                    }
                }
            };
        }

        let definition = Self {
            map_projection: require!(map_projection),
            map_reference_latitude: require!(map_reference_latitude),
            map_reference_longitude: require!(map_reference_longitude),
            map_latitude_true_scale: table.map_latitude_true_scale,
            map_rotation: require!(map_rotation),
            map_equatorial_radius: require!(map_equatorial_radius),
            map_eccentricity: table.map_eccentricity,
            map_origin_x: require!(map_origin_x),
            map_origin_y: require!(map_origin_y),
            grid_map_origin_column: require!(grid_map_origin_column),
            grid_map_origin_row: require!(grid_map_origin_row),
            grid_map_units_per_cell: require!(grid_map_units_per_cell),
            cell_width: require!(cell_width),
            cell_height: require!(cell_height),
            grid_width: require!(grid_width),
            grid_height: require!(grid_height),
        };

        if !missing.is_empty() {
            return Err(MapxError::MissingMandatoryField { fields: missing });
        }
        Ok(definition)
    }

    /// Pixel to map transform; the map origin is the upper-left outer corner.
    pub fn geotransform(&self) -> GeoTransform {
        GeoTransform::north_up(
            self.cell_width,
            self.map_origin_x,
            self.cell_height,
            self.map_origin_y,
        )
    }

    /// Projected extent of the grid.
    pub fn bbox(&self) -> BoundingBox {
        self.geotransform()
            .extent(self.grid_width as usize, self.grid_height as usize)
    }
}

impl TryFrom<&FieldTable> for GridDefinition {
    type Error = MapxError;

    fn try_from(table: &FieldTable) -> Result<Self> {
        Self::from_table(table)
    }
}

impl fmt::Display for GridDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let true_scale = self.map_latitude_true_scale.unwrap_or(f64::NAN);
        let eccentricity = self.map_eccentricity.unwrap_or(f64::NAN);
        writeln!(f, "Map Projection:                     {}", self.map_projection)?;
        writeln!(f, "Map Reference Latitude:             {:5.1}", self.map_reference_latitude)?;
        writeln!(f, "Map Reference Longitude:            {:5.1}", self.map_reference_longitude)?;
        writeln!(f, "Map Latitude True Scale:            {:5.1}", true_scale)?;
        writeln!(f, "Map Rotation:                       {:6.1}", self.map_rotation)?;
        writeln!(f, "Map Equatorial Radius:              {:9.1}", self.map_equatorial_radius)?;
        writeln!(f, "Map Eccentricity:                   {:14.12}", eccentricity)?;
        writeln!(f, "Map Origin X:                       {:12.1} ; meters", self.map_origin_x)?;
        writeln!(f, "Map Origin Y:                       {:12.1} ; meters", self.map_origin_y)?;
        writeln!(f, "Grid Map Origin Column:             {:8.3}", self.grid_map_origin_column)?;
        writeln!(f, "Grid Map Origin Row:                {:8.3}", self.grid_map_origin_row)?;
        writeln!(
            f,
            "Grid Map Units per Cell:            {:9.2} ; meters",
            self.grid_map_units_per_cell
        )?;
        writeln!(f, "Grid Width:                         {:5}", self.grid_width)?;
        writeln!(f, "Grid Height:                        {:5}", self.grid_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_are_collected() {
        let table = FieldTable {
            map_projection: Some("Azimuthal Equal-Area".to_string()),
            grid_width: Some(721),
            ..Default::default()
        };
        match GridDefinition::from_table(&table).unwrap_err() {
            MapxError::MissingMandatoryField { fields } => {
                assert!(fields.contains(&"map_reference_latitude"));
                assert!(fields.contains(&"grid_height"));
                assert!(fields.contains(&"cell_height"));
                assert!(!fields.contains(&"map_projection"));
                assert!(!fields.contains(&"grid_width"));
                assert!(!fields.contains(&"map_eccentricity"));
                assert_eq!(fields.len(), 12);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
