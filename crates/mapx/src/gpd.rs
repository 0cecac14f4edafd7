//! Grid-parameter (`.gpd`) file parser.
//!
//! Only the original key/value layout is read; its first line always names the
//! map-projection file the grid is defined on.

use crate::definitions::DefinitionsDir;
use crate::error::{MapxError, Result};
use crate::fields::{split_gpd_line, GpdKey};
use crate::mpp::parse_map_projection;
use crate::table::FieldTable;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Parse the named grid-parameter file and the map-projection file it references.
///
/// `name` may omit the `.gpd` extension. The returned table holds the fields of
/// both files; grid-parameter fields win on a name collision.
pub fn parse_grid_parameters(dir: &DefinitionsDir, name: &str) -> Result<FieldTable> {
    let path = dir.gpd_path(name);
    debug!(path = %path.display(), "Parsing grid parameter file");
    let content = fs::read_to_string(&path).map_err(|e| MapxError::from_io(&path, e))?;
    let mut table = parse_grid_parameters_str(&content, &path)?;

    let mpp_file = table
        .mpp_file
        .clone()
        .ok_or_else(|| MapxError::MissingReference { path: path.clone() })?;
    let projection = parse_map_projection(dir, &mpp_file)?;
    table.merge(projection);

    Ok(table)
}

/// Parse grid-parameter text without following its map-projection reference.
///
/// `path` is only used in error reports.
pub fn parse_grid_parameters_str(content: &str, path: &Path) -> Result<FieldTable> {
    let declares_reference = content
        .lines()
        .next()
        .and_then(split_gpd_line)
        .and_then(|raw| GpdKey::from_label(raw.key))
        == Some(GpdKey::MapProjectionParameters);
    if !declares_reference {
        return Err(MapxError::MissingReference {
            path: path.to_path_buf(),
        });
    }

    let mut table = FieldTable::new();
    for (idx, line) in content.lines().enumerate() {
        let Some(raw) = split_gpd_line(line) else {
            continue;
        };
        let Some(key) = GpdKey::from_label(raw.key) else {
            trace!(line = idx + 1, key = raw.key, "Ignoring unrecognized grid parameter key");
            continue;
        };
        let field = key.decode(&raw.value).map_err(|reason| MapxError::MalformedLine {
            path: path.to_path_buf(),
            line_number: idx + 1,
            line: line.to_string(),
            reason: format!("{}: {}", key.label(), reason),
        })?;
        table.apply_gpd(field);
    }

    debug!(
        path = %path.display(),
        mpp_file = table.mpp_file.as_deref().unwrap_or(""),
        "Parsed grid parameter file"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gpd_fields() {
        let content = "N200correct.mpp\t\tmap projection parameters\n\
            721 721\t\t\tcolumns rows\n\
            360.0 360.0\t\tmap origin column,row\n\
            8.0\t\t\tgrid cells per map unit\n";
        let table = parse_grid_parameters_str(content, Path::new("Nl.gpd")).unwrap();
        assert_eq!(table.mpp_file.as_deref(), Some("N200correct.mpp"));
        assert_eq!(table.grid_width, Some(721));
        assert_eq!(table.grid_height, Some(721));
        assert_eq!(table.grid_map_origin_column, Some(360.0));
        assert_eq!(table.grid_map_origin_row, Some(360.0));
        assert_eq!(table.grid_cells_per_map_unit, Some(8.0));
        assert!(table.map_projection.is_none());
    }

    #[test]
    fn test_reference_must_be_first_line() {
        let content = "721 721\t\tcolumns rows\n\
            N200correct.mpp\t\tmap projection parameters\n";
        let err = parse_grid_parameters_str(content, Path::new("late.gpd")).unwrap_err();
        assert!(matches!(err, MapxError::MissingReference { .. }));
    }

    #[test]
    fn test_empty_file_has_no_reference() {
        let err = parse_grid_parameters_str("", Path::new("empty.gpd")).unwrap_err();
        assert!(matches!(err, MapxError::MissingReference { .. }));
    }

    #[test]
    fn test_unrecognized_lines_are_ignored() {
        let content = "Sps.mpp\t\tmap projection parameters\n\
            some future setting\t\tnew-style key\n\
            304 448\t\tcolumns rows\n";
        let table = parse_grid_parameters_str(content, Path::new("N3B.gpd")).unwrap();
        assert_eq!(table.grid_width, Some(304));
        assert_eq!(table.grid_height, Some(448));
    }

    #[test]
    fn test_annotated_key_label_is_dropped() {
        let content = "N200correct.mpp\t\tmap projection parameters\n\
            721 721\t\t\tcolumns rows\n\
            8\t\tgrid cells per map unit; 25 km\n";
        let table = parse_grid_parameters_str(content, Path::new("Nl.gpd")).unwrap();
        assert_eq!(table.grid_width, Some(721));
        assert!(table.grid_cells_per_map_unit.is_none());
    }
}
