//! Map-projection (`.mpp`) file parser.
//!
//! The first line is a bare projection name. Every following line is
//! `value(s) <tabs> key label`, where the label may carry a provenance
//! suffix (`eccentricity -- wgs84`).

use crate::definitions::DefinitionsDir;
use crate::error::{MapxError, Result};
use crate::fields::{split_mpp_line, MppKey};
use crate::table::FieldTable;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Parse the named map-projection file from the definitions directory.
///
/// `name` may omit the `.mpp` extension.
pub fn parse_map_projection(dir: &DefinitionsDir, name: &str) -> Result<FieldTable> {
    let path = dir.mpp_path(name);
    debug!(path = %path.display(), "Parsing map projection file");
    let content = fs::read_to_string(&path).map_err(|e| MapxError::from_io(&path, e))?;
    parse_map_projection_str(&content, &path)
}

/// Parse map-projection text; `path` is only used in error reports.
pub fn parse_map_projection_str(content: &str, path: &Path) -> Result<FieldTable> {
    let mut table = FieldTable::new();
    let mut lines = content.lines().enumerate();

    if let Some((_, first)) = lines.next() {
        let name = first.trim();
        if !name.is_empty() {
            table.map_projection = Some(title_case(name));
        }
    }

    for (idx, line) in lines {
        let Some(raw) = split_mpp_line(line) else {
            continue;
        };
        let Some(key) = MppKey::from_label(raw.key) else {
            trace!(line = idx + 1, key = raw.key, "Ignoring unrecognized map projection key");
            continue;
        };
        let field = key.decode(&raw.value).map_err(|reason| MapxError::MalformedLine {
            path: path.to_path_buf(),
            line_number: idx + 1,
            line: line.to_string(),
            reason: format!("{}: {}", key.label(), reason),
        })?;
        table.apply_mpp(field);
    }

    debug!(
        path = %path.display(),
        projection = table.map_projection.as_deref().unwrap_or(""),
        "Parsed map projection file"
    );
    Ok(table)
}

/// Capitalize the first letter of every alphabetic run and lowercase the rest,
/// so `azimuthal equal-area` becomes `Azimuthal Equal-Area`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLAR_STEREO: &str = "Polar Stereographic\n\
        90.0\t-45.0\t70.0\t\tlat0 lon0 lat1\n\
        0.0\t\t\t\trotation\n\
        100.0\t\t\t\tscale (km/map unit)\n\
        30.98 90.00\t\tcenter lat lon\n\
        6378.273\t\t\tEarth equatorial radius (km) -- Hughes ellipsoid\n\
        0.081816153\t\t\teccentricity -- Hughes ellipsoid\n";

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("azimuthal equal-area"), "Azimuthal Equal-Area");
        assert_eq!(title_case("POLAR STEREOGRAPHIC"), "Polar Stereographic");
        assert_eq!(title_case("cylindrical equal-area"), "Cylindrical Equal-Area");
    }

    #[test]
    fn test_parse_polar_stereo() {
        let table = parse_map_projection_str(POLAR_STEREO, Path::new("N3B.mpp")).unwrap();
        assert_eq!(table.map_projection.as_deref(), Some("Polar Stereographic"));
        assert_eq!(table.map_reference_latitude, Some(90.0));
        assert_eq!(table.map_reference_longitude, Some(-45.0));
        assert_eq!(table.map_latitude_true_scale, Some(70.0));
        assert_eq!(table.map_rotation, Some(0.0));
        assert_eq!(table.map_scale, Some(100.0));
        assert!((table.map_equatorial_radius.unwrap() - 6378273.0).abs() < 1e-6);
        assert_eq!(table.map_eccentricity, Some(0.081816153));
    }

    #[test]
    fn test_unknown_projection_passes_through() {
        let table = parse_map_projection_str("sinusoidal\n", Path::new("x.mpp")).unwrap();
        assert_eq!(table.map_projection.as_deref(), Some("Sinusoidal"));
    }

    #[test]
    fn test_malformed_value_reports_line() {
        let err = parse_map_projection_str(
            "Polar Stereographic\n90.0\t\tlat0 lon0 lat1\n",
            Path::new("bad.mpp"),
        )
        .unwrap_err();
        match err {
            MapxError::MalformedLine {
                path,
                line_number,
                line,
                ..
            } => {
                assert_eq!(path, Path::new("bad.mpp"));
                assert_eq!(line_number, 2);
                assert_eq!(line, "90.0\t\tlat0 lon0 lat1");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
