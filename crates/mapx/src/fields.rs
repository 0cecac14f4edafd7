//! Line-level decoding of the tab-delimited mapx dialect.
//!
//! Both file types put the value first and a human-readable key label last,
//! separated by one or more tab characters. Runs of spaces are not separators.
//!
//! Decoding happens in two steps: [`split_gpd_line`] / [`split_mpp_line`]
//! produce a [`RawField`], then [`GpdKey::decode`] / [`MppKey::decode`] turn the
//! raw value into a typed field for a recognized key. Unrecognized labels have
//! no key and are dropped by the callers.

use serde::{Deserialize, Serialize};

/// Separator between a map-projection key label and its provenance note,
/// as in `eccentricity -- wgs84`.
const PROVENANCE_SEPARATOR: &str = " -- ";

/// A key label and its still-textual value, as read from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField<'a> {
    pub key: &'a str,
    pub value: String,
}

fn tab_tokens(line: &str) -> Vec<&str> {
    line.trim()
        .split('\t')
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split a grid-parameter line: the last token is the key label, the
/// preceding tokens joined by a single tab are the value.
///
/// Returns `None` for blank lines.
pub fn split_gpd_line(line: &str) -> Option<RawField<'_>> {
    let tokens = tab_tokens(line);
    let (key, value) = tokens.split_last()?;
    Some(RawField {
        key: key.trim(),
        value: value.join("\t"),
    })
}

/// Split a map-projection line: the key label is the last token with any
/// provenance suffix removed, the value is the preceding tokens trimmed and
/// joined by single spaces.
pub fn split_mpp_line(line: &str) -> Option<RawField<'_>> {
    let tokens = tab_tokens(line);
    let (last, value) = tokens.split_last()?;
    let key = match last.split_once(PROVENANCE_SEPARATOR) {
        Some((label, _provenance)) => label,
        None => last,
    };
    let value = value
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    Some(RawField {
        key: key.trim(),
        value,
    })
}

/// Parse exactly `N` whitespace-separated floating-point numbers.
fn floats<const N: usize>(value: &str) -> Result<[f64; N], String> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() != N {
        return Err(format!(
            "expected {} numeric value{}, found {}",
            N,
            if N == 1 { "" } else { "s" },
            tokens.len()
        ));
    }
    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = token
            .parse::<f64>()
            .map_err(|_| format!("invalid number '{}'", token))?;
    }
    Ok(out)
}

/// Recognized grid-parameter (`.gpd`) keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GpdKey {
    MapProjectionParameters,
    ColumnsRows,
    MapOriginColumnRow,
    GridCellsPerMapUnit,
}

/// A decoded grid-parameter field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GpdField {
    /// Name of the referenced `.mpp` file
    MppFile(String),
    ColumnsRows { width: u32, height: u32 },
    MapOriginColumnRow { column: f64, row: f64 },
    GridCellsPerMapUnit(f64),
}

impl GpdKey {
    pub const ALL: [GpdKey; 4] = [
        GpdKey::MapProjectionParameters,
        GpdKey::ColumnsRows,
        GpdKey::MapOriginColumnRow,
        GpdKey::GridCellsPerMapUnit,
    ];

    /// Literal label as it appears in the file.
    pub fn label(&self) -> &'static str {
        match self {
            GpdKey::MapProjectionParameters => "map projection parameters",
            GpdKey::ColumnsRows => "columns rows",
            GpdKey::MapOriginColumnRow => "map origin column,row",
            GpdKey::GridCellsPerMapUnit => "grid cells per map unit",
        }
    }

    /// Case-sensitive lookup of a key label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }

    /// Convert the raw value for this key, or describe why it cannot be.
    pub fn decode(&self, value: &str) -> Result<GpdField, String> {
        match self {
            GpdKey::MapProjectionParameters => {
                let name = value.trim();
                if name.is_empty() {
                    return Err("empty map projection file name".to_string());
                }
                Ok(GpdField::MppFile(name.to_string()))
            }
            GpdKey::ColumnsRows => {
                let tokens: Vec<&str> = value.split_whitespace().collect();
                if tokens.len() != 2 {
                    return Err(format!("expected 2 integer values, found {}", tokens.len()));
                }
                let parse = |t: &str| {
                    t.parse::<u32>()
                        .map_err(|_| format!("invalid integer '{}'", t))
                };
                Ok(GpdField::ColumnsRows {
                    width: parse(tokens[0])?,
                    height: parse(tokens[1])?,
                })
            }
            GpdKey::MapOriginColumnRow => {
                let [column, row] = floats::<2>(value)?;
                Ok(GpdField::MapOriginColumnRow { column, row })
            }
            GpdKey::GridCellsPerMapUnit => {
                let [cells] = floats::<1>(value)?;
                if !(cells.is_finite() && cells > 0.0) {
                    return Err(format!("grid cells per map unit must be positive, got {}", cells));
                }
                Ok(GpdField::GridCellsPerMapUnit(cells))
            }
        }
    }
}

/// Recognized map-projection (`.mpp`) keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MppKey {
    Lat0Lon0,
    Lat0Lon0Lat1,
    Rotation,
    Scale,
    EquatorialRadius,
    Eccentricity,
}

/// A decoded map-projection field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MppField {
    Reference { lat0: f64, lon0: f64 },
    ReferenceTrueScale { lat0: f64, lon0: f64, lat1: f64 },
    Rotation(f64),
    /// Kilometers per map unit
    Scale(f64),
    /// Meters
    EquatorialRadius(f64),
    Eccentricity(f64),
}

impl MppKey {
    pub const ALL: [MppKey; 6] = [
        MppKey::Lat0Lon0,
        MppKey::Lat0Lon0Lat1,
        MppKey::Rotation,
        MppKey::Scale,
        MppKey::EquatorialRadius,
        MppKey::Eccentricity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MppKey::Lat0Lon0 => "lat0 lon0",
            MppKey::Lat0Lon0Lat1 => "lat0 lon0 lat1",
            MppKey::Rotation => "rotation",
            MppKey::Scale => "scale (km/map unit)",
            MppKey::EquatorialRadius => "Earth equatorial radius (km)",
            MppKey::Eccentricity => "eccentricity",
        }
    }

    /// Case-sensitive lookup of a key label (provenance already removed).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }

    /// Convert the raw value for this key, or describe why it cannot be.
    ///
    /// The equatorial radius is converted from kilometers to meters here.
    pub fn decode(&self, value: &str) -> Result<MppField, String> {
        Ok(match self {
            MppKey::Lat0Lon0 => {
                let [lat0, lon0] = floats::<2>(value)?;
                MppField::Reference { lat0, lon0 }
            }
            MppKey::Lat0Lon0Lat1 => {
                let [lat0, lon0, lat1] = floats::<3>(value)?;
                MppField::ReferenceTrueScale { lat0, lon0, lat1 }
            }
            MppKey::Rotation => MppField::Rotation(floats::<1>(value)?[0]),
            MppKey::Scale => MppField::Scale(floats::<1>(value)?[0]),
            MppKey::EquatorialRadius => MppField::EquatorialRadius(floats::<1>(value)?[0] * 1e3),
            MppKey::Eccentricity => MppField::Eccentricity(floats::<1>(value)?[0]),
        })
    }
}
