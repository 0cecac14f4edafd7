//! EPSG codes for the coordinate reference systems used by NSIDC grids.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Projected CRS codes that the archive grids are defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpsgCode {
    /// NSIDC EASE-Grid North (Lambert azimuthal equal-area, authalic sphere)
    Epsg3408,
    /// NSIDC EASE-Grid South
    Epsg3409,
    /// NSIDC EASE-Grid Global (cylindrical equal-area, authalic sphere)
    Epsg3410,
    /// WGS 84 / NSIDC EASE-Grid 2.0 North
    Epsg6931,
    /// WGS 84 / NSIDC EASE-Grid 2.0 South
    Epsg6932,
    /// WGS 84 / NSIDC EASE-Grid 2.0 Global
    Epsg6933,
    /// NSIDC Sea Ice Polar Stereographic North (Hughes 1980 ellipsoid)
    Epsg3411,
    /// NSIDC Sea Ice Polar Stereographic South
    Epsg3412,
    /// WGS 84 / NSIDC Sea Ice Polar Stereographic North
    Epsg3413,
    /// WGS 84 / NSIDC Sea Ice Polar Stereographic South
    Epsg3976,
}

impl EpsgCode {
    /// Every supported code, in registry order.
    pub const ALL: [EpsgCode; 10] = [
        EpsgCode::Epsg3408,
        EpsgCode::Epsg3409,
        EpsgCode::Epsg3410,
        EpsgCode::Epsg6931,
        EpsgCode::Epsg6932,
        EpsgCode::Epsg6933,
        EpsgCode::Epsg3411,
        EpsgCode::Epsg3412,
        EpsgCode::Epsg3413,
        EpsgCode::Epsg3976,
    ];

    /// Look up a code by its numeric value.
    pub fn from_code(code: u32) -> Result<Self, EpsgParseError> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(EpsgParseError::UnsupportedCode(code))
    }

    /// Numeric EPSG code.
    pub fn code(&self) -> u32 {
        match self {
            EpsgCode::Epsg3408 => 3408,
            EpsgCode::Epsg3409 => 3409,
            EpsgCode::Epsg3410 => 3410,
            EpsgCode::Epsg6931 => 6931,
            EpsgCode::Epsg6932 => 6932,
            EpsgCode::Epsg6933 => 6933,
            EpsgCode::Epsg3411 => 3411,
            EpsgCode::Epsg3412 => 3412,
            EpsgCode::Epsg3413 => 3413,
            EpsgCode::Epsg3976 => 3976,
        }
    }

    /// Official name of the CRS as registered with EPSG.
    pub fn name(&self) -> &'static str {
        match self {
            EpsgCode::Epsg3408 => "NSIDC EASE-Grid North",
            EpsgCode::Epsg3409 => "NSIDC EASE-Grid South",
            EpsgCode::Epsg3410 => "NSIDC EASE-Grid Global",
            EpsgCode::Epsg6931 => "WGS 84 / NSIDC EASE-Grid 2.0 North",
            EpsgCode::Epsg6932 => "WGS 84 / NSIDC EASE-Grid 2.0 South",
            EpsgCode::Epsg6933 => "WGS 84 / NSIDC EASE-Grid 2.0 Global",
            EpsgCode::Epsg3411 => "NSIDC Sea Ice Polar Stereographic North",
            EpsgCode::Epsg3412 => "NSIDC Sea Ice Polar Stereographic South",
            EpsgCode::Epsg3413 => "WGS 84 / NSIDC Sea Ice Polar Stereographic North",
            EpsgCode::Epsg3976 => "WGS 84 / NSIDC Sea Ice Polar Stereographic South",
        }
    }
}

impl FromStr for EpsgCode {
    type Err = EpsgParseError;

    /// Accepts "EPSG:3408", "epsg:3408" or a bare "3408".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.split_once(':') {
            Some((authority, code)) if authority.eq_ignore_ascii_case("EPSG") => code,
            Some(_) => return Err(EpsgParseError::InvalidFormat(s.to_string())),
            None => trimmed,
        };
        let code = digits
            .parse::<u32>()
            .map_err(|_| EpsgParseError::InvalidFormat(s.to_string()))?;
        Self::from_code(code)
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EpsgParseError {
    #[error("Unsupported EPSG code: {0}")]
    UnsupportedCode(u32),

    #[error("Invalid EPSG identifier: {0}")]
    InvalidFormat(String),
}
