//! Definition-file fixtures modeled on the archive's mapx maps directory.
//!
//! Lines use the real dialect: value tokens first, then tab runs, then the key
//! label. Files carry the unrecognized keys the real ones do (bounds, label
//! positions) so tests exercise the lenient path too.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Original EASE-Grid north azimuthal projection. Omits the equatorial radius.
pub const N200CORRECT_MPP: &str = "Azimuthal Equal-Area\n\
90.0\t0.0\t\t\tlat0 lon0\n\
0.0\t\t\t\trotation\n\
200.5402\t\t\tscale (km/map unit)\n\
90.00\t0.00\t\t\tcenter lat lon\n\
0.00\t\t\t\tsouthern bound\n\
90.00\t\t\t\tnorthern bound\n\
-180.00\t\t\t\twestern bound\n\
180.00\t\t\t\teastern bound\n\
10.0\t\t\t\tlat-lon grid interval\n\
0.0\t\t\t\tlabel lat\n\
0.0\t\t\t\tlabel lon\n\
0\t\t\t\tcil detail level\n";

/// EASE-Grid north 25 km.
pub const NL_GPD: &str = "N200correct.mpp\t\tmap projection parameters\n\
721 721\t\t\tcolumns rows\n\
360.0 360.0\t\tmap origin column,row\n\
8.0\t\t\tgrid cells per map unit\n";

/// EASE-Grid north 12.5 km.
pub const NH_GPD: &str = "N200correct.mpp\t\tmap projection parameters\n\
1441 1441\t\tcolumns rows\n\
720.0 720.0\t\tmap origin column,row\n\
16.0\t\t\tgrid cells per map unit\n";

/// Original EASE-Grid south azimuthal projection. The projection name is
/// lowercase as in the archive copy; also omits the equatorial radius.
pub const S200CORRECT_MPP: &str = "azimuthal equal-area\n\
-90.0\t0.0\t\t\tlat0 lon0\n\
0.0\t\t\t\trotation\n\
200.5402\t\t\tscale (km/map unit)\n\
-90.00\t0.00\t\t\tcenter lat lon\n";

/// EASE-Grid south 25 km.
pub const SL_GPD: &str = "S200correct.mpp\t\tmap projection parameters\n\
721 721\t\t\tcolumns rows\n\
360.0 360.0\t\tmap origin column,row\n\
8.0\t\t\tgrid cells per map unit\n";

/// NSIDC sea ice polar stereographic north, Hughes 1980 ellipsoid.
pub const NPS_MPP: &str = "polar stereographic\n\
90.0\t-45.0\t70.0\t\tlat0 lon0 lat1\n\
0.0\t\t\t\trotation\n\
25.0\t\t\t\tscale (km/map unit)\n\
90.00\t-45.00\t\t\tcenter lat lon\n\
30.00\t\t\t\tsouthern bound\n\
90.00\t\t\t\tnorthern bound\n\
6378.273\t\t\tEarth equatorial radius (km) -- Hughes ellipsoid\n\
0.081816153\t\t\teccentricity -- Hughes ellipsoid\n";

/// SSM/I polar stereographic north 25 km.
pub const N3B_GPD: &str = "Nps.mpp\t\t\tmap projection parameters\n\
304 448\t\t\tcolumns rows\n\
153.5 233.5\t\tmap origin column,row\n\
1.0\t\t\tgrid cells per map unit\n";

/// A projection outside the radius fallback list, with no radius.
pub const RAMP_MPP: &str = "Sinusoidal\n\
0.0\t0.0\t\t\tlat0 lon0\n\
0.0\t\t\t\trotation\n\
1.0\t\t\t\tscale (km/map unit)\n";

pub const RAMP_GPD: &str = "ramp.mpp\t\tmap projection parameters\n\
100 100\t\t\tcolumns rows\n\
49.5 49.5\t\tmap origin column,row\n\
1.0\t\t\tgrid cells per map unit\n";

/// `columns rows` with a single value on line 2.
pub const BAD_COLUMNS_GPD: &str = "N200correct.mpp\t\tmap projection parameters\n\
721\t\t\tcolumns rows\n\
360.0 360.0\t\tmap origin column,row\n\
8.0\t\t\tgrid cells per map unit\n";

/// Reference declared after the first line.
pub const NO_REFERENCE_GPD: &str = "721 721\t\t\tcolumns rows\n\
N200correct.mpp\t\tmap projection parameters\n";

/// Reference to a projection file that does not exist.
pub const DANGLING_GPD: &str = "missing.mpp\t\tmap projection parameters\n\
10 10\t\t\tcolumns rows\n";

/// A temporary definitions directory, removed on drop.
pub struct DefinitionsFixture {
    dir: TempDir,
}

impl DefinitionsFixture {
    /// An empty directory.
    pub fn empty() -> Self {
        Self {
            dir: crate::temp_test_dir_with_prefix("mapxmaps_"),
        }
    }

    /// A directory seeded with every fixture in this module.
    pub fn standard() -> Self {
        let fixture = Self::empty();
        for (name, contents) in [
            ("N200correct.mpp", N200CORRECT_MPP),
            ("Nl.gpd", NL_GPD),
            ("Nh.gpd", NH_GPD),
            ("S200correct.mpp", S200CORRECT_MPP),
            ("Sl.gpd", SL_GPD),
            ("Nps.mpp", NPS_MPP),
            ("N3B.gpd", N3B_GPD),
            ("ramp.mpp", RAMP_MPP),
            ("ramp.gpd", RAMP_GPD),
            ("bad_columns.gpd", BAD_COLUMNS_GPD),
            ("noref.gpd", NO_REFERENCE_GPD),
            ("dangling.gpd", DANGLING_GPD),
        ] {
            fixture.write(name, contents);
        }
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the directory and return its path.
    pub fn write(&self, file_name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, contents).expect("Failed to write fixture file");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_fixture_writes_files() {
        let fixture = DefinitionsFixture::standard();
        assert!(fixture.path().join("Nl.gpd").exists());
        assert!(fixture.path().join("N200correct.mpp").exists());
    }

    #[test]
    fn test_fixture_lines_are_tab_delimited() {
        for line in NL_GPD.lines() {
            assert!(line.contains('\t'), "{:?}", line);
        }
    }
}
