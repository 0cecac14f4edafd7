//! Tests for the grid catalog and georeferencing helpers.

use grid_common::{grids, BoundingBox, EpsgCode, GeoTransform};

// ============================================================================
// Catalog tests
// ============================================================================

#[test]
fn test_catalog_has_ten_grids_with_unique_names() {
    let all = grids::all();
    let mut names: Vec<_> = all.iter().map(|g| g.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 10);
}

#[test]
fn test_cell_heights_are_negative() {
    for grid in grids::all() {
        assert!(grid.cell_width > 0.0, "{}", grid.name);
        assert!(grid.cell_height < 0.0, "{}", grid.name);
    }
}

#[test]
fn test_epsg_lookup_by_identifier() {
    let code: EpsgCode = "EPSG:3411".parse().unwrap();
    let matches = grids::by_epsg(code);
    assert_eq!(matches, vec![grids::SSMI_POLAR_STEREO_NORTH_25KM]);
    assert!("EPSG:4326".parse::<EpsgCode>().is_err());
}

#[test]
fn test_polar_stereo_north_corners() {
    // Corners of N3B.gpd
    let bbox = grids::SSMI_POLAR_STEREO_NORTH_25KM.bbox();
    assert_eq!(bbox, BoundingBox::new(-3850000.0, -5350000.0, 3750000.0, 5850000.0));
}

#[test]
fn test_ease_grid_north_corners() {
    // Corners of Nl.gpd
    let bbox = grids::EASE_GRID_NORTH_25KM.bbox();
    let expected = 9036842.762500001;
    assert!((bbox.min_x + expected).abs() < 0.01);
    assert!((bbox.max_x - expected).abs() < 0.01);
    assert!((bbox.min_y + expected).abs() < 0.01);
    assert!((bbox.max_y - expected).abs() < 0.01);
}

#[test]
fn test_cell_centers() {
    let grid = grids::EASE_GRID2_NORTH_25KM;
    let (xs, ys) = grid.cell_centers();
    assert_eq!(xs.len(), 720);
    assert_eq!(ys.len(), 720);
    assert_eq!(xs[0], -8987500.0);
    assert_eq!(ys[0], 8987500.0);
    assert_eq!(xs[719], 8987500.0);
    assert_eq!(ys[719], -8987500.0);
}

#[test]
fn test_by_epsg() {
    let north = grids::by_epsg(EpsgCode::Epsg3408);
    assert_eq!(north.len(), 2);
    assert!(grids::by_epsg(EpsgCode::Epsg3413).is_empty());
}

#[test]
fn test_geotransform_roundtrip_through_extent() {
    let transform = GeoTransform::north_up(100.0, -500.0, -100.0, 500.0);
    let extent = transform.extent(10, 10);
    assert_eq!(extent, BoundingBox::new(-500.0, -500.0, 500.0, 500.0));
}

#[test]
fn test_catalog_serializes_epsg() {
    let json = serde_json::to_value(grids::EASE_GRID_GLOBAL_25KM).unwrap();
    assert_eq!(json["epsg"], "Epsg3410");
    assert_eq!(json["cols"], 1383);
}
