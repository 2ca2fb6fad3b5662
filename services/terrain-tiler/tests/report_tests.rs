//! End-to-end: grid documents on disk through to a serialized report.

use map_data::{HeightGrid, TilingConfig};
use terrain_tiler::{build_report, load_trails, GridDocument};
use test_utils::{
    create_hill_grid, grand_canyon_metadata, temp_test_dir, write_grid_document, write_text,
    FAR_AWAY_TRAILS_JSON,
};

#[test]
fn test_document_to_report() {
    let dir = temp_test_dir();
    let rows = create_hill_grid(21, 17, 700.0, 2800.0);
    let path = write_grid_document(&dir, "canyon.json", &grand_canyon_metadata(), &rows);

    let grid = GridDocument::load(&path).unwrap().into_map_data().unwrap();
    assert_eq!((grid.width(), grid.height()), (21, 17));

    let config = TilingConfig {
        slice_size: 9,
        level_of_detail: 2,
        ..TilingConfig::default()
    };
    let report = build_report(&grid, &config, None).unwrap();

    // Origins 0, 8, 16 across and 0, 8, 16 down; the bottom row is one sample tall
    assert_eq!(report.slices.len(), 6);
    assert!(report
        .slices
        .iter()
        .all(|s| s.min_squished >= 0.0 && s.max_squished <= 1.0));
    assert!(report.slices.iter().all(|s| s.top_left_lat_lon.lon() < -112.49));

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["config"]["slice_size"], 9);
    assert_eq!(value["slices"][0]["window"]["width"], 9);
}

#[test]
fn test_far_away_trails_in_report() {
    let dir = temp_test_dir();
    let rows = create_hill_grid(5, 5, 700.0, 2800.0);
    let grid_path = write_grid_document(&dir, "grid.json", &grand_canyon_metadata(), &rows);
    let trails_path = write_text(&dir, "trails.json", FAR_AWAY_TRAILS_JSON);

    let grid = GridDocument::load(&grid_path).unwrap().into_map_data().unwrap();
    let trails = load_trails(&trails_path).unwrap();
    assert_eq!(trails.trails.len(), 1);

    let report = build_report(&grid, &TilingConfig::default(), Some(&trails)).unwrap();
    assert!(report.trails.is_empty());
    assert!(report.points_of_interest.is_empty());
    // A 5x5 grid fits in one default-size slice, clipped
    assert_eq!(report.slices.len(), 1);
    assert!(report.slices[0].clipped);
}

#[test]
fn test_broken_document() {
    let dir = temp_test_dir();
    let path = write_text(&dir, "broken.json", "{\"metadata\": 4}");
    assert!(GridDocument::load(&path).is_err());
}
