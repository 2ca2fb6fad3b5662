//! Common test fixtures for terrain grids.
//!
//! This module provides metadata and trail documents for areas that the
//! test suite uses repeatedly.

use terrain_common::MapMetadata;

/// Metadata for a 30 m grid near the Grand Canyon.
///
/// Lower-left corner at (-112.5, 36.0), heights from 700 m to 2800 m.
pub fn grand_canyon_metadata() -> MapMetadata {
    MapMetadata::new(700.0, 2800.0, 30.0, -112.5, 36.0).expect("fixture metadata is valid")
}

/// Metadata with one-meter cells anchored at the origin.
pub fn unit_metadata(min_height: f32, max_height: f32) -> MapMetadata {
    MapMetadata::new(min_height, max_height, 1.0, 0.0, 0.0).expect("fixture metadata is valid")
}

/// Known lon/lat points with their spherical Web Mercator positions.
pub mod mercator {
    /// (lon, lat, x, y)
    pub const KNOWN_POINTS: &[(f64, f64, f64, f64)] = &[
        (0.0, 0.0, 0.0, 0.0),
        (-112.1401, 36.0544, -12483378.83, 4308109.31),
    ];
}

/// A trail document with one trail and one point of interest.
///
/// Coordinates lie well outside the Grand Canyon fixture, so every node is
/// skipped when placed on a grid built from [`grand_canyon_metadata`].
pub const FAR_AWAY_TRAILS_JSON: &str = r#"{
    "trails": [
        {
            "id": 100000000297,
            "colour_name": "blue",
            "nodes": [
                {"id": 173886087, "lat": 37.0383775, "lon": -111.1872653},
                {"id": 173895047, "lat": 37.0382516, "lon": -111.1864535}
            ]
        }
    ],
    "poi_nodes": [
        {"id": 1, "lat": 37.0383775, "lon": -111.1872653, "icon": "city"}
    ]
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_canyon_metadata() {
        let metadata = grand_canyon_metadata();
        assert_eq!(metadata.cell_size(), 30.0);
        assert_eq!(metadata.height_range(), 2100.0);
    }

    #[test]
    fn test_unit_metadata() {
        let metadata = unit_metadata(1.0, 9.0);
        assert_eq!(metadata.cell_size(), 1.0);
        assert_eq!(metadata.lower_left_corner_x(), 0.0);
    }

    #[test]
    fn test_trails_json_parses() {
        let value: serde_json::Value = serde_json::from_str(FAR_AWAY_TRAILS_JSON).unwrap();
        assert_eq!(value["trails"][0]["nodes"].as_array().unwrap().len(), 2);
    }
}
