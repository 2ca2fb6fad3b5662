//! Conversion between grid distances and geographic degrees.
//!
//! Distances are measured in grid cells. A cell spans `cell_size` meters on
//! the ground, and one degree spans [`METERS_PER_DEGREE`] meters on either
//! axis (equirectangular approximation: longitude degrees are not shortened
//! with latitude). Both directions use the same factor, so
//! `distance_between_coordinates(o, transform_coordinate_by_distance(d, o))`
//! returns `d` up to float rounding.

use crate::mercator::{lon_lat_to_web_mercator, web_mercator_to_lon_lat, EARTH_RADIUS};
use std::f64::consts::PI;
use terrain_common::MapPoint;

/// Length of one degree of arc on the Web Mercator sphere, meters.
pub const METERS_PER_DEGREE: f64 = 2.0 * PI * EARTH_RADIUS / 360.0;

/// Stateless converter bound to a fixed cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateConverter {
    cell_size: f32,
}

impl CoordinateConverter {
    /// Create a converter for cells of `cell_size` meters.
    pub fn new(cell_size: f32) -> Self {
        Self { cell_size }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Degrees covered by one grid cell.
    pub fn degrees_per_cell(&self) -> f64 {
        self.cell_size as f64 / METERS_PER_DEGREE
    }

    /// Offset `origin` (degrees) by `distance` grid cells.
    pub fn transform_coordinate_by_distance(&self, distance: f64, origin: f64) -> f64 {
        origin + distance * self.degrees_per_cell()
    }

    /// Signed distance in grid cells from coordinate `a` to coordinate `b`.
    pub fn distance_between_coordinates(&self, a: f64, b: f64) -> f32 {
        ((b - a) / self.degrees_per_cell()) as f32
    }

    /// Project a (lon, lat) point to Web Mercator meters.
    pub fn project_point_to_web_mercator(&self, point: MapPoint) -> MapPoint {
        lon_lat_to_web_mercator(point)
    }

    /// Inverse of [`Self::project_point_to_web_mercator`].
    pub fn unproject_point_from_web_mercator(&self, point: MapPoint) -> MapPoint {
        web_mercator_to_lon_lat(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_per_degree() {
        assert!((METERS_PER_DEGREE - 111_319.490_793_273_57).abs() < 1e-6);
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let converter = CoordinateConverter::new(30.0);
        assert_eq!(converter.transform_coordinate_by_distance(0.0, -112.5), -112.5);
    }

    #[test]
    fn test_one_degree_of_cells() {
        // A cell exactly one degree wide
        let converter = CoordinateConverter::new(METERS_PER_DEGREE as f32);
        let moved = converter.transform_coordinate_by_distance(2.0, 10.0);
        assert!((moved - 12.0).abs() < 1e-6);
    }

    #[test]
    fn test_distance_is_signed() {
        let converter = CoordinateConverter::new(30.0);
        let east = converter.transform_coordinate_by_distance(5.0, 36.0);
        assert!((converter.distance_between_coordinates(36.0, east) - 5.0).abs() < 1e-4);
        assert!((converter.distance_between_coordinates(east, 36.0) + 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_round_trip() {
        let converter = CoordinateConverter::new(12.5);
        for &distance in &[-250.0, -0.5, 0.0, 0.25, 17.0, 480.5] {
            let coordinate = converter.transform_coordinate_by_distance(distance, -111.19);
            let back = converter.distance_between_coordinates(-111.19, coordinate);
            assert!((back as f64 - distance).abs() < 1e-4, "{} -> {}", distance, back);
        }
    }

    #[test]
    fn test_projection_delegates_to_web_mercator() {
        let converter = CoordinateConverter::new(1.0);
        let p = MapPoint::new(-111.0, 37.0);
        assert_eq!(
            converter.project_point_to_web_mercator(p),
            lon_lat_to_web_mercator(p)
        );
    }

    #[test]
    fn test_unproject_inverts_projection() {
        let converter = CoordinateConverter::new(30.0);
        let p = MapPoint::new(-112.1401, 36.0544);
        let projected = converter.project_point_to_web_mercator(p);
        let back = converter.unproject_point_from_web_mercator(projected);
        assert!((back.lon() - p.lon()).abs() < 1e-9);
        assert!((back.lat() - p.lat()).abs() < 1e-9);
    }
}
