//! Bounding box types and operations.

use crate::MapPoint;
use serde::{Deserialize, Serialize};

/// A geographic or projected bounding box.
///
/// For geographic extents coordinates are in degrees (x = lon, y = lat).
/// For Web Mercator extents they are in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Smallest box containing both points, in any corner order.
    pub fn from_corners(a: MapPoint, b: MapPoint) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Width of the bounding box in coordinate units.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the bounding box in coordinate units.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Center point of the box.
    pub fn center(&self) -> MapPoint {
        MapPoint::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let bbox = BoundingBox::from_corners(
            MapPoint::new(-111.0, 37.0),
            MapPoint::new(-112.0, 36.0),
        );
        assert_eq!(bbox.min_x, -112.0);
        assert_eq!(bbox.min_y, 36.0);
        assert_eq!(bbox.max_x, -111.0);
        assert_eq!(bbox.max_y, 37.0);
    }
}
