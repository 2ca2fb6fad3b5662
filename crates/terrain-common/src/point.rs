//! Coordinate pair types.
//!
//! `MapPoint` holds geographic degrees or projected meters, `MapVector`
//! holds grid-cell units. They are kept as separate types so a position on
//! the grid can never be passed where a longitude/latitude is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A geographic (lon, lat) or projected (easting, northing) coordinate.
///
/// The same structure is used for both spaces; callers keep track of which
/// one a given value is in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

impl MapPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Longitude in degrees, when this is a geographic point.
    pub fn lon(&self) -> f64 {
        self.x
    }

    /// Latitude in degrees, when this is a geographic point.
    pub fn lat(&self) -> f64 {
        self.y
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.x, self.y)
    }
}

/// A planar offset measured in grid cells.
///
/// Depending on the query this is relative to the grid's geometric center
/// (y up) or to the top-left cell center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MapVector {
    pub x: f32,
    pub y: f32,
}

impl MapVector {
    pub const ZERO: MapVector = MapVector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Largest per-axis difference to another vector.
    pub fn max_abs_diff(&self, other: &MapVector) -> f32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for MapVector {
    type Output = MapVector;

    fn add(self, rhs: MapVector) -> MapVector {
        MapVector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for MapVector {
    type Output = MapVector;

    fn sub(self, rhs: MapVector) -> MapVector {
        MapVector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for MapVector {
    type Output = MapVector;

    fn neg(self) -> MapVector {
        MapVector::new(-self.x, -self.y)
    }
}

impl fmt::Display for MapVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
