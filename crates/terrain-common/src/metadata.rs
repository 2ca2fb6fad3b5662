//! Descriptive metadata for a height grid.

use crate::{MapPoint, Result, TerrainError};
use serde::{Deserialize, Serialize};

/// Height range, cell size and geographic anchor of a height grid.
///
/// Immutable once built. Grids share one instance through an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    /// Lowest height the grid is declared to contain.
    min_height: f32,
    /// Highest height the grid is declared to contain.
    max_height: f32,
    /// Physical distance between adjacent samples, in meters.
    cell_size: f32,
    /// Longitude of the south-west grid corner, in degrees.
    lower_left_corner_x: f64,
    /// Latitude of the south-west grid corner, in degrees.
    lower_left_corner_y: f64,
}

impl MapMetadata {
    /// Create validated metadata.
    pub fn new(
        min_height: f32,
        max_height: f32,
        cell_size: f32,
        lower_left_corner_x: f64,
        lower_left_corner_y: f64,
    ) -> Result<Self> {
        let metadata = Self {
            min_height,
            max_height,
            cell_size,
            lower_left_corner_x,
            lower_left_corner_y,
        };
        metadata.validate()?;
        Ok(metadata)
    }

    /// Check the invariants. Deserialized metadata must be validated before use.
    pub fn validate(&self) -> Result<()> {
        if !self.min_height.is_finite() || !self.max_height.is_finite() {
            return Err(TerrainError::invalid_metadata(
                "height range must be finite",
            ));
        }

        if self.min_height > self.max_height {
            return Err(TerrainError::invalid_metadata(format!(
                "min_height {} is greater than max_height {}",
                self.min_height, self.max_height
            )));
        }

        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(TerrainError::invalid_metadata(format!(
                "cell_size must be > 0, got {}",
                self.cell_size
            )));
        }

        if !self.lower_left_corner_x.is_finite() || !self.lower_left_corner_y.is_finite() {
            return Err(TerrainError::invalid_metadata(
                "lower-left corner must be finite",
            ));
        }

        Ok(())
    }

    pub fn min_height(&self) -> f32 {
        self.min_height
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn lower_left_corner_x(&self) -> f64 {
        self.lower_left_corner_x
    }

    pub fn lower_left_corner_y(&self) -> f64 {
        self.lower_left_corner_y
    }

    /// The south-west corner as a (lon, lat) point.
    pub fn lower_left_corner(&self) -> MapPoint {
        MapPoint::new(self.lower_left_corner_x, self.lower_left_corner_y)
    }

    /// Declared height span (`max_height - min_height`).
    pub fn height_range(&self) -> f32 {
        self.max_height - self.min_height
    }
}
