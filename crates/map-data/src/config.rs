//! Configuration for tiling and display preparation.

use serde::{Deserialize, Serialize};
use terrain_common::{Result, TerrainError};

use crate::display::MAX_LEVEL_OF_DETAIL;

/// Configuration for tiling a height grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    /// Side length of square slices, in samples.
    pub slice_size: usize,

    /// Level of detail used when preparing slices for display (0-6).
    pub level_of_detail: usize,

    /// Share one row/column of samples between neighbouring slices.
    pub slice_overlap: bool,

    /// Blended steps inserted between neighbouring colour regions.
    pub region_smoothing: usize,
}

impl Default for TilingConfig {
    fn default() -> Self {
        Self {
            slice_size: 121,
            level_of_detail: 0,
            slice_overlap: true,
            region_smoothing: 100,
        }
    }
}

impl TilingConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("TERRAIN_SLICE_SIZE") {
            if let Ok(size) = val.parse() {
                config.slice_size = size;
            }
        }

        if let Ok(val) = std::env::var("TERRAIN_LEVEL_OF_DETAIL") {
            if let Ok(lod) = val.parse() {
                config.level_of_detail = lod;
            }
        }

        if let Ok(val) = std::env::var("TERRAIN_SLICE_OVERLAP") {
            config.slice_overlap = val.to_lowercase() == "true" || val == "1";
        }

        if let Ok(val) = std::env::var("TERRAIN_REGION_SMOOTHING") {
            if let Ok(amount) = val.parse() {
                config.region_smoothing = amount;
            }
        }

        config
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let min_size = if self.slice_overlap { 2 } else { 1 };
        if self.slice_size < min_size {
            return Err(TerrainError::config(format!(
                "slice_size must be >= {}",
                min_size
            )));
        }

        if self.level_of_detail > MAX_LEVEL_OF_DETAIL {
            return Err(TerrainError::config(format!(
                "level_of_detail must be 0-{}",
                MAX_LEVEL_OF_DETAIL
            )));
        }

        Ok(())
    }
}
