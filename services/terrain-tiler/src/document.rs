//! Grid documents on disk.
//!
//! A document is JSON with the metadata and the samples, top row first:
//!
//! ```json
//! {
//!   "metadata": {
//!     "min_height": 700.0, "max_height": 2800.0, "cell_size": 30.0,
//!     "lower_left_corner_x": -112.5, "lower_left_corner_y": 36.0
//!   },
//!   "rows": [[700.0, 710.5], [702.0, 715.0]]
//! }
//! ```

use std::fs;
use std::path::Path;
use std::sync::Arc;

use map_data::{MapData, TrailData};
use serde::{Deserialize, Serialize};
use terrain_common::{MapMetadata, Result};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDocument {
    pub metadata: MapMetadata,
    pub rows: Vec<Vec<f32>>,
}

impl GridDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let document = Self::from_json(&text)?;
        info!(
            path = %path.display(),
            rows = document.rows.len(),
            "Loaded grid document"
        );
        Ok(document)
    }

    /// Validate the metadata and build the grid.
    pub fn into_map_data(self) -> Result<MapData> {
        self.metadata.validate()?;
        MapData::from_rows(&self.rows, Arc::new(self.metadata))
    }
}

pub fn load_trails(path: &Path) -> Result<TrailData> {
    let text = fs::read_to_string(path)?;
    let data = TrailData::from_json(&text)?;
    info!(
        path = %path.display(),
        trails = data.trails.len(),
        points_of_interest = data.poi_nodes.len(),
        "Loaded trail data"
    );
    Ok(data)
}
