//! Placing trails and points of interest on a height grid.
//!
//! Trail records arrive already parsed (node ids with lat/lon). Placement
//! converts each node to the grid's centered frame and drops nodes that fall
//! outside the grid. A trail with at least one node inside is kept.

use serde::{Deserialize, Serialize};
use terrain_common::{MapPoint, MapVector, Result};
use tracing::debug;

use crate::grid::HeightGrid;

fn default_colour_name() -> String {
    "unnamedRouteColorName".to_string()
}

/// One node of a trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
}

impl TrailNode {
    pub fn new(id: i64, lat: f64, lon: f64) -> Self {
        Self { id, lat, lon }
    }

    /// The node as a (lon, lat) point.
    pub fn as_map_point(&self) -> MapPoint {
        MapPoint::new(self.lon, self.lat)
    }
}

/// An ordered sequence of nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub id: i64,
    #[serde(default = "default_colour_name")]
    pub colour_name: String,
    pub nodes: Vec<TrailNode>,
}

/// A single marker, such as a town or a viewpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    pub icon: String,
}

/// Trails and points of interest covering one area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailData {
    #[serde(default)]
    pub trails: Vec<Trail>,
    #[serde(default)]
    pub poi_nodes: Vec<PointOfInterest>,
}

impl TrailData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A position in the grid's centered frame, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayNode {
    pub x: f32,
    pub y: f32,
}

impl DisplayNode {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vector(&self) -> MapVector {
        MapVector::new(self.x, self.y)
    }
}

impl From<MapVector> for DisplayNode {
    fn from(v: MapVector) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A trail reduced to the nodes that lie on the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailPlacement {
    pub trail_id: i64,
    pub colour_name: String,
    pub nodes: Vec<DisplayNode>,
    /// Nodes dropped because they fell outside the grid.
    pub skipped: usize,
}

/// A point of interest positioned on the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiPlacement {
    pub id: i64,
    pub icon: String,
    pub node: DisplayNode,
}

/// Position a trail on `grid`, or `None` when every node is off the grid.
pub fn place_trail(grid: &dyn HeightGrid, trail: &Trail) -> Option<TrailPlacement> {
    let mut nodes = Vec::with_capacity(trail.nodes.len());
    let mut skipped = 0;

    for node in &trail.nodes {
        match grid.map_specific_coordinates_from_lat_lon(node.as_map_point()) {
            Ok(position) => nodes.push(DisplayNode::from(position)),
            Err(e) => {
                debug!(trail = trail.id, node = node.id, error = %e, "Skipping trail node");
                skipped += 1;
            }
        }
    }

    if nodes.is_empty() {
        debug!(trail = trail.id, "Trail lies outside the map");
        return None;
    }

    Some(TrailPlacement {
        trail_id: trail.id,
        colour_name: trail.colour_name.clone(),
        nodes,
        skipped,
    })
}

/// Position every trail that touches `grid`.
pub fn place_trails(grid: &dyn HeightGrid, data: &TrailData) -> Vec<TrailPlacement> {
    data.trails
        .iter()
        .filter_map(|trail| place_trail(grid, trail))
        .collect()
}

/// Position the points of interest that lie on `grid`.
pub fn place_points_of_interest(
    grid: &dyn HeightGrid,
    pois: &[PointOfInterest],
) -> Vec<PoiPlacement> {
    pois.iter()
        .filter_map(|poi| {
            let point = MapPoint::new(poi.lon, poi.lat);
            match grid.map_specific_coordinates_from_lat_lon(point) {
                Ok(position) => Some(PoiPlacement {
                    id: poi.id,
                    icon: poi.icon.clone(),
                    node: position.into(),
                }),
                Err(e) => {
                    debug!(poi = poi.id, error = %e, "Skipping point of interest");
                    None
                }
            }
        })
        .collect()
}

/// Keep the display nodes that lie on `grid`.
///
/// Nodes are centered positions; the check uses the same half-cell margin
/// as [`HeightGrid::lat_lon_coordinates`].
pub fn visible_display_nodes(grid: &dyn HeightGrid, nodes: &[DisplayNode]) -> Vec<DisplayNode> {
    let top_left = grid.top_left();
    nodes
        .iter()
        .filter(|node| grid.lat_lon_coordinates(node.as_vector() - top_left).is_ok())
        .copied()
        .collect()
}
