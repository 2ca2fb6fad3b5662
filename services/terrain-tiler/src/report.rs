//! Tiling reports.

use map_data::{
    colour_map, place_points_of_interest, place_trails, smooth_regions, tile, Color,
    DisplayReadySlice, HeightGrid, MapData, PoiPlacement, SliceWindow, TerrainRegion,
    TilingConfig, TrailData, TrailPlacement,
};
use serde::Serialize;
use terrain_common::{BoundingBox, MapPoint, Result};
use tracing::{debug, info};

/// Where one display-ready slice sits and what it holds.
#[derive(Debug, Clone, Serialize)]
pub struct SliceReport {
    pub window: SliceWindow,
    pub clipped: bool,
    pub vertex_count: usize,
    pub top_left_lat_lon: MapPoint,
    pub top_left_web_mercator: MapPoint,
    pub min_squished: f32,
    pub max_squished: f32,
}

impl SliceReport {
    fn new(
        prepared: &DisplayReadySlice,
        top_left_lat_lon: MapPoint,
        top_left_web_mercator: MapPoint,
    ) -> Self {
        let (min_squished, max_squished) = prepared
            .squished
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &s| {
                (min.min(s), max.max(s))
            });

        Self {
            window: SliceWindow::new(
                prepared.offset.0,
                prepared.offset.1,
                prepared.width,
                prepared.height,
            ),
            clipped: prepared.clipped,
            vertex_count: prepared.vertex_count(),
            top_left_lat_lon,
            top_left_web_mercator,
            min_squished,
            max_squished,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TilingReport {
    pub width: usize,
    pub height: usize,
    pub scale: f32,
    pub bounds: BoundingBox,
    pub config: TilingConfig,
    pub slices: Vec<SliceReport>,
    pub trails: Vec<TrailPlacement>,
    pub points_of_interest: Vec<PoiPlacement>,
}

/// Palette used when the caller does not supply one.
pub fn default_regions() -> Vec<TerrainRegion> {
    vec![
        TerrainRegion::new("valley", 0.15, Color::rgb(70, 110, 50)),
        TerrainRegion::new("slope", 0.45, Color::rgb(150, 120, 80)),
        TerrainRegion::new("cliff", 0.8, Color::rgb(170, 90, 60)),
        TerrainRegion::new("summit", 1.0, Color::rgb(235, 230, 220)),
    ]
}

/// Tile `grid` as `config` describes and place any trails on it.
pub fn build_report(
    grid: &MapData,
    config: &TilingConfig,
    trails: Option<&TrailData>,
) -> Result<TilingReport> {
    config.validate()?;

    let mut slices = Vec::new();
    for slice in tile(grid, config)? {
        let prepared = DisplayReadySlice::from_slice(&slice, config.level_of_detail)?;
        // Only overlapping tiles share their edge with a neighbour
        if config.slice_overlap && prepared.is_degenerate() {
            let (x, y) = prepared.offset;
            debug!(x, y, "Dropping edge-only slice");
            continue;
        }
        slices.push(SliceReport::new(
            &prepared,
            slice.top_left_lat_lon_point(),
            slice.top_left_as_web_mercator(),
        ));
    }

    let (placed_trails, points_of_interest) = match trails {
        Some(data) => (
            place_trails(grid, data),
            place_points_of_interest(grid, &data.poi_nodes),
        ),
        None => (Vec::new(), Vec::new()),
    };

    info!(
        slices = slices.len(),
        trails = placed_trails.len(),
        points_of_interest = points_of_interest.len(),
        "Built tiling report"
    );

    Ok(TilingReport {
        width: grid.width(),
        height: grid.height(),
        scale: grid.scale(),
        bounds: grid.bounds(),
        config: config.clone(),
        slices,
        trails: placed_trails,
        points_of_interest,
    })
}

/// Row-major `#rrggbbaa` colours of `grid` through the smoothed palette.
pub fn colour_hex_map(grid: &MapData, regions: &[TerrainRegion], smoothing: usize) -> Vec<String> {
    let smoothed = smooth_regions(regions, smoothing);
    colour_map(grid, &smoothed)
        .into_iter()
        .map(|c| format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a))
        .collect()
}
