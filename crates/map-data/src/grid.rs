//! Height grids and the geographic queries shared by every grid variant.
//!
//! [`HeightGrid`] is the "height-queryable grid" capability. It has two
//! implementors: [`MapData`], which owns a dense sample array, and
//! [`MapDataSlice`], a window that forwards reads to its parent. Every
//! derived query (normalized heights, lat/lon lookups, tiling) is written
//! once as a provided method and works on both.
//!
//! Coordinate frames used below:
//! - *cell indices* `(x, y)`: `x` grows east, `y` grows south from the
//!   top-left sample.
//! - *top-left-relative* positions: grid-cell units from the top-left cell
//!   center, `x` east and `y` north (so rows below the top have `y < 0`).
//! - *centered* positions: grid-cell units from the geometric center of the
//!   grid, `x` east and `y` north.

use std::sync::Arc;

use projection::CoordinateConverter;
use terrain_common::{BoundingBox, MapMetadata, MapPoint, MapVector, Result, TerrainError};
use tracing::debug;

use crate::display::{self, DisplayReadySlice};
use crate::slice::MapDataSlice;
use crate::tiling;

/// Slack when comparing a lat/lon against the grid's half span, degrees.
/// Absorbs float rounding for points exactly on the outer half-cell edge.
const EDGE_EPSILON_DEGREES: f64 = 1e-9;

/// A rectangular grid of height samples anchored on the globe.
pub trait HeightGrid: Send + Sync {
    /// Number of samples per row.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Raw height sample at cell `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when the cell lies outside the backing storage.
    fn raw(&self, x: usize, y: usize) -> f32;

    /// Planar scale factor, `1 / max(width, height)` of the root grid.
    fn scale(&self) -> f32;

    fn metadata(&self) -> &MapMetadata;

    fn converter(&self) -> &CoordinateConverter;

    /// Geographic south-west corner of this grid's own extent.
    fn lower_left_corner(&self) -> MapPoint;

    /// Extent of the cells, from the top-left, that are backed by samples.
    ///
    /// Equal to `(width, height)` for an owned grid. A window hanging over
    /// the edge of its root grid reports only the part that exists.
    fn readable_extent(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    /// Centered position of the top-left cell center.
    fn top_left(&self) -> MapVector {
        MapVector::new(
            (self.width() as f32 - 1.0) / -2.0,
            (self.height() as f32 - 1.0) / 2.0,
        )
    }

    /// (lon, lat) of the center of the top-left cell.
    fn top_left_lat_lon_point(&self) -> MapPoint {
        let top_left = self.top_left();
        let corner = self.lower_left_corner();
        let converter = self.converter();

        let center_x = self.width() as f64 / 2.0;
        let center_y = self.height() as f64 / 2.0;

        MapPoint::new(
            converter.transform_coordinate_by_distance(center_x + top_left.x as f64, corner.x),
            converter.transform_coordinate_by_distance(center_y + top_left.y as f64, corner.y),
        )
    }

    /// Web Mercator position of the center of the top-left cell.
    fn top_left_as_web_mercator(&self) -> MapPoint {
        self.converter()
            .project_point_to_web_mercator(self.top_left_lat_lon_point())
    }

    /// (lon, lat) of a top-left-relative position.
    ///
    /// Valid positions reach half a cell past the outer cell centers:
    /// `x` in `[-0.5, width - 0.5]` and `y` in `[-height + 0.5, 0.5]`.
    fn lat_lon_coordinates(&self, position: MapVector) -> Result<MapPoint> {
        let x = position.x as f64;
        let y = position.y as f64;
        let max_x = self.width() as f64 - 0.5;
        let min_y = -(self.height() as f64) + 0.5;

        if !x.is_finite() || !y.is_finite() || x < -0.5 || x > max_x || y > 0.5 || y < min_y {
            return Err(TerrainError::out_of_bounds(
                position.to_string(),
                format!("x in [-0.5, {}], y in [{}, 0.5]", max_x, min_y),
            ));
        }

        let top_left = self.top_left_lat_lon_point();
        let converter = self.converter();
        Ok(MapPoint::new(
            converter.transform_coordinate_by_distance(x, top_left.x),
            converter.transform_coordinate_by_distance(y, top_left.y),
        ))
    }

    /// Web Mercator position of a top-left-relative position.
    fn web_mercator_coordinates(&self, position: MapVector) -> Result<MapPoint> {
        let lat_lon = self.lat_lon_coordinates(position)?;
        Ok(self.converter().project_point_to_web_mercator(lat_lon))
    }

    /// Centered position of a (lon, lat) point.
    ///
    /// Fails when the point is farther from the grid's geometric center than
    /// half the grid span on either axis.
    fn map_specific_coordinates_from_lat_lon(&self, point: MapPoint) -> Result<MapVector> {
        let converter = self.converter();
        let top_left = self.top_left_lat_lon_point();

        let center_lon = converter
            .transform_coordinate_by_distance((self.width() as f64 - 1.0) / 2.0, top_left.x);
        let center_lat = converter
            .transform_coordinate_by_distance(-(self.height() as f64 - 1.0) / 2.0, top_left.y);

        let max_x_distance = converter.transform_coordinate_by_distance(self.width() as f64 / 2.0, 0.0);
        let max_y_distance = converter.transform_coordinate_by_distance(self.height() as f64 / 2.0, 0.0);

        let within_x = (point.x - center_lon).abs() <= max_x_distance + EDGE_EPSILON_DEGREES;
        let within_y = (point.y - center_lat).abs() <= max_y_distance + EDGE_EPSILON_DEGREES;
        if !(within_x && within_y) {
            return Err(TerrainError::out_of_bounds(
                point.to_string(),
                format!(
                    "{} ± ({:.7}, {:.7}) degrees",
                    MapPoint::new(center_lon, center_lat),
                    max_x_distance,
                    max_y_distance
                ),
            ));
        }

        Ok(MapVector::new(
            converter.distance_between_coordinates(center_lon, point.x),
            converter.distance_between_coordinates(center_lat, point.y),
        ))
    }

    /// Offset of a (lon, lat) point from the top-left cell center.
    ///
    /// `y` grows southwards here, matching cell indices, so it is the negated
    /// latitude distance. No bounds check is made.
    fn raw_coordinates_from_lat_lon(&self, point: MapPoint) -> MapVector {
        let converter = self.converter();
        let top_left = self.top_left_lat_lon_point();

        MapVector::new(
            converter.distance_between_coordinates(top_left.x, point.x),
            -converter.distance_between_coordinates(top_left.y, point.y),
        )
    }

    /// Factor turning meters of height into the grid's planar units.
    fn height_multiplier(&self) -> f32 {
        (1.0 / self.metadata().cell_size()) * self.scale()
    }

    /// Height above `min_height`, in the same units as the planar scale.
    fn normalized(&self, x: usize, y: usize) -> f32 {
        (self.raw(x, y) - self.metadata().min_height()) * self.height_multiplier()
    }

    /// Height mapped linearly onto `[0, 1]` by the declared height range.
    ///
    /// Not clamped: samples outside the declared range land outside
    /// `[0, 1]`, and a zero-width range yields a non-finite value.
    fn squished(&self, x: usize, y: usize) -> f32 {
        let metadata = self.metadata();
        (self.raw(x, y) - metadata.min_height()) / metadata.height_range()
    }

    /// Geographic extent spanned by the cell centers.
    fn bounds(&self) -> BoundingBox {
        let top_left = self.top_left_lat_lon_point();
        let converter = self.converter();
        let bottom_right = MapPoint::new(
            converter.transform_coordinate_by_distance(self.width() as f64 - 1.0, top_left.x),
            converter.transform_coordinate_by_distance(-(self.height() as f64 - 1.0), top_left.y),
        );
        BoundingBox::from_corners(top_left, bottom_right)
    }

    /// A slice covering the whole grid.
    fn as_slice(&self) -> MapDataSlice<'_>
    where
        Self: Sized,
    {
        MapDataSlice::new(self, 0, 0, self.width(), self.height())
    }

    /// Tile the region from `top_left` (inclusive) to `bottom_right`
    /// (exclusive origin bound) with `slice_width × slice_height` windows.
    ///
    /// See [`tiling::slice_region`].
    fn get_slices(
        &self,
        top_left: (usize, usize),
        bottom_right: (usize, usize),
        slice_width: usize,
        slice_height: usize,
        do_offset: bool,
    ) -> Result<Vec<MapDataSlice<'_>>>
    where
        Self: Sized,
    {
        tiling::slice_region(self, top_left, bottom_right, slice_width, slice_height, do_offset)
    }

    /// Tile the whole grid with overlapping square slices.
    fn slices_of_size(&self, slice_size: usize) -> Result<Vec<MapDataSlice<'_>>>
    where
        Self: Sized,
    {
        tiling::slices_of_size(self, slice_size)
    }

    /// Tile the whole grid and prepare every slice for display at `lod`.
    fn display_ready_slices(&self, slice_size: usize, lod: usize) -> Result<Vec<DisplayReadySlice>>
    where
        Self: Sized,
    {
        display::display_ready_slices(self, slice_size, lod)
    }
}

fn sample_count(width: usize, height: usize) -> Result<usize> {
    width.checked_mul(height).ok_or_else(|| {
        TerrainError::invalid_grid(format!("{}x{} grid is too large", width, height))
    })
}

/// A dense, owned grid of height samples.
///
/// Samples are stored row-major (`y * width + x`).
#[derive(Debug, Clone)]
pub struct MapData {
    data: Vec<f32>,
    width: usize,
    height: usize,
    scale: f32,
    metadata: Arc<MapMetadata>,
    converter: CoordinateConverter,
}

impl MapData {
    /// Create a zero-filled `width × height` grid.
    pub fn new(width: usize, height: usize, metadata: Arc<MapMetadata>) -> Result<Self> {
        let len = sample_count(width, height)?;
        Self::from_vec(vec![0.0; len], width, height, metadata)
    }

    /// Create a grid from row-major samples.
    pub fn from_vec(
        data: Vec<f32>,
        width: usize,
        height: usize,
        metadata: Arc<MapMetadata>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(TerrainError::invalid_grid(format!(
                "grid must be at least 1x1, got {}x{}",
                width, height
            )));
        }

        let expected = sample_count(width, height)?;
        if data.len() != expected {
            return Err(TerrainError::invalid_grid(format!(
                "expected {} samples for a {}x{} grid, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        let scale = 1.0 / width.max(height) as f32;
        let converter = CoordinateConverter::new(metadata.cell_size());

        debug!(width, height, scale, "Created map data");

        Ok(Self {
            data,
            width,
            height,
            scale,
            metadata,
            converter,
        })
    }

    /// Create a grid from rows, `rows[y][x]`, top row first.
    pub fn from_rows(rows: &[Vec<f32>], metadata: Arc<MapMetadata>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(TerrainError::invalid_grid(format!(
                "row {} has {} samples, expected {}",
                y,
                row.len(),
                width
            )));
        }

        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(data, width, height, metadata)
    }

    /// Grid with metadata fitted to the samples: the height range is the
    /// data's min/max, cells are one meter, and the corner sits at (0, 0).
    pub fn for_testing(rows: &[Vec<f32>]) -> Result<Self> {
        let (min, max) = rows
            .iter()
            .flatten()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &h| {
                (min.min(h), max.max(h))
            });

        if min > max {
            return Err(TerrainError::invalid_grid("grid has no samples"));
        }

        let metadata = MapMetadata::new(min, max, 1.0, 0.0, 0.0)?;
        Self::from_rows(rows, Arc::new(metadata))
    }

    /// Overwrite the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, h: f32) {
        let index = self.index(x, y);
        self.data[index] = h;
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// All samples, row-major.
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Shared handle to the metadata, for building sibling grids.
    pub fn metadata_handle(&self) -> Arc<MapMetadata> {
        Arc::clone(&self.metadata)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) out of range for {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }
}

impl HeightGrid for MapData {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn raw(&self, x: usize, y: usize) -> f32 {
        self.data[self.index(x, y)]
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn metadata(&self) -> &MapMetadata {
        &self.metadata
    }

    fn converter(&self) -> &CoordinateConverter {
        &self.converter
    }

    fn lower_left_corner(&self) -> MapPoint {
        self.metadata.lower_left_corner()
    }
}
