//! Display-ready slices: per-vertex heights sampled at a level of detail.
//!
//! A level of detail `lod` keeps every `increment`-th sample on both axes,
//! where `increment` is 1 for `lod == 0` and `lod * 2` otherwise. The last
//! row and column of a slice are shared with its neighbours and are always
//! kept, even when the increment does not land on them.
//!
//! Tiling never clamps the last slice of a row or column, so it can hang
//! over the grid edge. Preparation clips such a slice to the cells that
//! exist in the root grid, through any chain of parent slices. A clipped
//! slice left one cell wide or tall only repeats the edge its neighbour
//! already covers and is dropped by [`display_ready_slices`], as are slices
//! of an overhanging window that hold no cells at all.

use rayon::prelude::*;
use serde::Serialize;
use terrain_common::{MapVector, Result, TerrainError};
use tracing::debug;

use crate::grid::HeightGrid;
use crate::slice::MapDataSlice;
use crate::tiling;

/// Highest supported level of detail.
pub const MAX_LEVEL_OF_DETAIL: usize = 6;

/// Sample step for a level of detail.
pub fn lod_increment(lod: usize) -> usize {
    if lod == 0 {
        1
    } else {
        lod * 2
    }
}

/// Indices `0, step, 2*step, ...` below `len`, always ending on `len - 1`.
fn sample_indices(len: usize, step: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).step_by(step).collect();
    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }
    indices
}

/// Heights of one slice, simplified and ready for mesh and texture building.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayReadySlice {
    /// Origin of the slice in the parent's cell indices.
    pub offset: (usize, usize),
    /// Extent of the cells that exist in the parent.
    pub width: usize,
    pub height: usize,
    /// Whether the slice hung over the grid edge and was cut back.
    pub clipped: bool,
    pub level_of_detail: usize,
    /// Slice columns kept as vertices.
    pub sample_columns: Vec<usize>,
    /// Slice rows kept as vertices.
    pub sample_rows: Vec<usize>,
    /// Planar scale inherited from the root grid.
    pub scale: f32,
    /// Centered position of the slice's top-left cell.
    pub top_left: MapVector,
    /// Normalized heights per vertex, row-major.
    pub normalized: Vec<f32>,
    /// Squished heights per vertex, row-major.
    pub squished: Vec<f32>,
}

impl DisplayReadySlice {
    /// Sample `slice` at `lod`, clipped to the cells that exist.
    pub fn from_slice(slice: &MapDataSlice<'_>, lod: usize) -> Result<Self> {
        if lod > MAX_LEVEL_OF_DETAIL {
            return Err(TerrainError::InvalidLevelOfDetail {
                lod,
                width: slice.width(),
                height: slice.height(),
            });
        }

        let (offset_x, offset_y) = slice.offset();
        let (width, height) = slice.readable_extent();

        if width == 0 || height == 0 {
            let parent = slice.parent();
            let (parent_width, parent_height) = parent.readable_extent();
            return Err(TerrainError::out_of_bounds(
                format!("{:?}", slice.window()),
                format!(
                    "{}x{} parent grid with {}x{} readable cells",
                    parent.width(),
                    parent.height(),
                    parent_width,
                    parent_height
                ),
            ));
        }

        let increment = lod_increment(lod);
        let sample_columns = sample_indices(width, increment);
        let sample_rows = sample_indices(height, increment);

        let vertex_count = sample_columns.len() * sample_rows.len();
        let mut normalized = Vec::with_capacity(vertex_count);
        let mut squished = Vec::with_capacity(vertex_count);
        for &y in &sample_rows {
            for &x in &sample_columns {
                normalized.push(slice.normalized(x, y));
                squished.push(slice.squished(x, y));
            }
        }

        Ok(Self {
            offset: (offset_x, offset_y),
            width,
            height,
            clipped: width < slice.width() || height < slice.height(),
            level_of_detail: lod,
            sample_columns,
            sample_rows,
            scale: slice.scale(),
            top_left: slice.top_left(),
            normalized,
            squished,
        })
    }

    pub fn vertices_per_line(&self) -> usize {
        self.sample_columns.len()
    }

    pub fn vertex_rows(&self) -> usize {
        self.sample_rows.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices_per_line() * self.vertex_rows()
    }

    /// A clipped slice at most one sample wide or tall. With overlapping
    /// tiles those samples are the neighbour's shared edge.
    pub fn is_degenerate(&self) -> bool {
        self.clipped && (self.width < 2 || self.height < 2)
    }

    /// Normalized height of vertex `(vx, vy)`.
    pub fn normalized_at(&self, vx: usize, vy: usize) -> Option<f32> {
        if vx >= self.vertices_per_line() || vy >= self.vertex_rows() {
            return None;
        }
        self.normalized.get(vy * self.vertices_per_line() + vx).copied()
    }

    /// Centered planar position of vertex `(vx, vy)` within the slice.
    pub fn vertex_position(&self, vx: usize, vy: usize) -> Option<MapVector> {
        let column = *self.sample_columns.get(vx)?;
        let row = *self.sample_rows.get(vy)?;
        Some(MapVector::new(
            self.top_left.x + column as f32,
            self.top_left.y - row as f32,
        ))
    }
}

/// Tile `grid` into overlapping square slices and sample each at `lod`.
///
/// Slices are prepared in parallel; order matches [`tiling::slices_of_size`].
pub fn display_ready_slices(
    grid: &dyn HeightGrid,
    slice_size: usize,
    lod: usize,
) -> Result<Vec<DisplayReadySlice>> {
    let mut slices = tiling::slices_of_size(grid, slice_size)?;

    // An overhanging grid can yield windows with no samples behind them
    let planned = slices.len();
    slices.retain(|slice| {
        let (width, height) = slice.readable_extent();
        width > 0 && height > 0
    });
    if slices.len() < planned {
        debug!(
            empty = planned - slices.len(),
            "Skipping slices outside the readable cells"
        );
    }

    let mut prepared: Vec<DisplayReadySlice> = slices
        .par_iter()
        .map(|slice| DisplayReadySlice::from_slice(slice, lod))
        .collect::<Result<_>>()?;

    let total = prepared.len();
    prepared.retain(|slice| !slice.is_degenerate());

    debug!(
        slices = prepared.len(),
        dropped = total - prepared.len(),
        slice_size,
        lod,
        "Prepared display-ready slices"
    );

    Ok(prepared)
}
