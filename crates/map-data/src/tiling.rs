//! Partitioning a grid into overlapping, addressable slices.
//!
//! Windows are laid out row-major from the requested top-left cell. With
//! `do_offset` set, neighbouring windows share one row/column of samples so
//! meshes built from them join without gaps: the stride is `size - 1`.
//!
//! Windows are emitted while their origin is strictly less than the
//! bottom-right bound, and the last window of each row/column keeps the
//! full slice size even when that overhangs the region. Downstream mesh
//! generation relies on uniform slice dimensions, so nothing is clamped.

use serde::{Deserialize, Serialize};
use terrain_common::{Result, TerrainError};
use tracing::debug;

use crate::config::TilingConfig;
use crate::grid::HeightGrid;
use crate::slice::MapDataSlice;

/// Origin and extent of one slice, in the parent's cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliceWindow {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl SliceWindow {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// One past the last column.
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the last row.
    pub fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether the window lies inside a `width × height` grid.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// Lay out slice windows over a region without touching any grid.
///
/// Fails with [`TerrainError::InvalidSliceSize`] when a stride would not be
/// positive: sizes of 1 or less with `do_offset`, 0 without.
pub fn plan_slices(
    top_left: (usize, usize),
    bottom_right: (usize, usize),
    slice_width: usize,
    slice_height: usize,
    do_offset: bool,
) -> Result<Vec<SliceWindow>> {
    let overlap = usize::from(do_offset);
    if slice_width <= overlap || slice_height <= overlap {
        return Err(TerrainError::InvalidSliceSize {
            width: slice_width,
            height: slice_height,
        });
    }

    let stride_x = slice_width - overlap;
    let stride_y = slice_height - overlap;

    let mut windows = Vec::new();
    for y in (top_left.1..bottom_right.1).step_by(stride_y) {
        for x in (top_left.0..bottom_right.0).step_by(stride_x) {
            windows.push(SliceWindow::new(x, y, slice_width, slice_height));
        }
    }

    debug!(
        count = windows.len(),
        stride_x,
        stride_y,
        "Planned slices for region {:?}..{:?}",
        top_left,
        bottom_right
    );

    Ok(windows)
}

/// Tile a region of `grid` into slices borrowing it.
pub fn slice_region<'a>(
    grid: &'a dyn HeightGrid,
    top_left: (usize, usize),
    bottom_right: (usize, usize),
    slice_width: usize,
    slice_height: usize,
    do_offset: bool,
) -> Result<Vec<MapDataSlice<'a>>> {
    let windows = plan_slices(top_left, bottom_right, slice_width, slice_height, do_offset)?;

    let overhanging = windows
        .iter()
        .filter(|w| !w.fits_within(grid.width(), grid.height()))
        .count();
    if overhanging > 0 {
        debug!(
            overhanging,
            grid_width = grid.width(),
            grid_height = grid.height(),
            "Some slices extend past the grid edge"
        );
    }

    Ok(windows
        .into_iter()
        .map(|window| MapDataSlice::from_window(grid, window))
        .collect())
}

/// Tile the whole grid with overlapping square slices.
pub fn slices_of_size(grid: &dyn HeightGrid, slice_size: usize) -> Result<Vec<MapDataSlice<'_>>> {
    slice_region(
        grid,
        (0, 0),
        (grid.width(), grid.height()),
        slice_size,
        slice_size,
        true,
    )
}

/// Tile the whole grid as described by `config`.
pub fn tile<'a>(grid: &'a dyn HeightGrid, config: &TilingConfig) -> Result<Vec<MapDataSlice<'a>>> {
    slice_region(
        grid,
        (0, 0),
        (grid.width(), grid.height()),
        config.slice_size,
        config.slice_size,
        config.slice_overlap,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origins(windows: &[SliceWindow]) -> Vec<(usize, usize)> {
        windows.iter().map(|w| (w.x, w.y)).collect()
    }

    #[test]
    fn test_overlapping_stride() {
        let windows = plan_slices((0, 0), (10, 10), 5, 5, true).unwrap();
        assert_eq!(
            origins(&windows),
            vec![
                (0, 0),
                (4, 0),
                (8, 0),
                (0, 4),
                (4, 4),
                (8, 4),
                (0, 8),
                (4, 8),
                (8, 8),
            ]
        );
        assert!(windows.iter().all(|w| w.width == 5 && w.height == 5));
    }

    #[test]
    fn test_last_window_is_not_clamped() {
        let windows = plan_slices((0, 0), (10, 10), 5, 5, true).unwrap();
        let last = windows.last().unwrap();
        assert_eq!((last.right(), last.bottom()), (13, 13));
        assert!(!last.fits_within(10, 10));
    }

    #[test]
    fn test_without_offset() {
        let windows = plan_slices((0, 0), (6, 3), 3, 3, false).unwrap();
        assert_eq!(origins(&windows), vec![(0, 0), (3, 0)]);
    }

    #[test]
    fn test_region_starts_at_top_left() {
        let windows = plan_slices((2, 1), (7, 4), 3, 2, true).unwrap();
        assert_eq!(
            origins(&windows),
            vec![(2, 1), (4, 1), (6, 1), (2, 2), (4, 2), (6, 2), (2, 3), (4, 3), (6, 3)]
        );
    }

    #[test]
    fn test_empty_region() {
        assert!(plan_slices((5, 5), (5, 9), 3, 3, true).unwrap().is_empty());
        assert!(plan_slices((6, 0), (5, 9), 3, 3, true).unwrap().is_empty());
    }

    #[test]
    fn test_too_small_slices_rejected() {
        assert!(matches!(
            plan_slices((0, 0), (10, 10), 1, 1, true),
            Err(TerrainError::InvalidSliceSize { width: 1, height: 1 })
        ));
        assert!(plan_slices((0, 0), (10, 10), 5, 1, true).is_err());
        assert!(plan_slices((0, 0), (10, 10), 0, 3, false).is_err());
        assert!(plan_slices((0, 0), (10, 10), 1, 1, false).is_ok());
    }
}
