//! Non-owning windows over a parent grid.

use std::fmt;

use projection::CoordinateConverter;
use terrain_common::{MapMetadata, MapPoint};

use crate::grid::HeightGrid;
use crate::tiling::SliceWindow;

/// A rectangular window into a parent [`HeightGrid`].
///
/// Reads are forwarded to `parent.raw(offset_x + x, offset_y + y)`; no
/// samples are copied. The window is not checked against the parent when it
/// is created, so a slice that hangs over the parent's edge only fails when
/// one of the missing cells is actually read.
///
/// Scale, metadata and converter are the parent's. The geographic corner is
/// shifted by the offset, so lat/lon queries on a slice describe the slice's
/// own cells.
#[derive(Clone, Copy)]
pub struct MapDataSlice<'a> {
    parent: &'a dyn HeightGrid,
    offset_x: usize,
    offset_y: usize,
    width: usize,
    height: usize,
    lower_left_corner: MapPoint,
}

impl<'a> MapDataSlice<'a> {
    pub fn new(
        parent: &'a dyn HeightGrid,
        offset_x: usize,
        offset_y: usize,
        width: usize,
        height: usize,
    ) -> Self {
        let converter = parent.converter();
        let parent_corner = parent.lower_left_corner();

        // Rows of the parent south of this window; negative when it overhangs.
        let rows_below = parent.height() as f64 - (offset_y + height) as f64;

        let lower_left_corner = MapPoint::new(
            converter.transform_coordinate_by_distance(offset_x as f64, parent_corner.x),
            converter.transform_coordinate_by_distance(rows_below, parent_corner.y),
        );

        Self {
            parent,
            offset_x,
            offset_y,
            width,
            height,
            lower_left_corner,
        }
    }

    pub fn from_window(parent: &'a dyn HeightGrid, window: SliceWindow) -> Self {
        Self::new(parent, window.x, window.y, window.width, window.height)
    }

    /// Origin of this window in the parent's cell indices.
    pub fn offset(&self) -> (usize, usize) {
        (self.offset_x, self.offset_y)
    }

    pub fn window(&self) -> SliceWindow {
        SliceWindow::new(self.offset_x, self.offset_y, self.width, self.height)
    }

    pub fn parent(&self) -> &'a dyn HeightGrid {
        self.parent
    }

    /// Whether every cell of the window exists in the parent.
    pub fn fits_within_parent(&self) -> bool {
        self.window()
            .fits_within(self.parent.width(), self.parent.height())
    }
}

impl HeightGrid for MapDataSlice<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn raw(&self, x: usize, y: usize) -> f32 {
        self.parent.raw(self.offset_x + x, self.offset_y + y)
    }

    fn scale(&self) -> f32 {
        self.parent.scale()
    }

    fn metadata(&self) -> &MapMetadata {
        self.parent.metadata()
    }

    fn converter(&self) -> &CoordinateConverter {
        self.parent.converter()
    }

    fn lower_left_corner(&self) -> MapPoint {
        self.lower_left_corner
    }

    fn readable_extent(&self) -> (usize, usize) {
        let (parent_width, parent_height) = self.parent.readable_extent();
        (
            self.width.min(parent_width.saturating_sub(self.offset_x)),
            self.height.min(parent_height.saturating_sub(self.offset_y)),
        )
    }
}

impl fmt::Debug for MapDataSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapDataSlice")
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("parent_width", &self.parent.width())
            .field("parent_height", &self.parent.height())
            .finish()
    }
}
