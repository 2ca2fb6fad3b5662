//! Height grids for terrain display.
//!
//! This crate holds the in-memory model of a digital elevation grid and the
//! operations a display front end needs from it:
//!
//! - **Geographic lookups**: lat/lon and Web Mercator positions of cells,
//!   and the grid position of a lat/lon point
//! - **Normalized heights**: raw samples scaled to planar units or `[0, 1]`
//! - **Tiling**: overlapping slices that share their edge samples
//! - **Overlays**: colour maps and trail placement
//!
//! # Architecture
//!
//! ```text
//! MapData (owned samples + MapMetadata)
//!      │
//!      ├─► HeightGrid provided methods (lat/lon, normalized, squished)
//!      │
//!      ├─► slices_of_size / get_slices
//!      │         │
//!      │         └─► MapDataSlice (borrows parent, same HeightGrid API)
//!      │                   │
//!      │                   └─► DisplayReadySlice (sampled at a level of detail)
//!      │
//!      └─► colour_map / place_trails
//! ```
//!
//! # Example
//!
//! ```
//! use map_data::{HeightGrid, MapData};
//!
//! let grid = MapData::for_testing(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//!     vec![7.0, 8.0, 9.0],
//! ])
//! .unwrap();
//!
//! let slices = grid.slices_of_size(2).unwrap();
//! assert_eq!(slices.len(), 9);
//! assert_eq!(slices[4].raw(0, 0), grid.raw(1, 1));
//! ```

pub mod colour;
pub mod config;
pub mod display;
pub mod grid;
pub mod slice;
pub mod tiling;
pub mod trail;

// Re-export commonly used types at crate root
pub use colour::{colour_map, grayscale_map, smooth_regions, Color, TerrainRegion};
pub use config::TilingConfig;
pub use display::{display_ready_slices, lod_increment, DisplayReadySlice, MAX_LEVEL_OF_DETAIL};
pub use grid::{HeightGrid, MapData};
pub use slice::MapDataSlice;
pub use tiling::{plan_slices, slice_region, slices_of_size, tile, SliceWindow};
pub use trail::{
    place_points_of_interest, place_trail, place_trails, visible_display_nodes, DisplayNode,
    PoiPlacement, PointOfInterest, Trail, TrailData, TrailNode, TrailPlacement,
};
