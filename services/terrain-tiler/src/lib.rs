//! Terrain tiler.
//!
//! Loads a height grid document, tiles it into display-ready slices and
//! reports where every slice and trail lands on the globe.

pub mod document;
pub mod report;

pub use document::{load_trails, GridDocument};
pub use report::{build_report, colour_hex_map, default_regions, SliceReport, TilingReport};
