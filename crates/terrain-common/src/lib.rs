//! Common types shared across the terrain grid crates.

pub mod bbox;
pub mod error;
pub mod metadata;
pub mod point;

pub use bbox::BoundingBox;
pub use error::{Result, TerrainError};
pub use metadata::MapMetadata;
pub use point::{MapPoint, MapVector};
