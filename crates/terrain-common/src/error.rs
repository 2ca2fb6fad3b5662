//! Error types for terrain grid operations.

use thiserror::Error;

/// Result type alias using TerrainError.
pub type Result<T> = std::result::Result<T, TerrainError>;

/// Primary error type for terrain grid operations.
///
/// Every variant signals a caller contract violation. Nothing here is
/// retried; callers either filter the offending input (trail overlays skip
/// out-of-bounds nodes) or abort the operation.
#[derive(Debug, Error)]
pub enum TerrainError {
    // === Coordinate Errors ===
    #[error("Index out of bounds! {requested} is outside {bounds}")]
    OutOfBounds { requested: String, bounds: String },

    // === Tiling Errors ===
    #[error("Too small slice width ({width}) or height ({height})")]
    InvalidSliceSize { width: usize, height: usize },

    #[error("Level of detail {lod} cannot simplify a {width}x{height} slice")]
    InvalidLevelOfDetail {
        lod: usize,
        width: usize,
        height: usize,
    },

    // === Data Errors ===
    #[error("Invalid map metadata: {0}")]
    InvalidMetadata(String),

    #[error("Invalid height grid: {0}")]
    InvalidGrid(String),

    #[error("Invalid grid document: {0}")]
    InvalidDocument(String),

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl TerrainError {
    /// Create an OutOfBounds error.
    pub fn out_of_bounds(requested: impl Into<String>, bounds: impl Into<String>) -> Self {
        Self::OutOfBounds {
            requested: requested.into(),
            bounds: bounds.into(),
        }
    }

    /// Create an InvalidMetadata error.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }

    /// Create an InvalidGrid error.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Create a ConfigError.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Whether the error describes a coordinate outside the grid.
    ///
    /// Overlay code uses this to skip a node instead of aborting.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, TerrainError::OutOfBounds { .. })
    }
}

// Conversion from common error types
impl From<std::io::Error> for TerrainError {
    fn from(err: std::io::Error) -> Self {
        TerrainError::InvalidDocument(err.to_string())
    }
}

impl From<serde_json::Error> for TerrainError {
    fn from(err: serde_json::Error) -> Self {
        TerrainError::InvalidDocument(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = TerrainError::out_of_bounds("(3.1, 0)", "x in [-0.5, 2.5]");
        assert!(err.is_out_of_bounds());
        assert_eq!(
            err.to_string(),
            "Index out of bounds! (3.1, 0) is outside x in [-0.5, 2.5]"
        );
    }

    #[test]
    fn test_slice_size_is_not_out_of_bounds() {
        let err = TerrainError::InvalidSliceSize {
            width: 1,
            height: 1,
        };
        assert!(!err.is_out_of_bounds());
        assert!(err.to_string().contains("slice width (1)"));
    }

    #[test]
    fn test_from_serde_json() {
        let err: TerrainError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, TerrainError::InvalidDocument(_)));
    }
}
