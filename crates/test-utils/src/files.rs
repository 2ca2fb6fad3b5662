//! Temporary grid documents on disk.

use std::fs;
use std::path::PathBuf;

use terrain_common::MapMetadata;

/// Creates a temporary directory for test output.
///
/// The directory is automatically cleaned up when the returned `TempDir` is dropped.
pub fn temp_test_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("terrain_test")
        .tempdir()
        .expect("Failed to create temporary test directory")
}

/// Writes a grid document (`{"metadata": ..., "rows": ...}`) into `dir`.
pub fn write_grid_document(
    dir: &tempfile::TempDir,
    name: &str,
    metadata: &MapMetadata,
    rows: &[Vec<f32>],
) -> PathBuf {
    let document = serde_json::json!({
        "metadata": metadata,
        "rows": rows,
    });
    write_text(dir, name, &document.to_string())
}

/// Writes arbitrary text into `dir`, returning the file path.
pub fn write_text(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::unit_metadata;

    #[test]
    fn test_write_grid_document() {
        let dir = temp_test_dir();
        let path = write_grid_document(&dir, "grid.json", &unit_metadata(0.0, 1.0), &[vec![0.0, 1.0]]);

        let text = fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rows"][0][1], 1.0);
        assert_eq!(value["metadata"]["cell_size"], 1.0);
    }
}
