//! Height grid generators for creating synthetic terrain.
//!
//! These generators create predictable, verifiable sample patterns that can
//! be used across the test suite.

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that slices read the right parent cell by
/// checking that `grid[row][col] == col * 1000 + row`.
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Splits row-major samples into rows of `width`.
pub fn to_rows(data: &[f32], width: usize) -> Vec<Vec<f32>> {
    data.chunks(width).map(<[f32]>::to_vec).collect()
}

/// Rows counting up from `start` in row-major order.
///
/// ```
/// use test_utils::ramp_rows;
///
/// assert_eq!(ramp_rows(3, 2, 1.0), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
/// ```
pub fn ramp_rows(width: usize, height: usize, start: f32) -> Vec<Vec<f32>> {
    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| start + (row * width + col) as f32)
                .collect()
        })
        .collect()
}

/// Creates a grid with a single rounded hill in the middle, in meters.
///
/// Heights fall from `peak` at the center to `base` at the corners, which
/// gives a realistic spread of normalized and squished values.
pub fn create_hill_grid(width: usize, height: usize, base: f32, peak: f32) -> Vec<Vec<f32>> {
    let center_x = (width as f32 - 1.0) / 2.0;
    let center_y = (height as f32 - 1.0) / 2.0;
    let max_dist = (center_x * center_x + center_y * center_y).sqrt().max(1.0);

    (0..height)
        .map(|row| {
            (0..width)
                .map(|col| {
                    let dx = col as f32 - center_x;
                    let dy = row as f32 - center_y;
                    let t = ((dx * dx + dy * dy).sqrt() / max_dist).min(1.0);
                    // Cosine falloff keeps the slope smooth at both ends
                    base + (peak - base) * 0.5 * (1.0 + (t * std::f32::consts::PI).cos())
                })
                .collect()
        })
        .collect()
}
