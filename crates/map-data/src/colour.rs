//! Colour maps built from squished heights.
//!
//! Produces per-cell colour arrays for texture builders: a black-to-white
//! ramp, and a terrain-region lookup where each cell takes the colour of the
//! first region whose threshold is at or above its squished height.

use serde::{Deserialize, Serialize};

use crate::grid::HeightGrid;

/// RGBA colour, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Linear blend towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;

        Color::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
            channel(self.a, other.a),
        )
    }
}

/// A named terrain band: cells with squished height up to `height` use
/// `colour`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainRegion {
    pub name: String,
    pub height: f32,
    pub colour: Color,
}

impl TerrainRegion {
    pub fn new(name: impl Into<String>, height: f32, colour: Color) -> Self {
        Self {
            name: name.into(),
            height,
            colour,
        }
    }
}

/// Sort `regions` by height and insert `amount` blended steps between each
/// neighbouring pair, giving `len * amount - amount + 1` regions.
///
/// With fewer than two regions, or `amount == 0`, the sorted input is
/// returned unchanged.
pub fn smooth_regions(regions: &[TerrainRegion], amount: usize) -> Vec<TerrainRegion> {
    let mut sorted = regions.to_vec();
    sorted.sort_by(|a, b| a.height.total_cmp(&b.height));

    if sorted.len() < 2 || amount == 0 {
        return sorted;
    }

    let mut smoothed = Vec::with_capacity(sorted.len() * amount - amount + 1);
    for (i, pair) in sorted.windows(2).enumerate() {
        let (current, next) = (&pair[0], &pair[1]);
        // The final step of one pair equals the first of the next
        let steps = if i + 2 == sorted.len() { amount } else { amount - 1 };

        for j in 0..=steps {
            let percentage = j as f32 / amount as f32;
            smoothed.push(TerrainRegion {
                name: format!("{}_Smoothed_{}", i, j),
                height: current.height + (next.height - current.height) * percentage,
                colour: current.colour.lerp(next.colour, percentage),
            });
        }
    }

    smoothed
}

/// Colour for one squished height, or transparent above every region.
pub fn region_colour(regions: &[TerrainRegion], squished: f32) -> Color {
    regions
        .iter()
        .find(|region| squished <= region.height)
        .map(|region| region.colour)
        .unwrap_or(Color::TRANSPARENT)
}

/// Row-major colour map of `grid` through `regions` (which must be sorted).
pub fn colour_map(grid: &dyn HeightGrid, regions: &[TerrainRegion]) -> Vec<Color> {
    let (width, height) = (grid.width(), grid.height());
    let mut colours = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            colours.push(region_colour(regions, grid.squished(x, y)));
        }
    }
    colours
}

/// Row-major black-to-white ramp of `grid`'s squished heights.
pub fn grayscale_map(grid: &dyn HeightGrid) -> Vec<Color> {
    let (width, height) = (grid.width(), grid.height());
    let mut colours = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            colours.push(Color::BLACK.lerp(Color::WHITE, grid.squished(x, y)));
        }
    }
    colours
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::MapData;

    fn bands() -> Vec<TerrainRegion> {
        vec![
            TerrainRegion::new("rock", 1.0, Color::rgb(120, 100, 80)),
            TerrainRegion::new("water", 0.2, Color::rgb(0, 0, 255)),
            TerrainRegion::new("grass", 0.6, Color::rgb(0, 200, 0)),
        ]
    }

    #[test]
    fn test_lerp() {
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.0), Color::BLACK);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 1.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 0.5), Color::rgb(128, 128, 128));
        assert_eq!(Color::BLACK.lerp(Color::WHITE, 3.0), Color::WHITE);
        assert_eq!(Color::BLACK.lerp(Color::WHITE, f32::NAN), Color::BLACK);
    }

    #[test]
    fn test_smooth_regions_length_and_order() {
        let smoothed = smooth_regions(&bands(), 4);
        assert_eq!(smoothed.len(), 3 * 4 - 4 + 1);
        assert!(smoothed.windows(2).all(|w| w[0].height <= w[1].height));
        assert_eq!(smoothed.first().unwrap().colour, Color::rgb(0, 0, 255));
        assert_eq!(smoothed.last().unwrap().colour, Color::rgb(120, 100, 80));
        assert!((smoothed[2].height - 0.4).abs() < 1e-6);
        assert_eq!(smoothed[4].colour, Color::rgb(0, 200, 0));
    }

    #[test]
    fn test_smooth_regions_degenerate_inputs() {
        assert!(smooth_regions(&[], 10).is_empty());
        let one = vec![TerrainRegion::new("only", 0.5, Color::WHITE)];
        assert_eq!(smooth_regions(&one, 10), one);
        let sorted = smooth_regions(&bands(), 0);
        assert_eq!(sorted[0].name, "water");
    }

    #[test]
    fn test_colour_map_uses_first_matching_region() {
        let grid = MapData::for_testing(&[vec![0.0, 5.0, 10.0]]).unwrap();
        let regions = smooth_regions(&bands(), 1);
        let colours = colour_map(&grid, &regions);
        assert_eq!(
            colours,
            vec![
                Color::rgb(0, 0, 255),
                Color::rgb(0, 200, 0),
                Color::rgb(120, 100, 80)
            ]
        );
    }

    #[test]
    fn test_above_every_region_is_transparent() {
        let regions = vec![TerrainRegion::new("low", 0.3, Color::WHITE)];
        assert_eq!(region_colour(&regions, 0.9), Color::TRANSPARENT);
    }

    #[test]
    fn test_grayscale_map() {
        let grid = MapData::for_testing(&[vec![0.0], vec![4.0]]).unwrap();
        assert_eq!(grayscale_map(&grid), vec![Color::BLACK, Color::WHITE]);
    }
}
