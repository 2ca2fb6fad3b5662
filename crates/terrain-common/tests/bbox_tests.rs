//! Tests for BoundingBox operations.

use terrain_common::{BoundingBox, MapPoint};

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_x, -180.0);
    assert_eq!(bbox.min_y, -90.0);
    assert_eq!(bbox.max_x, 180.0);
    assert_eq!(bbox.max_y, 90.0);
}

#[test]
fn test_bbox_copy() {
    let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let bbox2 = bbox1;
    assert_eq!(bbox1, bbox2);
}

// ============================================================================
// Dimension tests (width/height/center)
// ============================================================================

#[test]
fn test_bbox_width_negative_coords() {
    let bbox = BoundingBox::new(-112.5, 36.0, -112.0, 36.25);
    assert!((bbox.width() - 0.5).abs() < 1e-12);
    assert!((bbox.height() - 0.25).abs() < 1e-12);
}

#[test]
fn test_bbox_zero_dimensions() {
    let bbox = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
    assert_eq!(bbox.width(), 0.0);
    assert_eq!(bbox.height(), 0.0);
    assert_eq!(bbox.center(), MapPoint::new(5.0, 5.0));
}

#[test]
fn test_bbox_center() {
    let bbox = BoundingBox::new(-10.0, 20.0, 10.0, 40.0);
    assert_eq!(bbox.center(), MapPoint::new(0.0, 30.0));
}

#[test]
fn test_from_corners_any_order() {
    let a = MapPoint::new(-112.0, 36.25);
    let b = MapPoint::new(-112.5, 36.0);
    assert_eq!(BoundingBox::from_corners(a, b), BoundingBox::from_corners(b, a));
    assert_eq!(BoundingBox::from_corners(a, b), BoundingBox::new(-112.5, 36.0, -112.0, 36.25));
}
