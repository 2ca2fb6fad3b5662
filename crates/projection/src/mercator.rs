//! Spherical Web Mercator (EPSG:3857).
//!
//! Forward and inverse projection between (lon, lat) degrees and
//! (easting, northing) meters on a sphere with the WGS84 semi-major axis.
//!
//! The forward projection diverges at the poles. Terrain grids are expected
//! to sit well inside ±[`MAX_LATITUDE`]; nothing is clamped, so latitudes
//! outside ±90° give meaningless (NaN or infinite) northings.

use std::f64::consts::PI;
use terrain_common::MapPoint;

/// Sphere radius used by Web Mercator (WGS84 semi-major axis), meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// Half the width of the projected world, meters.
pub const WEB_MERCATOR_MAX_EXTENT: f64 = PI * EARTH_RADIUS;

/// Latitude at which the projected square world ends, degrees.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Project a (lon, lat) point in degrees to Web Mercator meters.
pub fn lon_lat_to_web_mercator(point: MapPoint) -> MapPoint {
    let lambda = point.lon().to_radians();
    let phi = point.lat().to_radians();

    let x = EARTH_RADIUS * lambda;
    let y = EARTH_RADIUS * (PI / 4.0 + phi / 2.0).tan().ln();

    MapPoint::new(x, y)
}

/// Inverse projection from Web Mercator meters to (lon, lat) degrees.
pub fn web_mercator_to_lon_lat(point: MapPoint) -> MapPoint {
    let lon = (point.x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

    MapPoint::new(lon, lat)
}
