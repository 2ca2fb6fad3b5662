//! Coordinate conversions for terrain grids.
//!
//! Implements the distance/degree conversion and the spherical Web Mercator
//! projection from scratch without external dependencies.

pub mod converter;
pub mod mercator;

pub use converter::{CoordinateConverter, METERS_PER_DEGREE};
pub use mercator::{
    lon_lat_to_web_mercator, web_mercator_to_lon_lat, EARTH_RADIUS, MAX_LATITUDE,
    WEB_MERCATOR_MAX_EXTENT,
};
