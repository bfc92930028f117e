#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between WGS84 latitude/longitude and the SVY21 grid, the
//! transverse Mercator projection used for surveying in Singapore.
//!
//! Both directions are closed-form series evaluations over fixed constants.
//! They accept any input without validation and never fail.

use std::num::ParseFloatError;

use thiserror::Error;
use tracing::trace;

pub mod coords {
    pub mod latlon;
    pub mod svy21;
}
pub mod utility;

pub use coords::latlon::LatLon;
pub use coords::svy21::Svy21;

pub(crate) mod projections {
    pub mod ellipsoid;
    pub mod transverse_mercator;
}

pub(crate) mod constants;

use projections::transverse_mercator::SVY21;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Coordinate string is invalid: {0}")]
    InvalidCoord(String),
    #[error("Could not parse {field} from {value:?}: {source}")]
    ParseFloat {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Projects a WGS84 latitude/longitude in degrees onto the SVY21 grid,
/// returning `(northing, easting)` in meters.
///
/// # Usage
///
/// ```
/// let (northing, easting) = svy21::to_projected(1.3699278977737488, 103.85695034976466);
///
/// assert!((northing - 39105.269).abs() < 1e-3);
/// assert!((easting - 30629.967).abs() < 1e-3);
/// ```
pub fn to_projected(latitude: f64, longitude: f64) -> (f64, f64) {
    let (northing, easting) = SVY21.forward(latitude, longitude);
    trace!(latitude, longitude, northing, easting, "projected to SVY21");
    (northing, easting)
}

/// Converts an SVY21 northing/easting in meters back to WGS84,
/// returning `(latitude, longitude)` in degrees.
///
/// # Usage
///
/// ```
/// let (latitude, longitude) = svy21::to_geographic(39105.269, 30629.967);
///
/// assert!((latitude - 1.3699278977737488).abs() < 1e-9);
/// assert!((longitude - 103.85695034976466).abs() < 1e-9);
/// ```
pub fn to_geographic(northing: f64, easting: f64) -> (f64, f64) {
    let (latitude, longitude) = SVY21.reverse(northing, easting);
    trace!(northing, easting, latitude, longitude, "converted SVY21 to lat/lon");
    (latitude, longitude)
}
