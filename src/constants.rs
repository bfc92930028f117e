// Semi-major axis a
pub(crate) const WGS84_A: f64 = 6_378_137.;
// Flattening
#[allow(clippy::unreadable_literal)]
pub(crate) const WGS84_F: f64 = 1.0 / 298.257223563;

// SVY21 origin, in decimal degrees. These are the published decimal values,
// not a conversion of 1°22'02.9154"N 103°49'31.9752"E.
pub(crate) const ORIGIN_LATITUDE: f64 = 1.366_666;
pub(crate) const ORIGIN_LONGITUDE: f64 = 103.833_333;

pub(crate) const FALSE_NORTHING: f64 = 38_744.572;
pub(crate) const FALSE_EASTING: f64 = 28_001.642;

// SVY21 central scale factor
pub(crate) const SCALE_FACTOR: f64 = 1.0;
