use std::{fmt::Display, str::FromStr};

use crate::{Error, Svy21, utility::parse_pair};

/// Representation of a WGS84 Latitude/Longitude point, in degrees. Can be
/// converted to/from [`Svy21`].
///
/// No range checks are made: the projection series are defined for any
/// real value, they only lose accuracy far from Singapore.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    #[cfg_attr(feature = "serde", serde(alias = "lat"))]
    pub(crate) latitude: f64,
    #[cfg_attr(feature = "serde", serde(alias = "lon"))]
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Creates a latitude/longitude point.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::new(1.3446255443241177, 103.72794378041792);
    ///
    /// assert_eq!(coord.latitude(), 1.3446255443241177);
    /// assert_eq!(coord.longitude(), 103.72794378041792);
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> LatLon {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// let coord = Svy21::new(48187.789, 27720.130);
    ///
    /// let converted = LatLon::from_svy21(&coord);
    ///
    /// assert!((converted.latitude() - 1.4520670518379692).abs() < 1e-9);
    /// assert!((converted.longitude() - 103.83080332777138).abs() < 1e-9);
    /// ```
    pub fn from_svy21(value: &Svy21) -> LatLon {
        value.to_latlon()
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::LatLon;
    ///
    /// let coord = LatLon::new(1.4520670518379692, 103.83080332777138);
    ///
    /// let converted = coord.to_svy21();
    ///
    /// // Survey markers are given to the millimeter
    /// assert!((converted.northing() - 48187.789).abs() < 1e-3);
    /// assert!((converted.easting() - 27720.130).abs() < 1e-3);
    /// ```
    pub fn to_svy21(&self) -> Svy21 {
        let (northing, easting) = crate::to_projected(self.latitude, self.longitude);
        Svy21::new(northing, easting)
    }
}

impl From<Svy21> for LatLon {
    fn from(value: Svy21) -> Self {
        value.to_latlon()
    }
}

/// Parses `"<latitude> <longitude>"`. The two values may be separated by
/// whitespace or a comma.
///
/// # Usage
///
/// ```
/// use svy21::LatLon;
///
/// let coord: LatLon = "1.366666, 103.833333".parse().unwrap();
///
/// assert_eq!(coord, LatLon::new(1.366666, 103.833333));
/// assert!("1.366666".parse::<LatLon>().is_err());
/// ```
impl FromStr for LatLon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = parse_pair(s, ["latitude", "longitude"])?;
        Ok(LatLon::new(latitude, longitude))
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_round_trips_through_parse() {
        let coord = LatLon::new(1.3699278977737488, 103.85695034976466);
        let printed = coord.to_string();

        assert_eq!(printed, "1.3699278977737488 103.85695034976466");
        assert_eq!(printed.parse::<LatLon>().unwrap(), coord);
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        let coord = LatLon::new(120.0, -400.0);

        assert_eq!(coord.latitude(), 120.0);
        assert_eq!(coord.longitude(), -400.0);
    }

    #[test]
    fn from_impl_matches_method() {
        let svy = Svy21::new(36307.704, 16272.970);

        assert_eq!(LatLon::from(svy), svy.to_latlon());
        assert_eq!(LatLon::from_svy21(&svy), svy.to_latlon());
    }
}
