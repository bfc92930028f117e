use std::{fmt::Display, str::FromStr};

use crate::{Error, LatLon, utility::parse_pair};

/// Representation of an SVY21 grid point: northing and easting in meters,
/// offset by the SVY21 false origin. Can be converted to/from [`LatLon`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Svy21 {
    #[cfg_attr(feature = "serde", serde(alias = "n"))]
    pub(crate) northing: f64,
    #[cfg_attr(feature = "serde", serde(alias = "e"))]
    pub(crate) easting: f64,
}

impl Svy21 {
    /// Creates an SVY21 point from its northing and easting.
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// let coord = Svy21::new(38744.572, 28001.642);
    ///
    /// assert_eq!(coord.northing(), 38744.572);
    /// assert_eq!(coord.easting(), 28001.642);
    /// ```
    pub fn new(northing: f64, easting: f64) -> Svy21 {
        Self {
            northing,
            easting,
        }
    }

    /// Returns the northing in meters.
    #[inline]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Returns the easting in meters.
    #[inline]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Converts from [`LatLon`] to [`Svy21`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::{LatLon, Svy21};
    ///
    /// let coord = LatLon::new(1.3446255443241177, 103.72794378041792);
    ///
    /// let converted = Svy21::from_latlon(&coord);
    ///
    /// assert!((converted.northing() - 36307.704).abs() < 1e-3);
    /// assert!((converted.easting() - 16272.970).abs() < 1e-3);
    /// ```
    pub fn from_latlon(value: &LatLon) -> Svy21 {
        value.to_svy21()
    }

    /// Converts from [`Svy21`] to [`LatLon`]
    ///
    /// # Usage
    ///
    /// ```
    /// use svy21::Svy21;
    ///
    /// // The false origin sits on the projection origin
    /// let converted = Svy21::new(38744.572, 28001.642).to_latlon();
    ///
    /// assert!((converted.latitude() - 1.366666).abs() < 1e-9);
    /// assert!((converted.longitude() - 103.833333).abs() < 1e-9);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let (latitude, longitude) = crate::to_geographic(self.northing, self.easting);
        LatLon::new(latitude, longitude)
    }
}

impl From<LatLon> for Svy21 {
    fn from(value: LatLon) -> Self {
        value.to_svy21()
    }
}

/// Parses `"<northing> <easting>"`. The two values may be separated by
/// whitespace or a comma.
impl FromStr for Svy21 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (northing, easting) = parse_pair(s, ["northing", "easting"])?;
        Ok(Svy21::new(northing, easting))
    }
}

impl Display for Svy21 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let northing = buf.format(self.northing);
        let mut buf = ryu::Buffer::new();
        let easting = buf.format(self.easting);
        write!(
            f,
            "{northing} {easting}",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let coord: Svy21 = "39105.269,30629.967".parse().unwrap();

        assert_eq!(coord, Svy21::new(39105.269, 30629.967));
        assert_eq!(coord.to_string(), "39105.269 30629.967");
    }

    #[test]
    fn parse_reports_the_bad_field() {
        let err = "39105.269 x".parse::<Svy21>().unwrap_err();

        assert!(matches!(err, Error::ParseFloat { field: "easting", .. }));
        assert!(err.to_string().contains("easting"));
    }

    #[test]
    fn from_impl_matches_method() {
        let coord = LatLon::new(1.3, 103.9);

        assert_eq!(Svy21::from(coord), coord.to_svy21());
        assert_eq!(Svy21::from_latlon(&coord), coord.to_svy21());
    }
}
