use std::str::FromStr;

use crate::Error;

pub(crate) mod dms {
    /// Minutes per degree
    pub const DM: f64 = 60.;
    /// Seconds per minute
    pub const MS: f64 = 60.;
    /// Seconds per degree
    pub const DS: f64 = DM * MS;
}

/// Returns whether `y` is within absolute or relative `epsilon` of `x`.
///
/// Absolute precision is checked first. If either value is itself within
/// `epsilon` of zero, the relative check is skipped.
///
/// # Usage
///
/// ```
/// use svy21::utility::approx_eq;
///
/// assert!(approx_eq(38744.572, 38744.5725, 1e-3));
/// // Off by 5e-9 absolute, but within 1e-10 relative
/// assert!(approx_eq(103.833333, 103.833333005, 1e-10));
/// assert!(!approx_eq(0.0, 1e-5, 1e-6));
/// ```
pub fn approx_eq(x: f64, y: f64, epsilon: f64) -> bool {
    let diff = x - y;
    if (-epsilon..=epsilon).contains(&diff) {
        return true;
    }

    if (-epsilon..=epsilon).contains(&x) || (-epsilon..=epsilon).contains(&y) {
        return false;
    }

    (-epsilon..=epsilon).contains(&(diff / x)) || (-epsilon..=epsilon).contains(&(diff / y))
}

/// Converts a sexagesimal angle to decimal degrees. The sign of the result
/// follows `degrees`; `minutes` and `seconds` are taken as magnitudes.
///
/// The SVY21 origin is published as 1°22'02.9154"N 103°49'31.9752"E, but
/// the projection is defined on the truncated decimals `1.366666` and
/// `103.833333`. Converting the sexagesimal form gives a slightly different
/// origin, so this function is not used by the projection itself.
///
/// # Usage
///
/// ```
/// use svy21::utility::from_dms;
///
/// assert!((from_dms(1., 22., 2.9154) - 1.367476).abs() < 1e-6);
/// assert!((from_dms(-1., 30., 0.) + 1.5).abs() < f64::EPSILON);
/// ```
pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> f64 {
    let magnitude = degrees.abs() + minutes.abs() / dms::DM + seconds.abs() / dms::DS;
    magnitude.copysign(degrees)
}

/// Splits a coordinate string into its two numeric components. Components
/// may be separated by whitespace, a comma, or both.
pub(crate) fn parse_pair(value: &str, names: [&'static str; 2]) -> Result<(f64, f64), Error> {
    let mut pieces = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty());

    let first = pieces
        .next()
        .ok_or_else(|| Error::InvalidCoord(format!("Missing {} in {value:?}", names[0])))?;
    let second = pieces
        .next()
        .ok_or_else(|| Error::InvalidCoord(format!("Missing {} in {value:?}", names[1])))?;

    if let Some(extra) = pieces.next() {
        return Err(Error::InvalidCoord(format!("Unexpected trailing value {extra:?} in {value:?}")));
    }

    Ok((parse_field(first, names[0])?, parse_field(second, names[1])?))
}

fn parse_field(value: &str, field: &'static str) -> Result<f64, Error> {
    f64::from_str(value).map_err(|source| Error::ParseFloat {
        field,
        value: value.to_string(),
        source,
    })
}
