use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::constants::{WGS84_A, WGS84_F};

lazy_static! {
    /// The WGS84 ellipsoid with its series coefficients, derived once.
    pub(crate) static ref WGS84: Ellipsoid = Ellipsoid::new(WGS84_A, WGS84_F);
}

/// Reference ellipsoid together with its squared eccentricity and the
/// meridian-arc coefficients the projection series are built from.
#[allow(clippy::similar_names)]
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ellipsoid {
    pub a: f64,
    pub b: f64,
    pub e2: f64,
    pub a0: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
}

impl Ellipsoid {
    #[allow(clippy::similar_names)]
    pub fn new(a: f64, f: f64) -> Ellipsoid {
        let b = a * (1. - f);

        let e2 = (2. * f) - (f * f);
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        let a0 = 1. - (e2 / 4.) - (3. * e4 / 64.) - (5. * e6 / 256.);
        let a2 = (3. / 8.) * (e2 + (e4 / 4.) + (15. * e6 / 128.));
        let a4 = (15. / 256.) * (e4 + (3. * e6 / 4.));
        let a6 = 35. * e6 / 3072.;

        Self {
            a,
            b,
            e2,
            a0,
            a2,
            a4,
            a6,
        }
    }

    /// Radius of curvature in the meridian (rho), from sin²(lat).
    pub fn radius_meridian(&self, sin2_lat: f64) -> f64 {
        let num = self.a * (1. - self.e2);
        let denom = (1. - self.e2 * sin2_lat).powf(3. / 2.);
        num / denom
    }

    /// Radius of curvature in the prime vertical (nu), from sin²(lat).
    pub fn radius_normal(&self, sin2_lat: f64) -> f64 {
        let poly = 1. - self.e2 * sin2_lat;
        self.a / poly.sqrt()
    }

    /// Distance along the meridian from the equator to `lat` (degrees).
    pub fn meridional_arc(&self, lat: f64) -> f64 {
        let lat_r = lat * PI / 180.;
        self.a * ((self.a0 * lat_r) - (self.a2 * (2. * lat_r).sin()) + (self.a4 * (4. * lat_r).sin()) - (self.a6 * (6. * lat_r).sin()))
    }

    /// Latitude in radians whose meridional arc is `arc`, from the
    /// series in the third flattening. No iteration is involved.
    #[allow(clippy::similar_names)]
    pub fn footpoint_latitude(&self, arc: f64) -> f64 {
        let n = (self.a - self.b) / (self.a + self.b);
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;
        // Meridian arc length of one degree
        let g = self.a * (1. - n) * (1. - n2) * (1. + (9. * n2 / 4.) + (225. * n4 / 64.)) * (PI / 180.);
        let sigma = (arc * PI) / (180. * g);

        let term1 = ((3. * n / 2.) - (27. * n3 / 32.)) * (2. * sigma).sin();
        let term2 = ((21. * n2 / 16.) - (55. * n4 / 32.)) * (4. * sigma).sin();
        let term3 = (151. * n3 / 96.) * (6. * sigma).sin();
        let term4 = (1097. * n4 / 512.) * (8. * sigma).sin();

        sigma + term1 + term2 + term3 + term4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        assert!((WGS84.b - 6_356_752.314_245_179).abs() < 1e-6);
        assert!((WGS84.e2 - 0.006_694_379_990_141_316).abs() < 1e-15);

        // Series coefficients sit just around their spherical limits
        assert!(WGS84.a0 < 1. && WGS84.a0 > 0.998);
        assert!((WGS84.a2 - 3. / 8. * WGS84.e2).abs() < 1e-5);
        assert!(WGS84.a4 > 0. && WGS84.a4 < 1e-5);
        assert!(WGS84.a6 > 0. && WGS84.a6 < 1e-8);
    }

    #[test]
    fn radii_of_curvature() {
        // Equator
        assert!((WGS84.radius_normal(0.) - WGS84_A).abs() < 1e-9);
        assert!((WGS84.radius_meridian(0.) - WGS84_A * (1. - WGS84.e2)).abs() < 1e-9);

        // Both radii coincide at the poles
        let polar = WGS84_A / (1. - WGS84.e2).sqrt();
        assert!((WGS84.radius_normal(1.) - polar).abs() < 1e-6);
        assert!((WGS84.radius_meridian(1.) - polar).abs() < 1e-6);

        // Meridian radius never exceeds the normal radius
        for i in 0..=10 {
            let sin2 = f64::from(i) / 10.;
            assert!(WGS84.radius_meridian(sin2) <= WGS84.radius_normal(sin2) + 1e-6);
        }
    }

    #[test]
    fn meridional_arc() {
        assert!(WGS84.meridional_arc(0.).abs() < f64::EPSILON);
        assert!((WGS84.meridional_arc(-1.5) + WGS84.meridional_arc(1.5)).abs() < 1e-9);

        // Meridian quadrant
        assert!((WGS84.meridional_arc(90.) - 10_001_965.729).abs() < 1e-2);
    }

    #[test]
    fn footpoint_inverts_meridional_arc() {
        assert!(WGS84.footpoint_latitude(0.).abs() < f64::EPSILON);

        for i in -10..=10 {
            let lat = f64::from(i) / 2.;
            let footpoint = WGS84.footpoint_latitude(WGS84.meridional_arc(lat));
            assert!((footpoint - lat.to_radians()).abs() < 5e-11, "lat {lat}: {footpoint}");
        }
    }
}
