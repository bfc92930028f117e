use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::{projections::ellipsoid::{Ellipsoid, WGS84}, constants::{ORIGIN_LATITUDE, ORIGIN_LONGITUDE, FALSE_NORTHING, FALSE_EASTING, SCALE_FACTOR}};

lazy_static! {
    pub(crate) static ref SVY21: TransverseMercator = TransverseMercator::svy21();
}

/// Transverse Mercator projection evaluated with the Redfearn series
/// (8th order in longitude difference).
pub(crate) struct TransverseMercator {
    ellipsoid: &'static Ellipsoid,
    lon0: f64,
    false_northing: f64,
    false_easting: f64,
    k0: f64,
    // Meridional arc at the origin latitude
    m0: f64,
}

impl TransverseMercator {
    pub fn svy21() -> TransverseMercator {
        let ellipsoid: &'static Ellipsoid = &WGS84;

        Self {
            ellipsoid,
            lon0: ORIGIN_LONGITUDE,
            false_northing: FALSE_NORTHING,
            false_easting: FALSE_EASTING,
            k0: SCALE_FACTOR,
            m0: ellipsoid.meridional_arc(ORIGIN_LATITUDE),
        }
    }

    /// Latitude/longitude in degrees to `(northing, easting)`.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn forward(&self, lat: f64, lon: f64) -> (f64, f64) {
        let el = self.ellipsoid;

        let lat_r = lat * PI / 180.;
        let sin_lat = lat_r.sin();
        let sin2_lat = sin_lat * sin_lat;
        let cos_lat = lat_r.cos();
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos4_lat * cos_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos6_lat * cos_lat;

        let rho = el.radius_meridian(sin2_lat);
        let nu = el.radius_normal(sin2_lat);
        let psi = nu / rho;
        let t = lat_r.tan();
        let w = (lon - self.lon0) * PI / 180.;

        let m = el.meridional_arc(lat);

        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi3 * psi;

        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let n_term1 = w2 / 2. * nu * sin_lat * cos_lat;
        let n_term2 = w4 / 24. * nu * sin_lat * cos3_lat * (4. * psi2 + psi - t2);
        let n_term3 = w6 / 720. * nu * sin_lat * cos5_lat
            * ((8. * psi4) * (11. - 24. * t2) - (28. * psi3) * (1. - 6. * t2) + psi2 * (1. - 32. * t2) - psi * 2. * t2 + t4);
        let n_term4 = w8 / 40320. * nu * sin_lat * cos7_lat * (1385. - 3111. * t2 + 543. * t4 - t6);
        let northing = self.false_northing + self.k0 * (m - self.m0 + n_term1 + n_term2 + n_term3 + n_term4);

        let e_term1 = w2 / 6. * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120. * cos4_lat
            * ((4. * psi3) * (1. - 6. * t2) + psi2 * (1. + 8. * t2) - psi * 2. * t2 + t4);
        let e_term3 = w6 / 5040. * cos6_lat * (61. - 479. * t2 + 179. * t4 - t6);
        let easting = self.false_easting + self.k0 * nu * w * cos_lat * (1. + e_term1 + e_term2 + e_term3);

        (northing, easting)
    }

    /// `(northing, easting)` to latitude/longitude in degrees, expanded
    /// about the footpoint latitude.
    #[allow(clippy::similar_names, clippy::many_single_char_names)]
    pub fn reverse(&self, northing: f64, easting: f64) -> (f64, f64) {
        let el = self.ellipsoid;

        let n_prime = northing - self.false_northing;
        let m_prime = self.m0 + (n_prime / self.k0);
        let lat_prime = el.footpoint_latitude(m_prime);

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = el.radius_meridian(sin2_lat_prime);
        let nu_prime = el.radius_normal(sin2_lat_prime);
        let psi_prime = nu_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;
        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;

        let e_prime = easting - self.false_easting;
        let x = e_prime / (self.k0 * nu_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        let lat_factor = t_prime / (self.k0 * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.);
        let lat_term2 = lat_factor * ((e_prime * x3) / 24.)
            * ((-4. * psi_prime2) + (9. * psi_prime) * (1. - t_prime2) + (12. * t_prime2));
        let lat_term3 = lat_factor * ((e_prime * x5) / 720.)
            * ((8. * psi_prime4) * (11. - 24. * t_prime2) - (12. * psi_prime3) * (21. - 71. * t_prime2)
                + (15. * psi_prime2) * (15. - 98. * t_prime2 + 15. * t_prime4)
                + (180. * psi_prime) * (5. * t_prime2 - 3. * t_prime4)
                + 360. * t_prime4);
        let lat_term4 = lat_factor * ((e_prime * x7) / 40320.)
            * (1385. - 3633. * t_prime2 + 4095. * t_prime4 + 1575. * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Secant of the corrected latitude, not of the footpoint
        let sec_lat = 1. / lat.cos();
        let lon_term1 = x * sec_lat;
        let lon_term2 = ((x3 * sec_lat) / 6.) * (psi_prime + 2. * t_prime2);
        let lon_term3 = ((x5 * sec_lat) / 120.)
            * ((-4. * psi_prime3) * (1. - 6. * t_prime2) + psi_prime2 * (9. - 68. * t_prime2)
                + 72. * psi_prime * t_prime2
                + 24. * t_prime4);
        let lon_term4 = ((x7 * sec_lat) / 5040.) * (61. + 662. * t_prime2 + 1320. * t_prime4 + 720. * t_prime6);
        let lon = (self.lon0 * PI / 180.) + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        (lat / (PI / 180.), lon / (PI / 180.))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_false_origin() {
        let (northing, easting) = SVY21.forward(ORIGIN_LATITUDE, ORIGIN_LONGITUDE);

        assert!((northing - FALSE_NORTHING).abs() < 1e-9);
        assert!((easting - FALSE_EASTING).abs() < 1e-9);
    }

    #[test]
    fn false_origin_maps_to_origin() {
        let (lat, lon) = SVY21.reverse(FALSE_NORTHING, FALSE_EASTING);

        assert!((lat - ORIGIN_LATITUDE).abs() < 1e-10);
        assert!((lon - ORIGIN_LONGITUDE).abs() < 1e-12);
    }

    #[test]
    fn northing_increases_with_latitude() {
        let mut last = f64::NEG_INFINITY;
        for i in 0..=40 {
            let lat = 1.2 + f64::from(i) * 0.01;
            let (northing, _) = SVY21.forward(lat, ORIGIN_LONGITUDE + 0.1);
            assert!(northing > last, "northing did not increase at lat {lat}");
            last = northing;
        }
    }

    #[test]
    fn easting_increases_with_longitude() {
        let mut last = f64::NEG_INFINITY;
        for i in 0..=40 {
            let lon = 103.6 + f64::from(i) * 0.01;
            let (_, easting) = SVY21.forward(1.35, lon);
            assert!(easting > last, "easting did not increase at lon {lon}");
            last = easting;
        }
    }

    #[test]
    fn central_meridian_is_symmetric() {
        let (n_east, e_east) = SVY21.forward(1.4, ORIGIN_LONGITUDE + 0.2);
        let (n_west, e_west) = SVY21.forward(1.4, ORIGIN_LONGITUDE - 0.2);

        assert!((n_east - n_west).abs() < 1e-6);
        assert!(((e_east - FALSE_EASTING) + (e_west - FALSE_EASTING)).abs() < 1e-6);
    }

    #[test]
    fn reverse_undoes_forward() {
        for (lat, lon) in [(1.25, 103.65), (1.3, 103.9), (1.47, 104.05), (1.366666, 103.7)] {
            let (northing, easting) = SVY21.forward(lat, lon);
            let (lat_back, lon_back) = SVY21.reverse(northing, easting);

            assert!((lat - lat_back).abs() < 1e-10, "lat {lat} -> {lat_back}");
            // Longitude carries the larger truncation error
            assert!((lon - lon_back).abs() < 1e-8, "lon {lon} -> {lon_back}");
        }
    }

    #[test]
    fn pole_degrades_without_panicking() {
        let (northing, easting) = SVY21.forward(90., ORIGIN_LONGITUDE);
        assert!(northing.is_finite());
        assert!(easting.is_finite());
    }

    #[test]
    fn reverse_beyond_grid_degrades_without_panicking() {
        // Northing past the meridian quadrant: meaningless but finite
        let (lat, lon) = SVY21.reverse(1.0e7, FALSE_EASTING);
        assert!(lat.is_finite());
        assert!(lon.is_finite());

        // NaN propagates through the series
        let (lat, lon) = SVY21.reverse(f64::NAN, FALSE_EASTING);
        assert!(lat.is_nan());
        assert!(lon.is_nan());
    }
}
