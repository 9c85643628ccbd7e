use super::*;
use crate::math::horner;

/// Coefficients of the meridian arc series, *k₁ … k₉*, each a polynomial in
/// *e²* (row *i* holds the coefficients of *e⁰, e², e⁴ … e¹⁶* for *kᵢ₊₁*).
/// The truncation at *e¹⁶* follows the GSI formulation of the plane
/// rectangular system, [Gsi02](crate::Bibliography::Gsi02).
#[rustfmt::skip]
pub const MERIDIAN_ARC_COEFFICIENTS: [[f64; 9]; 9] = [
    [1., 3./4., 45./64., 175./256., 11025./16384., 43659./65536., 693693./1048576., 19324305./29360128., 4927697775./7516192768.],
    [0., 3./4., 15./16., 525./512., 2205./2048., 72765./65536., 297297./262144., 135270135./117440512., 547521975./469762048.],
    [0., 0., 15./64., 105./256., 2205./4096., 10395./16384., 1486485./2097152., 45090045./58720256., 766530765./939524096.],
    [0., 0., 0., 35./512., 315./2048., 31185./131072., 165165./524288., 45090045./117440512., 209053845./469762048.],
    [0., 0., 0., 0., 315./16384., 3465./65536., 99099./1048576., 4099095./29360128., 348423075./1879048192.],
    [0., 0., 0., 0., 0., 693./131072., 9009./524288., 4099095./117440512., 26801775./469762048.],
    [0., 0., 0., 0., 0., 0., 3003./2097152., 315315./58720256., 11486475./939524096.],
    [0., 0., 0., 0., 0., 0., 0., 45045./117440512., 765765./469762048.],
    [0., 0., 0., 0., 0., 0., 0., 0., 765765./7516192768.],
];

// ----- Meridian geometry -----------------------------------------------------
impl Ellipsoid {
    /// The coefficients *k₁ … k₉* of the meridian arc series, evaluated
    /// for the eccentricity of the ellipsoid
    #[must_use]
    pub fn meridian_arc_coefficients(&self) -> [f64; 9] {
        let es = self.eccentricity_squared();
        let mut k = [0.; 9];
        for (i, row) in MERIDIAN_ARC_COEFFICIENTS.iter().enumerate() {
            k[i] = horner(es, row);
        }
        k
    }

    /// The meridional distance, *S*, from the equator to `latitude` (radians)
    ///
    /// S(𝜙) = a(1 - e²)·[k₁𝜙 - k₂/2·sin 2𝜙 + k₃/4·sin 4𝜙 - … + k₉/16·sin 16𝜙]
    #[must_use]
    pub fn meridional_distance(&self, latitude: f64) -> f64 {
        let k = self.meridian_arc_coefficients();
        let mut sum = k[0] * latitude;
        let mut sign = -1.;
        for (i, ki) in k.iter().enumerate().skip(1) {
            let order = 2. * i as f64;
            sum += sign * ki / order * (order * latitude).sin();
            sign = -sign;
        }
        self.a * (1. - self.eccentricity_squared()) * sum
    }

    /// The meridional distance from `origin` to `latitude`, i.e. ΔS = S(𝜙) - S(𝜙₀)
    #[must_use]
    pub fn meridional_distance_between(&self, latitude: f64, origin: f64) -> f64 {
        self.meridional_distance(latitude) - self.meridional_distance(origin)
    }
}

// ----- Tests ---------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn coefficients() {
        let ellps = Ellipsoid::bessel();
        let k = ellps.meridian_arc_coefficients();
        let es = ellps.eccentricity_squared();

        // Leading terms dominate
        assert_float_eq!(k[0], 1. + 0.75 * es, abs <= 1e-4);
        assert_float_eq!(k[1], 0.75 * es, abs <= 1e-4);
        for i in 1..9 {
            assert!(k[i] > 0.);
            assert!(k[i] < k[i - 1]);
        }
    }

    #[test]
    fn meridional_distance() {
        let ellps = Ellipsoid::bessel();

        assert_eq!(ellps.meridional_distance(0.), 0.);

        // The Bessel meridian quadrant
        assert_float_eq!(ellps.meridional_distance(FRAC_PI_2), 10_000_855.743_6, abs <= 1e-4);

        // Origin latitude of most zones
        let lat = 36_f64.to_radians();
        assert_float_eq!(ellps.meridional_distance(lat), 3_985_146.026_089, abs <= 1e-5);

        // Odd symmetry wrt. the equator
        assert_float_eq!(
            ellps.meridional_distance(-lat),
            -ellps.meridional_distance(lat),
            abs <= 1e-8
        );

        // The derivative of S is the meridian radius of curvature
        let h = 1e-6;
        let slope = (ellps.meridional_distance(lat + h) - ellps.meridional_distance(lat - h)) / (2. * h);
        assert_float_eq!(slope, ellps.meridian_radius_of_curvature(lat), rmax <= 1e-8);
    }

    #[test]
    fn monotonicity() {
        let ellps = Ellipsoid::bessel();
        let mut previous = ellps.meridional_distance((-89.9_f64).to_radians());
        for i in -898..=899 {
            let lat = (i as f64 / 10.).to_radians();
            let s = ellps.meridional_distance(lat);
            assert!(s > previous, "S not increasing at {lat}");
            previous = s;
        }
    }

    #[test]
    fn distance_between() {
        let ellps = Ellipsoid::bessel();
        let origin = 36_f64.to_radians();
        let lat = 37_f64.to_radians();
        assert_eq!(ellps.meridional_distance_between(origin, origin), 0.);
        let ds = ellps.meridional_distance_between(lat, origin);
        // One degree of latitude is roughly 111 km
        assert!((110_000. ..112_000.).contains(&ds));
        assert_float_eq!(ellps.meridional_distance_between(origin, lat), -ds, abs <= 1e-9);
    }
}
