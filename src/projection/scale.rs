use crate::internal::*;
use crate::projection::ProjectionParams;

/// The scale factor tolerance band of the plane rectangular system,
/// `0.9999 ≤ m < 1.0001`
pub const TOLERANCE: std::ops::Range<f64> = 0.9999..1.0001;

/// The point scale factor, *m*, i.e. the ratio of a distance on the
/// projection plane to the corresponding distance on the ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct ScaleFactor(pub f64);

impl ScaleFactor {
    /// The scale factor at the point described by `params`, with easting `y` (meters)
    #[must_use]
    pub fn at(params: &ProjectionParams, y: f64) -> ScaleFactor {
        let LocalGeometry { m, n, .. } = params.local;
        let m0 = SCALE_FACTOR;
        let y2 = y * y;
        let mn = m * n * m0 * m0;
        ScaleFactor(m0 * (1. + y2 / (2. * mn) + y2 * y2 / (24. * mn * mn)))
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Within the tolerance band? Points outside are still valid, they are
    /// just likely to belong to a neighbouring zone.
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        TOLERANCE.contains(&self.0)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn central_meridian() -> Result<(), Error> {
        let ellps = Ellipsoid::bessel();
        let zones = ZoneTable::new();
        for zone in zones.iter() {
            let lat = zone.origin_latitude();
            let params = ProjectionParams::new(&ellps, lat, zone.origin_longitude(), zone);
            let m = ScaleFactor::at(&params, 0.);
            assert_eq!(m.value(), SCALE_FACTOR);
            assert!(m.is_acceptable());
        }
        Ok(())
    }

    #[test]
    fn tolerance_band() -> Result<(), Error> {
        let ellps = Ellipsoid::bessel();
        let zones = ZoneTable::new();
        let zone = zones.get(9)?;
        let params = ProjectionParams::new(&ellps, 36., 140.8, zone);

        let m = ScaleFactor::at(&params, 90_000.);
        assert_float_eq!(m.value(), 0.999_999_798_011_146_9, abs <= 1e-12);
        assert!(m.is_acceptable());

        // Some 130 km off the central meridian, the scale is too large
        let m = ScaleFactor::at(&params, 130_000.);
        assert_float_eq!(m.value(), 1.000_108_224_304_659_5, abs <= 1e-12);
        assert!(!m.is_acceptable());

        // Symmetric wrt. the central meridian
        assert_eq!(ScaleFactor::at(&params, -130_000.), m);

        // The band is half open
        assert!(ScaleFactor(0.9999).is_acceptable());
        assert!(!ScaleFactor(1.0001).is_acceptable());
        assert!(!ScaleFactor(0.99989).is_acceptable());
        Ok(())
    }
}
