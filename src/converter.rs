//! The plane rectangular coordinate converter: (zone, x, y) in, latitude and
//! longitude out, as decimal degrees or as formatted DMS strings.
use crate::internal::*;
use crate::math::angular::Dms;
use crate::projection;
use crate::projection::scale::ScaleFactor;
use crate::projection::ProjectionParams;
use once_cell::unsync::OnceCell;

/// A geodetic position on the Bessel ellipsoid, in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geographic {
    pub latitude: f64,
    pub longitude: f64,
}

impl Geographic {
    #[must_use]
    pub fn latitude_dms(&self) -> Dms {
        Dms::from_degrees(self.latitude)
    }

    #[must_use]
    pub fn longitude_dms(&self) -> Dms {
        Dms::from_degrees(self.longitude)
    }
}

/// The complete result of one conversion
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_dms: String,
    pub longitude_dms: String,
}

impl From<Geographic> for Conversion {
    fn from(geo: Geographic) -> Conversion {
        Conversion {
            latitude: geo.latitude,
            longitude: geo.longitude,
            latitude_dms: geo.latitude_dms().to_string(),
            longitude_dms: geo.longitude_dms().to_string(),
        }
    }
}

/// Convert the planar point (`x`, `y`), in meters, of zone `zone`
pub fn convert(zone: u8, x: f64, y: f64) -> Result<Conversion, Error> {
    let mut prc = PlaneRectangular::new(zone)?;
    prc.set_xy(x, y);
    Ok(prc.geographic().into())
}

// ----- T H E   C O N V E R T E R -----------------------------------------------------

/// A planar point in one zone of the plane rectangular system.
///
/// The geodetic position is computed on first request and kept until x or y
/// is changed. The cache is not `Sync`: use one converter per thread.
#[derive(Clone, Debug)]
pub struct PlaneRectangular {
    ellps: Ellipsoid,
    zone: ZoneDefinition,
    x: f64,
    y: f64,
    geo: OnceCell<Geographic>,
}

impl PlaneRectangular {
    /// A converter for zone `zone`, positioned at the zone origin
    pub fn new(zone: u8) -> Result<PlaneRectangular, Error> {
        let zones = ZoneTable::new();
        Ok(PlaneRectangular::with_zone(*zones.get(zone)?))
    }

    #[must_use]
    pub fn with_zone(zone: ZoneDefinition) -> PlaneRectangular {
        PlaneRectangular {
            ellps: Ellipsoid::bessel(),
            zone,
            x: 0.,
            y: 0.,
            geo: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn zone(&self) -> &ZoneDefinition {
        &self.zone
    }

    /// Northing, in meters from the zone origin
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Easting, in meters from the zone origin
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
        self.reset();
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.reset();
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.reset();
    }

    /// Forget the cached geodetic position
    pub fn reset(&mut self) {
        self.geo.take();
    }

    /// Has the geodetic position been computed since the last change?
    #[must_use]
    pub fn is_computed(&self) -> bool {
        self.geo.get().is_some()
    }

    #[must_use]
    pub fn geographic(&self) -> Geographic {
        *self.geo.get_or_init(|| {
            let (latitude, longitude) = projection::inverse(&self.ellps, &self.zone, self.x, self.y);
            debug!(
                "zone {}: ({}, {}) -> ({latitude}, {longitude})",
                self.zone.id(),
                self.x,
                self.y
            );
            Geographic {
                latitude,
                longitude,
            }
        })
    }

    /// Latitude in degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.geographic().latitude
    }

    /// Longitude in degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.geographic().longitude
    }

    /// Latitude as e.g. `36°06'13.628"`
    #[must_use]
    pub fn latitude_dms(&self) -> String {
        self.geographic().latitude_dms().to_string()
    }

    /// Longitude as e.g. `140°05'16.387"`
    #[must_use]
    pub fn longitude_dms(&self) -> String {
        self.geographic().longitude_dms().to_string()
    }

    /// The point scale factor at the current position
    #[must_use]
    pub fn scale_factor(&self) -> ScaleFactor {
        let geo = self.geographic();
        let params = ProjectionParams::new(&self.ellps, geo.latitude, geo.longitude, &self.zone);
        ScaleFactor::at(&params, self.y)
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn origin() -> Result<(), Error> {
        let prc = PlaneRectangular::new(9)?;
        assert_eq!(prc.zone().id(), 9);
        assert_eq!((prc.x(), prc.y()), (0., 0.));
        assert_float_eq!(prc.latitude(), 36., abs <= 1e-12);
        assert_float_eq!(prc.longitude(), 139. + 50. / 60., abs <= 1e-12);
        assert_eq!(prc.latitude_dms(), "36°00'0.0000\"");
        assert_eq!(prc.longitude_dms(), "139°50'0.0000\"");
        Ok(())
    }

    #[test]
    fn caching() -> Result<(), Error> {
        let mut prc = PlaneRectangular::new(9)?;
        assert!(!prc.is_computed());
        let origin = prc.geographic();
        assert!(prc.is_computed());

        prc.set_x(11543.6883);
        assert!(!prc.is_computed());
        prc.set_y(22916.2436);
        assert!(!prc.is_computed());
        let geo = prc.geographic();
        assert!(prc.is_computed());
        assert_ne!(geo, origin);
        assert_float_eq!(geo.latitude, 36.103_785_789_161_584, abs <= 1e-9);
        assert_float_eq!(geo.longitude, 140.087_885_490_663_2, abs <= 1e-9);

        // Reading again reuses the cached value
        assert_eq!(prc.geographic(), geo);

        prc.reset();
        assert!(!prc.is_computed());
        assert_eq!(prc.geographic(), geo);

        prc.set_xy(0., 0.);
        assert_eq!(prc.geographic(), origin);
        Ok(())
    }

    #[test]
    fn dms_strings() -> Result<(), Error> {
        let result = convert(9, 11543.6883, 22916.2436)?;
        assert_eq!(result.latitude_dms, "36°06'13.628\"");
        assert_eq!(result.longitude_dms, "140°05'16.387\"");
        assert_float_eq!(result.latitude, 36.103_785_789_161_584, abs <= 1e-9);
        Ok(())
    }

    #[test]
    fn unknown_zone() {
        assert!(matches!(PlaneRectangular::new(0), Err(Error::UnknownZone(0))));
        assert!(matches!(convert(20, 0., 0.), Err(Error::UnknownZone(20))));
    }

    #[test]
    fn scale() -> Result<(), Error> {
        let mut prc = PlaneRectangular::new(9)?;
        assert_eq!(prc.scale_factor().value(), SCALE_FACTOR);
        prc.set_y(130_000.);
        assert!(!prc.scale_factor().is_acceptable());
        prc.set_y(-50_000.);
        assert!(prc.scale_factor().is_acceptable());
        Ok(())
    }
}
