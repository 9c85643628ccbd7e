//! Inverse transverse Mercator in the classical GSI series form: planar
//! (x, y) in a plane rectangular zone to geodetic latitude and longitude.
//!
//! x is the northing and y the easting, both reckoned from the zone origin.
//! The computation runs in two stages: first the foot-point latitude, i.e.
//! the latitude whose meridian arc length matches the (scaled) northing,
//! then a pair of truncated series in the (scaled) easting that carry the
//! foot-point to the final latitude and longitude, [Kru12](crate::Bibliography::Kru12).
use crate::internal::*;

pub mod scale;

/// Number of latitude values in the foot-point iteration: the starting
/// value plus four Newton-Raphson updates. Never convergence checked.
pub const FOOTPOINT_ITERATIONS: usize = 5;

// ----- F O O T P O I N T   L A T I T U D E -------------------------------------------

/// The foot-point latitude (radians) for the northing `x` (meters) in a zone
/// with origin latitude `lat_0` (radians).
///
/// Solves S(𝜙) = S(𝜙₀) + x/m₀ by Newton-Raphson, starting at 𝜙₀. The number
/// of steps is fixed, which is plenty for the extent of any of the 19 zones,
/// and keeps the result a pure function of its arguments.
#[must_use]
pub fn footpoint_latitude(ellps: &Ellipsoid, lat_0: f64, x: f64) -> f64 {
    let target = ellps.meridional_distance(lat_0) + x / SCALE_FACTOR;
    let mut phi = [0.; FOOTPOINT_ITERATIONS];
    phi[0] = lat_0;
    for i in 1..FOOTPOINT_ITERATIONS {
        let previous = phi[i - 1];
        let residual = ellps.meridional_distance(previous) - target;
        phi[i] = previous - residual / ellps.meridian_radius_of_curvature(previous);
        trace!("footpoint step {i}: residual {residual:e} m");
    }
    phi[FOOTPOINT_ITERATIONS - 1]
}

// ----- P E R   P O I N T   P A R A M E T E R S ---------------------------------------

/// The quantities the series need at one geodetic point in one zone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectionParams {
    /// Ellipsoidal geometry at the latitude of the point
    pub local: LocalGeometry,
    /// Longitude of the point, reckoned from the zone origin (radians)
    pub dlon: f64,
}

impl ProjectionParams {
    /// `latitude` and `longitude` in degrees
    #[must_use]
    pub fn new(ellps: &Ellipsoid, latitude: f64, longitude: f64, zone: &ZoneDefinition) -> Self {
        ProjectionParams {
            local: ellps.local(latitude.to_radians()),
            dlon: (longitude - zone.origin_longitude()).to_radians(),
        }
    }
}

// ----- I N V E R S E -----------------------------------------------------------------

/// Latitude and longitude, in degrees, from the easting `y` (meters), the
/// foot-point latitude `footpoint` (radians) and the origin longitude `lon_0`
/// (degrees).
#[must_use]
pub fn geodetic_from_planar(ellps: &Ellipsoid, y: f64, footpoint: f64, lon_0: f64) -> (f64, f64) {
    let rho = 180. / std::f64::consts::PI;
    let ym = y / SCALE_FACTOR;
    let local = ellps.local(footpoint);
    let LocalGeometry { t, n, m, .. } = local;
    let (t2, t4) = (local.t2(), local.t2() * local.t2());
    let (eta2, eta4) = (local.eta2(), local.eta2() * local.eta2());
    let cos_phi = footpoint.cos();

    let ym2 = ym * ym;
    let ym3 = ym2 * ym;
    let ym4 = ym2 * ym2;
    let ym5 = ym4 * ym;
    let ym6 = ym4 * ym2;
    let n3 = n * n * n;
    let n5 = n3 * n * n;

    // Latitude
    let f1 = 5. + 3. * t2 + eta2 - 9. * t2 * eta2 - 4. * eta4;
    let f2 = 61. + 90. * t2 + 45. * t4 + 46. * eta2 - 252. * t2 * eta2 - 90. * t4 * eta2;
    let lat = footpoint * rho - (ym2 * t / (2. * m * n)) * rho
        + (ym4 * t * f1 / (24. * m * n3)) * rho
        - (ym6 * t * f2 / (720. * m * n5)) * rho;

    // Longitude
    let g1 = 1. + 2. * t2 + eta2;
    let g2 = 5. + 28. * t2 + 24. * t4 + 6. * eta2 + 8. * t2 * eta2;
    let lon = lon_0 + ym / (n * cos_phi) * rho - (ym3 * g1 / (6. * n3 * cos_phi)) * rho
        + (ym5 * g2 / (120. * n5 * cos_phi)) * rho;

    (lat, lon)
}

/// Latitude and longitude, in degrees, of the planar point (`x`, `y`) in `zone`
#[must_use]
pub fn inverse(ellps: &Ellipsoid, zone: &ZoneDefinition, x: f64, y: f64) -> (f64, f64) {
    let lat_0 = zone.origin_latitude_radians();
    let footpoint = footpoint_latitude(ellps, lat_0, x);
    geodetic_from_planar(ellps, y, footpoint, zone.origin_longitude())
}

// ----- Tests ---------------------------------------------------------------------
