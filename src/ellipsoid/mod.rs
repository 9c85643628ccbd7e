mod meridians;

pub use meridians::MERIDIAN_ARC_COEFFICIENTS;

/// The Bessel 1841 ellipsoid, the figure of the Tokyo datum and hence of the
/// legacy plane rectangular coordinate system.
///
/// Only the Bessel figure is supported, so there is no public way to build an
/// ellipsoid from arbitrary axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
}

/// Bessel is the only ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::bessel()
    }
}

impl Ellipsoid {
    /// The Bessel 1841 ellipsoid, as used by the Japanese survey authorities
    #[must_use]
    pub const fn bessel() -> Ellipsoid {
        Ellipsoid {
            a: 6_377_397.155,
            b: 6_356_078.936_3,
        }
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    // ----- Eccentricities --------------------------------------------------------

    /// The linear eccentricity *d* = sqrt(a² - b²).
    #[must_use]
    pub fn linear_eccentricity(&self) -> f64 {
        (self.a * self.a - self.b * self.b).sqrt()
    }

    /// The eccentricity *e = d / a*
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.linear_eccentricity() / self.a
    }

    /// The squared eccentricity *e²*
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let e = self.eccentricity();
        e * e
    }

    /// The second eccentricity *e' = d / b*
    #[must_use]
    pub fn second_eccentricity(&self) -> f64 {
        self.linear_eccentricity() / self.b
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N*
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / self.q(latitude).sqrt()
    }

    /// The meridian radius of curvature, *M*
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let q = self.q(latitude);
        self.a * (1.0 - self.eccentricity_squared()) / (q * q * q).sqrt()
    }

    // q = 1 - (e sin 𝜙)²
    fn q(&self, latitude: f64) -> f64 {
        let es = self.eccentricity() * latitude.sin();
        1.0 - es * es
    }

    /// All the latitude dependent quantities needed by the projection series,
    /// evaluated at `latitude` (radians). Never cached: each call recomputes.
    #[must_use]
    pub fn local(&self, latitude: f64) -> LocalGeometry {
        LocalGeometry {
            latitude,
            t: latitude.tan(),
            eta: self.second_eccentricity() * latitude.cos(),
            n: self.prime_vertical_radius_of_curvature(latitude),
            m: self.meridian_radius_of_curvature(latitude),
        }
    }
}

/// The latitude dependent quantities of the ellipsoid at one latitude.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalGeometry {
    /// The latitude, 𝜙, in radians
    pub latitude: f64,
    /// tan 𝜙
    pub t: f64,
    /// 𝜂 = e' cos 𝜙
    pub eta: f64,
    /// Prime vertical radius of curvature
    pub n: f64,
    /// Meridian radius of curvature
    pub m: f64,
}

impl LocalGeometry {
    #[must_use]
    pub fn t2(&self) -> f64 {
        self.t * self.t
    }

    #[must_use]
    pub fn eta2(&self) -> f64 {
        self.eta * self.eta
    }
}

// ----- Tests ---------------------------------------------------------------------
