//! *Inverse projection for the Japan Plane Rectangular Coordinate System*.
//!
//! The legacy Japanese plane rectangular system splits the territory into 19
//! zones, each a transverse Mercator aspect with its own origin on the Bessel
//! 1841 ellipsoid and a nominal scale factor of 0.9999 on the central meridian.
//! This crate takes planar (zone, x, y) coordinates back to geodetic latitude
//! and longitude, and resolves which zone a position or mesh code belongs to.
//!
//! ```
//! use jprcs::prelude::*;
//!
//! let mut prc = PlaneRectangular::new(9)?;
//! prc.set_xy(11543.6883, 22916.2436);
//! assert!((prc.latitude() - 36.1037857).abs() < 1e-7);
//! assert!((prc.longitude() - 140.0878855).abs() < 1e-7);
//! assert_eq!(prc.latitude_dms(), "36°06'13.628\"");
//! # Ok::<(), jprcs::Error>(())
//! ```
//!
//! Conventions: x is the northing and y the easting, both in meters from the
//! zone origin, as in the Japanese survey tradition.

pub mod converter;
pub mod ellipsoid;
pub mod math;
pub mod mesh;
pub mod projection;
pub mod zone;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::converter::convert;
    pub use crate::converter::Conversion;
    pub use crate::converter::Geographic;
    pub use crate::converter::PlaneRectangular;
    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::math::angular::Dms;
    pub use crate::mesh::MeshEntry;
    pub use crate::mesh::MeshZones;
    pub use crate::projection::scale::ScaleFactor;
    pub use crate::zone::ZoneDefinition;
    pub use crate::zone::ZoneTable;
    pub use crate::Error;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use std::collections::BTreeMap;

    pub use log::debug;
    pub use log::error;
    pub use log::trace;
    pub use log::warn;

    pub use crate::ellipsoid::Ellipsoid;
    pub use crate::ellipsoid::LocalGeometry;
    pub use crate::math::angular;
    pub use crate::zone::ZoneDefinition;
    pub use crate::zone::ZoneTable;
    pub use crate::zone::SCALE_FACTOR;
    pub use crate::Error;
}

/// The *Rust Geodesy* errors, trimmed to what a plane rectangular toolbox may run into
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("zone {0} is not a plane rectangular zone (expected 1..=19)")]
    UnknownZone(u8),

    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// Geographical Survey Institute (2002): *Plane rectangular coordinate systems*.
    /// Notification no. 9 of the Ministry of Land, Infrastructure and Transport,
    /// based on the Survey Act, Article 11.
    Gsi02,

    /// L. Krüger (1912). Konforme Abbildung des Erdellipsoids in der Ebene.
    /// Royal Prussian Geodetic Institute, New Series 52.
    /// [DOI](https://dx.doi.org/10.2312/GFZ.b103-krueger28).
    Kru12,

    /// Ministry of Internal Affairs and Communications (1973):
    /// *Standard grid square and grid square code used for statistics*.
    /// Administrative Management Agency notification no. 143.
    Mic73,
}
