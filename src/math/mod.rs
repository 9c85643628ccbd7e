//! Miscellaneous math functions for general use

/// Free functions for handling and converting between
/// different representations of angles.
pub mod angular;

/// Taylor series
pub mod series;
pub use series::taylor::horner;
