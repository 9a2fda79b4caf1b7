//! Numeric helpers
//!
//! - Sphere radius from volume (calibrated exponent) and its inverse

/// Sphere radius and volume
pub mod geometry;
