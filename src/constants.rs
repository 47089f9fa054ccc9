//! # Constants and type definitions for broni
//!
//! Physical constants used by the unit conversions and the type aliases
//! shared by the trajectory, shape and interval modules.

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Earth equatorial radius in kilometers (GRS1980/WGS84)
pub const EARTH_RADIUS_KM: f64 = 6_378.137;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU_KM: f64 = 149_597_870.7;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Per-point selection of a trajectory, `true` where the point is selected
pub type Mask = Vec<bool>;
