//! # Shapes
//!
//! A shape is anything that can tell, for a whole trajectory at once, which
//! points it selects. The single capability is [`Shape::intersect`], which
//! returns a [`Mask`] with one entry per trajectory point.
//!
//! ## Provided shapes
//!
//! - [`Sphere`](crate::shapes::sphere::Sphere) – center + radius, surface included.
//! - [`Cuboid`](crate::shapes::cuboid::Cuboid) – axis-aligned box from two opposite corners given in any order.
//! - [`SphericalBoundary`](crate::shapes::boundary::SphericalBoundary) – band of signed radial
//!   distance around a direction-dependent surface supplied by an external [`BoundaryModel`].
//! - [`Sheath`](crate::shapes::sheath::Sheath) – region between two boundary models, with margins.
//!
//! Static shapes can also be described in any serde format through
//! [`ShapeConfig`](crate::shapes::config::ShapeConfig).
//!
//! ## Units
//!
//! Shapes carry their own [`LengthUnit`](crate::units::LengthUnit). At intersection
//! time every shape parameter is converted into the unit of the trajectory; a unitless
//! shape can only be tested against a unitless trajectory and vice versa.
//!
//! The conversion is a floating-point multiplication, so inclusive faces are exact
//! only when shape and trajectory share a unit. Across units a point lying exactly
//! on a face can fall out by one ulp: a 1.001 km sphere becomes `1000.9999999999999` m
//! and leaves out a point at 1001 m.
//!
//! Shapes never store anything about the trajectories they are evaluated on.
pub mod boundary;
pub mod config;
pub mod cuboid;
pub mod sheath;
pub mod sphere;

use crate::broni_errors::BroniError;
use crate::constants::Mask;
use crate::trajectory::Positions;

pub use boundary::{
    Basis, BoundaryModel, BoundarySurface, ModelError, ModelParams, ParamValue, SphericalBoundary,
    SphericalBoundaryBuilder,
};
pub use config::ShapeConfig;
pub use cuboid::Cuboid;
pub use sheath::{Sheath, SheathBuilder};
pub use sphere::Sphere;

/// Region membership test evaluated over a whole trajectory.
pub trait Shape {
    /// Select the trajectory points lying in this shape.
    ///
    /// Arguments
    /// ---------
    /// * `positions`: the geometric part of a trajectory, see [`Trajectory::positions`](crate::trajectory::Trajectory::positions)
    ///
    /// Return
    /// ------
    /// * `Result<Mask, BroniError>`: one boolean per point, in trajectory order.
    ///   Unit mismatches and boundary model failures are reported as errors.
    fn intersect(&self, positions: &Positions) -> Result<Mask, BroniError>;
}
