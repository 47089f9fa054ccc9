use nalgebra::Vector3;

use crate::broni_errors::BroniError;
use crate::constants::Mask;
use crate::shapes::Shape;
use crate::trajectory::Positions;
use crate::units::LengthUnit;

/// Solid sphere, points on the surface are inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vector3<f64>,
    radius: f64,
    unit: LengthUnit,
}

impl Sphere {
    /// Unitless sphere.
    ///
    /// Return
    /// ------
    /// * [`BroniError::DegenerateSphere`] unless `radius` is finite and strictly positive.
    pub fn new(center: [f64; 3], radius: f64) -> Result<Self, BroniError> {
        Self::new_in(center, radius, LengthUnit::Unitless)
    }

    /// Sphere whose center and radius are expressed in `unit`.
    pub fn new_in(center: [f64; 3], radius: f64, unit: LengthUnit) -> Result<Self, BroniError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(BroniError::DegenerateSphere(radius));
        }
        Ok(Sphere {
            center: Vector3::from(center),
            radius,
            unit,
        })
    }

    /// Center, in [`Sphere::unit`].
    pub fn center(&self) -> &Vector3<f64> {
        &self.center
    }

    /// Radius, in [`Sphere::unit`].
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }
}

impl Shape for Sphere {
    fn intersect(&self, positions: &Positions) -> Result<Mask, BroniError> {
        let factor = self.unit.factor_to(positions.unit())?;
        let center = self.center * factor;
        let radius = self.radius * factor;

        Ok(positions
            .cartesian()
            .iter()
            .map(|p| (p - center).norm() <= radius)
            .collect())
    }
}
