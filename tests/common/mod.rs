use broni::constants::Radian;
use broni::shapes::{Basis, BoundaryModel, BoundarySurface, ModelError, ModelParams};
use broni::units::Length;
use broni::{LengthUnit, Trajectory};

/// Boundary of constant radius, answering in kilometers whatever the direction.
pub struct SphereModel {
    pub radius: Length,
}

impl SphereModel {
    pub fn km(radius: f64) -> Self {
        SphereModel {
            radius: Length::km(radius),
        }
    }
}

impl BoundaryModel for SphereModel {
    fn surface(
        &self,
        lon: &[Radian],
        lat: &[Radian],
        params: &ModelParams,
    ) -> Result<BoundarySurface, ModelError> {
        if params.basis() != Basis::Spherical {
            return Err("only the spherical basis is implemented".into());
        }
        let radius = self.radius.value_in(LengthUnit::Kilometer)?;
        Ok(BoundarySurface::constant(radius, lon, lat))
    }
}

#[allow(dead_code)]
pub fn km_trajectory(points: &[[f64; 3]]) -> Trajectory<usize> {
    Trajectory::from_rows(points, (0..points.len()).collect(), "gse")
        .unwrap()
        .with_unit(LengthUnit::Kilometer)
}
