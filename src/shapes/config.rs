use serde::{Deserialize, Serialize};

use crate::broni_errors::BroniError;
use crate::shapes::{Cuboid, Shape, Sphere};
use crate::units::LengthUnit;

/// Serializable description of a static shape.
///
/// Boundary models are code, not data, so only [`Sphere`] and [`Cuboid`] can
/// be described this way. Omitted units default to [`LengthUnit::Unitless`].
///
/// ```rust
/// use broni::shapes::ShapeConfig;
///
/// let config = ShapeConfig::Sphere {
///     center: [0.0, 0.0, 0.0],
///     radius: 10.0,
///     unit: Default::default(),
/// };
/// assert!(config.build().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeConfig {
    Sphere {
        center: [f64; 3],
        radius: f64,
        #[serde(default)]
        unit: LengthUnit,
    },
    Cuboid {
        corner_a: [f64; 3],
        corner_b: [f64; 3],
        #[serde(default)]
        unit: LengthUnit,
    },
}

impl ShapeConfig {
    /// Validate the description and build the shape it describes.
    pub fn build(&self) -> Result<Box<dyn Shape>, BroniError> {
        Ok(match *self {
            ShapeConfig::Sphere {
                center,
                radius,
                unit,
            } => Box::new(Sphere::new_in(center, radius, unit)?),
            ShapeConfig::Cuboid {
                corner_a,
                corner_b,
                unit,
            } => Box::new(Cuboid::new_in(corner_a, corner_b, unit)?),
        })
    }

    /// Build every shape of a list, stopping at the first invalid description.
    pub fn build_all(configs: &[ShapeConfig]) -> Result<Vec<Box<dyn Shape>>, BroniError> {
        configs.iter().map(ShapeConfig::build).collect()
    }
}

#[cfg(test)]
mod config_test {
    use super::*;
    use crate::intervals::intervals;
    use crate::trajectory::Trajectory;

    #[test]
    fn test_shapes_from_ron() {
        let configs: Vec<ShapeConfig> = ron::from_str(
            "[
                Cuboid(corner_a: (0.0, 0.0, 0.0), corner_b: (2.0, 2.0, 2.0)),
                Sphere(center: (1.5, 1.5, 1.5), radius: 1.0),
            ]",
        )
        .unwrap();

        assert_eq!(
            configs[1],
            ShapeConfig::Sphere {
                center: [1.5, 1.5, 1.5],
                radius: 1.0,
                unit: LengthUnit::Unitless
            }
        );

        let shapes = ShapeConfig::build_all(&configs).unwrap();
        let shapes: Vec<&dyn Shape> = shapes.iter().map(|s| &**s).collect();

        let traj = Trajectory::from_rows(
            &[
                [-1.0, -1.0, -1.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 1.0],
                [-1.0, -1.0, -1.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 1.0],
            ],
            (0..6).collect::<Vec<i64>>(),
            "gse",
        )
        .unwrap();

        let found = intervals(&traj, &shapes).unwrap();
        assert_eq!(
            found.into_iter().map(<(i64, i64)>::from).collect::<Vec<_>>(),
            vec![(2, 2), (5, 5)]
        );
    }

    #[test]
    fn test_unit_from_ron() {
        let config: ShapeConfig =
            ron::from_str("Sphere(center: (0.0, 0.0, 0.0), radius: 1.0, unit: Re)").unwrap();
        assert_eq!(
            config,
            ShapeConfig::Sphere {
                center: [0.0, 0.0, 0.0],
                radius: 1.0,
                unit: LengthUnit::EarthRadius
            }
        );
    }

    #[test]
    fn test_invalid_description() {
        let configs = [
            ShapeConfig::Sphere {
                center: [0.0, 0.0, 0.0],
                radius: 1.0,
                unit: LengthUnit::Kilometer,
            },
            ShapeConfig::Cuboid {
                corner_a: [1.0, 1.0, 1.0],
                corner_b: [1.0, 1.0, 1.0],
                unit: LengthUnit::Kilometer,
            },
        ];
        assert_eq!(
            ShapeConfig::build_all(&configs).err(),
            Some(BroniError::DegenerateCuboid)
        );
    }
}
