use nalgebra::Vector3;

use crate::broni_errors::BroniError;
use crate::constants::Mask;
use crate::shapes::Shape;
use crate::trajectory::Positions;
use crate::units::LengthUnit;

/// Axis-aligned box defined by two opposite corners.
///
/// The corners can be given in any order: `Cuboid::new(a, b)` and
/// `Cuboid::new(b, a)` describe the same box. All six faces belong to the box.
///
/// Internally the box is kept as four vertices: the first corner `p1` and the
/// three vertices `p2`, `p3`, `p4` reached from it along x, y and z. Membership
/// is tested on the three edges `p1 → p2`, `p1 → p3`, `p1 → p4`: a point is
/// inside when its projection on each edge lies between the projections of
/// the edge's two end vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    p1: Vector3<f64>,
    p2: Vector3<f64>,
    p3: Vector3<f64>,
    p4: Vector3<f64>,
    unit: LengthUnit,
}

/// Projection direction and inclusive bounds of the box along one edge.
struct Slab {
    direction: Vector3<f64>,
    lower: f64,
    upper: f64,
}

impl Slab {
    fn new(origin: &Vector3<f64>, end: &Vector3<f64>, axis: Vector3<f64>) -> Self {
        let edge = origin - end;
        // flat box along this axis, a null edge would not constrain anything
        let direction = if edge == Vector3::zeros() { axis } else { edge };

        let a = origin.dot(&direction);
        let b = end.dot(&direction);
        Slab {
            direction,
            lower: a.min(b),
            upper: a.max(b),
        }
    }

    fn contains(&self, p: &Vector3<f64>) -> bool {
        let o = p.dot(&self.direction);
        self.lower <= o && o <= self.upper
    }
}

impl Cuboid {
    /// Unitless cuboid.
    ///
    /// Arguments
    /// ---------
    /// * `corner_a`, `corner_b`: two opposite corners `(x, y, z)`, in any relative order
    ///
    /// Return
    /// ------
    /// * [`BroniError::DegenerateCuboid`] if both corners are the same point.
    pub fn new(corner_a: [f64; 3], corner_b: [f64; 3]) -> Result<Self, BroniError> {
        Self::new_in(corner_a, corner_b, LengthUnit::Unitless)
    }

    /// Cuboid whose corners are expressed in `unit`, same checks as [`Cuboid::new`].
    pub fn new_in(
        corner_a: [f64; 3],
        corner_b: [f64; 3],
        unit: LengthUnit,
    ) -> Result<Self, BroniError> {
        if corner_a == corner_b {
            return Err(BroniError::DegenerateCuboid);
        }

        let [x0, y0, z0] = corner_a;
        let [x1, y1, z1] = corner_b;
        Ok(Cuboid {
            p1: Vector3::new(x0, y0, z0),
            p2: Vector3::new(x1, y0, z0),
            p3: Vector3::new(x0, y1, z0),
            p4: Vector3::new(x0, y0, z1),
            unit,
        })
    }

    /// The four vertices `[p1, p2, p3, p4]` spanning the box.
    pub fn vertices(&self) -> [Vector3<f64>; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Unit of the vertices.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    fn slabs(&self, factor: f64) -> [Slab; 3] {
        let p1 = self.p1 * factor;
        [
            Slab::new(&p1, &(self.p2 * factor), Vector3::x()),
            Slab::new(&p1, &(self.p3 * factor), Vector3::y()),
            Slab::new(&p1, &(self.p4 * factor), Vector3::z()),
        ]
    }
}

impl Shape for Cuboid {
    fn intersect(&self, positions: &Positions) -> Result<Mask, BroniError> {
        let factor = self.unit.factor_to(positions.unit())?;
        let slabs = self.slabs(factor);

        Ok(positions
            .cartesian()
            .iter()
            .map(|p| slabs.iter().all(|slab| slab.contains(p)))
            .collect())
    }
}

#[cfg(test)]
mod cuboid_test {
    use super::*;
    use crate::trajectory::Trajectory;

    fn intersect(shape: &Cuboid, points: &[[f64; 3]]) -> Mask {
        let traj = Trajectory::from_rows(points, (0..points.len()).collect(), "gse").unwrap();
        shape.intersect(traj.positions()).unwrap()
    }

    #[test]
    fn test_cuboid_without_volume() {
        assert_eq!(
            Cuboid::new([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            Err(BroniError::DegenerateCuboid)
        );
    }

    #[test]
    fn test_cuboid_intersections() {
        let cuboid = Cuboid::new([0.0, 0.0, 0.0], [10.0, 10.0, 10.0]).unwrap();

        assert_eq!(intersect(&cuboid, &[[1.0, 1.0, 1.0]]), vec![true]);
        // corner
        assert_eq!(intersect(&cuboid, &[[0.0, 0.0, 0.0]]), vec![true]);
        assert_eq!(intersect(&cuboid, &[[-1.0, 0.0, 0.0]]), vec![false]);
        assert_eq!(
            intersect(
                &cuboid,
                &[
                    [-1.0, 0.0, 0.0],
                    [0.0, 0.0, 0.0],
                    [1.0, 1.0, 1.0],
                    [11.0, 11.0, 11.0]
                ]
            ),
            vec![false, true, true, false]
        );
    }

    #[test]
    fn test_cuboid_in_another_octant() {
        let cuboid = Cuboid::new([-10.0, -10.0, -10.0], [0.0, 0.0, 0.0]).unwrap();
        assert_eq!(intersect(&cuboid, &[[-1.0, 0.0, 0.0]]), vec![true]);
    }

    #[test]
    fn test_inverted_corners() {
        let points = [
            [0.0, 0.0, 0.0],
            [3.0, 3.0, 3.0],
            [2.9, 2.9, 2.9],
            [10.0, 10.0, 10.0],
            [10.1, 10.1, 10.1],
        ];
        let expected = vec![false, true, false, true, false];

        let inverted = Cuboid::new([10.0, 10.0, 10.0], [3.0, 3.0, 3.0]).unwrap();
        let ordered = Cuboid::new([3.0, 3.0, 3.0], [10.0, 10.0, 10.0]).unwrap();
        let mixed = Cuboid::new([3.0, 10.0, 3.0], [10.0, 3.0, 10.0]).unwrap();

        assert_eq!(intersect(&inverted, &points), expected);
        assert_eq!(intersect(&ordered, &points), expected);
        assert_eq!(intersect(&mixed, &points), expected);
    }

    #[test]
    fn test_flat_cuboid_is_a_plate() {
        let plate = Cuboid::new([0.0, 0.0, 1.0], [2.0, 2.0, 1.0]).unwrap();
        assert_eq!(
            intersect(&plate, &[[1.0, 1.0, 1.0], [1.0, 1.0, 0.0], [1.0, 1.0, 5.0]]),
            vec![true, false, false]
        );
    }

    #[test]
    fn test_vertices_and_units() {
        let cuboid =
            Cuboid::new_in([0.0, 0.0, 0.0], [1.0, 2.0, 3.0], LengthUnit::Kilometer).unwrap();
        assert_eq!(
            cuboid.vertices(),
            [
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 2.0, 0.0),
                Vector3::new(0.0, 0.0, 3.0),
            ]
        );

        let traj = Trajectory::from_rows(
            &[[500.0, 1500.0, 2500.0], [500.0, 2500.0, 2500.0]],
            vec![0.0, 1.0],
            "gse",
        )
        .unwrap()
        .with_unit(LengthUnit::Meter);
        assert_eq!(
            cuboid.intersect(traj.positions()).unwrap(),
            vec![true, false]
        );
    }
}
