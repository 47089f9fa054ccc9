//! # Trajectories
//!
//! A [`Trajectory`] is an immutable, time-ordered sequence of 3D Cartesian
//! positions with a parallel time index and a coordinate-system label.
//!
//! The geometric half of a trajectory lives in [`Positions`]: the Cartesian
//! points, their length unit and the derived spherical coordinates
//! (`r`, `lat`, `lon`). These are computed **once, at construction**, in a
//! single conversion pass, so they are always consistent with each other and
//! a trajectory can be shared between threads without synchronisation.
//!
//! Shapes only ever look at [`Positions`]; the time index is generic and only
//! matters when runs of selected points are turned into
//! [`Interval`](crate::intervals::Interval)s.
//!
//! ## Construction
//!
//! | Constructor                   | Input                                          |
//! |-------------------------------|------------------------------------------------|
//! | [`Trajectory::new`]           | `Vec<Vector3<f64>>`                            |
//! | [`Trajectory::from_rows`]     | rows of any slice-like type, each validated N×3|
//! | [`Trajectory::from_xyz`]      | three columns of equal length                  |
//!
//! Every constructor checks that the time index has one entry per point.
//! Empty trajectories are valid.
//!
//! ```rust
//! use broni::trajectory::Trajectory;
//! use broni::units::LengthUnit;
//!
//! let orbit = Trajectory::from_xyz(
//!     &[0.0, 1.0],
//!     &[0.0, 0.0],
//!     &[0.0, 0.0],
//!     vec![100_i64, 101],
//!     "gse",
//! )
//! .unwrap()
//! .with_unit(LengthUnit::Kilometer);
//!
//! assert_eq!(orbit.len(), 2);
//! assert_eq!(orbit.r(), &[0.0, 1.0]);
//! ```
use itertools::izip;
use nalgebra::Vector3;

use crate::broni_errors::BroniError;
use crate::constants::Radian;
use crate::conversion::{cartesian_to_spherical, SphericalColumns};
use crate::intervals::{intervals, Interval};
use crate::shapes::Shape;
use crate::units::LengthUnit;

/// Cartesian points of a trajectory together with their unit and spherical coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Positions {
    cartesian: Vec<Vector3<f64>>,
    spherical: SphericalColumns,
    unit: LengthUnit,
}

impl Positions {
    fn new(cartesian: Vec<Vector3<f64>>) -> Self {
        let spherical = cartesian_to_spherical(&cartesian);
        Positions {
            cartesian,
            spherical,
            unit: LengthUnit::Unitless,
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.cartesian.len()
    }

    /// `true` when there are no points.
    pub fn is_empty(&self) -> bool {
        self.cartesian.is_empty()
    }

    /// The N×3 point data, unchanged.
    pub fn cartesian(&self) -> &[Vector3<f64>] {
        &self.cartesian
    }

    /// Length unit the coordinates are expressed in.
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Distance of each point to the origin, in [`Positions::unit`].
    pub fn r(&self) -> &[f64] {
        &self.spherical.r
    }

    /// Latitude of each point, measured from the x-y plane.
    pub fn lat(&self) -> &[Radian] {
        &self.spherical.lat
    }

    /// Longitude of each point, measured from the x axis.
    pub fn lon(&self) -> &[Radian] {
        &self.spherical.lon
    }
}

/// Time-ordered 3D path, generic over the time index type `T`.
///
/// `T` is whatever the caller uses to mark time: sample counters, UNIX
/// timestamps, `hifitime::Epoch`... It is never interpreted, only copied into
/// the returned intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T = f64> {
    positions: Positions,
    time_index: Vec<T>,
    coordinate_system: String,
}

impl<T> Trajectory<T> {
    /// Build a trajectory from Cartesian points.
    ///
    /// Arguments
    /// ---------
    /// * `points`: the N positions, unitless until [`Trajectory::with_unit`] is called
    /// * `time_index`: N time markers, ordering is not checked
    /// * `coordinate_system`: free label (e.g. `"gse"`) kept for bookkeeping
    ///
    /// Return
    /// ------
    /// * `Result<Trajectory<T>, BroniError>`: [`BroniError::TimeIndexLengthMismatch`]
    ///   if `time_index` and `points` differ in length.
    pub fn new(
        points: Vec<Vector3<f64>>,
        time_index: Vec<T>,
        coordinate_system: impl Into<String>,
    ) -> Result<Self, BroniError> {
        if points.len() != time_index.len() {
            return Err(BroniError::TimeIndexLengthMismatch {
                points: points.len(),
                time_index: time_index.len(),
            });
        }

        Ok(Trajectory {
            positions: Positions::new(points),
            time_index,
            coordinate_system: coordinate_system.into(),
        })
    }

    /// Build a trajectory from rows, each of which must hold exactly three components.
    pub fn from_rows<R: AsRef<[f64]>>(
        rows: &[R],
        time_index: Vec<T>,
        coordinate_system: impl Into<String>,
    ) -> Result<Self, BroniError> {
        let points = rows
            .iter()
            .enumerate()
            .map(|(row, values)| match values.as_ref() {
                &[x, y, z] => Ok(Vector3::new(x, y, z)),
                other => Err(BroniError::PointDimension {
                    row,
                    found: other.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(points, time_index, coordinate_system)
    }

    /// Build a trajectory from three coordinate columns of equal length.
    pub fn from_xyz(
        x: &[f64],
        y: &[f64],
        z: &[f64],
        time_index: Vec<T>,
        coordinate_system: impl Into<String>,
    ) -> Result<Self, BroniError> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(BroniError::ColumnLengthMismatch {
                x: x.len(),
                y: y.len(),
                z: z.len(),
            });
        }

        let points = izip!(x, y, z)
            .map(|(&x, &y, &z)| Vector3::new(x, y, z))
            .collect();
        Self::new(points, time_index, coordinate_system)
    }

    /// Tag the positions with a length unit. The coordinates themselves are not rescaled.
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.positions.unit = unit;
        self
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// `true` for a trajectory without samples.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Geometric part of the trajectory, as seen by shapes.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Cartesian points, in input order.
    pub fn cartesian(&self) -> &[Vector3<f64>] {
        self.positions.cartesian()
    }

    /// Copy of the x column.
    pub fn x(&self) -> Vec<f64> {
        self.cartesian().iter().map(|p| p.x).collect()
    }

    /// Copy of the y column.
    pub fn y(&self) -> Vec<f64> {
        self.cartesian().iter().map(|p| p.y).collect()
    }

    /// Copy of the z column.
    pub fn z(&self) -> Vec<f64> {
        self.cartesian().iter().map(|p| p.z).collect()
    }

    /// See [`Positions::r`].
    pub fn r(&self) -> &[f64] {
        self.positions.r()
    }

    /// See [`Positions::lat`].
    pub fn lat(&self) -> &[Radian] {
        self.positions.lat()
    }

    /// See [`Positions::lon`].
    pub fn lon(&self) -> &[Radian] {
        self.positions.lon()
    }

    /// Length unit of the positions, [`LengthUnit::Unitless`] unless set with [`Trajectory::with_unit`].
    pub fn unit(&self) -> LengthUnit {
        self.positions.unit()
    }

    /// One time marker per point.
    pub fn time_index(&self) -> &[T] {
        &self.time_index
    }

    /// Label given at construction, e.g. `"gse"`.
    pub fn coordinate_system(&self) -> &str {
        &self.coordinate_system
    }
}

impl<T: Copy> Trajectory<T> {
    /// Intervals during which this trajectory is inside a single shape.
    ///
    /// Shorthand for [`intervals`] with a one-element shape list.
    pub fn intervals_in(&self, shape: &dyn Shape) -> Result<Vec<Interval<T>>, BroniError> {
        intervals(self, &[shape])
    }
}
