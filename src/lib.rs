//! # broni
//!
//! Find the portions of a time-ordered 3D trajectory that lie inside, outside
//! or within a band around geometric regions, and report them as closed time
//! intervals.
//!
//! ```rust
//! use broni::{intervals, Cuboid, Sphere, Trajectory};
//!
//! let orbit = Trajectory::from_rows(
//!     &[[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0],
//!       [-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0]],
//!     (0..6).collect::<Vec<u32>>(),
//!     "gse",
//! )
//! .unwrap();
//!
//! let cuboid = Cuboid::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]).unwrap();
//! let sphere = Sphere::new([1.5, 1.5, 1.5], 1.0).unwrap();
//!
//! let found = intervals(&orbit, &[&cuboid, &sphere]).unwrap();
//! let found: Vec<(u32, u32)> = found.into_iter().map(Into::into).collect();
//! assert_eq!(found, vec![(2, 2), (5, 5)]);
//! ```
pub mod broni_errors;
pub mod constants;
mod conversion;
pub mod intervals;
pub mod shapes;
pub mod trajectory;
pub mod units;

pub use broni_errors::BroniError;
pub use intervals::{intervals, Interval};
pub use shapes::{Cuboid, Shape, Sheath, Sphere, SphericalBoundary};
pub use trajectory::Trajectory;
pub use units::{Length, LengthUnit};
