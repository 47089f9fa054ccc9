use thiserror::Error;

use crate::shapes::ModelError;
use crate::units::LengthUnit;

#[derive(Error, Debug)]
pub enum BroniError {
    #[error("Trajectory point {row} has {found} components, exactly 3 are required")]
    PointDimension { row: usize, found: usize },

    #[error("Trajectory columns differ in length: x={x}, y={y}, z={z}")]
    ColumnLengthMismatch { x: usize, y: usize, z: usize },

    #[error("Time index length ({time_index}) does not match the number of points ({points})")]
    TimeIndexLengthMismatch { points: usize, time_index: usize },

    #[error("Sphere radius has to be finite and bigger than 0, got {0}")]
    DegenerateSphere(f64),

    #[error("Cuboid corners are identical, a cuboid of zero volume is not supported")]
    DegenerateCuboid,

    #[error("At least one of lower or upper bound has to be specified")]
    MissingBound,

    #[error("Lower bound ({lower}) needs to be lower than upper bound ({upper})")]
    InvertedBounds { lower: f64, upper: f64 },

    #[error("Scale factor has to be finite and bigger than 0, got {0}")]
    InvalidScale(f64),

    #[error("The {side} margin has to be larger or equal to zero, got {value}")]
    InvalidMargin { side: &'static str, value: f64 },

    #[error("Cannot convert a length from {from} to {to}")]
    UnitMismatch { from: LengthUnit, to: LengthUnit },

    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    #[error("Shape returned a mask of {found} entries for {expected} points")]
    MaskLengthMismatch { expected: usize, found: usize },

    #[error("Boundary model callback failed: {0}")]
    ModelCallback(#[source] ModelError),

    #[error("Boundary model returned {found} radii for {expected} directions")]
    ModelOutputLength { expected: usize, found: usize },
}

impl PartialEq for BroniError {
    fn eq(&self, other: &Self) -> bool {
        use BroniError::*;
        match (self, other) {
            (
                PointDimension { row: a, found: b },
                PointDimension { row: c, found: d },
            ) => a == c && b == d,
            (
                ColumnLengthMismatch { x: a, y: b, z: c },
                ColumnLengthMismatch { x: d, y: e, z: f },
            ) => a == d && b == e && c == f,
            (
                TimeIndexLengthMismatch {
                    points: a,
                    time_index: b,
                },
                TimeIndexLengthMismatch {
                    points: c,
                    time_index: d,
                },
            ) => a == c && b == d,
            (DegenerateSphere(a), DegenerateSphere(b)) => a == b,
            (InvertedBounds { lower: a, upper: b }, InvertedBounds { lower: c, upper: d }) => {
                a == c && b == d
            }
            (InvalidScale(a), InvalidScale(b)) => a == b,
            (
                InvalidMargin { side: a, value: b },
                InvalidMargin { side: c, value: d },
            ) => a == c && b == d,
            (UnitMismatch { from: a, to: b }, UnitMismatch { from: c, to: d }) => {
                a == c && b == d
            }
            (UnknownUnit(a), UnknownUnit(b)) => a == b,
            (
                ModelOutputLength {
                    expected: a,
                    found: b,
                },
                ModelOutputLength {
                    expected: c,
                    found: d,
                },
            ) => a == c && b == d,

            (
                MaskLengthMismatch {
                    expected: a,
                    found: b,
                },
                MaskLengthMismatch {
                    expected: c,
                    found: d,
                },
            ) => a == c && b == d,

            // callback errors are opaque, equal when the variant matches
            (ModelCallback(_), ModelCallback(_)) => true,

            (DegenerateCuboid, DegenerateCuboid) => true,
            (MissingBound, MissingBound) => true,

            _ => false,
        }
    }
}
