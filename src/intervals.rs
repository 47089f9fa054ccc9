//! # Interval extraction
//!
//! Turns shape selections into time intervals:
//!
//! 1. every shape computes its [`Mask`] over the trajectory,
//! 2. the masks are combined with a logical AND ([`combined_mask`]),
//! 3. maximal runs of selected points are found in one linear scan ([`runs`]),
//! 4. each run is reported as an [`Interval`] of time-index values.
//!
//! Intervals are **closed on both ends**: `start` and `end` are the time
//! index of the first and last selected point of a run, so an isolated
//! selected point gives `start == end`. Intervals come out in trajectory order
//! and never touch: two runs are always separated by at least one unselected
//! point.
//!
//! With no shapes nothing is selected, so the result is empty.
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::broni_errors::BroniError;
use crate::constants::Mask;
use crate::shapes::Shape;
use crate::trajectory::{Positions, Trajectory};

/// Closed time interval `[start, end]` over which a trajectory is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
}

impl<T> From<Interval<T>> for (T, T) {
    fn from(interval: Interval<T>) -> Self {
        (interval.start, interval.end)
    }
}

/// Logical AND of the masks of all `shapes` over `positions`.
///
/// Arguments
/// ---------
/// * `positions`: geometric part of the trajectory
/// * `shapes`: shapes a point has to be in, all of them
///
/// Return
/// ------
/// * `Result<Mask, BroniError>`: one entry per point. With no shapes every entry is `false`.
///   Any shape error stops the evaluation and is returned as is.
pub fn combined_mask(positions: &Positions, shapes: &[&dyn Shape]) -> Result<Mask, BroniError> {
    let Some((first, others)) = shapes.split_first() else {
        return Ok(vec![false; positions.len()]);
    };

    let mut mask = checked_mask(*first, positions)?;
    for shape in others {
        let other = checked_mask(*shape, positions)?;
        mask.iter_mut()
            .zip(other)
            .for_each(|(selected, keep)| *selected &= keep);
    }
    Ok(mask)
}

fn checked_mask(shape: &dyn Shape, positions: &Positions) -> Result<Mask, BroniError> {
    let mask = shape.intersect(positions)?;
    if mask.len() != positions.len() {
        return Err(BroniError::MaskLengthMismatch {
            expected: positions.len(),
            found: mask.len(),
        });
    }
    Ok(mask)
}

/// Maximal runs of `true` in `mask`, as inclusive index ranges in ascending order.
pub fn runs(mask: &[bool]) -> Vec<RangeInclusive<usize>> {
    let mut runs = Vec::new();
    let mut start = None;

    for (i, &selected) in mask.iter().enumerate() {
        match (selected, start) {
            (true, None) => start = Some(i),
            (false, Some(first)) => {
                runs.push(first..=i - 1);
                start = None;
            }
            _ => {}
        }
    }
    if let Some(first) = start {
        runs.push(first..=mask.len() - 1);
    }
    runs
}

/// Time intervals during which `trajectory` lies in every one of `shapes`.
///
/// Arguments
/// ---------
/// * `trajectory`: the path to analyse
/// * `shapes`: shapes combined with a logical AND, an empty list selects nothing
///
/// Return
/// ------
/// * `Result<Vec<Interval<T>>, BroniError>`: closed intervals of time-index values,
///   one per maximal run of selected points, in trajectory order.
///
/// # Example
///
/// ```rust
/// use broni::intervals::intervals;
/// use broni::shapes::Cuboid;
/// use broni::trajectory::Trajectory;
///
/// let traj = Trajectory::from_rows(
///     &[[-1.0, -1.0, -1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [3.0, 3.0, 3.0], [1.0, 1.0, 1.0]],
///     vec![0, 1, 2, 3, 4],
///     "gse",
/// )
/// .unwrap();
/// let cuboid = Cuboid::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0]).unwrap();
///
/// let found = intervals(&traj, &[&cuboid]).unwrap();
/// assert_eq!(found.len(), 2);
/// assert_eq!((found[0].start, found[0].end), (1, 2));
/// assert_eq!((found[1].start, found[1].end), (4, 4));
/// ```
#[tracing::instrument(skip_all, fields(points = trajectory.len(), shapes = shapes.len()))]
pub fn intervals<T: Copy>(
    trajectory: &Trajectory<T>,
    shapes: &[&dyn Shape],
) -> Result<Vec<Interval<T>>, BroniError> {
    let mask = combined_mask(trajectory.positions(), shapes)?;
    let time = trajectory.time_index();

    let found: Vec<Interval<T>> = runs(&mask)
        .into_iter()
        .map(|run| Interval {
            start: time[*run.start()],
            end: time[*run.end()],
        })
        .collect();

    debug!(intervals = found.len(), "interval extraction done");
    Ok(found)
}
