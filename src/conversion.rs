use nalgebra::Vector3;

use crate::constants::Radian;

/// Spherical coordinates of a set of Cartesian points, stored column-wise.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct SphericalColumns {
    pub(crate) r: Vec<f64>,
    pub(crate) lat: Vec<Radian>,
    pub(crate) lon: Vec<Radian>,
}

/// Convert Cartesian points to spherical coordinates in a single pass.
///
/// Arguments
/// ---------
/// * `points`: Cartesian positions, any consistent length unit
///
/// Return
/// ----------
/// * `SphericalColumns`: for each point its radius (same unit as the input),
///   its latitude in `[-π/2, π/2]` measured from the x-y plane and its
///   longitude in `(-π, π]` measured from the x axis.
///   The origin maps to `r = lat = lon = 0`.
pub(crate) fn cartesian_to_spherical(points: &[Vector3<f64>]) -> SphericalColumns {
    let mut columns = SphericalColumns {
        r: Vec::with_capacity(points.len()),
        lat: Vec::with_capacity(points.len()),
        lon: Vec::with_capacity(points.len()),
    };

    for p in points {
        let rho = p.x.hypot(p.y);
        columns.r.push(rho.hypot(p.z));
        columns.lat.push(p.z.atan2(rho));
        columns.lon.push(p.y.atan2(p.x));
    }
    columns
}
