//! # Spherical boundaries
//!
//! A [`SphericalBoundary`] selects the trajectory points whose **signed radial
//! distance** to a direction-dependent surface falls within `[lower, upper]`:
//!
//! ```text
//! distance = r(point) - scale · model_radius(lon(point), lat(point))
//! ```
//!
//! The distance is positive outside the modeled surface and negative inside.
//! Either bound may be omitted, meaning unbounded on that side, but not both.
//!
//! ## Boundary models
//!
//! The surface itself is not computed here. It comes from a [`BoundaryModel`],
//! typically a magnetopause or bow-shock shape function supplied by the caller.
//! The model receives the per-point longitude and latitude of the trajectory
//! together with [`ModelParams`], and returns a [`BoundarySurface`] whose
//! `radius` column is expressed in units of the boundary's `scale`.
//!
//! The [`Basis`] in the parameters handed to the model is **always**
//! [`Basis::Spherical`]: whatever the caller configured is overridden before
//! each evaluation. All other parameters are forwarded verbatim.
//!
//! Any closure with the right signature is a model:
//!
//! ```rust
//! use broni::shapes::{BoundarySurface, ModelError, ModelParams, SphericalBoundary};
//! use broni::units::Length;
//!
//! let ten_km = |lon: &[f64], lat: &[f64], _: &ModelParams| -> Result<BoundarySurface, ModelError> {
//!     Ok(BoundarySurface::constant(10.0, lon, lat))
//! };
//!
//! let shell = SphericalBoundary::builder(ten_km)
//!     .lower(Length::km(-1.0))
//!     .upper(Length::km(1.0))
//!     .build()
//!     .unwrap();
//! assert_eq!(shell.scale(), Length::km(1.0));
//! ```
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use itertools::izip;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::broni_errors::BroniError;
use crate::constants::{Mask, Radian};
use crate::shapes::Shape;
use crate::trajectory::Positions;
use crate::units::Length;

/// Error type returned by boundary models, propagated untouched.
pub type ModelError = Box<dyn std::error::Error + Send + Sync>;

/// Coordinate basis a boundary model is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Basis {
    #[default]
    Cartesian,
    Spherical,
}

/// Extra parameter forwarded to a boundary model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v.into())
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// Parameters handed to a [`BoundaryModel`]: the requested basis and free-form extras.
///
/// Keys named `base` or `basis` are reserved for the basis selection and are
/// never stored as extras, whether inserted or deserialized.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawModelParams")]
pub struct ModelParams {
    basis: Basis,
    extra: BTreeMap<String, ParamValue>,
}

#[derive(Deserialize)]
struct RawModelParams {
    #[serde(default)]
    basis: Basis,
    #[serde(default)]
    extra: BTreeMap<String, ParamValue>,
}

impl From<RawModelParams> for ModelParams {
    fn from(raw: RawModelParams) -> Self {
        raw.extra
            .into_iter()
            .fold(ModelParams::new().with_basis(raw.basis), |params, (k, v)| {
                params.with(k, v)
            })
    }
}

impl ModelParams {
    /// Cartesian basis, no extras.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basis(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Store an extra parameter, reserved basis keys are ignored.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        if key == "base" || key == "basis" {
            return;
        }
        self.extra.insert(key, value.into());
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.extra.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v))
    }

    fn forced_spherical(mut self) -> Self {
        self.basis = Basis::Spherical;
        self
    }
}

/// Output of a boundary model in the spherical basis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundarySurface {
    /// Model radius for each requested direction, in units of the boundary's scale.
    pub radius: Vec<f64>,
    pub lon: Vec<Radian>,
    pub lat: Vec<Radian>,
}

impl BoundarySurface {
    pub fn new(radius: Vec<f64>, lon: Vec<Radian>, lat: Vec<Radian>) -> Self {
        BoundarySurface { radius, lon, lat }
    }

    /// Surface of constant radius over the given directions.
    pub fn constant(radius: f64, lon: &[Radian], lat: &[Radian]) -> Self {
        BoundarySurface {
            radius: vec![radius; lon.len()],
            lon: lon.to_vec(),
            lat: lat.to_vec(),
        }
    }
}

/// External radius-as-function-of-direction model.
pub trait BoundaryModel: Send + Sync {
    /// Evaluate the model surface in the directions `(lon[i], lat[i])`.
    ///
    /// The returned `radius` must hold exactly one value per direction.
    fn surface(
        &self,
        lon: &[Radian],
        lat: &[Radian],
        params: &ModelParams,
    ) -> Result<BoundarySurface, ModelError>;
}

impl<F> BoundaryModel for F
where
    F: Fn(&[Radian], &[Radian], &ModelParams) -> Result<BoundarySurface, ModelError>
        + Send
        + Sync,
{
    fn surface(
        &self,
        lon: &[Radian],
        lat: &[Radian],
        params: &ModelParams,
    ) -> Result<BoundarySurface, ModelError> {
        self(lon, lat, params)
    }
}

/// Band of signed radial distance around a [`BoundaryModel`] surface.
#[derive(Clone)]
pub struct SphericalBoundary {
    model: Arc<dyn BoundaryModel>,
    lower: Option<Length>,
    upper: Option<Length>,
    scale: Length,
    params: ModelParams,
}

impl fmt::Debug for SphericalBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SphericalBoundary")
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("scale", &self.scale)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl SphericalBoundary {
    /// Create a boundary shape.
    ///
    /// Arguments
    /// ---------
    /// * `model`: the external surface model
    /// * `lower`, `upper`: optional bounds on the signed distance, at least one is required
    /// * `scale`: length of one model radius unit (e.g. `1 Re` for a model answering in Earth radii)
    /// * `params`: extra model parameters, the basis entry is overridden to spherical
    ///
    /// Return
    /// ------
    /// * `Result<SphericalBoundary, BroniError>`:
    ///     - [`BroniError::MissingBound`] if neither bound is given,
    ///     - [`BroniError::InvertedBounds`] if `lower > upper`,
    ///     - [`BroniError::InvalidScale`] if `scale` is not finite and strictly positive,
    ///     - [`BroniError::UnitMismatch`] if the two bounds cannot be compared.
    pub fn new(
        model: impl BoundaryModel + 'static,
        lower: Option<Length>,
        upper: Option<Length>,
        scale: Length,
        params: ModelParams,
    ) -> Result<Self, BroniError> {
        Self::from_shared(Arc::new(model), lower, upper, scale, params)
    }

    /// Start a [`SphericalBoundaryBuilder`] with no bounds and a 1 km scale.
    pub fn builder(model: impl BoundaryModel + 'static) -> SphericalBoundaryBuilder {
        SphericalBoundaryBuilder {
            model: Arc::new(model),
            lower: None,
            upper: None,
            scale: Length::km(1.0),
            params: ModelParams::new(),
        }
    }

    pub(crate) fn from_shared(
        model: Arc<dyn BoundaryModel>,
        lower: Option<Length>,
        upper: Option<Length>,
        scale: Length,
        params: ModelParams,
    ) -> Result<Self, BroniError> {
        if lower.is_none() && upper.is_none() {
            return Err(BroniError::MissingBound);
        }

        if !(scale.value.is_finite() && scale.value > 0.0) {
            return Err(BroniError::InvalidScale(scale.value));
        }

        if let (Some(lo), Some(up)) = (lower, upper) {
            let lo_value = lo.value_in(up.unit)?;
            if lo_value > up.value {
                return Err(BroniError::InvertedBounds {
                    lower: lo_value,
                    upper: up.value,
                });
            }
        }

        Ok(SphericalBoundary {
            model,
            lower,
            upper,
            scale,
            params: params.forced_spherical(),
        })
    }

    /// Lower bound on the signed distance, `None` when unbounded inside.
    pub fn lower(&self) -> Option<Length> {
        self.lower
    }

    /// Upper bound on the signed distance, `None` when unbounded outside.
    pub fn upper(&self) -> Option<Length> {
        self.upper
    }

    /// Length of one model radius unit.
    pub fn scale(&self) -> Length {
        self.scale
    }

    /// Parameters as they are handed to the model, basis already forced.
    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    /// Signed distance of each point to the model surface, in the unit of `positions`.
    ///
    /// Return
    /// ------
    /// * `Result<Vec<f64>, BroniError>`: positive outside the surface, negative inside.
    ///   Model failures come back as [`BroniError::ModelCallback`]; a radius column of
    ///   the wrong length as [`BroniError::ModelOutputLength`].
    pub fn signed_distance(&self, positions: &Positions) -> Result<Vec<f64>, BroniError> {
        let scale = self.scale.value_in(positions.unit())?;

        debug!(
            points = positions.len(),
            scale = %self.scale,
            "evaluating boundary model"
        );
        let surface = self
            .model
            .surface(positions.lon(), positions.lat(), &self.params)
            .map_err(BroniError::ModelCallback)?;

        if surface.radius.len() != positions.len() {
            return Err(BroniError::ModelOutputLength {
                expected: positions.len(),
                found: surface.radius.len(),
            });
        }

        let distances: Vec<f64> = izip!(positions.r(), &surface.radius)
            .map(|(r, model_r)| r - model_r * scale)
            .collect();
        trace!(?distances, "signed distances to boundary");
        Ok(distances)
    }
}

impl Shape for SphericalBoundary {
    fn intersect(&self, positions: &Positions) -> Result<Mask, BroniError> {
        let unit = positions.unit();
        let lower = self.lower.map(|l| l.value_in(unit)).transpose()?;
        let upper = self.upper.map(|u| u.value_in(unit)).transpose()?;

        Ok(self
            .signed_distance(positions)?
            .into_iter()
            .map(|d| lower.is_none_or(|lo| d >= lo) && upper.is_none_or(|up| d <= up))
            .collect())
    }
}

/// Builder for [`SphericalBoundary`], scale defaults to 1 km.
pub struct SphericalBoundaryBuilder {
    model: Arc<dyn BoundaryModel>,
    lower: Option<Length>,
    upper: Option<Length>,
    scale: Length,
    params: ModelParams,
}

impl SphericalBoundaryBuilder {
    pub fn lower(mut self, lower: Length) -> Self {
        self.lower = Some(lower);
        self
    }

    pub fn upper(mut self, upper: Length) -> Self {
        self.upper = Some(upper);
        self
    }

    pub fn scale(mut self, scale: Length) -> Self {
        self.scale = scale;
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn params(mut self, params: ModelParams) -> Self {
        self.params = params;
        self
    }

    pub fn build(self) -> Result<SphericalBoundary, BroniError> {
        SphericalBoundary::from_shared(
            self.model,
            self.lower,
            self.upper,
            self.scale,
            self.params,
        )
    }
}
