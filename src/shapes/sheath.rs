use std::sync::Arc;

use crate::broni_errors::BroniError;
use crate::constants::Mask;
use crate::shapes::boundary::{BoundaryModel, ModelParams, ParamValue, SphericalBoundary};
use crate::shapes::Shape;
use crate::trajectory::Positions;
use crate::units::Length;

/// Region between two boundary surfaces, e.g. a magnetosheath between the
/// magnetopause (inner) and the bow shock (outer).
///
/// A point belongs to the sheath when it is at most `inner_margin` inside the
/// inner surface and at most `outer_margin` outside the outer surface. Both
/// surfaces share the same scale and model parameters.
#[derive(Debug, Clone)]
pub struct Sheath {
    inner: SphericalBoundary,
    outer: SphericalBoundary,
}

impl Sheath {
    /// Create a sheath from an inner and an outer model.
    ///
    /// Return
    /// ------
    /// * [`BroniError::InvalidMargin`] if a margin is negative or not finite,
    ///   plus any error [`SphericalBoundary::new`] reports for the derived bounds.
    pub fn new(
        inner_model: impl BoundaryModel + 'static,
        outer_model: impl BoundaryModel + 'static,
        inner_margin: Length,
        outer_margin: Length,
        scale: Length,
        params: ModelParams,
    ) -> Result<Self, BroniError> {
        Self::from_shared(
            Arc::new(inner_model),
            Arc::new(outer_model),
            inner_margin,
            outer_margin,
            scale,
            params,
        )
    }

    /// Start a [`SheathBuilder`] with no margins and a 1 km scale.
    pub fn builder(
        inner_model: impl BoundaryModel + 'static,
        outer_model: impl BoundaryModel + 'static,
    ) -> SheathBuilder {
        SheathBuilder {
            inner_model: Arc::new(inner_model),
            outer_model: Arc::new(outer_model),
            inner_margin: None,
            outer_margin: None,
            scale: Length::km(1.0),
            params: ModelParams::new(),
        }
    }

    fn from_shared(
        inner_model: Arc<dyn BoundaryModel>,
        outer_model: Arc<dyn BoundaryModel>,
        inner_margin: Length,
        outer_margin: Length,
        scale: Length,
        params: ModelParams,
    ) -> Result<Self, BroniError> {
        for (side, margin) in [("inner", inner_margin), ("outer", outer_margin)] {
            if !(margin.value.is_finite() && margin.value >= 0.0) {
                return Err(BroniError::InvalidMargin {
                    side,
                    value: margin.value,
                });
            }
        }

        let inner = SphericalBoundary::from_shared(
            inner_model,
            Some(-inner_margin),
            None,
            scale,
            params.clone(),
        )?;
        let outer =
            SphericalBoundary::from_shared(outer_model, None, Some(outer_margin), scale, params)?;

        Ok(Sheath { inner, outer })
    }

    /// Boundary derived from the inner model, bounded below by `-inner_margin`.
    pub fn inner(&self) -> &SphericalBoundary {
        &self.inner
    }

    /// Boundary derived from the outer model, bounded above by `outer_margin`.
    pub fn outer(&self) -> &SphericalBoundary {
        &self.outer
    }
}

impl Shape for Sheath {
    fn intersect(&self, positions: &Positions) -> Result<Mask, BroniError> {
        let inner = self.inner.intersect(positions)?;
        let outer = self.outer.intersect(positions)?;

        Ok(inner.into_iter().zip(outer).map(|(i, o)| i && o).collect())
    }
}

/// Builder for [`Sheath`], scale defaults to 1 km.
///
/// An unset margin is zero, expressed in the unit of the scale.
pub struct SheathBuilder {
    inner_model: Arc<dyn BoundaryModel>,
    outer_model: Arc<dyn BoundaryModel>,
    inner_margin: Option<Length>,
    outer_margin: Option<Length>,
    scale: Length,
    params: ModelParams,
}

impl SheathBuilder {
    pub fn inner_margin(mut self, margin: Length) -> Self {
        self.inner_margin = Some(margin);
        self
    }

    pub fn outer_margin(mut self, margin: Length) -> Self {
        self.outer_margin = Some(margin);
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

    pub fn build(self) -> Result<Sheath, BroniError> {
        let no_margin = Length::new(0.0, self.scale.unit);
        Sheath::from_shared(
            self.inner_model,
            self.outer_model,
            self.inner_margin.unwrap_or(no_margin),
            self.outer_margin.unwrap_or(no_margin),
            self.scale,
            self.params,
        )
    }
}
