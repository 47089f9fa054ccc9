//! # Length units
//!
//! Every position, radius, bound and scale handled by the crate carries a
//! [`LengthUnit`]. Values are only ever compared after being expressed in a
//! common unit, which is always the unit of the trajectory being tested.
//!
//! [`LengthUnit::Unitless`] is for plain numbers. It converts only to itself:
//! mixing a unitless value with a dimensioned one is a caller error and
//! surfaces as [`BroniError::UnitMismatch`].
//!
//! ```rust
//! use broni::units::{Length, LengthUnit};
//!
//! let one_re = Length::new(1.0, LengthUnit::EarthRadius);
//! let km = one_re.value_in(LengthUnit::Kilometer).unwrap();
//! assert!((km - 6378.137).abs() < 1e-9);
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::broni_errors::BroniError;
use crate::constants::{Kilometer, AU_KM, EARTH_RADIUS_KM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    #[serde(rename = "")]
    Unitless,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "km")]
    Kilometer,
    #[serde(rename = "Re")]
    EarthRadius,
    #[serde(rename = "au")]
    AstronomicalUnit,
}

impl LengthUnit {
    /// Size of one unit in kilometers, `None` for [`LengthUnit::Unitless`].
    fn in_km(self) -> Option<Kilometer> {
        match self {
            LengthUnit::Unitless => None,
            LengthUnit::Meter => Some(1e-3),
            LengthUnit::Kilometer => Some(1.0),
            LengthUnit::EarthRadius => Some(EARTH_RADIUS_KM),
            LengthUnit::AstronomicalUnit => Some(AU_KM),
        }
    }

    /// Factor converting a value expressed in `self` into `target`.
    ///
    /// Arguments
    /// ---------
    /// * `target`: the unit the value should be expressed in
    ///
    /// Return
    /// ------
    /// * `Result<f64, BroniError>`: multiply by this factor to convert. Identical units give `1.0`.
    ///   A unitless/dimensioned pair gives [`BroniError::UnitMismatch`].
    pub fn factor_to(self, target: LengthUnit) -> Result<f64, BroniError> {
        if self == target {
            return Ok(1.0);
        }
        match (self.in_km(), target.in_km()) {
            (Some(from), Some(to)) => Ok(from / to),
            _ => Err(BroniError::UnitMismatch {
                from: self,
                to: target,
            }),
        }
    }

    /// Short symbol, empty for [`LengthUnit::Unitless`].
    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Unitless => "",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::EarthRadius => "Re",
            LengthUnit::AstronomicalUnit => "au",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthUnit::Unitless => write!(f, "unitless"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

impl FromStr for LengthUnit {
    type Err = BroniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "unitless" => Ok(LengthUnit::Unitless),
            "m" => Ok(LengthUnit::Meter),
            "km" => Ok(LengthUnit::Kilometer),
            "Re" | "R_earth" | "earthRad" => Ok(LengthUnit::EarthRadius),
            "au" | "AU" => Ok(LengthUnit::AstronomicalUnit),
            other => Err(BroniError::UnknownUnit(other.to_string())),
        }
    }
}

/// A scalar length tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Length {
    pub value: f64,
    #[serde(default)]
    pub unit: LengthUnit,
}

impl Length {
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Length { value, unit }
    }

    /// Length in kilometers.
    pub fn km(value: f64) -> Self {
        Length::new(value, LengthUnit::Kilometer)
    }

    pub fn unitless(value: f64) -> Self {
        Length::new(value, LengthUnit::Unitless)
    }

    /// Numeric value of this length expressed in `unit`.
    pub fn value_in(&self, unit: LengthUnit) -> Result<f64, BroniError> {
        Ok(self.value * self.unit.factor_to(unit)?)
    }

    /// The same length expressed in `unit`.
    pub fn to(&self, unit: LengthUnit) -> Result<Length, BroniError> {
        Ok(Length::new(self.value_in(unit)?, unit))
    }
}

impl std::ops::Neg for Length {
    type Output = Length;

    fn neg(self) -> Length {
        Length::new(-self.value, self.unit)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            LengthUnit::Unitless => write!(f, "{}", self.value),
            unit => write!(f, "{} {}", self.value, unit.symbol()),
        }
    }
}

#[cfg(test)]
mod units_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_between_dimensioned_units() {
        assert_eq!(LengthUnit::Kilometer.factor_to(LengthUnit::Kilometer), Ok(1.0));
        assert_relative_eq!(
            LengthUnit::Kilometer.factor_to(LengthUnit::Meter).unwrap(),
            1000.0
        );
        assert_relative_eq!(
            LengthUnit::EarthRadius
                .factor_to(LengthUnit::Kilometer)
                .unwrap(),
            EARTH_RADIUS_KM
        );
        assert_relative_eq!(
            LengthUnit::AstronomicalUnit
                .factor_to(LengthUnit::EarthRadius)
                .unwrap(),
            AU_KM / EARTH_RADIUS_KM
        );
    }

    #[test]
    fn test_unitless_only_converts_to_itself() {
        assert_eq!(LengthUnit::Unitless.factor_to(LengthUnit::Unitless), Ok(1.0));
        assert_eq!(
            LengthUnit::Unitless.factor_to(LengthUnit::Kilometer),
            Err(BroniError::UnitMismatch {
                from: LengthUnit::Unitless,
                to: LengthUnit::Kilometer
            })
        );
        assert!(Length::km(1.0).value_in(LengthUnit::Unitless).is_err());
    }

    #[test]
    fn test_parse_unit() {
        assert_eq!("km".parse::<LengthUnit>(), Ok(LengthUnit::Kilometer));
        assert_eq!(" m ".parse::<LengthUnit>(), Ok(LengthUnit::Meter));
        assert_eq!("R_earth".parse::<LengthUnit>(), Ok(LengthUnit::EarthRadius));
        assert_eq!("".parse::<LengthUnit>(), Ok(LengthUnit::Unitless));
        assert_eq!(
            "parsec".parse::<LengthUnit>(),
            Err(BroniError::UnknownUnit("parsec".into()))
        );
    }

    #[test]
    fn test_length_display_and_neg() {
        assert_eq!(Length::km(1.5).to_string(), "1.5 km");
        assert_eq!(Length::unitless(2.0).to_string(), "2");
        assert_eq!(-Length::km(1.0), Length::km(-1.0));
        assert_eq!(
            Length::new(1500.0, LengthUnit::Meter).to(LengthUnit::Kilometer),
            Ok(Length::km(1.5))
        );
    }
}
