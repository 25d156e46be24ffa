use std::{fmt::Display, str::FromStr};

use context_error::BoxedError;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{error::MzError, helper_functions::invalid_argument};

/// The unit of a mass tolerance.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum MassUnit {
    /// An absolute tolerance in Dalton
    #[default]
    Dalton,
    /// A relative tolerance in parts per million
    Ppm,
}

impl FromStr for MassUnit {
    type Err = BoxedError<'static, MzError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "da" | "dalton" | "uo:0000221" => Ok(Self::Dalton),
            "ppm" | "uo:0000169" => Ok(Self::Ppm),
            _ => Err(invalid_argument(
                "Unknown mass unit",
                format!("The unit '{s}' is not a known mass unit, use Da, Dalton, ppm, or their UO accessions"),
            )),
        }
    }
}

impl Display for MassUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dalton => write!(f, "Da"),
            Self::Ppm => write!(f, "ppm"),
        }
    }
}

/// A symmetric mass tolerance, either absolute (Da) or relative (ppm).
///
/// ```rust
/// # use mzdigest::quantities::*;
/// let tolerance = Tolerance::new(10.0, "ppm").unwrap();
/// assert!(tolerance.is_tolerable(1000.005, 1000.0));
/// assert!(!tolerance.is_tolerable(1000.02, 1000.0));
/// assert_eq!("10 ppm".parse::<Tolerance>().unwrap(), tolerance);
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "ToleranceValue", into = "ToleranceValue")]
pub struct Tolerance {
    value: OrderedFloat<f64>,
    unit: MassUnit,
}

/// Unchecked serialised form of a [`Tolerance`].
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
struct ToleranceValue {
    value: f64,
    unit: MassUnit,
}

impl TryFrom<ToleranceValue> for Tolerance {
    type Error = String;
    fn try_from(value: ToleranceValue) -> Result<Self, Self::Error> {
        Self::with_unit(value.value, value.unit).map_err(|err| err.to_string())
    }
}

impl From<Tolerance> for ToleranceValue {
    fn from(value: Tolerance) -> Self {
        Self {
            value: value.value.0,
            unit: value.unit,
        }
    }
}

impl Tolerance {
    /// Create a tolerance from a value and the name of a unit (case insensitive `Da`, `Dalton`,
    /// `UO:0000221`, `ppm`, or `UO:0000169`).
    /// # Errors
    /// If the unit is unknown or the value is negative or not finite.
    pub fn new(value: f64, unit: &str) -> Result<Self, BoxedError<'static, MzError>> {
        Self::with_unit(value, unit.parse()?)
    }

    /// Create a tolerance from a value and a unit.
    /// # Errors
    /// If the value is negative or not finite.
    pub fn with_unit(value: f64, unit: MassUnit) -> Result<Self, BoxedError<'static, MzError>> {
        if !value.is_finite() || value < 0.0 {
            return Err(invalid_argument(
                "Invalid tolerance",
                format!("A tolerance has to be a finite positive number, but '{value}' was given"),
            ));
        }
        Ok(Self {
            value: OrderedFloat(value),
            unit,
        })
    }

    /// An absolute tolerance in Dalton.
    /// # Errors
    /// If the value is negative or not finite.
    pub fn new_dalton(value: f64) -> Result<Self, BoxedError<'static, MzError>> {
        Self::with_unit(value, MassUnit::Dalton)
    }

    /// A relative tolerance in ppm.
    /// # Errors
    /// If the value is negative or not finite.
    pub fn new_ppm(value: f64) -> Result<Self, BoxedError<'static, MzError>> {
        Self::with_unit(value, MassUnit::Ppm)
    }

    /// The value in the unit of this tolerance
    pub const fn value(&self) -> f64 {
        self.value.0
    }

    /// The unit
    pub const fn unit(&self) -> MassUnit {
        self.unit
    }

    /// The allowed deviation in Dalton around the given mass
    pub fn dalton_delta(&self, mass: f64) -> f64 {
        match self.unit {
            MassUnit::Dalton => self.value.0,
            MassUnit::Ppm => mass.abs() * self.value.0 / 1e6,
        }
    }

    /// The allowed deviation in ppm around the given mass
    pub fn ppm_delta(&self, mass: f64) -> f64 {
        match self.unit {
            MassUnit::Dalton => self.value.0 / mass.abs() * 1e6,
            MassUnit::Ppm => self.value.0,
        }
    }

    /// The inclusive window `(low, high)` of masses that are within tolerance of the given mass
    pub fn bounds(&self, mass: f64) -> (f64, f64) {
        let delta = self.dalton_delta(mass);
        (mass - delta, mass + delta)
    }

    /// Check if the observed mass is within tolerance of the expected mass (inclusive). A ppm
    /// tolerance is relative to the expected mass, so nothing is tolerable around zero.
    pub fn is_tolerable(&self, observed: f64, expected: f64) -> bool {
        let deviation = match self.unit {
            MassUnit::Dalton => (observed - expected).abs(),
            MassUnit::Ppm => ((observed - expected) / expected * 1e6).abs(),
        };
        deviation <= self.value.0
    }
}

impl Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl FromStr for Tolerance {
    type Err = BoxedError<'static, MzError>;
    /// Parse `10 ppm`, `0.5Da`, `20 UO:0000169` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E')))
            .unwrap_or(s.len());
        let (number, unit) = s.split_at(split);
        let value = number.trim().parse::<f64>().map_err(|err| {
            invalid_argument(
                "Invalid tolerance",
                format!("The tolerance '{s}' does not start with a valid number: {err}"),
            )
        })?;
        Self::new(value, unit)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;

    #[test]
    fn ppm() {
        let tolerance = Tolerance::new(5.0, "ppm").unwrap();
        assert!(tolerance.is_tolerable(100.0, 100.0));
        assert!(!tolerance.is_tolerable(100.0, 1000.0));
        assert!((tolerance.dalton_delta(1000.0) - 0.005).abs() < 1e-12);
        assert!((tolerance.ppm_delta(1000.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn dalton() {
        let tolerance = Tolerance::new(0.5, "Da").unwrap();
        assert!(tolerance.is_tolerable(100.0, 100.1));
        assert!(tolerance.is_tolerable(100.5, 100.0));
        assert!(!tolerance.is_tolerable(100.6, 100.0));
        assert!((tolerance.ppm_delta(1000.0) - 500.0).abs() < 1e-9);
        assert_eq!(tolerance.bounds(100.0), (99.5, 100.5));
    }

    #[test]
    fn deviation_at_the_boundary() {
        let ppm = Tolerance::new_ppm(5.0).unwrap();
        // 5.000000000024 ppm after rounding
        assert!(!ppm.is_tolerable(100.0005, 100.0));
        assert!(ppm.is_tolerable(100.000_499, 100.0));
        assert!(!ppm.is_tolerable(0.0, 0.0));
        assert!(!ppm.is_tolerable(1e-9, 0.0));
        let dalton = Tolerance::new_dalton(0.3).unwrap();
        // 0.30000000000000004 Da after rounding
        assert!(!dalton.is_tolerable(0.4, 0.1));
        assert!(dalton.is_tolerable(0.3, 0.0));
        assert!(dalton.is_tolerable(0.35, 0.1));
    }

    #[test]
    fn zero_is_exact() {
        let tolerance = Tolerance::new_dalton(0.0).unwrap();
        assert!(tolerance.is_tolerable(100.0, 100.0));
        assert!(!tolerance.is_tolerable(100.000_001, 100.0));
    }

    #[test]
    fn units() {
        for (unit, expected) in [
            ("Da", MassUnit::Dalton),
            ("dalton", MassUnit::Dalton),
            ("UO:0000221", MassUnit::Dalton),
            ("PPM", MassUnit::Ppm),
            ("uo:0000169", MassUnit::Ppm),
        ] {
            assert_eq!(Tolerance::new(1.0, unit).unwrap().unit(), expected, "{unit}");
        }
        for unit in ["", "mDa", "percent", "UO:0000000"] {
            let error = Tolerance::new(1.0, unit).unwrap_err();
            assert!(matches!(error.get_kind(), MzError::InvalidArgument), "{unit}");
        }
    }

    #[test]
    fn invalid_values() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let error = Tolerance::new(value, "ppm").unwrap_err();
            assert!(matches!(error.get_kind(), MzError::InvalidArgument), "{value}");
        }
    }

    #[test]
    fn parse() {
        assert_eq!("10 ppm".parse::<Tolerance>().unwrap(), Tolerance::new_ppm(10.0).unwrap());
        assert_eq!("0.5Da".parse::<Tolerance>().unwrap(), Tolerance::new_dalton(0.5).unwrap());
        assert_eq!(
            " 20 UO:0000169 ".parse::<Tolerance>().unwrap(),
            Tolerance::new_ppm(20.0).unwrap()
        );
        assert!("ppm".parse::<Tolerance>().is_err());
        assert!("-5 ppm".parse::<Tolerance>().is_err());
        assert!("5 parsecs".parse::<Tolerance>().is_err());
        let tolerance = Tolerance::new_ppm(10.0).unwrap();
        assert_eq!(tolerance.to_string().parse::<Tolerance>().unwrap(), tolerance);
    }

    #[test]
    fn serde() {
        let tolerance = Tolerance::new_ppm(20.0).unwrap();
        let json = serde_json::to_string(&tolerance).unwrap();
        assert_eq!(json, r#"{"value":20.0,"unit":"Ppm"}"#);
        assert_eq!(serde_json::from_str::<Tolerance>(&json).unwrap(), tolerance);
        assert!(serde_json::from_str::<Tolerance>(r#"{"value":-1.0,"unit":"Dalton"}"#).is_err());
    }
}
