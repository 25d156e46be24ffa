use context_error::BoxedError;

use crate::{
    chemistry::PROTON,
    error::MzError,
    helper_functions::{invalid_argument, require_finite},
};

fn require_charge(charge: isize) -> Result<f64, BoxedError<'static, MzError>> {
    if charge == 0 {
        Err(invalid_argument(
            "Invalid charge",
            "A charge of zero cannot be used to convert between mass and m/z".to_string(),
        ))
    } else {
        Ok(charge as f64)
    }
}

/// Convert a neutral mass into the m/z of the ion carrying `charge` protons.
/// `(M + z * proton) / z`
/// # Errors
/// If the charge is zero or the mass is not a finite number.
pub fn mass_to_charge(neutral_mass: f64, charge: isize) -> Result<f64, BoxedError<'static, MzError>> {
    let neutral_mass = require_finite(neutral_mass, "neutral mass")?;
    let z = require_charge(charge)?;
    Ok(z.mul_add(PROTON, neutral_mass) / z)
}

/// Convert an m/z at the given charge back into the neutral mass, the exact inverse of [`mass_to_charge`].
/// `mz * z - proton * z`
/// # Errors
/// If the charge is zero or the m/z is not a finite number.
pub fn charge_to_neutral_mass(mz: f64, charge: isize) -> Result<f64, BoxedError<'static, MzError>> {
    let mz = require_finite(mz, "m/z")?;
    let z = require_charge(charge)?;
    Ok(mz.mul_add(z, -PROTON * z))
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;

    #[test]
    fn singly_charged() {
        let mz = mass_to_charge(799.359_964, 1).unwrap();
        assert!((mz - 800.367_241).abs() < 1e-5, "{mz}");
    }

    #[test]
    fn doubly_charged() {
        let mz = mass_to_charge(1000.0, 2).unwrap();
        assert!((mz - (500.0 + PROTON)).abs() < 1e-9);
    }

    #[test]
    fn inverse() {
        for mass in [0.5, 57.021_464, 799.359_964, 2_345.678, 10_000.0] {
            for charge in 1..=6 {
                let mz = mass_to_charge(mass, charge).unwrap();
                let back = charge_to_neutral_mass(mz, charge).unwrap();
                assert!(
                    (back - mass).abs() < 1e-9,
                    "mass {mass} charge {charge} came back as {back}"
                );
            }
        }
    }

    #[test]
    fn invalid() {
        let error = mass_to_charge(100.0, 0).unwrap_err();
        assert!(matches!(error.get_kind(), MzError::InvalidArgument));
        assert!(charge_to_neutral_mass(100.0, 0).is_err());
        assert!(mass_to_charge(f64::NAN, 1).is_err());
        assert!(charge_to_neutral_mass(f64::INFINITY, 2).is_err());
    }
}
