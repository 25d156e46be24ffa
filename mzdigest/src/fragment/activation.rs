use std::str::FromStr;

use context_error::BoxedError;
use serde::{Deserialize, Serialize};

use crate::{error::MzError, fragment::IonFamily, helper_functions::invalid_argument};

/// The activation (dissociation) method used to fragment a precursor.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum ActivationMethod {
    /// Collision induced dissociation
    CID,
    /// Higher energy collisional dissociation
    HCD,
    /// Electron transfer dissociation
    ETD,
    /// Electron capture dissociation
    ECD,
    /// Electron transfer dissociation with supplemental higher energy collisional dissociation
    EThcD,
    /// Charge transfer dissociation
    CTD,
    /// Electron detachment dissociation
    EDD,
    /// Negative electron transfer dissociation
    NETD,
}

impl ActivationMethod {
    /// All methods
    pub const ALL: [Self; 8] = [
        Self::CID,
        Self::HCD,
        Self::ETD,
        Self::ECD,
        Self::EThcD,
        Self::CTD,
        Self::EDD,
        Self::NETD,
    ];

    /// The ion families that are formed by this method
    pub const fn ion_families(self) -> &'static [IonFamily] {
        match self {
            Self::CID | Self::HCD => &[IonFamily::B, IonFamily::Y],
            Self::ETD => &[IonFamily::C, IonFamily::Z],
            Self::ECD => &[IonFamily::B, IonFamily::C, IonFamily::Z],
            Self::EThcD => &[IonFamily::B, IonFamily::C, IonFamily::Y, IonFamily::Z],
            Self::CTD | Self::EDD | Self::NETD => &[IonFamily::A, IonFamily::X],
        }
    }
}

/// Get the ion families formed by the activation method with the given name (case insensitive).
/// # Errors
/// If the method is not known.
pub fn select_ion_families(method: &str) -> Result<&'static [IonFamily], BoxedError<'static, MzError>> {
    Ok(method.parse::<ActivationMethod>()?.ion_families())
}

impl FromStr for ActivationMethod {
    type Err = BoxedError<'static, MzError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cid" => Ok(Self::CID),
            "hcd" => Ok(Self::HCD),
            "etd" => Ok(Self::ETD),
            "ecd" => Ok(Self::ECD),
            "ethcd" => Ok(Self::EThcD),
            "ctd" => Ok(Self::CTD),
            "edd" => Ok(Self::EDD),
            "netd" => Ok(Self::NETD),
            _ => Err(invalid_argument(
                "Unknown activation method",
                format!(
                    "The activation method '{s}' is not known, use one of: {}",
                    Self::ALL.map(|m| m.to_string()).join(", ")
                ),
            )),
        }
    }
}

impl std::fmt::Display for ActivationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::CID => "CID",
                Self::HCD => "HCD",
                Self::ETD => "ETD",
                Self::ECD => "ECD",
                Self::EThcD => "EThcD",
                Self::CTD => "CTD",
                Self::EDD => "EDD",
                Self::NETD => "NETD",
            }
        )
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;

    #[test]
    fn families() {
        use IonFamily::{A, B, C, X, Y, Z};
        for (method, families) in [
            ("CID", vec![B, Y]),
            ("hcd", vec![B, Y]),
            ("ETD", vec![C, Z]),
            ("ECD", vec![B, C, Z]),
            ("ethcd", vec![B, C, Y, Z]),
            ("CTD", vec![A, X]),
            ("EDD", vec![A, X]),
            ("NETD", vec![A, X]),
        ] {
            assert_eq!(select_ion_families(method).unwrap().to_vec(), families, "{method}");
        }
    }

    #[test]
    fn names() {
        for method in ActivationMethod::ALL {
            assert_eq!(method.to_string().parse::<ActivationMethod>().unwrap(), method);
        }
        let error = select_ion_families("UVPD").unwrap_err();
        assert!(matches!(error.get_kind(), MzError::InvalidArgument));
    }
}
