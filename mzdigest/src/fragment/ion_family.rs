use serde::{Deserialize, Serialize};

use crate::chemistry::{AMINO, AMMONIA, CARBON_DIOXIDE, CARBON_MONOXIDE, WATER};

/// The terminus a fragment ion family retains.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Terminus {
    /// N-terminal fragments (a, b, c), built from the prefix of the peptide
    NTerminal,
    /// C-terminal fragments (x, y, z), built from the suffix of the peptide
    CTerminal,
}

/// A backbone fragment ion family.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum IonFamily {
    /// a: N-terminal, without the carbonyl
    A,
    /// b: N-terminal
    B,
    /// c: N-terminal, with ammonia
    C,
    /// x: C-terminal, with carbon dioxide
    X,
    /// y: C-terminal, with water
    Y,
    /// z•: C-terminal, y without the amino group
    Z,
}

impl IonFamily {
    /// All families in order
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::X, Self::Y, Self::Z];

    /// The terminus this family retains
    pub const fn terminus(self) -> Terminus {
        match self {
            Self::A | Self::B | Self::C => Terminus::NTerminal,
            Self::X | Self::Y | Self::Z => Terminus::CTerminal,
        }
    }

    /// The mass added to the summed residue masses (and one proton) for this family
    pub const fn additive(self) -> f64 {
        match self {
            Self::A => -CARBON_MONOXIDE,
            Self::B => 0.0,
            Self::C => AMMONIA,
            Self::X => CARBON_DIOXIDE,
            Self::Y => WATER,
            Self::Z => WATER - AMINO,
        }
    }
}

impl std::fmt::Display for IonFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::A => "a",
                Self::B => "b",
                Self::C => "c",
                Self::X => "x",
                Self::Y => "y",
                Self::Z => "z",
            }
        )
    }
}
