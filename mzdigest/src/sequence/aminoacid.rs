//! Residue tables, the per letter masses and elemental formulas.

use context_error::BoxedError;
use serde::{Deserialize, Serialize};

use crate::{chemistry::MassMode, error::MzError, helper_functions::invalid_argument};

/// An amino acid, alongside the standard ones some [ambiguous (B/J/Z/X) and non-standard (U/O)](https://www.insdc.org/submitting-standards/feature-table/#7.4.3) are included.
/// Every uppercase letter maps onto exactly one amino acid, only the 20 standard amino acids and selenocysteine have a defined mass.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum AminoAcid {
    /// Ala, A
    #[default]
    Alanine = 0,
    /// Arg, R
    Arginine,
    /// Asn, N
    Asparagine,
    /// Asp, D
    AsparticAcid,
    /// Cys, C
    Cysteine,
    /// Gln, Q
    Glutamine,
    /// Glu, E
    GlutamicAcid,
    /// Gly, G
    Glycine,
    /// His, H
    Histidine,
    /// Ile, I
    Isoleucine,
    /// Leu, L
    Leucine,
    /// Lys, K
    Lysine,
    /// Met, M
    Methionine,
    /// Phe, F
    Phenylalanine,
    /// Pro, P
    Proline,
    /// Ser, S
    Serine,
    /// Thr, T
    Threonine,
    /// Trp, W
    Tryptophan,
    /// Tyr, Y
    Tyrosine,
    /// Val, V
    Valine,
    /// Asx, B
    AmbiguousAsparagine,
    /// Xle, J
    AmbiguousLeucine,
    /// Glx, Z
    AmbiguousGlutamine,
    /// Sec, U
    Selenocysteine,
    /// Pyl, O
    Pyrrolysine,
    /// Xxx, X
    Unknown,
}

impl AminoAcid {
    /// The total number of amino acids
    pub const TOTAL_NUMBER: usize = Self::Unknown as usize + 1;

    /// All amino acids with a tabulated mass: the 20 standard amino acids and selenocysteine.
    pub const TABULATED: &'static [Self] = &[
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
        Self::Selenocysteine,
    ];

    /// Every amino acid, in the order of the enum.
    pub const ALL_AMINO_ACIDS: &'static [Self] = &[
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
        Self::AmbiguousAsparagine,
        Self::AmbiguousLeucine,
        Self::AmbiguousGlutamine,
        Self::Selenocysteine,
        Self::Pyrrolysine,
        Self::Unknown,
    ];

    /// The one letter code (uppercase)
    pub const fn one_letter_code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::AmbiguousAsparagine => 'B',
            Self::Cysteine => 'C',
            Self::AsparticAcid => 'D',
            Self::GlutamicAcid => 'E',
            Self::Phenylalanine => 'F',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::AmbiguousLeucine => 'J',
            Self::Lysine => 'K',
            Self::Leucine => 'L',
            Self::Methionine => 'M',
            Self::Asparagine => 'N',
            Self::Pyrrolysine => 'O',
            Self::Proline => 'P',
            Self::Glutamine => 'Q',
            Self::Arginine => 'R',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Selenocysteine => 'U',
            Self::Valine => 'V',
            Self::Tryptophan => 'W',
            Self::Unknown => 'X',
            Self::Tyrosine => 'Y',
            Self::AmbiguousGlutamine => 'Z',
        }
    }

    /// The monoisotopic residue mass, `None` for the ambiguous and non tabulated amino acids (B/J/Z/X/O).
    pub const fn monoisotopic_mass(self) -> Option<f64> {
        match self {
            Self::Alanine => Some(71.037_113_785),
            Self::Arginine => Some(156.101_111_024),
            Self::Asparagine => Some(114.042_927_441),
            Self::AsparticAcid => Some(115.026_943_024),
            Self::Cysteine => Some(103.009_184_785),
            Self::Glutamine => Some(128.058_577_505),
            Self::GlutamicAcid => Some(129.042_593_088),
            Self::Glycine => Some(57.021_463_721),
            Self::Histidine => Some(137.058_911_858),
            Self::Isoleucine | Self::Leucine => Some(113.084_063_977),
            Self::Lysine => Some(128.094_963_014),
            Self::Methionine => Some(131.040_484_913),
            Self::Phenylalanine => Some(147.068_413_913),
            Self::Proline => Some(97.052_763_849),
            Self::Serine => Some(87.032_028_404),
            Self::Threonine => Some(101.047_678_468),
            Self::Tryptophan => Some(186.079_312_950),
            Self::Tyrosine => Some(163.063_328_533),
            Self::Valine => Some(99.068_413_913),
            Self::Selenocysteine => Some(150.953_635_085),
            Self::AmbiguousAsparagine
            | Self::AmbiguousLeucine
            | Self::AmbiguousGlutamine
            | Self::Pyrrolysine
            | Self::Unknown => None,
        }
    }

    /// The average residue mass, `None` for the ambiguous and non tabulated amino acids (B/J/Z/X/O).
    pub const fn average_mass(self) -> Option<f64> {
        match self {
            Self::Alanine => Some(71.0779),
            Self::Arginine => Some(156.1857),
            Self::Asparagine => Some(114.1026),
            Self::AsparticAcid => Some(115.0874),
            Self::Cysteine => Some(103.1429),
            Self::Glutamine => Some(128.1292),
            Self::GlutamicAcid => Some(129.1140),
            Self::Glycine => Some(57.0513),
            Self::Histidine => Some(137.1393),
            Self::Isoleucine | Self::Leucine => Some(113.1576),
            Self::Lysine => Some(128.1723),
            Self::Methionine => Some(131.1961),
            Self::Phenylalanine => Some(147.1739),
            Self::Proline => Some(97.1152),
            Self::Serine => Some(87.0773),
            Self::Threonine => Some(101.1039),
            Self::Tryptophan => Some(186.2099),
            Self::Tyrosine => Some(163.1733),
            Self::Valine => Some(99.1311),
            Self::Selenocysteine => Some(150.0379),
            Self::AmbiguousAsparagine
            | Self::AmbiguousLeucine
            | Self::AmbiguousGlutamine
            | Self::Pyrrolysine
            | Self::Unknown => None,
        }
    }

    /// The residue mass in the given mode, `None` for the ambiguous and non tabulated amino acids.
    pub const fn mass(self, mode: MassMode) -> Option<f64> {
        match mode {
            MassMode::Monoisotopic => self.monoisotopic_mass(),
            MassMode::Average => self.average_mass(),
        }
    }

    /// The elemental formula of the residue (the amino acid minus water), `None` for the ambiguous and non tabulated amino acids.
    pub const fn formula(self) -> Option<&'static str> {
        match self {
            Self::Alanine => Some("C3H5NO"),
            Self::Arginine => Some("C6H12N4O"),
            Self::Asparagine => Some("C4H6N2O2"),
            Self::AsparticAcid => Some("C4H5NO3"),
            Self::Cysteine => Some("C3H5NOS"),
            Self::Glutamine => Some("C5H8N2O2"),
            Self::GlutamicAcid => Some("C5H7NO3"),
            Self::Glycine => Some("C2H3NO"),
            Self::Histidine => Some("C6H7N3O"),
            Self::Isoleucine | Self::Leucine => Some("C6H11NO"),
            Self::Lysine => Some("C6H12N2O"),
            Self::Methionine => Some("C5H9NOS"),
            Self::Phenylalanine => Some("C9H9NO"),
            Self::Proline => Some("C5H7NO"),
            Self::Serine => Some("C3H5NO2"),
            Self::Threonine => Some("C4H7NO2"),
            Self::Tryptophan => Some("C11H10N2O"),
            Self::Tyrosine => Some("C9H9NO2"),
            Self::Valine => Some("C5H9NO"),
            Self::Selenocysteine => Some("C3H5NOSe"),
            Self::AmbiguousAsparagine
            | Self::AmbiguousLeucine
            | Self::AmbiguousGlutamine
            | Self::Pyrrolysine
            | Self::Unknown => None,
        }
    }
}

/// Look up the tabulated amino acid for a residue code, only exactly one uppercase letter of the 20 standard amino acids or U is accepted.
fn tabulated(code: &str) -> Result<AminoAcid, BoxedError<'static, MzError>> {
    let mut chars = code.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => AminoAcid::try_from(c)
            .ok()
            .filter(|aa| aa.monoisotopic_mass().is_some())
            .ok_or_else(|| {
                invalid_argument(
                    "Unknown residue",
                    format!("'{code}' is not one of the 20 standard amino acids or selenocysteine"),
                )
            }),
        _ => Err(invalid_argument(
            "Invalid residue code",
            format!("A residue code has to be a single uppercase letter, but '{code}' was given"),
        )),
    }
}

/// Get the monoisotopic residue mass for the given one letter code.
/// # Errors
/// If the code is not exactly one of the 20 standard amino acids or selenocysteine (U) in uppercase.
pub fn residue_mass(code: &str) -> Result<f64, BoxedError<'static, MzError>> {
    tabulated(code).map(|aa| aa.monoisotopic_mass().unwrap_or_default())
}

/// Get the monoisotopic residue mass for the given one letter code, lowercase codes are accepted.
/// # Errors
/// If the code is not exactly one of the 20 standard amino acids or selenocysteine (U).
pub fn residue_mass_case_insensitive(code: &str) -> Result<f64, BoxedError<'static, MzError>> {
    residue_mass(&code.to_ascii_uppercase())
}

/// Get the elemental formula of the residue for the given one letter code.
/// # Errors
/// If the code is not exactly one of the 20 standard amino acids or selenocysteine (U) in uppercase.
pub fn residue_formula(code: &str) -> Result<&'static str, BoxedError<'static, MzError>> {
    tabulated(code).map(|aa| aa.formula().unwrap_or_default())
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter_code())
    }
}

impl std::str::FromStr for AminoAcid {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl TryFrom<&str> for AminoAcid {
    type Error = ();
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch.try_into(),
            _ => Err(()),
        }
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii() {
            let num = value as u8;
            num.try_into()
        } else {
            Err(())
        }
    }
}

impl TryFrom<u8> for AminoAcid {
    type Error = ();
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            b'A' => Ok(Self::Alanine),
            b'B' => Ok(Self::AmbiguousAsparagine),
            b'C' => Ok(Self::Cysteine),
            b'D' => Ok(Self::AsparticAcid),
            b'E' => Ok(Self::GlutamicAcid),
            b'F' => Ok(Self::Phenylalanine),
            b'G' => Ok(Self::Glycine),
            b'H' => Ok(Self::Histidine),
            b'I' => Ok(Self::Isoleucine),
            b'J' => Ok(Self::AmbiguousLeucine),
            b'K' => Ok(Self::Lysine),
            b'L' => Ok(Self::Leucine),
            b'M' => Ok(Self::Methionine),
            b'N' => Ok(Self::Asparagine),
            b'O' => Ok(Self::Pyrrolysine),
            b'P' => Ok(Self::Proline),
            b'Q' => Ok(Self::Glutamine),
            b'R' => Ok(Self::Arginine),
            b'S' => Ok(Self::Serine),
            b'T' => Ok(Self::Threonine),
            b'U' => Ok(Self::Selenocysteine),
            b'V' => Ok(Self::Valine),
            b'W' => Ok(Self::Tryptophan),
            b'X' => Ok(Self::Unknown),
            b'Y' => Ok(Self::Tyrosine),
            b'Z' => Ok(Self::AmbiguousGlutamine),
            _ => Err(()),
        }
    }
}
