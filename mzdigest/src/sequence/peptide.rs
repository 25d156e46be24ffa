use std::sync::LazyLock;

use context_error::BoxedError;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::MassMode,
    error::MzError,
    helper_functions::invalid_argument,
    sequence::{AminoAcid, Modification, residue_masses, sequence_mass},
};

static SEQUENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]+$").unwrap());

/// Parse a sequence of uppercase one letter codes.
/// # Errors
/// If the text is empty or contains anything other than the letters `A` to `Z`.
pub fn parse_sequence(text: &str) -> Result<Vec<AminoAcid>, BoxedError<'static, MzError>> {
    if !SEQUENCE_REGEX.is_match(text) {
        return Err(invalid_argument(
            "Invalid sequence",
            format!("A sequence can only contain uppercase letters (A-Z), but '{text}' was given"),
        ));
    }
    text.bytes()
        .map(|b| {
            AminoAcid::try_from(b).map_err(|()| {
                invalid_argument(
                    "Invalid sequence",
                    format!("'{}' is not an amino acid", b as char),
                )
            })
        })
        .collect()
}

/// Shared behaviour of all modified sequences (peptides and proteins).
pub trait HasSequence {
    /// The residues
    fn sequence(&self) -> &[AminoAcid];

    /// All attached modifications, the order is immaterial for all mass calculations
    fn modifications(&self) -> &[Modification];

    /// The number of residues
    fn len(&self) -> usize {
        self.sequence().len()
    }

    /// Check if there are no residues
    fn is_empty(&self) -> bool {
        self.sequence().is_empty()
    }

    /// The neutral mass in the given mode including all modifications
    fn mass(&self, mode: MassMode) -> f64 {
        sequence_mass(self.sequence(), self.modifications(), mode)
    }

    /// The monoisotopic neutral mass including all modifications
    fn monoisotopic_mass(&self) -> f64 {
        self.mass(MassMode::Monoisotopic)
    }

    /// The mass of every residue including the modifications attributed to it.
    fn residue_masses(&self, mode: MassMode) -> Vec<f64> {
        residue_masses(self.sequence(), self.modifications(), mode).0
    }

    /// The sequence as one letter codes
    fn sequence_string(&self) -> String {
        self.sequence().iter().map(|aa| aa.one_letter_code()).collect()
    }
}

/// The place a peptide was found on its parent protein.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ProteinEntry {
    /// The identifier of the protein
    pub protein: String,
    /// 0 based index of the first residue
    pub start: usize,
    /// 0 based exclusive end
    pub end: usize,
}

/// A peptide, a (modified) sequence that is the result of a digestion or that is used for fragmentation.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Peptide {
    sequence: Vec<AminoAcid>,
    modifications: Vec<Modification>,
    is_decoy: bool,
    missed_cleavages: usize,
    protein: Option<ProteinEntry>,
}

impl Peptide {
    /// Create a new peptide from its sequence.
    /// # Errors
    /// If the sequence is not valid, see [`parse_sequence`].
    pub fn new(sequence: &str) -> Result<Self, BoxedError<'static, MzError>> {
        Ok(Self {
            sequence: parse_sequence(sequence)?,
            ..Self::default()
        })
    }

    /// Create a peptide from already checked parts.
    pub(crate) fn from_parts(
        sequence: Vec<AminoAcid>,
        modifications: Vec<Modification>,
        is_decoy: bool,
        missed_cleavages: usize,
        protein: Option<ProteinEntry>,
    ) -> Self {
        Self {
            sequence,
            modifications,
            is_decoy,
            missed_cleavages,
            protein,
        }
    }

    /// Replace the sequence.
    /// # Errors
    /// If the sequence is not valid, see [`parse_sequence`], the peptide is left untouched.
    pub fn set_sequence(&mut self, sequence: &str) -> Result<(), BoxedError<'static, MzError>> {
        self.sequence = parse_sequence(sequence)?;
        Ok(())
    }

    /// Add a modification
    pub fn add_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Add a modification
    #[must_use]
    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modifications.push(modification);
        self
    }

    /// Check if this is a decoy peptide
    pub const fn is_decoy(&self) -> bool {
        self.is_decoy
    }

    /// Set the decoy status
    #[must_use]
    pub fn with_decoy(mut self, is_decoy: bool) -> Self {
        self.is_decoy = is_decoy;
        self
    }

    /// The number of missed cleavages, as set by the digestion
    pub const fn missed_cleavages(&self) -> usize {
        self.missed_cleavages
    }

    /// The protein this peptide was digested from, if known
    pub const fn protein(&self) -> Option<&ProteinEntry> {
        self.protein.as_ref()
    }
}

impl HasSequence for Peptide {
    fn sequence(&self) -> &[AminoAcid] {
        &self.sequence
    }

    fn modifications(&self) -> &[Modification] {
        &self.modifications
    }
}

impl std::fmt::Display for Peptide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for aa in &self.sequence {
            write!(f, "{aa}")?;
        }
        Ok(())
    }
}

/// A protein, the input for digestion.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Protein {
    identifier: String,
    description: String,
    sequence: Vec<AminoAcid>,
    modifications: Vec<Modification>,
    is_decoy: bool,
}

impl Protein {
    /// Create a new protein from its identifier and sequence.
    /// # Errors
    /// If the sequence is not valid, see [`parse_sequence`].
    pub fn new(
        identifier: impl Into<String>,
        sequence: &str,
    ) -> Result<Self, BoxedError<'static, MzError>> {
        Ok(Self {
            identifier: identifier.into(),
            sequence: parse_sequence(sequence)?,
            ..Self::default()
        })
    }

    /// Replace the sequence.
    /// # Errors
    /// If the sequence is not valid, see [`parse_sequence`], the protein is left untouched.
    pub fn set_sequence(&mut self, sequence: &str) -> Result<(), BoxedError<'static, MzError>> {
        self.sequence = parse_sequence(sequence)?;
        Ok(())
    }

    /// The identifier (accession)
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The free text description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    /// Add a modification
    pub fn add_modification(&mut self, modification: Modification) {
        self.modifications.push(modification);
    }

    /// Add a modification
    #[must_use]
    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modifications.push(modification);
        self
    }

    /// Check if this is a decoy protein
    pub const fn is_decoy(&self) -> bool {
        self.is_decoy
    }

    /// Set the decoy status
    #[must_use]
    pub fn with_decoy(mut self, is_decoy: bool) -> Self {
        self.is_decoy = is_decoy;
        self
    }
}

impl HasSequence for Protein {
    fn sequence(&self) -> &[AminoAcid] {
        &self.sequence
    }

    fn modifications(&self) -> &[Modification] {
        &self.modifications
    }
}

impl std::fmt::Display for Protein {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.identifier)?;
        for aa in &self.sequence {
            write!(f, "{aa}")?;
        }
        Ok(())
    }
}
