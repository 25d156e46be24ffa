//! Peptide identifications and a caller owned collection of proteins.

use std::collections::BTreeMap;

use context_error::BoxedError;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    error::MzError,
    helper_functions::{out_of_bounds, require_finite},
    sequence::{HasSequence, Peptide, Protein},
};

/// A peptide matched to a spectrum, with its rank and any number of named scores.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Identification {
    /// The identified peptide
    pub peptide: Peptide,
    /// The rank of this identification for its spectrum, 1 is the best
    pub rank: usize,
    scores: BTreeMap<String, OrderedFloat<f64>>,
}

impl Identification {
    /// Create a new identification without scores
    pub const fn new(peptide: Peptide, rank: usize) -> Self {
        Self {
            peptide,
            rank,
            scores: BTreeMap::new(),
        }
    }

    /// Set a score, returns the previous value if it was set.
    /// # Errors
    /// If the score is not a finite number.
    pub fn set_score(
        &mut self,
        key: impl Into<String>,
        value: f64,
    ) -> Result<Option<f64>, BoxedError<'static, MzError>> {
        let value = require_finite(value, "score")?;
        Ok(self
            .scores
            .insert(key.into(), OrderedFloat(value))
            .map(|v| v.0))
    }

    /// Get a score.
    /// # Errors
    /// If the score was never set.
    pub fn score(&self, key: &str) -> Result<f64, BoxedError<'static, MzError>> {
        self.scores.get(key).map(|v| v.0).ok_or_else(|| {
            out_of_bounds(
                "Unset score",
                format!("The score '{key}' is not set for {}", self.peptide),
            )
        })
    }

    /// All set scores
    pub fn scores(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), v.0))
    }

    /// Check if the identified peptide is a decoy
    pub const fn is_decoy(&self) -> bool {
        self.peptide.is_decoy()
    }
}

/// Proteins by identifier, to link identifications back to their proteins.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProteinRegistry {
    proteins: BTreeMap<String, Protein>,
}

impl ProteinRegistry {
    /// Add a protein, returns the protein that was stored under the same identifier before (if any)
    pub fn insert(&mut self, protein: Protein) -> Option<Protein> {
        log::trace!("Registered protein '{}'", protein.identifier());
        self.proteins.insert(protein.identifier().to_string(), protein)
    }

    /// Get a protein.
    /// # Errors
    /// If no protein with this identifier is registered.
    pub fn get(&self, identifier: &str) -> Result<&Protein, BoxedError<'static, MzError>> {
        self.proteins.get(identifier).ok_or_else(|| {
            out_of_bounds(
                "Unknown protein",
                format!("The protein '{identifier}' is not registered"),
            )
        })
    }

    /// Get the protein the given peptide was digested from.
    /// # Errors
    /// If the peptide has no protein or that protein is not registered.
    pub fn protein_of(&self, peptide: &Peptide) -> Result<&Protein, BoxedError<'static, MzError>> {
        let entry = peptide.protein().ok_or_else(|| {
            out_of_bounds(
                "Unknown protein",
                format!("The peptide {peptide} was not digested from a protein"),
            )
        })?;
        self.get(&entry.protein)
    }

    /// All proteins ordered by identifier
    pub fn iter(&self) -> impl Iterator<Item = &Protein> {
        self.proteins.values()
    }

    /// The number of proteins
    pub fn len(&self) -> usize {
        self.proteins.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    /// The total number of residues of all proteins
    pub fn residues(&self) -> usize {
        self.proteins.values().map(HasSequence::len).sum()
    }
}

impl FromIterator<Protein> for ProteinRegistry {
    fn from_iter<T: IntoIterator<Item = Protein>>(iter: T) -> Self {
        let mut registry = Self::default();
        for protein in iter {
            registry.insert(protein);
        }
        registry
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;
    use crate::sequence::{Digester, EnzymeRegistry};

    #[test]
    fn scores() {
        let mut identification = Identification::new(Peptide::new("PEPTIDEK").unwrap(), 1);
        assert_eq!(identification.set_score("q-value", 0.01).unwrap(), None);
        assert_eq!(identification.set_score("q-value", 0.02).unwrap(), Some(0.01));
        assert!((identification.score("q-value").unwrap() - 0.02).abs() < f64::EPSILON);
        let error = identification.score("PEP").unwrap_err();
        assert!(matches!(error.get_kind(), MzError::OutOfBounds));
        let error = identification.set_score("PEP", f64::NAN).unwrap_err();
        assert!(matches!(error.get_kind(), MzError::InvalidArgument));
        assert_eq!(identification.scores().count(), 1);
    }

    #[test]
    fn registry() {
        let registry = [
            Protein::new("P1", "AAKBBK").unwrap(),
            Protein::new("P2", "CCKDD").unwrap(),
        ]
        .into_iter()
        .collect::<ProteinRegistry>();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.residues(), 11);
        assert_eq!(registry.get("P2").unwrap().sequence_string(), "CCKDD");
        let error = registry.get("P3").unwrap_err();
        assert!(matches!(error.get_kind(), MzError::OutOfBounds));

        let trypsin = Digester::new(EnzymeRegistry::default().get("trypsin").unwrap().clone());
        let peptides = trypsin.digest(registry.get("P2").unwrap());
        assert_eq!(registry.protein_of(&peptides[1]).unwrap().identifier(), "P2");
        let error = registry.protein_of(&Peptide::new("DD").unwrap()).unwrap_err();
        assert!(matches!(error.get_kind(), MzError::OutOfBounds));
    }
}
