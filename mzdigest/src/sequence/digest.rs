use context_error::BoxedError;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::MzError,
    helper_functions::invalid_argument,
    sequence::{
        AminoAcid, Applicability, Enzyme, EnzymeRegistry, HasSequence, Modification, Peptide,
        Position, Protein, ProteinEntry, SequencePosition,
    },
};

/// All settings for a digestion, can be stored and loaded as JSON.
///
/// ```rust
/// # use mzdigest::sequence::*;
/// let parameters = DigestionParameters::from_json(
///     r#"{"enzyme": "Lys-C", "max_missed_cleavages": 2, "nme": true}"#,
/// )
/// .unwrap();
/// let digester = Digester::from_parameters(&parameters, &EnzymeRegistry::default()).unwrap();
/// assert_eq!(digester.max_missed_cleavages(), 2);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct DigestionParameters {
    /// The name of the enzyme, looked up in an [`EnzymeRegistry`]
    pub enzyme: String,
    /// The maximal number of missed cleavages
    pub max_missed_cleavages: usize,
    /// Generate N-terminal methionine excision variants
    pub nme: bool,
    /// The minimal peptide length (inclusive)
    pub min_length: Option<usize>,
    /// The maximal peptide length (inclusive)
    pub max_length: Option<usize>,
}

impl Default for DigestionParameters {
    fn default() -> Self {
        Self {
            enzyme: "Trypsin".to_string(),
            max_missed_cleavages: 0,
            nme: false,
            min_length: None,
            max_length: None,
        }
    }
}

impl DigestionParameters {
    /// Parse digestion parameters from JSON, missing fields take their default value.
    /// # Errors
    /// If the text is not valid JSON or does not describe digestion parameters.
    pub fn from_json(text: &str) -> Result<Self, BoxedError<'static, MzError>> {
        serde_json::from_str(text).map_err(|err| {
            invalid_argument(
                "Invalid digestion parameters",
                format!("The digestion parameters could not be parsed: {err}"),
            )
        })
    }

    /// Store these parameters as JSON.
    /// # Errors
    /// If the serialisation fails.
    pub fn to_json(&self) -> Result<String, BoxedError<'static, MzError>> {
        serde_json::to_string(self).map_err(|err| {
            invalid_argument(
                "Invalid digestion parameters",
                format!("The digestion parameters could not be stored as JSON: {err}"),
            )
        })
    }

    /// Set the enzyme
    #[must_use]
    pub fn enzyme(self, enzyme: impl Into<String>) -> Self {
        Self {
            enzyme: enzyme.into(),
            ..self
        }
    }

    /// Set the maximal number of missed cleavages
    #[must_use]
    pub fn max_missed_cleavages(self, max_missed_cleavages: usize) -> Self {
        Self {
            max_missed_cleavages,
            ..self
        }
    }

    /// Set N-terminal methionine excision
    #[must_use]
    pub fn nme(self, nme: bool) -> Self {
        Self { nme, ..self }
    }

    /// Set the allowed peptide lengths
    #[must_use]
    pub fn length(self, min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
            ..self
        }
    }
}

/// An in silico digestion of proteins with a single enzyme.
///
/// ```rust
/// # use mzdigest::sequence::*;
/// let registry = EnzymeRegistry::default();
/// let mut trypsin = Digester::new(registry.get("Trypsin").unwrap().clone());
/// trypsin.set_max_missed_cleavages(1).unwrap();
///
/// let protein = Protein::new("P1", "EPTIDEKEPTIDE").unwrap();
/// let peptides = trypsin.digest(&protein);
/// assert_eq!(
///     peptides.iter().map(ToString::to_string).collect::<Vec<_>>(),
///     ["EPTIDEK", "EPTIDE", "EPTIDEKEPTIDE"]
/// );
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Digester {
    enzyme: Enzyme,
    max_missed_cleavages: usize,
    nme: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl Digester {
    /// Create a digester for the given enzyme without missed cleavages and without NME.
    pub const fn new(enzyme: Enzyme) -> Self {
        Self {
            enzyme,
            max_missed_cleavages: 0,
            nme: false,
            min_length: None,
            max_length: None,
        }
    }

    /// Create a digester from the given parameters, looking up the enzyme in the registry.
    /// # Errors
    /// If the enzyme is not registered.
    pub fn from_parameters(
        parameters: &DigestionParameters,
        registry: &EnzymeRegistry,
    ) -> Result<Self, BoxedError<'static, MzError>> {
        Ok(Self {
            enzyme: registry.get(&parameters.enzyme)?.clone(),
            max_missed_cleavages: parameters.max_missed_cleavages,
            nme: parameters.nme,
            min_length: parameters.min_length,
            max_length: parameters.max_length,
        })
    }

    /// The enzyme
    pub const fn enzyme(&self) -> &Enzyme {
        &self.enzyme
    }

    /// The maximal number of missed cleavages
    pub const fn max_missed_cleavages(&self) -> usize {
        self.max_missed_cleavages
    }

    /// Set the maximal number of missed cleavages.
    /// # Errors
    /// If the count is negative, the previous value is kept.
    pub fn set_max_missed_cleavages(&mut self, count: isize) -> Result<(), BoxedError<'static, MzError>> {
        self.max_missed_cleavages = usize::try_from(count).map_err(|_| {
            invalid_argument(
                "Invalid missed cleavages",
                format!("The maximal number of missed cleavages cannot be negative, but {count} was given"),
            )
        })?;
        Ok(())
    }

    /// Check if N-terminal methionine excision is enabled
    pub const fn nme(&self) -> bool {
        self.nme
    }

    /// Enable or disable N-terminal methionine excision
    pub const fn set_nme(&mut self, enabled: bool) {
        self.nme = enabled;
    }

    /// Only keep peptides within the given lengths (both inclusive)
    pub const fn set_length(&mut self, min_length: Option<usize>, max_length: Option<usize>) {
        self.min_length = min_length;
        self.max_length = max_length;
    }

    fn allowed_length(&self, length: usize) -> bool {
        self.min_length.is_none_or(|min| length >= min)
            && self.max_length.is_none_or(|max| length <= max)
    }

    /// Digest a protein. Peptides are ordered by number of missed cleavages first and start
    /// position second, each NME variant follows directly after its unexcised peptide.
    pub fn digest(&self, protein: &Protein) -> Vec<Peptide> {
        let sequence = protein.sequence();
        let cuts = self.enzyme.cut_indices(sequence);
        let segments = cuts.len().saturating_sub(1);
        let mut peptides = Vec::new();

        for missed in 0..=self.max_missed_cleavages.min(segments.saturating_sub(1)) {
            for window in cuts.windows(missed + 2) {
                let (start, end) = (window[0], window[missed + 1]);
                self.push_peptide(&mut peptides, protein, start, end, missed, false);
                if self.nme
                    && start == 0
                    && end - start > 1
                    && sequence[0] == AminoAcid::Methionine
                {
                    self.push_peptide(&mut peptides, protein, start + 1, end, missed, true);
                }
            }
        }

        log::debug!(
            "Digested '{}' ({} residues) with {} into {} peptides",
            protein.identifier(),
            sequence.len(),
            self.enzyme,
            peptides.len()
        );
        peptides
    }

    /// Digest many proteins, the peptides are returned in the order of the proteins.
    #[cfg(feature = "rayon")]
    pub fn digest_all(&self, proteins: &[Protein]) -> Vec<Peptide> {
        proteins
            .par_iter()
            .flat_map_iter(|protein| self.digest(protein))
            .collect()
    }

    /// Digest many proteins, the peptides are returned in the order of the proteins.
    #[cfg(not(feature = "rayon"))]
    pub fn digest_all(&self, proteins: &[Protein]) -> Vec<Peptide> {
        proteins
            .iter()
            .flat_map(|protein| self.digest(protein))
            .collect()
    }

    fn push_peptide(
        &self,
        peptides: &mut Vec<Peptide>,
        protein: &Protein,
        start: usize,
        end: usize,
        missed: usize,
        excised: bool,
    ) {
        if !self.allowed_length(end - start) {
            return;
        }
        let sequence = protein.sequence();
        // The excised methionine leaves the protein N-terminus on the second residue
        let protein_n_term = start == 0 || excised;
        let protein_c_term = end == sequence.len();
        let modifications = protein
            .modifications()
            .iter()
            .filter_map(|m| carry_modification(m, start, end, protein_n_term, protein_c_term))
            .collect();
        peptides.push(Peptide::from_parts(
            sequence[start..end].to_vec(),
            modifications,
            protein.is_decoy(),
            missed,
            Some(ProteinEntry {
                protein: protein.identifier().to_string(),
                start,
                end,
            }),
        ));
    }
}

/// Translate a protein modification to a peptide spanning `start..end` of the protein, if it still applies.
fn carry_modification(
    modification: &Modification,
    start: usize,
    end: usize,
    protein_n_term: bool,
    protein_c_term: bool,
) -> Option<Modification> {
    let applicability = match &modification.applicability {
        Applicability::FixedSite(SequencePosition::NTerm) => {
            protein_n_term.then_some(Applicability::FixedSite(SequencePosition::NTerm))
        }
        Applicability::FixedSite(SequencePosition::CTerm) => {
            protein_c_term.then_some(Applicability::FixedSite(SequencePosition::CTerm))
        }
        Applicability::FixedSite(SequencePosition::Index(index)) => {
            // 1 based on the protein, 0 based window
            (*index > start && *index <= end)
                .then(|| Applicability::FixedSite(SequencePosition::Index(index - start)))
        }
        Applicability::ResidueRule {
            position: Position::ProteinNTerm,
            ..
        } => protein_n_term.then(|| modification.applicability.clone()),
        Applicability::ResidueRule {
            position: Position::ProteinCTerm,
            ..
        } => protein_c_term.then(|| modification.applicability.clone()),
        Applicability::ResidueRule { .. } => Some(modification.applicability.clone()),
    }?;
    Some(Modification {
        applicability,
        ..modification.clone()
    })
}
