use std::{collections::BTreeSet, fmt::Display};

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::MassMode,
    sequence::{AminoAcid, SequencePosition},
};

/// Where on a sequence a residue rule is allowed to apply.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum Position {
    /// At any location, once for every matching residue
    #[default]
    Anywhere,
    /// At the N terminal residue of any peptide
    AnyNTerm,
    /// At the C terminal residue of any peptide
    AnyCTerm,
    /// At the N terminal residue of the protein
    ProteinNTerm,
    /// At the C terminal residue of the protein
    ProteinCTerm,
}

impl Position {
    /// Check if this is an N terminal position (peptide or protein).
    pub const fn is_n_terminal(self) -> bool {
        matches!(self, Self::AnyNTerm | Self::ProteinNTerm)
    }

    /// Check if this is a C terminal position (peptide or protein).
    pub const fn is_c_terminal(self) -> bool {
        matches!(self, Self::AnyCTerm | Self::ProteinCTerm)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Anywhere => "anywhere",
                Self::AnyNTerm => "N-term",
                Self::AnyCTerm => "C-term",
                Self::ProteinNTerm => "protein N-term",
                Self::ProteinCTerm => "protein C-term",
            }
        )
    }
}

/// If a modification is always present (fixed) or only potentially present (variable).
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum ModificationType {
    /// Always present
    #[default]
    Fixed,
    /// Potentially present
    Variable,
}

/// The rule that decides where a modification applies.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Applicability {
    /// Explicitly placed at a single site, this always applies exactly once.
    FixedSite(SequencePosition),
    /// Applies on every residue from the set (an empty set matches any residue) at the given position.
    ResidueRule {
        /// The residues this modification can be placed on, empty is a wildcard
        residues: BTreeSet<AminoAcid>,
        /// The position restriction
        position: Position,
    },
}

impl Applicability {
    /// Check if the given residue is allowed by this rule, a fixed site allows any residue.
    pub fn allows(&self, residue: AminoAcid) -> bool {
        match self {
            Self::FixedSite(_) => true,
            Self::ResidueRule { residues, .. } => residues.is_empty() || residues.contains(&residue),
        }
    }

    /// Get all places where this rule applies on the given sequence, once for every time the delta
    /// should be counted. A `Some` is the 0 based residue the delta is attributed to, a `None` is a
    /// fixed site that does not fall on any residue of this sequence but still counts once.
    pub fn occurrences(&self, sequence: &[AminoAcid]) -> Vec<Option<usize>> {
        match self {
            Self::FixedSite(site) => vec![site.residue_index(sequence.len())],
            Self::ResidueRule { position, .. } if position.is_n_terminal() => sequence
                .first()
                .filter(|aa| self.allows(**aa))
                .map(|_| vec![Some(0)])
                .unwrap_or_default(),
            Self::ResidueRule { position, .. } if position.is_c_terminal() => sequence
                .last()
                .filter(|aa| self.allows(**aa))
                .map(|_| vec![Some(sequence.len() - 1)])
                .unwrap_or_default(),
            Self::ResidueRule { .. } => sequence
                .iter()
                .enumerate()
                .filter(|(_, aa)| self.allows(**aa))
                .map(|(index, _)| Some(index))
                .collect(),
        }
    }
}

impl Display for Applicability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedSite(site) => write!(f, "@{site}"),
            Self::ResidueRule { residues, position } => {
                if residues.is_empty() {
                    write!(f, "*@{position}")
                } else {
                    write!(f, "{}@{position}", residues.iter().join(""))
                }
            }
        }
    }
}

/// A modification, a mass delta with the rule of where it applies.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Modification {
    /// The name
    pub name: String,
    /// The accession in an ontology (eg `UNIMOD:35`), if known
    pub accession: Option<String>,
    /// The monoisotopic mass delta
    pub monoisotopic_mass: OrderedFloat<f64>,
    /// The average mass delta
    pub average_mass: OrderedFloat<f64>,
    /// Fixed or variable
    pub kind: ModificationType,
    /// Where this modification applies
    pub applicability: Applicability,
}

impl Modification {
    /// Create a modification explicitly placed at the given site. The average mass is set to the monoisotopic mass, see [`Self::with_average_mass`].
    pub fn fixed_site(name: impl Into<String>, monoisotopic_mass: f64, site: SequencePosition) -> Self {
        Self {
            name: name.into(),
            accession: None,
            monoisotopic_mass: OrderedFloat(monoisotopic_mass),
            average_mass: OrderedFloat(monoisotopic_mass),
            kind: ModificationType::Fixed,
            applicability: Applicability::FixedSite(site),
        }
    }

    /// Create a modification that applies to the given residues at the given position. The average mass is set to the monoisotopic mass, see [`Self::with_average_mass`].
    pub fn residue_rule(
        name: impl Into<String>,
        monoisotopic_mass: f64,
        residues: impl IntoIterator<Item = AminoAcid>,
        position: Position,
        kind: ModificationType,
    ) -> Self {
        Self {
            name: name.into(),
            accession: None,
            monoisotopic_mass: OrderedFloat(monoisotopic_mass),
            average_mass: OrderedFloat(monoisotopic_mass),
            kind,
            applicability: Applicability::ResidueRule {
                residues: residues.into_iter().collect(),
                position,
            },
        }
    }

    /// Set the accession
    #[must_use]
    pub fn with_accession(self, accession: impl Into<String>) -> Self {
        Self {
            accession: Some(accession.into()),
            ..self
        }
    }

    /// Set the average mass delta
    #[must_use]
    pub fn with_average_mass(self, average_mass: f64) -> Self {
        Self {
            average_mass: OrderedFloat(average_mass),
            ..self
        }
    }

    /// Get the mass delta in the given mode
    pub fn mass(&self, mode: MassMode) -> f64 {
        match mode {
            MassMode::Monoisotopic => self.monoisotopic_mass.0,
            MassMode::Average => self.average_mass.0,
        }
    }

    /// Check if this modification is explicitly placed
    pub const fn is_fixed_site(&self) -> bool {
        matches!(self.applicability, Applicability::FixedSite(_))
    }

    /// Get all places where this modification applies on the given sequence, see [`Applicability::occurrences`].
    pub fn occurrences(&self, sequence: &[AminoAcid]) -> Vec<Option<usize>> {
        self.applicability.occurrences(sequence)
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:+}) {}",
            self.name, self.monoisotopic_mass.0, self.applicability
        )
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    fn sequence(text: &str) -> Vec<AminoAcid> {
        text.chars().map(|c| AminoAcid::try_from(c).unwrap()).collect()
    }

    #[test]
    fn anywhere_counts_every_residue() {
        let oxidation = Modification::residue_rule(
            "Oxidation",
            15.994_915,
            [AminoAcid::Methionine],
            Position::Anywhere,
            ModificationType::Variable,
        );
        assert_eq!(
            oxidation.occurrences(&sequence("MAMKM")),
            vec![Some(0), Some(2), Some(4)]
        );
        assert!(oxidation.occurrences(&sequence("PEPTIDE")).is_empty());
    }

    #[test]
    fn terminal_rules() {
        let acetyl = Modification::residue_rule(
            "Acetyl",
            42.010_565,
            std::iter::empty::<AminoAcid>(),
            Position::ProteinNTerm,
            ModificationType::Fixed,
        );
        assert_eq!(acetyl.occurrences(&sequence("PEPTIDE")), vec![Some(0)]);
        let amidated = Modification::residue_rule(
            "Amidated",
            -0.984_016,
            [AminoAcid::GlutamicAcid],
            Position::AnyCTerm,
            ModificationType::Fixed,
        );
        assert_eq!(amidated.occurrences(&sequence("PEPTIDE")), vec![Some(6)]);
        assert!(amidated.occurrences(&sequence("PEPTIDEK")).is_empty());
        let pyro = Modification::residue_rule(
            "Gln->pyro-Glu",
            -17.026_549,
            [AminoAcid::Glutamine],
            Position::AnyNTerm,
            ModificationType::Variable,
        );
        // Only once even if more residues match
        assert_eq!(pyro.occurrences(&sequence("QQQ")), vec![Some(0)]);
    }

    #[test]
    fn fixed_site_wins() {
        let phospho = Modification::fixed_site("Phospho", 79.966_331, SequencePosition::Index(2));
        // The residue at the site does not matter
        assert_eq!(phospho.occurrences(&sequence("PEPTIDE")), vec![Some(1)]);
        let outside = Modification::fixed_site("Phospho", 79.966_331, SequencePosition::Index(20));
        assert_eq!(outside.occurrences(&sequence("PEPTIDE")), vec![None]);
    }

    #[test]
    fn ambiguous_residues_match() {
        let deamidation = Modification::residue_rule(
            "Deamidation",
            0.984_016,
            [AminoAcid::AmbiguousAsparagine],
            Position::Anywhere,
            ModificationType::Variable,
        );
        assert_eq!(deamidation.occurrences(&sequence("BXB")), vec![Some(0), Some(2)]);
    }

    #[test]
    fn masses() {
        let modification = Modification::fixed_site("Custom", 10.0, SequencePosition::NTerm)
            .with_average_mass(10.5)
            .with_accession("UNIMOD:0");
        assert!((modification.mass(MassMode::Monoisotopic) - 10.0).abs() < f64::EPSILON);
        assert!((modification.mass(MassMode::Average) - 10.5).abs() < f64::EPSILON);
        assert_eq!(modification.accession.as_deref(), Some("UNIMOD:0"));
        assert!(modification.is_fixed_site());
    }
}
