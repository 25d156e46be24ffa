use std::collections::{BTreeMap, BTreeSet};

use context_error::BoxedError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{error::MzError, helper_functions::invalid_argument, sequence::AminoAcid};

/// An enzyme defined purely by data: the residues it cuts after, the residues that block such a cut
/// when they directly follow it, and the residues it cuts before.
///
/// A standard set of enzymes can be found in [`EnzymeRegistry::default`].
///
/// ```rust
/// # use mzdigest::sequence::*;
/// // Define a custom enzyme that cuts after Histidine (H) unless followed by Proline (P)
/// let his = Enzyme::c_terminal_of("His-C", [AminoAcid::Histidine])
///     .except_before([AminoAcid::Proline]);
/// let sequence = parse_sequence("AAHFGHPKLM").unwrap();
/// assert_eq!(his.match_locations(&sequence), vec![3]);
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Enzyme {
    /// The name
    pub name: String,
    /// The residues this enzyme cuts on the C terminal side of
    pub cleave_after: BTreeSet<AminoAcid>,
    /// The residues that prevent a cut after a [`Self::cleave_after`] residue if they directly follow it
    pub except_before: BTreeSet<AminoAcid>,
    /// The residues this enzyme cuts on the N terminal side of
    pub cleave_before: BTreeSet<AminoAcid>,
}

impl Enzyme {
    /// Define an enzyme that cuts on the C terminal side of the provided residues.
    pub fn c_terminal_of(name: impl Into<String>, residues: impl IntoIterator<Item = AminoAcid>) -> Self {
        Self {
            name: name.into(),
            cleave_after: residues.into_iter().collect(),
            except_before: BTreeSet::new(),
            cleave_before: BTreeSet::new(),
        }
    }

    /// Define an enzyme that cuts on the N terminal side of the provided residues.
    pub fn n_terminal_of(name: impl Into<String>, residues: impl IntoIterator<Item = AminoAcid>) -> Self {
        Self {
            name: name.into(),
            cleave_after: BTreeSet::new(),
            except_before: BTreeSet::new(),
            cleave_before: residues.into_iter().collect(),
        }
    }

    /// Block cuts after a [`Self::cleave_after`] residue when followed by any of these residues.
    #[must_use]
    pub fn except_before(mut self, residues: impl IntoIterator<Item = AminoAcid>) -> Self {
        self.except_before.extend(residues);
        self
    }

    /// Check if this enzyme cuts between the two given residues.
    pub fn cleaves(&self, current: AminoAcid, next: AminoAcid) -> bool {
        (self.cleave_after.contains(&current) && !self.except_before.contains(&next))
            || self.cleave_before.contains(&next)
    }

    /// All locations in the given sequence where this enzyme cuts, as the index of the first residue after the cut.
    /// Only cut sites inside the sequence are reported, so never 0 or the length of the sequence.
    pub fn match_locations(&self, sequence: &[AminoAcid]) -> Vec<usize> {
        sequence
            .iter()
            .tuple_windows()
            .enumerate()
            .filter(|(_, (current, next))| self.cleaves(**current, **next))
            .map(|(index, _)| index + 1)
            .collect_vec()
    }

    /// All cut indices including the implicit cuts at 0 and the length of the sequence, strictly ascending.
    pub fn cut_indices(&self, sequence: &[AminoAcid]) -> Vec<usize> {
        let mut cuts = Vec::with_capacity(sequence.len() / 8 + 2);
        cuts.push(0);
        cuts.extend(self.match_locations(sequence));
        if !sequence.is_empty() {
            cuts.push(sequence.len());
        }
        cuts
    }
}

impl std::fmt::Display for Enzyme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A registry of enzymes, looked up by name (case insensitive). Owned and passed around by the
/// caller, [`Self::default`] contains a set of well known and widely used enzymes.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EnzymeRegistry {
    enzymes: BTreeMap<String, Enzyme>,
}

impl EnzymeRegistry {
    /// A registry without any enzymes
    pub const fn empty() -> Self {
        Self {
            enzymes: BTreeMap::new(),
        }
    }

    /// Add an enzyme, returns the enzyme previously registered under the same name if any.
    pub fn register(&mut self, enzyme: Enzyme) -> Option<Enzyme> {
        log::trace!("Registering enzyme '{}'", enzyme.name);
        self.enzymes.insert(enzyme.name.to_ascii_lowercase(), enzyme)
    }

    /// Get an enzyme by name, names are matched in a case insensitive manner.
    /// # Errors
    /// If no enzyme with this name is registered.
    pub fn get(&self, name: &str) -> Result<&Enzyme, BoxedError<'static, MzError>> {
        self.enzymes
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| {
                invalid_argument(
                    "Unknown enzyme",
                    format!(
                        "The enzyme '{name}' is not registered, the known enzymes are: {}",
                        self.names().join(", ")
                    ),
                )
            })
    }

    /// The names of all registered enzymes
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.enzymes.values().map(|e| e.name.as_str())
    }

    /// The number of registered enzymes
    pub fn len(&self) -> usize {
        self.enzymes.len()
    }

    /// Check if there are no registered enzymes
    pub fn is_empty(&self) -> bool {
        self.enzymes.is_empty()
    }
}

impl Default for EnzymeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for enzyme in known_enzymes() {
            registry.register(enzyme);
        }
        registry
    }
}

/// Some well known and widely used enzymes
fn known_enzymes() -> Vec<Enzyme> {
    use AminoAcid::*;
    vec![
        // Cuts after Lysine (K) or Arginine (R), unless followed by Proline (P)
        Enzyme::c_terminal_of("Trypsin", [Lysine, Arginine]).except_before([Proline]),
        Enzyme::c_terminal_of("Trypsin/P", [Lysine, Arginine]),
        Enzyme::c_terminal_of("Lys-C", [Lysine]),
        Enzyme::n_terminal_of("Lys-N", [Lysine]),
        Enzyme::c_terminal_of("Arg-C", [Arginine]),
        Enzyme::n_terminal_of("Asp-N", [AsparticAcid]),
        Enzyme::c_terminal_of("Glu-C", [GlutamicAcid]),
        // Cuts after Phenylalanine (F), Tryptophan (W), Tyrosine (Y), unless followed by Proline (P)
        Enzyme::c_terminal_of("Chymotrypsin", [Phenylalanine, Tryptophan, Tyrosine])
            .except_before([Proline]),
        // pH > 2
        Enzyme::c_terminal_of("Pepsin", [Phenylalanine, Tryptophan, Tyrosine, Leucine]),
        Enzyme::c_terminal_of("CNBr", [Methionine]),
    ]
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;
    use crate::sequence::parse_sequence;

    struct CutSiteTestCase {
        sequence: &'static str,
        expected_cut_sites: Vec<usize>,
    }

    fn test_enzyme(name: &str, test_cases: &[CutSiteTestCase]) {
        let registry = EnzymeRegistry::default();
        let enzyme = registry.get(name).unwrap();
        for test_case in test_cases {
            let cut_sites = enzyme.match_locations(&parse_sequence(test_case.sequence).unwrap());
            assert_eq!(
                cut_sites, test_case.expected_cut_sites,
                "Incorrect cut sites for {name} on {}: found '{cut_sites:?}' expected '{:?}'",
                test_case.sequence, test_case.expected_cut_sites
            );
        }
    }

    #[test]
    fn trypsin() {
        test_enzyme(
            "Trypsin",
            &[
                CutSiteTestCase {
                    sequence: "AKRPGKR",
                    expected_cut_sites: vec![2, 6],
                },
                CutSiteTestCase {
                    sequence: "ARAKGCVLRPKDGR",
                    expected_cut_sites: vec![2, 4, 11],
                },
                CutSiteTestCase {
                    sequence: "EPTIDEKPEPTIDE",
                    expected_cut_sites: vec![],
                },
            ],
        );
    }

    #[test]
    fn chymotrypsin() {
        test_enzyme(
            "chymotrypsin",
            &[
                CutSiteTestCase {
                    sequence: "AFWYPLGF",
                    expected_cut_sites: vec![2, 3],
                },
                CutSiteTestCase {
                    sequence: "AVFUDGWTYPMSR",
                    expected_cut_sites: vec![3, 7],
                },
            ],
        );
    }

    #[test]
    fn pepsin() {
        test_enzyme(
            "PEPSIN",
            &[
                CutSiteTestCase {
                    sequence: "AACVFLPAKLURF",
                    expected_cut_sites: vec![5, 6, 10],
                },
                CutSiteTestCase {
                    sequence: "GFLPKDLVMSRG",
                    expected_cut_sites: vec![2, 3, 7],
                },
            ],
        );
    }

    #[test]
    fn n_terminal_cutters() {
        test_enzyme(
            "Asp-N",
            &[
                CutSiteTestCase {
                    sequence: "FARDKPGLFD",
                    expected_cut_sites: vec![3, 9],
                },
                CutSiteTestCase {
                    sequence: "DPFKDLTMSR",
                    expected_cut_sites: vec![4],
                },
            ],
        );
        test_enzyme(
            "Lys-N",
            &[CutSiteTestCase {
                sequence: "PFKDLTKMSK",
                expected_cut_sites: vec![2, 6, 9],
            }],
        );
    }

    #[test]
    fn c_terminal_cutters() {
        test_enzyme(
            "Glu-C",
            &[CutSiteTestCase {
                sequence: "FAREDKPGLF",
                expected_cut_sites: vec![4],
            }],
        );
        test_enzyme(
            "Lys-C",
            &[CutSiteTestCase {
                sequence: "PFKDLTKMSR",
                expected_cut_sites: vec![3, 7],
            }],
        );
        test_enzyme(
            "Arg-C",
            &[CutSiteTestCase {
                sequence: "PFKDLRTMSR",
                expected_cut_sites: vec![6],
            }],
        );
        test_enzyme(
            "Trypsin/P",
            &[CutSiteTestCase {
                sequence: "EPTIDEKPEPTIDE",
                expected_cut_sites: vec![7],
            }],
        );
    }

    #[test]
    fn cut_indices() {
        let registry = EnzymeRegistry::default();
        let trypsin = registry.get("Trypsin").unwrap();
        assert_eq!(
            trypsin.cut_indices(&parse_sequence("EPTIDEKEPTIDE").unwrap()),
            vec![0, 7, 13]
        );
        // A cut after the last residue coincides with the implicit end
        assert_eq!(
            trypsin.cut_indices(&parse_sequence("PEPTIDEK").unwrap()),
            vec![0, 8]
        );
    }

    #[test]
    fn registry() {
        let mut registry = EnzymeRegistry::default();
        assert_eq!(registry.len(), 10);
        let error = registry.get("Unknownase").unwrap_err();
        assert!(matches!(error.get_kind(), MzError::InvalidArgument));

        let custom = Enzyme::c_terminal_of("His-C", [AminoAcid::Histidine]);
        assert!(registry.register(custom.clone()).is_none());
        assert_eq!(registry.get("his-c").unwrap(), &custom);
        assert!(registry.register(custom).is_some());
        assert_eq!(registry.len(), 11);

        assert!(EnzymeRegistry::empty().get("Trypsin").is_err());
    }
}
