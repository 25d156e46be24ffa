use context_error::BoxedError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    chemistry::{MassMode, PROTON, charge_to_neutral_mass, mass_to_charge},
    error::MzError,
    fragment::{ActivationMethod, IonFamily, Terminus},
    helper_functions::invalid_argument,
    sequence::{HasSequence, Peptide},
};

/// A ladder of theoretical ions of one family, ordered the way they are generated: N-terminal
/// families by ascending index, C-terminal families by descending index.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FragmentIonSeries {
    family: IonFamily,
    charge: isize,
    ions: IndexMap<usize, f64>,
}

impl FragmentIonSeries {
    /// The ion family
    pub const fn family(&self) -> IonFamily {
        self.family
    }

    /// The charge, all ladders are generated singly protonated
    pub const fn charge(&self) -> isize {
        self.charge
    }

    /// The m/z of the ion with the given index (the number of residues it contains)
    pub fn get(&self, index: usize) -> Option<f64> {
        self.ions.get(&index).copied()
    }

    /// The first generated ion
    pub fn first(&self) -> Option<(usize, f64)> {
        self.ions.first().map(|(i, m)| (*i, *m))
    }

    /// All ions as `(index, m/z)`, in generation order
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.ions.iter().map(|(i, m)| (*i, *m))
    }

    /// All m/z values, in generation order
    pub fn masses(&self) -> Vec<f64> {
        self.ions.values().copied().collect()
    }

    /// The number of ions
    pub fn len(&self) -> usize {
        self.ions.len()
    }

    /// Check if there are no ions
    pub fn is_empty(&self) -> bool {
        self.ions.is_empty()
    }

    /// The same ladder at a different charge, each ion carrying `charge` protons.
    /// # Errors
    /// If the charge is zero.
    pub fn charged(&self, charge: isize) -> Result<Self, BoxedError<'static, MzError>> {
        let ions = self
            .ions
            .iter()
            .map(|(index, mz)| {
                let neutral = charge_to_neutral_mass(*mz, self.charge)?;
                Ok((*index, mass_to_charge(neutral, charge)?))
            })
            .collect::<Result<_, BoxedError<'static, MzError>>>()?;
        Ok(Self {
            family: self.family,
            charge,
            ions,
        })
    }
}

/// Generates the theoretical fragment ions of a single peptide. Ladders are recalculated on every call.
///
/// ```rust
/// # use mzdigest::{fragment::*, sequence::*};
/// let peptide = Peptide::new("PEPTIDE").unwrap();
/// let fragmenter = Fragmenter::new(&peptide).unwrap();
/// let b = fragmenter.ions(IonFamily::B);
/// assert!((b.get(1).unwrap() - 98.060_04).abs() < 1e-4);
/// let y = fragmenter.ions(IonFamily::Y);
/// assert_eq!(y.first().unwrap().0, 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fragmenter<'a> {
    peptide: &'a Peptide,
}

impl<'a> Fragmenter<'a> {
    /// Set up fragmentation for the given peptide.
    /// # Errors
    /// If the peptide has no residues.
    pub fn new(peptide: &'a Peptide) -> Result<Self, BoxedError<'static, MzError>> {
        if peptide.is_empty() {
            return Err(invalid_argument(
                "Empty peptide",
                "A peptide without any residues cannot be fragmented".to_string(),
            ));
        }
        Ok(Self { peptide })
    }

    /// The peptide
    pub const fn peptide(&self) -> &'a Peptide {
        self.peptide
    }

    /// The singly protonated ions of the given family, one for every prefix or suffix length
    /// `1..=L`. Residue masses include the modifications placed on them.
    pub fn ions(&self, family: IonFamily) -> FragmentIonSeries {
        let masses = self.peptide.residue_masses(MassMode::Monoisotopic);
        let offset = PROTON + family.additive();
        let ions = match family.terminus() {
            Terminus::NTerminal => masses
                .iter()
                .scan(0.0, |sum, mass| {
                    *sum += mass;
                    Some(*sum)
                })
                .enumerate()
                .map(|(i, sum)| (i + 1, sum + offset))
                .collect::<IndexMap<_, _>>(),
            Terminus::CTerminal => {
                let mut suffixes = masses
                    .iter()
                    .rev()
                    .scan(0.0, |sum, mass| {
                        *sum += mass;
                        Some(*sum)
                    })
                    .enumerate()
                    .map(|(i, sum)| (i + 1, sum + offset))
                    .collect::<Vec<_>>();
                suffixes.reverse();
                suffixes.into_iter().collect()
            }
        };
        log::trace!("Generated {} {family} ions for {}", ions.len(), self.peptide);
        FragmentIonSeries {
            family,
            charge: 1,
            ions,
        }
    }

    /// All ladders formed by the given activation method, in the order of [`ActivationMethod::ion_families`].
    pub fn ions_for_activation(&self, method: ActivationMethod) -> Vec<FragmentIonSeries> {
        method
            .ion_families()
            .iter()
            .map(|family| self.ions(*family))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use context_error::*;

    use super::*;
    use crate::sequence::{AminoAcid, Modification, ModificationType, Position, SequencePosition};

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-4, "{actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn b_ions() {
        let peptide = Peptide::new("PEPTIDE").unwrap();
        let b = Fragmenter::new(&peptide).unwrap().ions(IonFamily::B);
        assert_eq!(b.len(), 7);
        assert_eq!(b.iter().map(|(i, _)| i).collect::<Vec<_>>(), [1, 2, 3, 4, 5, 6, 7]);
        // b1 is often quoted as 98.06009, but P + proton is 98.060040 with the same constants that
        // give y7 = 800.36724 exactly
        assert_close(
            &b.masses()[..6],
            &[98.06004, 227.10263, 324.15539, 425.20307, 538.28713, 653.31408],
        );
    }

    #[test]
    fn y_ions() {
        let peptide = Peptide::new("PEPTIDE").unwrap();
        let y = Fragmenter::new(&peptide).unwrap().ions(IonFamily::Y);
        assert_eq!(y.len(), 7);
        assert_eq!(y.iter().map(|(i, _)| i).collect::<Vec<_>>(), [7, 6, 5, 4, 3, 2, 1]);
        assert_close(
            &y.masses(),
            &[800.36724, 703.31447, 574.27188, 477.21912, 376.17144, 263.08737, 148.06043],
        );
        // The full y ion is the protonated peptide
        assert!((y.get(7).unwrap() - peptide.monoisotopic_mass() - PROTON).abs() < 1e-9);
    }

    #[test]
    fn other_families() {
        let peptide = Peptide::new("PEPTIDE").unwrap();
        let fragmenter = Fragmenter::new(&peptide).unwrap();
        assert!((fragmenter.ions(IonFamily::A).get(1).unwrap() - 70.06513).abs() < 1e-4);
        assert!((fragmenter.ions(IonFamily::C).get(1).unwrap() - 115.08659).abs() < 1e-4);
        assert!((fragmenter.ions(IonFamily::X).get(1).unwrap() - 174.03970).abs() < 1e-4);
        assert!((fragmenter.ions(IonFamily::Z).get(1).unwrap() - 132.04171).abs() < 1e-4);
        for family in IonFamily::ALL {
            assert_eq!(fragmenter.ions(family).len(), 7);
        }
    }

    #[test]
    fn modifications() {
        let oxidation = Modification::residue_rule(
            "Oxidation",
            15.994_915,
            [AminoAcid::Methionine],
            Position::Anywhere,
            ModificationType::Variable,
        );
        let acetyl = Modification::fixed_site("Acetyl", 42.010_565, SequencePosition::NTerm);
        let plain = Peptide::new("PEPMIDE").unwrap();
        let modified = plain.clone().with_modification(oxidation).with_modification(acetyl);
        let plain = Fragmenter::new(&plain).unwrap().ions(IonFamily::B).masses();
        let modified = Fragmenter::new(&modified).unwrap().ions(IonFamily::B).masses();
        let shifts = plain
            .iter()
            .zip(&modified)
            .map(|(p, m)| m - p)
            .collect::<Vec<_>>();
        assert_close(
            &shifts,
            &[42.010_565, 42.010_565, 42.010_565, 58.00548, 58.00548, 58.00548, 58.00548],
        );
    }

    #[test]
    fn charged() {
        let peptide = Peptide::new("PEPTIDE").unwrap();
        let y = Fragmenter::new(&peptide).unwrap().ions(IonFamily::Y);
        let y2 = y.charged(2).unwrap();
        assert_eq!(y2.charge(), 2);
        assert!((y2.get(7).unwrap() - (800.36724 + PROTON) / 2.0).abs() < 1e-4);
        assert_eq!(y2.first().unwrap().0, 7);
        let back = y2.charged(1).unwrap();
        assert_close(&back.masses(), &y.masses());
        assert!(matches!(y.charged(0).unwrap_err().get_kind(), MzError::InvalidArgument));
    }

    #[test]
    fn activation() {
        let peptide = Peptide::new("PEPTIDE").unwrap();
        let fragmenter = Fragmenter::new(&peptide).unwrap();
        let ladders = fragmenter.ions_for_activation(ActivationMethod::EThcD);
        assert_eq!(
            ladders.iter().map(FragmentIonSeries::family).collect::<Vec<_>>(),
            [IonFamily::B, IonFamily::C, IonFamily::Y, IonFamily::Z]
        );
        assert_eq!(ladders[2], fragmenter.ions(IonFamily::Y));
    }

    #[test]
    fn empty() {
        let error = Fragmenter::new(&Peptide::default()).unwrap_err();
        assert!(matches!(error.get_kind(), MzError::InvalidArgument));
    }
}
