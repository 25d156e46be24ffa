use context_error::BoxedError;

use crate::{
    chemistry::{MassMode, WATER, WATER_AVERAGE},
    error::MzError,
    sequence::{AminoAcid, Modification, parse_sequence},
};

/// The mass of every residue in the given mode including all modification deltas attributed to that
/// residue, together with the total delta of fixed sites that do not fall on any residue.
/// Residues without a tabulated mass (B/J/Z/X/O) contribute only their modifications.
pub fn residue_masses(
    sequence: &[AminoAcid],
    modifications: &[Modification],
    mode: MassMode,
) -> (Vec<f64>, f64) {
    let mut masses = sequence
        .iter()
        .map(|aa| aa.mass(mode).unwrap_or_default())
        .collect::<Vec<_>>();
    let mut unplaced = 0.0;
    for modification in modifications {
        let delta = modification.mass(mode);
        for occurrence in modification.occurrences(sequence) {
            match occurrence {
                Some(index) => masses[index] += delta,
                None => unplaced += delta,
            }
        }
    }
    (masses, unplaced)
}

/// The full neutral mass of a modified sequence: water, all residues, and all modification deltas.
pub fn sequence_mass(sequence: &[AminoAcid], modifications: &[Modification], mode: MassMode) -> f64 {
    let (masses, unplaced) = residue_masses(sequence, modifications, mode);
    let water = match mode {
        MassMode::Monoisotopic => WATER,
        MassMode::Average => WATER_AVERAGE,
    };
    water + masses.iter().sum::<f64>() + unplaced
}

/// The monoisotopic neutral mass of the given sequence text with the given modifications.
/// # Errors
/// If the sequence is not a valid sequence, see [`parse_sequence`].
pub fn sequence_monoisotopic_mass(
    sequence: &str,
    modifications: &[Modification],
) -> Result<f64, BoxedError<'static, MzError>> {
    Ok(sequence_mass(
        &parse_sequence(sequence)?,
        modifications,
        MassMode::Monoisotopic,
    ))
}
