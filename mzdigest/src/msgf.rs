//! Conversion of modifications to and from the MS-GF+ modification definition text.
//!
//! ```text
//! NumMods=2
//! 57.021464,C,fix,any,Carbamidomethyl
//! 15.994915,M,opt,any,Oxidation
//! 42.010565,*,opt,Prot-N-term,Acetyl
//! ```
//! Each line lists `mass,residues,type,position,name`. The header sets the maximal number of
//! variable modifications per peptide. Lines starting with `#` are comments.

use std::fmt::Write;

use context_error::{BoxedError, Context, CreateError};
use itertools::Itertools;

use crate::{
    error::MzError,
    helper_functions::invalid_argument,
    sequence::{AminoAcid, Applicability, Modification, ModificationType, Position},
};

/// Write the modifications in the MS-GF+ modification definition format.
/// # Errors
/// If any of the modifications is placed at a fixed site, which cannot be expressed in this format.
pub fn write_modifications(
    modifications: &[Modification],
    num_mods: usize,
) -> Result<String, BoxedError<'static, MzError>> {
    let mut output = format!("NumMods={num_mods}\n");
    for modification in modifications {
        let Applicability::ResidueRule { residues, position } = &modification.applicability else {
            return Err(invalid_argument(
                "Invalid MS-GF+ modification",
                format!(
                    "The modification '{}' is placed at a fixed site, MS-GF+ can only use modifications defined on residues",
                    modification.name
                ),
            ));
        };
        let residues = if residues.is_empty() {
            "*".to_string()
        } else {
            residues.iter().map(|aa| aa.one_letter_code()).collect()
        };
        let kind = match modification.kind {
            ModificationType::Fixed => "fix",
            ModificationType::Variable => "opt",
        };
        let position = match position {
            Position::Anywhere => "any",
            Position::AnyNTerm => "N-term",
            Position::AnyCTerm => "C-term",
            Position::ProteinNTerm => "Prot-N-term",
            Position::ProteinCTerm => "Prot-C-term",
        };
        writeln!(
            output,
            "{},{residues},{kind},{position},{}",
            modification.monoisotopic_mass, modification.name
        )
        .map_err(|err| invalid_argument("Could not write modification", err.to_string()))?;
    }
    Ok(output)
}

/// Parse the MS-GF+ modification definition format, returns the `NumMods` value (if set) and the
/// modifications. Definitions that use an elemental composition instead of a mass are skipped.
/// # Errors
/// If any line does not follow the format.
pub fn parse_modifications(
    text: &str,
) -> Result<(Option<usize>, Vec<Modification>), BoxedError<'static, MzError>> {
    let mut num_mods = None;
    let mut modifications = Vec::new();
    for (index, full_line) in text.lines().enumerate() {
        let line = full_line
            .split_once('#')
            .map_or(full_line, |(content, _)| content)
            .trim();
        if line.is_empty() {
            continue;
        }
        let error = |long: String| {
            BoxedError::new(
                MzError::InvalidArgument,
                "Invalid MS-GF+ modification",
                long,
                Context::full_line(index as u32, full_line).to_owned(),
            )
        };
        if let Some((key, value)) = line.split_once('=') {
            if key.trim().eq_ignore_ascii_case("NumMods") {
                num_mods = Some(value.trim().parse::<usize>().map_err(|err| {
                    error(format!("The NumMods value is not a valid number: {err}"))
                })?);
                continue;
            }
            return Err(error(format!("Unknown setting '{}'", key.trim())));
        }

        let Some((mass, residues, kind, position, name)) =
            line.split(',').map(str::trim).collect_tuple()
        else {
            return Err(error(
                "A modification line needs exactly five fields: mass,residues,type,position,name"
                    .to_string(),
            ));
        };
        let Ok(mass) = mass.parse::<f64>() else {
            log::warn!(
                "Skipped MS-GF+ modification '{name}' on line {}, only numeric masses are supported",
                index + 1
            );
            continue;
        };
        if !mass.is_finite() {
            return Err(error(format!("The mass '{mass}' is not a finite number")));
        }
        let residues = if residues == "*" {
            Vec::new()
        } else {
            residues
                .chars()
                .map(|c| {
                    AminoAcid::try_from(c)
                        .map_err(|()| error(format!("'{c}' is not a valid residue")))
                })
                .collect::<Result<Vec<_>, _>>()?
        };
        let kind = match kind.to_ascii_lowercase().as_str() {
            "fix" => ModificationType::Fixed,
            "opt" => ModificationType::Variable,
            _ => {
                return Err(error(format!(
                    "The modification type '{kind}' is unknown, use 'fix' or 'opt'"
                )));
            }
        };
        let position = match position.to_ascii_lowercase().as_str() {
            "any" => Position::Anywhere,
            "n-term" => Position::AnyNTerm,
            "c-term" => Position::AnyCTerm,
            "prot-n-term" => Position::ProteinNTerm,
            "prot-c-term" => Position::ProteinCTerm,
            _ => {
                return Err(error(format!(
                    "The position '{position}' is unknown, use any, N-term, C-term, Prot-N-term, or Prot-C-term"
                )));
            }
        };
        modifications.push(Modification::residue_rule(
            name, mass, residues, position, kind,
        ));
    }
    log::debug!("Parsed {} MS-GF+ modifications", modifications.len());
    Ok((num_mods, modifications))
}
