#![doc = include_str!("../README.md")]

mod helper_functions;

/// Contains all things related to the underlying chemistry, constants and charge conversions.
pub mod chemistry;
pub mod error;
pub mod fragment;
pub mod identification;
pub mod msgf;
pub mod quantities;
pub mod sequence;

/// A subset of the types and traits that are envisioned to be used the most, importing this is a good starting point for working with the crate
pub mod prelude {
    pub use crate::chemistry::{MassMode, charge_to_neutral_mass, mass_to_charge};
    pub use crate::error::MzError;
    pub use crate::fragment::{
        ActivationMethod, FragmentIonSeries, Fragmenter, IonFamily, select_ion_families,
    };
    pub use crate::identification::{Identification, ProteinRegistry};
    pub use crate::quantities::{MassUnit, Tolerance};
    pub use crate::sequence::{
        AminoAcid, Applicability, Digester, DigestionParameters, Enzyme, EnzymeRegistry,
        HasSequence, Modification, ModificationType, Peptide, Position, Protein, SequencePosition,
        residue_mass, sequence_monoisotopic_mass,
    };
}
