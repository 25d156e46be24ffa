//! Residues, modifications, peptides and proteins, and the digestion of proteins into peptides.

mod aminoacid;
mod digest;
mod enzyme;
mod mass;
mod modification;
mod peptide;
mod sequence_position;

pub use aminoacid::*;
pub use digest::*;
pub use enzyme::*;
pub use mass::*;
pub use modification::*;
pub use peptide::*;
pub use sequence_position::*;
