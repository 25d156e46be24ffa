//! Theoretical fragment ion ladders for peptides.

mod activation;
mod fragmentation;
mod ion_family;

pub use activation::*;
pub use fragmentation::*;
pub use ion_family::*;
