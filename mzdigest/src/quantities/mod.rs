//! Mass tolerances for comparing theoretical and observed masses.

mod tolerance;

pub use tolerance::*;
