mod charge;
mod constants;
mod mass_mode;

pub use charge::*;
pub use constants::*;
pub use mass_mode::*;
