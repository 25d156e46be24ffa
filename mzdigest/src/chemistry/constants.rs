//! Physical constants, all in Dalton.

/// The mass of a proton
pub const PROTON: f64 = 1.007_276_466_88;
/// The mass of an electron
pub const ELECTRON: f64 = 0.000_548_579_909_07;
/// Monoisotopic mass of hydrogen (¹H)
pub const HYDROGEN: f64 = 1.007_825_032_07;
/// Monoisotopic mass of carbon (¹²C)
pub const CARBON: f64 = 12.0;
/// Monoisotopic mass of nitrogen (¹⁴N)
pub const NITROGEN: f64 = 14.003_074_004_8;
/// Monoisotopic mass of oxygen (¹⁶O)
pub const OXYGEN: f64 = 15.994_914_619_56;

/// Monoisotopic mass of water
pub const WATER: f64 = 2.0 * HYDROGEN + OXYGEN;
/// Average mass of water
pub const WATER_AVERAGE: f64 = 18.015_28;
/// Monoisotopic mass of ammonia
pub const AMMONIA: f64 = NITROGEN + 3.0 * HYDROGEN;
/// Monoisotopic mass of carbon monoxide
pub const CARBON_MONOXIDE: f64 = CARBON + OXYGEN;
/// Monoisotopic mass of carbon dioxide
pub const CARBON_DIOXIDE: f64 = CARBON + 2.0 * OXYGEN;
/// Monoisotopic mass of an amino radical (NH2)
pub const AMINO: f64 = NITROGEN + 2.0 * HYDROGEN;
