//! The [`MzError`] kind used for all errors raised by this crate, so downstream users can match on the exact failure.

use context_error::ErrorKind;

/// The kind of failure, attached to every [`context_error::BoxedError`] returned from this crate.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MzError {
    /// A malformed sequence, an unknown name (enzyme, activation method, unit), a value outside
    /// its domain, or an empty peptide given to fragmentation.
    #[default]
    InvalidArgument,
    /// A lookup of a key that was never set, for example an unset score.
    OutOfBounds,
}

impl ErrorKind for MzError {
    type Settings = ();
    fn descriptor(&self) -> &'static str {
        "error"
    }
    fn ignored(&self, _settings: Self::Settings) -> bool {
        false
    }
    fn is_error(&self, _settings: Self::Settings) -> bool {
        true
    }
}

impl std::fmt::Display for MzError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}
