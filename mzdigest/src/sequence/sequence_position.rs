use serde::{Deserialize, Serialize};

/// A position on a sequence, residue indices are 1 based.
#[derive(
    Copy, Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum SequencePosition {
    /// N-terminal
    NTerm,
    /// The amino acid at the given 1 based index
    Index(usize),
    /// C-terminal
    CTerm,
}

impl SequencePosition {
    /// Resolve this position to a 0 based residue index for a sequence of the given length.
    /// The termini resolve to the first and last residue. Returns `None` if the position does not
    /// fall on the sequence (index 0, an index beyond the length, or an empty sequence).
    pub const fn residue_index(self, length: usize) -> Option<usize> {
        if length == 0 {
            return None;
        }
        match self {
            Self::NTerm => Some(0),
            Self::CTerm => Some(length - 1),
            Self::Index(i) => {
                if i >= 1 && i <= length {
                    Some(i - 1)
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for SequencePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NTerm => write!(f, "N-terminal"),
            Self::Index(index) => write!(f, "{index}"),
            Self::CTerm => write!(f, "C-terminal"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn resolve() {
        assert_eq!(SequencePosition::NTerm.residue_index(5), Some(0));
        assert_eq!(SequencePosition::CTerm.residue_index(5), Some(4));
        assert_eq!(SequencePosition::Index(1).residue_index(5), Some(0));
        assert_eq!(SequencePosition::Index(5).residue_index(5), Some(4));
        assert_eq!(SequencePosition::Index(0).residue_index(5), None);
        assert_eq!(SequencePosition::Index(6).residue_index(5), None);
        assert_eq!(SequencePosition::NTerm.residue_index(0), None);
    }
}
