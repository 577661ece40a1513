//! Answer type for membership queries

use std::fmt;

/// Result of querying a Bloom filter
///
/// A filter can prove absence but never presence: `PossiblyPresent` may be a
/// false positive, `DefinitelyAbsent` is never a false negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Membership {
    /// At least one of the item's bits is clear
    DefinitelyAbsent,
    /// All of the item's bits are set
    PossiblyPresent,
}

impl Membership {
    pub fn is_possibly_present(self) -> bool {
        matches!(self, Membership::PossiblyPresent)
    }

    pub fn is_definitely_absent(self) -> bool {
        matches!(self, Membership::DefinitelyAbsent)
    }
}

impl From<bool> for Membership {
    fn from(all_bits_set: bool) -> Self {
        if all_bits_set {
            Membership::PossiblyPresent
        } else {
            Membership::DefinitelyAbsent
        }
    }
}

impl fmt::Display for Membership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Membership::DefinitelyAbsent => write!(f, "definitely absent"),
            Membership::PossiblyPresent => write!(f, "possibly present"),
        }
    }
}
