//! Error types for MineForge

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Main error type for MineForge operations.
///
/// Zero surviving configurations is not an error; it is an empty
/// [`Configurations`](crate::Configurations) result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MineforgeError {
    /// The groups/numbers handed in break an input invariant
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Branch storage or the result buffer could not be allocated
    #[error("Allocation failed: could not reserve {requested} {what}")]
    Allocation {
        what: &'static str,
        requested: usize,
    },

    /// A node-count, deadline or external guard stopped the enumeration
    #[error("Enumeration terminated: {0}")]
    Terminated(TerminationReason),

    /// Error in enumerator configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MineforgeError {
    /// Returns true if this error is an allocation failure.
    pub fn is_allocation(&self) -> bool {
        matches!(self, MineforgeError::Allocation { .. })
    }

    /// Returns true if this error reports malformed input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, MineforgeError::InvalidInput(_))
    }
}

/// Violations of the group/number input invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The declared group count disagrees with the supplied groups
    #[error("declared {declared} groups but {actual} were supplied")]
    GroupCountMismatch { declared: usize, actual: usize },

    /// A number's spans are empty
    #[error("group {group}, member {member}: number spans no groups")]
    EmptySpans { group: usize, member: usize },

    /// A number's spans are not strictly ascending
    #[error("group {group}, member {member}: spans not strictly ascending at position {position}")]
    SpansNotAscending {
        group: usize,
        member: usize,
        position: usize,
    },

    /// A span references a group that does not exist
    #[error("group {group}, member {member}: span index {index} out of range for {n_groups} groups")]
    SpanOutOfRange {
        group: usize,
        member: usize,
        index: usize,
        n_groups: usize,
    },

    /// A number listed as a member of a group does not span that group
    #[error("group {group}, member {member}: number does not span its owning group")]
    OwnerMissing { group: usize, member: usize },

    /// A number spans a group whose member list does not contain it
    #[error("group {group}, member {member}: number missing from members of spanned group {missing_from}")]
    MembershipMissing {
        group: usize,
        member: usize,
        missing_from: usize,
    },

    /// A clue handed to the builder references a group it never created
    #[error("number {number}: span index {index} out of range for {n_groups} groups")]
    UnknownGroup {
        number: usize,
        index: usize,
        n_groups: usize,
    },

    /// A clue handed to the builder spans no groups
    #[error("number {number}: spans no groups")]
    NumberWithoutGroups { number: usize },
}

/// Why an enumeration stopped before exhausting the groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// More branches were created than the configured node limit
    NodeLimit { limit: u64 },
    /// The configured deadline passed
    TimeLimit { limit: Duration },
    /// An external flag requested termination
    External,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::NodeLimit { limit } => {
                write!(f, "node limit of {} branches exceeded", limit)
            }
            TerminationReason::TimeLimit { limit } => {
                write!(f, "time limit of {}ms exceeded", limit.as_millis())
            }
            TerminationReason::External => write!(f, "externally requested"),
        }
    }
}

/// Result type alias for MineForge operations
pub type Result<T> = std::result::Result<T, MineforgeError>;

/// Reserves room for `additional` more elements, reporting failure as
/// [`MineforgeError::Allocation`] instead of aborting the process.
pub fn reserve<T>(vec: &mut Vec<T>, additional: usize, what: &'static str) -> Result<()> {
    vec.try_reserve(additional)
        .map_err(|_| MineforgeError::Allocation {
            what,
            requested: additional,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_small() {
        let mut v: Vec<u32> = Vec::new();
        reserve(&mut v, 16, "values").unwrap();
        assert!(v.capacity() >= 16);
    }

    #[test]
    fn test_reserve_overflow_is_allocation_error() {
        let mut v: Vec<u64> = Vec::new();
        let err = reserve(&mut v, usize::MAX, "values").unwrap_err();
        assert!(err.is_allocation());
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_input_error_converts() {
        let err: MineforgeError = InputError::GroupCountMismatch {
            declared: 3,
            actual: 2,
        }
        .into();
        assert!(err.is_invalid_input());
        assert_eq!(
            err.to_string(),
            "Invalid input: declared 3 groups but 2 were supplied"
        );
    }

    #[test]
    fn test_termination_display() {
        let err = MineforgeError::Terminated(TerminationReason::NodeLimit { limit: 10 });
        assert_eq!(
            err.to_string(),
            "Enumeration terminated: node limit of 10 branches exceeded"
        );
        assert_eq!(
            TerminationReason::TimeLimit {
                limit: Duration::from_millis(250)
            }
            .to_string(),
            "time limit of 250ms exceeded"
        );
    }
}
