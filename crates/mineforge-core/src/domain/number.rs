//! Exact-sum clues.

use std::fmt;

use super::GroupIndex;

/// A clue requiring the values of its spanned groups to sum to `target`.
///
/// `spans` is expected to be strictly ascending; see
/// [`validation`](crate::validation) for the checks applied before
/// enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    target: i64,
    spans: Vec<GroupIndex>,
}

impl Number {
    pub fn new(target: i64, spans: Vec<GroupIndex>) -> Self {
        Self { target, spans }
    }

    /// The exact sum required over the spanned groups.
    pub fn target(&self) -> i64 {
        self.target
    }

    /// The group indices this number constrains.
    pub fn spans(&self) -> &[GroupIndex] {
        &self.spans
    }

    /// Returns true if `group` is one of the spanned groups.
    pub fn spans_group(&self, group: GroupIndex) -> bool {
        self.spans.binary_search(&group).is_ok()
    }

    /// The last spanned group, where this number's sum becomes exact.
    pub fn closing_group(&self) -> Option<GroupIndex> {
        self.spans.last().copied()
    }

    /// Returns true if `values` satisfies this number's sum.
    ///
    /// Spans outside `values` count as unsatisfied.
    pub fn is_satisfied_by(&self, values: &[u32]) -> bool {
        let mut sum = 0i64;
        for &g in &self.spans {
            match values.get(g) {
                Some(&v) => sum += i64::from(v),
                None => return false,
            }
        }
        sum == self.target
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number with target {} and groups {:?}", self.target, self.spans)
    }
}
