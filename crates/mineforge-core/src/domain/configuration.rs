//! Complete assignments and result sets.

use std::fmt;
use std::ops::Deref;

/// How many configurations `Display` prints before eliding the rest.
const DISPLAY_LIMIT: usize = 10;

/// One complete, valid assignment of a value to every group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Configuration(Vec<u32>);

impl Configuration {
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[u32] {
        &self.0
    }

    /// Sum over all groups, i.e. the mines this configuration places.
    pub fn total(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl Deref for Configuration {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

impl From<Vec<u32>> for Configuration {
    fn from(values: Vec<u32>) -> Self {
        Self(values)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

/// The counted result of an enumeration.
///
/// An empty result means no assignment satisfies the clues; it is a
/// success, never a stand-in for a failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configurations {
    n_groups: usize,
    items: Vec<Configuration>,
}

impl Configurations {
    /// Creates a result set for `n_groups`-wide configurations.
    pub fn new(n_groups: usize, items: Vec<Configuration>) -> Self {
        debug_assert!(items.iter().all(|c| c.len() == n_groups));
        Self { n_groups, items }
    }

    /// Creates an empty result set.
    pub fn empty(n_groups: usize) -> Self {
        Self::new(n_groups, Vec::new())
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width of every configuration.
    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Configuration> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Configuration] {
        &self.items
    }

    /// Sorts configurations lexicographically.
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }

    /// Splits into the configuration sequence and its count.
    pub fn into_parts(self) -> (Vec<Configuration>, usize) {
        let count = self.items.len();
        (self.items, count)
    }
}

impl IntoIterator for Configurations {
    type Item = Configuration;
    type IntoIter = std::vec::IntoIter<Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Configurations {
    type Item = &'a Configuration;
    type IntoIter = std::slice::Iter<'a, Configuration>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Configurations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "No configurations found");
        }
        writeln!(f, "Configurations:")?;
        for cfg in self.items.iter().take(DISPLAY_LIMIT) {
            writeln!(f, "  {}", cfg)?;
        }
        if self.items.len() > DISPLAY_LIMIT {
            writeln!(f, "  ...")?;
        }
        write!(f, "Total of {} configurations", self.items.len())
    }
}
