//! Validated enumeration input.

use super::{Group, GroupIndex, Number};
use crate::error::InputError;
use crate::validation;

/// A group sequence that has passed input validation.
///
/// Groups are processed in index order; every number's spans are strictly
/// ascending, in range, and listed by each group they span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Problem {
    groups: Vec<Group>,
}

impl Problem {
    /// Validates `groups` against the declared count and takes ownership.
    pub fn new(groups: Vec<Group>, n_groups: usize) -> Result<Self, InputError> {
        validation::validate(&groups, n_groups)?;
        Ok(Self { groups })
    }

    /// Validates borrowed groups, copying them only once they pass.
    pub fn from_slice(groups: &[Group], n_groups: usize) -> Result<Self, InputError> {
        validation::validate(groups, n_groups)?;
        Ok(Self {
            groups: groups.to_vec(),
        })
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, index: GroupIndex) -> Option<&Group> {
        self.groups.get(index)
    }

    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Each distinct number once, taken from the first group it spans.
    pub fn numbers(&self) -> impl Iterator<Item = &Number> + '_ {
        self.groups.iter().enumerate().flat_map(|(g, group)| {
            group
                .members()
                .iter()
                .filter(move |nr| nr.spans().first() == Some(&g))
        })
    }

    /// Returns true if `values` respects every group bound and every sum.
    pub fn is_satisfied_by(&self, values: &[u32]) -> bool {
        values.len() == self.groups.len()
            && self
                .groups
                .iter()
                .zip(values)
                .all(|(group, &v)| v <= group.max())
            && self.numbers().all(|nr| nr.is_satisfied_by(values))
    }
}
