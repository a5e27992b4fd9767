//! Incremental construction of problems from clues.

use crate::domain::{Group, GroupIndex, Number, Problem};
use crate::error::InputError;

/// Builds a [`Problem`] from group bounds and clues.
///
/// Each clue is inserted into the member list of every group it spans, so
/// callers only describe each number once. Spans may be given in any order;
/// they are sorted and deduplicated.
///
/// # Example
///
/// ```
/// use mineforge_core::ProblemBuilder;
///
/// let problem = ProblemBuilder::new()
///     .with_groups([1, 1, 1])
///     .with_number(1, [0, 1])
///     .with_number(1, [1, 2])
///     .build()
///     .unwrap();
///
/// assert_eq!(problem.n_groups(), 3);
/// assert_eq!(problem.groups()[1].members().len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProblemBuilder {
    maxes: Vec<u32>,
    numbers: Vec<Number>,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a group and returns its index.
    pub fn add_group(&mut self, max: u32) -> GroupIndex {
        self.maxes.push(max);
        self.maxes.len() - 1
    }

    /// Appends one group per bound.
    pub fn with_groups(mut self, maxes: impl IntoIterator<Item = u32>) -> Self {
        self.maxes.extend(maxes);
        self
    }

    /// Adds a clue over the given groups.
    pub fn add_number(
        &mut self,
        target: i64,
        spans: impl IntoIterator<Item = GroupIndex>,
    ) -> &mut Self {
        let mut spans: Vec<GroupIndex> = spans.into_iter().collect();
        spans.sort_unstable();
        spans.dedup();
        self.numbers.push(Number::new(target, spans));
        self
    }

    /// Builder-style [`add_number`](Self::add_number).
    pub fn with_number(
        mut self,
        target: i64,
        spans: impl IntoIterator<Item = GroupIndex>,
    ) -> Self {
        self.add_number(target, spans);
        self
    }

    pub fn n_groups(&self) -> usize {
        self.maxes.len()
    }

    pub fn n_numbers(&self) -> usize {
        self.numbers.len()
    }

    /// Produces the raw group list without validating it.
    ///
    /// Clues referencing unknown groups are attached only to the groups that
    /// exist; [`Problem::new`] will reject the result.
    pub fn to_groups(&self) -> Vec<Group> {
        let mut members: Vec<Vec<Number>> = vec![Vec::new(); self.maxes.len()];
        for nr in &self.numbers {
            for &g in nr.spans() {
                if let Some(list) = members.get_mut(g) {
                    list.push(nr.clone());
                }
            }
        }
        self.maxes
            .iter()
            .zip(members)
            .map(|(&max, members)| Group::new(max, members))
            .collect()
    }

    /// Validates the clues and builds the problem.
    pub fn build(&self) -> Result<Problem, InputError> {
        let n_groups = self.maxes.len();
        for (number, nr) in self.numbers.iter().enumerate() {
            match nr.closing_group() {
                None => return Err(InputError::NumberWithoutGroups { number }),
                Some(index) if index >= n_groups => {
                    return Err(InputError::UnknownGroup {
                        number,
                        index,
                        n_groups,
                    })
                }
                Some(_) => {}
            }
        }
        Problem::new(self.to_groups(), n_groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_inserted_per_span() {
        let mut builder = ProblemBuilder::new();
        let a = builder.add_group(1);
        let b = builder.add_group(2);
        let c = builder.add_group(1);
        builder.add_number(2, [c, a]).add_number(1, [b]);
        let problem = builder.build().unwrap();

        assert_eq!(problem.groups()[a].members().len(), 1);
        assert_eq!(problem.groups()[b].members().len(), 1);
        assert_eq!(problem.groups()[c].members().len(), 1);
        assert_eq!(problem.groups()[a].members()[0].spans(), &[0, 2]);
        assert_eq!(problem.numbers().count(), 2);
    }

    #[test]
    fn test_duplicate_spans_collapse() {
        let problem = ProblemBuilder::new()
            .with_groups([1, 1])
            .with_number(1, [1, 0, 1])
            .build()
            .unwrap();
        assert_eq!(problem.groups()[0].members()[0].spans(), &[0, 1]);
    }

    #[test]
    fn test_unknown_group() {
        let err = ProblemBuilder::new()
            .with_groups([1])
            .with_number(1, [0, 3])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            InputError::UnknownGroup {
                number: 0,
                index: 3,
                n_groups: 1
            }
        );
    }

    #[test]
    fn test_number_without_groups() {
        let err = ProblemBuilder::new()
            .with_groups([1])
            .with_number(0, [])
            .build()
            .unwrap_err();
        assert_eq!(err, InputError::NumberWithoutGroups { number: 0 });
    }
}
