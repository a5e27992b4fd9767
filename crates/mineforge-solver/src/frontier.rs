//! The frontier of partial assignments.
//!
//! Branches live in a single arena of fixed-width rows. Extending a layer
//! compacts surviving rows towards the front in place, then appends one
//! copied row per additional feasible value.

use mineforge_core::{reserve, GroupIndex, MineforgeError, Result};
use rayon::prelude::*;
use tracing::trace;

use crate::bounder::{Bounds, GroupBounder};

/// Outcome of extending every branch at one group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerOutcome {
    /// Branches reused in place with their lowest feasible value.
    pub kept: usize,
    /// Branches discarded on contradiction.
    pub pruned: usize,
    /// New sibling branches created.
    pub spawned: usize,
}

/// Live partial assignments, one row of `width` values per branch.
///
/// Entries below the layer being processed are final; the rest are zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    width: usize,
    len: usize,
    values: Vec<u32>,
}

impl Frontier {
    /// Creates a frontier holding one unassigned branch.
    pub fn initialize(n_groups: usize) -> Result<Self> {
        let mut values = Vec::new();
        reserve(&mut values, n_groups, "branch values")?;
        values.resize(n_groups, 0);
        Ok(Self {
            width: n_groups,
            len: 1,
            values,
        })
    }

    /// Number of live branches.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of every branch.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The values of one branch.
    pub fn branch(&self, index: usize) -> &[u32] {
        &self.values[index * self.width..(index + 1) * self.width]
    }

    pub fn branches(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        (0..self.len).map(move |b| self.branch(b))
    }

    // Zero-width frontiers never reach a layer, so `width` is non-zero here.
    pub(crate) fn par_branches(&self) -> rayon::slice::ChunksExact<'_, u32> {
        debug_assert!(self.width > 0);
        self.values.par_chunks_exact(self.width)
    }

    /// Computes bounds sequentially and extends every branch at `layer`.
    pub fn process_group(
        &mut self,
        layer: GroupIndex,
        bounder: &GroupBounder,
    ) -> Result<LayerOutcome> {
        let mut bounds = Vec::new();
        reserve(&mut bounds, self.len, "layer bounds")?;
        bounds.extend(self.branches().map(|b| bounder.bounds(layer, b)));
        self.extend_layer(layer, &bounds)
    }

    /// Extends branch `b` with every value in `bounds[b]`.
    ///
    /// Infeasible branches are removed. A feasible branch keeps its row and
    /// takes the lowest value; each higher value gets a fresh copy of the
    /// decided prefix. After an allocation failure the frontier no longer
    /// holds a complete layer and must be discarded.
    pub fn extend_layer(&mut self, layer: GroupIndex, bounds: &[Bounds]) -> Result<LayerOutcome> {
        debug_assert_eq!(bounds.len(), self.len);
        debug_assert!(layer < self.width);
        let width = self.width;

        let too_many = MineforgeError::Allocation {
            what: "branches",
            requested: usize::MAX,
        };
        let spawned = bounds
            .iter()
            .try_fold(0u64, |acc, b| acc.checked_add(b.siblings()))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(too_many)?;
        let spawned_values = spawned
            .checked_mul(width)
            .ok_or(MineforgeError::Allocation {
                what: "branch values",
                requested: usize::MAX,
            })?;

        let mut fresh = Vec::new();
        reserve(&mut fresh, spawned_values, "branch values")?;

        let mut write = 0;
        let mut pruned = 0;
        for (read, b) in bounds.iter().enumerate() {
            if !b.is_feasible() {
                trace!(event = "branch_pruned", layer = layer as u64, branch = read as u64);
                pruned += 1;
                continue;
            }
            if write != read {
                self.values
                    .copy_within(read * width..(read + 1) * width, write * width);
            }
            let row = &mut self.values[write * width..(write + 1) * width];
            // Feasible bounds lie within [0, group max], which fits u32.
            row[layer] = b.min as u32;
            for v in b.min + 1..=b.max {
                fresh.extend_from_slice(&row[..layer]);
                fresh.push(v as u32);
                fresh.resize(fresh.len() + (width - layer - 1), 0);
            }
            write += 1;
        }

        self.values.truncate(write * width);
        self.len = write;
        reserve(&mut self.values, fresh.len(), "branch values")?;
        self.values.append(&mut fresh);
        self.len = write + spawned;

        Ok(LayerOutcome {
            kept: write,
            pruned,
            spawned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineforge_core::ProblemBuilder;

    #[test]
    fn test_initialize() {
        let frontier = Frontier::initialize(3).unwrap();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.width(), 3);
        assert_eq!(frontier.branch(0), &[0, 0, 0]);
    }

    #[test]
    fn test_initialize_zero_width() {
        let frontier = Frontier::initialize(0).unwrap();
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.branches().count(), 1);
        assert!(frontier.branch(0).is_empty());
    }

    #[test]
    fn test_extend_spawns_siblings() {
        let mut frontier = Frontier::initialize(2).unwrap();
        let outcome = frontier.extend_layer(0, &[Bounds::new(0, 2)]).unwrap();

        assert_eq!(
            outcome,
            LayerOutcome {
                kept: 1,
                pruned: 0,
                spawned: 2
            }
        );
        let mut rows: Vec<_> = frontier.branches().map(|b| b.to_vec()).collect();
        rows.sort();
        assert_eq!(rows, vec![vec![0, 0], vec![1, 0], vec![2, 0]]);
    }

    #[test]
    fn test_extend_compacts_pruned() {
        let mut frontier = Frontier::initialize(2).unwrap();
        frontier.extend_layer(0, &[Bounds::new(0, 2)]).unwrap();
        // Rows are [0,_], [1,_], [2,_]; drop the first, keep the others.
        let bounds = [Bounds::new(1, 0), Bounds::new(0, 0), Bounds::new(1, 1)];
        let outcome = frontier.extend_layer(1, &bounds).unwrap();

        assert_eq!(outcome.pruned, 1);
        assert_eq!(outcome.kept, 2);
        assert_eq!(outcome.spawned, 0);
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.branch(0), &[1, 0]);
        assert_eq!(frontier.branch(1), &[2, 1]);
    }

    #[test]
    fn test_siblings_copy_prefix_only() {
        let mut frontier = Frontier::initialize(3).unwrap();
        frontier.extend_layer(0, &[Bounds::new(2, 2)]).unwrap();
        frontier.extend_layer(1, &[Bounds::new(0, 1)]).unwrap();

        assert_eq!(frontier.branch(0), &[2, 0, 0]);
        assert_eq!(frontier.branch(1), &[2, 1, 0]);
    }

    #[test]
    fn test_all_pruned() {
        let mut frontier = Frontier::initialize(1).unwrap();
        let outcome = frontier.extend_layer(0, &[Bounds::new(1, 0)]).unwrap();
        assert_eq!(outcome.pruned, 1);
        assert!(frontier.is_empty());
        assert_eq!(frontier.branches().count(), 0);
    }

    #[test]
    fn test_oversized_layer_is_allocation_error() {
        let mut frontier = Frontier::initialize(3).unwrap();
        let err = frontier
            .extend_layer(0, &[Bounds::new(0, i64::MAX)])
            .unwrap_err();

        assert!(err.is_allocation());
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.branch(0), &[0, 0, 0]);
    }

    #[test]
    fn test_sibling_count_overflow_is_allocation_error() {
        let mut frontier = Frontier::initialize(2).unwrap();
        frontier.extend_layer(0, &[Bounds::new(0, 1)]).unwrap();
        let huge = Bounds::new(i64::MIN, i64::MAX);
        let err = frontier.extend_layer(1, &[huge, huge]).unwrap_err();

        assert_eq!(
            err,
            MineforgeError::Allocation {
                what: "branches",
                requested: usize::MAX
            }
        );
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.branch(1), &[1, 0]);
    }

    #[test]
    fn test_process_group() {
        let problem = ProblemBuilder::new()
            .with_groups([1, 1])
            .with_number(1, [0, 1])
            .build()
            .unwrap();
        let bounder = GroupBounder::new(&problem);
        let mut frontier = Frontier::initialize(2).unwrap();
        frontier.process_group(0, &bounder).unwrap();
        frontier.process_group(1, &bounder).unwrap();

        let mut rows: Vec<_> = frontier.branches().map(|b| b.to_vec()).collect();
        rows.sort();
        assert_eq!(rows, vec![vec![0, 1], vec![1, 0]]);
    }
}
