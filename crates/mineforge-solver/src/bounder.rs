//! Per-group value bounds.
//!
//! When group `i` is extended, every number spanning it splits its groups
//! into decided ones (index below `i`), which reduce what the number still
//! needs, and undecided ones (index above `i`), whose maxima are the most
//! they could still contribute. Group `i` can take no more than any number
//! still needs, and no less than the shortfall the undecided groups cannot
//! cover. At a number's last span the free capacity is zero and its bound
//! becomes exact.

use mineforge_core::{GroupIndex, Problem};
use smallvec::SmallVec;

/// The feasible value range `[min, max]` for one branch at one group.
///
/// `min > max` signals a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn is_feasible(&self) -> bool {
        self.min <= self.max
    }

    /// Values beyond the first, i.e. the siblings this branch spawns.
    pub fn siblings(&self) -> u64 {
        if self.is_feasible() {
            self.max.abs_diff(self.min)
        } else {
            0
        }
    }
}

// A number as seen from one of the groups it spans.
#[derive(Debug, Clone)]
struct MemberClause {
    target: i64,
    decided: SmallVec<[GroupIndex; 8]>,
    free_capacity: i64,
}

#[derive(Debug, Clone)]
struct LayerPlan {
    max: i64,
    clauses: Vec<MemberClause>,
}

/// Computes [`Bounds`] for any branch at any group.
///
/// Free capacity depends only on the problem, so it is summed once per
/// (group, member) pair here; per-branch work is limited to subtracting
/// decided values.
#[derive(Debug, Clone)]
pub struct GroupBounder {
    layers: Vec<LayerPlan>,
}

impl GroupBounder {
    pub fn new(problem: &Problem) -> Self {
        let groups = problem.groups();
        let layers = groups
            .iter()
            .enumerate()
            .map(|(i, group)| LayerPlan {
                max: i64::from(group.max()),
                clauses: group
                    .members()
                    .iter()
                    .map(|nr| MemberClause {
                        target: nr.target(),
                        decided: nr.spans().iter().copied().filter(|&gx| gx < i).collect(),
                        free_capacity: nr
                            .spans()
                            .iter()
                            .filter(|&&gx| gx > i)
                            .map(|&gx| i64::from(groups[gx].max()))
                            .sum(),
                    })
                    .collect(),
            })
            .collect();
        Self { layers }
    }

    /// Number of groups this bounder covers.
    pub fn n_layers(&self) -> usize {
        self.layers.len()
    }

    /// Bounds for extending `branch` at group `layer`.
    ///
    /// Only entries of `branch` below `layer` are read.
    pub fn bounds(&self, layer: GroupIndex, branch: &[u32]) -> Bounds {
        let plan = &self.layers[layer];
        let mut min = 0i64;
        let mut max = plan.max;
        for clause in &plan.clauses {
            let used: i64 = clause.decided.iter().map(|&gx| i64::from(branch[gx])).sum();
            let remaining = clause.target.saturating_sub(used);
            max = max.min(remaining);
            min = min.max(remaining.saturating_sub(clause.free_capacity));
        }
        Bounds { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineforge_core::ProblemBuilder;

    // Straight transcription of the bound rule, recomputing free capacity.
    fn naive_bounds(problem: &Problem, i: usize, cfg: &[u32]) -> Bounds {
        let groups = problem.groups();
        let mut min = 0i64;
        let mut max = i64::from(groups[i].max());
        for nr in groups[i].members() {
            let mut remaining = nr.target();
            let mut space = 0i64;
            for &gx in nr.spans() {
                if gx < i {
                    remaining -= i64::from(cfg[gx]);
                } else if gx > i {
                    space += i64::from(groups[gx].max());
                }
            }
            max = max.min(remaining);
            min = min.max(remaining - space);
        }
        Bounds { min, max }
    }

    fn chain() -> Problem {
        ProblemBuilder::new()
            .with_groups([1, 1, 1, 1, 1])
            .with_number(1, [0, 1, 2])
            .with_number(1, [1, 2, 3])
            .with_number(1, [2, 3, 4])
            .build()
            .unwrap()
    }

    #[test]
    fn test_unconstrained_group() {
        let problem = ProblemBuilder::new().with_groups([3]).build().unwrap();
        let bounder = GroupBounder::new(&problem);
        assert_eq!(bounder.bounds(0, &[0]), Bounds::new(0, 3));
        assert_eq!(bounder.bounds(0, &[0]).siblings(), 3);
    }

    #[test]
    fn test_first_group_of_chain() {
        let problem = chain();
        let bounder = GroupBounder::new(&problem);
        // Two undecided groups could cover the whole target.
        assert_eq!(bounder.bounds(0, &[0; 5]), Bounds::new(0, 1));
    }

    #[test]
    fn test_closing_group_is_exact() {
        let problem = chain();
        let bounder = GroupBounder::new(&problem);
        // Number over [2, 3, 4] closes at 4 with 2 and 3 both zero.
        assert_eq!(bounder.bounds(4, &[1, 0, 0, 0, 0]), Bounds::new(1, 1));
    }

    #[test]
    fn test_contradiction() {
        let problem = chain();
        let bounder = GroupBounder::new(&problem);
        // c0 = 1 and c1 = 1 already overshoot the first number.
        let bounds = bounder.bounds(2, &[1, 1, 0, 0, 0]);
        assert!(!bounds.is_feasible());
        assert_eq!(bounds.siblings(), 0);
    }

    #[test]
    fn test_deficit_forces_minimum() {
        let problem = ProblemBuilder::new()
            .with_groups([2, 1])
            .with_number(3, [0, 1])
            .build()
            .unwrap();
        let bounder = GroupBounder::new(&problem);
        assert_eq!(bounder.bounds(0, &[0, 0]), Bounds::new(2, 2));
    }

    #[test]
    fn test_matches_naive_rule() {
        let problem = ProblemBuilder::new()
            .with_groups([1, 2, 1, 2, 1, 1])
            .with_number(2, [0, 1])
            .with_number(1, [2, 3])
            .with_number(2, [1, 3, 4])
            .with_number(1, [3, 4, 5])
            .build()
            .unwrap();
        let bounder = GroupBounder::new(&problem);
        let branches: [[u32; 6]; 4] = [
            [0, 0, 0, 0, 0, 0],
            [1, 1, 0, 1, 0, 0],
            [0, 2, 1, 0, 1, 0],
            [1, 2, 1, 2, 1, 1],
        ];
        for branch in &branches {
            for layer in 0..problem.n_groups() {
                assert_eq!(
                    bounder.bounds(layer, branch),
                    naive_bounds(&problem, layer, branch),
                    "layer {} branch {:?}",
                    layer,
                    branch
                );
            }
        }
    }
}
