//! Independent components of a problem.
//!
//! Groups that share no number, directly or through a chain of numbers,
//! cannot influence each other. Enumerating each island on its own keeps
//! the frontier as wide as the largest island instead of the product of
//! all of them; [`IslandSolution::expand`] rebuilds the full product when
//! the caller needs it.

use mineforge_core::{
    reserve, Configuration, Configurations, Group, GroupIndex, InputError, MineforgeError, Number,
    Problem, Result,
};

/// A connected set of groups, re-indexed as a standalone problem.
#[derive(Debug, Clone)]
pub struct Island {
    groups: Vec<GroupIndex>,
    problem: Problem,
}

impl Island {
    /// Indices of this island's groups in the original problem, ascending.
    pub fn groups(&self) -> &[GroupIndex] {
        &self.groups
    }

    /// The island as a problem with groups numbered from zero.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn into_parts(self) -> (Vec<GroupIndex>, Problem) {
        (self.groups, self.problem)
    }
}

fn find(parent: &mut [usize], mut g: usize) -> usize {
    while parent[g] != g {
        parent[g] = parent[parent[g]];
        g = parent[g];
    }
    g
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let (ra, rb) = (find(parent, a), find(parent, b));
    if ra != rb {
        // Keep the smaller index as root so islands order by first group.
        parent[ra.max(rb)] = ra.min(rb);
    }
}

/// Splits `problem` into islands ordered by their lowest group.
///
/// Groups no number touches form single-group islands.
pub fn split_islands(problem: &Problem) -> std::result::Result<Vec<Island>, InputError> {
    let n = problem.n_groups();
    let mut parent: Vec<usize> = (0..n).collect();
    for nr in problem.numbers() {
        if let Some((&first, rest)) = nr.spans().split_first() {
            for &g in rest {
                union(&mut parent, first, g);
            }
        }
    }

    let mut members: Vec<Vec<GroupIndex>> = Vec::new();
    let mut island_of_root: Vec<Option<usize>> = vec![None; n];
    for g in 0..n {
        let root = find(&mut parent, g);
        let island = *island_of_root[root].get_or_insert_with(|| {
            members.push(Vec::new());
            members.len() - 1
        });
        members[island].push(g);
    }

    let mut local = vec![0usize; n];
    members
        .into_iter()
        .map(|groups| -> std::result::Result<Island, InputError> {
            for (l, &g) in groups.iter().enumerate() {
                local[g] = l;
            }
            let island_groups: Vec<Group> = groups
                .iter()
                .map(|&g| {
                    let group = &problem.groups()[g];
                    let members = group
                        .members()
                        .iter()
                        .map(|nr| {
                            // Monotone re-indexing keeps spans ascending.
                            Number::new(nr.target(), nr.spans().iter().map(|&s| local[s]).collect())
                        })
                        .collect();
                    Group::new(group.max(), members)
                })
                .collect();
            let problem = Problem::new(island_groups, groups.len())?;
            Ok(Island { groups, problem })
        })
        .collect()
}

/// Per-island results that together describe the full solution set.
#[derive(Debug, Clone)]
pub struct IslandSolution {
    n_groups: usize,
    parts: Vec<(Vec<GroupIndex>, Configurations)>,
}

impl IslandSolution {
    pub fn new(n_groups: usize, parts: Vec<(Vec<GroupIndex>, Configurations)>) -> Self {
        Self { n_groups, parts }
    }

    /// Width of the original problem.
    pub fn n_groups(&self) -> usize {
        self.n_groups
    }

    /// Each island's original group indices with its configurations.
    pub fn parts(&self) -> &[(Vec<GroupIndex>, Configurations)] {
        &self.parts
    }

    /// Number of full configurations, or `None` if it overflows `usize`.
    pub fn count(&self) -> Option<usize> {
        self.parts
            .iter()
            .try_fold(1usize, |acc, (_, cfgs)| acc.checked_mul(cfgs.count()))
    }

    /// Combines the islands into full-width configurations.
    ///
    /// # Errors
    ///
    /// Returns [`MineforgeError::Allocation`] if the product cannot be held.
    pub fn expand(&self) -> Result<Configurations> {
        let total = self.count().ok_or(MineforgeError::Allocation {
            what: "configurations",
            requested: usize::MAX,
        })?;
        let mut items = Vec::new();
        reserve(&mut items, total, "configurations")?;
        if total == 0 {
            return Ok(Configurations::new(self.n_groups, items));
        }

        // Odometer over one configuration index per island.
        let mut digits = vec![0usize; self.parts.len()];
        loop {
            let mut values = Vec::new();
            reserve(&mut values, self.n_groups, "configuration values")?;
            values.resize(self.n_groups, 0);
            for ((groups, cfgs), &d) in self.parts.iter().zip(&digits) {
                for (&g, &v) in groups.iter().zip(cfgs.as_slice()[d].values()) {
                    values[g] = v;
                }
            }
            items.push(Configuration::from(values));

            let mut pos = digits.len();
            loop {
                if pos == 0 {
                    return Ok(Configurations::new(self.n_groups, items));
                }
                pos -= 1;
                digits[pos] += 1;
                if digits[pos] < self.parts[pos].1.count() {
                    break;
                }
                digits[pos] = 0;
            }
        }
    }
}
