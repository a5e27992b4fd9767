//! Brute-force reference enumeration.

use mineforge_core::Problem;

/// Every assignment within the group bounds that satisfies `problem`,
/// in lexicographic order.
///
/// Walks the full cartesian product of `0..=max` per group, so only use it
/// on small problems.
pub fn brute_force(problem: &Problem) -> Vec<Vec<u32>> {
    let maxes: Vec<u32> = problem.groups().iter().map(|g| g.max()).collect();
    let mut values = vec![0u32; maxes.len()];
    let mut found = Vec::new();

    loop {
        if problem.is_satisfied_by(&values) {
            found.push(values.clone());
        }

        // Advance the last position first so output stays sorted.
        let mut pos = values.len();
        loop {
            if pos == 0 {
                return found;
            }
            pos -= 1;
            if values[pos] < maxes[pos] {
                values[pos] += 1;
                break;
            }
            values[pos] = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mineforge_core::ProblemBuilder;

    #[test]
    fn test_empty_problem_has_one_solution() {
        let problem = ProblemBuilder::new().build().unwrap();
        assert_eq!(brute_force(&problem), vec![Vec::<u32>::new()]);
    }

    #[test]
    fn test_single_number() {
        let problem = ProblemBuilder::new()
            .with_groups([1, 2])
            .with_number(2, [0, 1])
            .build()
            .unwrap();
        assert_eq!(brute_force(&problem), vec![vec![0, 2], vec![1, 1]]);
    }
}
