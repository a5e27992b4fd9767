//! Named boards.
//!
//! Each fixture returns a validated [`Problem`]. Group maxima and spans
//! describe the equivalence classes a minefield front reduces to.

use mineforge_core::{Problem, ProblemBuilder};

fn build(builder: ProblemBuilder) -> Problem {
    match builder.build() {
        Ok(problem) => problem,
        Err(e) => panic!("fixture is invalid: {e}"),
    }
}

/// Three overlapping clues of 1 over five single-cell groups.
///
/// Spans are `[0,1,2]`, `[1,2,3]` and `[2,3,4]`.
pub fn overlapping_chain() -> Problem {
    build(
        ProblemBuilder::new()
            .with_groups([1; 5])
            .with_number(1, [0, 1, 2])
            .with_number(1, [1, 2, 3])
            .with_number(1, [2, 3, 4]),
    )
}

/// Two empty groups under a clue of 1; has no solution.
pub fn contradiction_pair() -> Problem {
    build(
        ProblemBuilder::new()
            .with_groups([0, 0])
            .with_number(1, [0, 1]),
    )
}

/// A wall of clues along one edge, each seeing two or three cells.
pub fn chain_board() -> Problem {
    build(
        ProblemBuilder::new()
            .with_groups([1; 6])
            .with_number(1, [0, 1])
            .with_number(1, [1, 2])
            .with_number(1, [2, 3])
            .with_number(1, [2, 3, 4])
            .with_number(1, [3, 4, 5]),
    )
}

/// Two rows of clues meeting at a corner; the last group holds two cells.
pub fn ladder_board() -> Problem {
    build(
        ProblemBuilder::new()
            .with_groups([1, 1, 1, 1, 1, 1, 1, 2])
            .with_number(1, [0, 1])
            .with_number(1, [2, 3])
            .with_number(1, [1, 3, 4])
            .with_number(1, [3, 4, 5])
            .with_number(1, [4, 5, 6])
            .with_number(2, [5, 6, 7]),
    )
}

/// Two independent copies of [`overlapping_chain`] plus a free group.
///
/// Groups `0..5` and `5..10` form separate islands and group 10 is
/// unconstrained with max 2.
pub fn twin_chains() -> Problem {
    let mut builder = ProblemBuilder::new().with_groups([1; 10]);
    builder.add_group(2);
    for offset in [0, 5] {
        for start in 0..3 {
            builder.add_number(1, (start..start + 3).map(|g| g + offset));
        }
    }
    build(builder)
}
