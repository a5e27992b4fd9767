//! Conversion of the final frontier into configurations.

use mineforge_core::{reserve, Configuration, Configurations, Result};

use crate::frontier::Frontier;

/// Copies every surviving branch into a [`Configuration`].
///
/// A zero-width frontier still holds its single root branch and yields one
/// empty configuration. An emptied frontier yields an empty result.
///
/// # Errors
///
/// Returns [`MineforgeError::Allocation`](mineforge_core::MineforgeError)
/// if the result buffer or any configuration cannot be allocated; nothing
/// built so far is returned.
pub fn materialize(frontier: &Frontier) -> Result<Configurations> {
    let mut items = Vec::new();
    reserve(&mut items, frontier.len(), "configurations")?;
    for branch in frontier.branches() {
        let mut values = Vec::new();
        reserve(&mut values, branch.len(), "configuration values")?;
        values.extend_from_slice(branch);
        items.push(Configuration::from(values));
    }
    Ok(Configurations::new(frontier.width(), items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounder::Bounds;

    #[test]
    fn test_zero_width_yields_one_empty() {
        let frontier = Frontier::initialize(0).unwrap();
        let cfgs = materialize(&frontier).unwrap();
        assert_eq!(cfgs.count(), 1);
        assert!(cfgs.as_slice()[0].is_empty());
    }

    #[test]
    fn test_empty_frontier_yields_nothing() {
        let mut frontier = Frontier::initialize(2).unwrap();
        frontier.extend_layer(0, &[Bounds::new(1, 0)]).unwrap();
        let cfgs = materialize(&frontier).unwrap();
        assert!(cfgs.is_empty());
        assert_eq!(cfgs.n_groups(), 2);
    }

    #[test]
    fn test_rows_copied() {
        let mut frontier = Frontier::initialize(1).unwrap();
        frontier.extend_layer(0, &[Bounds::new(0, 1)]).unwrap();
        let mut cfgs = materialize(&frontier).unwrap();
        cfgs.sort();
        let values: Vec<_> = cfgs.iter().map(|c| c.values().to_vec()).collect();
        assert_eq!(values, vec![vec![0], vec![1]]);
    }
}
