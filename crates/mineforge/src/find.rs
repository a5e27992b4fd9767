//! One-call entry points that hide the enumerator wiring.

use mineforge_config::EnumerationConfig;
use mineforge_core::{Configurations, Group, Problem, Result};
use mineforge_solver::ConfigurationEnumerator;

/// Finds every configuration of `groups` with the default configuration.
///
/// `n_groups` must equal `groups.len()`; it is checked together with the
/// rest of the input before any work starts. The caller's groups are only
/// borrowed for the duration of the call.
///
/// # Errors
///
/// - [`MineforgeError::InvalidInput`](mineforge_core::MineforgeError::InvalidInput)
///   when the groups break an input invariant
/// - [`MineforgeError::Allocation`](mineforge_core::MineforgeError::Allocation)
///   when the frontier or result cannot be held
///
/// An unsatisfiable input is not an error: it yields empty configurations.
///
/// # Example
///
/// ```
/// use mineforge::{find_configurations, Group, Number};
///
/// // Two single-mine groups sharing a number that wants exactly one mine.
/// let nr = Number::new(1, vec![0, 1]);
/// let groups = [Group::new(1, vec![nr.clone()]), Group::new(1, vec![nr])];
///
/// let found = find_configurations(&groups, 2).unwrap();
/// let values: Vec<_> = found.iter().map(|c| c.values().to_vec()).collect();
/// assert_eq!(values, vec![vec![0, 1], vec![1, 0]]);
/// ```
pub fn find_configurations(groups: &[Group], n_groups: usize) -> Result<Configurations> {
    find_configurations_with(groups, n_groups, &EnumerationConfig::default())
}

/// Like [`find_configurations`], honoring `config`'s guards and options.
///
/// # Errors
///
/// As [`find_configurations`], plus
/// [`MineforgeError::Terminated`](mineforge_core::MineforgeError::Terminated)
/// when a guard fires.
///
/// # Example
///
/// ```
/// use mineforge::{find_configurations_with, EnumerationConfig, Group, MineforgeError};
///
/// let groups = vec![Group::unconstrained(3); 6];
///
/// let config = EnumerationConfig::new().with_node_limit(100);
/// let err = find_configurations_with(&groups, 6, &config).unwrap_err();
/// assert!(matches!(err, MineforgeError::Terminated(_)));
///
/// let found = find_configurations_with(&groups[..2], 2, &EnumerationConfig::new()).unwrap();
/// assert_eq!(found.count(), 16);
/// ```
pub fn find_configurations_with(
    groups: &[Group],
    n_groups: usize,
    config: &EnumerationConfig,
) -> Result<Configurations> {
    #[cfg(feature = "console")]
    mineforge_console::init();

    let problem = Problem::from_slice(groups, n_groups)?;
    let enumeration = ConfigurationEnumerator::new(config.clone()).enumerate(&problem)?;
    Ok(enumeration.into_configurations())
}
