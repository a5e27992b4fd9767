//! Module-level enumeration functions.

use pyo3::prelude::*;
use pyo3::types::PyList;

use mineforge_config::EnumerationConfig;
use mineforge_core::{MineforgeError, Problem};
use mineforge_solver::{ConfigurationEnumerator, Enumeration};

use crate::convert::{configurations_to_py, to_groups, to_py_err, PyGroup};
use crate::result::PyEnumeration;

fn build_config(
    node_limit: Option<u64>,
    time_limit_ms: Option<u64>,
    split_islands: bool,
) -> EnumerationConfig {
    let mut config = EnumerationConfig::new().with_split_islands(split_islands);
    if let Some(limit) = node_limit {
        config = config.with_node_limit(limit);
    }
    if let Some(ms) = time_limit_ms {
        config = config.with_termination_millis(ms);
    }
    config
}

// Validates and enumerates without holding the GIL.
fn run(
    py: Python<'_>,
    groups: Vec<PyGroup>,
    n_groups: usize,
    config: EnumerationConfig,
) -> PyResult<Enumeration> {
    let groups = to_groups(groups);
    py.detach(move || {
        let problem = Problem::new(groups, n_groups).map_err(MineforgeError::from)?;
        ConfigurationEnumerator::new(config).enumerate(&problem)
    })
    .map_err(to_py_err)
}

/// Finds every mine configuration of the given groups.
///
/// Returns `(configurations, count)` where each configuration is a tuple
/// with one mine count per group. Raises `ValueError` for malformed
/// groups, `MemoryError` when the search cannot be held in memory and
/// `RuntimeError` when a node or time limit is hit.
#[pyfunction]
#[pyo3(signature = (groups, n_groups, *, node_limit = None, time_limit_ms = None, split_islands = false))]
pub fn find_configs<'py>(
    py: Python<'py>,
    groups: Vec<PyGroup>,
    n_groups: usize,
    node_limit: Option<u64>,
    time_limit_ms: Option<u64>,
    split_islands: bool,
) -> PyResult<(Bound<'py, PyList>, usize)> {
    let config = build_config(node_limit, time_limit_ms, split_islands);
    let configurations = run(py, groups, n_groups, config)?.into_configurations();
    Ok((configurations_to_py(py, &configurations)?, configurations.count()))
}

/// Like `find_configs`, but returns an `Enumeration` carrying statistics.
#[pyfunction]
#[pyo3(signature = (groups, n_groups, *, node_limit = None, time_limit_ms = None, split_islands = false))]
pub fn enumerate(
    py: Python<'_>,
    groups: Vec<PyGroup>,
    n_groups: usize,
    node_limit: Option<u64>,
    time_limit_ms: Option<u64>,
    split_islands: bool,
) -> PyResult<PyEnumeration> {
    let config = build_config(node_limit, time_limit_ms, split_islands);
    let (configurations, stats) = run(py, groups, n_groups, config)?.into_parts();
    Ok(PyEnumeration::new(configurations, &stats))
}

/// Routes enumeration events to a colored console on stdout.
#[pyfunction]
pub fn init_console() {
    mineforge_console::init();
}
