//! Enumeration result type for Python API.

use pyo3::prelude::*;
use pyo3::types::PyList;

use mineforge_core::Configurations;
use mineforge_solver::EnumerationStats;

use crate::convert::configurations_to_py;

/// Configurations of one enumeration with its statistics.
#[pyclass(name = "Enumeration")]
pub struct PyEnumeration {
    #[pyo3(get)]
    pub count: usize,
    #[pyo3(get)]
    pub n_groups: usize,
    #[pyo3(get)]
    pub duration_ms: u64,
    #[pyo3(get)]
    pub layers: usize,
    #[pyo3(get)]
    pub branches_created: u64,
    #[pyo3(get)]
    pub branches_pruned: u64,
    #[pyo3(get)]
    pub peak_frontier: usize,
    #[pyo3(get)]
    pub islands: usize,
    pub(crate) configurations: Configurations,
}

impl PyEnumeration {
    pub fn new(configurations: Configurations, stats: &EnumerationStats) -> Self {
        Self {
            count: configurations.count(),
            n_groups: configurations.n_groups(),
            duration_ms: stats.elapsed.as_millis() as u64,
            layers: stats.layers,
            branches_created: stats.branches_created,
            branches_pruned: stats.branches_pruned,
            peak_frontier: stats.peak_frontier,
            islands: stats.islands,
            configurations,
        }
    }
}

#[pymethods]
impl PyEnumeration {
    /// All configurations as a list of tuples.
    fn configurations<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyList>> {
        configurations_to_py(py, &self.configurations)
    }

    fn __len__(&self) -> usize {
        self.count
    }

    fn __repr__(&self) -> String {
        format!(
            "Enumeration(count={}, n_groups={}, duration_ms={})",
            self.count, self.n_groups, self.duration_ms
        )
    }

    fn __str__(&self) -> String {
        self.configurations.to_string()
    }
}
