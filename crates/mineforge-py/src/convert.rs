//! Conversion utilities between Python and Rust types.

use pyo3::exceptions::{PyMemoryError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyList, PyTuple};

use mineforge_core::{Configurations, Group, MineforgeError, Number};

/// A number as passed from Python: `{"target": int, "spans": [int, ...]}`.
#[derive(Debug, FromPyObject)]
pub struct PyNumber {
    #[pyo3(item)]
    pub target: i64,
    #[pyo3(item)]
    pub spans: Vec<usize>,
}

/// A group as passed from Python: `{"max": int, "members": [number, ...]}`.
#[derive(Debug, FromPyObject)]
pub struct PyGroup {
    #[pyo3(item)]
    pub max: u32,
    #[pyo3(item)]
    pub members: Vec<PyNumber>,
}

/// Converts extracted Python groups into domain groups.
///
/// Nothing is validated here; validation happens once the whole sequence
/// is known.
pub fn to_groups(groups: Vec<PyGroup>) -> Vec<Group> {
    groups
        .into_iter()
        .map(|g| {
            let members = g
                .members
                .into_iter()
                .map(|nr| Number::new(nr.target, nr.spans))
                .collect();
            Group::new(g.max, members)
        })
        .collect()
}

/// Converts configurations into a list of int tuples.
pub fn configurations_to_py<'py>(
    py: Python<'py>,
    configurations: &Configurations,
) -> PyResult<Bound<'py, PyList>> {
    let tuples = configurations
        .iter()
        .map(|cfg| PyTuple::new(py, cfg.values()))
        .collect::<PyResult<Vec<_>>>()?;
    PyList::new(py, tuples)
}

/// Maps an enumeration error onto the matching Python exception.
pub fn to_py_err(err: MineforgeError) -> PyErr {
    match err {
        MineforgeError::InvalidInput(_) | MineforgeError::Config(_) => {
            PyValueError::new_err(err.to_string())
        }
        MineforgeError::Allocation { .. } => PyMemoryError::new_err(err.to_string()),
        MineforgeError::Terminated(_) => PyRuntimeError::new_err(err.to_string()),
    }
}
