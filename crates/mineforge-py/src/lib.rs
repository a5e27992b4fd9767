//! Python bindings for MineForge.
//!
//! Exposes the configuration enumerator to Python: groups go in as plain
//! dicts and configurations come back as tuples of mine counts.

// Allow deprecated pyo3 APIs until we upgrade to a newer version
#![allow(deprecated)]

mod convert;
#[path = "enumerate.rs"]
mod enumerate_impl;
mod result;

use pyo3::prelude::*;

pub use enumerate_impl::{enumerate, find_configs, init_console};
pub use result::PyEnumeration;

/// MineForge native Python module.
#[pymodule]
fn mineforge_native(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_configs, m)?)?;
    m.add_function(wrap_pyfunction!(enumerate, m)?)?;
    m.add_function(wrap_pyfunction!(init_console, m)?)?;
    m.add_class::<PyEnumeration>()?;
    Ok(())
}
