mod api;

use pyo3::prelude::*;

/// mypackage: Python bindings for the minimal sample API.
#[pymodule]
fn mypackage(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("DEFAULT_FALLBACK", ::mypackage::DEFAULT_FALLBACK)?;

    m.add_function(wrap_pyfunction!(api::py_echo, m)?)?;

    Ok(())
}
