use mypackage::DEFAULT_FALLBACK;
use pyo3::prelude::*;

/// Return the input string, or a fallback when it is None.
///
/// Args:
///     value: Input value, or None.
///     fallback: Returned when `value` is None. Defaults to "default".
///
/// Returns:
///     The original value when provided; otherwise the fallback.
///
/// Example:
///     >>> from mypackage import echo
///     >>> echo("hi", "fallback")
///     'hi'
///     >>> echo(None)
///     'default'
#[pyfunction]
#[pyo3(name = "echo", signature = (value, fallback = DEFAULT_FALLBACK))]
pub fn py_echo(value: Option<&str>, fallback: &str) -> String {
    mypackage::echo(value, fallback).to_owned()
}
