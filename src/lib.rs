use pyo3::prelude::*;

pub mod arith;
pub mod config;
pub mod error;

pub use config::{ModuleInfo, MODULE_NAME};
pub use error::{Error, Result};

/// Add two numbers
///
/// Returns `i + j`. Both arguments must fit a signed 32-bit integer and the
/// result wraps around on overflow.
#[pyfunction]
#[pyo3(name = "add")]
fn py_add(i: i32, j: i32) -> i32 {
    arith::add(i, j)
}

/// Subtract two numbers
///
/// Returns `i - j`. Both arguments must fit a signed 32-bit integer and the
/// result wraps around on overflow.
#[pyfunction]
#[pyo3(name = "subtract")]
fn py_subtract(i: i32, j: i32) -> i32 {
    arith::subtract(i, j)
}

/// Attaches metadata and entry points to `m`.
pub fn register(m: &Bound<'_, PyModule>) -> Result<()> {
    let info = ModuleInfo::from_build_env()?;
    tracing::debug!(module = info.name, version = info.version, "initializing module");

    // setattr rather than add: metadata stays out of `__all__`.
    m.setattr("__doc__", info.doc)?;
    m.setattr("__version__", info.version)?;

    m.add_function(wrap_pyfunction!(py_add, m)?)?;
    tracing::trace!(module = info.name, function = "add", "registered");
    m.add_function(wrap_pyfunction!(py_subtract, m)?)?;
    tracing::trace!(module = info.name, function = "subtract", "registered");

    Ok(())
}

#[pymodule]
fn tensorstore(m: &Bound<'_, PyModule>) -> PyResult<()> {
    Ok(register(m)?)
}
