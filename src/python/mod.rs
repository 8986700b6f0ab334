//! Python bindings for Riffle.
//!
//! This module provides PyO3 bindings for the Riffle Python API, one
//! wrapper class per client-facing Rust type.

mod expressions;

use pyo3::prelude::*;

// Re-export types for use by other Rust code
pub use expressions::{PyExpr, PyFrame};

/// Register all Python bindings with the module.
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // ========== Core Classes ==========
    m.add_class::<PyFrame>()?;
    m.add_class::<PyExpr>()?;

    // ========== Expression Functions ==========
    m.add_function(wrap_pyfunction!(expressions::frame, m)?)?;
    m.add_function(wrap_pyfunction!(expressions::append, m)?)?;
    m.add_function(wrap_pyfunction!(expressions::cbind, m)?)?;
    m.add_function(wrap_pyfunction!(expressions::rbind, m)?)?;
    m.add_function(wrap_pyfunction!(expressions::cols, m)?)?;

    // ========== Optimizer Functions ==========
    m.add_function(wrap_pyfunction!(expressions::optimize, m)?)?;

    Ok(())
}
