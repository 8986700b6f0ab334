//! Riffle - client-side lazy expression layer for a remote dataframe engine
//!
//! Riffle builds deferred expression trees from fluent frame operations,
//! rewrites them with a rule-based peephole optimizer, and renders them to
//! the backend's s-expression wire text. Shipping the text is the caller's
//! business; nothing in this crate performs I/O.

#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Re-export core crates
pub use common_config as config;
pub use common_display as display;
pub use common_error as error;
pub use riffle_core as core;
pub use riffle_expr as expr;
pub use riffle_optimizer as optimizer;

/// Riffle version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "python")]
mod python;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module for Riffle
///
/// The module is named `_riffle` to allow the Python wrapper package
/// to re-export with additional convenience functions.
#[cfg(feature = "python")]
#[pymodule]
fn _riffle(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", VERSION)?;

    // Register Python classes and functions
    python::register_module(m)?;

    Ok(())
}
