//! Python bindings for Riffle errors.

use pyo3::exceptions::{PyIndexError, PyRuntimeError, PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::RiffleError;

impl From<RiffleError> for PyErr {
    fn from(err: RiffleError) -> Self {
        match err {
            RiffleError::TypeError(msg) => PyTypeError::new_err(msg),
            RiffleError::ValueError(msg) => PyValueError::new_err(msg),
            RiffleError::IndexError(msg) => PyIndexError::new_err(msg),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
