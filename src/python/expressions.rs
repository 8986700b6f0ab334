//! Python bindings for expression trees.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;

use riffle_core::{FrameRef, Value};
use riffle_expr::{Arg, ExprNode};
use riffle_optimizer::Optimizer;

/// Python wrapper for a named frame reference.
#[pyclass(name = "Frame")]
#[derive(Clone)]
pub struct PyFrame {
    pub(crate) inner: FrameRef,
}

#[pymethods]
impl PyFrame {
    #[new]
    #[pyo3(signature = (key, nrows=None, ncols=None))]
    fn new(key: &str, nrows: Option<u64>, ncols: Option<usize>) -> Self {
        let mut inner = FrameRef::new(key);
        if let Some(nrows) = nrows {
            inner.cache_mut().set_nrows(nrows);
        }
        if let Some(ncols) = ncols {
            inner.cache_mut().set_ncols(ncols);
        }
        Self { inner }
    }

    /// The backend key naming this frame.
    fn key(&self) -> String {
        self.inner.key().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Frame({})", self.inner.key())
    }
}

/// Python wrapper for a deferred expression tree.
#[pyclass(name = "Expr")]
#[derive(Clone)]
pub struct PyExpr {
    pub(crate) inner: ExprNode,
}

#[pymethods]
impl PyExpr {
    /// The operator name of the root node.
    fn op(&self) -> String {
        self.inner.op().to_string()
    }

    /// Number of arguments of the root node.
    fn narg(&self) -> usize {
        self.inner.narg()
    }

    /// Render to the backend wire text.
    fn to_rapids(&self) -> PyResult<String> {
        Ok(self.inner.to_rapids()?)
    }

    /// Tree-formatted explain listing.
    fn explain(&self) -> String {
        self.inner.explain()
    }

    fn __repr__(&self) -> String {
        format!("Expr({})", self.inner)
    }
}

/// Convert a Python argument into an expression argument.
fn to_arg(obj: &Bound<'_, PyAny>) -> PyResult<Arg> {
    if let Ok(expr) = obj.extract::<PyExpr>() {
        return Ok(Arg::Expr(expr.inner));
    }
    if let Ok(frame) = obj.extract::<PyFrame>() {
        return Ok(Arg::Frame(frame.inner));
    }
    if obj.is_none() {
        return Ok(Arg::Literal(Value::Null));
    }
    // bool before int: a Python bool also extracts as an integer.
    if let Ok(b) = obj.extract::<bool>() {
        return Ok(Arg::Literal(Value::Bool(b)));
    }
    if let Ok(i) = obj.extract::<i64>() {
        return Ok(Arg::Literal(Value::Int64(i)));
    }
    if let Ok(f) = obj.extract::<f64>() {
        return Ok(Arg::Literal(Value::Float64(f)));
    }
    if let Ok(s) = obj.extract::<String>() {
        return Ok(Arg::Literal(Value::String(s)));
    }
    Err(PyTypeError::new_err(format!(
        "cannot use {} as an expression argument",
        obj.get_type()
    )))
}

/// Create a reference to a named frame, optionally with a known shape.
#[pyfunction]
#[pyo3(signature = (key, nrows=None, ncols=None))]
pub fn frame(key: &str, nrows: Option<u64>, ncols: Option<usize>) -> PyFrame {
    PyFrame::new(key, nrows, ncols)
}

/// Append a column to a frame under a new name.
#[pyfunction]
pub fn append(dst: &Bound<'_, PyAny>, col: &Bound<'_, PyAny>, name: &str) -> PyResult<PyExpr> {
    Ok(PyExpr {
        inner: riffle_expr::append(to_arg(dst)?, to_arg(col)?, name),
    })
}

/// Column-wise concatenation of two frames.
#[pyfunction]
pub fn cbind(left: &Bound<'_, PyAny>, right: &Bound<'_, PyAny>) -> PyResult<PyExpr> {
    Ok(PyExpr {
        inner: riffle_expr::cbind(to_arg(left)?, to_arg(right)?),
    })
}

/// Row-wise concatenation of two frames.
#[pyfunction]
pub fn rbind(top: &Bound<'_, PyAny>, bottom: &Bound<'_, PyAny>) -> PyResult<PyExpr> {
    Ok(PyExpr {
        inner: riffle_expr::rbind(to_arg(top)?, to_arg(bottom)?),
    })
}

/// Column selection by index.
#[pyfunction]
pub fn cols(src: &Bound<'_, PyAny>, index: i64) -> PyResult<PyExpr> {
    Ok(PyExpr {
        inner: riffle_expr::cols(to_arg(src)?, index),
    })
}

/// Rewrite a whole expression tree with the stock rule set.
#[pyfunction]
pub fn optimize(expr: &PyExpr) -> PyResult<PyExpr> {
    let optimizer = Optimizer::default();
    let outcome = optimizer.optimize_tree(expr.inner.clone())?;
    Ok(PyExpr {
        inner: outcome.expr,
    })
}
