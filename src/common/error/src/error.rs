//! Core error types for Riffle.

use thiserror::Error;

/// Result type alias using `RiffleError`.
pub type RiffleResult<T> = std::result::Result<T, RiffleError>;

/// Generic boxed error for external error sources.
pub type GenericError = Box<dyn std::error::Error + Send + Sync>;

/// Core error type for Riffle operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RiffleError {
    /// Type mismatch or invalid type operation.
    #[error("TypeError: {0}")]
    TypeError(String),

    /// Invalid value provided.
    #[error("ValueError: {0}")]
    ValueError(String),

    /// Child index out of range for an expression node.
    #[error("IndexError: {0}")]
    IndexError(String),

    /// Frame shape metadata is missing or inconsistent.
    #[error("ShapeError: {0}")]
    ShapeError(String),

    /// Expression does not satisfy its operator's argument contract.
    #[error("MalformedExpr: {0}")]
    MalformedExpr(String),

    /// Feature not yet implemented.
    #[error("NotImplemented: {0}")]
    NotImplemented(String),

    /// Internal error (bug in Riffle).
    #[error("InternalError: {0}")]
    InternalError(String),

    /// IO error.
    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("SerdeJsonError: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// External error from third-party libraries.
    #[error("ExternalError: {0}")]
    ExternalError(GenericError),

    #[cfg(feature = "python")]
    /// Python interop error.
    #[error("PyO3Error: {0}")]
    PyO3Error(#[from] pyo3::PyErr),
}

impl RiffleError {
    /// Create a new `TypeError`.
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        Self::TypeError(msg.into())
    }

    /// Create a new `ValueError`.
    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::ValueError(msg.into())
    }

    /// Create a new `IndexError`.
    pub fn index_error<S: Into<String>>(msg: S) -> Self {
        Self::IndexError(msg.into())
    }

    /// Create a new `ShapeError`.
    pub fn shape_error<S: Into<String>>(msg: S) -> Self {
        Self::ShapeError(msg.into())
    }

    /// Create a new `MalformedExpr` error.
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedExpr(msg.into())
    }

    /// Create a new `NotImplemented` error.
    pub fn not_implemented<S: Into<String>>(msg: S) -> Self {
        Self::NotImplemented(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}

/// Ensure a condition holds, returning an `InternalError` if not.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:expr) => {
        if !$cond {
            return Err($crate::RiffleError::InternalError($msg.to_string()));
        }
    };
    ($cond:expr, $variant:ident: $($msg:tt)*) => {
        if !$cond {
            return Err($crate::RiffleError::$variant(format!($($msg)*)));
        }
    };
}

/// Return early with a `ValueError`.
#[macro_export]
macro_rules! value_err {
    ($($arg:tt)*) => {
        return Err($crate::RiffleError::ValueError(format!($($arg)*)))
    };
}

/// Return early with a `TypeError`.
#[macro_export]
macro_rules! type_err {
    ($($arg:tt)*) => {
        return Err($crate::RiffleError::TypeError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RiffleError::type_error("expected an expression node");
        assert_eq!(err.to_string(), "TypeError: expected an expression node");

        let err = RiffleError::index_error("arg 3 out of range for 2 children");
        assert_eq!(
            err.to_string(),
            "IndexError: arg 3 out of range for 2 children"
        );
    }

    #[test]
    fn test_error_constructors() {
        let _ = RiffleError::value_error("invalid value");
        let _ = RiffleError::shape_error("column count unknown");
        let _ = RiffleError::malformed("append with no children");
        let _ = RiffleError::not_implemented("feature X");
        let _ = RiffleError::internal("unexpected state");
    }

    #[test]
    fn test_ensure_macro() {
        fn check(n: usize) -> RiffleResult<()> {
            ensure!(n < 10, IndexError: "index {n} out of range");
            Ok(())
        }

        assert!(check(3).is_ok());
        let err = check(12).unwrap_err();
        assert!(matches!(err, RiffleError::IndexError(_)));
    }
}
