//! Lazily-populated shape metadata for frames and expression results.

use serde::{Deserialize, Serialize};

/// Cached row/column metadata for a frame or a pending expression result.
///
/// The cache is populated by the evaluation layer after a round-trip to the
/// backend; until then every field is unknown. Rewrite rules may read the
/// cache to make safe applicability decisions but never populate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeCache {
    nrows: Option<u64>,
    ncols: Option<usize>,
    names: Option<Vec<String>>,
}

impl ShapeCache {
    /// Create an empty cache with no known shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache with known row and column counts.
    pub fn with_shape(nrows: u64, ncols: usize) -> Self {
        Self {
            nrows: Some(nrows),
            ncols: Some(ncols),
            names: None,
        }
    }

    /// Whether the row count is known.
    pub fn nrows_valid(&self) -> bool {
        self.nrows.is_some()
    }

    /// Whether the column count is known.
    pub fn ncols_valid(&self) -> bool {
        self.ncols.is_some()
    }

    /// The cached row count, if known.
    pub fn nrows(&self) -> Option<u64> {
        self.nrows
    }

    /// The cached column count, if known.
    pub fn ncols(&self) -> Option<usize> {
        self.ncols
    }

    /// The cached column names, if known.
    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    /// Record the row count.
    pub fn set_nrows(&mut self, nrows: u64) {
        self.nrows = Some(nrows);
    }

    /// Record the column count.
    pub fn set_ncols(&mut self, ncols: usize) {
        self.ncols = Some(ncols);
    }

    /// Record the column names; also fixes the column count.
    pub fn set_names(&mut self, names: Vec<String>) {
        self.ncols = Some(names.len());
        self.names = Some(names);
    }

    /// Forget everything. Called when the underlying frame is mutated
    /// server-side and the client can no longer vouch for the shape.
    pub fn invalidate(&mut self) {
        self.nrows = None;
        self.ncols = None;
        self.names = None;
    }

    /// Short human-readable form for explain output, e.g. `150x5` or `?x?`.
    pub fn describe(&self) -> String {
        let rows = self
            .nrows
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        let cols = self
            .ncols
            .map_or_else(|| "?".to_string(), |n| n.to_string());
        format!("{rows}x{cols}")
    }
}
