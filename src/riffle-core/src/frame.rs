//! Named references to server-side frames.

use serde::{Deserialize, Serialize};

use crate::shape::ShapeCache;

/// A reference to a frame held by the backend, identified by its key.
///
/// The reference is purely nominal: no data lives on the client. The shape
/// cache travels with the reference so rewrite rules can reason about the
/// frame's column layout without a round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRef {
    key: String,
    cache: ShapeCache,
}

impl FrameRef {
    /// Create a reference to a frame whose shape is not yet known.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cache: ShapeCache::new(),
        }
    }

    /// Create a reference with a known shape.
    pub fn with_shape(key: impl Into<String>, nrows: u64, ncols: usize) -> Self {
        Self {
            key: key.into(),
            cache: ShapeCache::with_shape(nrows, ncols),
        }
    }

    /// The backend key naming this frame.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Shape metadata for this frame.
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Mutable shape metadata, for the evaluation layer to populate.
    pub fn cache_mut(&mut self) -> &mut ShapeCache {
        &mut self.cache
    }
}

impl std::fmt::Display for FrameRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
