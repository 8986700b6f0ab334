//! Configuration management for the Riffle client.
//!
//! Provides runtime configuration for expression optimization and rendering.

use serde::{Deserialize, Serialize};

/// Global Riffle client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RiffleConfig {
    /// Expression optimizer configuration.
    pub optimizer: OptimizerSettings,
    /// Rendering configuration.
    pub render: RenderSettings,
}

/// Expression optimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerSettings {
    /// Whether expression rewriting is enabled at all.
    pub enabled: bool,
    /// Maximum number of whole-tree passes before stopping.
    pub max_passes: usize,
    /// Whether to record a trace of rule applications.
    pub trace: bool,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_passes: 10,
            trace: false,
        }
    }
}

/// Wire-text rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Maximum nesting depth accepted when rendering an expression.
    ///
    /// Trees deeper than this indicate a runaway construction loop on the
    /// client side; rendering fails rather than overflowing the stack.
    pub max_depth: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}
