//! Evaluation context handed to rewrite thunks.

use common_config::RiffleConfig;

/// Context supplied by the evaluation layer when a thunk is invoked.
///
/// The rewrite rules themselves ignore it; it exists so the thunk signature
/// matches the layer that will eventually render and ship the tree, which
/// does carry per-session state.
#[derive(Debug, Clone, Default)]
pub struct EvalContext {
    config: RiffleConfig,
}

impl EvalContext {
    /// Create a context carrying the given client configuration.
    pub fn new(config: RiffleConfig) -> Self {
        Self { config }
    }

    /// The client configuration for this session.
    pub fn config(&self) -> &RiffleConfig {
        &self.config
    }
}
