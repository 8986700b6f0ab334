//! Registry of available rewrite rules.

use std::sync::Arc;

use super::append_elision::AppendElision;
use super::operator_folding::OperatorFolding;
use super::rule::OptimizationRule;

/// An ordered, immutable collection of rewrite rules.
///
/// Built once and never mutated afterwards, so it is freely shareable
/// between threads. Registration order is significant: selection strategies
/// may use it as the tie-break (and the stock [`FirstMatch`] strategy does).
///
/// [`FirstMatch`]: crate::FirstMatch
pub struct RuleRegistry {
    rules: Vec<Arc<dyn OptimizationRule>>,
}

impl RuleRegistry {
    /// Create a registry from an explicit rule list.
    pub fn new(rules: Vec<Arc<dyn OptimizationRule>>) -> Self {
        Self { rules }
    }

    /// The stock rule set, in its canonical order.
    pub fn standard() -> Self {
        Self::new(vec![Arc::new(OperatorFolding), Arc::new(AppendElision)])
    }

    /// All registered rules, in registration order.
    pub fn rules(&self) -> &[Arc<dyn OptimizationRule>] {
        &self.rules
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules claiming the given operator, preserving registration order.
    pub fn candidates_for(&self, op: &str) -> Vec<Arc<dyn OptimizationRule>> {
        self.rules
            .iter()
            .filter(|rule| rule.supports(op))
            .cloned()
            .collect()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
