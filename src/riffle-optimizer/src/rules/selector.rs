//! Rule selection strategies.

use std::sync::Arc;

use riffle_expr::ExprNode;

use super::rule::OptimizationRule;

/// Chooses which of the candidate rules, if any, to apply to a node.
///
/// Selection is its own seam so that a richer strategy (cost-based,
/// priority-tagged) can replace the flat scan without touching the driver,
/// once the rule set grows rules that overlap.
pub trait RuleSelector: Send + Sync {
    /// Pick a rule from `candidates` applicable to `node`, or `None`.
    ///
    /// `candidates` is already filtered by operator support and arrives in
    /// registration order.
    fn select(
        &self,
        candidates: &[Arc<dyn OptimizationRule>],
        node: &ExprNode,
    ) -> Option<Arc<dyn OptimizationRule>>;
}

/// The stock strategy: first applicable rule wins, in registration order.
pub struct FirstMatch;

impl RuleSelector for FirstMatch {
    fn select(
        &self,
        candidates: &[Arc<dyn OptimizationRule>],
        node: &ExprNode,
    ) -> Option<Arc<dyn OptimizationRule>> {
        candidates
            .iter()
            .find(|rule| rule.is_applicable(node))
            .cloned()
    }
}
