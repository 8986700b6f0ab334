//! Expression optimizer for Riffle lazy trees.
//!
//! Rewrites client-built expression trees before they are rendered and
//! shipped to the backend. Every rewrite is strictly a cost improvement:
//! an optimized tree evaluates to the same result as the original, it just
//! avoids materializing intermediates the query never observes.

mod context;
mod rules;

#[cfg(test)]
mod proptest_tests;

pub use context::EvalContext;
pub use rules::{
    get_optimizer, identity, AppendElision, FirstMatch, OperatorFolding, OptimizationRule,
    OptimizedExpr, Optimizer, OptimizerConfig, RuleRegistry, RuleSelector, RuleTrace, Thunk,
};

use common_error::RiffleResult;
use riffle_expr::ExprNode;

/// Look up a rewrite for `node` using the stock rule set.
///
/// Returns `None` when no rule applies; callers fall back to [`identity`].
pub fn optimize(node: &ExprNode) -> RiffleResult<Option<Thunk>> {
    let optimizer = Optimizer::default();
    optimizer.optimize(node)
}
