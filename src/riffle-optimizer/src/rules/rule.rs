//! Optimization rule trait and rewrite framework.

use std::sync::Arc;

use common_error::RiffleResult;
use riffle_expr::ExprNode;

use crate::context::EvalContext;

/// A deferred rewrite: invoked later by the evaluation layer, with the
/// session context, to produce the node that actually gets rendered.
///
/// Separating "deciding a rewrite is legal" from "performing it" keeps the
/// decision inside the single-threaded construction path while the rewrite
/// itself can happen at ship time.
pub type Thunk = Box<dyn FnOnce(&EvalContext) -> RiffleResult<ExprNode> + Send>;

/// A single rewrite over one expression node.
///
/// Rules are stateless: constructed once, held in a read-only registry, and
/// shared freely between threads. `is_applicable` is a pure predicate over
/// the subtree; it must return `false` for every node it cannot rewrite and
/// must never mutate anything.
pub trait OptimizationRule: Send + Sync {
    /// Get the name of this rule.
    fn name(&self) -> &'static str;

    /// Get a description of what this rule does.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Operator names this rule may fire on.
    fn supported_ops(&self) -> &'static [&'static str];

    /// Whether this rule may fire on the given operator.
    fn supports(&self, op: &str) -> bool {
        self.supported_ops().contains(&op)
    }

    /// Whether this rule applies to this exact node.
    ///
    /// Inapplicability is the normal negative case, not an error: a missing
    /// substructure, a wrong argument count, or an invalid shape cache all
    /// yield `false`.
    fn is_applicable(&self, node: &ExprNode) -> bool;

    /// Build the rewritten node.
    ///
    /// Callers must have just observed `is_applicable(node) == true`; an
    /// error here means the applicability check lied and signals a bug in
    /// the rule itself. The input node is never mutated.
    fn rewrite(&self, node: &ExprNode) -> RiffleResult<ExprNode>;
}

/// Package a rule application as a deferred thunk capturing the node.
pub fn get_optimizer(rule: Arc<dyn OptimizationRule>, node: &ExprNode) -> Thunk {
    let node = node.clone();
    Box::new(move |_ctx: &EvalContext| rule.rewrite(&node))
}

/// The identity thunk: returns the node unchanged.
///
/// The fallback for callers when no rule applies; shipping the original
/// tree is always correct, just possibly slower.
pub fn identity(node: &ExprNode) -> Thunk {
    let node = node.clone();
    Box::new(move |_ctx: &EvalContext| Ok(node))
}

/// A trace entry for a single rule application.
#[derive(Debug, Clone)]
pub struct RuleTrace {
    /// The name of the rule that was applied.
    pub rule_name: String,
    /// Wire text of the node before the rewrite.
    pub before: String,
    /// Wire text of the node after the rewrite.
    pub after: String,
}

impl RuleTrace {
    /// Create a new trace entry.
    pub fn new(
        rule_name: impl Into<String>,
        before: impl Into<String>,
        after: impl Into<String>,
    ) -> Self {
        Self {
            rule_name: rule_name.into(),
            before: before.into(),
            after: after.into(),
        }
    }
}

/// The result of whole-tree optimization with optional trace information.
#[derive(Debug, Clone)]
pub struct OptimizedExpr {
    /// The final rewritten expression.
    pub expr: ExprNode,
    /// Number of bottom-up passes performed.
    pub passes: usize,
    /// Number of rule applications across all passes.
    pub rules_applied: usize,
    /// Detailed trace of rule applications (if tracing was enabled).
    pub trace: Vec<RuleTrace>,
}

impl OptimizedExpr {
    /// Wrap an expression that no pass touched.
    pub fn unchanged(expr: ExprNode) -> Self {
        Self {
            expr,
            passes: 0,
            rules_applied: 0,
            trace: Vec::new(),
        }
    }

    /// Format the trace as a human-readable string.
    pub fn format_trace(&self) -> String {
        let mut output = format!(
            "Optimization completed in {} passes, {} rules applied\n",
            self.passes, self.rules_applied
        );

        if self.trace.is_empty() {
            output.push_str("  (no trace available)\n");
        } else {
            for (i, entry) in self.trace.iter().enumerate() {
                output.push_str(&format!(
                    "\n--- Rule {} applied: {} ---\n",
                    i + 1,
                    entry.rule_name
                ));
                output.push_str("Before:\n");
                output.push_str(&entry.before);
                output.push_str("\nAfter:\n");
                output.push_str(&entry.after);
                output.push('\n');
            }
        }

        output
    }
}
