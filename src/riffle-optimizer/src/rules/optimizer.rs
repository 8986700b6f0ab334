//! The optimizer driver: rule lookup, selection, and whole-tree rewriting.

use std::sync::Arc;

use common_config::OptimizerSettings;
use common_error::RiffleResult;
use log::debug;
use riffle_expr::{Arg, ExprNode};

use super::registry::RuleRegistry;
use super::rule::{get_optimizer, identity, OptimizationRule, OptimizedExpr, RuleTrace, Thunk};
use super::selector::{FirstMatch, RuleSelector};

/// Configuration for the optimizer driver.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Whether rewriting is enabled at all.
    pub enabled: bool,
    /// Maximum number of whole-tree passes before stopping.
    pub max_passes: usize,
    /// Whether to record a trace of rule applications.
    pub enable_trace: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_passes: 10,
            enable_trace: false,
        }
    }
}

impl From<&OptimizerSettings> for OptimizerConfig {
    fn from(settings: &OptimizerSettings) -> Self {
        Self {
            enabled: settings.enabled,
            max_passes: settings.max_passes,
            enable_trace: settings.trace,
        }
    }
}

impl OptimizerConfig {
    /// Set the maximum number of passes.
    pub fn with_max_passes(mut self, max: usize) -> Self {
        self.max_passes = max;
        self
    }

    /// Enable or disable tracing.
    pub fn with_trace(mut self, enable: bool) -> Self {
        self.enable_trace = enable;
        self
    }
}

/// The optimizer driver.
///
/// Owns an immutable rule registry and a selection strategy; holds no
/// per-call state, so one driver can serve a whole session.
///
/// Two entry points with different scopes:
///
/// - [`optimize`](Optimizer::optimize) considers only the root node and
///   returns a deferred rewrite, matching the shape of the serialization
///   call site that invokes it once per node.
/// - [`optimize_tree`](Optimizer::optimize_tree) applies rules bottom-up at
///   every node and iterates to a fixpoint (bounded by
///   [`OptimizerConfig::max_passes`]), so chains like a triple-nested
///   `cbind` flatten completely in one call.
pub struct Optimizer {
    registry: RuleRegistry,
    selector: Box<dyn RuleSelector>,
    config: OptimizerConfig,
}

impl Optimizer {
    /// Create an optimizer over the given registry with default config.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            selector: Box::new(FirstMatch),
            config: OptimizerConfig::default(),
        }
    }

    /// Create an optimizer with custom config.
    pub fn with_config(registry: RuleRegistry, config: OptimizerConfig) -> Self {
        Self {
            registry,
            selector: Box::new(FirstMatch),
            config,
        }
    }

    /// Create an optimizer from client settings, with the stock rule set.
    pub fn from_settings(settings: &OptimizerSettings) -> Self {
        Self::with_config(RuleRegistry::standard(), settings.into())
    }

    /// Replace the selection strategy.
    pub fn with_selector(mut self, selector: Box<dyn RuleSelector>) -> Self {
        self.selector = selector;
        self
    }

    /// The rule registry backing this driver.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Rules claiming the given operator, in registration order.
    pub fn get_optimization(&self, op: &str) -> Vec<Arc<dyn OptimizationRule>> {
        self.registry.candidates_for(op)
    }

    /// Look up a rewrite for the root node only.
    ///
    /// Returns `Ok(None)` when no registered rule applies; the caller falls
    /// back to [`identity`]. Fails with a `TypeError` when handed a
    /// structurally invalid node.
    pub fn optimize(&self, node: &ExprNode) -> RiffleResult<Option<Thunk>> {
        node.validate()?;

        if !self.config.enabled {
            return Ok(None);
        }

        let candidates = self.registry.candidates_for(node.op());
        match self.selector.select(&candidates, node) {
            Some(rule) => {
                debug!(
                    "rule '{}' selected for operator '{}'",
                    rule.name(),
                    node.op()
                );
                Ok(Some(get_optimizer(rule, node)))
            }
            None => Ok(None),
        }
    }

    /// Like [`optimize`](Optimizer::optimize), but always yields a thunk.
    pub fn optimize_or_identity(&self, node: &ExprNode) -> RiffleResult<Thunk> {
        Ok(self.optimize(node)?.unwrap_or_else(|| identity(node)))
    }

    /// Rewrite the whole tree bottom-up, iterating to a fixpoint.
    ///
    /// Each pass applies at most one rule per node (children before
    /// parents); passes repeat until nothing fires or the configured cap is
    /// reached.
    pub fn optimize_tree(&self, node: ExprNode) -> RiffleResult<OptimizedExpr> {
        node.validate()?;

        if !self.config.enabled {
            return Ok(OptimizedExpr::unchanged(node));
        }

        let mut current = node;
        let mut passes = 0;
        let mut rules_applied = 0;
        let mut trace = Vec::new();

        loop {
            if passes >= self.config.max_passes {
                debug!(
                    "optimizer reached max passes ({}), stopping",
                    self.config.max_passes
                );
                break;
            }

            passes += 1;
            let (next, applied) = self.apply_pass(&current, &mut trace)?;
            current = next;
            rules_applied += applied;

            if applied == 0 {
                debug!("no rewrites in pass {passes}, reached fixpoint");
                break;
            }
        }

        Ok(OptimizedExpr {
            expr: current,
            passes,
            rules_applied,
            trace,
        })
    }

    /// One bottom-up pass over the tree rooted at `node`.
    fn apply_pass(
        &self,
        node: &ExprNode,
        trace: &mut Vec<RuleTrace>,
    ) -> RiffleResult<(ExprNode, usize)> {
        let mut applied = 0;

        // Children first, so a parent sees its arguments already rewritten.
        let mut children = Vec::with_capacity(node.narg());
        for child in node.children() {
            match child {
                Arg::Expr(inner) => {
                    let (rewritten, count) = self.apply_pass(inner, trace)?;
                    applied += count;
                    children.push(Arg::Expr(rewritten));
                }
                other => children.push(other.clone()),
            }
        }
        let mut current = node.with_children(children);

        let candidates = self.registry.candidates_for(current.op());
        if let Some(rule) = self.selector.select(&candidates, &current) {
            let before = if self.config.enable_trace {
                current.to_rapids().unwrap_or_default()
            } else {
                String::new()
            };

            let rewritten = rule.rewrite(&current)?;
            debug!(
                "rule '{}' applied at operator '{}'",
                rule.name(),
                current.op()
            );

            if self.config.enable_trace {
                trace.push(RuleTrace::new(
                    rule.name(),
                    before,
                    rewritten.to_rapids().unwrap_or_default(),
                ));
            }

            current = rewritten;
            applied += 1;
        }

        Ok((current, applied))
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new(RuleRegistry::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EvalContext;
    use common_error::RiffleError;
    use riffle_core::FrameRef;
    use riffle_expr::{append, cbind, cols, ops};

    fn iris() -> FrameRef {
        FrameRef::with_shape("frames/iris", 150, 5)
    }

    #[test]
    fn test_optimize_returns_fold_thunk() {
        let optimizer = Optimizer::default();
        let node = append(append(iris(), "a", "col_a"), "b", "col_b");

        let thunk = optimizer.optimize(&node).unwrap().expect("fold applies");
        let rewritten = thunk(&EvalContext::default()).unwrap();
        assert_eq!(rewritten.narg(), 5);
    }

    #[test]
    fn test_optimize_none_for_unclaimed_operator() {
        let optimizer = Optimizer::default();
        let node = cols(iris(), 0).add(1i64);
        assert_eq!(node.op(), "+");

        assert!(optimizer.optimize(&node).unwrap().is_none());
        assert!(optimizer.get_optimization("+").is_empty());
    }

    #[test]
    fn test_optimize_rejects_malformed_node() {
        let optimizer = Optimizer::default();
        let node = ExprNode::new("", vec![]);

        let err = match optimizer.optimize(&node) {
            Ok(_) => panic!("called `Result::unwrap_err()` on an `Ok` value"),
            Err(e) => e,
        };
        assert!(matches!(err, RiffleError::TypeError(_)));
    }

    #[test]
    fn test_optimize_disabled() {
        let config = OptimizerConfig::default();
        let optimizer = Optimizer::with_config(
            RuleRegistry::standard(),
            OptimizerConfig {
                enabled: false,
                ..config
            },
        );

        let node = append(append(iris(), "a", "col_a"), "b", "col_b");
        assert!(optimizer.optimize(&node).unwrap().is_none());
    }

    #[test]
    fn test_optimize_or_identity_falls_back() {
        let optimizer = Optimizer::default();
        let node = cols(FrameRef::new("frames/pending"), 0);

        let thunk = optimizer.optimize_or_identity(&node).unwrap();
        let result = thunk(&EvalContext::default()).unwrap();
        assert_eq!(result, node);
    }

    #[test]
    fn test_optimize_tree_reaches_fixpoint() {
        let optimizer = Optimizer::default();
        let node = cbind(cbind(cbind(iris(), iris()), iris()), iris());

        let outcome = optimizer.optimize_tree(node).unwrap();
        assert_eq!(outcome.expr.op(), "cbind");
        assert_eq!(outcome.expr.narg(), 4);
        assert!(outcome
            .expr
            .children()
            .iter()
            .all(|c| c.as_expr().is_none()));
        // Children rewrite before parents, so the whole chain collapses in
        // one pass; the second pass observes quiescence.
        assert_eq!(outcome.rules_applied, 2);
        assert_eq!(outcome.passes, 2);
    }

    #[test]
    fn test_optimize_tree_respects_max_passes() {
        // A rule that never stops firing: the pass cap is the only brake.
        struct GrowForever;

        impl OptimizationRule for GrowForever {
            fn name(&self) -> &'static str {
                "GrowForever"
            }

            fn supported_ops(&self) -> &'static [&'static str] {
                &["tick"]
            }

            fn is_applicable(&self, _node: &ExprNode) -> bool {
                true
            }

            fn rewrite(&self, node: &ExprNode) -> RiffleResult<ExprNode> {
                let mut children = node.children().to_vec();
                children.push(riffle_expr::Arg::from(0i64));
                Ok(node.with_children(children))
            }
        }

        let config = OptimizerConfig::default().with_max_passes(3);
        let optimizer =
            Optimizer::with_config(RuleRegistry::new(vec![Arc::new(GrowForever)]), config);

        let node = ExprNode::new("tick", vec![]);
        let outcome = optimizer.optimize_tree(node).unwrap();

        assert_eq!(outcome.passes, 3);
        assert_eq!(outcome.rules_applied, 3);
        assert_eq!(outcome.expr.narg(), 3);
    }

    #[test]
    fn test_optimize_tree_disabled_returns_unchanged() {
        let settings = common_config::OptimizerSettings {
            enabled: false,
            ..Default::default()
        };
        let optimizer = Optimizer::from_settings(&settings);

        let node = cbind(cbind(iris(), iris()), iris());
        let outcome = optimizer.optimize_tree(node.clone()).unwrap();

        assert_eq!(outcome.expr, node);
        assert_eq!(outcome.passes, 0);
        assert_eq!(outcome.rules_applied, 0);
    }

    #[test]
    fn test_optimize_tree_trace() {
        let config = OptimizerConfig::default().with_trace(true);
        let optimizer = Optimizer::with_config(RuleRegistry::standard(), config);

        let node = append(append(iris(), "a", "col_a"), "b", "col_b");
        let outcome = optimizer.optimize_tree(node).unwrap();

        assert_eq!(outcome.trace.len(), 1);
        assert_eq!(outcome.trace[0].rule_name, "OperatorFolding");
        assert!(outcome.trace[0].before.contains("(append (append"));
        assert!(!outcome.trace[0].after.contains("(append (append"));
        assert!(outcome.format_trace().contains("OperatorFolding"));
    }

    #[test]
    fn test_optimize_tree_rewrites_nested_selection() {
        // Elision at the root exposes no further work; folding below the
        // root happens in the same pass because children rewrite first.
        let optimizer = Optimizer::default();
        let inner = append(append(iris(), "a", "col_a"), "b", "col_b");
        let node = cols(inner, 2);

        let outcome = optimizer.optimize_tree(node).unwrap();
        // After folding the nested append, elision drops it entirely.
        assert_eq!(
            outcome.expr.to_rapids().unwrap(),
            "(cols_py frames/iris 2)"
        );
    }

    #[test]
    fn test_custom_registry_in_driver() {
        let registry = RuleRegistry::new(vec![Arc::new(crate::rules::AppendElision)]);
        let optimizer = Optimizer::new(registry);

        // Folding is not registered, so a nested append is left alone.
        let node = append(append(iris(), "a", "col_a"), "b", "col_b");
        assert!(optimizer.optimize(&node).unwrap().is_none());
        assert!(optimizer.get_optimization(ops::APPEND).is_empty());
    }
}
