//! Operator folding rule: flatten nested calls of a list-accepting operator.

use common_error::{RiffleError, RiffleResult};
use riffle_expr::{ops, ExprNode};

use super::rule::OptimizationRule;

/// Flatten `op(op(dst, a, ...), b, ...)` into one flat `op` call.
///
/// The target operators are logically n-ary even though the construction
/// API appends one item per call, so two nested calls of the same operator
/// produce the same frame as one flat call over the concatenated argument
/// list. Folding removes one materialized intermediate per application.
///
/// # Legal when
///
/// - The node has at least one argument
/// - The first argument is a nested expression with the same operator
///
/// # Example
///
/// Before:
/// ```text
/// (append (append dst a "name_a") b "name_b")
/// ```
///
/// After:
/// ```text
/// (append dst a "name_a" b "name_b")
/// ```
///
/// Exactly one flattening step per application: with three levels of
/// nesting only the outermost two collapse, and the next pass (or the next
/// call) picks up the rest.
pub struct OperatorFolding;

const FOLDABLE_OPS: &[&str] = &[ops::APPEND, ops::CBIND, ops::RBIND];

impl OptimizationRule for OperatorFolding {
    fn name(&self) -> &'static str {
        "OperatorFolding"
    }

    fn description(&self) -> &'static str {
        "Flatten a nested call of the same list-accepting operator"
    }

    fn supported_ops(&self) -> &'static [&'static str] {
        FOLDABLE_OPS
    }

    fn is_applicable(&self, node: &ExprNode) -> bool {
        if node.narg() == 0 {
            return false;
        }
        node.children()[0]
            .as_expr()
            .is_some_and(|inner| inner.op() == node.op())
    }

    fn rewrite(&self, node: &ExprNode) -> RiffleResult<ExprNode> {
        let inner = node.arg(0)?.as_expr().ok_or_else(|| {
            RiffleError::internal(format!(
                "fold selected for {} node whose first argument is not an expression",
                node.op()
            ))
        })?;

        let mut children = inner.children().to_vec();
        children.extend_from_slice(&node.children()[1..]);
        Ok(node.with_children(children))
    }
}
