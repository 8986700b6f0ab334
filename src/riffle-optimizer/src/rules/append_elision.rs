//! Append elision rule: drop an append whose result a column selection
//! never observes.

use common_error::{RiffleError, RiffleResult};
use riffle_core::Value;
use riffle_expr::{ops, ExprNode};

use super::rule::OptimizationRule;

/// Rewrite `(cols_py (append dst col "name") idx)` to `(cols_py dst idx)`.
///
/// When `idx` is known to land strictly inside `dst`'s pre-existing
/// columns, the freshly appended column can never be the one selected, so
/// the backend need not materialize it at all.
///
/// # Legal when
///
/// - The `cols_py` node has exactly two arguments
/// - The first argument is an `append` with at least one argument
/// - The second argument is a non-negative integer (or integral float)
/// - `dst` has a valid cached column count and `idx` is strictly below it
///
/// The cached-shape requirement is a correctness guard, not a performance
/// nicety: with an unknown or stale column count, `idx` could name the
/// appended column itself, and eliding the append would change the result.
pub struct AppendElision;

const ELIDABLE_OPS: &[&str] = &[ops::COLS_PY];

impl OptimizationRule for AppendElision {
    fn name(&self) -> &'static str {
        "AppendElision"
    }

    fn description(&self) -> &'static str {
        "Drop an appended column from a selection that cannot observe it"
    }

    fn supported_ops(&self) -> &'static [&'static str] {
        ELIDABLE_OPS
    }

    fn is_applicable(&self, node: &ExprNode) -> bool {
        if node.narg() != 2 {
            return false;
        }

        let Some(inner) = node.children()[0].as_expr() else {
            return false;
        };
        if inner.op() != ops::APPEND || inner.narg() == 0 {
            return false;
        }

        let Some(index) = node.children()[1]
            .as_literal()
            .and_then(Value::as_index)
        else {
            return false;
        };
        if index < 0 {
            return false;
        }

        // Missing or invalidated shape metadata: conservatively refuse.
        let Some(ncols) = inner.children()[0].ncols() else {
            return false;
        };
        (index as usize) < ncols
    }

    fn rewrite(&self, node: &ExprNode) -> RiffleResult<ExprNode> {
        let inner = node.arg(0)?.as_expr().ok_or_else(|| {
            RiffleError::internal(
                "elision selected for cols_py whose first argument is not an expression",
            )
        })?;

        let dst = inner.arg(0)?.clone();
        let index = node.arg(1)?.clone();
        Ok(node.with_children(vec![dst, index]))
    }
}
