//! Rewrite rules for Riffle expression trees.
//!
//! A rewrite is legal only when the optimized tree is observationally
//! equivalent to the original: same rows, same columns, same values. The
//! rules here achieve that by construction:
//!
//! - **Operator folding**: flattening nested calls of an associative,
//!   list-accepting operator changes only how many intermediate frames the
//!   backend materializes, never the final concatenation.
//! - **Append elision**: a column selection that provably lands inside the
//!   pre-existing columns of a frame cannot observe a freshly appended
//!   column, so the append subtree can be dropped from that selection.
//!
//! Applicability checks are conservative: missing or stale shape metadata
//! means "do not rewrite", never "guess".

mod append_elision;
mod operator_folding;
mod optimizer;
mod registry;
mod rule;
mod selector;

pub use append_elision::AppendElision;
pub use operator_folding::OperatorFolding;
pub use optimizer::{Optimizer, OptimizerConfig};
pub use registry::RuleRegistry;
pub use rule::{get_optimizer, identity, OptimizationRule, OptimizedExpr, RuleTrace, Thunk};
pub use selector::{FirstMatch, RuleSelector};
