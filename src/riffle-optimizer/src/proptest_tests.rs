//! Property-based tests for optimizer invariants.
//!
//! Rewrites must be semantics-preserving: same data paths, same selected
//! columns, deterministic rule choice for structurally identical input.

use proptest::prelude::*;

use riffle_core::{FrameRef, Value};
use riffle_expr::{append, cols, ops, Arg, ExprNode};

use crate::rules::{
    AppendElision, FirstMatch, OperatorFolding, OptimizationRule, RuleRegistry, RuleSelector,
};
use crate::{identity, EvalContext, Optimizer};

fn arb_foldable_op() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(ops::APPEND), Just(ops::CBIND), Just(ops::RBIND)]
}

fn arb_literal() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int64),
        "[a-z0-9_]{0,12}".prop_map(Value::String),
    ]
}

fn frame_arg(i: usize) -> Arg {
    Arg::from(FrameRef::with_shape(format!("frames/f{i}"), 10, 3))
}

proptest! {
    /// Folding concatenates the inner children with the outer tail, keeps
    /// the operator, and references exactly the same frames.
    #[test]
    fn prop_fold_concatenates_children(
        op in arb_foldable_op(),
        inner_n in 1usize..5,
        tail in prop::collection::vec(arb_literal(), 0..4),
    ) {
        let inner_children: Vec<Arg> = (0..inner_n).map(frame_arg).collect();
        let inner = ExprNode::new(op, inner_children.clone());

        let mut outer_children: Vec<Arg> = vec![inner.clone().into()];
        outer_children.extend(tail.iter().cloned().map(Arg::from));
        let node = ExprNode::new(op, outer_children);

        let rule = OperatorFolding;
        prop_assert!(rule.is_applicable(&node));

        let folded = rule.rewrite(&node).unwrap();
        prop_assert_eq!(folded.op(), op);

        let mut expected = inner_children;
        expected.extend(tail.into_iter().map(Arg::from));
        prop_assert_eq!(folded.children(), expected.as_slice());
        prop_assert_eq!(folded.frame_keys(), node.frame_keys());
    }

    /// The elision guard fires exactly when the index provably lands inside
    /// the destination's pre-existing columns, and the rewrite only drops
    /// data paths, never adds them.
    #[test]
    fn prop_elision_fires_iff_index_in_range(
        ncols in 1usize..200,
        idx in 0i64..250,
    ) {
        let dst = FrameRef::with_shape("frames/base", 10, ncols);
        let node = cols(append(dst.clone(), "dummy", "dummy_name"), idx);

        let rule = AppendElision;
        let fires = rule.is_applicable(&node);
        prop_assert_eq!(fires, (idx as usize) < ncols);

        if fires {
            let rewritten = rule.rewrite(&node).unwrap();
            prop_assert_eq!(&rewritten, &cols(dst, idx));
            prop_assert!(rewritten.frame_keys().is_subset(&node.frame_keys()));
        }
    }

    /// An operator with no registered rules always falls back to an
    /// identity thunk that returns the node untouched.
    #[test]
    fn prop_identity_on_unclaimed_operator(x in any::<i64>(), y in any::<i64>()) {
        let node = ExprNode::new(ops::ADD, vec![x.into(), y.into()]);

        let optimizer = Optimizer::default();
        prop_assert!(optimizer.optimize(&node).unwrap().is_none());

        let thunk = identity(&node);
        let result = thunk(&EvalContext::default()).unwrap();
        prop_assert_eq!(result, node);
    }

    /// Structurally identical nodes with identical cache state select the
    /// same rule (or none), regardless of being distinct instances.
    #[test]
    fn prop_selection_is_deterministic(
        op in arb_foldable_op(),
        nested in any::<bool>(),
    ) {
        let build = |key: &str| {
            let base = ExprNode::new(op, vec![Arg::from(FrameRef::with_shape(key, 10, 3))]);
            if nested {
                ExprNode::new(op, vec![base.into(), Arg::from(1i64)])
            } else {
                base
            }
        };

        // Same structure, separately constructed instances.
        let a = build("frames/same");
        let b = build("frames/same");

        let registry = RuleRegistry::standard();
        let pick = |node: &ExprNode| {
            FirstMatch
                .select(&registry.candidates_for(node.op()), node)
                .map(|rule| rule.name())
        };

        prop_assert_eq!(pick(&a), pick(&b));
    }
}
