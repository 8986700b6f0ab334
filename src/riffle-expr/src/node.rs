//! Expression node: one deferred operation in a lazy computation tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use common_error::{RiffleError, RiffleResult};
use riffle_core::{FrameRef, ShapeCache, Value};

/// One argument of an expression node.
///
/// Arguments are heterogeneous: a nested sub-expression, a reference to a
/// named server-side frame, or a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Arg {
    /// A nested sub-expression.
    Expr(ExprNode),
    /// A reference to a named frame.
    Frame(FrameRef),
    /// A scalar or list literal.
    Literal(Value),
}

impl Arg {
    /// Try to get as a nested expression node.
    pub fn as_expr(&self) -> Option<&ExprNode> {
        match self {
            Self::Expr(node) => Some(node),
            _ => None,
        }
    }

    /// Try to get as a frame reference.
    pub fn as_frame(&self) -> Option<&FrameRef> {
        match self {
            Self::Frame(frame) => Some(frame),
            _ => None,
        }
    }

    /// Try to get as a literal value.
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// The cached column count of the frame this argument stands for, if the
    /// argument is frame-shaped and its shape cache is valid.
    pub fn ncols(&self) -> Option<usize> {
        match self {
            Self::Expr(node) => node.cache().ncols(),
            Self::Frame(frame) => frame.cache().ncols(),
            Self::Literal(_) => None,
        }
    }

    /// Kind name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Expr(_) => "expression",
            Self::Frame(_) => "frame",
            Self::Literal(_) => "literal",
        }
    }
}

impl From<ExprNode> for Arg {
    fn from(node: ExprNode) -> Self {
        Self::Expr(node)
    }
}

impl From<FrameRef> for Arg {
    fn from(frame: FrameRef) -> Self {
        Self::Frame(frame)
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

macro_rules! arg_from_literal {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Arg {
                fn from(value: $t) -> Self {
                    Self::Literal(Value::from(value))
                }
            }
        )*
    };
}

arg_from_literal!(bool, i32, i64, usize, f32, f64, String, &str);

/// One deferred operation over ordered arguments.
///
/// Nodes are built by the fluent layer one call at a time and are not
/// evaluated on the client. Rewrite rules never mutate a node; they build a
/// replacement with [`ExprNode::with_children`], so a subtree shared between
/// parents stays intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprNode {
    op: String,
    children: Vec<Arg>,
    cache: ShapeCache,
}

impl ExprNode {
    /// Create a node for `op` over `children`.
    pub fn new(op: impl Into<String>, children: Vec<Arg>) -> Self {
        Self {
            op: op.into(),
            children,
            cache: ShapeCache::new(),
        }
    }

    /// The operator name.
    pub fn op(&self) -> &str {
        &self.op
    }

    /// The arguments, in call order.
    pub fn children(&self) -> &[Arg] {
        &self.children
    }

    /// Number of arguments.
    pub fn narg(&self) -> usize {
        self.children.len()
    }

    /// The `i`-th argument.
    ///
    /// An out-of-range index signals a bug in the caller's own structure
    /// checks, so this is an error rather than an `Option`.
    pub fn arg(&self, i: usize) -> RiffleResult<&Arg> {
        self.children.get(i).ok_or_else(|| {
            RiffleError::index_error(format!(
                "arg {i} out of range for {} node with {} children",
                self.op,
                self.children.len()
            ))
        })
    }

    /// Shape metadata for this node's pending result.
    pub fn cache(&self) -> &ShapeCache {
        &self.cache
    }

    /// Mutable shape metadata, for the evaluation layer to populate.
    pub fn cache_mut(&mut self) -> &mut ShapeCache {
        &mut self.cache
    }

    /// Build a replacement node with the same operator and shape cache but
    /// different children.
    ///
    /// After replacement the children must still satisfy the operator's
    /// argument contract; rules preserve this by construction.
    pub fn with_children(&self, children: Vec<Arg>) -> Self {
        Self {
            op: self.op.clone(),
            children,
            cache: self.cache.clone(),
        }
    }

    /// Structural validation of the node itself (not its operator contract).
    pub fn validate(&self) -> RiffleResult<()> {
        if self.op.is_empty() {
            return Err(RiffleError::type_error(
                "expression node has an empty operator name",
            ));
        }
        Ok(())
    }

    /// Keys of every frame referenced anywhere in this tree.
    ///
    /// Two trees that reference the same keys read the same data paths; the
    /// test suite uses this to check that rewrites never reach for data the
    /// original expression would not have touched.
    pub fn frame_keys(&self) -> BTreeSet<String> {
        let mut keys = BTreeSet::new();
        self.collect_frame_keys(&mut keys);
        keys
    }

    fn collect_frame_keys(&self, keys: &mut BTreeSet<String>) {
        for child in &self.children {
            match child {
                Arg::Expr(node) => node.collect_frame_keys(keys),
                Arg::Frame(frame) => {
                    keys.insert(frame.key().to_string());
                }
                Arg::Literal(_) => {}
            }
        }
    }
}
