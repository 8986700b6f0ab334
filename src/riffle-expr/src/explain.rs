//! Tree-formatted explain output for expression trees.

use common_display::{render_tree, TreeNode};

use crate::node::{Arg, ExprNode};
use crate::render::render_value;

impl ExprNode {
    /// Render this tree as an indented explain listing for debugging.
    pub fn explain(&self) -> String {
        render_tree(self)
    }
}

impl TreeNode for ExprNode {
    fn label(&self) -> String {
        self.op().to_string()
    }

    fn tree_children(&self) -> Vec<&dyn TreeNode> {
        self.children().iter().map(|c| c as &dyn TreeNode).collect()
    }

    fn annotation(&self) -> Option<String> {
        if self.cache().nrows_valid() || self.cache().ncols_valid() {
            Some(self.cache().describe())
        } else {
            None
        }
    }
}

impl TreeNode for Arg {
    fn label(&self) -> String {
        match self {
            Self::Expr(node) => node.label(),
            Self::Frame(frame) => frame.key().to_string(),
            Self::Literal(value) => {
                let mut out = String::new();
                render_value(value, &mut out);
                out
            }
        }
    }

    fn tree_children(&self) -> Vec<&dyn TreeNode> {
        match self {
            Self::Expr(node) => node.tree_children(),
            _ => vec![],
        }
    }

    fn annotation(&self) -> Option<String> {
        match self {
            Self::Expr(node) => node.annotation(),
            Self::Frame(frame) => {
                if frame.cache().nrows_valid() || frame.cache().ncols_valid() {
                    Some(frame.cache().describe())
                } else {
                    None
                }
            }
            Self::Literal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{append, cols};
    use riffle_core::FrameRef;

    #[test]
    fn test_explain_output() {
        let iris = FrameRef::with_shape("frames/iris", 150, 5);
        let node = cols(append(iris, "dummy", "ratio"), 2);

        let out = node.explain();
        assert!(out.starts_with("cols_py\n"));
        assert!(out.contains("├─ append"));
        assert!(out.contains("frames/iris [150x5]"));
        assert!(out.contains("└─ 2"));
    }

    #[test]
    fn test_explain_unknown_shape() {
        let node = cols(FrameRef::new("frames/pending"), 0);
        let out = node.explain();

        // No annotation when the cache is empty.
        assert!(out.contains("frames/pending\n"));
        assert!(!out.contains("frames/pending ["));
    }
}
