//! Tree rendering for lazy expression graphs.

/// A node in a display tree.
///
/// Labels are owned strings so leaves that have no stable name of their own
/// (literals, frame references) can still render themselves.
pub trait TreeNode {
    /// One-line label for this node.
    fn label(&self) -> String;

    /// Child nodes, in argument order.
    fn tree_children(&self) -> Vec<&dyn TreeNode>;

    /// Optional annotation shown after the label (shape, cache state).
    fn annotation(&self) -> Option<String> {
        None
    }
}

/// Render a tree rooted at `node` using box-drawing connectors.
pub fn render_tree(node: &dyn TreeNode) -> String {
    let mut out = String::new();
    push_label(&mut out, node);
    out.push('\n');

    let children = node.tree_children();
    for (i, child) in children.iter().enumerate() {
        render_into(&mut out, *child, "", i == children.len() - 1);
    }
    out
}

fn render_into(out: &mut String, node: &dyn TreeNode, prefix: &str, is_last: bool) {
    out.push_str(prefix);
    out.push_str(if is_last { "└─ " } else { "├─ " });
    push_label(out, node);
    out.push('\n');

    let children = node.tree_children();
    let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
    for (i, child) in children.iter().enumerate() {
        render_into(out, *child, &child_prefix, i == children.len() - 1);
    }
}

fn push_label(out: &mut String, node: &dyn TreeNode) {
    out.push_str(&node.label());
    if let Some(ann) = node.annotation() {
        out.push_str(" [");
        out.push_str(&ann);
        out.push(']');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        label: String,
        annotation: Option<String>,
        children: Vec<TestNode>,
    }

    impl TestNode {
        fn leaf(label: &str) -> Self {
            Self {
                label: label.to_string(),
                annotation: None,
                children: vec![],
            }
        }
    }

    impl TreeNode for TestNode {
        fn label(&self) -> String {
            self.label.clone()
        }

        fn tree_children(&self) -> Vec<&dyn TreeNode> {
            self.children.iter().map(|c| c as &dyn TreeNode).collect()
        }

        fn annotation(&self) -> Option<String> {
            self.annotation.clone()
        }
    }

    #[test]
    fn test_render_tree() {
        let tree = TestNode {
            label: "append".to_string(),
            annotation: Some("2x3".to_string()),
            children: vec![TestNode::leaf("frames/iris"), TestNode::leaf("\"petal_len\"")],
        };

        let out = render_tree(&tree);
        assert!(out.starts_with("append [2x3]\n"));
        assert!(out.contains("├─ frames/iris"));
        assert!(out.contains("└─ \"petal_len\""));
    }

    #[test]
    fn test_render_nested() {
        let tree = TestNode {
            label: "cols_py".to_string(),
            annotation: None,
            children: vec![
                TestNode {
                    label: "append".to_string(),
                    annotation: None,
                    children: vec![TestNode::leaf("frames/iris")],
                },
                TestNode::leaf("1"),
            ],
        };

        let out = render_tree(&tree);
        // The nested frame leaf sits under the append branch.
        assert!(out.contains("├─ append\n│  └─ frames/iris"));
    }
}
