//! Rendering expression trees to the backend's s-expression wire text.
//!
//! Rendering is pure string construction; whatever ships the text to the
//! backend lives outside this crate.

use common_config::RenderSettings;
use common_error::{RiffleError, RiffleResult};
use riffle_core::Value;

use crate::node::{Arg, ExprNode};

impl ExprNode {
    /// Render this tree to wire text with default settings.
    pub fn to_rapids(&self) -> RiffleResult<String> {
        self.render_rapids(&RenderSettings::default())
    }

    /// Render this tree to wire text, e.g.
    /// `(cols_py (append frames/iris 1.5 "ratio") 2)`.
    ///
    /// Fails with a `ValueError` when the tree is deeper than
    /// `settings.max_depth`; a tree that deep indicates a runaway
    /// construction loop, not a legitimate query.
    pub fn render_rapids(&self, settings: &RenderSettings) -> RiffleResult<String> {
        let mut out = String::new();
        render_node(self, &mut out, 0, settings.max_depth)?;
        Ok(out)
    }
}

impl std::fmt::Display for ExprNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_rapids() {
            Ok(text) => write!(f, "{text}"),
            Err(_) => write!(f, "({} ...)", self.op()),
        }
    }
}

fn render_node(
    node: &ExprNode,
    out: &mut String,
    depth: usize,
    max_depth: usize,
) -> RiffleResult<()> {
    if depth >= max_depth {
        return Err(RiffleError::value_error(format!(
            "expression tree exceeds maximum render depth of {max_depth}"
        )));
    }

    out.push('(');
    out.push_str(node.op());
    for child in node.children() {
        out.push(' ');
        match child {
            Arg::Expr(inner) => render_node(inner, out, depth + 1, max_depth)?,
            Arg::Frame(frame) => out.push_str(frame.key()),
            Arg::Literal(value) => render_value(value, out),
        }
    }
    out.push(')');
    Ok(())
}

/// Render a literal the way the backend parser expects it.
pub(crate) fn render_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("NA"),
        Value::Bool(true) => out.push_str("TRUE"),
        Value::Bool(false) => out.push_str("FALSE"),
        Value::Int64(i) => out.push_str(&i.to_string()),
        Value::Float64(f) => render_number(*f, out),
        Value::String(s) => render_string(s, out),
        Value::NumList(items) => {
            out.push('[');
            for (i, n) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render_number(*n, out);
            }
            out.push(']');
        }
        Value::StrList(items) => {
            out.push('[');
            for (i, s) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                render_string(s, out);
            }
            out.push(']');
        }
    }
}

fn render_number(f: f64, out: &mut String) {
    if f.is_nan() {
        out.push_str("NaN");
    } else {
        out.push_str(&f.to_string());
    }
}

fn render_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
}
