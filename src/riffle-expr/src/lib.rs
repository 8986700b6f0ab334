//! Lazy expression trees for the Riffle client.
//!
//! `riffle-expr` provides the deferred-computation layer: every frame
//! operation on the client builds an [`ExprNode`] instead of executing
//! anything. The resulting tree is rewritten by `riffle-optimizer` and then
//! rendered to the backend's s-expression wire text for shipping.
//!
//! # Overview
//!
//! - **Expression nodes**: an operator name over ordered, heterogeneous
//!   arguments (sub-expressions, frame references, literals)
//! - **Builders**: free functions and operator methods mirroring the client
//!   surface that produces these trees one call at a time
//! - **Rendering**: pure serialization to the wire text; no I/O happens in
//!   this crate
//!
//! # Example
//!
//! ```rust
//! use riffle_core::FrameRef;
//! use riffle_expr::{append, cols};
//!
//! let iris = FrameRef::with_shape("frames/iris", 150, 5);
//! let widened = append(iris.clone(), 1.5f64, "ratio");
//! let selected = cols(widened, 2);
//!
//! assert_eq!(selected.op(), riffle_expr::ops::COLS_PY);
//! assert_eq!(
//!     selected.to_rapids().unwrap(),
//!     "(cols_py (append frames/iris 1.5 \"ratio\") 2)"
//! );
//! ```

mod builder;
mod explain;
mod node;
pub mod ops;
mod render;

pub use builder::{append, call, cbind, cols, rbind};
pub use node::{Arg, ExprNode};
