//! Core data model for the Riffle client.
//!
//! This crate provides the fundamental types shared by the expression and
//! optimizer layers:
//! - `Value` for scalar and list literals carried in expression trees
//! - `ShapeCache` for lazily-populated row/column metadata
//! - `FrameRef` for named references to server-side frames

pub mod frame;
pub mod shape;
pub mod types;

// Re-export commonly used types
pub use frame::FrameRef;
pub use shape::ShapeCache;
pub use types::Value;
