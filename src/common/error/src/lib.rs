//! Error types and result aliases for Riffle.
//!
//! This module provides the core error handling infrastructure shared by
//! every Riffle crate.

mod error;
#[cfg(feature = "python")]
pub mod python;

pub use error::{GenericError, RiffleError, RiffleResult};
