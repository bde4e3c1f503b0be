//! Division Core - Foundational types for the Division runtime
//!
//! This crate provides the types that the other Division crates depend on:
//! - `Lifecycle` - enable/active flags gating per-frame dispatch
//! - `Behaviour` - trait for per-frame updatable units attached to an entity
//! - Error types and Result alias

mod behaviour;
mod error;

pub use behaviour::{Behaviour, Lifecycle};
pub use error::{DivisionError, Result};
