//! `mx-engine` - Representation-dispatched matrix multiplication.
//!
//! This crate provides:
//! - A `MultiplyEngine` that picks the fastest applicable kernel for the
//!   concrete representations of both operands and the destination
//! - Dense GEMM kernels over column-major buffers, row-major 2D buffers,
//!   and plain cell access, plus sparse-aware kernels for either operand
//! - A fork-join parallel column loop engaged above a configurable
//!   destination-size threshold
//! - An `Accelerator` trait for delegating large column-major products to
//!   an external implementation

pub mod accel;
pub mod config;
pub mod engine;
pub mod error;

mod kernels;
mod parallel;

// Re-export primary types at the crate root for convenience.
pub use accel::Accelerator;
pub use config::EngineConfig;
pub use engine::MultiplyEngine;
pub use error::{EngineError, Result};
