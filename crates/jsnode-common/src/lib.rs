//! Common types and utilities for the jsnode emitter.
//!
//! This crate provides the foundational pieces shared by emitter crates:
//! - Host values that can be rendered as JavaScript literals (`Value`)
//! - Locale-free numeric rendering (`numeric`)
//! - Emitter limits and thresholds

// Host value model for literal rendering
pub mod value;
pub use value::Value;

// Number-to-text conversion following JavaScript's Number#toString
pub mod numeric;
pub use numeric::{format_float, format_int};

// Centralized limits and thresholds
pub mod limits;
