//! Core foundation layer.
//!
//! Bottom layer of the crate with no internal dependencies.
//!
//! # Contents
//!
//! - [`types`]: Shared value types (segments, estimates)
//! - [`math`]: Angle folding primitives

pub mod math;
pub mod types;
