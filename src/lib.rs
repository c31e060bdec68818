//! MargaEstimation - lane and odometry state estimation for differential
//! drive lane-following robots.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              lane_filter/   odometry/               │  ← Estimators
//! │      (histogram filter)    (dead reckoning)         │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                config/  error/                      │  ← Infrastructure
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Estimators
//!
//! - [`LaneFilterHistogram`]: discrete Bayesian histogram filter over the
//!   robot's lateral lane offset `d` and heading `phi`, updated from colored
//!   lane-marking segments. Publishes a belief grid, a centroid estimate,
//!   Shannon entropy, and a qualitative [`LaneStatus`].
//! - [`WheelOdometer`]: dead-reckoning pose and velocity from cumulative
//!   wheel-encoder tick counts, using exact differential-drive arc
//!   kinematics with encoder staleness handling.
//!
//! Both estimators are synchronous call-and-return components. Each instance
//! owns its state exclusively; there is no internal locking and no shared
//! global state, so independent instances can live on independent threads.

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Infrastructure (errors, configuration)
// ============================================================================
pub mod config;
pub mod error;

// ============================================================================
// Layer 3: Estimators (depend on core + infrastructure)
// ============================================================================
pub mod lane_filter;
pub mod odometry;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::math;
pub use crate::core::types::{LaneEstimate, LaneStatus, PoseEstimate, VelocityEstimate};
pub use crate::core::types::{Segment, SegmentColor, SegmentPoint};

pub use config::{EstimationConfig, LaneFilterConfig, WheelOdometerConfig};
pub use error::{ConfigError, Result};

pub use lane_filter::{LaneFilter, LaneFilterHistogram, LaneGrid};
pub use odometry::WheelOdometer;
