//! Estimator output types.
//!
//! Small value structs returned by value; every `get_estimate` call hands
//! out an independent snapshot.

use serde::{Deserialize, Serialize};

/// Planar pose in the frame the odometer started in.
///
/// `theta` accumulates without wrapping: two full left turns read `4π`, not
/// `0`. Consumers that need a normalized heading fold it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseEstimate {
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Accumulated heading in radians (not normalized)
    pub theta: f32,
}

impl PoseEstimate {
    /// Pose at the origin with zero heading.
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }
}

impl Default for PoseEstimate {
    fn default() -> Self {
        Self::origin()
    }
}

/// Instantaneous body velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityEstimate {
    /// Linear velocity in m/s
    pub v: f32,
    /// Angular velocity in rad/s
    pub w: f32,
}

impl VelocityEstimate {
    /// Create a new velocity estimate.
    #[inline]
    pub fn new(v: f32, w: f32) -> Self {
        Self { v, w }
    }

    /// Zero velocity.
    #[inline]
    pub fn zero() -> Self {
        Self { v: 0.0, w: 0.0 }
    }
}

/// Qualitative lane filter condition, derived from the belief on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaneStatus {
    /// No update has contributed evidence yet, or the most recent update
    /// carried none; the belief is pure prior.
    NoSignal,
    /// The estimate lies outside the configured safe bounds.
    Deviated,
    /// In-lane estimate backed by recent evidence.
    Good,
}

/// Full lane filter output snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneEstimate {
    /// Lateral offset from the lane center in meters
    pub d: f32,
    /// Heading relative to the lane direction in radians
    pub phi: f32,
    /// Shannon entropy of the belief in bits
    pub entropy: f32,
    /// Qualitative condition
    pub status: LaneStatus,
}
