//! Shared value types.
//!
//! - [`SegmentPoint`], [`Segment`], [`SegmentColor`]: observed lane-marking
//!   fragments in the robot frame
//! - [`PoseEstimate`], [`VelocityEstimate`]: odometer outputs
//! - [`LaneEstimate`], [`LaneStatus`]: lane filter outputs

mod estimate;
mod segment;

pub use estimate::{LaneEstimate, LaneStatus, PoseEstimate, VelocityEstimate};
pub use segment::{Segment, SegmentColor, SegmentPoint};
