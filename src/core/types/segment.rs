//! Lane-marking segment types.

use serde::{Deserialize, Serialize};

/// A 2D point in the robot's local frame (x forward, y left), meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentPoint {
    /// Forward coordinate in meters
    pub x: f32,
    /// Leftward coordinate in meters
    pub y: f32,
}

impl SegmentPoint {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Color of an observed lane marking.
///
/// White tape marks the right lane boundary, yellow the left/center
/// boundary. Other colors carry no lane-position information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentColor {
    /// Right lane boundary
    White,
    /// Left/center lane boundary
    Yellow,
    /// Stop line or intersection marking (ignored by the filter)
    Red,
    /// Unclassified marking (ignored by the filter)
    Other,
}

/// An observed straight fragment of a lane marking.
///
/// The endpoint order carries no meaning; the measurement model treats the
/// segment as an undirected line fragment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// The two endpoints in the robot frame.
    pub points: [SegmentPoint; 2],
    /// Observed marking color.
    pub color: SegmentColor,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub fn new(p0: SegmentPoint, p1: SegmentPoint, color: SegmentColor) -> Self {
        Self {
            points: [p0, p1],
            color,
        }
    }

    /// Euclidean length of the segment in meters.
    #[inline]
    pub fn length(&self) -> f32 {
        let dx = self.points[1].x - self.points[0].x;
        let dy = self.points[1].y - self.points[0].y;
        (dx * dx + dy * dy).sqrt()
    }
}
