//! Measurement model: colored segments → per-bin vote histogram.
//!
//! Each usable segment casts one length-weighted vote for a `(d, phi)`
//! hypothesis. Votes are split bilinearly across the neighboring bins so
//! that clean input recovers sub-bin accuracy from the belief centroid.

use crate::config::LaneFilterConfig;
use crate::core::math::fold_to_half_turn;
use crate::core::types::{Segment, SegmentColor};
use crate::lane_filter::grid::LaneGrid;

/// Segments shorter than this are degenerate and cast no vote.
const MIN_SEGMENT_LENGTH: f32 = 1e-6;

/// Accumulate votes from one frame of segments.
///
/// Returns an all-zero histogram when no segment is usable.
pub(crate) fn vote_histogram(
    grid: &LaneGrid,
    config: &LaneFilterConfig,
    segments: &[Segment],
) -> Vec<f32> {
    let mut votes = vec![0.0; grid.len()];
    for segment in segments {
        if let Some((d, phi, weight)) = segment_vote(config, segment) {
            deposit(grid, &mut votes, d, phi, weight);
        }
    }
    votes
}

/// Project one segment into a `(d, phi, weight)` vote.
///
/// The marking's support line is described by its folded direction angle
/// `a ∈ (-π/2, π/2]` and the signed lateral position `n · midpoint` of the
/// line (positive left of the robot). Both are invariant under endpoint
/// order and under translation along the forward axis, which is what makes
/// the estimate distance-independent.
///
/// A robot at lane offset `d` sees the white centerline at lateral
/// `-d - lane_width/2` and the yellow centerline at `-d + lane_width/2`;
/// solving for `d` gives the per-color vote below. The heading vote is the
/// negated apparent rotation of the marking.
fn segment_vote(config: &LaneFilterConfig, segment: &Segment) -> Option<(f32, f32, f32)> {
    let [p0, p1] = segment.points;
    let length = segment.length();
    if length < MIN_SEGMENT_LENGTH {
        return None;
    }

    let a = fold_to_half_turn((p1.y - p0.y).atan2(p1.x - p0.x));
    let (sin_a, cos_a) = a.sin_cos();
    let mid_x = (p0.x + p1.x) * 0.5;
    let mid_y = (p0.y + p1.y) * 0.5;
    // Signed distance of the support line from the robot, along the folded
    // normal (-sin a, cos a)
    let lateral = cos_a * mid_y - sin_a * mid_x;

    let half_lane = config.lane_width * 0.5;
    let (d, side_mismatch) = match segment.color {
        SegmentColor::White => (-(lateral + half_lane), lateral > half_lane),
        SegmentColor::Yellow => (-(lateral - half_lane), lateral < -half_lane),
        SegmentColor::Red | SegmentColor::Other => return None,
    };

    // Longer segments are more reliable detections
    let mut weight = length;
    if side_mismatch {
        weight *= config.side_mismatch_weight;
    }

    Some((d, -a, weight))
}

/// Bilinearly spread a weighted vote across the up-to-4 neighboring bins.
fn deposit(grid: &LaneGrid, votes: &mut [f32], d: f32, phi: f32, weight: f32) {
    for (d_bin, d_weight) in grid.d_split(d) {
        for (phi_bin, phi_weight) in grid.phi_split(phi) {
            votes[grid.cell(d_bin, phi_bin)] += weight * d_weight * phi_weight;
        }
    }
}
