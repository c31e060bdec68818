//! Lane position estimation from colored lane-marking segments.
//!
//! The pipeline: segments → vote histogram ([`measurement`]) → Bayesian
//! belief update ([`LaneFilterHistogram`]) over the quantized `(d, phi)`
//! domain ([`LaneGrid`]).

pub mod grid;
pub mod histogram;
pub mod measurement;

pub use grid::LaneGrid;
pub use histogram::LaneFilterHistogram;

use crate::core::types::Segment;

/// Lane state estimator interface.
///
/// One concrete implementation exists ([`LaneFilterHistogram`]); the trait
/// marks the seam where a particle-filter variant would plug in.
pub trait LaneFilter {
    /// Incorporate one frame of segments into the belief.
    fn update(&mut self, segments: &[Segment]);

    /// Current `(d, phi)` point estimate.
    fn get_estimate(&self) -> (f32, f32);

    /// Shannon entropy of the belief in bits.
    fn get_entropy(&self) -> f32;
}
