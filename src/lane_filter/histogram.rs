//! Bayesian histogram filter over the `(d, phi)` lane state.

use log::{debug, trace};

use crate::config::LaneFilterConfig;
use crate::core::types::{LaneEstimate, LaneStatus, Segment};
use crate::error::{ConfigError, Result};
use crate::lane_filter::grid::LaneGrid;
use crate::lane_filter::measurement::vote_histogram;
use crate::lane_filter::LaneFilter;

/// Histogram lane filter.
///
/// Maintains a dense belief over the quantized `(d, phi)` domain. Each
/// `update` multiplies the prior belief with the normalized measurement
/// histogram and renormalizes (discrete Bayes update). The belief always
/// sums to 1; a frame without usable evidence leaves it untouched.
///
/// The belief grid, bin center/edge arrays, entropy, and status are
/// published read-only for an external rendering consumer. The filter never
/// depends on that consumer.
#[derive(Debug)]
pub struct LaneFilterHistogram {
    config: LaneFilterConfig,
    grid: LaneGrid,
    belief: Vec<f32>,
    has_signal: bool,
}

impl LaneFilterHistogram {
    /// Create a filter with a uniform initial belief.
    pub fn new(config: LaneFilterConfig) -> Result<Self> {
        if config.lane_width <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "lane_width",
                value: config.lane_width,
            });
        }
        let grid = LaneGrid::new(&config)?;
        let uniform = 1.0 / grid.len() as f32;
        let belief = vec![uniform; grid.len()];
        Ok(Self {
            config,
            grid,
            belief,
            has_signal: false,
        })
    }

    /// Filter configuration.
    #[inline]
    pub fn config(&self) -> &LaneFilterConfig {
        &self.config
    }

    /// The bin lattice (centers and edges, for rendering).
    #[inline]
    pub fn grid(&self) -> &LaneGrid {
        &self.grid
    }

    /// Current belief, row-major over `d` then `phi`. Read-only view; sums
    /// to 1.
    #[inline]
    pub fn belief(&self) -> &[f32] {
        &self.belief
    }

    /// Incorporate one frame of segments.
    ///
    /// A frame with no usable votes is not an error: the belief persists
    /// and [`status`](Self::status) reports [`LaneStatus::NoSignal`]. When
    /// prior and measurement are disjoint (the product collapses to zero,
    /// e.g. after a discontinuous jump), the belief resets to the
    /// normalized measurement alone, favoring fresh evidence over a stale
    /// prior.
    pub fn update(&mut self, segments: &[Segment]) {
        let votes = vote_histogram(&self.grid, &self.config, segments);
        let vote_mass: f32 = votes.iter().sum();
        if vote_mass <= 0.0 {
            trace!("lane update: no usable votes, belief held");
            self.has_signal = false;
            return;
        }
        trace!(
            "lane update: {} segments, vote mass {:.4}",
            segments.len(),
            vote_mass
        );

        let mut posterior: Vec<f32> = self
            .belief
            .iter()
            .zip(&votes)
            .map(|(prior, vote)| prior * (vote / vote_mass))
            .collect();
        let posterior_mass: f32 = posterior.iter().sum();

        if posterior_mass <= f32::MIN_POSITIVE {
            debug!("lane belief disjoint from measurement, resetting to measurement");
            posterior = votes.iter().map(|vote| vote / vote_mass).collect();
        } else {
            for cell in &mut posterior {
                *cell /= posterior_mass;
            }
        }

        self.belief = posterior;
        self.has_signal = true;
    }

    /// Probability-weighted centroid of the belief.
    ///
    /// The centroid (not the argmax) is what gives sub-bin accuracy on
    /// clean input: a vote split between two bins pulls the expectation to
    /// the exact continuous coordinate.
    pub fn get_estimate(&self) -> (f32, f32) {
        let n_phi = self.grid.n_phi();
        let d_centers = self.grid.d_centers();
        let phi_centers = self.grid.phi_centers();
        let mut d_hat = 0.0;
        let mut phi_hat = 0.0;
        for (i, p) in self.belief.iter().enumerate() {
            d_hat += p * d_centers[i / n_phi];
            phi_hat += p * phi_centers[i % n_phi];
        }
        (d_hat, phi_hat)
    }

    /// Shannon entropy of the belief in bits.
    ///
    /// 0 for a single-spike belief, `log2(n_d * n_phi)` for uniform.
    pub fn get_entropy(&self) -> f32 {
        -self
            .belief
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|&p| p * p.log2())
            .sum::<f32>()
    }

    /// Qualitative filter condition, recomputed from the belief.
    ///
    /// `NoSignal` until the first informative update and whenever the most
    /// recent update carried no votes; `Deviated` when the estimate leaves
    /// the configured safe bounds; `Good` otherwise.
    pub fn status(&self) -> LaneStatus {
        if !self.has_signal {
            return LaneStatus::NoSignal;
        }
        let (d_hat, phi_hat) = self.get_estimate();
        if d_hat.abs() > self.config.max_safe_d || phi_hat.abs() > self.config.max_safe_phi {
            LaneStatus::Deviated
        } else {
            LaneStatus::Good
        }
    }

    /// Full output snapshot.
    pub fn estimate(&self) -> LaneEstimate {
        let (d, phi) = self.get_estimate();
        LaneEstimate {
            d,
            phi,
            entropy: self.get_entropy(),
            status: self.status(),
        }
    }
}

impl LaneFilter for LaneFilterHistogram {
    fn update(&mut self, segments: &[Segment]) {
        LaneFilterHistogram::update(self, segments)
    }

    fn get_estimate(&self) -> (f32, f32) {
        LaneFilterHistogram::get_estimate(self)
    }

    fn get_entropy(&self) -> f32 {
        LaneFilterHistogram::get_entropy(self)
    }
}
