//! Quantization of the continuous `(d, phi)` domain into a 2D bin lattice.

use crate::config::LaneFilterConfig;
use crate::error::{ConfigError, Result};

/// Immutable bin lattice over lateral offset `d` and heading `phi`.
///
/// Cell counts come from `ceil((max - min) / delta)`, so the last cell may
/// extend past the configured upper bound. Center and edge arrays are
/// published for the rendering consumer; indexing clamps out-of-range
/// values to the nearest edge bin and never fails.
#[derive(Debug, Clone)]
pub struct LaneGrid {
    d_min: f32,
    phi_min: f32,
    delta_d: f32,
    delta_phi: f32,
    n_d: usize,
    n_phi: usize,
    d_centers: Vec<f32>,
    phi_centers: Vec<f32>,
    d_edges: Vec<f32>,
    phi_edges: Vec<f32>,
}

impl LaneGrid {
    /// Build the lattice from filter configuration.
    pub fn new(config: &LaneFilterConfig) -> Result<Self> {
        if config.delta_d <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "delta_d",
                value: config.delta_d,
            });
        }
        if config.delta_phi <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "delta_phi",
                value: config.delta_phi,
            });
        }
        if config.d_max <= config.d_min {
            return Err(ConfigError::InvertedBounds {
                name: "d",
                min: config.d_min,
                max: config.d_max,
            });
        }
        if config.phi_max <= config.phi_min {
            return Err(ConfigError::InvertedBounds {
                name: "phi",
                min: config.phi_min,
                max: config.phi_max,
            });
        }

        let n_d = axis_count(config.d_max - config.d_min, config.delta_d);
        let n_phi = axis_count(config.phi_max - config.phi_min, config.delta_phi);

        let d_centers = axis_centers(config.d_min, config.delta_d, n_d);
        let phi_centers = axis_centers(config.phi_min, config.delta_phi, n_phi);
        let d_edges = axis_edges(config.d_min, config.delta_d, n_d);
        let phi_edges = axis_edges(config.phi_min, config.delta_phi, n_phi);

        Ok(Self {
            d_min: config.d_min,
            phi_min: config.phi_min,
            delta_d: config.delta_d,
            delta_phi: config.delta_phi,
            n_d,
            n_phi,
            d_centers,
            phi_centers,
            d_edges,
            phi_edges,
        })
    }

    /// Number of bins along the `d` axis.
    #[inline]
    pub fn n_d(&self) -> usize {
        self.n_d
    }

    /// Number of bins along the `phi` axis.
    #[inline]
    pub fn n_phi(&self) -> usize {
        self.n_phi
    }

    /// Total number of cells (`n_d × n_phi`).
    #[inline]
    pub fn len(&self) -> usize {
        self.n_d * self.n_phi
    }

    /// True when the lattice has no cells. Construction guarantees at least
    /// one cell per axis, so this only exists for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bin center coordinates along `d`.
    #[inline]
    pub fn d_centers(&self) -> &[f32] {
        &self.d_centers
    }

    /// Bin center coordinates along `phi`.
    #[inline]
    pub fn phi_centers(&self) -> &[f32] {
        &self.phi_centers
    }

    /// Bin edge coordinates along `d` (`n_d + 1` values).
    #[inline]
    pub fn d_edges(&self) -> &[f32] {
        &self.d_edges
    }

    /// Bin edge coordinates along `phi` (`n_phi + 1` values).
    #[inline]
    pub fn phi_edges(&self) -> &[f32] {
        &self.phi_edges
    }

    /// Map continuous `(d, phi)` to bin indices, clamping out-of-range
    /// values to the nearest edge bin.
    #[inline]
    pub fn bin_index(&self, d: f32, phi: f32) -> (usize, usize) {
        (
            axis_index(self.d_min, self.delta_d, self.n_d, d),
            axis_index(self.phi_min, self.delta_phi, self.n_phi, phi),
        )
    }

    /// Flat row-major cell index (`d` major, `phi` minor).
    #[inline]
    pub fn cell(&self, d_bin: usize, phi_bin: usize) -> usize {
        d_bin * self.n_phi + phi_bin
    }

    /// Bracketing bins and linear weights for a continuous `d` coordinate.
    ///
    /// Outside the center span all weight goes to the edge bin. The two
    /// weights always sum to 1.
    #[inline]
    pub(crate) fn d_split(&self, d: f32) -> [(usize, f32); 2] {
        axis_split(&self.d_centers, self.delta_d, d)
    }

    /// Bracketing bins and linear weights for a continuous `phi` coordinate.
    #[inline]
    pub(crate) fn phi_split(&self, phi: f32) -> [(usize, f32); 2] {
        axis_split(&self.phi_centers, self.delta_phi, phi)
    }
}

/// Bin count covering a span, tolerant of float noise in integral
/// span/step ratios (0.6 / 0.02 computes as 30.000004 in f32, which must
/// not round up to a 31st bin poking past the domain).
fn axis_count(span: f32, step: f32) -> usize {
    // The quantization error of f32 operands is ~1e-7 relative, so the
    // tolerance must be comfortably above that (1e-9 absolute is too small).
    let ratio = span as f64 / step as f64;
    let bins = if (ratio - ratio.round()).abs() < 1e-4 {
        ratio.round()
    } else {
        ratio.ceil()
    };
    bins.max(1.0) as usize
}

fn axis_centers(min: f32, step: f32, n: usize) -> Vec<f32> {
    (0..n).map(|i| min + step * (i as f32 + 0.5)).collect()
}

fn axis_edges(min: f32, step: f32, n: usize) -> Vec<f32> {
    (0..=n).map(|i| min + step * i as f32).collect()
}

#[inline]
fn axis_index(min: f32, step: f32, n: usize, value: f32) -> usize {
    if value <= min {
        return 0;
    }
    (((value - min) / step) as usize).min(n - 1)
}

/// Split a coordinate between its two bracketing bin centers.
fn axis_split(centers: &[f32], step: f32, value: f32) -> [(usize, f32); 2] {
    let last = centers.len() - 1;
    if value <= centers[0] {
        return [(0, 1.0), (0, 0.0)];
    }
    if value >= centers[last] {
        return [(last, 1.0), (last, 0.0)];
    }
    let lo = (((value - centers[0]) / step) as usize).min(last - 1);
    let hi_weight = ((value - centers[lo]) / step).clamp(0.0, 1.0);
    [(lo, 1.0 - hi_weight), (lo + 1, hi_weight)]
}
