//! Construction configuration for the estimators.
//!
//! Plain structs with serde defaults so partial TOML files work. Values are
//! validated by the estimator constructors, not at deserialization time.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lane histogram filter configuration.
///
/// The grid covers `[d_min, d_max] × [phi_min, phi_max]` with cells of size
/// `delta_d × delta_phi`. Lane geometry describes the expected markings:
/// white tape on the right lane boundary, yellow on the left/center.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LaneFilterConfig {
    /// Cell width along the lateral offset axis (meters).
    #[serde(default = "default_delta_d")]
    pub delta_d: f32,

    /// Cell width along the heading axis (radians).
    #[serde(default = "default_delta_phi")]
    pub delta_phi: f32,

    /// Lower bound of the lateral offset domain (meters).
    #[serde(default = "default_d_min")]
    pub d_min: f32,

    /// Upper bound of the lateral offset domain (meters).
    #[serde(default = "default_d_max")]
    pub d_max: f32,

    /// Lower bound of the heading domain (radians).
    #[serde(default = "default_phi_min")]
    pub phi_min: f32,

    /// Upper bound of the heading domain (radians).
    #[serde(default = "default_phi_max")]
    pub phi_max: f32,

    /// Distance between the white and yellow marking centerlines (meters).
    #[serde(default = "default_lane_width")]
    pub lane_width: f32,

    /// Width of the white tape (meters). Published for rendering consumers.
    #[serde(default = "default_linewidth_white")]
    pub linewidth_white: f32,

    /// Width of the yellow tape (meters). Published for rendering consumers.
    #[serde(default = "default_linewidth_yellow")]
    pub linewidth_yellow: f32,

    /// Multiplier applied to a vote whose color landed on the wrong side of
    /// the lane (yellow on the far right, white on the far left). Keeps the
    /// filter robust to partial color mislabeling without discarding data.
    #[serde(default = "default_side_mismatch_weight")]
    pub side_mismatch_weight: f32,

    /// Largest `|d|` estimate still considered in-lane (meters).
    #[serde(default = "default_max_safe_d")]
    pub max_safe_d: f32,

    /// Largest `|phi|` estimate still considered in-lane (radians).
    #[serde(default = "default_max_safe_phi")]
    pub max_safe_phi: f32,
}

impl Default for LaneFilterConfig {
    fn default() -> Self {
        Self {
            delta_d: default_delta_d(),
            delta_phi: default_delta_phi(),
            d_min: default_d_min(),
            d_max: default_d_max(),
            phi_min: default_phi_min(),
            phi_max: default_phi_max(),
            lane_width: default_lane_width(),
            linewidth_white: default_linewidth_white(),
            linewidth_yellow: default_linewidth_yellow(),
            side_mismatch_weight: default_side_mismatch_weight(),
            max_safe_d: default_max_safe_d(),
            max_safe_phi: default_max_safe_phi(),
        }
    }
}

/// Wheel odometer configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WheelOdometerConfig {
    /// Encoder ticks per meter of wheel travel.
    ///
    /// ticks_per_revolution / (2π × wheel_radius)
    #[serde(default = "default_ticks_per_meter")]
    pub ticks_per_meter: f32,

    /// Lateral distance between the wheel centers (meters).
    #[serde(default = "default_wheel_base")]
    pub wheel_base: f32,

    /// Max allowable age of the previous encoder sample (seconds). A larger
    /// gap rebaselines the tick counts and zeroes the velocity estimate
    /// instead of fabricating motion.
    #[serde(default = "default_encoder_stale_dt")]
    pub encoder_stale_dt: f64,
}

impl Default for WheelOdometerConfig {
    fn default() -> Self {
        Self {
            ticks_per_meter: default_ticks_per_meter(),
            wheel_base: default_wheel_base(),
            encoder_stale_dt: default_encoder_stale_dt(),
        }
    }
}

/// Top-level configuration, loadable from a TOML file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EstimationConfig {
    #[serde(default)]
    pub lane_filter: LaneFilterConfig,
    #[serde(default)]
    pub odometer: WheelOdometerConfig,
}

impl EstimationConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

// Lane filter defaults
fn default_delta_d() -> f32 {
    0.02
}
fn default_delta_phi() -> f32 {
    0.1
}
fn default_d_min() -> f32 {
    -0.3
}
fn default_d_max() -> f32 {
    0.3
}
fn default_phi_min() -> f32 {
    -1.5
}
fn default_phi_max() -> f32 {
    1.5
}
fn default_lane_width() -> f32 {
    0.225
}
fn default_linewidth_white() -> f32 {
    0.05
}
fn default_linewidth_yellow() -> f32 {
    0.025
}
fn default_side_mismatch_weight() -> f32 {
    0.25
}
fn default_max_safe_d() -> f32 {
    0.2
}
fn default_max_safe_phi() -> f32 {
    1.2
}

// Odometer defaults
fn default_ticks_per_meter() -> f32 {
    1000.0
}
fn default_wheel_base() -> f32 {
    0.1
}
fn default_encoder_stale_dt() -> f64 {
    5.0
}
