//! Wheel odometer: pose and velocity from cumulative encoder ticks.
//!
//! Integrates differential drive motion with the exact arc model (closed
//! form over the instantaneous turning radius), so large per-step rotations
//! integrate without linearization error. Heading accumulates unwrapped: a
//! full circle ends at `±2π`, not `0`.

use log::{debug, warn};

use crate::config::WheelOdometerConfig;
use crate::core::types::{PoseEstimate, VelocityEstimate};
use crate::error::{ConfigError, Result};

/// Below this per-step rotation the arc degenerates to a straight line.
const STRAIGHT_THRESHOLD: f32 = 1e-6;

/// Last accepted encoder reading.
#[derive(Debug, Clone, Copy)]
struct EncoderSample {
    left: i32,
    right: i32,
    stamp: f64,
}

/// Differential drive dead-reckoning odometer.
///
/// Feed it cumulative `(left_ticks, right_ticks, timestamp)` samples; it
/// integrates planar pose in the frame of the first sample and derives
/// instantaneous velocity from each tick delta. Two samples are needed
/// before an estimate exists. A sample arriving after more than
/// `encoder_stale_dt` seconds only rebaselines the tick counts: velocity is
/// zeroed and the pose holds, so a data gap never fabricates motion.
#[derive(Debug)]
pub struct WheelOdometer {
    config: WheelOdometerConfig,
    last: Option<EncoderSample>,
    pose: PoseEstimate,
    velocity: Option<VelocityEstimate>,
}

impl WheelOdometer {
    /// Create a new odometer.
    pub fn new(config: WheelOdometerConfig) -> Result<Self> {
        if config.ticks_per_meter <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "ticks_per_meter",
                value: config.ticks_per_meter,
            });
        }
        if config.wheel_base <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "wheel_base",
                value: config.wheel_base,
            });
        }
        if config.encoder_stale_dt <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "encoder_stale_dt",
                value: config.encoder_stale_dt as f32,
            });
        }
        Ok(Self {
            config,
            last: None,
            pose: PoseEstimate::origin(),
            velocity: None,
        })
    }

    /// Odometer configuration.
    #[inline]
    pub fn config(&self) -> &WheelOdometerConfig {
        &self.config
    }

    /// Process one encoder sample.
    ///
    /// `left_ticks`/`right_ticks` are cumulative counts, `timestamp` is in
    /// seconds. The first sample only establishes the baseline.
    pub fn update(&mut self, left_ticks: i32, right_ticks: i32, timestamp: f64) {
        let sample = EncoderSample {
            left: left_ticks,
            right: right_ticks,
            stamp: timestamp,
        };

        let prev = match self.last {
            None => {
                self.last = Some(sample);
                return;
            }
            Some(prev) => prev,
        };

        let dt = timestamp - prev.stamp;
        if dt <= 0.0 {
            warn!(
                "encoder timestamp {:.6} not after previous {:.6}, sample dropped",
                timestamp, prev.stamp
            );
            return;
        }
        if dt > self.config.encoder_stale_dt {
            debug!(
                "encoder gap {:.3}s exceeds stale threshold {:.3}s, velocity zeroed",
                dt, self.config.encoder_stale_dt
            );
            self.velocity = Some(VelocityEstimate::zero());
            self.last = Some(sample);
            return;
        }

        let d_left = (left_ticks - prev.left) as f32 / self.config.ticks_per_meter;
        let d_right = (right_ticks - prev.right) as f32 / self.config.ticks_per_meter;

        let d_center = (d_left + d_right) / 2.0;
        let d_theta = (d_right - d_left) / self.config.wheel_base;

        // Exact arc: displacement of the robot center along a circle of
        // radius d_center / d_theta, in the frame at the start of the step
        let (local_x, local_y) = if d_theta.abs() < STRAIGHT_THRESHOLD {
            (d_center, 0.0)
        } else {
            let radius = d_center / d_theta;
            (radius * d_theta.sin(), radius * (1.0 - d_theta.cos()))
        };

        let (sin_t, cos_t) = self.pose.theta.sin_cos();
        self.pose.x += local_x * cos_t - local_y * sin_t;
        self.pose.y += local_x * sin_t + local_y * cos_t;
        // Unwrapped on purpose: consumers see cumulative rotation
        self.pose.theta += d_theta;

        let dt = dt as f32;
        self.velocity = Some(VelocityEstimate::new(d_center / dt, d_theta / dt));
        self.last = Some(sample);
    }

    /// Pose and velocity estimated so far.
    ///
    /// `None` until two samples have been observed.
    pub fn get_estimate(&self) -> Option<(PoseEstimate, VelocityEstimate)> {
        self.velocity.map(|velocity| (self.pose, velocity))
    }

    /// Forget all state, returning to the uninitialized condition.
    pub fn reset(&mut self) {
        self.last = None;
        self.pose = PoseEstimate::origin();
        self.velocity = None;
    }
}
