//! Wheel Odometer Trajectory Tests
//!
//! Synthetic cumulative encoder sequences for a small differential drive
//! robot (2.5cm wheel radius, 10cm wheel base, 100 ticks per revolution):
//! - Straight driving over known distances
//! - In-place rotation with unwrapped heading
//! - Full circles pivoting about one wheel, left and right
//! - Stale-gap rebaselining
//!
//! Run with: `cargo test --test wheel_odometer`

use approx::assert_relative_eq;
use marga_estimation::{WheelOdometer, WheelOdometerConfig};
use std::f32::consts::PI;

// ============================================================================
// Robot Geometry
// ============================================================================

const ENCODER_RESOLUTION: f32 = 100.0;
const WHEEL_RADIUS: f32 = 0.025;
const WHEEL_BASE: f32 = 0.1;

/// Distance one full wheel revolution covers (~0.157m).
fn wheel_circumference() -> f32 {
    2.0 * PI * WHEEL_RADIUS
}

fn robot_config() -> WheelOdometerConfig {
    WheelOdometerConfig {
        ticks_per_meter: ENCODER_RESOLUTION / wheel_circumference(),
        wheel_base: WHEEL_BASE,
        encoder_stale_dt: 10.0,
    }
}

fn tracking_odometer() -> WheelOdometer {
    let mut odometer = WheelOdometer::new(robot_config()).unwrap();
    odometer.update(0, 0, 0.0);
    odometer
}

// ============================================================================
// Basic Contract
// ============================================================================

#[test]
fn test_no_data_no_estimate() {
    let odometer = WheelOdometer::new(robot_config()).unwrap();
    assert!(odometer.get_estimate().is_none());
}

#[test]
fn test_single_sample_no_estimate() {
    let odometer = tracking_odometer();
    assert!(odometer.get_estimate().is_none());
}

#[test]
fn test_no_motion() {
    let mut odometer = tracking_odometer();
    odometer.update(0, 0, 1.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.x, 0.0);
    assert_relative_eq!(pose.y, 0.0);
    assert_relative_eq!(pose.theta, 0.0);
    assert_relative_eq!(velocity.v, 0.0);
    assert_relative_eq!(velocity.w, 0.0);
}

// ============================================================================
// Straight Driving
// ============================================================================

#[test]
fn test_one_wheel_revolution_forward() {
    let mut odometer = tracking_odometer();
    odometer.update(ENCODER_RESOLUTION as i32, ENCODER_RESOLUTION as i32, 1.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.x, wheel_circumference(), epsilon = 1e-4);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(pose.theta, 0.0, epsilon = 1e-6);
    assert_relative_eq!(velocity.v, wheel_circumference(), epsilon = 1e-4);
    assert_relative_eq!(velocity.w, 0.0, epsilon = 1e-6);
}

#[test]
fn test_one_meter_forward() {
    let config = WheelOdometerConfig {
        ticks_per_meter: 1000.0,
        wheel_base: WHEEL_BASE,
        encoder_stale_dt: 10.0,
    };
    let mut odometer = WheelOdometer::new(config).unwrap();
    odometer.update(0, 0, 0.0);
    odometer.update(1000, 1000, 1.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.x, 1.0, epsilon = 1e-6);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(velocity.v, 1.0, epsilon = 1e-6);
}

// ============================================================================
// In-Place Rotation
// ============================================================================

#[test]
fn test_full_wheels_rotation_left() {
    // One full revolution on each wheel, opposite signs: theta = 2c/b = π
    let mut odometer = tracking_odometer();
    let ticks = ENCODER_RESOLUTION as i32;
    odometer.update(-ticks, ticks, 1.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.theta, PI, epsilon = 1e-3);
    assert_relative_eq!(pose.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-6);
    assert_relative_eq!(velocity.v, 0.0, epsilon = 1e-6);
    assert_relative_eq!(velocity.w, PI, epsilon = 1e-3);
}

#[test]
fn test_full_wheels_rotation_right() {
    let mut odometer = tracking_odometer();
    let ticks = ENCODER_RESOLUTION as i32;
    odometer.update(ticks, -ticks, 1.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.theta, -PI, epsilon = 1e-3);
    assert_relative_eq!(velocity.w, -PI, epsilon = 1e-3);
}

// ============================================================================
// Full Circles (Pivot About One Wheel)
// ============================================================================

/// Drive a full circle by moving only one wheel, in four quarter-turn
/// steps. With this geometry a quarter turn is exactly one wheel
/// revolution, so the pose should return to the origin with `theta = ±2π`
/// (unwrapped, not folded back to zero).
fn full_circle(left_moves: bool) -> WheelOdometer {
    let mut odometer = tracking_odometer();
    let step_ticks = ENCODER_RESOLUTION as i32;
    for step in 1..=4 {
        let moving = step_ticks * step;
        let (left, right) = if left_moves { (moving, 0) } else { (0, moving) };
        odometer.update(left, right, step as f64);
    }
    odometer
}

#[test]
fn test_full_circle_left() {
    let odometer = full_circle(false);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.theta, 2.0 * PI, epsilon = 1e-2);
    assert_relative_eq!(pose.x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-3);
    // Last quarter turn took one second
    let quarter_turn = PI / 2.0;
    assert_relative_eq!(velocity.w, quarter_turn, epsilon = 1e-2);
    assert_relative_eq!(velocity.v, quarter_turn * WHEEL_BASE / 2.0, epsilon = 1e-3);
}

#[test]
fn test_full_circle_right() {
    let odometer = full_circle(true);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.theta, -2.0 * PI, epsilon = 1e-2);
    assert_relative_eq!(pose.x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(pose.y, 0.0, epsilon = 1e-3);
    assert_relative_eq!(velocity.w, -PI / 2.0, epsilon = 1e-2);
}

// ============================================================================
// Staleness
// ============================================================================

#[test]
fn test_stale_gap_holds_pose_and_zeroes_velocity() {
    let config = WheelOdometerConfig {
        encoder_stale_dt: 0.5,
        ..robot_config()
    };
    let mut odometer = WheelOdometer::new(config).unwrap();
    odometer.update(0, 0, 0.0);
    odometer.update(100, 100, 0.25);
    let (pose_before, velocity) = odometer.get_estimate().unwrap();
    assert!(velocity.v > 0.0);

    // Long silence, then a sample with a large tick jump: the jump must be
    // swallowed by the rebaseline, not integrated
    odometer.update(900, 900, 5.0);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(pose.x, pose_before.x);
    assert_relative_eq!(velocity.v, 0.0);
    assert_relative_eq!(velocity.w, 0.0);

    // Fresh motion after the gap integrates again
    odometer.update(1000, 1000, 5.25);
    let (pose, velocity) = odometer.get_estimate().unwrap();
    assert_relative_eq!(
        pose.x,
        pose_before.x + 100.0 / odometer.config().ticks_per_meter,
        epsilon = 1e-5
    );
    assert!(velocity.v > 0.0);
}
