//! Dead-reckoning from wheel encoders.

pub mod wheel_odometer;

pub use wheel_odometer::WheelOdometer;
