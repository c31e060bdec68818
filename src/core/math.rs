//! Angle primitives for segment geometry.

use std::f32::consts::{FRAC_PI_2, PI};

/// Fold an angle into `(-π/2, π/2]`.
///
/// A lane marking has no intrinsic direction: a segment observed as `p0→p1`
/// and the same segment observed as `p1→p0` describe the same line, with
/// direction angles that differ by π. Folding makes both orderings yield
/// the same heading.
///
/// # Example
/// ```
/// use marga_estimation::math::fold_to_half_turn;
/// use std::f32::consts::{FRAC_PI_2, PI};
///
/// assert!((fold_to_half_turn(PI + 0.2) - 0.2).abs() < 1e-6);
/// assert!((fold_to_half_turn(-FRAC_PI_2) - FRAC_PI_2).abs() < 1e-6);
/// ```
#[inline]
pub fn fold_to_half_turn(angle: f32) -> f32 {
    let mut a = angle % PI;
    if a > FRAC_PI_2 {
        a -= PI;
    } else if a <= -FRAC_PI_2 {
        a += PI;
    }
    a
}
