//! Numeric helpers used across the rig.
//!
//! These utilities keep angle arithmetic on the short arc, clamp vectors
//! per component, and guard conversions from the millisecond clock (`f64`)
//! into the `f32` rotation domain.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Convert a finite `f64` into `f32`, asserting that it fits the target type.
#[expect(
    clippy::cast_possible_truncation,
    reason = "Callers pass bounded trigonometric or clock-derived values."
)]
#[must_use]
pub fn expect_f32(value: f64) -> f32 {
    debug_assert!(value.is_finite(), "expected finite f64 for f32 conversion");
    debug_assert!(
        value <= f64::from(f32::MAX),
        "f64 value {value} exceeds f32::MAX"
    );
    debug_assert!(
        value >= f64::from(f32::MIN),
        "f64 value {value} is below f32::MIN"
    );
    value as f32
}

/// Sine of `time_ms * rate`, evaluated in `f64` before narrowing.
///
/// Evaluating in double precision keeps long sessions (hours of uptime in
/// milliseconds) from losing the phase of slow oscillators.
#[must_use]
pub fn wave(time_ms: f64, rate: f64) -> f32 {
    expect_f32((time_ms * rate).sin())
}

/// [`wave`] with a phase offset in radians.
#[must_use]
pub fn wave_shifted(time_ms: f64, rate: f64, phase: f64) -> f32 {
    expect_f32(time_ms.mul_add(rate, phase).sin())
}

/// Cosine counterpart of [`wave`].
#[must_use]
pub fn wave_cos(time_ms: f64, rate: f64) -> f32 {
    expect_f32((time_ms * rate).cos())
}

/// Folds an angular difference onto the short arc `[-π, π)`.
///
/// # Examples
/// ```
/// use sparring::numeric::shortest_arc;
/// let diff = shortest_arc(-6.0);
/// assert!((diff - (-6.0 + std::f32::consts::TAU)).abs() < 1e-5);
/// ```
#[must_use]
pub fn shortest_arc(diff: f32) -> f32 {
    if !diff.is_finite() {
        return diff;
    }
    if (-PI..=PI).contains(&diff) {
        return diff;
    }
    (diff + PI).rem_euclid(TAU) - PI
}

/// Moves `current` toward `target` by `rate` of the remaining distance.
#[must_use]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Clamps every component of `value` into `[-bound, bound]`.
#[must_use]
pub fn clamp_symmetric(value: Vec3, bound: f32) -> Vec3 {
    value.clamp(Vec3::splat(-bound), Vec3::splat(bound))
}
