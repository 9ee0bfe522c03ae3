//! Horizontal-plane geometry and heading math.
//!
//! The agent lives on the X/Z plane with Y up.  Yaw follows the usual
//! right-handed convention: zero faces +Z, positive turns towards +X, so the
//! heading of a direction `d` is `atan2(d.x, d.z)`.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Unit horizontal direction of `v` and its horizontal length.
///
/// The components are scaled down before squaring, so the direction stays
/// exact even when `x * x` would overflow `f32`.  The length itself may
/// round up to infinity for components near `f32::MAX`.  A zero vector
/// gives `(Vec3::ZERO, 0.0)`.
pub fn direction_and_distance(v: Vec3) -> (Vec3, f32) {
    let scale = v.x.abs().max(v.z.abs());
    if scale == 0.0 {
        return (Vec3::ZERO, 0.0);
    }
    let unit = Vec3::new(v.x / scale, 0.0, v.z / scale);
    let len = unit.length();
    (unit / len, scale * len)
}

/// Yaw that faces along the horizontal direction `d`.
#[inline]
pub fn heading(d: Vec3) -> f32 {
    d.x.atan2(d.z)
}

/// Wrap `angle` into `(-PI, PI]`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Signed turn from `from` to `to` along the shorter way round.
#[inline]
pub fn shortest_arc(from: f32, to: f32) -> f32 {
    wrap_angle(to - from)
}

/// Fraction of the remaining gap closed by exponential smoothing at `rate`
/// over `dt` seconds.  Frame-rate independent: two half steps close the
/// same gap as one full step.
#[inline]
pub fn smoothing_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Signed turn that moves `yaw` towards `desired` by
/// `smoothing_factor(rate, dt)` of the shortest arc.
#[inline]
pub fn turn_toward(yaw: f32, desired: f32, rate: f32, dt: f32) -> f32 {
    shortest_arc(yaw, desired) * smoothing_factor(rate, dt)
}
