//! Frame time model.
//!
//! # Design
//!
//! The controllers never read a wall clock.  The host hands over one
//! `delta_secs` per rendered frame; [`FrameDelta`] sanitises it so a bad
//! value (negative, NaN, infinite) degrades to an empty frame instead of
//! poisoning position and yaw.  [`FrameClock`] accumulates frames for hosts
//! and tests that want a running total.

use std::fmt;

// ── FrameDelta ───────────────────────────────────────────────────────────────

/// Seconds elapsed since the previous frame.  Always finite and `>= 0`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct FrameDelta(f32);

impl FrameDelta {
    pub const ZERO: FrameDelta = FrameDelta(0.0);

    /// Wrap a host-supplied delta, clamping non-finite or negative input
    /// to zero.
    #[inline]
    pub fn new(secs: f32) -> Self {
        if secs.is_finite() && secs > 0.0 {
            FrameDelta(secs)
        } else {
            FrameDelta::ZERO
        }
    }

    /// `true` when `secs` would be clamped by [`new`](Self::new).
    #[inline]
    pub fn is_clamped(secs: f32) -> bool {
        !(secs.is_finite() && secs >= 0.0)
    }

    #[inline]
    pub fn secs(self) -> f32 {
        self.0
    }

    /// A zero delta advances nothing.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl From<f32> for FrameDelta {
    #[inline]
    fn from(secs: f32) -> Self {
        FrameDelta::new(secs)
    }
}

impl fmt::Display for FrameDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}s", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Running frame counter and elapsed time.
///
/// Elapsed time is kept in `f64` so long sessions do not lose resolution.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
    /// Frames advanced so far.
    pub frame: u64,
    /// Sum of all sanitised deltas, seconds.
    pub elapsed_secs: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame.
    #[inline]
    pub fn advance(&mut self, delta: FrameDelta) {
        self.frame += 1;
        self.elapsed_secs += delta.secs() as f64;
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} ({:.3}s)", self.frame, self.elapsed_secs)
    }
}
