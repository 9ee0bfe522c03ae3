//! Per-agent tuning.
//!
//! All values are fixed at construction.  Defaults match a small creature
//! pottering around a ground plane: a 2–4 s pause, then a brisk walk to a
//! random point within 8 units of the origin.

use crate::{WanderError, WanderResult};

/// Tuning for one wandering agent and its animation blend.
///
/// Typically loaded from JSON by the host application (with the `serde`
/// feature) and handed to the controllers, which validate it once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Shortest idle pause, seconds.  Must be > 0.
    pub idle_secs_min: f32,

    /// Longest idle pause, seconds.  Must be >= `idle_secs_min`.
    pub idle_secs_max: f32,

    /// Walking speed, units per second.  Must be > 0.
    pub walk_speed: f32,

    /// Half-extent of the square roaming area centred on the origin.
    /// Zero pins the agent in place.
    pub roam_radius: f32,

    /// Cross-fade length between the idle and walk clips, seconds.
    pub blend_secs: f32,

    /// Distance at which the agent counts as arrived and snaps onto its
    /// target.
    pub arrive_epsilon: f32,

    /// Exponential turn rate, per second.  Higher turns faster; zero never
    /// turns.
    pub turn_smoothing_rate: f32,
}

impl WanderConfig {
    pub const DEFAULT_ARRIVE_EPSILON:      f32 = 0.05;
    pub const DEFAULT_TURN_SMOOTHING_RATE: f32 = 8.0;
    pub const DEFAULT_BLEND_SECS:          f32 = 0.2;

    /// Check every field against its allowed range.
    pub fn validate(&self) -> WanderResult<()> {
        let fields = [
            ("idle_secs_min",       self.idle_secs_min),
            ("idle_secs_max",       self.idle_secs_max),
            ("walk_speed",          self.walk_speed),
            ("roam_radius",         self.roam_radius),
            ("blend_secs",          self.blend_secs),
            ("arrive_epsilon",      self.arrive_epsilon),
            ("turn_smoothing_rate", self.turn_smoothing_rate),
        ];
        for (what, value) in fields {
            if !value.is_finite() {
                return Err(WanderError::NonFinite { what, value });
            }
        }

        positive("idle_secs_min", self.idle_secs_min)?;
        positive("idle_secs_max", self.idle_secs_max)?;
        positive("walk_speed", self.walk_speed)?;
        positive("blend_secs", self.blend_secs)?;
        positive("arrive_epsilon", self.arrive_epsilon)?;
        non_negative("roam_radius", self.roam_radius)?;
        non_negative("turn_smoothing_rate", self.turn_smoothing_rate)?;

        if self.idle_secs_min > self.idle_secs_max {
            return Err(WanderError::InvalidIdleRange {
                min: self.idle_secs_min,
                max: self.idle_secs_max,
            });
        }
        Ok(())
    }
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            idle_secs_min:       2.0,
            idle_secs_max:       4.0,
            walk_speed:          10.0,
            roam_radius:         8.0,
            blend_secs:          Self::DEFAULT_BLEND_SECS,
            arrive_epsilon:      Self::DEFAULT_ARRIVE_EPSILON,
            turn_smoothing_rate: Self::DEFAULT_TURN_SMOOTHING_RATE,
        }
    }
}

fn positive(what: &'static str, value: f32) -> WanderResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(WanderError::NonPositive { what, value })
    }
}

fn non_negative(what: &'static str, value: f32) -> WanderResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(WanderError::Negative { what, value })
    }
}
