//! Per-agent locomotion state.

use std::fmt;

use wander_core::Vec3;

use crate::Transform;

/// Locomotion phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Mode {
    /// Standing still, counting down the idle pause.
    #[default]
    Idle,
    /// Heading for `AgentState::target`.
    Walk,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Walk => "walk",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the behavior controller remembers between frames.
///
/// The agent is either **idle** (`mode = Idle`, `target` stale, counting
/// `idle_elapsed` up to `idle_duration`) or **walking** (`mode = Walk`,
/// moving towards `target`).  `transform.position.y` is the ground height
/// the host placed the agent at and is never changed.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentState {
    pub mode: Mode,

    /// Current position and heading.
    pub transform: Transform,

    /// Destination on the X/Z plane.  Meaningful only while walking; its `y`
    /// equals the agent's ground height.
    pub target: Vec3,

    /// Seconds spent idle since the pause began.
    pub idle_elapsed: f32,

    /// Length of the current idle pause, seconds.  Re-rolled on every Idle
    /// entry.
    pub idle_duration: f32,
}

impl AgentState {
    /// Idle at `transform` with no pause rolled yet.
    pub fn idle_at(transform: Transform) -> Self {
        Self {
            mode:          Mode::Idle,
            target:        transform.position,
            transform,
            idle_elapsed:  0.0,
            idle_duration: 0.0,
        }
    }
}
