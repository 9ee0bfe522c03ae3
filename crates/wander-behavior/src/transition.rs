//! Locomotion transitions, the events the animation side listens for.

use std::fmt;

use crate::{Mode, TransformDelta};

/// A change of [`Mode`] produced by one `advance` call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StateTransition {
    /// The idle pause ran out and a new target was picked.
    IdleToWalk,
    /// The agent reached its target and snapped onto it.
    WalkToIdle,
}

impl StateTransition {
    #[inline]
    pub fn from_mode(self) -> Mode {
        match self {
            StateTransition::IdleToWalk => Mode::Idle,
            StateTransition::WalkToIdle => Mode::Walk,
        }
    }

    #[inline]
    pub fn to_mode(self) -> Mode {
        match self {
            StateTransition::IdleToWalk => Mode::Walk,
            StateTransition::WalkToIdle => Mode::Idle,
        }
    }
}

impl fmt::Display for StateTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from_mode(), self.to_mode())
    }
}

/// Result of one `advance` call.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Step {
    pub delta:      TransformDelta,
    pub transition: Option<StateTransition>,
}

impl Step {
    /// Nothing moved, nothing changed.
    pub const NONE: Step = Step {
        delta:      TransformDelta::IDENTITY,
        transition: None,
    };
}
