//! Frame observer trait for progress reporting and data collection.

use wander_behavior::StateTransition;
use wander_core::{AgentId, FrameClock};

use crate::Wanderer;

/// Callbacks invoked by [`run_script`][crate::run_script] around every frame.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait FrameObserver {
    /// Called before the frame is processed.  `clock` has not yet counted it.
    fn on_frame_start(&mut self, _clock: &FrameClock) {}

    /// Called when the agent changes mode during the current frame.
    fn on_transition(&mut self, _agent: AgentId, _transition: StateTransition, _clock: &FrameClock) {}

    /// Called after the frame, with the clock already advanced.
    fn on_frame_end(&mut self, _clock: &FrameClock, _wanderer: &Wanderer) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}

/// Records every transition with the frame it happened on (0-based).
#[derive(Clone, Debug, Default)]
pub struct TransitionLog {
    pub entries: Vec<(u64, StateTransition)>,
}

impl TransitionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, transition: StateTransition) -> usize {
        self.entries.iter().filter(|(_, t)| *t == transition).count()
    }
}

impl FrameObserver for TransitionLog {
    fn on_transition(&mut self, _agent: AgentId, transition: StateTransition, clock: &FrameClock) {
        self.entries.push((clock.frame, transition));
    }
}
