//! The `Wanderer`: behavior and animation controllers for one agent.

use tracing::debug;
use wander_anim::{AnimationBlendController, ClipCommand, ClipPlayer, dispatch};
use wander_behavior::{AgentBehaviorController, Mode, Step, Transform, TransformSink};
use wander_core::AgentId;

/// One agent: its behavior state machine plus the animation blend that
/// follows it.
///
/// Create via [`WandererBuilder`][crate::WandererBuilder].  The host owns
/// the renderable and the animation system; it passes a [`TransformSink`]
/// and a [`ClipPlayer`] into every [`frame`](Self::frame).
#[derive(Clone, Debug)]
pub struct Wanderer {
    pub(crate) behavior: AgentBehaviorController,
    pub(crate) blend:    AnimationBlendController,

    /// Commands produced by a bind, flushed at the start of the next frame.
    pub(crate) pending: Vec<ClipCommand>,

    /// Set once any clip list has been seen.
    pub(crate) bound: bool,
}

impl Wanderer {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.behavior.agent()
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.behavior.mode()
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.behavior.transform()
    }

    pub fn behavior(&self) -> &AgentBehaviorController {
        &self.behavior
    }

    pub fn blend(&self) -> &AnimationBlendController {
        &self.blend
    }

    // ── Clip binding ──────────────────────────────────────────────────────

    /// Offer the host's current clip names.
    ///
    /// The first list binds the roles.  A later, different list rebinds
    /// them and sends the agent back to idle with a fresh pause, so no
    /// cross-fade is left half-done.  An identical list changes nothing.
    /// Returns `true` when a (re)bind happened.
    pub fn set_clips<S: AsRef<str>>(&mut self, names: &[S]) -> bool {
        if self.bound && self.blend.is_bound_to(names) {
            return false;
        }
        if self.bound {
            debug!(agent = %self.agent(), clips = names.len(), "clip list changed; rebinding");
            self.behavior.reset_to_idle();
        }
        // Anything still queued belongs to the old binding.
        self.pending = self.blend.bind(names);
        self.bound = true;
        true
    }

    // ── Frame update ──────────────────────────────────────────────────────

    /// Run one frame of `delta_secs`.
    ///
    /// Queued bind commands are flushed to `player` first, then the behavior
    /// advances and writes into `sink`, and any transition is turned into
    /// cross-fade commands for `player`.
    pub fn frame<P, S>(&mut self, delta_secs: f32, player: &mut P, sink: &mut S) -> Step
    where
        P: ClipPlayer + ?Sized,
        S: TransformSink + ?Sized,
    {
        self.flush(player);

        let step = self.behavior.advance_and_apply(delta_secs, sink);
        if let Some(transition) = step.transition {
            let commands = self.blend.on_transition(transition);
            dispatch(&commands, player);
        }
        step
    }

    /// Send queued bind commands to `player` without advancing time.
    pub fn flush<P: ClipPlayer + ?Sized>(&mut self, player: &mut P) {
        if !self.pending.is_empty() {
            let pending = std::mem::take(&mut self.pending);
            dispatch(&pending, player);
        }
    }
}
