//! Transition-driven cross-fading between the idle and walk clips.

use tracing::{debug, warn};
use wander_behavior::StateTransition;
use wander_core::{ClipId, WanderError, WanderResult};

use crate::{AnimationBinding, ClipCommand, Role};

/// Maps behavior transitions to clip playback.
///
/// Lifecycle:
///
/// 1. [`bind`](Self::bind) once the host knows its clip names.  Idle starts
///    looping from the top, walk is stopped.
/// 2. [`on_transition`](Self::on_transition) for every transition the
///    behavior controller emits.  The incoming role's clip restarts on an
///    endless loop and the outgoing clip fades out over `blend_secs`.
///
/// With no binding (empty clip list) every call returns no commands, and a
/// binding whose roles share one clip never cross-fades.
#[derive(Clone, Debug)]
pub struct AnimationBlendController {
    blend_secs: f32,
    binding:    Option<AnimationBinding>,
    active:     Role,
}

impl AnimationBlendController {
    /// Unbound controller cross-fading over `blend_secs` (finite, > 0).
    pub fn new(blend_secs: f32) -> WanderResult<Self> {
        if !blend_secs.is_finite() {
            return Err(WanderError::NonFinite { what: "blend_secs", value: blend_secs });
        }
        if blend_secs <= 0.0 {
            return Err(WanderError::NonPositive { what: "blend_secs", value: blend_secs });
        }
        Ok(Self {
            blend_secs,
            binding: None,
            active:  Role::Idle,
        })
    }

    #[inline]
    pub fn blend_secs(&self) -> f32 {
        self.blend_secs
    }

    pub fn binding(&self) -> Option<&AnimationBinding> {
        self.binding.as_ref()
    }

    #[inline]
    pub fn active_role(&self) -> Role {
        self.active
    }

    /// Clip currently faded in, if bound.
    pub fn active_clip(&self) -> Option<ClipId> {
        self.binding.as_ref().map(|b| b.clip(self.active))
    }

    /// `true` when the controller is bound to exactly `names`.
    pub fn is_bound_to<S: AsRef<str>>(&self, names: &[S]) -> bool {
        self.binding.as_ref().is_some_and(|b| b.matches(names))
    }

    /// Resolve roles from `names` and reset playback to idle.
    ///
    /// Replaces any previous binding.  Returns the commands that stop every
    /// listed clip, start idle looping from its first frame, and stop walk.
    pub fn bind<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<ClipCommand> {
        self.active = Role::Idle;
        self.binding = AnimationBinding::resolve(names);

        let Some(binding) = &self.binding else {
            warn!("no animation clips to bind; playback disabled");
            return vec![];
        };

        debug!(
            idle = binding.clip_name(Role::Idle),
            walk = binding.clip_name(Role::Walk),
            degenerate = binding.is_degenerate(),
            "bound animation clips"
        );

        let idle = binding.clip(Role::Idle);
        let walk = binding.clip(Role::Walk);

        let mut commands: Vec<ClipCommand> = binding.clips().map(ClipCommand::Stop).collect();
        commands.push(ClipCommand::PlayLooping { clip: idle, restart: true });
        if walk != idle {
            commands.push(ClipCommand::Stop(walk));
        }
        commands
    }

    /// Commands that fade from the outgoing role's clip to the incoming one.
    pub fn on_transition(&mut self, transition: StateTransition) -> Vec<ClipCommand> {
        let incoming = Role::from(transition.to_mode());
        let outgoing = std::mem::replace(&mut self.active, incoming);

        let Some(binding) = &self.binding else {
            return vec![];
        };

        let from = binding.clip(outgoing);
        let to = binding.clip(incoming);
        if from == to {
            return vec![];
        }

        debug!(%transition, %from, %to, blend_secs = self.blend_secs, "cross-fade");
        vec![
            ClipCommand::PlayLooping { clip: to, restart: true },
            ClipCommand::CrossFade { from, to, duration_secs: self.blend_secs },
        ]
    }
}
