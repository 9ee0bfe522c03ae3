//! Fluent builder for constructing a [`Wanderer`].

use wander_anim::AnimationBlendController;
use wander_behavior::{AgentBehaviorController, Transform};
use wander_core::{AgentId, AgentRng, WanderConfig, WanderResult};

use crate::Wanderer;

/// Fluent builder for [`Wanderer`].
///
/// # Required inputs
///
/// - [`AgentId`]: mixed into the RNG seed and tagged on every log line
/// - [`WanderConfig`]: validated by [`build`](Self::build)
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                    |
/// |-----------------|--------------------------------------------|
/// | `.seed(s)`      | `0`, mixed with the agent id               |
/// | `.rng(r)`       | `AgentRng::new(seed, agent)`               |
/// | `.transform(t)` | origin, facing +Z                          |
/// | `.clips(names)` | unbound; call `Wanderer::set_clips` later  |
pub struct WandererBuilder {
    agent:     AgentId,
    config:    WanderConfig,
    seed:      u64,
    rng:       Option<AgentRng>,
    transform: Transform,
    clips:     Option<Vec<String>>,
}

impl WandererBuilder {
    pub fn new(agent: AgentId, config: WanderConfig) -> Self {
        Self {
            agent,
            config,
            seed:      0,
            rng:       None,
            transform: Transform::default(),
            clips:     None,
        }
    }

    /// Global seed, mixed with the agent id.  Ignored if [`rng`](Self::rng)
    /// is supplied.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use an explicit RNG instead of one derived from the seed.
    pub fn rng(mut self, rng: AgentRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Starting position and heading.  The `y` set here is kept for good.
    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Clip names to bind at build time.
    pub fn clips<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.clips = Some(names.iter().map(|n| n.as_ref().to_owned()).collect());
        self
    }

    /// Validate the config and return a ready-to-run [`Wanderer`].
    pub fn build(self) -> WanderResult<Wanderer> {
        let rng = self
            .rng
            .unwrap_or_else(|| AgentRng::new(self.seed, self.agent));
        let behavior = AgentBehaviorController::new(self.agent, self.config, rng, self.transform)?;
        let blend = AnimationBlendController::new(behavior.config().blend_secs)?;

        let mut wanderer = Wanderer {
            behavior,
            blend,
            pending: Vec::new(),
            bound:   false,
        };
        if let Some(names) = self.clips {
            wanderer.set_clips(&names);
        }
        Ok(wanderer)
    }
}
