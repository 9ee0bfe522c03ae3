//! The idle/walk behavior controller.

use tracing::{debug, trace, warn};
use wander_core::geom::{direction_and_distance, heading, turn_toward};
use wander_core::{AgentId, AgentRng, FrameDelta, Vec3, WanderConfig, WanderResult};

use crate::{AgentState, Mode, StateTransition, Step, Transform, TransformDelta, TransformSink};

/// Drives one agent between idling and wandering to random points.
///
/// All state is owned: the config, the agent's own [`AgentRng`], and the
/// [`AgentState`].  Two controllers built from the same config, seed, and
/// starting transform produce identical steps for identical delta scripts.
///
/// # Example
///
/// ```rust
/// use wander_behavior::{AgentBehaviorController, StateTransition, Transform};
/// use wander_core::{AgentId, AgentRng, WanderConfig};
///
/// let config = WanderConfig { idle_secs_min: 2.0, idle_secs_max: 2.0, ..WanderConfig::default() };
/// let mut agent = AgentBehaviorController::new(
///     AgentId(0),
///     config,
///     AgentRng::from_seed(7),
///     Transform::default(),
/// )?;
///
/// assert_eq!(agent.advance(1.0).transition, None);
/// assert_eq!(agent.advance(1.0).transition, Some(StateTransition::IdleToWalk));
/// # Ok::<(), wander_core::WanderError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AgentBehaviorController {
    agent:  AgentId,
    config: WanderConfig,
    rng:    AgentRng,
    pub(crate) state: AgentState,
}

impl AgentBehaviorController {
    /// Validate `config` and start idling at `initial`.
    ///
    /// The first idle pause is rolled immediately.
    pub fn new(
        agent:   AgentId,
        config:  WanderConfig,
        rng:     AgentRng,
        initial: Transform,
    ) -> WanderResult<Self> {
        config.validate()?;
        let mut controller = Self {
            agent,
            config,
            rng,
            state: AgentState::idle_at(initial),
        };
        controller.enter_idle();
        Ok(controller)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.state.transform
    }

    // ── Frame update ──────────────────────────────────────────────────────

    /// Advance the agent by `delta_secs`.
    ///
    /// Non-finite or negative deltas are treated as zero, and a zero delta
    /// is a no-op: no motion, no transition, idle clock untouched.
    pub fn advance(&mut self, delta_secs: f32) -> Step {
        if FrameDelta::is_clamped(delta_secs) {
            warn!(agent = %self.agent, delta_secs, "ignoring invalid frame delta");
        }
        let dt = FrameDelta::new(delta_secs);
        if dt.is_zero() {
            return Step::NONE;
        }

        match self.state.mode {
            Mode::Idle => self.advance_idle(dt.secs()),
            Mode::Walk => self.advance_walk(dt.secs()),
        }
    }

    /// [`advance`](Self::advance), then write the new horizontal position and
    /// yaw into `sink` if anything moved.
    pub fn advance_and_apply<S: TransformSink + ?Sized>(
        &mut self,
        delta_secs: f32,
        sink:       &mut S,
    ) -> Step {
        let step = self.advance(delta_secs);
        if !step.delta.is_identity() {
            let t = self.state.transform;
            sink.set_position_xz(t.position.x, t.position.z);
            sink.set_yaw(t.yaw);
        }
        step
    }

    /// Abandon whatever the agent was doing and start a fresh idle pause
    /// where it stands.  Emits no transition.
    pub fn reset_to_idle(&mut self) {
        debug!(agent = %self.agent, from = %self.state.mode, "reset to idle");
        self.enter_idle();
    }

    // ── State machine ─────────────────────────────────────────────────────

    fn advance_idle(&mut self, dt: f32) -> Step {
        self.state.idle_elapsed += dt;
        if self.state.idle_elapsed < self.state.idle_duration {
            return Step::NONE;
        }

        self.state.target = self.sample_target();
        self.roll_idle_pause();
        self.state.mode = Mode::Walk;
        debug!(
            agent = %self.agent,
            target_x = self.state.target.x,
            target_z = self.state.target.z,
            "idle -> walk"
        );

        Step {
            delta:      TransformDelta::IDENTITY,
            transition: Some(StateTransition::IdleToWalk),
        }
    }

    fn advance_walk(&mut self, dt: f32) -> Step {
        let position = self.state.transform.position;
        let (direction, dist) = direction_and_distance(self.state.target - position);

        if dist <= self.config.arrive_epsilon {
            let snapped = Vec3::new(self.state.target.x, position.y, self.state.target.z);
            self.state.transform.position = snapped;
            self.enter_idle();
            debug!(
                agent = %self.agent,
                x = snapped.x,
                z = snapped.z,
                next_pause = self.state.idle_duration,
                "walk -> idle"
            );
            return Step {
                delta:      TransformDelta { translation: snapped - position, yaw_change: 0.0 },
                transition: Some(StateTransition::WalkToIdle),
            };
        }

        // Never step past the target: the distance keeps shrinking until the
        // arrival check above fires.
        let stride = (self.config.walk_speed * dt).min(dist);
        let delta = TransformDelta {
            translation: direction * stride,
            yaw_change:  turn_toward(
                self.state.transform.yaw,
                heading(direction),
                self.config.turn_smoothing_rate,
                dt,
            ),
        };
        self.state.transform.apply(&delta);
        trace!(agent = %self.agent, dist, stride, yaw = self.state.transform.yaw, "walk step");

        Step { delta, transition: None }
    }

    /// Idle entry actions: mode, fresh clock, fresh pause.
    fn enter_idle(&mut self) {
        self.state.mode = Mode::Idle;
        self.roll_idle_pause();
    }

    fn roll_idle_pause(&mut self) {
        self.state.idle_elapsed = 0.0;
        self.state.idle_duration = self
            .rng
            .uniform(self.config.idle_secs_min, self.config.idle_secs_max);
    }

    /// Uniform point in the roaming square, at the agent's ground height.
    fn sample_target(&mut self) -> Vec3 {
        let r = self.config.roam_radius;
        let x = self.rng.symmetric(r);
        let z = self.rng.symmetric(r);
        Vec3::new(x, self.state.transform.position.y, z)
    }
}
