//! Deterministic per-agent RNG.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Replaying the same delta script against the same seed reproduces the
//! same targets and idle waits exactly.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
///
/// Owned by the agent's behavior controller; never shared.
#[derive(Clone, Debug)]
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from a global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, without agent mixing.
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform sample from the closed interval `[low, high]`.
    ///
    /// `low == high` is allowed and returns `low`.  Callers must pass finite
    /// bounds with `low <= high`; `WanderConfig::validate` guarantees this
    /// for every range the controllers sample.
    #[inline]
    pub fn uniform(&mut self, low: f32, high: f32) -> f32 {
        self.0.gen_range(low..=high)
    }

    /// Uniform sample from `[-radius, radius]`.
    ///
    /// Scales a unit draw rather than sampling the range directly, so any
    /// finite `radius` works, including ones whose span `2 * radius`
    /// overflows `f32`.
    #[inline]
    pub fn symmetric(&mut self, radius: f32) -> f32 {
        let u: f32 = self.random();
        radius * (2.0 * u - 1.0)
    }
}
