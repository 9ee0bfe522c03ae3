//! `wander-core` — foundational types for the wander agent controllers.
//!
//! This crate is a dependency of every other `wander-*` crate.  It has no
//! `wander-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                 |
//! |------------|----------------------------------------------------------|
//! | [`ids`]    | `AgentId`, `ClipId`                                      |
//! | [`geom`]   | horizontal-plane helpers, heading and yaw smoothing math |
//! | [`time`]   | `FrameDelta` (sanitised per-frame delta), `FrameClock`   |
//! | [`rng`]    | `AgentRng` (per-agent, seedable)                         |
//! | [`config`] | `WanderConfig` and its validation                        |
//! | [`error`]  | `WanderError`, `WanderResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and `WanderConfig`.  |

pub mod config;
pub mod error;
pub mod geom;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WanderConfig;
pub use error::{WanderError, WanderResult};
pub use glam::Vec3;
pub use ids::{AgentId, ClipId};
pub use rng::AgentRng;
pub use time::{FrameClock, FrameDelta};
