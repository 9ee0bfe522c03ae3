//! `wander-behavior` — the idle/walk state machine for one wandering agent.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`state`]      | `Mode`, `AgentState` — the owned per-agent state             |
//! | [`transform`]  | `Transform`, `TransformDelta`, `TransformSink`               |
//! | [`transition`] | `StateTransition`, `Step` — what one `advance` call produced |
//! | [`controller`] | `AgentBehaviorController` — timing, targets, motion, facing  |
//!
//! # Frame model
//!
//! The host calls [`AgentBehaviorController::advance`] once per rendered
//! frame with the elapsed seconds.  The controller:
//!
//! 1. accumulates idle time and, when the pause is over, picks a random
//!    target and switches to walking;
//! 2. while walking, steps towards the target at `walk_speed` on the X/Z
//!    plane and eases its yaw towards the walking direction;
//! 3. on arrival, snaps onto the target and goes back to idling.
//!
//! Every call returns the transform change and, at most, one transition.
//! Nothing here touches animation; `wander-anim` reacts to the transitions.

pub mod controller;
pub mod state;
pub mod transform;
pub mod transition;


pub use controller::AgentBehaviorController;
pub use state::{AgentState, Mode};
pub use transform::{Transform, TransformDelta, TransformSink};
pub use transition::{StateTransition, Step};
