//! `wander-sim` — one wandering, animated agent wired to its host.
//!
//! # Frame loop
//!
//! ```text
//! per rendered frame:
//!   ① Flush     — clip commands queued by a (re)bind go to the ClipPlayer.
//!   ② Behavior  — AgentBehaviorController::advance(delta_secs); the new
//!                 horizontal position and yaw go to the TransformSink.
//!   ③ Animation — on a transition, AnimationBlendController::on_transition
//!                 and the resulting commands go to the ClipPlayer.
//! ```
//!
//! # Quick-start
//!
//! ```rust
//! use wander_anim::ClipLog;
//! use wander_behavior::Transform;
//! use wander_core::{AgentId, WanderConfig};
//! use wander_sim::{NoopObserver, WandererBuilder, run_script};
//!
//! let mut frog = WandererBuilder::new(AgentId(0), WanderConfig::default())
//!     .seed(42)
//!     .clips(&["Frog_Idle", "Frog_Walk"])
//!     .build()?;
//!
//! let mut clips = ClipLog::new();
//! let mut transform = Transform::default();
//! let clock = run_script(
//!     &mut frog,
//!     std::iter::repeat(1.0_f32 / 60.0).take(600),
//!     &mut clips,
//!     &mut transform,
//!     &mut NoopObserver,
//! );
//! assert_eq!(clock.frame, 600);
//! # Ok::<(), wander_core::WanderError>(())
//! ```

pub mod builder;
pub mod observer;
pub mod runner;
pub mod wanderer;


pub use builder::WandererBuilder;
pub use observer::{FrameObserver, NoopObserver, TransitionLog};
pub use runner::run_script;
pub use wanderer::Wanderer;
