//! `wander-anim` — keeps a two-clip idle/walk animation in step with the
//! behavior controller.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`binding`] | `Role`, `AnimationBinding` — clip name → role resolution        |
//! | [`command`] | `ClipCommand` — playback requests produced by the controller    |
//! | [`player`]  | `ClipPlayer` trait, `dispatch`, `NoopPlayer`, `ClipLog`         |
//! | [`blend`]   | `AnimationBlendController` — transitions → cross-fade commands  |
//!
//! # Design notes
//!
//! The controller never talks to an animation system directly.  `bind` and
//! `on_transition` return a `Vec<ClipCommand>`; the host hands them to its
//! [`ClipPlayer`] adapter with [`dispatch`].  That keeps the mapping from
//! locomotion transitions to clip playback a plain, testable function of the
//! controller's state.

pub mod binding;
pub mod blend;
pub mod command;
pub mod player;

#[cfg(test)]
mod tests;

pub use binding::{AnimationBinding, Role};
pub use blend::AnimationBlendController;
pub use command::ClipCommand;
pub use player::{ClipLog, ClipPlayer, NoopPlayer, dispatch};
