//! Playback requests: what the blend controller asks the host to do.

use wander_core::ClipId;

/// One playback request for the host animation system.
///
/// Produced by [`AnimationBlendController`][crate::AnimationBlendController]
/// and consumed by a [`ClipPlayer`][crate::ClipPlayer] via
/// [`dispatch`][crate::dispatch], in order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClipCommand {
    /// Stop `clip` and drop its weight.
    Stop(ClipId),

    /// Play `clip` on an endless repeat, never clamping on the last frame.
    /// With `restart`, rewind to the first frame before playing.
    PlayLooping { clip: ClipId, restart: bool },

    /// Fade `from` out and `to` in over `duration_secs`.  Both keep looping
    /// through and after the blend; `from` is left to the fade rather than
    /// stopped.
    CrossFade {
        from:          ClipId,
        to:            ClipId,
        duration_secs: f32,
    },
}
