//! Scripted frame runner.
//!
//! Feeds a sequence of frame deltas through a [`Wanderer`], the same way a
//! render loop would.  With a fixed seed the run is fully reproducible.

use wander_anim::ClipPlayer;
use wander_behavior::TransformSink;
use wander_core::{FrameClock, FrameDelta};

use crate::{FrameObserver, Wanderer};

/// Run `wanderer` through every delta in `deltas`.
///
/// Returns the clock after the last frame.  Invalid deltas still count as a
/// frame but add no time.
pub fn run_script<I, P, S, O>(
    wanderer: &mut Wanderer,
    deltas:   I,
    player:   &mut P,
    sink:     &mut S,
    observer: &mut O,
) -> FrameClock
where
    I: IntoIterator<Item = f32>,
    P: ClipPlayer + ?Sized,
    S: TransformSink + ?Sized,
    O: FrameObserver + ?Sized,
{
    let mut clock = FrameClock::new();
    for delta_secs in deltas {
        observer.on_frame_start(&clock);
        let step = wanderer.frame(delta_secs, player, sink);
        if let Some(transition) = step.transition {
            observer.on_transition(wanderer.agent(), transition, &clock);
        }
        clock.advance(FrameDelta::new(delta_secs));
        observer.on_frame_end(&clock, wanderer);
    }
    clock
}
