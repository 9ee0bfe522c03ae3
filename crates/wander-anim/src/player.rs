//! The host-side playback adapter.

use wander_core::ClipId;

use crate::ClipCommand;

/// Host animation system, seen through the three primitives the blend
/// controller needs.
///
/// Implement this over whatever mixer the renderer provides.  Clip handles
/// are positions in the clip name list passed to
/// [`AnimationBlendController::bind`][crate::AnimationBlendController::bind].
pub trait ClipPlayer {
    /// Play `clip` looping forever, rewinding first when `restart` is set.
    fn play_looping(&mut self, clip: ClipId, restart: bool);

    fn stop(&mut self, clip: ClipId);

    /// Blend weight from `from` to `to` over `duration_secs`.
    fn cross_fade(&mut self, from: ClipId, to: ClipId, duration_secs: f32);

    /// Route one command to the matching primitive.
    fn apply(&mut self, command: &ClipCommand) {
        match *command {
            ClipCommand::Stop(clip) => self.stop(clip),
            ClipCommand::PlayLooping { clip, restart } => self.play_looping(clip, restart),
            ClipCommand::CrossFade { from, to, duration_secs } => {
                self.cross_fade(from, to, duration_secs)
            }
        }
    }
}

/// Apply `commands` to `player` in order.
pub fn dispatch<P: ClipPlayer + ?Sized>(commands: &[ClipCommand], player: &mut P) {
    for command in commands {
        player.apply(command);
    }
}

/// A [`ClipPlayer`] that ignores everything.
///
/// Useful for headless hosts with no animation system at all.
pub struct NoopPlayer;

impl ClipPlayer for NoopPlayer {
    fn play_looping(&mut self, _clip: ClipId, _restart: bool) {}

    fn stop(&mut self, _clip: ClipId) {}

    fn cross_fade(&mut self, _from: ClipId, _to: ClipId, _duration_secs: f32) {}
}

/// A [`ClipPlayer`] that records every command it receives.
#[derive(Clone, Debug, Default)]
pub struct ClipLog {
    pub commands: Vec<ClipCommand>,
}

impl ClipLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the recorded commands, leaving the log empty.
    pub fn drain(&mut self) -> Vec<ClipCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl ClipPlayer for ClipLog {
    fn play_looping(&mut self, clip: ClipId, restart: bool) {
        self.commands.push(ClipCommand::PlayLooping { clip, restart });
    }

    fn stop(&mut self, clip: ClipId) {
        self.commands.push(ClipCommand::Stop(clip));
    }

    fn cross_fade(&mut self, from: ClipId, to: ClipId, duration_secs: f32) {
        self.commands.push(ClipCommand::CrossFade { from, to, duration_secs });
    }
}
