//! Unit tests for wander-anim.

use wander_behavior::StateTransition;
use wander_core::ClipId;

use crate::{AnimationBinding, AnimationBlendController, ClipCommand, Role};

// ── Helpers ───────────────────────────────────────────────────────────────────

const BLEND: f32 = 0.2;

fn blend() -> AnimationBlendController {
    AnimationBlendController::new(BLEND).unwrap()
}

// ── AnimationBinding ──────────────────────────────────────────────────────────

#[cfg(test)]
mod binding {
    use super::*;

    #[test]
    fn keyword_match() {
        let b = AnimationBinding::resolve(&["Frog_Idle", "Frog_Walk"]).unwrap();
        assert_eq!(b.clip(Role::Idle), ClipId(0));
        assert_eq!(b.clip(Role::Walk), ClipId(1));
        assert_eq!(b.clip_name(Role::Walk), "Frog_Walk");
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_order_free() {
        let b = AnimationBinding::resolve(&["Jump", "WALK_cycle", "t-pose", "IdleBreathe"]).unwrap();
        assert_eq!(b.clip(Role::Idle), ClipId(3));
        assert_eq!(b.clip(Role::Walk), ClipId(1));
    }

    #[test]
    fn first_match_wins() {
        let b = AnimationBinding::resolve(&["idle_a", "idle_b", "walk_a", "walk_b"]).unwrap();
        assert_eq!(b.clip(Role::Idle), ClipId(0));
        assert_eq!(b.clip(Role::Walk), ClipId(2));
    }

    #[test]
    fn positional_fallback() {
        let b = AnimationBinding::resolve(&["ClipA", "ClipB"]).unwrap();
        assert_eq!(b.clip(Role::Idle), ClipId(0));
        assert_eq!(b.clip(Role::Walk), ClipId(1));
        assert!(!b.is_degenerate());
    }

    #[test]
    fn single_clip_binds_both_roles() {
        let b = AnimationBinding::resolve(&["Dance"]).unwrap();
        assert_eq!(b.clip(Role::Idle), ClipId(0));
        assert_eq!(b.clip(Role::Walk), ClipId(0));
        assert!(b.is_degenerate());
    }

    #[test]
    fn empty_list_binds_nothing() {
        let names: [&str; 0] = [];
        assert!(AnimationBinding::resolve(&names).is_none());
    }

    #[test]
    fn matches_exact_list_only() {
        let b = AnimationBinding::resolve(&["Idle", "Walk"]).unwrap();
        assert!(b.matches(&["Idle", "Walk"]));
        assert!(b.matches(&[String::from("Idle"), String::from("Walk")]));
        assert!(!b.matches(&["Walk", "Idle"]));
        assert!(!b.matches(&["Idle"]));
    }
}

// ── AnimationBlendController ──────────────────────────────────────────────────

#[cfg(test)]
mod blend_controller {
    use wander_core::WanderError;

    use super::*;

    #[test]
    fn rejects_bad_blend_time() {
        assert!(matches!(
            AnimationBlendController::new(0.0),
            Err(WanderError::NonPositive { what: "blend_secs", .. })
        ));
        assert!(matches!(
            AnimationBlendController::new(f32::NAN),
            Err(WanderError::NonFinite { what: "blend_secs", .. })
        ));
    }

    #[test]
    fn bind_stops_all_then_loops_idle() {
        let mut c = blend();
        let commands = c.bind(&["Walk", "Jump", "Idle"]);
        assert_eq!(
            commands,
            vec![
                ClipCommand::Stop(ClipId(0)),
                ClipCommand::Stop(ClipId(1)),
                ClipCommand::Stop(ClipId(2)),
                ClipCommand::PlayLooping { clip: ClipId(2), restart: true },
                ClipCommand::Stop(ClipId(0)),
            ]
        );
        assert_eq!(c.active_role(), Role::Idle);
        assert_eq!(c.active_clip(), Some(ClipId(2)));
    }

    #[test]
    fn transitions_cross_fade_both_ways() {
        let mut c = blend();
        c.bind(&["Frog_Idle", "Frog_Walk"]);

        assert_eq!(
            c.on_transition(StateTransition::IdleToWalk),
            vec![
                ClipCommand::PlayLooping { clip: ClipId(1), restart: true },
                ClipCommand::CrossFade { from: ClipId(0), to: ClipId(1), duration_secs: BLEND },
            ]
        );
        assert_eq!(c.active_role(), Role::Walk);

        assert_eq!(
            c.on_transition(StateTransition::WalkToIdle),
            vec![
                ClipCommand::PlayLooping { clip: ClipId(0), restart: true },
                ClipCommand::CrossFade { from: ClipId(1), to: ClipId(0), duration_secs: BLEND },
            ]
        );
        assert_eq!(c.active_role(), Role::Idle);
    }

    #[test]
    fn never_stops_the_outgoing_clip() {
        let mut c = blend();
        c.bind(&["Idle", "Walk"]);
        for t in [StateTransition::IdleToWalk, StateTransition::WalkToIdle] {
            let commands = c.on_transition(t);
            assert!(!commands.iter().any(|cmd| matches!(cmd, ClipCommand::Stop(_))));
        }
    }

    #[test]
    fn single_clip_transitions_are_noops() {
        let mut c = blend();
        let commands = c.bind(&["Dance"]);
        // Stop-all, then idle loops; walk is the same clip so it is not stopped.
        assert_eq!(
            commands,
            vec![
                ClipCommand::Stop(ClipId(0)),
                ClipCommand::PlayLooping { clip: ClipId(0), restart: true },
            ]
        );
        assert!(c.on_transition(StateTransition::IdleToWalk).is_empty());
        assert!(c.on_transition(StateTransition::WalkToIdle).is_empty());
    }

    #[test]
    fn unbound_controller_issues_nothing() {
        let mut c = blend();
        let names: Vec<String> = Vec::new();
        assert!(c.bind(&names).is_empty());
        assert!(c.binding().is_none());
        assert!(c.on_transition(StateTransition::IdleToWalk).is_empty());
        assert_eq!(c.active_clip(), None);
    }

    #[test]
    fn rebinding_resets_to_idle() {
        let mut c = blend();
        c.bind(&["Idle", "Walk"]);
        c.on_transition(StateTransition::IdleToWalk);
        assert_eq!(c.active_role(), Role::Walk);

        c.bind(&["Rest", "Stroll", "Idle"]);
        assert_eq!(c.active_role(), Role::Idle);
        assert!(c.is_bound_to(&["Rest", "Stroll", "Idle"]));
        assert!(!c.is_bound_to(&["Idle", "Walk"]));
        assert_eq!(c.active_clip(), Some(ClipId(2)));
    }
}

// ── Players ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod players {
    use crate::{ClipLog, ClipPlayer, NoopPlayer, dispatch};

    use super::*;

    #[test]
    fn dispatch_preserves_order() {
        let mut c = blend();
        let mut log = ClipLog::new();
        let mut commands = c.bind(&["Idle", "Walk"]);
        commands.extend(c.on_transition(StateTransition::IdleToWalk));
        dispatch(&commands, &mut log);
        assert_eq!(log.commands, commands);
        assert_eq!(log.drain().len(), commands.len());
        assert!(log.commands.is_empty());
    }

    #[test]
    fn noop_player_accepts_everything() {
        let mut c = blend();
        let commands = c.bind(&["Idle", "Walk"]);
        dispatch(&commands, &mut NoopPlayer);
    }

    #[test]
    fn player_is_object_safe() {
        let mut log = ClipLog::new();
        {
            let player: &mut dyn ClipPlayer = &mut log;
            player.apply(&ClipCommand::Stop(ClipId(4)));
        }
        assert_eq!(log.commands, vec![ClipCommand::Stop(ClipId(4))]);
    }
}
