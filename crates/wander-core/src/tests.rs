//! Unit tests for wander-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, ClipId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(ClipId(1).to_string(), "ClipId(1)");
    }
}

#[cfg(test)]
mod geom {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::Vec3;
    use crate::geom::{direction_and_distance, heading, shortest_arc, smoothing_factor, turn_toward, wrap_angle};

    #[test]
    fn direction_ignores_y() {
        let (dir, dist) = direction_and_distance(Vec3::new(3.0, 7.0, -4.0));
        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir - Vec3::new(0.6, 0.0, -0.8)).length() < 1e-6);
        assert_eq!(direction_and_distance(Vec3::new(0.0, 2.0, 0.0)), (Vec3::ZERO, 0.0));
    }

    #[test]
    fn direction_survives_huge_offsets() {
        for v in [Vec3::new(-3.9e19, 0.0, -4.1e19), Vec3::new(f32::MAX, 0.0, -f32::MAX)] {
            let (dir, dist) = direction_and_distance(v);
            assert!((dir.length() - 1.0).abs() < 1e-6, "{dir:?}");
            assert!(dir.x.signum() == v.x.signum() && dir.z.signum() == v.z.signum());
            assert!(dist > 0.0);
        }
    }

    #[test]
    fn heading_axes() {
        assert!(heading(Vec3::Z).abs() < 1e-6);
        assert!((heading(Vec3::X) - FRAC_PI_2).abs() < 1e-6);
        assert!((heading(-Vec3::X) + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn wrap_stays_in_half_open_range() {
        for a in [-10.0f32, -PI, -1.0, 0.0, 1.0, PI, 3.5, 10.0, 100.0] {
            let w = wrap_angle(a);
            assert!(w > -PI - 1e-5 && w <= PI + 1e-5, "{a} -> {w}");
            // Same direction as the input.
            assert!((w.sin() - a.sin()).abs() < 1e-4, "{a} -> {w}");
            assert!((w.cos() - a.cos()).abs() < 1e-4, "{a} -> {w}");
        }
        assert!((wrap_angle(-PI) - PI).abs() < 1e-6);
    }

    #[test]
    fn shortest_arc_crosses_seam() {
        // From just under +PI to just over -PI is a small positive turn.
        let arc = shortest_arc(PI - 0.1, -PI + 0.1);
        assert!((arc - 0.2).abs() < 1e-5, "got {arc}");
    }

    #[test]
    fn smoothing_is_frame_rate_independent() {
        let rate = 8.0;
        let one = smoothing_factor(rate, 0.1);
        let half = smoothing_factor(rate, 0.05);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((one - two_halves).abs() < 1e-6);
        assert_eq!(smoothing_factor(rate, 0.0), 0.0);
    }

    #[test]
    fn turn_toward_approaches_target() {
        let mut yaw = 0.0;
        for _ in 0..200 {
            yaw = wrap_angle(yaw + turn_toward(yaw, 1.0, 8.0, 1.0 / 60.0));
        }
        assert!((yaw - 1.0).abs() < 1e-3, "got {yaw}");
    }

    #[test]
    fn turn_toward_takes_short_way_round() {
        // Facing just left of the seam, target just right of it: turn positive.
        let turn = turn_toward(PI - 0.05, -PI + 0.05, 8.0, 0.1);
        assert!(turn > 0.0 && turn < 0.1, "got {turn}");
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, FrameDelta};

    #[test]
    fn clamps_bad_deltas() {
        assert_eq!(FrameDelta::new(-1.0), FrameDelta::ZERO);
        assert_eq!(FrameDelta::new(f32::NAN), FrameDelta::ZERO);
        assert_eq!(FrameDelta::new(f32::INFINITY), FrameDelta::ZERO);
        assert_eq!(FrameDelta::new(0.25).secs(), 0.25);
        assert!(FrameDelta::is_clamped(-0.5));
        assert!(!FrameDelta::is_clamped(0.0));
    }

    #[test]
    fn clock_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(FrameDelta::new(0.5));
        clock.advance(FrameDelta::new(-3.0));
        clock.advance(FrameDelta::new(0.25));
        assert_eq!(clock.frame, 3);
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }
}

#[cfg(test)]
mod config {
    use crate::{WanderConfig, WanderError};

    #[test]
    fn default_is_valid() {
        assert!(WanderConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_radius_is_valid() {
        let cfg = WanderConfig { roam_radius: 0.0, ..WanderConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn equal_idle_bounds_are_valid() {
        let cfg = WanderConfig { idle_secs_min: 2.0, idle_secs_max: 2.0, ..WanderConfig::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn inverted_idle_range_rejected() {
        let cfg = WanderConfig { idle_secs_min: 5.0, idle_secs_max: 1.0, ..WanderConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(WanderError::InvalidIdleRange { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn non_positive_speed_rejected() {
        let cfg = WanderConfig { walk_speed: 0.0, ..WanderConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(WanderError::NonPositive { what: "walk_speed", .. })
        ));
    }

    #[test]
    fn negative_radius_rejected() {
        let cfg = WanderConfig { roam_radius: -1.0, ..WanderConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(WanderError::Negative { what: "roam_radius", .. })
        ));
    }

    #[test]
    fn nan_rejected() {
        let cfg = WanderConfig { blend_secs: f32::NAN, ..WanderConfig::default() };
        assert!(matches!(
            cfg.validate(),
            Err(WanderError::NonFinite { what: "blend_secs", .. })
        ));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.uniform(0.0, 10.0), r2.uniform(0.0, 10.0));
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn uniform_in_closed_bounds() {
        let mut rng = AgentRng::from_seed(0);
        for _ in 0..1000 {
            let v = rng.uniform(2.0, 4.0);
            assert!((2.0..=4.0).contains(&v));
        }
    }

    #[test]
    fn symmetric_handles_any_finite_radius() {
        let mut rng = AgentRng::from_seed(3);
        for _ in 0..1000 {
            let v = rng.symmetric(f32::MAX);
            assert!(v.is_finite() && v.abs() <= f32::MAX);
            let w = rng.symmetric(12.0);
            assert!((-12.0..=12.0).contains(&w));
        }
    }

    #[test]
    fn degenerate_ranges() {
        let mut rng = AgentRng::from_seed(9);
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
        assert_eq!(rng.symmetric(0.0), 0.0);
    }
}
