//! `frog`: headless demo of the wander controllers.
//!
//! Drives a few frogs around a square pond at a fixed 60 Hz for a minute of
//! simulated time.  Clip playback is logged instead of rendered; set
//! `RUST_LOG=debug` to also see every transition and cross-fade decision.
//!
//! Usage: `frog [config.json]`. The optional file overrides any
//! `WanderConfig` field, e.g. `{ "roam_radius": 4.0, "walk_speed": 2.5 }`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wander_anim::ClipPlayer;
use wander_behavior::{StateTransition, Transform};
use wander_core::{AgentId, ClipId, FrameClock, Vec3, WanderConfig};
use wander_sim::{FrameObserver, Wanderer, WandererBuilder, run_script};

// ── Constants ─────────────────────────────────────────────────────────────────

const FROG_COUNT: u32   = 3;
const SEED:       u64   = 42;
const FRAME_HZ:   f32   = 60.0;
const SIM_SECS:   usize = 60;

const CLIPS: [&str; 3] = ["Frog_Idle", "Frog_Walk", "Frog_Jump"];

// ── Host adapters ─────────────────────────────────────────────────────────────

/// Stands in for a renderer's animation mixer: logs each request.
struct LoggingMixer {
    agent:    AgentId,
    requests: usize,
}

impl LoggingMixer {
    fn new(agent: AgentId) -> Self {
        Self { agent, requests: 0 }
    }

    fn name(clip: ClipId) -> &'static str {
        CLIPS.get(clip.index()).copied().unwrap_or("?")
    }
}

impl ClipPlayer for LoggingMixer {
    fn play_looping(&mut self, clip: ClipId, restart: bool) {
        self.requests += 1;
        info!(agent = %self.agent, clip = Self::name(clip), restart, "play");
    }

    fn stop(&mut self, clip: ClipId) {
        self.requests += 1;
        info!(agent = %self.agent, clip = Self::name(clip), "stop");
    }

    fn cross_fade(&mut self, from: ClipId, to: ClipId, duration_secs: f32) {
        self.requests += 1;
        info!(
            agent = %self.agent,
            from = Self::name(from),
            to = Self::name(to),
            duration_secs,
            "cross-fade"
        );
    }
}

// ── Observer: walk statistics ─────────────────────────────────────────────────

#[derive(Default)]
struct WalkStats {
    walks:         usize,
    arrivals:      usize,
    last_position: Option<Vec3>,
    distance:      f32,
}

impl FrameObserver for WalkStats {
    fn on_transition(&mut self, _agent: AgentId, transition: StateTransition, _clock: &FrameClock) {
        match transition {
            StateTransition::IdleToWalk => self.walks += 1,
            StateTransition::WalkToIdle => self.arrivals += 1,
        }
    }

    fn on_frame_end(&mut self, _clock: &FrameClock, wanderer: &Wanderer) {
        let position = wanderer.transform().position;
        if let Some(last) = self.last_position {
            self.distance += position.distance(last);
        }
        self.last_position = Some(position);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

/// `RUST_LOG` wins when set and valid; otherwise log clip requests at info.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn load_config(path: Option<&Path>) -> Result<WanderConfig> {
    let config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => WanderConfig {
            roam_radius: 12.0,
            walk_speed:  4.0,
            ..WanderConfig::default()
        },
    };
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== frog: wander controllers ===");
    println!("Frogs: {FROG_COUNT}  |  Seconds: {SIM_SECS}  |  Seed: {SEED}");
    println!(
        "Roam radius {}  |  walk speed {}  |  idle {}–{} s",
        config.roam_radius, config.walk_speed, config.idle_secs_min, config.idle_secs_max
    );
    println!();

    let frame_secs = 1.0 / FRAME_HZ;
    let frame_count = SIM_SECS * FRAME_HZ as usize;

    println!("{:<10} {:>6} {:>9} {:>10} {:>8} {:>8} {:>7}", "Agent", "Walks", "Arrivals", "Distance", "X", "Z", "Clips");
    println!("{}", "-".repeat(64));

    for i in 0..FROG_COUNT {
        let agent = AgentId(i);
        // Spread the frogs out along X so they start apart.
        let start = Transform::new(Vec3::new(i as f32 * 2.0, 0.0, 0.0), 0.0);
        let mut frog = WandererBuilder::new(agent, config.clone())
            .seed(SEED)
            .transform(start)
            .clips(&CLIPS)
            .build()?;

        let mut mixer = LoggingMixer::new(agent);
        let mut transform = start;
        let mut stats = WalkStats::default();
        run_script(
            &mut frog,
            std::iter::repeat(frame_secs).take(frame_count),
            &mut mixer,
            &mut transform,
            &mut stats,
        );

        println!(
            "{:<10} {:>6} {:>9} {:>10.2} {:>8.2} {:>8.2} {:>7}",
            agent.to_string(),
            stats.walks,
            stats.arrivals,
            stats.distance,
            transform.position.x,
            transform.position.z,
            mixer.requests,
        );
    }

    Ok(())
}
