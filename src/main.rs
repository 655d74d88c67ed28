//! Headless sparring runner.
//!
//! Simulates a bout on a stock Mixamo-layout armature at a fixed frame rate
//! and logs every combat event as a JSON line. The player is scripted: it
//! never defends and counters each hit it takes.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec3;
use log::info;
use sparring::ai::{Bout, CombatEvent};
use sparring::skeleton::{Armature, NodeId};
use sparring::{init_logging, BlendSettings, Difficulty, FightRng, Opponent};

/// Procedural sparring opponent, run without a renderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Opponent difficulty: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,
    /// Seed for a reproducible bout
    #[arg(short, long)]
    seed: Option<u64>,
    /// Simulated length of the bout in seconds
    #[arg(long, default_value_t = 30.0)]
    seconds: f64,
    /// Simulation frame rate
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
    /// JSON file overriding blend tuning
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Where the scripted player's counters land: a straight to the face.
const COUNTER_POINT: Vec3 = Vec3::new(0.0, 1.4, 0.1);
/// Damage each scripted counter deals.
const COUNTER_DAMAGE: f32 = 4.0;

fn load_settings(tuning: Option<&PathBuf>) -> Result<BlendSettings> {
    let Some(path) = tuning else {
        return Ok(BlendSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    BlendSettings::from_json_str(&text)
        .with_context(|| format!("parsing tuning file {}", path.display()))
}

fn run(opponent: &mut Opponent<NodeId>, rig: &mut Armature, args: &Args) -> Result<Bout> {
    anyhow::ensure!(args.fps > 0.0, "fps must be positive");
    let frame_ms = 1000.0 / args.fps;
    let mut bout = Bout::new();
    let mut now_ms = 0.0;

    while now_ms < args.seconds * 1000.0 && !bout.is_over() {
        opponent.tick(now_ms, rig, &mut bout);
        let events: Vec<CombatEvent> = opponent.drain_events().collect();
        for event in events {
            info!("{}", serde_json::to_string(&event)?);
            if let CombatEvent::PlayerHit { .. } = event {
                // The scripted player answers every landed shot.
                opponent.apply_hit(COUNTER_POINT, false);
                opponent.register_player_hit(now_ms);
                bout.damage_opponent(COUNTER_DAMAGE);
            }
        }
        now_ms += frame_ms;
    }
    Ok(bout)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(args.tuning.as_ref())?;
    let rng = args.seed.map_or_else(FightRng::from_entropy, FightRng::from_seed);
    let mut rig = Armature::humanoid();
    let mut opponent = Opponent::new(settings, rng);
    let bound = opponent.bind(&rig, rig.root());
    info!("bound {bound} joints");

    opponent.set_difficulty(args.difficulty);
    opponent.set_enabled(true);
    opponent.set_combat_mode(true);

    let bout = run(&mut opponent, &mut rig, &args)?;
    info!(
        "bout finished: player {:.1}, opponent {:.1}",
        bout.player_health, bout.opponent_health
    );
    Ok(())
}
