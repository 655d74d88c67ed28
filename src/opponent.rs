//! One sparring opponent: binding, pose engine and combat AI together.
//!
//! [`Opponent`] is the inbound surface a host talks to. It owns the engine
//! and the controller and wires them so the AI steers the engine through
//! [`Stage`](crate::engine::Stage) while the engine animates whatever
//! skeleton the host passes in each frame.

use glam::Vec3;
use log::info;

use crate::ai::{CombatAi, CombatEvent, Difficulty, Ringside, StrikeKind, Zone};
use crate::engine::{BlendSettings, PoseEngine};
use crate::pose::TargetPose;
use crate::rng::FightRng;
use crate::skeleton::{Binding, Skeleton};

/// A complete procedural opponent for skeletons with handle type `H`.
#[derive(Debug, Clone)]
pub struct Opponent<H> {
    engine: PoseEngine<H>,
    ai: CombatAi,
}

impl<H: Copy + Eq + std::fmt::Debug> Opponent<H> {
    /// Creates a disabled, unbound opponent.
    ///
    /// The engine and AI draw from independent streams forked off `rng`, so
    /// a seeded `rng` reproduces the whole bout.
    #[must_use]
    pub fn new(settings: BlendSettings, mut rng: FightRng) -> Self {
        let engine = PoseEngine::new(settings, rng.fork());
        let ai = CombatAi::new(rng.fork());
        Self { engine, ai }
    }

    /// Binds logical joints and fingers under `root`; returns how many
    /// joints were found.
    pub fn bind<S>(&mut self, skeleton: &S, root: H) -> usize
    where
        S: Skeleton<Handle = H> + ?Sized,
    {
        let binding = Binding::bind(skeleton, root);
        self.engine.bind(&binding);
        binding.bound_count()
    }

    /// Whether any joint is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.engine.is_bound()
    }

    /// Turns the AI on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.ai.set_enabled(enabled);
    }

    /// Changes AI difficulty.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        info!("difficulty set to {difficulty}");
        self.ai.set_difficulty(difficulty);
    }

    /// Enters or leaves a bout.
    pub fn set_combat_mode(&mut self, combat_mode: bool) {
        self.engine.set_combat_mode(combat_mode);
        self.ai.set_combat_mode(combat_mode);
    }

    /// Runs one frame at `now_ms`: AI first, then the engine.
    pub fn tick<S, R>(&mut self, now_ms: f64, skeleton: &mut S, ring: &mut R)
    where
        S: Skeleton<Handle = H> + ?Sized,
        R: Ringside + ?Sized,
    {
        self.ai.tick(now_ms, ring, &mut self.engine);
        self.engine.set_health(ring.opponent_health());
        self.engine.tick(now_ms, self.ai.body(), skeleton);
    }

    /// Reacts to a player hit at skeleton-local `point`.
    pub fn apply_hit(&mut self, point: Vec3, critical: bool) {
        self.engine.apply_hit(point, critical);
    }

    /// Interrupts the AI's attack and staggers it.
    pub fn cancel_attack(&mut self, now_ms: f64) {
        self.ai.cancel_attack(now_ms, &mut self.engine);
    }

    /// Throws `kind` at `zone` immediately, outside the decision loop.
    pub fn throw_strike(&mut self, now_ms: f64, kind: StrikeKind, zone: Zone) {
        self.ai.throw_strike(now_ms, kind, zone, &mut self.engine);
    }

    /// Overrides the pose the engine blends toward.
    pub fn set_target_pose(&mut self, target: impl Into<TargetPose>) {
        self.engine.set_target(target);
    }

    /// Overrides the target pose by name; unknown names fall back to idle.
    pub fn set_target_pose_named(&mut self, name: &str) {
        self.engine.set_target_named(name);
    }

    /// Logs a landed player hit for spam defense.
    pub fn register_player_hit(&mut self, now_ms: f64) {
        self.ai.register_player_hit(now_ms, &mut self.engine);
    }

    /// Whether the player's bonus-damage window is open.
    #[must_use]
    pub fn counter_window_open(&self, now_ms: f64) -> bool {
        self.ai.counter_window_open(now_ms)
    }

    /// Removes and yields pending combat events, oldest first.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, CombatEvent> {
        self.ai.events_mut().drain()
    }

    /// Root position of the fighter.
    #[must_use]
    pub const fn body(&self) -> Vec3 {
        self.ai.body()
    }

    /// The pose engine.
    #[must_use]
    pub const fn engine(&self) -> &PoseEngine<H> {
        &self.engine
    }

    /// The combat controller.
    #[must_use]
    pub const fn ai(&self) -> &CombatAi {
        &self.ai
    }
}
