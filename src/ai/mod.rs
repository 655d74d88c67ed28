//! Opponent combat AI.
//!
//! [`CombatAi`] is a frame-driven state machine. Each tick it drifts the
//! fighter around with footwork, advances the strike in flight, throws the
//! next queued combo step once its delay has passed and, when the cooldown
//! allows, decides on a new attack. Everything deferred is kept as a due
//! time inside the controller, so dropping state cancels it.
//!
//! The controller never touches a skeleton. It steers presentation through
//! the [`Stage`] seam and reads health through [`Ringside`].

mod combo;
mod difficulty;
mod events;
mod lunge;
mod ringside;
mod strike;

pub use combo::{ComboQueue, ComboStep, COMBO_LIBRARY};
pub use difficulty::{Difficulty, Pattern, UnknownDifficulty};
pub use events::{CombatEvent, CombatEvents, FlashKind};
pub use lunge::LungeState;
pub use ringside::{Bout, Ringside, Slip};
pub use strike::{Aim, Height, Phase, StrikeKind, StrikePlan, Zone};

use glam::Vec3;
use log::{debug, info};

use crate::constants::{
    COUNTER_WINDOW_MS, GUARD_HOLD_MAX_MS, GUARD_HOLD_MIN_MS, GUARD_PASS_THROUGH,
    HIT_LOG_RETENTION_MS, INTERRUPT_STUN_MS, PLAYER_STUN_MS, SPAM_HIT_COUNT, SPAM_WINDOW_MS,
};
use crate::engine::Stage;
use crate::numeric::expect_f32;
use crate::pose::PoseId;
use crate::rng::FightRng;

/// Footwork approach rate on the ground plane.
const FOOTWORK_SMOOTHING: f32 = 0.03;
/// Approach rate of the vertical bob.
const BOB_SMOOTHING: f32 = 0.1;
/// Probability a single strike goes to the body.
const BODY_SHOT_CHANCE: f32 = 0.3;

/// Drives one opponent: footwork, attack decisions, strikes and defense.
#[derive(Debug, Clone)]
pub struct CombatAi {
    enabled: bool,
    combat_mode: bool,
    difficulty: Difficulty,
    body: Vec3,
    attacking: bool,
    lunge: Option<LungeState>,
    queue: ComboQueue,
    next_step_ms: Option<f64>,
    strike_damage: f32,
    combo_active: bool,
    last_attack_ms: Option<f64>,
    stunned_until: Option<f64>,
    guard_until: Option<f64>,
    counter_until: Option<f64>,
    hit_log: Vec<f64>,
    rng: FightRng,
    events: CombatEvents,
}

impl CombatAi {
    /// A disabled controller at medium difficulty.
    #[must_use]
    pub fn new(rng: FightRng) -> Self {
        let difficulty = Difficulty::default();
        Self {
            enabled: false,
            combat_mode: false,
            difficulty,
            body: Vec3::ZERO,
            attacking: false,
            lunge: None,
            queue: ComboQueue::default(),
            next_step_ms: None,
            strike_damage: difficulty.pattern().damage,
            combo_active: false,
            last_attack_ms: None,
            stunned_until: None,
            guard_until: None,
            counter_until: None,
            hit_log: Vec::new(),
            rng,
            events: CombatEvents::default(),
        }
    }

    /// Turns the controller on or off. Switching off abandons any attack.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stand_down();
        }
    }

    /// Whether the controller is enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enters or leaves a bout. Leaving abandons any attack.
    pub fn set_combat_mode(&mut self, combat_mode: bool) {
        self.combat_mode = combat_mode;
        if !combat_mode {
            self.stand_down();
        }
    }

    /// Whether a bout is running.
    #[must_use]
    pub const fn combat_mode(&self) -> bool {
        self.combat_mode
    }

    /// Changes difficulty; takes effect from the next decision.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if !self.attacking {
            self.strike_damage = difficulty.pattern().damage;
        }
    }

    /// Current difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Root position of the fighter.
    #[must_use]
    pub const fn body(&self) -> Vec3 {
        self.body
    }

    /// Moves the fighter's root, e.g. when the host resets the ring.
    pub fn set_body(&mut self, body: Vec3) {
        self.body = body;
    }

    /// Whether an attack is under way.
    #[must_use]
    pub const fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// The strike in flight, if any.
    #[must_use]
    pub const fn lunge(&self) -> Option<&LungeState> {
        self.lunge.as_ref()
    }

    /// Steps still queued in the current attack.
    #[must_use]
    pub const fn queue(&self) -> &ComboQueue {
        &self.queue
    }

    /// Whether the controller is staggered at `now_ms`.
    #[must_use]
    pub fn is_stunned(&self, now_ms: f64) -> bool {
        self.stunned_until.is_some_and(|until| now_ms < until)
    }

    /// Whether the guard is held.
    #[must_use]
    pub const fn is_guarding(&self) -> bool {
        self.guard_until.is_some()
    }

    /// Whether the player's bonus-damage window is open at `now_ms`.
    #[must_use]
    pub fn counter_window_open(&self, now_ms: f64) -> bool {
        self.counter_until.is_some_and(|until| now_ms < until)
    }

    /// Pending notifications for the host.
    pub fn events_mut(&mut self) -> &mut CombatEvents {
        &mut self.events
    }

    /// Advances the controller to `now_ms`.
    ///
    /// Does nothing unless enabled and in a bout. A staggered controller
    /// keeps its guard timer and hit log current but otherwise waits.
    pub fn tick<R, S>(&mut self, now_ms: f64, ring: &mut R, stage: &mut S)
    where
        R: Ringside + ?Sized,
        S: Stage + ?Sized,
    {
        if !self.enabled || !self.combat_mode {
            return;
        }

        if self.guard_until.is_some_and(|until| now_ms >= until) {
            self.guard_until = None;
            if !self.attacking {
                stage.set_target_pose(PoseId::Fight.into());
            }
        }
        self.hit_log.retain(|&at| now_ms - at < HIT_LOG_RETENTION_MS);

        if !self.body.x.is_finite() || !self.body.z.is_finite() {
            self.body = Vec3::ZERO;
        }

        if let Some(until) = self.stunned_until {
            if now_ms < until {
                return;
            }
            self.stunned_until = None;
        }

        let pattern = self
            .difficulty
            .pattern()
            .adapted(ring.opponent_health() - ring.player_health());

        if !self.attacking {
            self.footwork(now_ms, &pattern);
        }

        self.advance_lunge(now_ms, ring, stage);

        let step_due = self.next_step_ms.is_some_and(|due| now_ms >= due);
        let lunge_busy = self.lunge.as_ref().is_some_and(|l| !l.hit_triggered());
        if step_due && !lunge_busy {
            self.next_step_ms = None;
            self.process_combo_step(now_ms, stage);
        }

        let last = *self.last_attack_ms.get_or_insert(now_ms);
        if now_ms - last > pattern.cooldown_ms
            && !self.attacking
            && self.lunge.is_none()
            && self.queue.is_empty()
            && self.next_step_ms.is_none()
        {
            self.decide_attack(now_ms, &pattern, stage);
            self.last_attack_ms = Some(now_ms);
        }
    }

    fn footwork(&mut self, now_ms: f64, pattern: &Pattern) {
        let t = now_ms * 0.001;
        let speed = f64::from(pattern.move_speed);
        let x = 0.3f64.mul_add((t * speed * 20.0).sin(), 0.15 * (t * 0.5).sin());
        let z = 0.15f64.mul_add((t * speed * 15.0).cos(), -0.1 * (t * 0.2).sin());
        let y = 0.015 * (t * 2.5).sin();

        self.body.x += (expect_f32(x) - self.body.x) * FOOTWORK_SMOOTHING;
        self.body.z += (expect_f32(z) - self.body.z) * FOOTWORK_SMOOTHING;
        self.body.y += (expect_f32(y) - self.body.y) * BOB_SMOOTHING;
    }

    fn advance_lunge<R, S>(&mut self, now_ms: f64, ring: &mut R, stage: &mut S)
    where
        R: Ringside + ?Sized,
        S: Stage + ?Sized,
    {
        let Some(lunge) = self.lunge.as_mut() else {
            return;
        };

        for phase in lunge.due_phases(now_ms) {
            stage.set_target_pose(phase.pose.into());
            if phase.grounds {
                self.body.y = 0.0;
            }
        }

        let progress = lunge.progress(now_ms);
        self.body.z = lunge.reach(progress);
        if let Some(height) = lunge.lift(now_ms) {
            self.body.y = height;
        }

        if progress >= 0.5 && lunge.trigger_hit() {
            let (kind, damage, is_combo) = (lunge.kind(), lunge.damage(), lunge.is_combo());
            let shake = if lunge.plan().depth > 1.5 { 0.25 } else { 0.15 };
            self.hit_player(now_ms, kind, damage, is_combo, ring, stage);
            stage.shake_camera(shake);
            self.events.push(CombatEvent::ScreenFlash {
                kind: FlashKind::Vignette,
            });
        }

        if progress >= 1.0 {
            if let Some(finished) = self.lunge.take() {
                self.body.z = finished.start_z();
            }
            self.attacking = false;
            stage.set_target_pose(PoseId::Fight.into());
        }
    }

    /// Chooses and starts a new attack using `pattern`.
    ///
    /// Rolls `combo_chance` for a sequence from [`COMBO_LIBRARY`]; otherwise
    /// a single basic strike, to the body 30% of the time.
    pub fn decide_attack<S>(&mut self, now_ms: f64, pattern: &Pattern, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        if self.rng.chance(pattern.combo_chance) {
            let pick = self.rng.index(COMBO_LIBRARY.len());
            let sequence = COMBO_LIBRARY.get(pick).copied().unwrap_or_default();
            self.queue.load(sequence);
            info!("combo queued: {}", self.queue);
        } else {
            let pick = self.rng.index(StrikeKind::BASIC.len());
            let kind = StrikeKind::BASIC.get(pick).copied().unwrap_or(StrikeKind::Jab);
            let step = if self.rng.chance(BODY_SHOT_CHANCE) {
                ComboStep::body(kind)
            } else {
                ComboStep::head(kind)
            };
            self.queue.load(&[step]);
            debug!("single strike queued: {step}");
        }

        self.strike_damage = pattern.damage;
        self.combo_active = self.queue.len() > 1;
        self.events.push(CombatEvent::AttackStarted {
            steps: self.queue.len(),
        });
        self.process_combo_step(now_ms, stage);
    }

    /// Throws the next queued step and schedules the one after it.
    ///
    /// An empty queue ends the attack once the last lunge is done.
    pub fn process_combo_step<S>(&mut self, now_ms: f64, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        let Some(step) = self.queue.pop() else {
            // The last strike may still be in flight.
            self.attacking = self.lunge.is_some();
            self.combo_active = false;
            self.next_step_ms = None;
            return;
        };

        self.attacking = true;
        self.throw_strike(now_ms, step.kind, step.zone, stage);
        self.next_step_ms = Some(now_ms + step.kind.follow_up_ms());
    }

    /// Starts `kind` aimed at `zone`.
    ///
    /// A strike still in flight is superseded and its start position kept.
    /// Ignored while staggered.
    pub fn throw_strike<S>(&mut self, now_ms: f64, kind: StrikeKind, zone: Zone, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        if self.is_stunned(now_ms) {
            return;
        }

        let plan = kind.plan(zone);
        debug!("throwing {kind} at {zone}");
        let start_z = self
            .lunge
            .as_ref()
            .map_or(self.body.z, LungeState::start_z);
        self.body.y -= plan.dip;

        let mut lunge = LungeState::new(
            plan,
            now_ms,
            start_z,
            self.strike_damage,
            self.combo_active,
        );
        for phase in lunge.due_phases(now_ms) {
            stage.set_target_pose(phase.pose.into());
        }
        self.attacking = true;
        self.lunge = Some(lunge);
    }

    /// Resolves a landed strike against the player.
    ///
    /// A matching evasion cancels it outright. Otherwise the guard lets
    /// 30% through, and an unguarded player is stunned.
    pub fn hit_player<R, S>(
        &mut self,
        now_ms: f64,
        kind: StrikeKind,
        damage: f32,
        is_combo: bool,
        ring: &mut R,
        stage: &mut S,
    ) where
        R: Ringside + ?Sized,
        S: Stage + ?Sized,
    {
        if ring.player_slip().is_some_and(|slip| kind.evaded_by(slip)) {
            debug!("{kind} evaded");
            self.events.extend([
                CombatEvent::Evaded,
                CombatEvent::ScreenFlash {
                    kind: FlashKind::Evade,
                },
            ]);
            return;
        }

        let dealt = if ring.player_guarding() {
            damage * GUARD_PASS_THROUGH
        } else {
            ring.stun_player(now_ms + PLAYER_STUN_MS);
            damage
        };

        let before = ring.player_health();
        ring.damage_player(dealt);
        self.events.extend([
            CombatEvent::PlayerHit { damage: dealt },
            CombatEvent::RefreshUi,
        ]);
        if before > 0.0 && ring.player_health() <= 0.0 {
            info!("player knocked out");
            self.events.push(CombatEvent::MatchOver { player_won: false });
        }

        stage.nudge_camera(if is_combo { 0.08 } else { 0.05 });
        self.events.push(CombatEvent::ScreenFlash {
            kind: FlashKind::Damage,
        });
    }

    /// Interrupts the current attack and staggers the opponent.
    ///
    /// Does nothing unless an attack or lunge is under way.
    pub fn cancel_attack<S>(&mut self, now_ms: f64, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        if !self.attacking && self.lunge.is_none() {
            return;
        }
        info!("attack interrupted");
        self.attacking = false;
        self.lunge = None;
        self.queue.clear();
        self.next_step_ms = None;
        self.combo_active = false;
        self.stunned_until = Some(now_ms + INTERRUPT_STUN_MS);
        stage.set_target_pose(PoseId::Fight.into());
        self.body.z = 0.0;
    }

    /// Logs a landed player hit; repeated hits force a guard.
    ///
    /// Three hits inside 800 ms clear any stagger, raise the guard and open
    /// a 500 ms counter window.
    pub fn register_player_hit<S>(&mut self, now_ms: f64, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        self.hit_log.push(now_ms);
        let recent = self
            .hit_log
            .iter()
            .filter(|&&at| now_ms - at < SPAM_WINDOW_MS)
            .count();
        if recent < SPAM_HIT_COUNT {
            return;
        }

        info!("spam detected; forcing guard");
        self.stunned_until = None;
        self.activate_guard(now_ms, stage);
        self.counter_until = Some(now_ms + COUNTER_WINDOW_MS);
        self.events.push(CombatEvent::CounterWindow {
            duration_ms: COUNTER_WINDOW_MS,
        });
        self.hit_log.clear();
    }

    /// Raises the guard for 1.5–2.5 s unless attacking or already guarding.
    pub fn activate_guard<S>(&mut self, now_ms: f64, stage: &mut S)
    where
        S: Stage + ?Sized,
    {
        if self.attacking || self.guard_until.is_some() {
            return;
        }
        let hold = self.rng.random_range(GUARD_HOLD_MIN_MS, GUARD_HOLD_MAX_MS);
        self.guard_until = Some(now_ms + hold);
        stage.set_target_pose(PoseId::Guard.into());
        self.events.push(CombatEvent::GuardRaised);
    }

    fn stand_down(&mut self) {
        self.attacking = false;
        self.lunge = None;
        self.queue.clear();
        self.next_step_ms = None;
        self.combo_active = false;
        self.guard_until = None;
        self.last_attack_ms = None;
        self.body.z = 0.0;
    }
}
