//! The player's side of the bout, as seen by the combat AI.

use serde::Serialize;

use crate::constants::FULL_HEALTH;

/// Direction of an active player evasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slip {
    /// Head moved to the player's left.
    Left,
    /// Head moved to the player's right.
    Right,
    /// Level change under the punch.
    Duck,
}

/// Health and defensive state shared between the AI and the host.
///
/// [`Bout`] is the in-crate implementation; hosts with their own health
/// bookkeeping implement this directly.
#[cfg_attr(test, mockall::automock)]
pub trait Ringside {
    /// Player health, nominally 0–100.
    fn player_health(&self) -> f32;
    /// Opponent health, nominally 0–100.
    fn opponent_health(&self) -> f32;
    /// Removes `damage` from the player.
    fn damage_player(&mut self, damage: f32);
    /// The evasion the player is performing right now, if any.
    fn player_slip(&self) -> Option<Slip>;
    /// Whether the player is holding a guard.
    fn player_guarding(&self) -> bool;
    /// Locks player input until `until_ms`.
    fn stun_player(&mut self, until_ms: f64);
}

/// Plain health bookkeeping for a bout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bout {
    /// Player health.
    pub player_health: f32,
    /// Opponent health.
    pub opponent_health: f32,
    /// Active player evasion.
    pub slip: Option<Slip>,
    /// Whether the player's guard is up.
    pub guarding: bool,
    /// Time at which the player's stun lifts, in ms.
    pub player_stunned_until: Option<f64>,
    /// Damage the player has taken this round.
    pub round_damage_taken: f32,
}

impl Bout {
    /// Both fighters at full health.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_health: FULL_HEALTH,
            opponent_health: FULL_HEALTH,
            slip: None,
            guarding: false,
            player_stunned_until: None,
            round_damage_taken: 0.0,
        }
    }

    /// Removes `damage` from the opponent, flooring at zero.
    pub fn damage_opponent(&mut self, damage: f32) {
        self.opponent_health = (self.opponent_health - damage).max(0.0);
    }

    /// Whether player input is locked at `now_ms`.
    #[must_use]
    pub fn player_stunned(&self, now_ms: f64) -> bool {
        self.player_stunned_until.is_some_and(|until| now_ms < until)
    }

    /// Whether either fighter is out.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.player_health <= 0.0 || self.opponent_health <= 0.0
    }
}

impl Default for Bout {
    fn default() -> Self {
        Self::new()
    }
}

impl Ringside for Bout {
    fn player_health(&self) -> f32 {
        self.player_health
    }

    fn opponent_health(&self) -> f32 {
        self.opponent_health
    }

    fn damage_player(&mut self, damage: f32) {
        self.player_health -= damage;
        self.round_damage_taken += damage;
    }

    fn player_slip(&self) -> Option<Slip> {
        self.slip
    }

    fn player_guarding(&self) -> bool {
        self.guarding
    }

    fn stun_player(&mut self, until_ms: f64) {
        self.player_stunned_until = Some(until_ms);
    }
}
