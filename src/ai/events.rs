//! Outbound combat notifications and the outbox that buffers them.

use serde::Serialize;

/// Screen flash styles the host may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashKind {
    /// Red vignette at the moment a strike connects.
    Vignette,
    /// Brief full-screen red wash after damage lands.
    Damage,
    /// Green wash when the player evades.
    Evade,
}

/// Something the host should know about after a tick.
///
/// Serialises as internally tagged JSON:
///
/// ```
/// use sparring::ai::CombatEvent;
/// let json = serde_json::to_string(&CombatEvent::PlayerHit { damage: 8.0 })
///     .expect("events serialise");
/// assert_eq!(json, r#"{"type":"player_hit","damage":8.0}"#);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CombatEvent {
    /// The player took `damage` after guard reduction.
    PlayerHit {
        /// Health removed from the player.
        damage: f32,
    },
    /// Health values changed; redraw the HUD.
    RefreshUi,
    /// The bout ended.
    MatchOver {
        /// `false` when the AI knocked the player out.
        player_won: bool,
    },
    /// The player slipped or ducked a strike.
    Evaded,
    /// Flash the screen.
    ScreenFlash {
        /// Which flash to show.
        kind: FlashKind,
    },
    /// The AI committed to an attack of `steps` strikes.
    AttackStarted {
        /// Number of strikes queued.
        steps: usize,
    },
    /// The AI raised its guard.
    GuardRaised,
    /// The player earned a short bonus-damage window.
    CounterWindow {
        /// Window length in ms.
        duration_ms: f64,
    },
}

/// FIFO buffer of [`CombatEvent`]s awaiting the host.
#[derive(Debug, Clone, Default)]
pub struct CombatEvents {
    events: Vec<CombatEvent>,
}

impl CombatEvents {
    /// Queues one event.
    pub fn push(&mut self, event: CombatEvent) {
        self.events.push(event);
    }

    /// Queues several events in order.
    pub fn extend<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = CombatEvent>,
    {
        self.events.extend(events);
    }

    /// Removes and yields every queued event, oldest first.
    pub fn drain(&mut self) -> std::vec::Drain<'_, CombatEvent> {
        self.events.drain(..)
    }

    /// Queued events without removing them.
    #[must_use]
    pub fn as_slice(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
