//! Fixed and irregular frame stepping for opponents.

use sparring::ai::{CombatEvent, Ringside};
use sparring::skeleton::{Armature, NodeId};
use sparring::Opponent;

/// Advances an opponent frame by frame and collects what it emits.
#[derive(Debug, Clone)]
pub struct FrameDriver {
    now_ms: f64,
    deltas: Vec<f64>,
    cursor: usize,
    events: Vec<CombatEvent>,
}

impl FrameDriver {
    /// Steps of `1000 / fps` ms starting at `start_ms`.
    pub fn at_fps(fps: f64, start_ms: f64) -> Self {
        Self::with_deltas(&[1000.0 / fps], start_ms)
    }

    /// Steps cycling through `deltas` (ms) starting at `start_ms`.
    pub fn with_deltas(deltas: &[f64], start_ms: f64) -> Self {
        Self {
            now_ms: start_ms,
            deltas: deltas.to_vec(),
            cursor: 0,
            events: Vec::new(),
        }
    }

    /// Current simulated time.
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Every event drained so far.
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Count of drained events matching `pred`.
    pub fn count(&self, pred: impl Fn(&CombatEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    /// Ticks once at the current time, then advances the clock.
    pub fn step<R: Ringside>(
        &mut self,
        opponent: &mut Opponent<NodeId>,
        rig: &mut Armature,
        ring: &mut R,
    ) {
        opponent.tick(self.now_ms, rig, ring);
        self.events.extend(opponent.drain_events());
        let delta = self
            .deltas
            .get(self.cursor % self.deltas.len().max(1))
            .copied()
            .unwrap_or(16.0);
        self.cursor += 1;
        self.now_ms += delta;
    }

    /// Steps until the clock passes `until_ms`.
    pub fn run_until<R: Ringside>(
        &mut self,
        opponent: &mut Opponent<NodeId>,
        rig: &mut Armature,
        ring: &mut R,
        until_ms: f64,
    ) {
        while self.now_ms <= until_ms {
            self.step(opponent, rig, ring);
        }
    }
}
