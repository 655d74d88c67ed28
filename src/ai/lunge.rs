//! A strike in flight: reach, vertical drive and the pending phase poses.

use std::f32::consts::PI;

use crate::numeric::expect_f32;

use super::strike::{Phase, StrikeKind, StrikePlan, Zone};

/// Height gained by a vertical drive at its peak.
const DRIVE_LIFT: f32 = 0.2;
/// Time to reach the peak of a vertical drive, and again to settle.
const DRIVE_RISE_MS: f64 = 150.0;

/// Runtime state of the strike currently being thrown.
#[derive(Debug, Clone, PartialEq)]
pub struct LungeState {
    plan: StrikePlan,
    started_ms: f64,
    start_z: f32,
    damage: f32,
    is_combo: bool,
    hit_triggered: bool,
    next_phase: usize,
}

impl LungeState {
    /// Starts `plan` at `now_ms` from forward position `start_z`.
    #[must_use]
    pub const fn new(plan: StrikePlan, now_ms: f64, start_z: f32, damage: f32, is_combo: bool) -> Self {
        Self {
            plan,
            started_ms: now_ms,
            start_z,
            damage,
            is_combo,
            hit_triggered: false,
            next_phase: 0,
        }
    }

    /// Strike being thrown.
    #[must_use]
    pub const fn kind(&self) -> StrikeKind {
        self.plan.kind
    }

    /// Target zone.
    #[must_use]
    pub const fn zone(&self) -> Zone {
        self.plan.zone
    }

    /// The full strike plan.
    #[must_use]
    pub const fn plan(&self) -> &StrikePlan {
        &self.plan
    }

    /// Forward position the lunge returns to.
    #[must_use]
    pub const fn start_z(&self) -> f32 {
        self.start_z
    }

    /// Damage dealt if the strike lands.
    #[must_use]
    pub const fn damage(&self) -> f32 {
        self.damage
    }

    /// Whether the strike belongs to a multi-strike combo.
    #[must_use]
    pub const fn is_combo(&self) -> bool {
        self.is_combo
    }

    /// Whether the hit has already been applied.
    #[must_use]
    pub const fn hit_triggered(&self) -> bool {
        self.hit_triggered
    }

    /// Time since the throw.
    #[must_use]
    pub fn elapsed(&self, now_ms: f64) -> f64 {
        (now_ms - self.started_ms).max(0.0)
    }

    /// Fraction of the lunge completed, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.plan.duration_ms <= 0.0 {
            return 1.0;
        }
        expect_f32((self.elapsed(now_ms) / self.plan.duration_ms).clamp(0.0, 1.0))
    }

    /// Forward position for `progress`: out and back on a half sine.
    #[must_use]
    pub fn reach(&self, progress: f32) -> f32 {
        (progress * PI).sin().mul_add(self.plan.depth, self.start_z)
    }

    /// Body height imposed by a vertical drive, if this strike has one.
    #[must_use]
    pub fn lift(&self, now_ms: f64) -> Option<f32> {
        if !self.plan.vertical_drive {
            return None;
        }
        let elapsed = self.elapsed(now_ms);
        let height = if elapsed < DRIVE_RISE_MS {
            DRIVE_LIFT * expect_f32(elapsed / DRIVE_RISE_MS)
        } else if elapsed < DRIVE_RISE_MS * 2.0 {
            DRIVE_LIFT - DRIVE_LIFT * expect_f32((elapsed - DRIVE_RISE_MS) / DRIVE_RISE_MS)
        } else {
            0.0
        };
        Some(height)
    }

    /// Phases that have come due since the last call, in order.
    pub fn due_phases(&mut self, now_ms: f64) -> &[Phase] {
        let elapsed = self.elapsed(now_ms);
        let from = self.next_phase;
        let remaining = self.plan.phases.get(from..).unwrap_or_default();
        let due = remaining.iter().take_while(|p| p.at_ms <= elapsed).count();
        self.next_phase = from + due;
        self.plan.phases.get(from..self.next_phase).unwrap_or_default()
    }

    /// Marks the hit as applied; returns `false` if it already was.
    pub fn trigger_hit(&mut self) -> bool {
        !std::mem::replace(&mut self.hit_triggered, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn lunge(kind: StrikeKind, zone: Zone) -> LungeState {
        LungeState::new(kind.plan(zone), 1000.0, 0.1, 5.0, false)
    }

    #[rstest]
    #[case(1000.0, 0.0)]
    #[case(1175.0, 0.5)]
    #[case(1350.0, 1.0)]
    #[case(5000.0, 1.0)]
    #[case(900.0, 0.0)]
    fn progress_is_clamped(#[case] now: f64, #[case] expected: f32) {
        assert_relative_eq!(lunge(StrikeKind::Jab, Zone::HEAD).progress(now), expected);
    }

    #[test]
    fn reach_peaks_halfway_and_returns() {
        let state = lunge(StrikeKind::Jab, Zone::HEAD);
        assert_relative_eq!(state.reach(0.0), 0.1);
        assert_relative_eq!(state.reach(0.5), 1.7, epsilon = 1e-6);
        assert_relative_eq!(state.reach(1.0), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn phases_are_consumed_once() {
        let mut state = lunge(StrikeKind::Jab, Zone::HEAD);
        assert_eq!(state.due_phases(1000.0).len(), 1);
        assert!(state.due_phases(1020.0).is_empty());
        // A long frame releases the two phases it skipped over.
        let late: Vec<f64> = state.due_phases(1090.0).iter().map(|p| p.at_ms).collect();
        assert_eq!(late, [40.0, 80.0]);
        assert_eq!(state.due_phases(2000.0).len(), 1);
        assert!(state.due_phases(3000.0).is_empty());
    }

    #[rstest]
    #[case(1000.0, 0.0)]
    #[case(1075.0, 0.1)]
    #[case(1150.0, 0.2)]
    #[case(1225.0, 0.1)]
    #[case(1400.0, 0.0)]
    fn vertical_drive_rises_then_settles(#[case] now: f64, #[case] height: f32) {
        let state = lunge(StrikeKind::LeftUppercut, Zone::HEAD);
        assert_relative_eq!(state.lift(now).unwrap_or(f32::NAN), height, epsilon = 1e-6);
    }

    #[test]
    fn body_uppercut_has_no_lift() {
        assert_eq!(lunge(StrikeKind::LeftUppercut, Zone::BODY).lift(1100.0), None);
    }

    #[test]
    fn hit_triggers_once() {
        let mut state = lunge(StrikeKind::Cross, Zone::BODY);
        assert!(state.trigger_hit());
        assert!(!state.trigger_hit());
        assert!(state.hit_triggered());
    }
}
