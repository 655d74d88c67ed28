//! Behavioural test: a strike connects exactly once whatever the frame rate.
//!
//! A cross is thrown at a fresh opponent and the clock is stepped at 30 fps,
//! 60 fps and with irregular gaps. Each run must land one hit, flash one
//! vignette and return the fighter to its starting depth.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use sparring::ai::{Bout, CombatEvent, FlashKind, StrikeKind, Zone};
use sparring::skeleton::{Armature, NodeId};
use sparring::Opponent;
use test_utils::{bound_opponent, head_and_spine, FrameDriver};

/// Long enough for the cross to finish, short of the first decision.
const RUN_UNTIL_MS: f64 = 1000.0;

#[derive(Debug)]
struct Run {
    opponent: Opponent<NodeId>,
    rig: Armature,
    bout: Bout,
    driver: FrameDriver,
}

#[derive(Debug, Clone)]
struct HitFixture {
    deltas: Vec<f64>,
    run: Arc<Mutex<Run>>,
}

impl HitFixture {
    fn bootstrap(deltas: &[f64]) -> Self {
        Self {
            deltas: deltas.to_vec(),
            run: Arc::new(Mutex::new(Self::fresh(deltas))),
        }
    }

    fn fresh(deltas: &[f64]) -> Run {
        let rig = head_and_spine();
        Run {
            opponent: bound_opponent(&rig, 21),
            rig,
            bout: Bout::new(),
            driver: FrameDriver::with_deltas(deltas, 0.0),
        }
    }

    fn run_guard(&self) -> MutexGuard<'_, Run> {
        self.run.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn throw_cross_and_wait(&self) {
        let mut guard = self.run_guard();
        *guard = Self::fresh(&self.deltas);
        let Run {
            opponent,
            rig,
            bout,
            driver,
        } = &mut *guard;
        opponent.throw_strike(0.0, StrikeKind::Cross, Zone::HEAD);
        driver.run_until(opponent, rig, bout, RUN_UNTIL_MS);
    }

    fn count(&self, pred: impl Fn(&CombatEvent) -> bool) -> usize {
        self.run_guard().driver.count(pred)
    }
}

fn describe_frame_schedule(label: &'static str, deltas: &[f64]) {
    let fixture = HitFixture::bootstrap(deltas);
    run_serial(
        label,
        fixture,
        |scenario: &mut Scenario<HitFixture>| {
            scenario.before_each(|state| state.throw_cross_and_wait());

            scenario.then("the player is hit exactly once", |state| {
                assert_eq!(
                    state.count(|e| matches!(e, CombatEvent::PlayerHit { .. })),
                    1
                );
            });

            scenario.then("one vignette flashes at the moment of contact", |state| {
                assert_eq!(
                    state.count(|e| matches!(
                        e,
                        CombatEvent::ScreenFlash {
                            kind: FlashKind::Vignette
                        }
                    )),
                    1
                );
            });

            scenario.then("the player loses one strike's damage", |state| {
                let run = state.run_guard();
                assert!((run.bout.player_health - 95.0).abs() < 1e-4);
            });

            scenario.then("the fighter is back at its starting depth", |state| {
                let run = state.run_guard();
                assert!(run.opponent.ai().lunge().is_none());
                assert!(!run.opponent.ai().is_attacking());
                assert!(run.opponent.body().z.abs() < 0.2);
            });
        },
    );
}

#[test]
fn cross_connects_once_at_thirty_fps() {
    describe_frame_schedule("a cross stepped at 30 fps", &[1000.0 / 30.0]);
}

#[test]
fn cross_connects_once_at_sixty_fps() {
    describe_frame_schedule("a cross stepped at 60 fps", &[1000.0 / 60.0]);
}

#[test]
fn cross_connects_once_with_irregular_frames() {
    describe_frame_schedule(
        "a cross stepped with irregular frame gaps",
        &[5.0, 47.0, 16.0, 120.0, 3.0, 33.0],
    );
}
