//! Combo sequencing on a hard opponent, who always chains strikes.

use approx::assert_relative_eq;
use rstest::rstest;
use sparring::ai::{Bout, CombatEvent};
use sparring::skeleton::{Armature, NodeId};
use sparring::{Difficulty, Opponent};
use test_utils::{bound_opponent, head_and_spine, FrameDriver};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn hard_opponent(rig: &Armature, seed: u64) -> Opponent<NodeId> {
    let mut opponent = bound_opponent(rig, seed);
    opponent.set_difficulty(Difficulty::Hard);
    opponent
}

fn record(seed: u64, until_ms: f64) -> Vec<CombatEvent> {
    let mut rig = head_and_spine();
    let mut opponent = hard_opponent(&rig, seed);
    let mut bout = Bout::new();
    let mut driver = FrameDriver::at_fps(60.0, 0.0);
    driver.run_until(&mut opponent, &mut rig, &mut bout, until_ms);
    driver.events().to_vec()
}

#[rstest]
#[case(1)]
#[case(77)]
#[case(4096)]
fn seeded_bouts_replay_identically(#[case] seed: u64) {
    let first = record(seed, 8000.0);
    let second = record(seed, 8000.0);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[rstest]
fn every_decision_is_a_combo_and_queues_drain_on_time() {
    let mut rig = head_and_spine();
    let mut opponent = hard_opponent(&rig, 13);
    let mut bout = Bout::new();
    let mut deadline: Option<f64> = None;
    let mut combos = 0;

    for frame in 0..900_u32 {
        let now = f64::from(frame) * FRAME_MS;
        opponent.tick(now, &mut rig, &mut bout);
        bout.player_health = 100.0;

        for event in opponent.drain_events() {
            if let CombatEvent::AttackStarted { steps } = event {
                assert!(steps >= 2, "hard opponents only throw combos, got {steps}");
                combos += 1;
                let count = u32::try_from(steps).unwrap_or(u32::MAX);
                deadline = Some(now + f64::from(count) * 500.0 + FRAME_MS);
            }
        }

        if let Some(due) = deadline {
            if now >= due {
                assert!(opponent.ai().queue().is_empty(), "queue still full at {now}");
                deadline = None;
            }
        }
    }
    assert!(combos >= 3, "expected several combos in fifteen seconds");
}

#[rstest]
fn combos_wear_the_player_down() {
    let mut rig = head_and_spine();
    let mut opponent = hard_opponent(&rig, 21);
    let mut bout = Bout::new();
    let mut driver = FrameDriver::at_fps(60.0, 0.0);
    driver.run_until(&mut opponent, &mut rig, &mut bout, 4000.0);

    let hits = driver.count(|e| matches!(e, CombatEvent::PlayerHit { .. }));
    assert!(hits >= 2);
    assert!(bout.player_health < 100.0 - 8.0);
    assert!(bout.round_damage_taken > 8.0);
}

#[rstest]
#[case(5)]
#[case(21)]
#[case(333)]
fn one_cooldown_brings_exactly_one_combo(#[case] seed: u64) {
    let mut rig = head_and_spine();
    let mut opponent = hard_opponent(&rig, seed);
    let mut bout = Bout::new();
    let mut driver = FrameDriver::at_fps(60.0, 0.0);
    let cooldown = Difficulty::Hard.pattern().cooldown_ms;
    let started = |d: &FrameDriver| d.count(|e| matches!(e, CombatEvent::AttackStarted { .. }));

    while started(&driver) == 0 && driver.now_ms() <= cooldown + 2.0 * FRAME_MS {
        driver.step(&mut opponent, &mut rig, &mut bout);
    }
    let decided_at = driver.now_ms() - FRAME_MS;
    assert!(
        decided_at > cooldown - 1e-6 && decided_at < cooldown + FRAME_MS + 1e-6,
        "first decision at {decided_at}"
    );
    let steps = driver
        .events()
        .iter()
        .find_map(|e| match e {
            CombatEvent::AttackStarted { steps } => Some(*steps),
            _ => None,
        })
        .unwrap_or_default();
    assert!(steps >= 2);

    let hits = |d: &FrameDriver| d.count(|e| matches!(e, CombatEvent::PlayerHit { .. }));
    while hits(&driver) < steps && driver.now_ms() < decided_at + 10_000.0 {
        driver.step(&mut opponent, &mut rig, &mut bout);
    }
    let landed = u16::try_from(steps).unwrap_or(u16::MAX);
    assert_eq!(hits(&driver), steps);
    assert_eq!(started(&driver), 1);
    assert_relative_eq!(bout.player_health, 100.0 - 8.0 * f32::from(landed));

    driver.run_until(&mut opponent, &mut rig, &mut bout, decided_at + cooldown - 1.0);
    assert_eq!(started(&driver), 1, "a second attack inside one cooldown");
}
