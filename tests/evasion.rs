//! Evasion and guard resolution against mocked host collaborators.

use mockall::mock;
use mockall::predicate::{always, eq, function};
use rstest::rstest;
use sparring::ai::{CombatAi, CombatEvent, FlashKind, Ringside, Slip, StrikeKind, Zone};
use sparring::engine::Stage;
use sparring::pose::TargetPose;
use sparring::rng::FightRng;

mock! {
    Ring {}
    impl Ringside for Ring {
        fn player_health(&self) -> f32;
        fn opponent_health(&self) -> f32;
        fn damage_player(&mut self, damage: f32);
        fn player_slip(&self) -> Option<Slip>;
        fn player_guarding(&self) -> bool;
        fn stun_player(&mut self, until_ms: f64);
    }
}

mock! {
    Presenter {}
    impl Stage for Presenter {
        fn set_target_pose(&mut self, target: TargetPose);
        fn shake_camera(&mut self, intensity: f32);
        fn nudge_camera(&mut self, magnitude: f32);
    }
}

const FRAME_MS: f64 = 16.0;

fn ring(slip: Option<Slip>, guarding: bool) -> MockRing {
    let mut ring = MockRing::new();
    ring.expect_player_health().return_const(100.0_f32);
    ring.expect_opponent_health().return_const(100.0_f32);
    ring.expect_player_slip().return_const(slip);
    ring.expect_player_guarding().return_const(guarding);
    ring
}

fn presenter() -> MockPresenter {
    let mut stage = MockPresenter::new();
    stage.expect_set_target_pose().with(always()).return_const(());
    stage.expect_shake_camera().times(1).return_const(());
    stage
}

fn fighting_ai() -> CombatAi {
    let mut ai = CombatAi::new(FightRng::from_seed(5));
    ai.set_enabled(true);
    ai.set_combat_mode(true);
    ai
}

/// Throws `kind` at 0 ms and ticks until it has surely finished.
fn resolve(kind: StrikeKind, ring: &mut MockRing, stage: &mut MockPresenter) -> Vec<CombatEvent> {
    let mut ai = fighting_ai();
    ai.throw_strike(0.0, kind, Zone::HEAD, stage);
    for frame in 0..60_u32 {
        ai.tick(f64::from(frame) * FRAME_MS, ring, stage);
    }
    assert!(ai.lunge().is_none());
    ai.events_mut().drain().collect()
}

#[rstest]
#[case(StrikeKind::LeftUppercut, Slip::Duck)]
#[case(StrikeKind::RightUppercut, Slip::Duck)]
#[case(StrikeKind::Jab, Slip::Duck)]
#[case(StrikeKind::Cross, Slip::Duck)]
#[case(StrikeKind::LeftHook, Slip::Left)]
#[case(StrikeKind::RightHook, Slip::Right)]
#[case(StrikeKind::RightHook, Slip::Left)]
fn matching_evasion_takes_no_damage(#[case] kind: StrikeKind, #[case] slip: Slip) {
    let mut ring = ring(Some(slip), false);
    ring.expect_damage_player().times(0);
    ring.expect_stun_player().times(0);
    let mut stage = presenter();
    stage.expect_nudge_camera().times(0);

    let events = resolve(kind, &mut ring, &mut stage);

    assert!(events.contains(&CombatEvent::Evaded));
    assert!(events.contains(&CombatEvent::ScreenFlash {
        kind: FlashKind::Evade
    }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, CombatEvent::PlayerHit { .. })));
}

#[rstest]
#[case(StrikeKind::LeftHook, Slip::Duck)]
#[case(StrikeKind::LeftUppercut, Slip::Left)]
#[case(StrikeKind::Cross, Slip::Right)]
fn the_wrong_evasion_still_gets_hit(#[case] kind: StrikeKind, #[case] slip: Slip) {
    let mut ring = ring(Some(slip), false);
    ring.expect_damage_player()
        .with(eq(5.0_f32))
        .times(1)
        .return_const(());
    ring.expect_stun_player()
        .with(function(|until: &f64| *until >= 600.0))
        .times(1)
        .return_const(());
    let mut stage = presenter();
    stage.expect_nudge_camera().with(eq(0.05_f32)).times(1).return_const(());

    let events = resolve(kind, &mut ring, &mut stage);

    assert!(events.contains(&CombatEvent::PlayerHit { damage: 5.0 }));
    assert!(!events.contains(&CombatEvent::Evaded));
}

#[rstest]
fn a_raised_guard_lets_thirty_percent_through_without_a_stun() {
    let mut ring = ring(None, true);
    ring.expect_damage_player()
        .with(function(|damage: &f32| (*damage - 1.5).abs() < 1e-5))
        .times(1)
        .return_const(());
    ring.expect_stun_player().times(0);
    let mut stage = presenter();
    stage.expect_nudge_camera().times(1).return_const(());

    let events = resolve(StrikeKind::Cross, &mut ring, &mut stage);

    assert!(events
        .iter()
        .any(|e| matches!(e, CombatEvent::PlayerHit { damage } if (damage - 1.5).abs() < 1e-5)));
    assert!(events.contains(&CombatEvent::RefreshUi));
}
