//! Hit classification and recoil impulses.
//!
//! A hit point in skeleton-local space picks one of seven reaction zones by
//! height band and side. Each zone pushes a fixed mix of velocity onto the
//! head, spine or hips; [`PoseEngine::tick`] integrates it into recoil.

use glam::Vec3;
use log::debug;

use crate::constants::{CRITICAL_HIT_FORCE, CRITICAL_HIT_SHAKE, HIT_FORCE, HIT_SHAKE};
use crate::engine::PoseEngine;
use crate::joint::JointId;

/// Which side of the fighter was struck, from the fighter's own view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitSide {
    /// Struck on the fighter's left.
    Left,
    /// Within the central dead zone.
    Center,
    /// Struck on the fighter's right.
    Right,
}

impl HitSide {
    /// Dead zone half-width around the centre line.
    pub const DEAD_ZONE: f32 = 0.05;

    /// Side for a local-space X coordinate.
    #[must_use]
    pub fn from_x(x: f32) -> Self {
        if x > Self::DEAD_ZONE {
            Self::Left
        } else if x < -Self::DEAD_ZONE {
            Self::Right
        } else {
            Self::Center
        }
    }

    /// Yaw direction the head turns away from the blow.
    #[must_use]
    pub const fn turn(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Center => 0.0,
            Self::Right => 1.0,
        }
    }

    /// Lateral sway direction; centre hits sway as right-side hits do.
    #[must_use]
    pub const fn sway(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Center | Self::Right => 1.0,
        }
    }
}

/// Body region a hit lands on, with its own reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionZone {
    /// Chin struck from below; head snaps up and back.
    UppercutHead,
    /// Side of the head; violent spin.
    HookHead,
    /// Face; head snaps straight back.
    StraightHead,
    /// Chest; torso pushed back and twisted away.
    BodyChest,
    /// Stomach; fighter folds forward.
    BodyAbs,
    /// Flank; torso sways away with a little hip.
    BodyOblique,
    /// Below the belt line; hips rock.
    BodyLow,
}

impl ReactionZone {
    /// Returns `true` for the three head zones.
    #[must_use]
    pub const fn is_head(self) -> bool {
        matches!(self, Self::UppercutHead | Self::HookHead | Self::StraightHead)
    }

    /// The joint that must be bound for this zone to react at all.
    #[must_use]
    pub const fn anchor(self) -> JointId {
        if self.is_head() {
            JointId::Head
        } else {
            JointId::Spine
        }
    }
}

/// Classifies a local-space hit point.
#[must_use]
pub fn classify(point: Vec3) -> (ReactionZone, HitSide) {
    let side = HitSide::from_x(point.x);
    let wide = point.x.abs();
    let zone = match point.y {
        y if y > 1.48 => {
            if side == HitSide::Center {
                ReactionZone::UppercutHead
            } else {
                ReactionZone::HookHead
            }
        }
        y if y > 1.32 => {
            if wide > 0.12 {
                ReactionZone::HookHead
            } else {
                ReactionZone::StraightHead
            }
        }
        y if y > 1.15 => ReactionZone::BodyChest,
        y if y > 0.95 => {
            if wide > 0.15 {
                ReactionZone::BodyOblique
            } else {
                ReactionZone::BodyAbs
            }
        }
        _ => ReactionZone::BodyLow,
    };
    (zone, side)
}

/// Most joints a single hit pushes.
pub const MAX_IMPULSES: usize = 2;

/// Velocity pushes from one hit; unused slots are `None`.
pub type Impulses = [Option<(JointId, Vec3)>; MAX_IMPULSES];

const fn one(joint: JointId, delta: Vec3) -> Impulses {
    [Some((joint, delta)), None]
}

const fn two(first: (JointId, Vec3), second: (JointId, Vec3)) -> Impulses {
    [Some(first), Some(second)]
}

/// Velocity pushes for a hit in `zone` with base `force`.
///
/// `jitter` is the random yaw kick given to an uppercut, already scaled.
#[must_use]
pub const fn impulses(zone: ReactionZone, side: HitSide, force: f32, jitter: f32) -> Impulses {
    let turn = side.turn();
    let sway = side.sway();
    match zone {
        ReactionZone::UppercutHead => two(
            (JointId::Head, Vec3::new(-force * 1.5, jitter, 0.0)),
            (JointId::Spine, Vec3::new(0.0, 0.08, 0.0)),
        ),
        ReactionZone::HookHead => one(
            JointId::Head,
            Vec3::new(-force * 0.3, turn * force * 1.8, -turn * force * 0.4),
        ),
        ReactionZone::StraightHead => one(
            JointId::Head,
            Vec3::new(-force * 1.2, turn * force * 0.6, 0.0),
        ),
        ReactionZone::BodyChest => one(
            JointId::Spine,
            Vec3::new(-force * 0.3, turn * force * 0.5, -force * 0.4),
        ),
        ReactionZone::BodyAbs => two(
            (JointId::Spine, Vec3::new(force, -0.05, 0.0)),
            (JointId::Head, Vec3::new(force * 0.5, 0.0, 0.0)),
        ),
        ReactionZone::BodyOblique => two(
            (JointId::Spine, Vec3::new(force * 0.4, 0.0, sway * force * 0.8)),
            (JointId::Hips, Vec3::new(0.0, -0.02, sway * 0.2)),
        ),
        ReactionZone::BodyLow => one(JointId::Hips, Vec3::new(-0.2, 0.0, turn * force * 0.15)),
    }
}

impl<H: Copy + Eq + std::fmt::Debug> PoseEngine<H> {
    /// Reacts to a hit at `point` (skeleton-local) and shakes the camera.
    ///
    /// Head zones need a bound head and body zones a bound spine; otherwise
    /// the hit only shakes the camera. Secondary joints that are unbound are
    /// skipped.
    pub fn apply_hit(&mut self, point: Vec3, critical: bool) {
        let (zone, side) = classify(point);
        debug!("hit {zone:?} on {side:?}, critical: {critical}");

        if self.is_joint_bound(zone.anchor()) {
            let force = if critical { CRITICAL_HIT_FORCE } else { HIT_FORCE };
            let jitter = if zone == ReactionZone::UppercutHead {
                self.rng_mut().jitter(0.5)
            } else {
                0.0
            };
            for (joint, delta) in impulses(zone, side, force, jitter).into_iter().flatten() {
                self.push_velocity(joint, delta);
            }
        }

        let shake = if critical { CRITICAL_HIT_SHAKE } else { HIT_SHAKE };
        self.camera_mut().start_shake(shake);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BlendSettings;
    use crate::rng::FightRng;
    use crate::skeleton::{Armature, Binding, NodeId};
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::chin(Vec3::new(0.0, 1.55, 0.1), ReactionZone::UppercutHead, HitSide::Center)]
    #[case::temple(Vec3::new(0.1, 1.55, 0.1), ReactionZone::HookHead, HitSide::Left)]
    #[case::cheek(Vec3::new(-0.13, 1.4, 0.1), ReactionZone::HookHead, HitSide::Right)]
    #[case::nose(Vec3::new(0.02, 1.4, 0.1), ReactionZone::StraightHead, HitSide::Center)]
    #[case::chest(Vec3::new(0.0, 1.2, 0.1), ReactionZone::BodyChest, HitSide::Center)]
    #[case::liver(Vec3::new(-0.2, 1.0, 0.1), ReactionZone::BodyOblique, HitSide::Right)]
    #[case::stomach(Vec3::new(0.1, 1.0, 0.1), ReactionZone::BodyAbs, HitSide::Left)]
    #[case::low(Vec3::new(0.0, 0.9, 0.1), ReactionZone::BodyLow, HitSide::Center)]
    fn points_classify_by_band_and_side(
        #[case] point: Vec3,
        #[case] zone: ReactionZone,
        #[case] side: HitSide,
    ) {
        assert_eq!(classify(point), (zone, side));
    }

    fn push_on(pushes: Impulses, joint: JointId) -> Option<Vec3> {
        pushes
            .into_iter()
            .flatten()
            .find_map(|(j, delta)| (j == joint).then_some(delta))
    }

    #[test]
    fn hook_spin_follows_side() {
        let left = push_on(impulses(ReactionZone::HookHead, HitSide::Left, HIT_FORCE, 0.0), JointId::Head);
        let right = push_on(impulses(ReactionZone::HookHead, HitSide::Right, HIT_FORCE, 0.0), JointId::Head);
        assert!(left.is_some_and(|v| v.y < 0.0));
        assert!(right.is_some_and(|v| v.y > 0.0));
        assert_relative_eq!(left.map_or(0.0, |v| v.y), -HIT_FORCE * 1.8);
    }

    #[test]
    fn critical_hits_scale_the_impulse() {
        let zone = ReactionZone::StraightHead;
        let normal = push_on(impulses(zone, HitSide::Center, HIT_FORCE, 0.0), JointId::Head);
        let critical = push_on(impulses(zone, HitSide::Center, CRITICAL_HIT_FORCE, 0.0), JointId::Head);
        assert!(critical.zip(normal).is_some_and(|(c, n)| c.x < n.x));
    }

    #[rstest]
    #[case::uppercut(ReactionZone::UppercutHead, &[JointId::Head, JointId::Spine])]
    #[case::hook(ReactionZone::HookHead, &[JointId::Head])]
    #[case::straight(ReactionZone::StraightHead, &[JointId::Head])]
    #[case::chest(ReactionZone::BodyChest, &[JointId::Spine])]
    #[case::abs(ReactionZone::BodyAbs, &[JointId::Spine, JointId::Head])]
    #[case::oblique(ReactionZone::BodyOblique, &[JointId::Spine, JointId::Hips])]
    #[case::low(ReactionZone::BodyLow, &[JointId::Hips])]
    fn each_zone_pushes_its_own_joints(#[case] zone: ReactionZone, #[case] joints: &[JointId]) {
        let pushed: Vec<JointId> = impulses(zone, HitSide::Left, HIT_FORCE, 0.0)
            .into_iter()
            .flatten()
            .map(|(joint, _)| joint)
            .collect();
        assert_eq!(pushed, joints);
    }

    fn engine_with(names: &[&str]) -> PoseEngine<NodeId> {
        let mut rig = Armature::new("Root");
        for name in names {
            rig.add_child(rig.root(), name);
        }
        let mut engine = PoseEngine::new(BlendSettings::default(), FightRng::from_seed(4));
        engine.bind(&Binding::bind(&rig, rig.root()));
        engine
    }

    #[test]
    fn body_hits_need_a_spine() {
        // A lone `Hips` node binds both the spine and the hips.
        let mut engine = engine_with(&["Hips"]);
        let mut headless = engine_with(&["Head"]);
        headless.apply_hit(Vec3::new(0.0, 0.9, 0.0), false);
        assert_eq!(headless.recoil_velocity(JointId::Hips), None);

        engine.apply_hit(Vec3::new(0.0, 0.9, 0.0), false);
        let hips = engine.recoil_velocity(JointId::Hips).unwrap_or(Vec3::ZERO);
        assert_relative_eq!(hips.x, -0.2);
    }

    #[test]
    fn every_hit_shakes_the_camera() {
        let mut engine = engine_with(&[]);
        engine.apply_hit(Vec3::new(0.0, 1.4, 0.0), true);
        assert_relative_eq!(engine.camera().shake(), CRITICAL_HIT_SHAKE);
    }
}
