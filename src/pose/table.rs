//! Stock poses, indexed by [`PoseId`].
//!
//! Leg targets sit near ±π on the twist axis because the thighs of common
//! rigs hang from an upward-pointing bind pose; zero would point them up.

use once_cell::sync::Lazy;

use super::{Pose, PoseId};
use crate::joint::JointId::{
    Head, Hips, LeftArm, LeftForeArm, LeftHand, LeftLeg, LeftUpLeg, RightArm, RightForeArm,
    RightHand, RightLeg, RightUpLeg, Spine,
};

/// Every stock pose, in [`PoseId`] order.
pub static POSE_TABLE: Lazy<[Pose; PoseId::COUNT]> =
    Lazy::new(|| PoseId::ALL.map(build));

/// Fighting stance legs shared by every combat pose.
fn planted() -> Pose {
    Pose::empty()
        .with(RightUpLeg, 0.06, -0.2, 3.01)
        .with(LeftUpLeg, -0.04, 0.2, -3.06)
        .with(RightLeg, -0.15, 0.0, 0.0)
        .with(LeftLeg, -0.23, 0.0, 0.0)
        .with_fist(1.0)
}

/// Knees bent for the uppercut dip.
fn sunk() -> Pose {
    Pose::empty()
        .with(RightUpLeg, -0.24, -0.2, 3.01)
        .with(LeftUpLeg, -0.34, 0.2, -3.06)
        .with(RightLeg, -0.45, 0.0, 0.0)
        .with(LeftLeg, -0.53, 0.0, 0.0)
        .with_fist(1.0)
}

fn build(id: PoseId) -> Pose {
    match id {
        PoseId::Idle => Pose::empty()
            .with(Spine, 0.0, 0.0, 0.0)
            .with(RightArm, 1.63, -1.57, 0.4)
            .with(LeftArm, 1.63, 1.57, -0.4)
            .with(RightForeArm, 0.1, 0.0, 0.0)
            .with(LeftForeArm, 0.1, 0.0, 0.0)
            .with(Head, 0.0, 0.0, 0.0)
            .with(RightHand, 0.0, 1.57, 0.0)
            .with(LeftHand, 0.0, -1.57, 0.0)
            .with_fist(0.1),
        PoseId::Fight => planted()
            .with(Spine, 0.2, 0.0, 0.0)
            .with(RightArm, 0.6, -0.1, -0.4)
            .with(LeftArm, 0.8, 0.1, 0.4)
            .with(RightForeArm, 0.0, 0.0, -2.0)
            .with(LeftForeArm, 0.0, 0.0, 2.0)
            .with(Head, 0.1, 0.0, 0.0),
        PoseId::Guard => planted()
            .with(Spine, 0.3, 0.0, 0.0)
            .with(RightArm, 1.2, -0.2, -0.2)
            .with(LeftArm, 1.2, 0.2, 0.2)
            .with(RightForeArm, 0.0, 0.0, -2.3)
            .with(LeftForeArm, 0.0, 0.0, 2.3)
            .with(Head, 0.2, 0.0, 0.0),
        PoseId::Attack1Start => planted()
            .with(Spine, 0.2, -0.3, 0.0)
            .with(Hips, 0.0, -0.15, 0.0)
            .with(LeftArm, 0.8, 0.0, 0.2)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(Head, 0.0, 0.2, 0.0),
        PoseId::Attack1 => planted()
            .with(Spine, 0.15, -0.6, 0.0)
            .with(Hips, 0.0, -0.2, 0.0)
            .with(LeftArm, -0.2, 1.5, 1.7)
            .with(LeftForeArm, 0.0, 0.0, 1.6)
            .with(RightArm, 1.3, -0.5, -0.5)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(Head, 0.1, 0.4, 0.0),
        PoseId::Attack2Start => planted()
            .with(Spine, 0.25, -0.15, 0.0)
            .with(Hips, 0.0, 0.1, 0.0)
            .with(RightArm, 0.9, -0.1, -0.3)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(LeftArm, 1.2, 0.2, 0.3)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(Head, 0.1, -0.1, 0.0),
        PoseId::Attack2 => planted()
            .with(Spine, 0.25, 0.6, 0.0)
            .with(Hips, 0.0, 0.25, 0.0)
            .with(RightArm, -0.1, -1.57, -1.6)
            .with(RightForeArm, 0.0, 0.0, -0.02)
            .with(LeftArm, 1.5, 0.3, 0.1)
            .with(LeftForeArm, 0.0, 0.0, 2.0)
            .with(Head, 0.0, -0.4, 0.0),
        PoseId::Attack3Start => planted()
            .with(Spine, 0.15, 0.3, 0.0)
            .with(Hips, 0.0, 0.15, 0.0)
            .with(LeftArm, 0.6, 0.6, 0.9)
            .with(LeftForeArm, 0.0, 0.0, 1.9)
            .with(RightArm, 1.3, -0.3, -0.3)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(Head, 0.1, -0.2, 0.0),
        PoseId::Attack3 => planted()
            .with(Spine, 0.1, -1.0, 0.0)
            .with(Hips, 0.0, -0.3, 0.0)
            .with(LeftArm, -0.1, 1.1, 1.6)
            .with(LeftForeArm, 0.0, 0.0, 1.3)
            .with(RightArm, 1.5, -0.3, -0.1)
            .with(Head, 0.0, 0.8, 0.0),
        PoseId::Attack4Start => planted()
            .with(Spine, 0.15, -0.3, 0.0)
            .with(Hips, 0.0, -0.15, 0.0)
            .with(RightArm, 0.6, -0.6, -0.9)
            .with(RightForeArm, 0.0, 0.0, -1.9)
            .with(LeftArm, 1.3, 0.3, 0.3)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(Head, 0.1, 0.2, 0.0),
        PoseId::Attack4 => planted()
            .with(Spine, 0.1, 1.0, 0.0)
            .with(Hips, 0.0, 0.3, 0.0)
            .with(RightArm, -0.1, -1.1, -1.6)
            .with(RightForeArm, 0.0, 0.0, -1.3)
            .with(LeftArm, 1.5, 0.3, 0.1)
            .with(Head, 0.0, -0.8, 0.0),
        PoseId::Attack5Start => sunk()
            .with(Spine, 0.35, 0.2, 0.1)
            .with(Hips, 0.0, 0.1, 0.0)
            .with(LeftArm, 1.0, 0.2, 0.1)
            .with(LeftForeArm, 0.0, 0.0, 2.0)
            .with(RightArm, 1.3, -0.3, -0.2)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(Head, 0.15, 0.1, 0.0),
        PoseId::Attack5 => planted()
            .with(Spine, -0.1, -0.5, -0.2)
            .with(Hips, 0.0, -0.2, 0.0)
            .with(LeftArm, -0.7, 0.4, 0.4)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(RightArm, 1.5, -0.3, -0.1)
            .with(Head, 0.1, 0.4, 0.0),
        PoseId::Attack6Start => sunk()
            .with(Spine, 0.35, -0.2, -0.1)
            .with(Hips, 0.0, -0.1, 0.0)
            .with(RightArm, 1.0, -0.2, -0.1)
            .with(RightForeArm, 0.0, 0.0, -2.0)
            .with(LeftArm, 1.3, 0.3, 0.2)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(Head, 0.15, -0.1, 0.0),
        PoseId::Attack6 => planted()
            .with(Spine, -0.1, 0.5, 0.2)
            .with(Hips, 0.0, 0.2, 0.0)
            .with(RightArm, -0.7, -0.4, -0.4)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(LeftArm, 1.5, 0.3, 0.1)
            .with(Head, 0.1, -0.4, 0.0),
        PoseId::PunchRight => planted()
            .with(Spine, 0.1, -0.5, 0.1)
            .with(RightArm, -0.2, -0.2, -1.3)
            .with(LeftArm, 1.2, 0.5, 0.5)
            .with(RightForeArm, 0.0, 0.0, 0.0)
            .with(LeftForeArm, 0.0, 0.0, 2.2)
            .with(Head, 0.0, -0.3, 0.0)
            .with_lunge(0.8),
        PoseId::PunchLeft => planted()
            .with(Spine, 0.1, 0.5, -0.1)
            .with(RightArm, 1.2, -0.5, -0.5)
            .with(LeftArm, -0.2, 0.2, 1.3)
            .with(RightForeArm, 0.0, 0.0, -2.2)
            .with(LeftForeArm, 0.0, 0.0, 0.0)
            .with(Head, 0.0, 0.3, 0.0)
            .with_lunge(0.8),
    }
}
