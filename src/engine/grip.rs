//! Finger curl driven by a pose's `fist` value.

use glam::Vec3;

use crate::constants::{FIST_RELAX_THRESHOLD, KNUCKLE_VOLUME};
use crate::joint::{FingerKind, JointRotation, Side};
use crate::numeric::approach;
use crate::skeleton::{FingerBinding, Skeleton};

use super::BlendSettings;

/// Full-fist offsets per finger and joint level, as (spread, twist, curl)
/// for the fingers and (roll, yaw, bend) for the thumb.
#[must_use]
pub const fn fist_angles(kind: FingerKind, level: u8) -> Option<Vec3> {
    let angles = match (kind, level) {
        (FingerKind::Thumb, 1) => Vec3::new(0.3, 0.5, 0.6),
        (FingerKind::Thumb, 2) => Vec3::new(-0.1, 0.0, 0.8),
        (FingerKind::Thumb, 3) => Vec3::new(0.0, 0.0, 1.5),
        (FingerKind::Index, 1) => Vec3::new(-0.15, 0.0, 1.3),
        (FingerKind::Index, 2) => Vec3::new(0.0, 0.0, 1.8),
        (FingerKind::Index, 3) => Vec3::new(0.0, 0.0, 0.6),
        (FingerKind::Middle, 1) => Vec3::new(0.0, 0.0, 1.5),
        (FingerKind::Middle, 2) => Vec3::new(0.0, 0.0, 1.9),
        (FingerKind::Middle, 3) => Vec3::new(0.0, 0.0, 0.7),
        (FingerKind::Ring, 1) => Vec3::new(0.1, 0.0, 1.7),
        (FingerKind::Ring, 2) => Vec3::new(0.0, 0.0, 2.1),
        (FingerKind::Ring, 3) => Vec3::new(0.0, 0.0, 0.8),
        (FingerKind::Pinky, 1) => Vec3::new(0.25, 0.0, 2.0),
        (FingerKind::Pinky, 2) => Vec3::new(0.0, 0.0, 2.2),
        (FingerKind::Pinky, 3) => Vec3::new(0.0, 0.0, 0.9),
        _ => return None,
    };
    Some(angles)
}

/// Where a finger joint heads for grip strength `amount`.
///
/// Fingers curl on X and mirror spread and twist by hand. The thumb folds
/// across the palm with every axis mirrored and its bend inverted.
#[must_use]
pub fn curl_target(
    kind: FingerKind,
    level: u8,
    rest: JointRotation,
    amount: f32,
    side: Side,
) -> Option<JointRotation> {
    let angles = fist_angles(kind, level)?;
    let mirror = side.mirror();
    let offset = if kind == FingerKind::Thumb {
        JointRotation::new(
            angles.x * amount * mirror,
            angles.y * amount * mirror,
            -angles.z * amount * mirror,
        )
    } else {
        JointRotation::new(
            angles.z * amount,
            angles.y * mirror * amount,
            angles.x * mirror * amount,
        )
    };
    Some(rest + offset)
}

/// A bound finger joint with its live rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FingerJoint<H> {
    node: H,
    rest: JointRotation,
    live: JointRotation,
    kind: FingerKind,
    level: u8,
}

impl<H: Copy> From<&FingerBinding<H>> for FingerJoint<H> {
    fn from(binding: &FingerBinding<H>) -> Self {
        Self {
            node: binding.node,
            rest: binding.rest,
            live: binding.rest,
            kind: binding.kind,
            level: binding.level,
        }
    }
}

impl<H> FingerJoint<H> {
    pub(crate) const fn live(&self) -> JointRotation {
        self.live
    }
}

/// Moves every finger of one hand a step toward the grip for `amount`.
pub(crate) fn drive_hand<S: Skeleton + ?Sized>(
    fingers: &mut [FingerJoint<S::Handle>],
    side: Side,
    amount: f32,
    settings: &BlendSettings,
    skeleton: &mut S,
) {
    for finger in fingers {
        let mut scale = 1.0;
        if amount < FIST_RELAX_THRESHOLD {
            finger.live = blend(finger.live, finger.rest, settings.finger_relax_rate);
        } else {
            if let Some(target) = curl_target(finger.kind, finger.level, finger.rest, amount, side)
            {
                finger.live = blend(finger.live, target, settings.finger_curl_rate);
            }
            if finger.level == 2 && finger.kind != FingerKind::Thumb {
                scale = KNUCKLE_VOLUME.mul_add(amount, 1.0);
            }
        }
        skeleton.set_rotation(finger.node, finger.live);
        skeleton.set_scale(finger.node, scale);
    }
}

fn blend(from: JointRotation, to: JointRotation, rate: f32) -> JointRotation {
    JointRotation::new(
        approach(from.rx, to.rx, rate),
        approach(from.ry, to.ry, rate),
        approach(from.rz, to.rz, rate),
    )
}
