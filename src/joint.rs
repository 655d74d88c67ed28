//! Logical joint and finger identifiers shared by the binder, the pose table
//! and the engine.
//!
//! Joint names from loaded skeletons are resolved once into these closed
//! enums; nothing downstream dispatches on strings.

use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Three Euler angles (XYZ order, radians) for one joint.
///
/// `rz` is the twist axis and is blended along the short arc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointRotation {
    /// Rotation about the X axis.
    pub rx: f32,
    /// Rotation about the Y axis.
    pub ry: f32,
    /// Rotation about the Z (twist) axis.
    pub rz: f32,
}

impl JointRotation {
    /// The zero rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Builds a rotation from its three angles.
    #[must_use]
    pub const fn new(rx: f32, ry: f32, rz: f32) -> Self {
        Self { rx, ry, rz }
    }

    /// Returns `true` when every angle is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.rx.is_finite() && self.ry.is_finite() && self.rz.is_finite()
    }
}

impl From<Vec3> for JointRotation {
    fn from(value: Vec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<JointRotation> for Vec3 {
    fn from(value: JointRotation) -> Self {
        Self::new(value.rx, value.ry, value.rz)
    }
}

impl Add for JointRotation {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.rx + other.rx, self.ry + other.ry, self.rz + other.rz)
    }
}

impl AddAssign for JointRotation {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for JointRotation {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.rx - other.rx, self.ry - other.ry, self.rz - other.rz)
    }
}

/// Body side, from the fighter's own point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The fighter's left.
    Left,
    /// The fighter's right.
    Right,
}

impl Side {
    /// Name prefix used by common rigs (`Left`, `Right`).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }

    /// Sign used to mirror finger spread and twist: right −1, left +1.
    #[must_use]
    pub const fn mirror(self) -> f32 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

/// Logical joints the engine drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum JointId {
    /// Upper spine or chest.
    Spine = 0,
    /// Right upper arm.
    RightArm,
    /// Left upper arm.
    LeftArm,
    /// Right forearm.
    RightForeArm,
    /// Left forearm.
    LeftForeArm,
    /// Head (or neck on rigs without a head bone).
    Head,
    /// Pelvis.
    Hips,
    /// Right thigh.
    RightUpLeg,
    /// Left thigh.
    LeftUpLeg,
    /// Right shin.
    RightLeg,
    /// Left shin.
    LeftLeg,
    /// Right foot.
    RightFoot,
    /// Left foot.
    LeftFoot,
    /// Right hand.
    RightHand,
    /// Left hand.
    LeftHand,
}

impl JointId {
    /// Number of logical joints.
    pub const COUNT: usize = 15;

    /// Every joint in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Spine,
        Self::RightArm,
        Self::LeftArm,
        Self::RightForeArm,
        Self::LeftForeArm,
        Self::Head,
        Self::Hips,
        Self::RightUpLeg,
        Self::LeftUpLeg,
        Self::RightLeg,
        Self::LeftLeg,
        Self::RightFoot,
        Self::LeftFoot,
        Self::RightHand,
        Self::LeftHand,
    ];

    /// Position of this joint in per-joint arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Canonical name, matching the most common rig naming.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spine => "Spine",
            Self::RightArm => "RightArm",
            Self::LeftArm => "LeftArm",
            Self::RightForeArm => "RightForeArm",
            Self::LeftForeArm => "LeftForeArm",
            Self::Head => "Head",
            Self::Hips => "Hips",
            Self::RightUpLeg => "RightUpLeg",
            Self::LeftUpLeg => "LeftUpLeg",
            Self::RightLeg => "RightLeg",
            Self::LeftLeg => "LeftLeg",
            Self::RightFoot => "RightFoot",
            Self::LeftFoot => "LeftFoot",
            Self::RightHand => "RightHand",
            Self::LeftHand => "LeftHand",
        }
    }

    /// The hand side, for the two hand joints.
    #[must_use]
    pub const fn hand_side(self) -> Option<Side> {
        match self {
            Self::RightHand => Some(Side::Right),
            Self::LeftHand => Some(Side::Left),
            _ => None,
        }
    }

    /// Upper arms and forearms pick up breathing and arm sway.
    #[must_use]
    pub const fn arm_side(self) -> Option<Side> {
        match self {
            Self::RightArm | Self::RightForeArm => Some(Side::Right),
            Self::LeftArm | Self::LeftForeArm => Some(Side::Left),
            _ => None,
        }
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per [`JointId`], indexed by the joint itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PerJoint<T>([T; JointId::COUNT]);

impl<T> PerJoint<T> {
    /// Wraps values already laid out in [`JointId::ALL`] order.
    #[must_use]
    pub const fn from_array(values: [T; JointId::COUNT]) -> Self {
        Self(values)
    }

    /// Builds each entry from its joint.
    #[must_use]
    pub fn from_fn(f: impl FnMut(JointId) -> T) -> Self {
        Self(JointId::ALL.map(f))
    }

    /// Iterates the values in [`JointId::ALL`] order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T> Index<JointId> for PerJoint<T> {
    type Output = T;

    #[expect(
        clippy::indexing_slicing,
        reason = "JointId discriminants are dense and below JointId::COUNT"
    )]
    fn index(&self, joint: JointId) -> &T {
        &self.0[joint.index()]
    }
}

impl<T> IndexMut<JointId> for PerJoint<T> {
    #[expect(
        clippy::indexing_slicing,
        reason = "JointId discriminants are dense and below JointId::COUNT"
    )]
    fn index_mut(&mut self, joint: JointId) -> &mut T {
        &mut self.0[joint.index()]
    }
}

/// Finger types, each with its own curl table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FingerKind {
    /// Thumb; uses a distinct axis mapping.
    Thumb,
    /// Index finger.
    Index,
    /// Middle finger.
    Middle,
    /// Ring finger.
    Ring,
    /// Little finger.
    Pinky,
}

impl FingerKind {
    /// Search order used when discovering finger chains.
    pub const SEARCH_ORDER: [Self; 5] = [
        Self::Index,
        Self::Middle,
        Self::Ring,
        Self::Pinky,
        Self::Thumb,
    ];

    /// Name fragment used by common rigs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thumb => "Thumb",
            Self::Index => "Index",
            Self::Middle => "Middle",
            Self::Ring => "Ring",
            Self::Pinky => "Pinky",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn all_is_in_index_order() {
        for (position, joint) in JointId::ALL.iter().enumerate() {
            assert_eq!(joint.index(), position, "{joint} out of order");
        }
    }

    #[rstest]
    #[case(JointId::RightHand, Some(Side::Right))]
    #[case(JointId::LeftHand, Some(Side::Left))]
    #[case(JointId::Head, None)]
    fn hand_side_only_for_hands(#[case] joint: JointId, #[case] expected: Option<Side>) {
        assert_eq!(joint.hand_side(), expected);
    }

    #[test]
    fn rotation_arithmetic_is_componentwise() {
        let sum = JointRotation::new(0.5, 0.25, -1.0) + JointRotation::new(1.0, 1.0, 1.0);
        assert_eq!(sum, JointRotation::new(1.5, 1.25, 0.0));
        let diff = sum - JointRotation::new(1.0, 1.0, 1.0);
        assert_eq!(diff, JointRotation::new(0.5, 0.25, -1.0));
    }
}
