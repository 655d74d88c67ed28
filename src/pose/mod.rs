//! Partial joint targets and the read-only pose table.
//!
//! A [`Pose`] holds an optional rotation per [`JointId`]; an absent entry
//! means "hold whatever the joint currently has". Table poses are immutable
//! templates. Strike variants are built by copying a template and applying
//! edits, which keeps the template untouched without any serialisation
//! round-trip.

mod table;

use std::fmt;
use std::str::FromStr;

use log::warn;
use thiserror::Error;

use crate::joint::{JointId, JointRotation, PerJoint};

pub use table::POSE_TABLE;

/// Partial set of joint targets plus the grip and lunge scalars.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    joints: PerJoint<Option<JointRotation>>,
    fist: Option<f32>,
    lunge: Option<f32>,
}

impl Pose {
    /// A pose that overrides nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            joints: PerJoint::from_array([None; JointId::COUNT]),
            fist: None,
            lunge: None,
        }
    }

    /// Target for `joint`, if this pose drives it.
    #[must_use]
    pub fn joint(&self, joint: JointId) -> Option<JointRotation> {
        self.joints[joint]
    }

    /// Grip closure in `0..=1`; poses without one are open-handed.
    #[must_use]
    pub fn fist(&self) -> f32 {
        self.fist.unwrap_or(0.0)
    }

    /// Forward offset carried by direct-punch poses.
    #[must_use]
    pub const fn lunge(&self) -> Option<f32> {
        self.lunge
    }

    /// Sets the target for `joint`.
    pub fn set(&mut self, joint: JointId, rotation: JointRotation) {
        self.joints[joint] = Some(rotation);
    }

    /// Builder form of [`Pose::set`].
    #[must_use]
    pub fn with(mut self, joint: JointId, rx: f32, ry: f32, rz: f32) -> Self {
        self.set(joint, JointRotation::new(rx, ry, rz));
        self
    }

    /// Sets the grip closure.
    #[must_use]
    pub const fn with_fist(mut self, fist: f32) -> Self {
        self.fist = Some(fist);
        self
    }

    /// Sets the direct-punch forward offset.
    #[must_use]
    pub const fn with_lunge(mut self, lunge: f32) -> Self {
        self.lunge = Some(lunge);
        self
    }

    /// Adds `delta` to the target of `joint`.
    ///
    /// A joint the pose does not drive stays undriven; the nudge is dropped.
    pub fn nudge(&mut self, joint: JointId, delta: JointRotation) {
        if let Some(target) = self.joints[joint].as_mut() {
            *target += delta;
        }
    }

    /// Builder form of [`Pose::nudge`].
    #[must_use]
    pub fn nudged(mut self, joint: JointId, drx: f32, dry: f32, drz: f32) -> Self {
        self.nudge(joint, JointRotation::new(drx, dry, drz));
        self
    }

    /// Copies the entries for `joints` from `source`, including absences.
    #[must_use]
    pub fn taking(mut self, source: &Self, joints: &[JointId]) -> Self {
        for &joint in joints {
            self.joints[joint] = source.joint(joint);
        }
        self
    }

    /// Iterates the joints this pose drives.
    pub fn entries(&self) -> impl Iterator<Item = (JointId, JointRotation)> + '_ {
        JointId::ALL
            .iter()
            .filter_map(|&joint| self.joint(joint).map(|rotation| (joint, rotation)))
    }
}

/// Raised when a pose name is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pose `{0}`")]
pub struct UnknownPose(pub String);

/// Identifiers of the poses in [`POSE_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseId {
    /// Relaxed arms-down stance outside a bout.
    Idle,
    /// Base fighting stance.
    Fight,
    /// High peek-a-boo guard.
    Guard,
    /// Jab wind-up.
    Attack1Start,
    /// Jab extension.
    Attack1,
    /// Cross wind-up.
    Attack2Start,
    /// Cross extension.
    Attack2,
    /// Left hook load.
    Attack3Start,
    /// Left hook extension.
    Attack3,
    /// Right hook load.
    Attack4Start,
    /// Right hook extension.
    Attack4,
    /// Left uppercut dip.
    Attack5Start,
    /// Left uppercut extension.
    Attack5,
    /// Right uppercut dip.
    Attack6Start,
    /// Right uppercut extension.
    Attack6,
    /// Legacy direct right punch.
    PunchRight,
    /// Legacy direct left punch.
    PunchLeft,
}

impl PoseId {
    /// Number of poses in the table.
    pub const COUNT: usize = 17;

    /// Every pose in table order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Idle,
        Self::Fight,
        Self::Guard,
        Self::Attack1Start,
        Self::Attack1,
        Self::Attack2Start,
        Self::Attack2,
        Self::Attack3Start,
        Self::Attack3,
        Self::Attack4Start,
        Self::Attack4,
        Self::Attack5Start,
        Self::Attack5,
        Self::Attack6Start,
        Self::Attack6,
        Self::PunchRight,
        Self::PunchLeft,
    ];

    /// Position of this pose in the table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Table name, as hosts refer to it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Fight => "FIGHT",
            Self::Guard => "GUARD",
            Self::Attack1Start => "ATTACK_1_START",
            Self::Attack1 => "ATTACK_1",
            Self::Attack2Start => "ATTACK_2_START",
            Self::Attack2 => "ATTACK_2",
            Self::Attack3Start => "ATTACK_3_START",
            Self::Attack3 => "ATTACK_3",
            Self::Attack4Start => "ATTACK_4_START",
            Self::Attack4 => "ATTACK_4",
            Self::Attack5Start => "ATTACK_5_START",
            Self::Attack5 => "ATTACK_5",
            Self::Attack6Start => "ATTACK_6_START",
            Self::Attack6 => "ATTACK_6",
            Self::PunchRight => "PUNCH_RIGHT",
            Self::PunchLeft => "PUNCH_LEFT",
        }
    }

    /// The template for this identifier.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "the table holds exactly PoseId::COUNT entries in PoseId order"
    )]
    pub fn pose(self) -> &'static Pose {
        &POSE_TABLE[self.index()]
    }
}

impl fmt::Display for PoseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PoseId {
    type Err = UnknownPose;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPose(s.to_owned()))
    }
}

/// What the engine is currently blending toward.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetPose {
    /// A template from the table.
    Named(PoseId),
    /// An ad-hoc pose, such as a zone-adjusted strike phase.
    Custom(Box<Pose>),
}

impl TargetPose {
    /// Looks up a pose by table name, falling back to [`PoseId::Idle`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.parse::<PoseId>() {
            Ok(id) => Self::Named(id),
            Err(err) => {
                warn!("{err}; falling back to {}", PoseId::Idle);
                Self::Named(PoseId::Idle)
            }
        }
    }

    /// The pose to blend toward.
    #[must_use]
    pub fn resolve(&self) -> &Pose {
        match self {
            Self::Named(id) => id.pose(),
            Self::Custom(pose) => pose,
        }
    }

    /// Returns `true` when this is the named template `id`.
    #[must_use]
    pub fn is(&self, id: PoseId) -> bool {
        matches!(self, Self::Named(current) if *current == id)
    }
}

impl Default for TargetPose {
    fn default() -> Self {
        Self::Named(PoseId::Idle)
    }
}

impl From<PoseId> for TargetPose {
    fn from(id: PoseId) -> Self {
        Self::Named(id)
    }
}

impl From<Pose> for TargetPose {
    fn from(pose: Pose) -> Self {
        Self::Custom(Box::new(pose))
    }
}
