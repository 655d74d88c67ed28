//! Strike kinds, target zones and their phased choreography.
//!
//! Each strike is planned up front as a short schedule of poses keyed by
//! milliseconds since the throw. The lunge consumes the schedule as time
//! passes, so cancelling a strike simply drops whatever is left of it.

use std::fmt;

use crate::joint::{JointId, Side};
use crate::pose::{Pose, PoseId};

use super::ringside::Slip;

/// Vertical band a strike aims at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Height {
    /// Aimed at the face.
    #[default]
    Head,
    /// Aimed at the torso; the strike dips and shortens.
    Body,
}

/// Lateral aim of a head-height strike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aim {
    /// Spine turned to the fighter's left.
    Left,
    /// Straight down the middle.
    #[default]
    Center,
    /// Spine turned to the fighter's right.
    Right,
}

impl Aim {
    const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Center => 0.0,
            Self::Right => 1.0,
        }
    }
}

/// Where a strike is aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Zone {
    /// Head or body.
    pub height: Height,
    /// Lateral aim; ignored for body shots.
    pub aim: Aim,
}

impl Zone {
    /// Centre of the head.
    pub const HEAD: Self = Self::new(Height::Head, Aim::Center);
    /// Centre of the body.
    pub const BODY: Self = Self::new(Height::Body, Aim::Center);

    /// Builds a zone.
    #[must_use]
    pub const fn new(height: Height, aim: Aim) -> Self {
        Self { height, aim }
    }

    /// Returns `true` for body shots.
    #[must_use]
    pub const fn is_body(self) -> bool {
        matches!(self.height, Height::Body)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = if self.is_body() { "body" } else { "head" };
        match self.aim {
            Aim::Center => f.write_str(height),
            Aim::Left => write!(f, "{height}/left"),
            Aim::Right => write!(f, "{height}/right"),
        }
    }
}

/// A punch the opponent can throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeKind {
    /// Lead straight.
    Jab,
    /// Rear straight.
    Cross,
    /// Lead hook.
    LeftHook,
    /// Rear hook.
    RightHook,
    /// Lead uppercut.
    LeftUppercut,
    /// Rear uppercut.
    RightUppercut,
    /// Single-phase straight from the left hand.
    PunchLeft,
    /// Single-phase straight from the right hand.
    PunchRight,
}

impl StrikeKind {
    /// The six choreographed strikes the decision loop picks from.
    pub const BASIC: [Self; 6] = [
        Self::Jab,
        Self::Cross,
        Self::LeftHook,
        Self::RightHook,
        Self::LeftUppercut,
        Self::RightUppercut,
    ];

    /// Delay before the next combo step may follow this one, in ms.
    #[must_use]
    pub const fn follow_up_ms(self) -> f64 {
        match self {
            Self::Jab => 250.0,
            Self::Cross => 400.0,
            _ => 500.0,
        }
    }

    /// Whether the player's `slip` makes this strike miss.
    ///
    /// Hooks are slipped sideways; everything else is ducked.
    #[must_use]
    pub const fn evaded_by(self, slip: Slip) -> bool {
        match self {
            Self::LeftHook | Self::RightHook => matches!(slip, Slip::Left | Slip::Right),
            _ => matches!(slip, Slip::Duck),
        }
    }

    /// Plans the strike's phases, reach and timing for `zone`.
    #[must_use]
    pub fn plan(self, zone: Zone) -> StrikePlan {
        match self {
            Self::Jab => straight(self, zone, Side::Left),
            Self::Cross => straight(self, zone, Side::Right),
            Self::LeftHook => hook(self, zone, Side::Left),
            Self::RightHook => hook(self, zone, Side::Right),
            Self::LeftUppercut => uppercut(self, zone, Side::Left),
            Self::RightUppercut => uppercut(self, zone, Side::Right),
            Self::PunchLeft => direct(self, zone, Side::Left),
            Self::PunchRight => direct(self, zone, Side::Right),
        }
    }
}

impl fmt::Display for StrikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jab => "jab",
            Self::Cross => "cross",
            Self::LeftHook => "left hook",
            Self::RightHook => "right hook",
            Self::LeftUppercut => "left uppercut",
            Self::RightUppercut => "right uppercut",
            Self::PunchLeft => "left punch",
            Self::PunchRight => "right punch",
        };
        f.write_str(name)
    }
}

/// One scheduled pose change within a strike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// Offset from the throw, in ms.
    pub at_ms: f64,
    /// Pose to blend toward from then on.
    pub pose: Pose,
    /// Drop the body back to floor height when this phase fires.
    pub grounds: bool,
}

impl Phase {
    const fn at(at_ms: f64, pose: Pose) -> Self {
        Self {
            at_ms,
            pose,
            grounds: false,
        }
    }
}

/// Everything needed to run one strike.
#[derive(Debug, Clone, PartialEq)]
pub struct StrikePlan {
    /// The strike being thrown.
    pub kind: StrikeKind,
    /// Where it is aimed.
    pub zone: Zone,
    /// Length of the lunge, in ms.
    pub duration_ms: f64,
    /// Forward reach at the peak of the lunge.
    pub depth: f32,
    /// Whether the body rises and settles during the first 300 ms.
    pub vertical_drive: bool,
    /// Immediate drop in body height when the strike is thrown.
    pub dip: f32,
    /// Pose schedule, sorted by offset.
    pub phases: Vec<Phase>,
    /// The fully extended pose after aim adjustments.
    pub full: Pose,
}

fn arms(side: Side) -> (JointId, JointId) {
    match side {
        Side::Left => (JointId::LeftArm, JointId::LeftForeArm),
        Side::Right => (JointId::RightArm, JointId::RightForeArm),
    }
}

fn up_leg(side: Side) -> JointId {
    match side {
        Side::Left => JointId::LeftUpLeg,
        Side::Right => JointId::RightUpLeg,
    }
}

fn straight(kind: StrikeKind, zone: Zone, side: Side) -> StrikePlan {
    let (_, forearm) = arms(side);
    let jab = side == Side::Left;
    let (full_id, start_id) = if jab {
        (PoseId::Attack1, PoseId::Attack1Start)
    } else {
        (PoseId::Attack2, PoseId::Attack2Start)
    };

    let mut full = *full_id.pose();
    if zone.is_body() {
        full = full.nudged(JointId::Spine, 0.45, 0.0, 0.0);
        if !jab {
            full = full
                .nudged(JointId::RightArm, 0.2, 0.0, 0.0)
                .nudged(JointId::RightUpLeg, -0.3, 0.0, 0.0)
                .nudged(JointId::LeftUpLeg, -0.2, 0.0, 0.0);
        }
    } else {
        let turn = if jab { 0.2 } else { 0.25 };
        full = full.nudged(JointId::Spine, 0.0, zone.aim.sign() * turn, 0.0);
    }

    let (load, snap_at) = if jab {
        // Legs and hips fire first while the spine lags in the load.
        let load = PoseId::Fight
            .pose()
            .taking(&full, &[JointId::RightUpLeg, JointId::LeftUpLeg, JointId::Hips])
            .taking(start_id.pose(), &[JointId::Spine]);
        (load, 40.0)
    } else {
        (*start_id.pose(), 50.0)
    };
    let torque: &[JointId] = if jab {
        &[JointId::Spine, JointId::LeftArm]
    } else {
        &[JointId::Hips, JointId::Spine, JointId::RightArm]
    };
    let uncoil = load.taking(&full, torque).with(forearm, 0.0, 0.0, 0.8);

    StrikePlan {
        kind,
        zone,
        duration_ms: if jab { 350.0 } else { 450.0 },
        depth: if zone.is_body() { 1.4 } else { 1.6 },
        vertical_drive: false,
        dip: 0.0,
        phases: vec![
            Phase::at(0.0, load),
            Phase::at(snap_at, uncoil),
            Phase::at(80.0, full.with(forearm, 0.0, 0.0, -0.2)),
            Phase::at(120.0, full),
        ],
        full,
    }
}

fn hook(kind: StrikeKind, zone: Zone, side: Side) -> StrikePlan {
    let (arm, _) = arms(side);
    let turn = side.mirror();
    let (full_id, start_id) = match side {
        Side::Left => (PoseId::Attack3, PoseId::Attack3Start),
        Side::Right => (PoseId::Attack4, PoseId::Attack4Start),
    };

    let mut full = *full_id.pose();
    if zone.is_body() {
        // Shovel hook: level change with the elbow dropped.
        full = full
            .nudged(JointId::Spine, 0.3, 0.2 * turn, 0.0)
            .nudged(JointId::RightUpLeg, -0.4, 0.0, 0.0)
            .nudged(JointId::LeftUpLeg, -0.4, 0.0, 0.0)
            .nudged(arm, -0.2, 0.0, -0.5 * turn);
    } else {
        full = full.nudged(JointId::Spine, 0.0, zone.aim.sign() * 0.2, 0.0);
    }

    let load = *start_id.pose();
    let pivot = load.taking(&full, &[JointId::Hips, up_leg(side), JointId::Spine]);
    let whip = full.nudged(JointId::Spine, 0.0, 0.2 * turn, 0.0);

    StrikePlan {
        kind,
        zone,
        duration_ms: 700.0,
        depth: 1.4,
        vertical_drive: false,
        dip: 0.0,
        phases: vec![
            Phase::at(0.0, load),
            Phase::at(100.0, pivot),
            Phase::at(240.0, whip),
            Phase::at(350.0, full),
        ],
        full,
    }
}

fn uppercut(kind: StrikeKind, zone: Zone, side: Side) -> StrikePlan {
    let (arm, _) = arms(side);
    let (full_id, start_id) = match side {
        Side::Left => (PoseId::Attack5, PoseId::Attack5Start),
        Side::Right => (PoseId::Attack6, PoseId::Attack6Start),
    };

    let mut full = *full_id.pose();
    let vertical_drive = !zone.is_body();
    if zone.is_body() {
        full = full
            .nudged(JointId::Spine, 0.4, 0.0, 0.0)
            .nudged(arm, -0.3, 0.0, 0.0);
    }

    let dip = *start_id.pose();
    let drive = dip.taking(
        &full,
        &[
            JointId::Hips,
            JointId::LeftUpLeg,
            JointId::RightUpLeg,
            JointId::Spine,
        ],
    );

    StrikePlan {
        kind,
        zone,
        duration_ms: 800.0,
        depth: 1.2,
        vertical_drive,
        dip: if vertical_drive { 0.15 } else { 0.0 },
        phases: vec![
            Phase::at(0.0, dip),
            Phase::at(150.0, drive),
            Phase::at(300.0, full),
            Phase {
                grounds: true,
                ..Phase::at(550.0, full)
            },
        ],
        full,
    }
}

fn direct(kind: StrikeKind, zone: Zone, side: Side) -> StrikePlan {
    let (arm, _) = arms(side);
    let pose_id = match side {
        Side::Left => PoseId::PunchLeft,
        Side::Right => PoseId::PunchRight,
    };

    let base = *pose_id.pose();
    let full = if zone.is_body() {
        base.nudged(JointId::Spine, 0.45, 0.0, 0.0)
            .nudged(arm, -0.6, 0.0, 0.0)
    } else {
        base.nudged(JointId::Spine, 0.0, zone.aim.sign() * 0.25, 0.0)
    };
    let depth = if zone.is_body() {
        1.4
    } else {
        base.lunge().unwrap_or(0.8) * 2.5
    };

    StrikePlan {
        kind,
        zone,
        duration_ms: 400.0,
        depth,
        vertical_drive: false,
        dip: 0.0,
        phases: vec![Phase::at(0.0, full)],
        full,
    }
}
