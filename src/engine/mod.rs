//! Per-tick pose blending for one bound skeleton.
//!
//! The engine owns a live rotation per bound joint and moves it toward the
//! active [`TargetPose`] every tick. On top of that blended base it adds
//! breathing and sway, fatigue posture and spring-damped hit recoil, then
//! writes the sum to the skeleton. Fingers and the camera rig are advanced
//! in the same pass.

mod camera;
mod fatigue;
mod grip;
mod secondary;
mod settings;

pub use camera::CameraRig;
pub use fatigue::{DamageTier, Fatigue};
pub use grip::{curl_target, fist_angles};
pub use settings::{BlendSettings, SettingsError};

use glam::Vec3;
use log::warn;

use crate::constants::FULL_HEALTH;
use crate::joint::{JointId, JointRotation, PerJoint, Side};
use crate::numeric::{approach, clamp_symmetric, shortest_arc};
use crate::pose::{PoseId, TargetPose};
use crate::rng::FightRng;
use crate::skeleton::{Binding, Skeleton};

use grip::FingerJoint;

/// What the combat AI is allowed to do to the presentation side.
///
/// [`PoseEngine`] is the production implementation; tests substitute a mock
/// to observe choreography without a skeleton.
pub trait Stage {
    /// Replaces the pose the engine blends toward.
    fn set_target_pose(&mut self, target: TargetPose);
    /// Starts a decaying camera shake.
    fn shake_camera(&mut self, intensity: f32);
    /// Applies one immediate random camera offset.
    fn nudge_camera(&mut self, magnitude: f32);
}

/// Runtime state of one bound joint.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundJoint<H> {
    node: H,
    current: JointRotation,
    velocity: Vec3,
    offset: Vec3,
}

impl<H> BoundJoint<H> {
    fn reset(&mut self) {
        self.current = JointRotation::ZERO;
        self.velocity = Vec3::ZERO;
        self.offset = Vec3::ZERO;
    }
}

/// Blends a skeleton toward target poses and layers secondary motion.
#[derive(Debug, Clone)]
pub struct PoseEngine<H> {
    settings: BlendSettings,
    joints: PerJoint<Option<BoundJoint<H>>>,
    right_fingers: Vec<FingerJoint<H>>,
    left_fingers: Vec<FingerJoint<H>>,
    target: TargetPose,
    combat_mode: bool,
    health: f32,
    camera: CameraRig,
    rng: FightRng,
}

impl<H: Copy + Eq + std::fmt::Debug> PoseEngine<H> {
    /// Creates an unbound engine targeting [`PoseId::Idle`].
    #[must_use]
    pub fn new(settings: BlendSettings, rng: FightRng) -> Self {
        Self {
            settings,
            joints: PerJoint::from_fn(|_| None),
            right_fingers: Vec::new(),
            left_fingers: Vec::new(),
            target: TargetPose::Named(PoseId::Idle),
            combat_mode: false,
            health: FULL_HEALTH,
            camera: CameraRig::new(),
            rng,
        }
    }

    /// Adopts the nodes of `binding`, seeding each live rotation from the
    /// node's rest rotation. Any earlier binding is dropped.
    pub fn bind(&mut self, binding: &Binding<H>) {
        self.joints = PerJoint::from_fn(|joint| {
            binding.joint(joint).map(|bound| BoundJoint {
                node: bound.node,
                current: bound.rest,
                velocity: Vec3::ZERO,
                offset: Vec3::ZERO,
            })
        });
        self.right_fingers = binding
            .fingers(Side::Right)
            .iter()
            .map(FingerJoint::from)
            .collect();
        self.left_fingers = binding
            .fingers(Side::Left)
            .iter()
            .map(FingerJoint::from)
            .collect();
    }

    /// Returns `true` once at least one joint is bound.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.joints.iter().any(Option::is_some)
    }

    /// Returns `true` when `joint` has a node.
    #[must_use]
    pub fn is_joint_bound(&self, joint: JointId) -> bool {
        self.joints[joint].is_some()
    }

    /// The blend parameters in use.
    #[must_use]
    pub const fn settings(&self) -> &BlendSettings {
        &self.settings
    }

    /// The pose being blended toward.
    #[must_use]
    pub const fn target(&self) -> &TargetPose {
        &self.target
    }

    /// Replaces the pose being blended toward.
    pub fn set_target(&mut self, target: impl Into<TargetPose>) {
        self.target = target.into();
    }

    /// Sets the target by table name, falling back to idle when unknown.
    pub fn set_target_named(&mut self, name: &str) {
        self.target = TargetPose::from_name(name);
    }

    /// Enables the combat-only layers (weave, tint, camera height).
    pub fn set_combat_mode(&mut self, combat_mode: bool) {
        self.combat_mode = combat_mode;
    }

    /// Whether combat-only layers are active.
    #[must_use]
    pub const fn combat_mode(&self) -> bool {
        self.combat_mode
    }

    /// Updates the fighter's own health, which drives fatigue.
    pub fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    /// Fatigue at the current health.
    #[must_use]
    pub fn fatigue(&self) -> Fatigue {
        Fatigue::from_health(self.health)
    }

    /// Screen tint to apply this frame, if any.
    #[must_use]
    pub fn tint(&self) -> Option<f32> {
        self.fatigue().tint(self.combat_mode)
    }

    /// Blended base rotation of `joint`, without layers or recoil.
    #[must_use]
    pub fn current(&self, joint: JointId) -> Option<JointRotation> {
        self.joints[joint].as_ref().map(|b| b.current)
    }

    /// Recoil offset of `joint`.
    #[must_use]
    pub fn recoil_offset(&self, joint: JointId) -> Option<Vec3> {
        self.joints[joint].as_ref().map(|b| b.offset)
    }

    /// Recoil velocity of `joint`.
    #[must_use]
    pub fn recoil_velocity(&self, joint: JointId) -> Option<Vec3> {
        self.joints[joint].as_ref().map(|b| b.velocity)
    }

    /// Live rotations of the fingers on one hand, in binding order.
    pub fn finger_rotations(&self, side: Side) -> impl Iterator<Item = JointRotation> + '_ {
        let fingers = match side {
            Side::Right => &self.right_fingers,
            Side::Left => &self.left_fingers,
        };
        fingers.iter().map(FingerJoint::live)
    }

    /// The camera rig.
    #[must_use]
    pub const fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// Adds `delta` to the recoil velocity of `joint`; returns `false` when
    /// the joint is unbound.
    pub(crate) fn push_velocity(&mut self, joint: JointId, delta: Vec3) -> bool {
        match self.joints[joint].as_mut() {
            Some(bound) => {
                bound.velocity += delta;
                true
            }
            None => false,
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut FightRng {
        &mut self.rng
    }

    pub(crate) fn camera_mut(&mut self) -> &mut CameraRig {
        &mut self.camera
    }

    /// Advances every bound joint, finger and the camera by one tick.
    ///
    /// `body` is the fighter's root position, which the camera follows.
    pub fn tick<S>(&mut self, time_ms: f64, body: Vec3, skeleton: &mut S)
    where
        S: Skeleton<Handle = H> + ?Sized,
    {
        let pose = *self.target.resolve();
        let idle = self.target.is(PoseId::Idle);
        let weave = self.combat_mode && self.target.is(PoseId::Fight);
        let fatigue = self.fatigue();
        let settings = self.settings;

        for joint in JointId::ALL {
            let Some(bound) = self.joints[joint].as_mut() else {
                continue;
            };
            let driven = pose.joint(joint);

            if let Some(target) = driven {
                bound.current = JointRotation::new(
                    approach(bound.current.rx, target.rx, settings.stiffness),
                    approach(bound.current.ry, target.ry, settings.stiffness),
                    bound.current.rz + shortest_arc(target.rz - bound.current.rz) * settings.stiffness,
                );
            }

            bound.velocity *= settings.recoil_damping;
            bound.offset += bound.velocity;
            bound.offset -= bound.offset * settings.spring_return;
            bound.offset = clamp_symmetric(bound.offset, settings.max_recoil);

            let mut output = bound.current
                + JointRotation::from(bound.offset)
                + secondary::motion(joint, time_ms, idle, weave)
                + fatigue.posture(joint, time_ms);

            if !output.is_finite() {
                warn!("{joint} went non-finite; resetting it");
                bound.reset();
                output = JointRotation::ZERO;
            }

            if driven.is_some() {
                skeleton.set_rotation(bound.node, output);
            }
        }

        let fist = pose.fist();
        if self.is_joint_bound(JointId::RightHand) {
            grip::drive_hand(&mut self.right_fingers, Side::Right, fist, &settings, skeleton);
        }
        if self.is_joint_bound(JointId::LeftHand) {
            grip::drive_hand(&mut self.left_fingers, Side::Left, fist, &settings, skeleton);
        }

        let follow = if body.is_finite() { body } else { Vec3::ZERO };
        self.camera
            .tick(follow, self.combat_mode, &settings, &mut self.rng);
    }
}

impl<H: Copy + Eq + std::fmt::Debug> Stage for PoseEngine<H> {
    fn set_target_pose(&mut self, target: TargetPose) {
        self.target = target;
    }

    fn shake_camera(&mut self, intensity: f32) {
        self.camera.start_shake(intensity);
    }

    fn nudge_camera(&mut self, magnitude: f32) {
        self.camera.nudge(magnitude, &mut self.rng);
    }
}
