//! Resolves logical joints and finger chains onto skeleton nodes.

use hashbrown::HashMap;
use log::{debug, info};

use super::Skeleton;
use crate::joint::{FingerKind, JointId, JointRotation, PerJoint, Side};

/// Ordered candidate node names for `joint`; the first one present wins.
#[must_use]
pub const fn joint_candidates(joint: JointId) -> &'static [&'static str] {
    match joint {
        JointId::Spine => &["Spine2", "Spine1", "Chest", "Spine", "Hips"],
        JointId::RightArm => &["RightArm", "UpperArm_R", "Arm_R", "mixamorigRightArm"],
        JointId::LeftArm => &["LeftArm", "UpperArm_L", "Arm_L", "mixamorigLeftArm"],
        JointId::RightForeArm => &[
            "RightForeArm",
            "ForeArm_R",
            "LowerArm_R",
            "mixamorigRightForeArm",
        ],
        JointId::LeftForeArm => &[
            "LeftForeArm",
            "ForeArm_L",
            "LowerArm_L",
            "mixamorigLeftForeArm",
        ],
        JointId::Head => &["Head", "Neck", "mixamorigHead"],
        JointId::Hips => &["Hips", "Pelvis", "mixamorigHips"],
        JointId::RightUpLeg => &["RightUpLeg", "UpLeg_R", "Right_UpLeg", "mixamorigRightUpLeg"],
        JointId::LeftUpLeg => &["LeftUpLeg", "UpLeg_L", "Left_UpLeg", "mixamorigLeftUpLeg"],
        JointId::RightLeg => &["RightLeg", "Leg_R", "Right_Leg", "mixamorigRightLeg"],
        JointId::LeftLeg => &["LeftLeg", "Leg_L", "Left_Leg", "mixamorigLeftLeg"],
        JointId::RightFoot => &["RightFoot", "Foot_R", "Right_Foot", "mixamorigRightFoot"],
        JointId::LeftFoot => &["LeftFoot", "Foot_L", "Left_Foot", "mixamorigLeftFoot"],
        JointId::RightHand => &["RightHand", "Hand_R", "Right_Hand", "mixamorigRightHand"],
        JointId::LeftHand => &["LeftHand", "Hand_L", "Left_Hand", "mixamorigLeftHand"],
    }
}

/// Names tried for one finger joint, most specific first.
fn finger_candidates(side: Side, finger: FingerKind, level: u8) -> [String; 4] {
    let (prefix, name) = (side.prefix(), finger.name());
    [
        format!("{prefix}Hand{name}{level}"),
        format!("{prefix}{name}{level}"),
        format!("mixamorig{prefix}Hand{name}{level}"),
        format!("mixamorig{prefix}{name}{level}"),
    ]
}

/// A logical joint resolved to a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointBinding<H> {
    /// The driven node.
    pub node: H,
    /// Rotation the node held when it was bound.
    pub rest: JointRotation,
}

/// One joint of one finger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerBinding<H> {
    /// The driven node.
    pub node: H,
    /// Rotation captured at bind time; the origin of every curl target.
    pub rest: JointRotation,
    /// Which finger this joint belongs to.
    pub kind: FingerKind,
    /// 1 for the knuckle, 2 for the middle joint, 3 for the tip.
    pub level: u8,
}

/// Result of binding a skeleton: some joints, some fingers, never an error.
#[derive(Debug, Clone)]
pub struct Binding<H> {
    joints: PerJoint<Option<JointBinding<H>>>,
    right_fingers: Vec<FingerBinding<H>>,
    left_fingers: Vec<FingerBinding<H>>,
}

impl<H: Copy + Eq + std::fmt::Debug> Binding<H> {
    /// Walks `skeleton` from `root` once and resolves every joint and finger.
    ///
    /// Nodes with repeated names resolve to the first one met depth-first.
    pub fn bind<S>(skeleton: &S, root: H) -> Self
    where
        S: Skeleton<Handle = H> + ?Sized,
    {
        let mut by_name: HashMap<String, H> = HashMap::new();
        skeleton.visit_depth_first(root, &mut |node, name| {
            by_name.entry_ref(name).or_insert(node);
        });

        let resolve = |name: &str| -> Option<JointBinding<H>> {
            let node = *by_name.get(name)?;
            let rest = skeleton.rotation(node).unwrap_or(JointRotation::ZERO);
            Some(JointBinding { node, rest })
        };

        let joints = PerJoint::from_fn(|joint| {
            let found = joint_candidates(joint).iter().find_map(|name| resolve(name));
            match &found {
                Some(_) => debug!("bound {joint}"),
                None => debug!("{joint} not found; it will be left alone"),
            }
            found
        });

        let fingers = |side: Side| -> Vec<FingerBinding<H>> {
            if joints[hand_of(side)].is_none() {
                return Vec::new();
            }
            let mut chain = Vec::new();
            for kind in FingerKind::SEARCH_ORDER {
                for level in 1..=3 {
                    let hit = finger_candidates(side, kind, level)
                        .iter()
                        .find_map(|name| resolve(name));
                    if let Some(JointBinding { node, rest }) = hit {
                        chain.push(FingerBinding {
                            node,
                            rest,
                            kind,
                            level,
                        });
                    }
                }
            }
            chain
        };

        let right_fingers = fingers(Side::Right);
        let left_fingers = fingers(Side::Left);
        let binding = Self {
            joints,
            right_fingers,
            left_fingers,
        };
        info!(
            "bound {} of {} joints, finger joints R:{} L:{}",
            binding.bound_count(),
            JointId::COUNT,
            binding.right_fingers.len(),
            binding.left_fingers.len()
        );
        binding
    }
}

impl<H> Binding<H> {
    /// A binding that resolved nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            joints: PerJoint::from_fn(|_| None),
            right_fingers: Vec::new(),
            left_fingers: Vec::new(),
        }
    }

    /// The node bound to `joint`, if any.
    #[must_use]
    pub fn joint(&self, joint: JointId) -> Option<&JointBinding<H>> {
        self.joints[joint].as_ref()
    }

    /// Finger joints found under the `side` hand, in search order.
    #[must_use]
    pub fn fingers(&self, side: Side) -> &[FingerBinding<H>] {
        match side {
            Side::Right => &self.right_fingers,
            Side::Left => &self.left_fingers,
        }
    }

    /// Number of logical joints that found a node.
    #[must_use]
    pub fn bound_count(&self) -> usize {
        self.joints.iter().flatten().count()
    }
}

impl<H> Default for Binding<H> {
    fn default() -> Self {
        Self::empty()
    }
}

const fn hand_of(side: Side) -> JointId {
    match side {
        Side::Right => JointId::RightHand,
        Side::Left => JointId::LeftHand,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::{Armature, NodeId};
    use rstest::{fixture, rstest};

    #[fixture]
    fn blender_rig() -> Armature {
        let mut rig = Armature::new("Armature");
        let root = rig.root();
        let hips = rig.add_child(root, "Pelvis");
        let chest = rig.add_chain(hips, &["Spine", "Chest"]);
        rig.add_child(chest, "Neck");
        let hand = rig.add_chain(chest, &["UpperArm_R", "ForeArm_R", "Hand_R"]);
        rig.add_chain(hand, &["RightIndex1", "RightIndex2", "RightIndex3"]);
        rig.add_child(hand, "RightHandThumb1");
        rig
    }

    #[rstest]
    #[case(JointId::Spine, "Chest")]
    #[case(JointId::Hips, "Pelvis")]
    #[case(JointId::Head, "Neck")]
    #[case(JointId::RightForeArm, "ForeArm_R")]
    fn first_candidate_present_wins(
        blender_rig: Armature,
        #[case] joint: JointId,
        #[case] expected: &str,
    ) {
        let binding = Binding::bind(&blender_rig, blender_rig.root());
        let node = binding.joint(joint).map(|b| b.node);
        assert_eq!(node.and_then(|n| blender_rig.name(n)), Some(expected));
    }

    #[rstest]
    fn missing_joints_are_absent(blender_rig: Armature) {
        let binding = Binding::bind(&blender_rig, blender_rig.root());
        assert!(binding.joint(JointId::LeftArm).is_none());
        assert!(binding.joint(JointId::RightFoot).is_none());
        assert!(binding.fingers(Side::Left).is_empty());
    }

    #[rstest]
    fn finger_chains_follow_search_order(blender_rig: Armature) {
        let binding = Binding::bind(&blender_rig, blender_rig.root());
        let found: Vec<_> = binding
            .fingers(Side::Right)
            .iter()
            .map(|f| (f.kind, f.level))
            .collect();
        assert_eq!(
            found,
            [
                (FingerKind::Index, 1),
                (FingerKind::Index, 2),
                (FingerKind::Index, 3),
                (FingerKind::Thumb, 1),
            ]
        );
    }

    #[test]
    fn rest_rotation_is_captured_at_bind_time() {
        let mut rig = Armature::new("Hips");
        let root = rig.root();
        let head = rig.add_child(root, "Head");
        rig.set_rotation(head, JointRotation::new(0.1, 0.2, 0.3));
        let binding = Binding::bind(&rig, root);
        rig.set_rotation(head, JointRotation::ZERO);
        assert_eq!(
            binding.joint(JointId::Head).map(|b| b.rest),
            Some(JointRotation::new(0.1, 0.2, 0.3))
        );
    }

    #[test]
    fn empty_binding_resolves_nothing() {
        let binding: Binding<NodeId> = Binding::empty();
        assert_eq!(binding.bound_count(), 0);
    }
}
