//! Binding logical joints and fingers onto differently named rigs.

use rstest::rstest;
use sparring::joint::{FingerKind, JointId, JointRotation, Side};
use sparring::skeleton::{Armature, Binding, Skeleton};
use test_utils::{hands_only, head_and_spine, humanoid};

#[rstest]
fn the_stock_humanoid_binds_everything() {
    let rig = humanoid();
    let binding = Binding::bind(&rig, rig.root());

    assert_eq!(binding.bound_count(), JointId::COUNT);
    for side in [Side::Left, Side::Right] {
        assert_eq!(binding.fingers(side).len(), 15, "{side:?} hand");
    }
    let spine = binding.joint(JointId::Spine).map(|b| b.node);
    assert_eq!(spine, rig.find("Spine2"));
}

#[rstest]
fn fingers_are_ordered_index_first_knuckle_first() {
    let rig = humanoid();
    let binding = Binding::bind(&rig, rig.root());
    let order: Vec<(FingerKind, u8)> = binding
        .fingers(Side::Right)
        .iter()
        .take(4)
        .map(|f| (f.kind, f.level))
        .collect();
    assert_eq!(
        order,
        [
            (FingerKind::Index, 1),
            (FingerKind::Index, 2),
            (FingerKind::Index, 3),
            (FingerKind::Middle, 1),
        ]
    );
}

#[rstest]
fn bare_hands_bind_short_finger_names() {
    let rig = hands_only();
    let binding = Binding::bind(&rig, rig.root());

    assert_eq!(binding.bound_count(), 2);
    assert_eq!(binding.fingers(Side::Left).len(), 15);
    assert_eq!(binding.fingers(Side::Right).len(), 15);
    assert!(binding.joint(JointId::Head).is_none());
}

#[rstest]
fn fingers_without_a_hand_are_ignored() {
    let mut rig = Armature::new("Armature");
    rig.add_chain(rig.root(), &["LeftThumb1", "LeftThumb2", "LeftThumb3"]);
    let binding = Binding::bind(&rig, rig.root());
    assert!(binding.fingers(Side::Left).is_empty());
}

#[rstest]
#[case("UpperArm_L", JointId::LeftArm)]
#[case("mixamorigRightForeArm", JointId::RightForeArm)]
#[case("Pelvis", JointId::Hips)]
#[case("Neck", JointId::Head)]
#[case("Right_UpLeg", JointId::RightUpLeg)]
fn alternate_naming_schemes_resolve(#[case] name: &str, #[case] joint: JointId) {
    let mut rig = Armature::new("Root");
    let node = rig.add_child(rig.root(), name);
    let binding = Binding::bind(&rig, rig.root());
    assert_eq!(binding.joint(joint).map(|b| b.node), Some(node));
}

#[rstest]
fn the_first_node_met_depth_first_wins() {
    let mut rig = Armature::new("Root");
    let first = rig.add_chain(rig.root(), &["Body", "Head"]);
    rig.add_child(rig.root(), "Head");
    let binding = Binding::bind(&rig, rig.root());
    assert_eq!(binding.joint(JointId::Head).map(|b| b.node), Some(first));
}

#[rstest]
fn rest_rotation_is_captured_at_bind_time() {
    let mut rig = head_and_spine();
    let head = rig.find("Head");
    let tilt = JointRotation::new(0.1, -0.2, 0.05);
    if let Some(node) = head {
        rig.set_rotation(node, tilt);
    }
    let binding = Binding::bind(&rig, rig.root());
    assert_eq!(binding.joint(JointId::Head).map(|b| b.rest), Some(tilt));
}

#[rstest]
fn an_empty_rig_binds_nothing_without_failing() {
    let rig = Armature::new("Lonely");
    let binding = Binding::bind(&rig, rig.root());
    assert_eq!(binding.bound_count(), 0);
    assert!(binding.fingers(Side::Right).is_empty());
}
