//! In-memory node arena implementing [`Skeleton`].

use super::Skeleton;
use crate::joint::JointRotation;

/// Index of a node inside an [`Armature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    name: String,
    children: Vec<NodeId>,
    rotation: JointRotation,
    scale: f32,
}

/// A flat arena of named nodes with local rotation and uniform scale.
///
/// # Examples
/// ```
/// use sparring::skeleton::{Armature, Skeleton};
///
/// let mut armature = Armature::new("Hips");
/// let root = armature.root();
/// let spine = armature.add_child(root, "Spine");
/// let mut names = Vec::new();
/// armature.visit_depth_first(root, &mut |_, name| names.push(name.to_owned()));
/// assert_eq!(names, ["Hips", "Spine"]);
/// assert!(armature.rotation(spine).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Armature {
    nodes: Vec<Node>,
}

impl Armature {
    /// Creates an armature holding a single root node.
    #[must_use]
    pub fn new(root_name: &str) -> Self {
        Self {
            nodes: vec![Node {
                name: root_name.to_owned(),
                children: Vec::new(),
                rotation: JointRotation::ZERO,
                scale: 1.0,
            }],
        }
    }

    /// The root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a child named `name` under `parent`.
    ///
    /// An unknown `parent` attaches the node to the root.
    pub fn add_child(&mut self, parent: NodeId, name: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_owned(),
            children: Vec::new(),
            rotation: JointRotation::ZERO,
            scale: 1.0,
        });
        let parent = if parent.0 < id.0 { parent } else { self.root() };
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(id);
        }
        id
    }

    /// Appends a chain of nodes, each the child of the previous one, and
    /// returns the last.
    pub fn add_chain(&mut self, parent: NodeId, names: &[&str]) -> NodeId {
        names
            .iter()
            .fold(parent, |tip, name| self.add_child(tip, name))
    }

    /// A Mixamo-layout humanoid: spine chain, head, arms with three-joint
    /// fingers, and legs. Every logical joint and finger binds on it.
    #[must_use]
    pub fn humanoid() -> Self {
        let mut rig = Self::new("Armature");
        let hips = rig.add_child(rig.root(), "Hips");
        let chest = rig.add_chain(hips, &["Spine", "Spine1", "Spine2"]);
        rig.add_chain(chest, &["Neck", "Head"]);
        for side in ["Left", "Right"] {
            let arm = [
                format!("{side}Shoulder"),
                format!("{side}Arm"),
                format!("{side}ForeArm"),
                format!("{side}Hand"),
            ];
            let hand = rig.add_owned_chain(chest, &arm);
            for finger in ["Thumb", "Index", "Middle", "Ring", "Pinky"] {
                let joints = [1, 2, 3].map(|level| format!("{side}Hand{finger}{level}"));
                rig.add_owned_chain(hand, &joints);
            }
            let leg = [
                format!("{side}UpLeg"),
                format!("{side}Leg"),
                format!("{side}Foot"),
            ];
            rig.add_owned_chain(hips, &leg);
        }
        rig
    }

    fn add_owned_chain(&mut self, parent: NodeId, names: &[String]) -> NodeId {
        names
            .iter()
            .fold(parent, |tip, name| self.add_child(tip, name))
    }

    /// First node named `name` in depth-first order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<NodeId> {
        let mut found = None;
        self.visit_depth_first(self.root(), &mut |node, node_name| {
            if found.is_none() && node_name == name {
                found = Some(node);
            }
        });
        found
    }

    /// Name of `node`.
    #[must_use]
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.name.as_str())
    }

    /// Uniform scale of `node`.
    #[must_use]
    pub fn scale(&self, node: NodeId) -> Option<f32> {
        self.nodes.get(node.0).map(|n| n.scale)
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`; an armature has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Skeleton for Armature {
    type Handle = NodeId;

    fn visit_depth_first(&self, root: NodeId, visit: &mut dyn FnMut(NodeId, &str)) {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id.0) else {
                continue;
            };
            visit(id, &node.name);
            stack.extend(node.children.iter().rev().copied());
        }
    }

    fn rotation(&self, node: NodeId) -> Option<JointRotation> {
        self.nodes.get(node.0).map(|n| n.rotation)
    }

    fn set_rotation(&mut self, node: NodeId, rotation: JointRotation) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.rotation = rotation;
        }
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.scale = scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_visits_parents_before_children_in_order() {
        let mut armature = Armature::new("root");
        let root = armature.root();
        let a = armature.add_child(root, "a");
        armature.add_child(a, "a1");
        armature.add_child(root, "b");
        let mut names = Vec::new();
        armature.visit_depth_first(root, &mut |_, name| names.push(name.to_owned()));
        assert_eq!(names, ["root", "a", "a1", "b"]);
    }

    #[test]
    fn find_returns_first_depth_first_match() {
        let mut armature = Armature::new("root");
        let root = armature.root();
        let first = armature.add_chain(root, &["x", "Head"]);
        armature.add_child(root, "Head");
        assert_eq!(armature.find("Head"), Some(first));
    }

    #[test]
    fn humanoid_has_a_full_hand() {
        let rig = Armature::humanoid();
        let hand = rig.find("RightHand");
        let pinky_tip = rig.find("RightHandPinky3");
        assert!(hand.is_some() && pinky_tip.is_some());
        // 7 torso + 2 × (4 arm + 15 finger + 3 leg)
        assert_eq!(rig.len(), 7 + 2 * 22);
    }

    #[test]
    fn writes_to_missing_nodes_are_ignored() {
        let mut armature = Armature::new("root");
        armature.set_rotation(NodeId(9), JointRotation::new(1.0, 0.0, 0.0));
        assert_eq!(armature.len(), 1);
        assert_eq!(armature.rotation(NodeId(9)), None);
    }
}
