//! Skeleton access and joint binding.
//!
//! The engine never walks a scene graph directly. It talks to a
//! [`Skeleton`], which the Bevy plugin implements over an entity hierarchy
//! and [`Armature`] implements as a plain in-memory arena for headless runs
//! and tests.

mod armature;
mod binder;

pub use armature::{Armature, NodeId};
pub use binder::{joint_candidates, Binding, FingerBinding, JointBinding};

use std::fmt::Debug;

use crate::joint::JointRotation;

/// A named node hierarchy whose local rotations the engine can drive.
pub trait Skeleton {
    /// Cheap reference to one node.
    type Handle: Copy + Eq + Debug;

    /// Calls `visit` for `root` and every descendant, parents before
    /// children, siblings in stored order.
    fn visit_depth_first(&self, root: Self::Handle, visit: &mut dyn FnMut(Self::Handle, &str));

    /// Current local rotation of `node`, or `None` if it no longer exists.
    fn rotation(&self, node: Self::Handle) -> Option<JointRotation>;

    /// Overwrites the local rotation of `node`.
    fn set_rotation(&mut self, node: Self::Handle, rotation: JointRotation);

    /// Sets a uniform local scale on `node`.
    fn set_scale(&mut self, node: Self::Handle, scale: f32);
}
