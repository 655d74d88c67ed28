//! Compile-time guards on ownership and threading of the public types.
use bevy::prelude::Entity;
use sparring::ai::{CombatAi, LungeState};
use sparring::pose::{Pose, TargetPose};
use sparring::{Opponent, SparringRig};
use static_assertions::{assert_impl_all, assert_not_impl_any};

assert_impl_all!(SparringRig: Send, Sync);
assert_impl_all!(Opponent<Entity>: Send, Sync, Clone);
assert_impl_all!(Pose: Copy);
assert_impl_all!(TargetPose: Clone, Send, Sync);
assert_not_impl_any!(CombatAi: Copy);
assert_not_impl_any!(LungeState: Copy);
