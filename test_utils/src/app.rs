//! Minimal Bevy apps hosting the sparring plugin.

use std::time::Duration;

use bevy::prelude::*;
use sparring::ai::Difficulty;
use sparring::plugin::{OpponentSkeleton, SparringPlugin};

/// An app with the plugin, a manual clock and no renderer.
pub fn sparring_app(seed: u64, autostart: bool) -> App {
    let mut app = App::new();
    app.insert_resource(Time::<()>::default());
    app.add_plugins(SparringPlugin {
        difficulty: Difficulty::Hard,
        seed: Some(seed),
        autostart,
        ..Default::default()
    });
    app
}

/// Spawns a small named hierarchy tagged as the opponent's armature and
/// returns the root.
pub fn spawn_armature(app: &mut App) -> Entity {
    let world = app.world_mut();
    let root = world
        .spawn((Name::new("Armature"), Transform::default(), OpponentSkeleton))
        .id();
    let hips = world
        .spawn((Name::new("Hips"), Transform::default(), ChildOf(root)))
        .id();
    let spine = world
        .spawn((Name::new("Spine"), Transform::default(), ChildOf(hips)))
        .id();
    for name in ["Head", "LeftArm", "RightArm"] {
        world.spawn((Name::new(name), Transform::default(), ChildOf(spine)));
    }
    root
}

/// Advances the manual clock by `ms` and runs one update.
pub fn advance(app: &mut App, ms: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(ms));
    app.update();
}
