//! Bevy integration for the sparring opponent.
//!
//! [`SparringPlugin`] binds an [`Opponent`] to the first entity tagged with
//! [`OpponentSkeleton`], walking its `Name`d descendants, and ticks it every
//! `Update` from [`Time`]. Combat events leave the opponent as
//! [`CombatSignal`] observer events, and the camera look-at target is
//! published in [`CameraFocus`] for the host's camera systems.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use log::{debug, info};

use crate::ai::{Bout, CombatEvent, Difficulty};
use crate::engine::BlendSettings;
use crate::joint::JointRotation;
use crate::opponent::Opponent;
use crate::rng::FightRng;
use crate::skeleton::Skeleton;

/// Marks the root entity of the opponent's armature.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct OpponentSkeleton;

/// The opponent driven by [`SparringPlugin`], plus the root it is bound to.
#[derive(Resource, Debug)]
pub struct SparringRig {
    opponent: Opponent<Entity>,
    root: Option<Entity>,
}

impl SparringRig {
    /// Wraps an unbound opponent.
    #[must_use]
    pub const fn new(opponent: Opponent<Entity>) -> Self {
        Self {
            opponent,
            root: None,
        }
    }

    /// The opponent.
    #[must_use]
    pub const fn opponent(&self) -> &Opponent<Entity> {
        &self.opponent
    }

    /// Mutable access for host input such as hits and pose overrides.
    pub fn opponent_mut(&mut self) -> &mut Opponent<Entity> {
        &mut self.opponent
    }

    /// Root entity the opponent is bound to, once bound.
    #[must_use]
    pub const fn root(&self) -> Option<Entity> {
        self.root
    }
}

/// Health and player defense for the running bout.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct BoutState(pub Bout);

/// Where the host camera should look this frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraFocus(pub Vec3);

impl Default for CameraFocus {
    fn default() -> Self {
        Self(crate::engine::CameraRig::HOME)
    }
}

/// A [`CombatEvent`] re-emitted into the Bevy world.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CombatSignal(pub CombatEvent);

/// The opponent's armature viewed through `Name`, `Children` and `Transform`.
#[derive(SystemParam)]
pub struct BevySkeleton<'w, 's> {
    nodes: Query<'w, 's, (Option<&'static Name>, Option<&'static Children>)>,
    transforms: Query<'w, 's, &'static mut Transform>,
}

impl BevySkeleton<'_, '_> {
    /// Moves `node` to `translation`.
    pub fn set_translation(&mut self, node: Entity, translation: Vec3) {
        if let Ok(mut transform) = self.transforms.get_mut(node) {
            transform.translation = translation;
        }
    }
}

impl Skeleton for BevySkeleton<'_, '_> {
    type Handle = Entity;

    fn visit_depth_first(&self, root: Entity, visit: &mut dyn FnMut(Entity, &str)) {
        let mut stack = vec![root];
        while let Some(entity) = stack.pop() {
            let Ok((name, children)) = self.nodes.get(entity) else {
                continue;
            };
            visit(entity, name.map_or("", Name::as_str));
            if let Some(kids) = children {
                stack.extend(kids.iter().rev());
            }
        }
    }

    fn rotation(&self, node: Entity) -> Option<JointRotation> {
        let transform = self.transforms.get(node).ok()?;
        let (rx, ry, rz) = transform.rotation.to_euler(EulerRot::XYZ);
        Some(JointRotation::new(rx, ry, rz))
    }

    fn set_rotation(&mut self, node: Entity, rotation: JointRotation) {
        if let Ok(mut transform) = self.transforms.get_mut(node) {
            transform.rotation =
                Quat::from_euler(EulerRot::XYZ, rotation.rx, rotation.ry, rotation.rz);
        }
    }

    fn set_scale(&mut self, node: Entity, scale: f32) {
        if let Ok(mut transform) = self.transforms.get_mut(node) {
            transform.scale = Vec3::splat(scale);
        }
    }
}

/// Binds the opponent to a newly tagged [`OpponentSkeleton`] root.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters are taken by value."
)]
pub fn bind_opponent_system(
    mut rig: ResMut<SparringRig>,
    roots: Query<Entity, Added<OpponentSkeleton>>,
    skeleton: BevySkeleton,
) {
    for root in &roots {
        let found = rig.opponent.bind(&skeleton, root);
        rig.root = Some(root);
        info!("opponent bound to {root:?} with {found} joints");
    }
}

/// Advances the opponent by one frame and publishes its events.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters are taken by value."
)]
pub fn tick_opponent_system(
    time: Res<Time>,
    mut rig: ResMut<SparringRig>,
    mut bout: ResMut<BoutState>,
    mut skeleton: BevySkeleton,
    mut focus: ResMut<CameraFocus>,
    mut commands: Commands,
) {
    let Some(root) = rig.root else {
        return;
    };
    let now_ms = time.elapsed_secs_f64() * 1000.0;

    rig.opponent.tick(now_ms, &mut skeleton, &mut bout.0);
    skeleton.set_translation(root, rig.opponent.body());
    focus.0 = rig.opponent.engine().camera().target();

    for event in rig.opponent.drain_events() {
        commands.trigger(CombatSignal(event));
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value."
)]
fn log_combat_signal(event: On<CombatSignal>) {
    debug!("combat event: {:?}", event.event().0);
}

/// Adds the opponent, its resources and the bind/tick systems.
#[derive(Debug, Clone, Default)]
pub struct SparringPlugin {
    /// Initial AI difficulty.
    pub difficulty: Difficulty,
    /// Seed for a reproducible bout; entropy when `None`.
    pub seed: Option<u64>,
    /// Blend tuning.
    pub settings: BlendSettings,
    /// Start enabled and in combat mode.
    pub autostart: bool,
}

impl Plugin for SparringPlugin {
    fn build(&self, app: &mut App) {
        let rng = self.seed.map_or_else(FightRng::from_entropy, FightRng::from_seed);
        let mut opponent = Opponent::new(self.settings, rng);
        opponent.set_difficulty(self.difficulty);
        if self.autostart {
            opponent.set_enabled(true);
            opponent.set_combat_mode(true);
        }

        app.register_type::<OpponentSkeleton>();
        app.insert_resource(SparringRig::new(opponent));
        app.init_resource::<BoutState>();
        app.init_resource::<CameraFocus>();
        app.add_observer(log_combat_signal);
        app.add_systems(Update, (bind_opponent_system, tick_opponent_system).chain());
    }
}
