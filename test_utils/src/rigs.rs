//! Armature fixtures.

use sparring::engine::BlendSettings;
use sparring::rng::FightRng;
use sparring::skeleton::{Armature, NodeId};
use sparring::Opponent;

/// Full Mixamo-layout humanoid with fingers.
pub fn humanoid() -> Armature {
    Armature::humanoid()
}

/// Hips, spine and head only: enough for hits and breathing.
pub fn head_and_spine() -> Armature {
    let mut rig = Armature::new("Armature");
    let hips = rig.add_child(rig.root(), "Hips");
    let spine = rig.add_chain(hips, &["Spine", "Spine1"]);
    rig.add_chain(spine, &["Neck", "Head"]);
    rig
}

/// Two bare hands with fingers but no body, using the short finger names.
pub fn hands_only() -> Armature {
    let mut rig = Armature::new("Armature");
    for side in ["Left", "Right"] {
        let hand = rig.add_child(rig.root(), &format!("{side}Hand"));
        for finger in ["Thumb", "Index", "Middle", "Ring", "Pinky"] {
            let names = [1, 2, 3].map(|level| format!("{side}{finger}{level}"));
            let refs = names.each_ref().map(String::as_str);
            rig.add_chain(hand, &refs);
        }
    }
    rig
}

/// A seeded opponent bound to `rig`, enabled and in combat mode.
pub fn bound_opponent(rig: &Armature, seed: u64) -> Opponent<NodeId> {
    let mut opponent = Opponent::new(BlendSettings::default(), FightRng::from_seed(seed));
    opponent.bind(rig, rig.root());
    opponent.set_enabled(true);
    opponent.set_combat_mode(true);
    opponent
}
