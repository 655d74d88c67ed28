//! Procedural animation and opponent AI for a boxing minigame.
//!
//! The crate blends a bound skeleton between authored poses, layers hit
//! recoil, breathing, fatigue and finger grip on top, and drives it all from
//! a timed combat controller. [`Opponent`] combines the pieces for a host;
//! [`SparringPlugin`] does the same inside a Bevy app.
pub mod ai;
pub mod constants;
pub mod engine;
pub mod impact;
pub mod joint;
pub mod logging;
pub mod numeric;
pub mod opponent;
pub mod plugin;
pub mod pose;
pub mod rng;
pub mod skeleton;

// Re-export commonly used items
pub use ai::{Bout, CombatAi, CombatEvent, Difficulty, Ringside, Slip, StrikeKind, Zone};
pub use engine::{BlendSettings, PoseEngine, Stage};
pub use impact::{classify, HitSide, ReactionZone};
pub use joint::{FingerKind, JointId, JointRotation, PerJoint, Side};
pub use logging::init as init_logging;
pub use opponent::Opponent;
pub use plugin::{CombatSignal, OpponentSkeleton, SparringPlugin, SparringRig};
pub use pose::{Pose, PoseId, TargetPose};
pub use rng::FightRng;
pub use skeleton::{Armature, Binding, NodeId, Skeleton};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use sparring::prelude::*;
    //! ```

    pub use crate::ai::{Bout, CombatEvent, Difficulty, Ringside, Slip};
    pub use crate::engine::BlendSettings;
    pub use crate::joint::JointId;
    pub use crate::opponent::Opponent;
    pub use crate::pose::{PoseId, TargetPose};
    pub use crate::rng::FightRng;
    pub use crate::skeleton::{Armature, Skeleton};
}
