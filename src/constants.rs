//! Tuning constants shared by the pose engine and the combat AI.
//!
//! Blend rates that a host may want to retune live in
//! [`BlendSettings`](crate::engine::BlendSettings); the values here are fixed
//! properties of the rig and the fight rules.

/// Default per-tick approach rate for joint blending.
pub const STIFFNESS: f32 = 0.03;
/// Per-tick multiplier applied to recoil velocity.
pub const RECOIL_DAMPING: f32 = 0.82;
/// Fraction of the recoil offset pulled back to rest each tick.
pub const RECOIL_SPRING_RETURN: f32 = 0.1;
/// Largest recoil offset allowed on any axis, in radians.
pub const MAX_RECOIL: f32 = 0.8;
/// Geometric decay applied to camera shake each tick.
pub const CAMERA_SHAKE_DECAY: f32 = 0.7;
/// Shake magnitude below which the camera settles.
pub const CAMERA_SHAKE_THRESHOLD: f32 = 0.001;
/// Rate at which the camera target follows the opponent.
pub const CAMERA_TRACKING_RATE: f32 = 0.05;
/// Camera look-at height while a bout is running.
pub const CAMERA_COMBAT_HEIGHT: f32 = 1.45;
/// Camera look-at height outside a bout.
pub const CAMERA_IDLE_HEIGHT: f32 = 1.0;

/// Fist values below this relax the fingers back to rest.
pub const FIST_RELAX_THRESHOLD: f32 = 0.1;
/// Per-tick approach rate of relaxing fingers.
pub const FINGER_RELAX_RATE: f32 = 0.1;
/// Per-tick approach rate of curling fingers.
pub const FINGER_CURL_RATE: f32 = 0.2;
/// Extra scale per unit of fist applied to middle knuckles.
pub const KNUCKLE_VOLUME: f32 = 0.08;

/// Health a fighter starts a bout with.
pub const FULL_HEALTH: f32 = 100.0;

/// Base recoil force of a regular hit.
pub const HIT_FORCE: f32 = 0.9;
/// Base recoil force of a critical hit.
pub const CRITICAL_HIT_FORCE: f32 = 2.2;
/// Camera shake started by a regular hit on the opponent.
pub const HIT_SHAKE: f32 = 0.15;
/// Camera shake started by a critical hit on the opponent.
pub const CRITICAL_HIT_SHAKE: f32 = 0.35;

/// Stagger applied to the AI when its attack is interrupted, in ms.
pub const INTERRUPT_STUN_MS: f64 = 800.0;
/// Input lock applied to the player by an unguarded hit, in ms.
pub const PLAYER_STUN_MS: f64 = 600.0;
/// Fraction of damage that passes through the player's guard.
pub const GUARD_PASS_THROUGH: f32 = 0.3;
/// Window in which repeated player hits count as spam, in ms.
pub const SPAM_WINDOW_MS: f64 = 800.0;
/// Player hits inside [`SPAM_WINDOW_MS`] that trigger a forced guard.
pub const SPAM_HIT_COUNT: usize = 3;
/// Age after which logged player hits are forgotten, in ms.
pub const HIT_LOG_RETENTION_MS: f64 = 2000.0;
/// Length of the counter window opened by spam defense, in ms.
pub const COUNTER_WINDOW_MS: f64 = 500.0;
/// Shortest guard hold, in ms.
pub const GUARD_HOLD_MIN_MS: f64 = 1500.0;
/// Longest guard hold, in ms.
pub const GUARD_HOLD_MAX_MS: f64 = 2500.0;
/// Lower bound on the adapted attack cooldown, in ms.
pub const MIN_ADAPTED_COOLDOWN_MS: f64 = 800.0;
/// Health lead beyond which the AI adapts its pattern.
pub const ADAPT_HEALTH_MARGIN: f32 = 20.0;
