//! Posture degradation driven by the fighter's own health.

use crate::constants::FULL_HEALTH;
use crate::joint::{JointId, JointRotation};
use crate::numeric::wave;

/// Discrete damage state derived from fatigue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DamageTier {
    /// Less than a quarter of health lost.
    Healthy,
    /// More than a quarter lost.
    Hurt,
    /// More than half lost.
    Wounded,
    /// More than three quarters lost.
    Critical,
}

/// Fraction of health lost, in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Fatigue(f32);

impl Fatigue {
    /// Fatigue for a fighter at `health` out of [`FULL_HEALTH`].
    #[must_use]
    pub fn from_health(health: f32) -> Self {
        let lost = (FULL_HEALTH - health) / FULL_HEALTH;
        if lost.is_nan() {
            return Self(0.0);
        }
        Self(lost.clamp(0.0, 1.0))
    }

    /// The raw fraction.
    #[must_use]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Tier thresholds sit at 25, 50 and 75 percent lost, exclusive.
    #[must_use]
    pub fn tier(self) -> DamageTier {
        match self.0 {
            f if f > 0.75 => DamageTier::Critical,
            f if f > 0.5 => DamageTier::Wounded,
            f if f > 0.25 => DamageTier::Hurt,
            _ => DamageTier::Healthy,
        }
    }

    /// Slump, chin drop and wobble for `joint`, added to its blended
    /// rotation.
    #[must_use]
    pub fn posture(self, joint: JointId, time_ms: f64) -> JointRotation {
        let tier = self.tier();
        match joint {
            JointId::Head => {
                let mut chin = self.0 * 0.45;
                if tier == DamageTier::Critical {
                    chin += wave(time_ms, 0.004) * 0.15;
                }
                JointRotation::new(-chin, 0.0, 0.0)
            }
            JointId::Spine => {
                let mut slump = self.0 * 0.2;
                if tier >= DamageTier::Wounded {
                    slump += wave(time_ms, 0.003) * 0.08;
                }
                let lean = if tier == DamageTier::Critical {
                    wave(time_ms, 0.002) * 0.1
                } else {
                    0.0
                };
                JointRotation::new(slump, 0.0, lean)
            }
            _ => JointRotation::ZERO,
        }
    }

    /// Screen desaturation strength, reported only past half health while a
    /// bout is running.
    #[must_use]
    pub fn tint(self, combat_mode: bool) -> Option<f32> {
        (combat_mode && self.0 > 0.5).then(|| ((self.0 - 0.5) * 0.6).min(0.3))
    }
}
