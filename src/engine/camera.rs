//! Look-at target for the arena camera: shake, nudges and body tracking.

use glam::Vec3;

use crate::constants::{CAMERA_COMBAT_HEIGHT, CAMERA_IDLE_HEIGHT};
use crate::numeric::approach;
use crate::rng::FightRng;

use super::BlendSettings;

/// The point the camera orbits and looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    target: Vec3,
    shake: f32,
}

impl CameraRig {
    /// Where the camera settles once shake dies out.
    pub const HOME: Vec3 = Vec3::new(0.0, 1.0, 0.0);

    /// A settled rig looking at [`CameraRig::HOME`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            target: Self::HOME,
            shake: 0.0,
        }
    }

    /// Current look-at point.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Remaining shake magnitude.
    #[must_use]
    pub const fn shake(&self) -> f32 {
        self.shake
    }

    /// Starts a shake of `intensity`, replacing any shake in progress.
    pub fn start_shake(&mut self, intensity: f32) {
        if intensity.is_finite() {
            self.shake = intensity.max(0.0);
        }
    }

    /// One immediate random offset of up to half `magnitude` on X and Y.
    pub fn nudge(&mut self, magnitude: f32, rng: &mut FightRng) {
        self.target.x += rng.jitter(magnitude);
        self.target.y += rng.jitter(magnitude);
    }

    /// Advances shake decay, then eases the target toward the body.
    pub fn tick(
        &mut self,
        body: Vec3,
        combat_mode: bool,
        settings: &BlendSettings,
        rng: &mut FightRng,
    ) {
        if self.shake > settings.shake_threshold {
            self.nudge(self.shake, rng);
            self.shake *= settings.shake_decay;
            if self.shake <= settings.shake_threshold {
                self.shake = 0.0;
                self.target = Self::HOME;
            }
        }

        let height = if combat_mode {
            CAMERA_COMBAT_HEIGHT
        } else {
            CAMERA_IDLE_HEIGHT
        };
        let rate = settings.camera_tracking_rate;
        self.target.x = approach(self.target.x, body.x, rate);
        self.target.z = approach(self.target.z, body.z, rate);
        self.target.y = approach(self.target.y, height, rate);

        if !self.target.is_finite() {
            self.target = Self::HOME;
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
