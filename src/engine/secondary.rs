//! Breathing, idle sway and the fight-stance weave.

use crate::joint::{JointId, JointRotation, Side};
use crate::numeric::{wave, wave_cos, wave_shifted};

/// Breathing amplitude on the spine while idle.
const IDLE_BREATH: f32 = 0.012;
/// Breathing amplitude in any other pose.
const STANCE_BREATH: f32 = 0.005;

/// Additive cosmetic motion for `joint` at `time_ms`.
///
/// `idle` selects the deeper idle breath; `weave` enables the head and
/// spine weave used in the fight stance during a bout.
pub(super) fn motion(joint: JointId, time_ms: f64, idle: bool, weave: bool) -> JointRotation {
    let amplitude = if idle { IDLE_BREATH } else { STANCE_BREATH };
    let breathing = wave(time_ms, 0.002) * amplitude;
    // Sway runs on a half-speed clock.
    let sway = 0.0005;

    let mut out = match joint {
        JointId::Spine => JointRotation::new(breathing, wave(time_ms, sway * 3.1) * 0.02, 0.0),
        JointId::Head => JointRotation::new(
            wave_cos(time_ms, sway * 3.5) * 0.02,
            wave(time_ms, sway * 4.5) * 0.03,
            0.0,
        ),
        _ => match joint.arm_side() {
            Some(side) => {
                let phase = if side == Side::Right { 0.0 } else { 2.0 };
                JointRotation::new(
                    breathing * 0.4,
                    0.0,
                    wave_shifted(time_ms, sway * 2.0, phase) * 0.01,
                )
            }
            None => JointRotation::ZERO,
        },
    };

    if weave {
        let clock = 0.001;
        match joint {
            JointId::Head => {
                out.ry += wave(time_ms, clock * 1.5) * 0.08;
                out.rx += wave(time_ms, clock * 2.2) * 0.04;
            }
            JointId::Spine => out.ry += wave(time_ms, clock * 1.2) * 0.05,
            _ => {}
        }
    }
    out
}
