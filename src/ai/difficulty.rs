//! Difficulty levels and their adaptive attack patterns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ADAPT_HEALTH_MARGIN, MIN_ADAPTED_COOLDOWN_MS};

/// Raised when a difficulty name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty `{0}`; expected easy, medium or hard")]
pub struct UnknownDifficulty(pub String);

/// How hard the opponent fights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Slow, mostly single strikes.
    Easy,
    /// The default.
    #[default]
    Medium,
    /// Fast and always combinating.
    Hard,
}

impl Difficulty {
    /// Base pattern before health adaptation.
    #[must_use]
    pub const fn pattern(self) -> Pattern {
        match self {
            Self::Easy => Pattern {
                cooldown_ms: 4000.0,
                damage: 3.0,
                combo_chance: 0.1,
                move_speed: 0.02,
            },
            Self::Medium => Pattern {
                cooldown_ms: 2500.0,
                damage: 5.0,
                combo_chance: 0.6,
                move_speed: 0.04,
            },
            Self::Hard => Pattern {
                cooldown_ms: 1500.0,
                damage: 8.0,
                combo_chance: 1.0,
                move_speed: 0.06,
            },
        }
    }

    /// Lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(UnknownDifficulty(s.to_owned())),
        }
    }
}

/// Attack tuning for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Minimum gap between attack decisions, in ms.
    pub cooldown_ms: f64,
    /// Damage per landed strike.
    pub damage: f32,
    /// Probability a decision becomes a combo.
    pub combo_chance: f32,
    /// Footwork oscillation rate.
    pub move_speed: f32,
}

impl Pattern {
    /// Adjusts the pattern for `health_diff` (AI health minus player
    /// health).
    ///
    /// A losing AI attacks up to 30% sooner and combinates more; a winning
    /// AI eases off.
    #[must_use]
    pub fn adapted(self, health_diff: f32) -> Self {
        if health_diff < -ADAPT_HEALTH_MARGIN {
            Self {
                cooldown_ms: (self.cooldown_ms * 0.7).max(MIN_ADAPTED_COOLDOWN_MS),
                combo_chance: (self.combo_chance + 0.2).min(1.0),
                ..self
            }
        } else if health_diff > ADAPT_HEALTH_MARGIN {
            Self {
                cooldown_ms: self.cooldown_ms * 1.2,
                combo_chance: (self.combo_chance - 0.1).max(0.3),
                ..self
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Difficulty::Easy)]
    #[case(Difficulty::Medium)]
    #[case(Difficulty::Hard)]
    fn losing_ai_speeds_up_within_floor(#[case] difficulty: Difficulty) {
        let base = difficulty.pattern();
        let adapted = base.adapted(-30.0);
        assert!(adapted.cooldown_ms < base.cooldown_ms);
        assert!(adapted.cooldown_ms >= MIN_ADAPTED_COOLDOWN_MS);
        assert!(adapted.combo_chance <= 1.0);
    }

    #[rstest]
    #[case(Difficulty::Easy)]
    #[case(Difficulty::Medium)]
    #[case(Difficulty::Hard)]
    fn winning_ai_slows_down(#[case] difficulty: Difficulty) {
        let base = difficulty.pattern();
        let adapted = base.adapted(30.0);
        assert!(adapted.cooldown_ms > base.cooldown_ms);
        assert!(adapted.combo_chance >= 0.3);
    }

    #[test]
    fn close_fights_keep_the_base_pattern() {
        let base = Difficulty::Medium.pattern();
        assert_eq!(base.adapted(20.0), base);
        assert_eq!(base.adapted(-20.0), base);
    }

    #[test]
    fn hard_floor_applies() {
        let adapted = Difficulty::Hard.pattern().adapted(-50.0);
        assert_relative_eq!(adapted.cooldown_ms, 1050.0, epsilon = 1e-9);
        let easy = Difficulty::Easy.pattern().adapted(50.0);
        assert_relative_eq!(easy.combo_chance, 0.3);
    }

    #[rstest]
    #[case("hard", Ok(Difficulty::Hard))]
    #[case(" Easy ", Ok(Difficulty::Easy))]
    #[case("brutal", Err(UnknownDifficulty("brutal".to_owned())))]
    fn difficulty_parses(#[case] input: &str, #[case] expected: Result<Difficulty, UnknownDifficulty>) {
        assert_eq!(input.parse::<Difficulty>(), expected);
    }
}
