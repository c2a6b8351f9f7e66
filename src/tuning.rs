//! Data-driven game balance
//!
//! Lengths are stored in scaled units, so a JSON file spells the screen
//! height of 64px as `640`. Any missing field falls back to the default.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::consts::*;
use crate::highscores::{HIGHSCORE_SLOTS, HighScores};
use crate::platform::Millis;
use crate::sim::Fixed;

/// Largest magnitude any length or speed may have (100_000px)
pub const MAX_EXTENT: Fixed = Fixed::from_pixels(100_000);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical tick period
    pub tick_ms: Millis,

    // === Geometry ===
    pub screen_width: Fixed,
    pub screen_height: Fixed,
    /// Left edge of the actor, fixed for the whole run
    pub actor_x: Fixed,
    /// Side length of the (square) actor sprite
    pub actor_size: Fixed,

    // === Physics (per tick) ===
    pub gravity: Fixed,
    /// Velocity is set to this on a jump, not added
    pub jump_velocity: Fixed,
    /// Velocity is clamped to [-max_speed, max_speed]
    pub max_speed: Fixed,

    // === Obstacles ===
    pub obstacle_width: Fixed,
    pub gap_size: Fixed,
    /// Minimum distance between the gap and either screen edge
    pub gap_margin: Fixed,
    pub spacing: Fixed,
    /// Recycle jitter is drawn from [-jitter, jitter]
    pub jitter: Fixed,
    /// Scroll speed at score 0; each point adds one scaled unit
    pub base_speed: Fixed,

    // === Collision ===
    pub forgiveness_margin: Fixed,

    // === Timers ===
    pub game_over_cooldown_ms: Millis,
    pub game_over_timeout_ms: Millis,
    pub highscore_timeout_ms: Millis,
    pub blink_ms: Millis,

    /// Initial highscore table, strictly descending
    pub default_highscores: [u32; HIGHSCORE_SLOTS],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,

            screen_width: Fixed::from_pixels(SCREEN_WIDTH),
            screen_height: Fixed::from_pixels(SCREEN_HEIGHT),
            actor_x: Fixed::from_pixels(ACTOR_X),
            actor_size: Fixed::from_pixels(ACTOR_SIZE),

            gravity: Fixed::from_raw(GRAVITY),
            jump_velocity: Fixed::from_raw(JUMP_VELOCITY),
            max_speed: Fixed::from_raw(MAX_SPEED),

            obstacle_width: Fixed::from_pixels(OBSTACLE_WIDTH),
            gap_size: Fixed::from_pixels(GAP_SIZE),
            gap_margin: Fixed::from_pixels(GAP_MARGIN),
            spacing: Fixed::from_pixels(OBSTACLE_SPACING),
            jitter: Fixed::from_pixels(OBSTACLE_JITTER),
            base_speed: Fixed::from_raw(BASE_SPEED),

            forgiveness_margin: Fixed::from_raw(FORGIVENESS_MARGIN),

            game_over_cooldown_ms: GAME_OVER_COOLDOWN_MS,
            game_over_timeout_ms: GAME_OVER_TIMEOUT_MS,
            highscore_timeout_ms: HIGHSCORE_TIMEOUT_MS,
            blink_ms: BLINK_MS,

            default_highscores: DEFAULT_HIGHSCORES,
        }
    }
}

impl Tuning {
    /// Parse and validate a tuning file
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation's invariants
    pub fn validate(&self) -> Result<(), Error> {
        if self.tick_ms == 0 {
            return Err(Error::InvalidTuning("tick_ms must be positive"));
        }
        // Checked first so the arithmetic below and in the sim cannot overflow.
        let magnitudes = [
            self.screen_width,
            self.screen_height,
            self.actor_x,
            self.actor_size,
            self.gravity,
            self.jump_velocity,
            self.max_speed,
            self.obstacle_width,
            self.gap_size,
            self.gap_margin,
            self.spacing,
            self.jitter,
            self.base_speed,
            self.forgiveness_margin,
        ];
        let limit = MAX_EXTENT.raw().unsigned_abs();
        if magnitudes.iter().any(|v| v.raw().unsigned_abs() > limit) {
            return Err(Error::InvalidTuning("value out of range"));
        }
        if self.screen_width <= Fixed::ZERO || self.screen_height <= Fixed::ZERO {
            return Err(Error::InvalidTuning("screen dimensions must be positive"));
        }
        if self.max_speed <= Fixed::ZERO {
            return Err(Error::InvalidTuning("max_speed must be positive"));
        }
        if self.gravity < Fixed::ZERO {
            return Err(Error::InvalidTuning("gravity must not be negative"));
        }
        if self.jump_velocity >= Fixed::ZERO {
            return Err(Error::InvalidTuning("jump_velocity must point upward"));
        }
        if self.base_speed < Fixed::ZERO {
            return Err(Error::InvalidTuning("base_speed must not be negative"));
        }
        if self.obstacle_width <= Fixed::ZERO {
            return Err(Error::InvalidTuning("obstacle_width must be positive"));
        }
        if self.jitter < Fixed::ZERO {
            return Err(Error::InvalidTuning("jitter must not be negative"));
        }
        // Two neighbours can each be jittered toward one another at spawn.
        if self.jitter * 2 >= self.spacing - self.obstacle_width {
            return Err(Error::InvalidTuning(
                "jitter too large: obstacles could overlap",
            ));
        }
        if self.actor_size <= Fixed::ZERO || self.actor_size >= self.screen_height {
            return Err(Error::InvalidTuning("actor must fit on screen"));
        }
        if self.gap_size <= Fixed::ZERO {
            return Err(Error::InvalidTuning("gap_size must be positive"));
        }
        if self.actor_size >= self.gap_size {
            return Err(Error::InvalidTuning("actor must fit through the gap"));
        }
        let (lo, hi) = self.gap_start_range();
        if lo < Fixed::ZERO || lo >= hi {
            return Err(Error::InvalidTuning("gap does not fit on screen"));
        }
        if self.forgiveness_margin < Fixed::ZERO || self.forgiveness_margin * 2 >= self.actor_size
        {
            return Err(Error::InvalidTuning(
                "forgiveness_margin must leave a non-empty hitbox",
            ));
        }
        if !HighScores::is_strictly_descending(&self.default_highscores) {
            return Err(Error::InvalidTuning(
                "default_highscores must be strictly descending",
            ));
        }
        Ok(())
    }

    /// Half-open range `[lo, hi)` a gap's top edge is drawn from
    pub fn gap_start_range(&self) -> (Fixed, Fixed) {
        (
            self.gap_margin,
            self.screen_height - self.gap_size - self.gap_margin,
        )
    }

    /// Resting height of the actor at the start of a run
    pub fn actor_spawn_y(&self) -> Fixed {
        Fixed::from_raw((self.screen_height - self.actor_size).raw() / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::OBSTACLE_COUNT;

    #[test]
    fn test_default_is_valid() {
        Tuning::default().validate().unwrap();
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 7, "tick_ms": 20 }"#).unwrap();
        assert_eq!(tuning.gravity, Fixed::from_raw(7));
        assert_eq!(tuning.tick_ms, 20);
        assert_eq!(tuning.screen_height, Fixed::from_pixels(SCREEN_HEIGHT));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(Error::Config { .. })
        ));
    }

    #[test]
    fn test_rejects_overlapping_jitter() {
        let tuning = Tuning {
            jitter: Fixed::from_pixels(25),
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_gap_taller_than_screen() {
        let tuning = Tuning {
            gap_size: Fixed::from_pixels(60),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_unsorted_highscores() {
        let tuning = Tuning {
            default_highscores: [5, 5, 3, 2, 1],
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_spacing() {
        let tuning = Tuning {
            spacing: Fixed::from_raw(1_500_000_000),
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_extreme_magnitudes() {
        let huge = Fixed::from_raw(i32::MAX);
        let cases = [
            Tuning {
                screen_width: huge,
                ..Default::default()
            },
            Tuning {
                jitter: huge,
                ..Default::default()
            },
            Tuning {
                obstacle_width: huge,
                ..Default::default()
            },
            Tuning {
                max_speed: huge,
                ..Default::default()
            },
            Tuning {
                gap_margin: Fixed::from_raw(i32::MIN),
                ..Default::default()
            },
        ];
        for tuning in cases {
            assert!(tuning.validate().is_err(), "{:?}", tuning);
        }
    }

    #[test]
    fn test_largest_field_layout_fits() {
        let tuning = Tuning {
            screen_width: MAX_EXTENT,
            spacing: MAX_EXTENT,
            ..Default::default()
        };
        tuning.validate().unwrap();
        let edge = tuning
            .screen_width
            .raw()
            .checked_add(tuning.spacing.raw() * OBSTACLE_COUNT as i32 + tuning.jitter.raw());
        assert!(edge.is_some());
    }

    #[test]
    fn test_rejects_impassable_gap() {
        for gap in [Fixed::ZERO, Fixed::from_raw(-100)] {
            let tuning = Tuning {
                gap_size: gap,
                ..Default::default()
            };
            assert!(tuning.validate().is_err());
        }
        let tuning = Tuning {
            gap_size: Fixed::from_pixels(ACTOR_SIZE),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_actor_taller_than_screen() {
        let tuning = Tuning {
            actor_size: Fixed::from_pixels(SCREEN_HEIGHT),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_inverted_physics() {
        let tuning = Tuning {
            gravity: Fixed::from_raw(-1),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
        let tuning = Tuning {
            jump_velocity: Fixed::ZERO,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_gap_start_range() {
        let (lo, hi) = Tuning::default().gap_start_range();
        assert_eq!(lo, Fixed::from_pixels(GAP_MARGIN));
        assert_eq!(hi, Fixed::from_pixels(SCREEN_HEIGHT - GAP_SIZE - GAP_MARGIN));
    }
}
