//! Simulation configuration
//!
//! Playfield dimensions and tuning values are supplied at init so the core
//! stays testable at arbitrary resolutions. Validation fails fast: a config
//! that leaves no legal spawn band is an error at construction, never a
//! silently misplaced pipe at runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid configuration, rejected before the first frame
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield dimensions must be positive (got {width}x{height})")]
    NonPositivePlayfield { width: f32, height: f32 },

    #[error("gap height must be positive (got {gap_height})")]
    NonPositiveGap { gap_height: f32 },

    #[error(
        "no legal spawn band: gap {gap_height} + 2 * margin {spawn_margin} \
         must be less than playfield height {height}"
    )]
    NoSpawnBand {
        gap_height: f32,
        spawn_margin: f32,
        height: f32,
    },

    #[error("bird diameter {diameter} does not fit the playfield height {height}")]
    BirdTooLarge { diameter: f32, height: f32 },

    #[error("spawn ramp divisor must be nonzero")]
    ZeroRampDivisor,

    #[error("spawn ramp {max_ramp} must be less than base interval {base_interval}")]
    RampExceedsInterval { max_ramp: u32, base_interval: u32 },

    #[error("pickup chance must be within [0, 1] (got {chance})")]
    PickupChanceOutOfRange { chance: f64 },
}

/// All tuning for one session, fixed once validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Playfield width in world units
    pub width: f32,
    /// Playfield height in world units
    pub height: f32,

    pub bird_radius: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Velocity set on flap (negative = up)
    pub flap_impulse: f32,

    pub pipe_width: f32,
    pub gap_height: f32,
    /// Minimum distance of the gap from the top and bottom edges
    pub spawn_margin: f32,

    /// Frames between pipe spawns before any ramp
    pub base_spawn_interval: u32,
    /// The interval never shrinks by more than this
    pub max_spawn_ramp: u32,
    /// One frame of ramp per this many points
    pub spawn_ramp_divisor: u32,
    /// Spawn timer value right after reset
    pub initial_spawn_delay: u32,

    pub start_speed: f32,
    pub speed_increment: f32,

    pub pickup_radius: f32,
    /// Probability a new pipe carries a pickup
    pub pickup_chance: f64,
    /// Score awarded per pickup
    pub pickup_bonus: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            gap_height: GAP_HEIGHT,
            spawn_margin: SPAWN_MARGIN,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            max_spawn_ramp: MAX_SPAWN_RAMP,
            spawn_ramp_divisor: SPAWN_RAMP_DIVISOR,
            initial_spawn_delay: INITIAL_SPAWN_DELAY,
            start_speed: START_SPEED,
            speed_increment: SPEED_INCREMENT,
            pickup_radius: PICKUP_RADIUS,
            pickup_chance: PICKUP_CHANCE,
            pickup_bonus: PICKUP_BONUS,
        }
    }
}

impl Config {
    /// Check all invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::NonPositivePlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.gap_height <= 0.0 {
            return Err(ConfigError::NonPositiveGap {
                gap_height: self.gap_height,
            });
        }
        if self.gap_height + 2.0 * self.spawn_margin >= self.height {
            return Err(ConfigError::NoSpawnBand {
                gap_height: self.gap_height,
                spawn_margin: self.spawn_margin,
                height: self.height,
            });
        }
        if self.bird_radius * 2.0 >= self.height {
            return Err(ConfigError::BirdTooLarge {
                diameter: self.bird_radius * 2.0,
                height: self.height,
            });
        }
        if self.spawn_ramp_divisor == 0 {
            return Err(ConfigError::ZeroRampDivisor);
        }
        if self.max_spawn_ramp >= self.base_spawn_interval {
            return Err(ConfigError::RampExceedsInterval {
                max_ramp: self.max_spawn_ramp,
                base_interval: self.base_spawn_interval,
            });
        }
        // NaN fails the contains check as well
        if !(0.0..=1.0).contains(&self.pickup_chance) {
            return Err(ConfigError::PickupChanceOutOfRange {
                chance: self.pickup_chance,
            });
        }
        Ok(())
    }

    /// Upper bound (exclusive) of the legal gap offset band
    #[inline]
    pub fn gap_band_end(&self) -> f32 {
        self.height - self.gap_height - self.spawn_margin
    }
}
