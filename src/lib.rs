//! Fallpy - a one-button flap-and-glide arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, scoring)
//! - `game`: Host-facing driver that applies inputs and persists records
//! - `platform`: Renderer/audio collaborator interfaces
//! - `persistence`: Best-score record storage (LocalStorage on web)

pub mod config;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod sim;

pub use config::{Config, ConfigError};
pub use game::Game;

/// Game tuning constants (defaults; all overridable through [`Config`])
pub mod consts {
    /// Playfield dimensions in world units
    pub const PLAYFIELD_WIDTH: f32 = 320.0;
    pub const PLAYFIELD_HEIGHT: f32 = 480.0;

    /// Bird defaults - x stays fixed at one third of the playfield width
    pub const BIRD_RADIUS: f32 = 12.0;
    /// Downward acceleration per frame
    pub const GRAVITY: f32 = 0.45;
    /// Vertical velocity set (not added) on each flap
    pub const FLAP_IMPULSE: f32 = -8.5;

    /// Pipe defaults
    pub const PIPE_WIDTH: f32 = 52.0;
    pub const GAP_HEIGHT: f32 = 120.0;
    /// Gap offset stays at least this far from the top and bottom edges
    pub const SPAWN_MARGIN: f32 = 40.0;
    /// Pipes spawn this far past the right edge
    pub const SPAWN_X_LEAD: f32 = 20.0;

    /// Spawn timer (frames between pipes, shrinking with score)
    pub const BASE_SPAWN_INTERVAL: u32 = 110;
    pub const MAX_SPAWN_RAMP: u32 = 50;
    pub const SPAWN_RAMP_DIVISOR: u32 = 5;
    /// Timer value after reset, so the first pipe is never instant
    pub const INITIAL_SPAWN_DELAY: u32 = 40;

    /// Scroll speed (shared by pipes and pickups)
    pub const START_SPEED: f32 = 2.4;
    /// Added to the scroll speed for every pipe passed
    pub const SPEED_INCREMENT: f32 = 0.02;

    /// Pickup defaults
    pub const PICKUP_RADIUS: f32 = 9.0;
    /// Chance that a freshly spawned pipe carries a pickup
    pub const PICKUP_CHANCE: f64 = 0.6;
    /// Pickup sits this far past the pipe's trailing edge
    pub const PICKUP_X_OFFSET: f32 = 30.0;
    pub const PICKUP_BONUS: u32 = 2;

    /// Entities are purged once fully this far past the left edge
    pub const OFFSCREEN_MARGIN: f32 = 10.0;
}
