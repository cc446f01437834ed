//! Game state and core simulation types
//!
//! The [`GameState`] aggregate exclusively owns the active pipe and pickup
//! collections; no component holds independent references into them.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{Config, ConfigError};
use crate::sim::collision::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first flap; input armed, simulation frozen
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; only flap/reset are accepted, both restart via reset
    GameOver,
}

/// The player's bird
///
/// Horizontal position is fixed for the whole session; only y and the
/// vertical velocity change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    pub vel_y: f32,
    pub radius: f32,
}

impl Bird {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.width / 3.0, config.height / 2.0),
            vel_y: 0.0,
            radius: config.bird_radius,
        }
    }

    /// Leading edge used for the scoring threshold
    #[inline]
    pub fn leading_edge(&self) -> f32 {
        self.pos.x - self.radius
    }

    /// One frame of gravity plus the soft ceiling clamp
    pub fn integrate(&mut self, gravity: f32) {
        self.vel_y += gravity;
        self.pos.y += self.vel_y;
        if self.pos.y - self.radius < 0.0 {
            self.pos.y = self.radius;
            self.vel_y = 0.0;
        }
    }
}

/// A pipe pair: two rects with a vertical gap between them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipePair {
    pub x: f32,
    /// Top of the gap (the top rect spans y in [0, gap_y])
    pub gap_y: f32,
    /// Flips true exactly once, when the score is awarded
    pub passed: bool,
}

impl PipePair {
    #[inline]
    pub fn trailing_edge(&self, config: &Config) -> f32 {
        self.x + config.pipe_width
    }

    pub fn top_rect(&self, config: &Config) -> Rect {
        Rect::new(self.x, 0.0, config.pipe_width, self.gap_y)
    }

    pub fn bottom_rect(&self, config: &Config) -> Rect {
        let gap_end = self.gap_y + config.gap_height;
        Rect::new(self.x, gap_end, config.pipe_width, config.height - gap_end)
    }
}

/// A bonus pickup floating in or near a gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub pos: Vec2,
    pub radius: f32,
    /// Inert once true; purged on the next cleanup pass
    pub collected: bool,
}

/// Observable events produced by the simulation, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pipe's trailing edge cleared the bird's leading edge
    PipePassed { score: u32 },
    /// A pickup was touched; `total` is the session pickup count
    PickupCollected { total: u32, score: u32 },
    /// Terminal transition; final score for the run
    GameOver { score: u32 },
    /// The run beat the persisted record (the only write path to storage)
    NewRecord { score: u32 },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; advances only on spawns, so spawn sequences replay per seed
    pub rng: Pcg32,
    pub config: Config,
    pub phase: GamePhase,
    /// Frames simulated since the last reset
    pub frame: u64,
    pub bird: Bird,
    pub pipes: Vec<PipePair>,
    pub pickups: Vec<Pickup>,
    /// Monotonic within a session, zeroed only by reset
    pub score: u32,
    pub pickups_collected: u32,
    /// Shared scroll speed; never decreases while Playing
    pub speed: f32,
    /// Frames until the next pipe spawn
    pub spawn_timer: u32,
    /// Best score seen across sessions (loaded from the record store)
    pub best: u32,
    /// Pending events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh Idle session; rejects invalid configs up front
    pub fn new(seed: u64, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            phase: GamePhase::Idle,
            frame: 0,
            bird: Bird::new(&config),
            pipes: Vec::new(),
            pickups: Vec::new(),
            score: 0,
            pickups_collected: 0,
            speed: config.start_speed,
            spawn_timer: config.initial_spawn_delay,
            best: 0,
            events: Vec::new(),
        })
    }

    /// Apply a flap intent
    ///
    /// Idle: starts the run and applies the impulse. Playing: sets the
    /// vertical velocity to the impulse, overriding any fall. GameOver:
    /// restarts via [`reset`](Self::reset). Returns whether an impulse was
    /// applied, so the host can trigger the flap sound.
    pub fn flap(&mut self) -> bool {
        match self.phase {
            GamePhase::Idle => {
                self.phase = GamePhase::Playing;
                self.bird.vel_y = self.config.flap_impulse;
                true
            }
            GamePhase::Playing => {
                self.bird.vel_y = self.config.flap_impulse;
                true
            }
            GamePhase::GameOver => {
                self.reset();
                false
            }
        }
    }

    /// Restore the initial Idle session
    ///
    /// The best score and the RNG stream carry over; everything else goes
    /// back to its starting constant.
    pub fn reset(&mut self) {
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.pickups.clear();
        self.score = 0;
        self.pickups_collected = 0;
        self.speed = self.config.start_speed;
        self.spawn_timer = self.config.initial_spawn_delay;
        self.frame = 0;
        self.phase = GamePhase::Idle;
    }

    /// Terminal transition; updates the best score and emits events
    pub(crate) fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver { score: self.score });
        if self.score > self.best {
            self.best = self.score;
            self.events.push(GameEvent::NewRecord { score: self.score });
        }
    }

    /// Drain pending events (driver side)
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
