//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One atomic state transition per frame, fixed component order
//! - Seeded RNG only
//! - Stable iteration/purge order
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_circle_overlap, circle_rect_overlap};
pub use spawn::{run_spawner, spawn_interval};
pub use state::{Bird, GameEvent, GamePhase, GameState, Pickup, PipePair};
pub use tick::{TickInput, tick};
