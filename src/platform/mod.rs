//! Host collaborator interfaces
//!
//! The simulation produces state and events; hosts render, play audio and
//! schedule frames. These traits are the whole contract - the core never
//! reaches into presentation objects.

use crate::sim::GameState;

/// Draws one visual frame from a state snapshot
///
/// Called once per frame after the step; the core assumes nothing else about
/// renderer timing.
pub trait Renderer {
    fn draw(&mut self, state: &GameState);
}

/// Notified on flap events only; the core does not know whether sound plays
pub trait AudioSink {
    fn flap(&mut self);
}

/// Headless renderer for tests and benches
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _state: &GameState) {}
}

/// Silent audio sink
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn flap(&mut self) {}
}
