//! Host-facing driver
//!
//! Owns the session state and the record store, applies input intents, and
//! drains simulation events after each step. The host owns the frame loop:
//! keep scheduling while [`Game::running`] is true, stop at GameOver, and
//! call [`Game::flap`] or [`Game::reset`] to restart. The core never
//! schedules its own next frame.

use crate::config::{Config, ConfigError};
use crate::persistence::RecordStore;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// One game session plus its persistence collaborator
pub struct Game<S: RecordStore> {
    pub state: GameState,
    store: S,
}

impl<S: RecordStore> Game<S> {
    /// Validate the config, load the record, start Idle
    pub fn new(seed: u64, config: Config, store: S) -> Result<Self, ConfigError> {
        let mut state = GameState::new(seed, config)?;
        state.best = store.load_record();
        log::info!(
            "New session, seed {seed}, best {best}",
            best = state.best
        );
        Ok(Self { state, store })
    }

    /// Best score as currently known to the session
    pub fn best(&self) -> u32 {
        self.state.best
    }

    /// Whether the host should keep scheduling frames
    pub fn running(&self) -> bool {
        self.state.phase != GamePhase::GameOver
    }

    /// Apply a flap intent immediately (between frames is fine)
    ///
    /// Returns true when an impulse was applied, so the host can notify its
    /// audio sink.
    pub fn flap(&mut self) -> bool {
        self.state.flap()
    }

    /// Restart into a fresh Idle session
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Run one frame and hand back everything observable that happened
    ///
    /// A new record is persisted here, on the transition into GameOver - the
    /// only write path to the store.
    pub fn step(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(&mut self.state, input);
        let events = self.state.take_events();
        for event in &events {
            match event {
                GameEvent::NewRecord { score } => {
                    log::info!("New record: {score}");
                    self.store.save_record(*score);
                }
                GameEvent::GameOver { score } => {
                    log::info!(
                        "Game over at frame {frame}, score {score}",
                        frame = self.state.frame
                    );
                }
                _ => {}
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryRecord;
    use crate::sim::GamePhase;

    fn game_with_record(record: u32) -> Game<MemoryRecord> {
        Game::new(0xF1A9, Config::default(), MemoryRecord::new(record)).unwrap()
    }

    /// Drive a run into the ground with no flaps
    fn crash(game: &mut Game<MemoryRecord>) -> Vec<GameEvent> {
        game.state.phase = GamePhase::Playing;
        let mut all = Vec::new();
        while game.running() {
            all.extend(game.step(&TickInput::default()));
        }
        all
    }

    #[test]
    fn test_loads_record_at_init() {
        let game = game_with_record(23);
        assert_eq!(game.best(), 23);
    }

    #[test]
    fn test_record_saved_only_on_strict_improvement() {
        let mut game = game_with_record(0);
        game.state.score = 3; // pretend the run earned some points
        let events = crash(&mut game);
        assert!(events.contains(&GameEvent::NewRecord { score: 3 }));
        assert_eq!(game.store.load_record(), 3);
        assert!(!game.running());

        // A worse follow-up run never decreases the record
        game.reset();
        let events = crash(&mut game);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewRecord { .. })));
        assert_eq!(game.store.load_record(), 3);

        // An equal run does not rewrite it either
        game.reset();
        game.state.score = 3;
        let events = crash(&mut game);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewRecord { .. })));
        assert_eq!(game.store.load_record(), 3);
    }

    #[test]
    fn test_flap_restarts_after_game_over() {
        let mut game = game_with_record(0);
        crash(&mut game);
        assert!(!game.running());
        assert!(!game.flap(), "restart flap applies no impulse");
        assert!(game.running());
        assert_eq!(game.state.phase, GamePhase::Idle);
    }

    #[test]
    fn test_step_reports_flap_events_through_state() {
        let mut game = game_with_record(0);
        assert!(game.flap(), "first flap starts the run");
        assert_eq!(game.state.phase, GamePhase::Playing);
        assert_eq!(game.state.bird.vel_y, game.state.config.flap_impulse);
    }
}
