//! Per-frame simulation step
//!
//! One call to [`tick`] is one atomic, indivisible state transition. While
//! Playing the components run in a fixed order: physics, spawner, collision,
//! scoring. Outside Playing the frame is a no-op apart from input handling,
//! so a GameOver state stays frozen until reset.

use crate::sim::collision::{circle_circle_overlap, circle_rect_overlap};
use crate::sim::spawn::{purge_offscreen, run_spawner};
use crate::sim::state::{GameEvent, GamePhase, GameState};

/// Input intents gathered for a single frame
///
/// Intents delivered between frames may also be applied directly through
/// [`GameState::flap`]/[`GameState::reset`]; this struct exists for drivers
/// that batch input per animation tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap intent (starts the run from Idle, restarts from GameOver)
    pub flap: bool,
    /// Explicit restart; only honored from GameOver
    pub reset: bool,
}

/// Advance the session by one frame
///
/// Events on the state describe this frame only: read them via
/// [`GameState::take_events`] (or [`crate::Game::step`], which drains them)
/// before the next call. Anything left undrained from an earlier frame is
/// dropped here, so the queue never grows unbounded.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.reset && state.phase == GamePhase::GameOver {
        state.reset();
    }
    if input.flap {
        state.flap();
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.frame += 1;

    // Physics: bird integration (with ceiling clamp), then the shared scroll
    state.bird.integrate(state.config.gravity);
    let speed = state.speed;
    for pipe in &mut state.pipes {
        pipe.x -= speed;
    }
    for pickup in &mut state.pickups {
        pickup.pos.x -= speed;
    }

    // Spawner: countdown, spawn, purge
    run_spawner(state);
    purge_offscreen(state);

    // Collision: floor and pipes are terminal, pickups are not
    if state.bird.pos.y + state.bird.radius > state.config.height {
        state.enter_game_over();
        return;
    }
    if hit_any_pipe(state) {
        state.enter_game_over();
        return;
    }
    collect_pickups(state);

    // Scoring: award passes, ramp the scroll speed
    score_passed_pipes(state);
}

/// Bird-vs-pipe scan; short-circuits on the first hit since any hit ends
/// the run
fn hit_any_pipe(state: &GameState) -> bool {
    let bird = &state.bird;
    state.pipes.iter().any(|pipe| {
        circle_rect_overlap(bird.pos, bird.radius, &pipe.top_rect(&state.config))
            || circle_rect_overlap(bird.pos, bird.radius, &pipe.bottom_rect(&state.config))
    })
}

/// Resolve every pickup touched this frame (no short-circuit)
fn collect_pickups(state: &mut GameState) {
    let bird = state.bird;
    let bonus = state.config.pickup_bonus;
    let mut events = Vec::new();
    for pickup in &mut state.pickups {
        if pickup.collected {
            continue;
        }
        if circle_circle_overlap(bird.pos, bird.radius, pickup.pos, pickup.radius) {
            pickup.collected = true;
            state.pickups_collected += 1;
            state.score += bonus;
            events.push(GameEvent::PickupCollected {
                total: state.pickups_collected,
                score: state.score,
            });
        }
    }
    state.events.extend(events);
}

/// Flip `passed` exactly once per pipe, when its trailing edge moves strictly
/// left of the bird's leading edge
fn score_passed_pipes(state: &mut GameState) {
    let threshold = state.bird.leading_edge();
    let cfg = state.config;
    let mut events = Vec::new();
    for pipe in &mut state.pipes {
        if !pipe.passed && pipe.trailing_edge(&cfg) < threshold {
            pipe.passed = true;
            state.score += 1;
            state.speed += cfg.speed_increment;
            events.push(GameEvent::PipePassed { score: state.score });
        }
    }
    state.events.extend(events);
}
