//! Procedural pipe and pickup spawning
//!
//! A frame countdown drives spawning; the interval shrinks with score down to
//! a hard floor. All randomness comes from the session RNG, with a fixed draw
//! order (gap offset, attach roll, jitter) so runs replay per seed.

use glam::Vec2;
use rand::Rng;

use crate::config::Config;
use crate::consts::{OFFSCREEN_MARGIN, PICKUP_X_OFFSET, SPAWN_X_LEAD};
use crate::sim::state::{GameState, Pickup, PipePair};

/// Frames between spawns at the given score
///
/// `base - min(max_ramp, score / divisor)`, strictly decreasing (floored) as
/// score grows, never below `base - max_ramp`.
#[inline]
pub fn spawn_interval(config: &Config, score: u32) -> u32 {
    config.base_spawn_interval - config.max_spawn_ramp.min(score / config.spawn_ramp_divisor)
}

/// Advance the spawn countdown by one frame, spawning when it hits zero
pub fn run_spawner(state: &mut GameState) {
    state.spawn_timer = state.spawn_timer.saturating_sub(1);
    if state.spawn_timer == 0 {
        spawn_pipe(state);
        state.spawn_timer = spawn_interval(&state.config, state.score);
    }
}

/// Spawn one pipe just past the right edge, with a pickup ~60% of the time
pub fn spawn_pipe(state: &mut GameState) {
    let cfg = state.config;
    let gap_y = state.rng.random_range(cfg.spawn_margin..cfg.gap_band_end());
    let pipe = PipePair {
        x: cfg.width + SPAWN_X_LEAD,
        gap_y,
        passed: false,
    };
    maybe_attach_pickup(state, &pipe);
    state.pipes.push(pipe);
    log::debug!("spawned pipe at gap_y {gap_y:.1}");
}

/// Probabilistic pickup attachment: just past the pipe's trailing edge,
/// jittered around the gap's vertical center
fn maybe_attach_pickup(state: &mut GameState, pipe: &PipePair) {
    let cfg = state.config;
    if !state.rng.random_bool(cfg.pickup_chance) {
        return;
    }
    let jitter = cfg.gap_height / 8.0;
    let x = pipe.trailing_edge(&cfg) + PICKUP_X_OFFSET;
    let y = pipe.gap_y + cfg.gap_height / 2.0 + state.rng.random_range(-jitter..jitter);
    state.pickups.push(Pickup {
        pos: Vec2::new(x, y),
        radius: cfg.pickup_radius,
        collected: false,
    });
}

/// Drop pipes fully off-screen to the left, plus collected or off-screen
/// pickups. A pure filter; relative order of survivors is preserved.
pub fn purge_offscreen(state: &mut GameState) {
    let cfg = state.config;
    state
        .pipes
        .retain(|p| p.trailing_edge(&cfg) > -OFFSCREEN_MARGIN);
    state
        .pickups
        .retain(|c| !c.collected && c.pos.x + c.radius > -OFFSCREEN_MARGIN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_spawn_interval_ramp_and_floor() {
        let cfg = Config::default();
        assert_eq!(spawn_interval(&cfg, 0), 110);
        assert_eq!(spawn_interval(&cfg, 4), 110);
        assert_eq!(spawn_interval(&cfg, 5), 109);
        assert_eq!(spawn_interval(&cfg, 100), 90);
        // Hard floor: never faster than base - max_ramp
        assert_eq!(spawn_interval(&cfg, 250), 60);
        assert_eq!(spawn_interval(&cfg, 100_000), 60);
    }

    #[test]
    fn test_gap_offset_stays_in_legal_band() {
        let cfg = Config::default();
        let mut state = GameState::new(0xFA11, cfg).unwrap();
        for _ in 0..200 {
            spawn_pipe(&mut state);
        }
        for pipe in &state.pipes {
            assert!(pipe.gap_y >= cfg.spawn_margin);
            assert!(pipe.gap_y < cfg.gap_band_end());
            assert!(!pipe.passed);
            assert_eq!(pipe.x, cfg.width + SPAWN_X_LEAD);
        }
    }

    #[test]
    fn test_pickups_sit_near_gap_center() {
        let cfg = Config::default();
        let mut state = GameState::new(7, cfg).unwrap();
        for _ in 0..200 {
            spawn_pipe(&mut state);
        }
        // Probabilistic attachment, not guaranteed: roughly 60% of 200
        assert!(state.pickups.len() > 80 && state.pickups.len() < 160);

        let jitter = cfg.gap_height / 8.0;
        for pickup in &state.pickups {
            assert_eq!(
                pickup.pos.x,
                cfg.width + SPAWN_X_LEAD + cfg.pipe_width + PICKUP_X_OFFSET
            );
            // Within jitter of some legal gap center
            let min_center = cfg.spawn_margin + cfg.gap_height / 2.0;
            let max_center = cfg.gap_band_end() + cfg.gap_height / 2.0;
            assert!(pickup.pos.y > min_center - jitter);
            assert!(pickup.pos.y < max_center + jitter);
            assert!(!pickup.collected);
        }
    }

    #[test]
    fn test_spawn_sequence_replays_per_seed() {
        let cfg = Config::default();
        let mut a = GameState::new(42, cfg).unwrap();
        let mut b = GameState::new(42, cfg).unwrap();
        for _ in 0..50 {
            spawn_pipe(&mut a);
            spawn_pipe(&mut b);
        }
        assert_eq!(a.pipes, b.pipes);
        assert_eq!(a.pickups, b.pickups);
    }

    #[test]
    fn test_purge_is_a_stable_filter() {
        let cfg = Config::default();
        let mut state = GameState::new(1, cfg).unwrap();
        for (i, x) in [-100.0, 50.0, -80.0, 120.0, 300.0].iter().enumerate() {
            state.pipes.push(PipePair {
                x: *x,
                gap_y: 40.0 + i as f32,
                passed: false,
            });
        }
        purge_offscreen(&mut state);
        let xs: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![50.0, 120.0, 300.0]);
        // Survivors keep their relative order
        assert_eq!(state.pipes[0].gap_y, 41.0);
        assert_eq!(state.pipes[1].gap_y, 43.0);
    }

    #[test]
    fn test_purge_drops_collected_pickups() {
        let cfg = Config::default();
        let mut state = GameState::new(1, cfg).unwrap();
        state.pickups.push(Pickup {
            pos: Vec2::new(150.0, 200.0),
            radius: cfg.pickup_radius,
            collected: true,
        });
        state.pickups.push(Pickup {
            pos: Vec2::new(160.0, 200.0),
            radius: cfg.pickup_radius,
            collected: false,
        });
        purge_offscreen(&mut state);
        assert_eq!(state.pickups.len(), 1);
        assert!(!state.pickups[0].collected);
    }
}
