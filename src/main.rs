//! Fallpy entry point
//!
//! The browser front end drives the library through `Game`; the native
//! binary runs a headless autoplay demo, which doubles as a smoke test for
//! the simulation core.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use fallpy::persistence::MemoryRecord;
    use fallpy::sim::{GamePhase, TickInput};
    use fallpy::{Config, Game};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF1A9);

    let mut game = match Game::new(seed, Config::default(), MemoryRecord::default()) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Invalid config: {err}");
            std::process::exit(1);
        }
    };

    log::info!("Fallpy headless demo, seed {seed}");
    game.flap(); // Idle -> Playing

    // Simple pilot: flap whenever the bird drops below its target line.
    // Aim for the nearest unpassed gap center, or mid-screen with no pipes.
    let max_frames = 20_000;
    while game.running() && game.state.frame < max_frames {
        let state = &game.state;
        let target = state
            .pipes
            .iter()
            .find(|p| !p.passed && p.trailing_edge(&state.config) > state.bird.leading_edge())
            .map(|p| p.gap_y + state.config.gap_height / 2.0)
            .unwrap_or(state.config.height / 2.0);

        let input = TickInput {
            flap: state.bird.pos.y > target,
            ..Default::default()
        };
        for event in game.step(&input) {
            log::debug!("{event:?}");
        }
    }

    let state = &game.state;
    if state.phase == GamePhase::GameOver {
        println!(
            "Crashed at frame {}: score {}, pickups {}, best {}",
            state.frame, state.score, state.pickups_collected, state.best
        );
    } else {
        println!(
            "Survived {} frames: score {}, pickups {}, best {}",
            state.frame, state.score, state.pickups_collected, state.best
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build is driven through the library crate
}
