//! Coin Roller entry point
//!
//! Headless demo for native builds: runs the fixed-rate loop with scripted
//! input and logs what a presentation sink would receive. Browser hosts
//! drive the game through the library API instead.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use coin_roller::consts::TICK_MS;
    use coin_roller::{Dir, EmbeddedLevels, Game, GameEvent, MemoryStore};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut game = Game::new(EmbeddedLevels, MemoryStore::new());
    game.start();

    // Scripted run: roll right for two seconds, then down for two more
    game.input_mut().key_down(Dir::Right);
    let total_ticks = 4000 / TICK_MS;
    let turn_tick = total_ticks / 2;
    let mut collected = 0u32;

    for tick_no in 0..total_ticks {
        if tick_no == turn_tick {
            let input = game.input_mut();
            input.key_up(Dir::Right);
            input.key_down(Dir::Down);
        }

        game.tick();

        for event in game.drain_events() {
            match event {
                GameEvent::CoinCollected { id } => {
                    collected += 1;
                    log::info!("collected coin {}", id);
                }
                GameEvent::HitPointsChanged { hit_points } => {
                    log::info!("hit points: {}", hit_points);
                }
                GameEvent::ModalRequested(modal) => {
                    log::info!("modal requested: {:?}", modal);
                }
                _ => {}
            }
        }

        if !game.state().is_running() {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "demo finished: phase {:?}, {} coins collected, {} remaining, ball at ({:.1}, {:.1})",
        state.phase,
        collected,
        state.coins_remaining,
        state.actor.pos.x,
        state.actor.pos.y,
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Initialization runs in web::init via wasm_bindgen(start); the
    // browser drives the game through web::WebGame.
}
