//! Browser bindings
//!
//! Thin wasm-bindgen surface over [`Game`] for the browser host: DOM event
//! handlers push input in, the animation loop calls `tick` at the fixed
//! rate and drains presentation events out as JSON.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::input::Dir;
use crate::level::EmbeddedLevels;
use crate::progress::LocalStorageStore;

/// One-time module init when the wasm bundle loads
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// The game as seen from JavaScript
#[wasm_bindgen]
pub struct WebGame {
    inner: Game<EmbeddedLevels, LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Build the game, restoring persisted progress from LocalStorage
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Game::new(EmbeddedLevels, LocalStorageStore::new()),
        }
    }

    /// Run one fixed-rate tick
    pub fn tick(&mut self) {
        self.inner.tick();
    }

    /// Drain pending presentation events as a JSON array
    pub fn drain_events(&mut self) -> String {
        serde_json::to_string(&self.inner.drain_events()).unwrap_or_else(|err| {
            log::warn!("failed to serialize events: {}", err);
            "[]".to_string()
        })
    }

    // --- Input callbacks ---

    /// Keydown handler; accepts WASD and arrow key names
    pub fn key_down(&mut self, key: &str) {
        if let Some(dir) = parse_key(key) {
            self.inner.input_mut().key_down(dir);
        }
    }

    /// Keyup handler
    pub fn key_up(&mut self, key: &str) {
        if let Some(dir) = parse_key(key) {
            self.inner.input_mut().key_up(dir);
        }
    }

    /// Device orientation handler (front-back, left-right angles)
    pub fn set_tilt(&mut self, beta: f32, gamma: f32) {
        self.inner.input_mut().set_tilt(beta, gamma);
    }

    /// Orientation sensor lost or unsupported
    pub fn clear_tilt(&mut self) {
        self.inner.input_mut().clear_tilt();
    }

    // --- Lifecycle actions ---

    pub fn start(&mut self) {
        self.inner.start();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn continue_next_level(&mut self) {
        self.inner.continue_next_level();
    }

    pub fn reset_to_first_level(&mut self) {
        self.inner.reset_to_first_level();
    }

    pub fn show_rules(&mut self) {
        self.inner.show_rules();
    }

    pub fn close_rules(&mut self) {
        self.inner.close_rules();
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_key(key: &str) -> Option<Dir> {
    match key {
        "w" | "W" | "ArrowUp" => Some(Dir::Up),
        "s" | "S" | "ArrowDown" => Some(Dir::Down),
        "a" | "A" | "ArrowLeft" => Some(Dir::Left),
        "d" | "D" | "ArrowRight" => Some(Dir::Right),
        _ => None,
    }
}
