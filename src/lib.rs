//! Coin Roller - a tilt-and-roll coin collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, game state)
//! - `input`: Keyboard/tilt input state and per-tick snapshots
//! - `level`: Level data model, loading, and stale-request sequencing
//! - `progress`: Durable level-progress persistence
//! - `game`: Lifecycle orchestration and the presentation event stream
//! - `web`: wasm-bindgen surface for the browser host (wasm32 only)

pub mod game;
pub mod input;
pub mod level;
pub mod progress;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::{Game, GameEvent, Modal};
pub use input::{Dir, InputSnapshot, InputState};
pub use level::{EmbeddedLevels, LevelError, LevelLoader, LevelSource};
pub use progress::{MemoryStore, ProgressStore};
pub use sim::{Actor, GamePhase, GameState, Rect};

/// Game configuration constants
pub mod consts {
    /// Fixed tick interval in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;

    /// Arena dimensions (logical pixels; level data is percentages of these)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Actor bounding box (ball diameter)
    pub const BALL_SIZE: f32 = 30.0;

    /// Speed gained per tick per held direction key
    pub const ACCELERATION: f32 = 0.2;
    /// Per-axis speed cap
    pub const MAX_SPEED: f32 = 20.0;
    /// Friction: velocity is scaled by (1 - DECELERATION) every tick
    pub const DECELERATION: f32 = 0.01;
    /// Direct position offset per degree of device tilt
    pub const TILT_SENSITIVITY: f32 = 0.15;

    /// Hit points at the start of every attempt
    pub const START_HIT_POINTS: u32 = 5;
    /// Number of levels in the game
    pub const LEVEL_COUNT: u32 = 5;
}
