//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{Overlaps, Rect, find_overlaps};
pub use motion::{clamp_to_arena, integrate};
pub use state::{Actor, Coin, GameEvent, GamePhase, GameState, Modal, Obstacle};
pub use tick::tick;
