//! Game state and core simulation types
//!
//! All gameplay state lives here, owned by a single [`GameState`] that the
//! tick function and lifecycle actions mutate. Nothing in this module talks
//! to the platform; the presentation layer only sees [`GameEvent`]s.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Not started, or a modal is open
    Idle,
    /// Active gameplay
    Running,
    /// Hit points ran out
    Dead,
    /// All coins in the current level collected
    LevelWon,
    /// Final level cleared
    AllLevelsWon,
}

/// Modal dialogs the presentation layer can be asked to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Modal {
    Death,
    LevelWon,
    AllLevelsWon,
    Rules,
}

/// Events for the presentation sink (pure output, never read back;
/// serialized as JSON across the wasm boundary)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    ActorMoved { pos: Vec2 },
    HitPointsChanged { hit_points: u32 },
    LevelChanged { index: u32 },
    ObstacleSpawned { id: u32, bounds: Rect },
    ObstaclesCleared,
    CoinSpawned { id: u32, bounds: Rect },
    CoinCollected { id: u32 },
    ModalRequested(Modal),
}

/// The player-controlled ball
///
/// Position is the top-left corner of the bounding box, matching the clamp
/// range `[0, arena - size]` on both axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: BALL_SIZE,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Return to a spawn point at rest
    pub fn reset_to(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// A static wall segment (immutable once the level loads)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub bounds: Rect,
}

/// A collectible coin; collected coins leave the active set for good
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub bounds: Rect,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    /// Remaining lives, always in [0, START_HIT_POINTS]
    pub hit_points: u32,
    /// Current level (0-based)
    pub level_index: u32,
    /// Coins left to collect in this attempt
    pub coins_remaining: u32,
    pub actor: Actor,
    /// Active obstacles, sorted by id for deterministic collision order
    pub obstacles: Vec<Obstacle>,
    /// Active coins, sorted by id; shrinks as coins are collected
    pub coins: Vec<Coin>,
    /// Where the actor respawns (pixel coordinates)
    pub spawn: Vec2,
    /// Pending events for the presentation sink
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next obstacle/coin ID
    next_id: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            hit_points: START_HIT_POINTS,
            level_index: 0,
            coins_remaining: 0,
            actor: Actor::new(),
            obstacles: Vec::new(),
            coins: Vec::new(),
            spawn: Vec2::ZERO,
            events: Vec::new(),
            next_id: 1,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Add an obstacle to the active set
    pub fn spawn_obstacle(&mut self, bounds: Rect) {
        let id = self.next_entity_id();
        self.obstacles.push(Obstacle { id, bounds });
        self.push_event(GameEvent::ObstacleSpawned { id, bounds });
    }

    /// Add a coin to the active set
    pub fn spawn_coin(&mut self, bounds: Rect) {
        let id = self.next_entity_id();
        self.coins.push(Coin { id, bounds });
        self.coins_remaining += 1;
        self.push_event(GameEvent::CoinSpawned { id, bounds });
    }

    /// Remove a coin from the active set permanently
    pub fn collect_coin(&mut self, id: u32) {
        self.coins.retain(|c| c.id != id);
        self.coins_remaining = self.coins_remaining.saturating_sub(1);
        self.push_event(GameEvent::CoinCollected { id });
    }

    /// Lose one hit point, clamped at zero
    pub fn lose_hit_point(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
        self.push_event(GameEvent::HitPointsChanged {
            hit_points: self.hit_points,
        });
    }

    /// Drop the active collidable sets (level unload)
    pub fn clear_level(&mut self) {
        self.obstacles.clear();
        self.coins.clear();
        self.coins_remaining = 0;
        self.push_event(GameEvent::ObstaclesCleared);
    }

    /// Keep collision iteration order stable
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.coins.sort_by_key(|c| c.id);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
