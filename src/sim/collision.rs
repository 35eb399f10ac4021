//! Axis-aligned collision detection
//!
//! The only moving body is the actor; everything it can hit is a static
//! axis-aligned rectangle. Overlap uses strict inequalities, so rectangles
//! that merely share an edge do not collide.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// An axis-aligned rectangle (top-left origin, like the arena)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict AABB overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// IDs of active obstacles and coins the actor overlaps this tick
///
/// Both lists come back in ascending-id order (the active sets are kept
/// sorted), which fixes the iteration order the response code uses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlaps {
    pub obstacles: Vec<u32>,
    pub coins: Vec<u32>,
}

/// Detect every overlap between the actor and the active sets
pub fn find_overlaps(state: &GameState) -> Overlaps {
    let ball = state.actor.bounds();
    Overlaps {
        obstacles: state
            .obstacles
            .iter()
            .filter(|o| ball.intersects(&o.bounds))
            .map(|o| o.id)
            .collect(),
        coins: state
            .coins
            .iter()
            .filter(|c| ball.intersects(&c.bounds))
            .map(|c| c.id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GameState;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_disjoint_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_find_overlaps_classifies_and_orders() {
        let mut state = GameState::new();
        state.actor.pos = glam::Vec2::new(100.0, 100.0);

        // One obstacle and one coin under the ball, one of each far away
        state.spawn_obstacle(Rect::new(110.0, 110.0, 50.0, 50.0));
        state.spawn_coin(Rect::new(95.0, 95.0, 20.0, 20.0));
        state.spawn_obstacle(Rect::new(500.0, 500.0, 50.0, 50.0));
        state.spawn_coin(Rect::new(600.0, 600.0, 20.0, 20.0));

        let overlaps = find_overlaps(&state);
        assert_eq!(overlaps.obstacles, vec![state.obstacles[0].id]);
        assert_eq!(overlaps.coins, vec![state.coins[0].id]);
    }

    #[test]
    fn test_find_overlaps_ascending_id() {
        let mut state = GameState::new();
        state.actor.pos = glam::Vec2::new(100.0, 100.0);

        // Two overlapping obstacles; ids must come back ascending
        state.spawn_obstacle(Rect::new(90.0, 90.0, 60.0, 60.0));
        state.spawn_obstacle(Rect::new(95.0, 95.0, 60.0, 60.0));

        let overlaps = find_overlaps(&state);
        assert_eq!(overlaps.obstacles.len(), 2);
        assert!(overlaps.obstacles[0] < overlaps.obstacles[1]);
    }
}
