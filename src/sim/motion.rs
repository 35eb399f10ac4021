//! Actor motion model
//!
//! Simplified inertia, not real physics: held keys add a fixed acceleration
//! per tick, friction decays velocity multiplicatively, and device tilt is a
//! direct position nudge rather than a force.

use glam::Vec2;

use super::state::Actor;
use crate::consts::*;
use crate::input::InputSnapshot;

/// Advance the actor by one tick of input
///
/// Order matters and matches the original game: tilt nudge first, then
/// friction, then keyboard acceleration with the per-axis speed clamp, then
/// the velocity displacement.
pub fn integrate(actor: &mut Actor, input: &InputSnapshot) {
    if let Some(nudge) = input.nudge {
        actor.pos += TILT_SENSITIVITY * nudge;
    }

    actor.vel *= 1.0 - DECELERATION;
    actor.vel = (actor.vel + input.dir * ACCELERATION).clamp(
        Vec2::splat(-MAX_SPEED),
        Vec2::splat(MAX_SPEED),
    );

    actor.pos += actor.vel;
}

/// Clamp the actor into the arena and kill velocity on pinned axes
///
/// Runs after collision resolution so a bounce can't push the actor out of
/// bounds. An axis that ends the tick pressed against a wall loses its
/// velocity component, so the ball doesn't grind against the boundary.
pub fn clamp_to_arena(actor: &mut Actor) {
    let max_x = ARENA_WIDTH - actor.size;
    let max_y = ARENA_HEIGHT - actor.size;

    actor.pos.x = actor.pos.x.clamp(0.0, max_x);
    actor.pos.y = actor.pos.y.clamp(0.0, max_y);

    if actor.pos.x <= 0.0 || actor.pos.x >= max_x {
        actor.vel.x = 0.0;
    }
    if actor.pos.y <= 0.0 || actor.pos.y >= max_y {
        actor.vel.y = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Actor;

    fn actor_at(x: f32, y: f32) -> Actor {
        let mut actor = Actor::new();
        actor.pos = Vec2::new(x, y);
        actor
    }

    #[test]
    fn test_friction_decay() {
        // v=(10,0) with no input decays to 9.9 after one tick
        let mut actor = actor_at(100.0, 100.0);
        actor.vel = Vec2::new(10.0, 0.0);

        integrate(&mut actor, &InputSnapshot::default());
        assert!((actor.vel.x - 9.9).abs() < 1e-4);
        assert_eq!(actor.vel.y, 0.0);
    }

    #[test]
    fn test_acceleration_from_input() {
        let mut actor = actor_at(100.0, 100.0);
        let input = InputSnapshot {
            dir: Vec2::new(1.0, -1.0),
            nudge: None,
        };

        integrate(&mut actor, &input);
        assert!((actor.vel.x - ACCELERATION).abs() < 1e-6);
        assert!((actor.vel.y + ACCELERATION).abs() < 1e-6);
        assert_eq!(actor.pos, Vec2::new(100.0, 100.0) + actor.vel);
    }

    #[test]
    fn test_speed_clamp() {
        let mut actor = actor_at(100.0, 100.0);
        actor.vel = Vec2::new(MAX_SPEED, -MAX_SPEED);
        let input = InputSnapshot {
            dir: Vec2::new(1.0, -1.0),
            nudge: None,
        };

        integrate(&mut actor, &input);
        assert!(actor.vel.x <= MAX_SPEED);
        assert!(actor.vel.y >= -MAX_SPEED);
    }

    #[test]
    fn test_tilt_is_position_nudge_not_force() {
        let mut actor = actor_at(100.0, 100.0);
        let input = InputSnapshot {
            dir: Vec2::ZERO,
            nudge: Some(Vec2::new(10.0, -20.0)),
        };

        integrate(&mut actor, &input);
        // Position moved by sensitivity * tilt, velocity untouched
        assert_eq!(
            actor.pos,
            Vec2::new(100.0 + 1.5, 100.0 - 3.0)
        );
        assert_eq!(actor.vel, Vec2::ZERO);
    }

    #[test]
    fn test_clamp_pins_and_zeroes_velocity() {
        let mut actor = actor_at(-50.0, ARENA_HEIGHT + 50.0);
        actor.vel = Vec2::new(-5.0, 8.0);

        clamp_to_arena(&mut actor);
        assert_eq!(actor.pos.x, 0.0);
        assert_eq!(actor.pos.y, ARENA_HEIGHT - actor.size);
        assert_eq!(actor.vel, Vec2::ZERO);
    }

    #[test]
    fn test_clamp_leaves_interior_alone() {
        let mut actor = actor_at(200.0, 300.0);
        actor.vel = Vec2::new(3.0, -2.0);

        clamp_to_arena(&mut actor);
        assert_eq!(actor.pos, Vec2::new(200.0, 300.0));
        assert_eq!(actor.vel, Vec2::new(3.0, -2.0));
    }
}
