//! Fixed-rate game tick
//!
//! One tick = read input snapshot, integrate motion, resolve collisions,
//! clamp to the arena, emit events. Anything outside the Running phase is a
//! strict no-op for position and velocity.

use super::collision::find_overlaps;
use super::motion;
use super::state::{GameEvent, GamePhase, GameState, Modal};
use crate::consts::*;
use crate::input::InputSnapshot;

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &InputSnapshot) {
    if !state.is_running() {
        return;
    }

    motion::integrate(&mut state.actor, input);
    resolve_collisions(state);
    motion::clamp_to_arena(&mut state.actor);

    state.push_event(GameEvent::ActorMoved {
        pos: state.actor.pos,
    });
}

/// Apply collision responses for everything the actor overlaps this tick
///
/// Classification decides the effect: obstacles damage and bounce, coins
/// only collect. Hits are processed in ascending-id order and each obstacle
/// hit applies its full response independently, so simultaneous hits stack.
fn resolve_collisions(state: &mut GameState) {
    let overlaps = find_overlaps(state);

    for _id in &overlaps.obstacles {
        let actor = &mut state.actor;
        // Back out past the point of contact, then reflect with extra damping
        actor.pos -= 2.0 * actor.vel;
        actor.vel = -actor.vel;
        actor.vel *= 1.0 - DECELERATION;
        state.lose_hit_point();
        log::debug!("obstacle hit, {} hp left", state.hit_points);
    }

    let collected = !overlaps.coins.is_empty();
    for id in overlaps.coins {
        state.collect_coin(id);
        log::debug!("coin {} collected, {} left", id, state.coins_remaining);
    }

    // Terminal transitions; death wins if both land on the same tick
    if state.hit_points == 0 {
        state.phase = GamePhase::Dead;
        state.push_event(GameEvent::ModalRequested(Modal::Death));
        log::info!("out of hit points, level {} failed", state.level_index);
    } else if collected && state.coins_remaining == 0 {
        state.phase = GamePhase::LevelWon;
        state.push_event(GameEvent::ModalRequested(Modal::LevelWon));
        log::info!("level {} cleared", state.level_index);
    }
}
