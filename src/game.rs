//! Game lifecycle orchestration
//!
//! [`Game`] owns the whole mutable world: simulation state, input state,
//! the level loader, and the progress store. Every mutation funnels through
//! it, which preserves the single-threaded serialization guarantee even if
//! the host wraps it in its own event loop.

use crate::consts::*;
use crate::input::InputState;
use crate::level::{
    LevelData, LevelDoc, LevelError, LevelLoader, LevelSource, LoadRequest, resolve_level,
};
use crate::progress::ProgressStore;
use crate::sim::state::{GamePhase, GameState};
use crate::sim::tick::tick;

pub use crate::sim::state::{GameEvent, Modal};

/// The running game: state machine, tick driver, and lifecycle actions
pub struct Game<L: LevelSource, S: ProgressStore> {
    state: GameState,
    input: InputState,
    loader: LevelLoader,
    source: L,
    store: S,
    /// Whether the current Idle came from [`Self::show_rules`]
    rules_open: bool,
}

impl<L: LevelSource, S: ProgressStore> Game<L, S> {
    /// Build a game, restoring persisted progress and loading that level
    pub fn new(source: L, store: S) -> Self {
        let mut game = Self {
            state: GameState::new(),
            input: InputState::new(),
            loader: LevelLoader::new(),
            source,
            store,
            rules_open: false,
        };

        let index = game.store.load_level_index();
        log::info!("starting at level {}", index);
        game.state.level_index = index;
        game.load_level(index);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Input callbacks mutate this between ticks; the tick itself only ever
    /// sees a snapshot
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Run one fixed-rate tick
    pub fn tick(&mut self) {
        let snapshot = self.input.snapshot();
        tick(&mut self.state, &snapshot);
    }

    /// Hand pending events to the presentation sink
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    // --- Level loading ---

    /// Register a level-load request; the response goes to [`Self::apply_load`]
    pub fn begin_level_load(&mut self, index: u32) -> LoadRequest {
        self.loader.begin(index)
    }

    /// Apply a completed load if it is still the newest request
    pub fn apply_load(&mut self, request: LoadRequest, result: Result<LevelDoc, LevelError>) {
        if !self.loader.is_current(&request) {
            log::warn!("dropping stale load result for level {}", request.index);
            return;
        }

        match result {
            Ok(doc) => self.install_level(resolve_level(&doc, request.index)),
            Err(err) => {
                // Abandon the load, keep whatever was active before
                log::warn!("level {} load failed: {}", request.index, err);
            }
        }
    }

    /// Request and apply a level in one step (synchronous sources)
    fn load_level(&mut self, index: u32) {
        let request = self.begin_level_load(index);
        let result = self.source.fetch();
        self.apply_load(request, result);
    }

    fn install_level(&mut self, data: LevelData) {
        let state = &mut self.state;
        state.clear_level();
        state.level_index = data.index;

        for bounds in data.obstacles {
            state.spawn_obstacle(bounds);
        }
        for bounds in data.coins {
            state.spawn_coin(bounds);
        }
        if let Some(spawn) = data.spawn {
            state.spawn = spawn;
        }

        state.actor.reset_to(state.spawn);
        state.normalize_order();
        state.push_event(GameEvent::LevelChanged { index: data.index });
        state.push_event(GameEvent::HitPointsChanged {
            hit_points: state.hit_points,
        });
    }

    // --- Lifecycle actions ---

    /// Begin play from Idle
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.state.phase = GamePhase::Running;
            log::info!("level {} started", self.state.level_index);
        }
    }

    /// Restart the current level attempt (Dead modal's "Try Again", or a
    /// mid-run restart). Idempotent: a second reset changes nothing.
    /// The finished game only exits through [`Self::reset_to_first_level`].
    pub fn reset(&mut self) {
        if self.state.phase == GamePhase::AllLevelsWon {
            log::debug!("reset ignored after the final level");
            return;
        }

        self.state.phase = GamePhase::Idle;
        self.rules_open = false;
        self.state.hit_points = START_HIT_POINTS;
        self.input.reset_keys();
        let index = self.state.level_index;
        self.load_level(index);
    }

    /// Advance past a won level, or finish the game after the last one
    pub fn continue_next_level(&mut self) {
        if self.state.phase != GamePhase::LevelWon {
            log::debug!("continue ignored in phase {:?}", self.state.phase);
            return;
        }

        let next = self.state.level_index + 1;
        if next >= LEVEL_COUNT {
            self.state.phase = GamePhase::AllLevelsWon;
            self.state
                .push_event(GameEvent::ModalRequested(Modal::AllLevelsWon));
            log::info!("all {} levels cleared", LEVEL_COUNT);
            return;
        }

        self.store.save_level_index(next);
        self.state.hit_points = START_HIT_POINTS;
        self.rules_open = false;
        self.input.reset_keys();
        self.load_level(next);
        self.state.phase = GamePhase::Running;
    }

    /// Full-game reset: clear persisted progress and return to level 0
    pub fn reset_to_first_level(&mut self) {
        self.store.remove();
        self.state.level_index = 0;
        self.state.hit_points = START_HIT_POINTS;
        self.state.phase = GamePhase::Idle;
        self.rules_open = false;
        self.input.reset_keys();
        self.load_level(0);
    }

    /// Pause into the rules modal
    pub fn show_rules(&mut self) {
        match self.state.phase {
            GamePhase::Idle | GamePhase::Running => {
                self.state.phase = GamePhase::Idle;
                self.rules_open = true;
                self.state.push_event(GameEvent::ModalRequested(Modal::Rules));
            }
            _ => {}
        }
    }

    /// Close the rules modal and resume play. Does nothing unless a rules
    /// modal is actually open, so it can't start a never-started game.
    pub fn close_rules(&mut self) {
        if self.rules_open {
            self.rules_open = false;
            self.state.phase = GamePhase::Running;
        }
    }
}
