//! Input state shared between event callbacks and the tick loop
//!
//! Keyboard and tilt callbacks only mutate this struct; the tick loop reads
//! one immutable [`InputSnapshot`] at tick start, so a mid-tick key event can
//! never tear the frame's view of the input.

use glam::Vec2;

/// A directional key (WASD or arrow keys, mapped by the platform layer)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

/// Immutable per-tick view of the input devices
///
/// `dir` carries the keyboard intent with each axis in {-1, 0, +1};
/// `nudge` carries the raw tilt angles (gamma, beta) when the orientation
/// sensor is active, and is applied by the motion model as a direct
/// position offset rather than a force.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    pub dir: Vec2,
    pub nudge: Option<Vec2>,
}

/// Live input device state
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    /// (gamma, beta) tilt angles in degrees; None until both axes reported
    tilt: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, dir: Dir) {
        self.set_key(dir, true);
    }

    pub fn key_up(&mut self, dir: Dir) {
        self.set_key(dir, false);
    }

    fn set_key(&mut self, dir: Dir, pressed: bool) {
        match dir {
            Dir::Up => self.up = pressed,
            Dir::Down => self.down = pressed,
            Dir::Left => self.left = pressed,
            Dir::Right => self.right = pressed,
        }
    }

    /// Release all keys (called on level advance so a held key doesn't
    /// carry into the next level)
    pub fn reset_keys(&mut self) {
        self.up = false;
        self.down = false;
        self.left = false;
        self.right = false;
    }

    /// Record a tilt sensor reading. Tilt only becomes active once both
    /// axes are numeric, matching the browser orientation event contract.
    pub fn set_tilt(&mut self, beta: f32, gamma: f32) {
        if beta.is_finite() && gamma.is_finite() {
            // x follows gamma (left-right), y follows beta (front-back)
            self.tilt = Some(Vec2::new(gamma, beta));
        }
    }

    /// Mark the tilt sensor inactive
    pub fn clear_tilt(&mut self) {
        self.tilt = None;
    }

    /// Take a consistent snapshot for one tick
    pub fn snapshot(&self) -> InputSnapshot {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        InputSnapshot {
            dir,
            nudge: self.tilt,
        }
    }
}
