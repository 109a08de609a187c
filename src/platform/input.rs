//! Keyboard state with key-down edge detection

use crate::sim::{Directions, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Attack,
    Confirm,
    Quit,
}

impl Key {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        self as usize
    }
}

/// Held keys for the current and previous frame
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: [bool; Key::COUNT],
    prev: [bool; Key::COUNT],
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: Key, down: bool) {
        self.held[key.index()] = down;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }

    /// Went down since the last `end_frame`
    pub fn pressed(&self, key: Key) -> bool {
        self.held[key.index()] && !self.prev[key.index()]
    }

    /// Build the tick input for this frame
    pub fn tick_input(&self, now_ms: u64) -> TickInput {
        TickInput {
            keys: Directions {
                up: self.is_held(Key::Up),
                down: self.is_held(Key::Down),
                left: self.is_held(Key::Left),
                right: self.is_held(Key::Right),
            },
            attack: self.pressed(Key::Attack),
            confirm: self.pressed(Key::Confirm),
            quit: self.pressed(Key::Quit),
            now_ms,
        }
    }

    /// Latch current state so edges fire once
    pub fn end_frame(&mut self) {
        self.prev = self.held;
    }
}
