//! Roguelite-lite - A top-down survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, progression, spawning)
//! - `tuning`: Data-driven game balance
//! - `platform`: Clock/input providers and fixed-step pacing
//! - `renderer`: Read-only frame snapshots for whatever draws the game
//! - `ui`: HUD values (health, XP bar, level, timer)

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in milliseconds
    pub const TICK_MS: f32 = 1000.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Frame deltas above this are clamped (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;

    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: i32 = 1280;
    pub const SCREEN_HEIGHT: i32 = 720;

    /// Sprite sheet frame size; every character sheet is one row of these
    pub const SPRITE_WIDTH: i32 = 128;
    pub const SPRITE_HEIGHT: i32 = 128;

    /// Enemy sprite size
    pub const ENEMY_SPRITE_SIZE: i32 = 96;
    /// Food pickup size
    pub const FOOD_SIZE: i32 = 20;
}

/// Convert whole seconds to simulation ticks
#[inline]
pub fn secs_to_ticks(secs: u32) -> u64 {
    secs as u64 * consts::TICK_RATE as u64
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
