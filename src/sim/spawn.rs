//! Enemy spawn director
//!
//! Enemies arrive one at a time at randomized intervals, on a random screen
//! edge, with a tier picked from a curve over elapsed round time.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::enemy::EnemyTier;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::SpawnTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];
}

/// Tier for a spawn at `elapsed_secs` into the round, or `None` once the
/// curve has run out. A Special roll overrides the curve at any time.
pub fn choose_tier<R: Rng>(elapsed_secs: f32, special_chance: f32, rng: &mut R) -> Option<EnemyTier> {
    use EnemyTier::*;

    if rng.random::<f32>() < special_chance {
        return Some(Special);
    }
    let band: &[EnemyTier] = if elapsed_secs < 180.0 {
        &[Easy]
    } else if elapsed_secs < 300.0 {
        &[Easy, Medium]
    } else if elapsed_secs < 540.0 {
        &[Medium]
    } else if elapsed_secs < 600.0 {
        &[Easy, Medium, Hard]
    } else {
        &[]
    };
    band.choose(rng).copied()
}

/// Uniform point along a random screen edge
pub fn edge_position<R: Rng>(rng: &mut R) -> (Edge, Vec2) {
    let w = SCREEN_WIDTH as f32;
    let h = SCREEN_HEIGHT as f32;
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let pos = match edge {
        Edge::Top => Vec2::new(rng.random_range(0.0..w), 0.0),
        Edge::Bottom => Vec2::new(rng.random_range(0.0..w), h),
        Edge::Left => Vec2::new(0.0, rng.random_range(0.0..h)),
        Edge::Right => Vec2::new(w, rng.random_range(0.0..h)),
    };
    (edge, pos)
}

/// A spawn decided by the director
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnOrder {
    pub tier: EnemyTier,
    pub edge: Edge,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnDirector {
    /// Ticks to wait after the last spawn; re-rolled after every spawn
    pub interval: u32,
    pub last_spawn_tick: u64,
}

impl SpawnDirector {
    pub fn new<R: Rng>(rng: &mut R, tuning: &SpawnTuning) -> Self {
        Self {
            interval: roll_interval(rng, tuning),
            last_spawn_tick: 0,
        }
    }

    /// Decide whether to spawn this tick
    pub fn update<R: Rng>(
        &mut self,
        now_tick: u64,
        elapsed_secs: f32,
        rng: &mut R,
        tuning: &SpawnTuning,
    ) -> Option<SpawnOrder> {
        if now_tick.saturating_sub(self.last_spawn_tick) < self.interval as u64 {
            return None;
        }
        self.last_spawn_tick = now_tick;
        self.interval = roll_interval(rng, tuning);

        let tier = choose_tier(elapsed_secs, tuning.special_chance, rng)?;
        let (edge, pos) = edge_position(rng);
        Some(SpawnOrder { tier, edge, pos })
    }
}

fn roll_interval<R: Rng>(rng: &mut R, tuning: &SpawnTuning) -> u32 {
    rng.random_range(tuning.interval_min..=tuning.interval_max)
}
