//! Game state and core simulation types
//!
//! Everything a round needs to advance deterministically lives here,
//! including the seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::{Enemy, EnemyTier};
use super::events::GameEvent;
use super::player::Player;
use super::rect::Rect;
use super::spawn::SpawnDirector;
use crate::consts::FOOD_SIZE;
use crate::tuning::Tuning;

/// Undrained events kept before the oldest half is discarded
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for continue/quit
    Menu,
    /// Round in progress
    Play,
    /// Player died
    Lose,
    /// Player survived the round timer
    Win,
    /// Terminal
    Quit,
}

/// Healing pickup dropped by a dying enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: u32,
    pub pos: Vec2,
    pub rect: Rect,
    pub heal: i32,
    /// Ticks since dropped
    pub age: u32,
}

impl Food {
    pub fn new(id: u32, pos: Vec2, heal: i32) -> Self {
        Self {
            id,
            pos,
            rect: Rect::from_center(pos, FOOD_SIZE, FOOD_SIZE),
            heal,
            age: 0,
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed of the current round
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Rounds started so far
    pub round: u32,
    /// Ticks elapsed in the current round
    pub time_ticks: u64,
    /// Round length in ticks
    pub round_ticks: u64,
    pub player: Player,
    /// Live enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Uneaten food (sorted by id)
    pub foods: Vec<Food>,
    pub spawner: SpawnDirector,
    /// Events emitted since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Fresh state sitting at the menu
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawner = SpawnDirector::new(&mut rng, &tuning.spawn);
        Self {
            seed,
            rng,
            player: Player::new(&tuning.player, 0),
            round_ticks: tuning.round_ticks(),
            tuning,
            phase: GamePhase::Menu,
            round: 0,
            time_ticks: 0,
            enemies: Vec::new(),
            foods: Vec::new(),
            spawner,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Reset every round-scoped value and enter `Play`. Rounds after the
    /// first reseed from the previous RNG so restarts differ but stay
    /// reproducible.
    pub fn start_round(&mut self, now_ms: u64) {
        if self.round > 0 {
            self.seed = self.rng.random::<u64>();
            self.rng = Pcg32::seed_from_u64(self.seed);
        }
        self.round += 1;
        self.time_ticks = 0;
        self.round_ticks = self.tuning.round_ticks();
        self.player = Player::new(&self.tuning.player, now_ms);
        self.enemies.clear();
        self.foods.clear();
        self.spawner = SpawnDirector::new(&mut self.rng, &self.tuning.spawn);
        self.next_id = 1;
        log::info!("Round {} started with seed {}", self.round, self.seed);
        self.set_phase(GamePhase::Play);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_enemy(&mut self, tier: EnemyTier, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies
            .push(Enemy::new(id, tier, pos, &self.tuning.enemies));
        self.emit(GameEvent::EnemySpawned { id, tier, pos });
        id
    }

    pub fn spawn_food(&mut self, pos: Vec2) {
        let id = self.next_entity_id();
        self.foods.push(Food::new(id, pos, self.tuning.food.heal));
        self.emit(GameEvent::FoodDropped { pos });
    }

    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from != to {
            self.phase = to;
            self.emit(GameEvent::PhaseChanged { from, to });
        }
    }

    /// Record an event (mirrored to the log). The queue is bounded by
    /// [`MAX_PENDING_EVENTS`]; hosts that never drain lose the oldest events.
    pub fn emit(&mut self, event: GameEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            log::warn!(
                "Event queue not drained, dropping {} oldest events",
                MAX_PENDING_EVENTS / 2
            );
            self.events.drain(..MAX_PENDING_EVENTS / 2);
        }
        if event.is_notable() {
            log::info!("{:?}", event);
        } else {
            log::debug!("{:?}", event);
        }
        self.events.push(event);
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Seconds elapsed in the round
    pub fn elapsed_secs(&self) -> f32 {
        self.time_ticks as f32 / crate::consts::TICK_RATE as f32
    }

    pub fn remaining_ticks(&self) -> u64 {
        self.round_ticks.saturating_sub(self.time_ticks)
    }

    /// Ensure entity lists are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.foods.sort_by_key(|f| f.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_menu() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.round, 0);
        assert_eq!(state.round_ticks, 36_000);
    }

    #[test]
    fn test_start_round_resets() {
        let mut state = GameState::new(1, Tuning::default());
        state.start_round(0);
        assert_eq!(state.phase, GamePhase::Play);
        let first_seed = state.seed;
        state.spawn_enemy(EnemyTier::Easy, Vec2::ZERO);
        state.player.health = 1;
        state.time_ticks = 500;

        state.start_round(1000);
        assert_eq!(state.round, 2);
        assert_ne!(state.seed, first_seed);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.health, state.player.max_health);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_ids_are_unique_and_events_recorded() {
        let mut state = GameState::new(1, Tuning::default());
        let a = state.spawn_enemy(EnemyTier::Easy, Vec2::ZERO);
        let b = state.spawn_enemy(EnemyTier::Hard, Vec2::ZERO);
        assert_ne!(a, b);
        state.spawn_food(Vec2::new(10.0, 10.0));
        let events = state.drain_events();
        assert_eq!(events.len(), 3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_event_queue_is_bounded() {
        let mut state = GameState::new(1, Tuning::default());
        for _ in 0..3 * MAX_PENDING_EVENTS {
            state.emit(GameEvent::PlayerAttacked);
        }
        assert!(state.events.len() <= MAX_PENDING_EVENTS);
        assert!(!state.events.is_empty());
    }

    #[test]
    fn test_food_rect_centered() {
        let food = Food::new(1, Vec2::new(100.0, 100.0), 5);
        assert_eq!(food.rect.center(), Vec2::new(100.0, 100.0));
        assert_eq!(food.rect.w, FOOD_SIZE);
    }
}
