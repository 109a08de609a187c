//! Structured simulation events
//!
//! The tick pushes these into `GameState::events` instead of printing.
//! Callers drain them for logging, audio cues or UI popups.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ability::AbilityKind;
use super::enemy::EnemyTier;
use super::projectile::ProjectileKind;
use super::state::GamePhase;

/// What dealt damage to an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageSource {
    Melee,
    Projectile(ProjectileKind),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    EnemySpawned { id: u32, tier: EnemyTier, pos: Vec2 },
    PlayerDamaged { amount: i32, health: i32 },
    PlayerAttacked,
    EnemyHit { id: u32, source: DamageSource, damage: i32, health: i32 },
    EnemyKilled { id: u32, tier: EnemyTier, reward: u32 },
    FoodDropped { pos: Vec2 },
    FoodEaten { healed: i32, health: i32 },
    AbilityFired { kind: AbilityKind, spawned: usize },
    LevelUp { level: u32 },
    AbilityGranted { kind: AbilityKind },
}

impl GameEvent {
    /// Events worth surfacing above debug level
    pub fn is_notable(&self) -> bool {
        matches!(
            self,
            GameEvent::PhaseChanged { .. } | GameEvent::LevelUp { .. } | GameEvent::AbilityGranted { .. }
        )
    }
}
