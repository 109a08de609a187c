//! Enemy tiers and the seeking enemy entity

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::movement::move_toward;
use super::rect::Rect;
use crate::consts::ENEMY_SPRITE_SIZE;
use crate::tuning::{EnemyTuning, TierStats};

/// Enemy strength class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyTier {
    Easy,
    Medium,
    Hard,
    Special,
}

impl EnemyTier {
    pub const ALL: [EnemyTier; 4] = [
        EnemyTier::Easy,
        EnemyTier::Medium,
        EnemyTier::Hard,
        EnemyTier::Special,
    ];

    pub fn stats(self, table: &EnemyTuning) -> TierStats {
        match self {
            EnemyTier::Easy => table.easy,
            EnemyTier::Medium => table.medium,
            EnemyTier::Hard => table.hard,
            EnemyTier::Special => table.special,
        }
    }
}

/// Hitbox scale relative to the enemy sprite
const ENEMY_HITBOX_SCALE: f32 = 0.6;

/// A live enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub tier: EnemyTier,
    /// Sub-pixel center position
    pub pos: Vec2,
    /// May go negative within a tick; pruned at tick end when <= 0
    pub health: i32,
    pub speed: f32,
    pub reward: u32,
    pub contact_damage: i32,
    /// Sprite bound
    pub rect: Rect,
    pub hitbox: Rect,
}

impl Enemy {
    pub fn new(id: u32, tier: EnemyTier, pos: Vec2, table: &EnemyTuning) -> Self {
        let stats = tier.stats(table);
        let mut enemy = Self {
            id,
            tier,
            pos,
            health: stats.health,
            speed: stats.speed,
            reward: stats.reward,
            contact_damage: stats.contact_damage,
            rect: Rect::new(0, 0, ENEMY_SPRITE_SIZE, ENEMY_SPRITE_SIZE),
            hitbox: Rect::default(),
        };
        enemy.sync_bounds();
        enemy
    }

    /// Seek the target (the player's current center)
    pub fn update(&mut self, target: Vec2) {
        move_toward(&mut self.pos, target, self.speed);
        self.sync_bounds();
    }

    /// Derive the integer rects from the float position
    pub fn sync_bounds(&mut self) {
        self.rect.set_center(self.pos);
        self.hitbox = self.rect.scale_by(ENEMY_HITBOX_SCALE, ENEMY_HITBOX_SCALE);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}
