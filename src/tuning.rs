//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here. Durations are in
//! simulation ticks unless the field name says otherwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be within [0, 1], got {value}")]
    NotProbability { field: &'static str, value: f32 },
    #[error("spawn interval range is empty ({min}..={max})")]
    EmptySpawnRange { min: u32, max: u32 },
    #[error("enemy speed must drop as health rises ({weaker} is not faster than {stronger})")]
    TierSpeedOrder {
        weaker: &'static str,
        stronger: &'static str,
    },
    #[error("projectile damage must order bolt < flail < axe (got {bolt}, {flail}, {axe})")]
    ProjectileDamageOrder { bolt: i32, flail: i32, axe: i32 },
}

/// Stats for one enemy tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierStats {
    pub health: i32,
    pub speed: f32,
    /// Score and XP granted on kill
    pub reward: u32,
    /// Damage dealt to the player on contact
    pub contact_damage: i32,
}

/// Per-tier enemy table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub easy: TierStats,
    pub medium: TierStats,
    pub hard: TierStats,
    pub special: TierStats,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            easy: TierStats {
                health: 4,
                speed: 2.0,
                reward: 1,
                contact_damage: 1,
            },
            medium: TierStats {
                health: 8,
                speed: 1.0,
                reward: 3,
                contact_damage: 1,
            },
            hard: TierStats {
                health: 20,
                speed: 0.5,
                reward: 5,
                contact_damage: 1,
            },
            special: TierStats {
                health: 40,
                speed: 0.4,
                reward: 10,
                contact_damage: 2,
            },
        }
    }
}

/// Player stats and melee attack
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Pixels per tick per held direction key
    pub speed: f32,
    pub max_health: i32,
    /// Hitbox scale relative to the sprite rect
    pub hitbox_scale: (f32, f32),
    /// Ticks of invulnerability after taking contact damage
    pub damage_cooldown: u32,
    /// Ticks between melee swings
    pub attack_cooldown: u32,
    /// Ticks the melee arc hitbox stays active
    pub arc_duration: u32,
    /// Reach of the melee arc from the player center (pixels)
    pub arc_radius: f32,
    pub melee_damage: i32,
    /// Slash sprite playback length (wall-clock ms)
    pub slash_duration_ms: u64,
    pub slash_frames: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 3.0,
            max_health: 10,
            hitbox_scale: (0.55, 0.75),
            damage_cooldown: 100,
            attack_cooldown: 30,
            arc_duration: 18,
            arc_radius: 90.0,
            melee_damage: 2,
            slash_duration_ms: 270,
            slash_frames: 9,
        }
    }
}

/// Passive ability and projectile stats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AbilityTuning {
    pub crossbow_cooldown: u32,
    /// Crossbow only fires at enemies within this distance (pixels)
    pub crossbow_range: f32,
    pub bolt_speed: f32,
    pub bolt_damage: i32,
    pub bolt_max_age: u32,
    pub axes_cooldown: u32,
    pub axe_speed: f32,
    pub axe_damage: i32,
    pub axe_max_age: u32,
    pub flail_cooldown: u32,
    pub flail_radius: f32,
    /// Radians per tick
    pub flail_angular_speed: f32,
    pub flail_damage: i32,
    /// Ticks a flail waits after a hit before it can hit again
    pub flail_hit_cooldown: u32,
    /// Square hitbox size shared by all projectiles (pixels)
    pub projectile_size: i32,
}

impl Default for AbilityTuning {
    fn default() -> Self {
        Self {
            crossbow_cooldown: 60,
            crossbow_range: 350.0,
            bolt_speed: 8.0,
            bolt_damage: 1,
            bolt_max_age: 90,
            axes_cooldown: 90,
            axe_speed: 6.0,
            axe_damage: 3,
            axe_max_age: 75,
            flail_cooldown: 0,
            flail_radius: 110.0,
            flail_angular_speed: 0.08,
            flail_damage: 2,
            flail_hit_cooldown: 20,
            projectile_size: 24,
        }
    }
}

/// Enemy spawning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnTuning {
    /// Inclusive range the spawn interval is re-rolled from (ticks)
    pub interval_min: u32,
    pub interval_max: u32,
    /// Independent per-spawn chance of a Special enemy
    pub special_chance: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval_min: 30,
            interval_max: 90,
            special_chance: 1.0 / 101.0,
        }
    }
}

/// Food pickups dropped by dying enemies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodTuning {
    pub heal: i32,
    pub drop_chance: f32,
    /// Ticks before uneaten food disappears (`None` = never)
    pub ttl_ticks: Option<u32>,
}

impl Default for FoodTuning {
    fn default() -> Self {
        Self {
            heal: 5,
            drop_chance: 0.2,
            ttl_ticks: None,
        }
    }
}

/// Complete balance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Round length in seconds
    pub round_secs: u32,
    pub player: PlayerTuning,
    pub enemies: EnemyTuning,
    pub abilities: AbilityTuning,
    pub spawn: SpawnTuning,
    pub food: FoodTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            round_secs: 600,
            player: PlayerTuning::default(),
            enemies: EnemyTuning::default(),
            abilities: AbilityTuning::default(),
            spawn: SpawnTuning::default(),
            food: FoodTuning::default(),
        }
    }
}

impl Tuning {
    /// Parse a tuning document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning (round {}s)", tuning.round_secs);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Round duration in ticks
    pub fn round_ticks(&self) -> u64 {
        crate::secs_to_ticks(self.round_secs)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("round_secs", self.round_secs as f32)?;
        positive("player.speed", self.player.speed)?;
        positive("player.max_health", self.player.max_health as f32)?;
        positive("player.arc_radius", self.player.arc_radius)?;
        positive("abilities.crossbow_range", self.abilities.crossbow_range)?;
        positive("abilities.bolt_speed", self.abilities.bolt_speed)?;
        positive("abilities.axe_speed", self.abilities.axe_speed)?;
        positive("abilities.flail_radius", self.abilities.flail_radius)?;

        probability("spawn.special_chance", self.spawn.special_chance)?;
        probability("food.drop_chance", self.food.drop_chance)?;

        if self.spawn.interval_min > self.spawn.interval_max {
            return Err(TuningError::EmptySpawnRange {
                min: self.spawn.interval_min,
                max: self.spawn.interval_max,
            });
        }

        let e = &self.enemies;
        let tiers = [
            ("easy", e.easy),
            ("medium", e.medium),
            ("hard", e.hard),
            ("special", e.special),
        ];
        for (name, stats) in tiers {
            positive(name, stats.speed)?;
            positive(name, stats.health as f32)?;
        }
        for pair in tiers.windows(2) {
            let (weaker, a) = pair[0];
            let (stronger, b) = pair[1];
            if a.health < b.health && a.speed <= b.speed {
                return Err(TuningError::TierSpeedOrder { weaker, stronger });
            }
        }

        let ab = &self.abilities;
        if !(ab.bolt_damage < ab.flail_damage && ab.flail_damage < ab.axe_damage) {
            return Err(TuningError::ProjectileDamageOrder {
                bolt: ab.bolt_damage,
                flail: ab.flail_damage,
                axe: ab.axe_damage,
            });
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NotPositive { field, value })
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), TuningError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TuningError::NotProbability { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "round_secs": 120, "food": { "heal": 3 } }"#).unwrap();
        assert_eq!(tuning.round_secs, 120);
        assert_eq!(tuning.food.heal, 3);
        assert_eq!(tuning.food.drop_chance, FoodTuning::default().drop_chance);
        assert_eq!(tuning.player.max_health, 10);
    }

    #[test]
    fn test_json_roundtrip() {
        let json = Tuning::default().to_json().unwrap();
        let back = Tuning::from_json(&json).unwrap();
        assert_eq!(back.enemies.hard, EnemyTuning::default().hard);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_rejects_inverted_spawn_range() {
        let mut tuning = Tuning::default();
        tuning.spawn.interval_min = 100;
        tuning.spawn.interval_max = 10;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptySpawnRange { .. })
        ));
    }

    #[test]
    fn test_rejects_slow_weak_enemy() {
        let mut tuning = Tuning::default();
        tuning.enemies.easy.speed = 0.1;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::TierSpeedOrder { weaker: "easy", .. })
        ));
    }

    #[test]
    fn test_rejects_projectile_damage_order() {
        let mut tuning = Tuning::default();
        tuning.abilities.bolt_damage = 5;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::ProjectileDamageOrder { .. })
        ));
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        let mut tuning = Tuning::default();
        tuning.food.drop_chance = 1.5;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotProbability { field: "food.drop_chance", .. })
        ));
    }
}
