//! Score, XP, levels and ability grants

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::ability::AbilityKind;
use super::player::Player;
use crate::tuning::AbilityTuning;

/// Every this many levels the player is granted a new ability
pub const ABILITY_LEVEL_INTERVAL: u32 = 5;

/// Cumulative XP required to leave `level`
pub fn xp_needed(level: u32) -> f32 {
    ((level + 1) as f32).powf(1.5)
}

/// XP bar fill in [0, 1]
pub fn xp_fraction(xp: u32, level: u32) -> f32 {
    let needed = xp_needed(level);
    if needed > 0.0 {
        (xp as f32 / needed).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Credit a kill's reward to both score and XP
pub fn award_kill(player: &mut Player, reward: u32) {
    player.score += reward as u64;
    player.xp += reward;
}

/// Result of a level check that crossed the threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub level: u32,
    pub granted: Option<AbilityKind>,
}

/// Level up at most once if XP has reached the next threshold. Every
/// fifth level grants a random not-yet-owned ability, if any remain.
pub fn check_level<R: Rng>(player: &mut Player, rng: &mut R, tuning: &AbilityTuning) -> Option<LevelUp> {
    if (player.xp as f32) < xp_needed(player.level) {
        return None;
    }
    player.level += 1;
    log::info!("Player level up! Level is now {}", player.level);

    let mut granted = None;
    if player.level % ABILITY_LEVEL_INTERVAL == 0 {
        match choose_new_ability(player, rng) {
            Some(kind) => {
                player.grant_ability(kind, tuning);
                log::info!("Granted ability: {}", kind.name());
                granted = Some(kind);
            }
            None => log::info!("No new abilities available"),
        }
    }

    Some(LevelUp {
        level: player.level,
        granted,
    })
}

/// Uniform pick from the roster entries the player does not own yet
pub fn choose_new_ability<R: Rng>(player: &Player, rng: &mut R) -> Option<AbilityKind> {
    let available: Vec<AbilityKind> = AbilityKind::ROSTER
        .iter()
        .copied()
        .filter(|kind| !player.has_ability(*kind))
        .collect();
    available.choose(rng).copied()
}
