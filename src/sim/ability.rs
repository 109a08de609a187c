//! Passive abilities and their cooldown engine
//!
//! Every owned ability ticks down once per simulation tick and fires as soon
//! as it is ready. Firing always restarts the cooldown, even when the fire
//! itself had nothing to do.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::projectile::{Flail, Missile};
use crate::tuning::AbilityTuning;

/// The fixed ability roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    AutomaticCrossbow,
    ThrowingAxes,
    WildFlail,
}

impl AbilityKind {
    pub const ROSTER: [AbilityKind; 3] = [
        AbilityKind::AutomaticCrossbow,
        AbilityKind::ThrowingAxes,
        AbilityKind::WildFlail,
    ];

    /// Unique key; a player holds at most one ability per name
    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::AutomaticCrossbow => "automatic crossbow",
            AbilityKind::ThrowingAxes => "throwing axes",
            AbilityKind::WildFlail => "wild flail",
        }
    }

    pub fn cooldown(&self, tuning: &AbilityTuning) -> u32 {
        match self {
            AbilityKind::AutomaticCrossbow => tuning.crossbow_cooldown,
            AbilityKind::ThrowingAxes => tuning.axes_cooldown,
            AbilityKind::WildFlail => tuning.flail_cooldown,
        }
    }

    /// Apply this ability's effect. Returns how many projectiles were spawned.
    pub fn fire(
        &self,
        origin: Vec2,
        enemies: &[Enemy],
        arsenal: &mut Arsenal,
        tuning: &AbilityTuning,
    ) -> usize {
        match self {
            AbilityKind::AutomaticCrossbow => {
                match nearest_in_range(origin, enemies, tuning.crossbow_range) {
                    Some(target) => {
                        arsenal.bolts.push(Missile::bolt(origin, target.pos, tuning));
                        1
                    }
                    None => 0,
                }
            }
            AbilityKind::ThrowingAxes => {
                arsenal.axes.push(Missile::axe(origin, true, tuning));
                arsenal.axes.push(Missile::axe(origin, false, tuning));
                2
            }
            AbilityKind::WildFlail => {
                if arsenal.flails.is_empty() {
                    arsenal.flails.push(Flail::new(origin, tuning));
                    1
                } else {
                    0
                }
            }
        }
    }
}

/// The nearest enemy, provided it lies within `range`.
///
/// Ties go to the earliest enemy in the slice.
pub fn nearest_in_range(origin: Vec2, enemies: &[Enemy], range: f32) -> Option<&Enemy> {
    let closest = enemies.iter().min_by(|a, b| {
        a.pos
            .distance_squared(origin)
            .partial_cmp(&b.pos.distance_squared(origin))
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;
    (closest.pos.distance(origin) <= range).then_some(closest)
}

/// An owned ability with its countdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ability {
    pub kind: AbilityKind,
    /// Cooldown length in ticks
    pub cooldown: u32,
    timer: u32,
}

impl Ability {
    /// A freshly granted ability is ready immediately
    pub fn new(kind: AbilityKind, tuning: &AbilityTuning) -> Self {
        Self {
            kind,
            cooldown: kind.cooldown(tuning),
            timer: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn ready(&self) -> bool {
        self.timer == 0
    }

    pub fn start_cooldown(&mut self) {
        self.timer = self.cooldown;
    }

    /// Count down one tick, flooring at zero
    pub fn update(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    pub fn remaining(&self) -> u32 {
        self.timer
    }
}

/// Projectiles owned by the player, one list per kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Arsenal {
    pub bolts: Vec<Missile>,
    pub axes: Vec<Missile>,
    /// At most one live flail
    pub flails: Vec<Flail>,
}

impl Arsenal {
    /// Advance every projectile one tick
    pub fn update(&mut self, owner_center: Vec2) {
        for bolt in &mut self.bolts {
            bolt.update();
        }
        for axe in &mut self.axes {
            axe.update();
        }
        for flail in &mut self.flails {
            flail.update(owner_center);
        }
    }

    /// Drop spent, aged-out and off-screen missiles. Flails never expire.
    pub fn prune(&mut self) {
        self.bolts.retain(|b| !b.expired());
        self.axes.retain(|a| !a.expired());
    }

    pub fn clear_flails(&mut self) {
        self.flails.clear();
    }

    pub fn len(&self) -> usize {
        self.bolts.len() + self.axes.len() + self.flails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::EnemyTier;
    use crate::tuning::EnemyTuning;
    use proptest::prelude::*;

    fn enemy_at(id: u32, x: f32, y: f32) -> Enemy {
        Enemy::new(id, EnemyTier::Easy, Vec2::new(x, y), &EnemyTuning::default())
    }

    #[test]
    fn test_new_ability_is_ready() {
        let ability = Ability::new(AbilityKind::ThrowingAxes, &AbilityTuning::default());
        assert!(ability.ready());
        assert_eq!(ability.name(), "throwing axes");
    }

    #[test]
    fn test_crossbow_targets_nearest_in_range() {
        let tuning = AbilityTuning::default();
        let origin = Vec2::new(100.0, 100.0);
        let enemies = vec![enemy_at(1, 400.0, 100.0), enemy_at(2, 150.0, 100.0)];
        let mut arsenal = Arsenal::default();
        let spawned = AbilityKind::AutomaticCrossbow.fire(origin, &enemies, &mut arsenal, &tuning);
        assert_eq!(spawned, 1);
        assert_eq!(arsenal.bolts.len(), 1);
        assert!(arsenal.bolts[0].vel.x > 0.0);
        assert_eq!(arsenal.bolts[0].vel.y, 0.0);
    }

    #[test]
    fn test_crossbow_ignores_out_of_range() {
        let tuning = AbilityTuning::default();
        let enemies = vec![enemy_at(1, 1000.0, 100.0)];
        let mut arsenal = Arsenal::default();
        let spawned =
            AbilityKind::AutomaticCrossbow.fire(Vec2::new(100.0, 100.0), &enemies, &mut arsenal, &tuning);
        assert_eq!(spawned, 0);
        assert!(arsenal.is_empty());
    }

    #[test]
    fn test_axes_fire_a_pair() {
        let tuning = AbilityTuning::default();
        let mut arsenal = Arsenal::default();
        let spawned = AbilityKind::ThrowingAxes.fire(Vec2::new(300.0, 300.0), &[], &mut arsenal, &tuning);
        assert_eq!(spawned, 2);
        assert!(arsenal.axes[0].vel.y < 0.0);
        assert!(arsenal.axes[1].vel.y > 0.0);
        assert_eq!(arsenal.axes[0].vel.x, 0.0);
    }

    #[test]
    fn test_flail_capped_at_one() {
        let tuning = AbilityTuning::default();
        let mut arsenal = Arsenal::default();
        for _ in 0..5 {
            AbilityKind::WildFlail.fire(Vec2::new(300.0, 300.0), &[], &mut arsenal, &tuning);
        }
        assert_eq!(arsenal.flails.len(), 1);
        arsenal.clear_flails();
        assert_eq!(
            AbilityKind::WildFlail.fire(Vec2::ZERO, &[], &mut arsenal, &tuning),
            1
        );
    }

    #[test]
    fn test_prune_keeps_flails() {
        let tuning = AbilityTuning::default();
        let mut arsenal = Arsenal::default();
        AbilityKind::WildFlail.fire(Vec2::new(300.0, 300.0), &[], &mut arsenal, &tuning);
        AbilityKind::ThrowingAxes.fire(Vec2::new(300.0, 300.0), &[], &mut arsenal, &tuning);
        arsenal.axes[0].spent = true;
        for _ in 0..10_000 {
            arsenal.update(Vec2::new(300.0, 300.0));
        }
        arsenal.prune();
        assert!(arsenal.axes.is_empty());
        assert_eq!(arsenal.flails.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_ready_after_exactly_cooldown(cooldown in 0u32..200, n in 0u32..400) {
            let mut ability = Ability::new(AbilityKind::AutomaticCrossbow, &AbilityTuning::default());
            ability.cooldown = cooldown;
            ability.start_cooldown();
            for _ in 0..n {
                ability.update();
            }
            prop_assert_eq!(ability.ready(), n >= cooldown);
        }
    }
}
