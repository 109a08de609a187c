//! Per-tick collision and damage resolution
//!
//! Passes run in a fixed order. Damage is applied to raw enemy health, which
//! may go below zero; dead enemies are only removed by the final prune, so
//! one enemy can take hits from several sources in the same tick.

use rand::Rng;

use super::enemy::Enemy;
use super::events::{DamageSource, GameEvent};
use super::progression::award_kill;
use super::projectile::{Missile, ProjectileKind};
use super::state::GameState;

/// Run every pass in order
pub fn resolve(state: &mut GameState) {
    player_vs_enemies(state);
    melee_vs_enemies(state);
    projectiles_vs_enemies(state);
    food_vs_player(state);
    prune_dead_enemies(state);
}

/// Contact damage, gated by the player's damage cooldown
pub fn player_vs_enemies(state: &mut GameState) {
    let cooldown = state.tuning.player.damage_cooldown;
    let mut events = Vec::new();
    for enemy in &state.enemies {
        if enemy.hitbox.colliderect(&state.player.hitbox)
            && state.player.take_contact_damage(enemy.contact_damage, cooldown)
        {
            events.push(GameEvent::PlayerDamaged {
                amount: enemy.contact_damage,
                health: state.player.health,
            });
        }
    }
    for event in events {
        state.emit(event);
    }
}

/// Melee arc damage, at most once per enemy per swing
pub fn melee_vs_enemies(state: &mut GameState) {
    let tuning = &state.tuning.player;
    let Some(arc) = state.player.melee_arc(tuning.arc_radius) else {
        return;
    };
    let damage = tuning.melee_damage;
    let mut events = Vec::new();
    for enemy in &mut state.enemies {
        if arc.overlaps_rect(&enemy.hitbox) && state.player.swing.hit.insert(enemy.id) {
            enemy.take_damage(damage);
            events.push(hit_event(enemy, DamageSource::Melee, damage));
        }
    }
    for event in events {
        state.emit(event);
    }
}

/// Bolts and axes are spent on their first hit; flails survive and go on a
/// short hit cooldown
pub fn projectiles_vs_enemies(state: &mut GameState) {
    let mut events = Vec::new();
    let arsenal = &mut state.player.arsenal;
    for missile in arsenal.bolts.iter_mut().chain(arsenal.axes.iter_mut()) {
        missile_hit(missile, &mut state.enemies, &mut events);
    }
    for flail in &mut arsenal.flails {
        if !flail.can_hit() {
            continue;
        }
        if let Some(enemy) = state
            .enemies
            .iter_mut()
            .find(|e| e.hitbox.colliderect(&flail.rect))
        {
            enemy.take_damage(flail.damage);
            flail.register_hit();
            events.push(hit_event(
                enemy,
                DamageSource::Projectile(ProjectileKind::Flail),
                flail.damage,
            ));
        }
    }
    for event in events {
        state.emit(event);
    }
}

fn missile_hit(missile: &mut Missile, enemies: &mut [Enemy], events: &mut Vec<GameEvent>) {
    if missile.spent {
        return;
    }
    if let Some(enemy) = enemies.iter_mut().find(|e| e.hitbox.colliderect(&missile.rect)) {
        enemy.take_damage(missile.damage);
        missile.spent = true;
        events.push(hit_event(enemy, DamageSource::Projectile(missile.kind), missile.damage));
    }
}

fn hit_event(enemy: &Enemy, source: DamageSource, damage: i32) -> GameEvent {
    GameEvent::EnemyHit {
        id: enemy.id,
        source,
        damage,
        health: enemy.health,
    }
}

/// Heal-and-remove for food under the player's hitbox
pub fn food_vs_player(state: &mut GameState) {
    let mut events = Vec::new();
    let player = &mut state.player;
    state.foods.retain(|food| {
        if food.rect.colliderect(&player.hitbox) {
            let healed = player.heal(food.heal);
            events.push(GameEvent::FoodEaten {
                healed,
                health: player.health,
            });
            false
        } else {
            true
        }
    });
    for event in events {
        state.emit(event);
    }
}

/// Remove dead enemies, paying out rewards and rolling food drops.
/// Also ages food and drops it past its TTL when one is configured.
pub fn prune_dead_enemies(state: &mut GameState) {
    let (dead, alive): (Vec<Enemy>, Vec<Enemy>) =
        std::mem::take(&mut state.enemies).into_iter().partition(Enemy::is_dead);
    state.enemies = alive;

    for enemy in dead {
        award_kill(&mut state.player, enemy.reward);
        state.emit(GameEvent::EnemyKilled {
            id: enemy.id,
            tier: enemy.tier,
            reward: enemy.reward,
        });
        if state.rng.random::<f32>() < state.tuning.food.drop_chance {
            state.spawn_food(enemy.pos);
        }
    }

    for food in &mut state.foods {
        food.age += 1;
    }
    if let Some(ttl) = state.tuning.food.ttl_ticks {
        state.foods.retain(|f| f.age < ttl);
    }
}
