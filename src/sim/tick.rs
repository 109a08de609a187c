//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision;
use super::events::GameEvent;
use super::movement::Directions;
use super::progression::check_level;
use super::state::{GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Held movement keys
    pub keys: Directions,
    /// Attack key went down this frame
    pub attack: bool,
    /// Continue/restart key went down this frame
    pub confirm: bool,
    /// Quit key went down this frame
    pub quit: bool,
    /// Monotonic wall-clock time; drives animation only. Hosts must keep it
    /// advancing: a swing ends when the attack clip finishes, and a frozen
    /// clock leaves the player attacking forever.
    pub now_ms: u64,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Quit => {}
        GamePhase::Menu | GamePhase::Lose | GamePhase::Win => {
            if input.quit {
                state.set_phase(GamePhase::Quit);
            } else if input.confirm {
                state.start_round(input.now_ms);
            }
        }
        GamePhase::Play => play_tick(state, input),
    }
}

fn play_tick(state: &mut GameState, input: &TickInput) {
    state.time_ticks += 1;

    // Player: timers, movement, attack trigger, animation state
    let step = state
        .player
        .step(input.keys, input.attack, input.now_ms, &state.tuning.player);
    if step.swing_started {
        state.emit(GameEvent::PlayerAttacked);
    }

    // Abilities fire against the enemies as they stood at tick start
    let fired = state
        .player
        .update_abilities(&state.enemies, &state.tuning.abilities);
    // Cooldown restarts without a projectile are not events
    for (kind, spawned) in fired {
        if spawned > 0 {
            state.emit(GameEvent::AbilityFired { kind, spawned });
        }
    }

    // Enemies seek the player's current center
    let target = state.player.center();
    for enemy in &mut state.enemies {
        enemy.update(target);
    }

    let elapsed = state.elapsed_secs();
    if let Some(order) =
        state
            .spawner
            .update(state.time_ticks, elapsed, &mut state.rng, &state.tuning.spawn)
    {
        state.spawn_enemy(order.tier, order.pos);
    }

    collision::resolve(state);

    if let Some(up) = check_level(&mut state.player, &mut state.rng, &state.tuning.abilities) {
        state.emit(GameEvent::LevelUp { level: up.level });
        if let Some(kind) = up.granted {
            state.emit(GameEvent::AbilityGranted { kind });
        }
    }

    state.player.arsenal.prune();

    // Death is checked before the round timer
    if state.player.is_dead() {
        log::info!("Player died at {:.1}s with score {}", elapsed, state.player.score);
        state.set_phase(GamePhase::Lose);
    } else if state.time_ticks >= state.round_ticks {
        log::info!("Round survived with score {}", state.player.score);
        state.set_phase(GamePhase::Win);
    }

    // Ensure deterministic ordering
    state.normalize_order();
}
