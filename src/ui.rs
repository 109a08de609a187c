//! HUD values
//!
//! Plain numbers and strings derived from the game state each frame; the
//! host decides how to draw them.

use crate::consts::TICK_RATE;
use crate::sim::progression::{xp_fraction, xp_needed};
use crate::sim::state::{GamePhase, GameState};

/// Per-frame HUD readout
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub health: i32,
    pub max_health: i32,
    /// Health bar fill, 0.0 to 1.0
    pub health_ratio: f32,
    pub level: u32,
    pub xp: u32,
    /// XP needed for the next level
    pub xp_next: f32,
    /// XP bar fill, 0.0 to 1.0
    pub xp_fill: f32,
    pub score: u64,
    /// Round time left as `mm:ss`
    pub time_left: String,
    pub abilities: Vec<&'static str>,
    /// Banner for non-play phases
    pub banner: Option<&'static str>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let player = &state.player;
        let health_ratio = if player.max_health > 0 {
            (player.health as f32 / player.max_health as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Self {
            health: player.health.max(0),
            max_health: player.max_health,
            health_ratio,
            level: player.level,
            xp: player.xp,
            xp_next: xp_needed(player.level),
            xp_fill: xp_fraction(player.xp, player.level),
            score: player.score,
            time_left: format_clock(state.remaining_ticks()),
            abilities: player.abilities.iter().map(|a| a.name()).collect(),
            banner: banner(state.phase),
        }
    }
}

fn banner(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Menu => Some("Press Enter to start"),
        GamePhase::Lose => Some("You died - Enter to retry, Esc to quit"),
        GamePhase::Win => Some("You survived! Enter to play again, Esc to quit"),
        GamePhase::Play | GamePhase::Quit => None,
    }
}

/// Ticks to `mm:ss`, rounding partial seconds up so 0:00 means done
pub fn format_clock(ticks: u64) -> String {
    let rate = TICK_RATE as u64;
    let secs = ticks.div_ceil(rate);
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::AbilityKind;
    use crate::sim::tick::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(1), "0:01");
        assert_eq!(format_clock(60), "0:01");
        assert_eq!(format_clock(61 * 60), "1:01");
        assert_eq!(format_clock(600 * 60), "10:00");
    }

    #[test]
    fn test_hud_at_round_start() {
        let mut state = GameState::new(4, Tuning::default());
        let hud = Hud::from_state(&state);
        assert!(hud.banner.is_some());

        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
        );
        let hud = Hud::from_state(&state);
        assert_eq!(hud.banner, None);
        assert_eq!(hud.level, 1);
        assert_eq!(hud.health_ratio, 1.0);
        assert_eq!(hud.time_left, "10:00");
        assert_eq!(hud.xp_fill, 0.0);
        assert!(hud.abilities.is_empty());
    }

    #[test]
    fn test_hud_tracks_player() {
        let mut state = GameState::new(4, Tuning::default());
        state.player.health = 5;
        state.player.xp = 2;
        let ab = state.tuning.abilities.clone();
        state.player.grant_ability(AbilityKind::ThrowingAxes, &ab);

        let hud = Hud::from_state(&state);
        assert!((hud.health_ratio - 0.5).abs() < 1e-6);
        assert!(hud.xp_fill > 0.0 && hud.xp_fill < 1.0);
        assert_eq!(hud.abilities, vec!["throwing axes"]);
    }

    #[test]
    fn test_health_never_negative() {
        let mut state = GameState::new(4, Tuning::default());
        state.player.health = -3;
        let hud = Hud::from_state(&state);
        assert_eq!(hud.health, 0);
        assert_eq!(hud.health_ratio, 0.0);
    }
}
