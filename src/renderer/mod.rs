//! Frame snapshots for renderers
//!
//! Whatever draws the game reads a `FrameSnapshot` and never touches
//! `GameState` directly. Views are in draw order: food, enemies, player,
//! projectiles, then the slash overlay.

use crate::sim::enemy::EnemyTier;
use crate::sim::player::{AnimState, Facing};
use crate::sim::projectile::ProjectileKind;
use crate::sim::rect::Rect;
use crate::sim::state::{GamePhase, GameState};

/// What a sprite view depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy(EnemyTier),
    Projectile(ProjectileKind),
    Food,
    Slash,
}

/// One drawable sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteView {
    pub kind: SpriteKind,
    /// Integer visual rect in screen pixels
    pub rect: Rect,
    pub facing: Facing,
    pub anim: AnimState,
    /// Sheet frame index to draw
    pub frame: u32,
}

impl SpriteView {
    fn still(kind: SpriteKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            facing: Facing::Right,
            anim: AnimState::Idle,
            frame: 0,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub sprites: Vec<SpriteView>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        // Menu and end screens draw no world
        if state.phase != GamePhase::Play {
            return Self {
                phase: state.phase,
                sprites: Vec::new(),
            };
        }

        let player = &state.player;
        let arsenal = &player.arsenal;
        let mut sprites = Vec::with_capacity(
            state.foods.len() + state.enemies.len() + arsenal.len() + 2,
        );

        sprites.extend(
            state
                .foods
                .iter()
                .map(|f| SpriteView::still(SpriteKind::Food, f.rect)),
        );

        // Enemies always face the player
        let px = player.center().x;
        sprites.extend(state.enemies.iter().map(|e| SpriteView {
            facing: if px < e.pos.x { Facing::Left } else { Facing::Right },
            anim: AnimState::Walking,
            ..SpriteView::still(SpriteKind::Enemy(e.tier), e.rect)
        }));

        sprites.push(SpriteView {
            kind: SpriteKind::Player,
            rect: player.rect,
            facing: player.facing,
            anim: player.anim_state,
            frame: player.animations.get(player.anim_state).current_frame,
        });

        for missile in arsenal.bolts.iter().chain(&arsenal.axes) {
            sprites.push(SpriteView::still(
                SpriteKind::Projectile(missile.kind),
                missile.rect,
            ));
        }
        sprites.extend(arsenal.flails.iter().map(|f| {
            SpriteView::still(SpriteKind::Projectile(ProjectileKind::Flail), f.rect)
        }));

        if player.swing.slash.active {
            sprites.push(SpriteView {
                facing: player.facing,
                anim: AnimState::Attacking,
                frame: player.swing.slash.frame,
                ..SpriteView::still(SpriteKind::Slash, player.rect)
            });
        }

        Self {
            phase: state.phase,
            sprites,
        }
    }

    pub fn count(&self, kind: SpriteKind) -> usize {
        self.sprites.iter().filter(|s| s.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ability::AbilityKind;
    use crate::sim::tick::{TickInput, tick};
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing() -> GameState {
        let mut state = GameState::new(11, Tuning::default());
        tick(
            &mut state,
            &TickInput {
                confirm: true,
                ..Default::default()
            },
        );
        state
    }

    #[test]
    fn test_menu_has_no_sprites() {
        let state = GameState::new(11, Tuning::default());
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Menu);
        assert!(snap.sprites.is_empty());
    }

    #[test]
    fn test_capture_counts_entities() {
        let mut state = playing();
        let center = state.player.center();
        state.spawn_enemy(EnemyTier::Hard, center + Vec2::new(-300.0, 0.0));
        state.spawn_food(Vec2::new(50.0, 50.0));
        let ab = state.tuning.abilities.clone();
        state.player.grant_ability(AbilityKind::WildFlail, &ab);
        state.player.update_abilities(&state.enemies, &ab);

        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.count(SpriteKind::Player), 1);
        assert_eq!(snap.count(SpriteKind::Enemy(EnemyTier::Hard)), 1);
        assert_eq!(snap.count(SpriteKind::Food), 1);
        assert_eq!(
            snap.count(SpriteKind::Projectile(ProjectileKind::Flail)),
            1
        );
        // Food first, player after enemies
        assert_eq!(snap.sprites[0].kind, SpriteKind::Food);
        let enemy = snap.sprites[1];
        // Enemy stands left of the player, so it faces right
        assert_eq!(enemy.facing, Facing::Right);
        assert_eq!(snap.sprites[2].kind, SpriteKind::Player);
    }

    #[test]
    fn test_slash_overlay_follows_swing() {
        let mut state = playing();
        assert_eq!(FrameSnapshot::capture(&state).count(SpriteKind::Slash), 0);
        tick(
            &mut state,
            &TickInput {
                attack: true,
                now_ms: 16,
                ..Default::default()
            },
        );
        let snap = FrameSnapshot::capture(&state);
        assert_eq!(snap.count(SpriteKind::Slash), 1);
        let player = snap
            .sprites
            .iter()
            .find(|s| s.kind == SpriteKind::Player)
            .unwrap();
        assert_eq!(player.anim, AnimState::Attacking);
    }
}
