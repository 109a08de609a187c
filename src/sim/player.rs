//! The player character
//!
//! Position is simulated as a float center; the sprite rect and hitbox are
//! derived from it once per tick in [`Player::sync_bounds`].

use std::collections::BTreeSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ability::{Ability, AbilityKind, Arsenal};
use super::animation::{Animation, SheetLayout, TimedSprite};
use super::enemy::Enemy;
use super::movement::{Directions, clamp_to_screen, step_keys};
use super::rect::{Rect, SwingArc};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, SPRITE_HEIGHT, SPRITE_WIDTH};
use crate::tuning::{AbilityTuning, PlayerTuning};

/// Sheet frame counts and playback rates for the player's clips
const IDLE_FRAMES: u32 = 4;
const IDLE_FPS: f32 = 8.0;
const WALK_FRAMES: u32 = 6;
const WALK_FPS: f32 = 12.0;
const ATTACK_FRAMES: u32 = 6;
const ATTACK_FPS: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn direction(&self) -> Vec2 {
        match self {
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimState {
    #[default]
    Idle,
    Walking,
    Attacking,
}

/// One clip per animation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAnimations {
    pub idle: Animation,
    pub walk: Animation,
    pub attack: Animation,
}

impl PlayerAnimations {
    fn new(now_ms: u64) -> Self {
        Self {
            idle: Animation::new(SheetLayout::frames(IDLE_FRAMES), IDLE_FPS, true, now_ms),
            walk: Animation::new(SheetLayout::frames(WALK_FRAMES), WALK_FPS, true, now_ms),
            attack: Animation::new(SheetLayout::frames(ATTACK_FRAMES), ATTACK_FPS, false, now_ms),
        }
    }

    pub fn get(&self, state: AnimState) -> &Animation {
        match state {
            AnimState::Idle => &self.idle,
            AnimState::Walking => &self.walk,
            AnimState::Attacking => &self.attack,
        }
    }

    fn get_mut(&mut self, state: AnimState) -> &mut Animation {
        match state {
            AnimState::Idle => &mut self.idle,
            AnimState::Walking => &mut self.walk,
            AnimState::Attacking => &mut self.attack,
        }
    }
}

/// Melee swing: tick-counted arc window, wall-clock slash sprite, and the
/// enemies already damaged by this swing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Swing {
    /// Ticks the arc hitbox stays active (0 = inactive)
    pub arc_ticks: u32,
    pub hit: BTreeSet<u32>,
    pub slash: TimedSprite,
}

impl Swing {
    pub fn arc_active(&self) -> bool {
        self.arc_ticks > 0
    }
}

/// Outcome of the player's per-tick update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStep {
    pub swing_started: bool,
    pub swing_ended: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Sub-pixel center position
    pub pos: Vec2,
    pub rect: Rect,
    pub hitbox: Rect,
    hitbox_scale: (f32, f32),
    pub speed: f32,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    pub anim_state: AnimState,
    pub animations: PlayerAnimations,
    pub swing: Swing,
    /// Ticks until the next swing may start
    pub attack_cooldown: u32,
    /// Ticks of contact-damage immunity left
    pub damage_cooldown: u32,
    pub score: u64,
    pub level: u32,
    /// Cumulative XP
    pub xp: u32,
    pub abilities: Vec<Ability>,
    pub arsenal: Arsenal,
}

impl Player {
    /// Player at the screen center with full health
    pub fn new(tuning: &PlayerTuning, now_ms: u64) -> Self {
        let pos = Vec2::new(SCREEN_WIDTH as f32 / 2.0, SCREEN_HEIGHT as f32 / 2.0);
        let mut player = Self {
            pos,
            rect: Rect::new(0, 0, SPRITE_WIDTH, SPRITE_HEIGHT),
            hitbox: Rect::default(),
            hitbox_scale: tuning.hitbox_scale,
            speed: tuning.speed,
            health: tuning.max_health,
            max_health: tuning.max_health,
            facing: Facing::Right,
            anim_state: AnimState::Idle,
            animations: PlayerAnimations::new(now_ms),
            swing: Swing {
                arc_ticks: 0,
                hit: BTreeSet::new(),
                slash: TimedSprite::new(tuning.slash_frames, tuning.slash_duration_ms),
            },
            attack_cooldown: 0,
            damage_cooldown: 0,
            score: 0,
            level: 1,
            xp: 0,
            abilities: Vec::new(),
            arsenal: Arsenal::default(),
        };
        player.sync_bounds();
        player
    }

    pub fn center(&self) -> Vec2 {
        self.pos
    }

    /// Derive the integer rects from the float position
    pub fn sync_bounds(&mut self) {
        self.rect.set_center(self.pos);
        self.hitbox = self.rect.scale_by(self.hitbox_scale.0, self.hitbox_scale.1);
    }

    /// Timers, movement, attack trigger and animation state for one tick
    pub fn step(
        &mut self,
        keys: Directions,
        attack_pressed: bool,
        now_ms: u64,
        tuning: &PlayerTuning,
    ) -> PlayerStep {
        let mut out = PlayerStep::default();

        self.attack_cooldown = self.attack_cooldown.saturating_sub(1);
        self.damage_cooldown = self.damage_cooldown.saturating_sub(1);
        if self.swing.arc_active() {
            self.swing.arc_ticks -= 1;
            if !self.swing.arc_active() {
                self.swing.hit.clear();
                out.swing_ended = true;
            }
        }

        step_keys(&mut self.pos, keys, self.speed);
        // Right is applied last, so it wins when both are held
        if keys.left {
            self.facing = Facing::Left;
        }
        if keys.right {
            self.facing = Facing::Right;
        }
        let half = Vec2::new(SPRITE_WIDTH as f32, SPRITE_HEIGHT as f32) / 2.0;
        clamp_to_screen(&mut self.pos, half);
        self.sync_bounds();

        if attack_pressed && self.anim_state != AnimState::Attacking && self.attack_cooldown == 0 {
            self.start_swing(now_ms, tuning);
            out.swing_started = true;
        }

        self.swing.slash.update(now_ms);
        self.animations.get_mut(self.anim_state).update(now_ms);

        let moving = keys.any();
        let next = match self.anim_state {
            AnimState::Attacking if !self.animations.attack.finished => AnimState::Attacking,
            _ if moving => AnimState::Walking,
            _ => AnimState::Idle,
        };
        if next != self.anim_state {
            self.anim_state = next;
            self.animations.get_mut(next).reset(now_ms);
        }

        out
    }

    fn start_swing(&mut self, now_ms: u64, tuning: &PlayerTuning) {
        self.anim_state = AnimState::Attacking;
        self.animations.attack.reset(now_ms);
        self.swing.arc_ticks = tuning.arc_duration;
        self.swing.hit.clear();
        self.swing.slash.start(now_ms);
        self.attack_cooldown = tuning.attack_cooldown;
    }

    /// The active melee hitbox, if a swing is in its damage window
    pub fn melee_arc(&self, radius: f32) -> Option<SwingArc> {
        self.swing
            .arc_active()
            .then(|| SwingArc::new(self.pos, radius, self.facing.direction()))
    }

    /// Contact damage gated by the damage cooldown. Returns whether it landed.
    pub fn take_contact_damage(&mut self, amount: i32, cooldown: u32) -> bool {
        if self.damage_cooldown > 0 {
            return false;
        }
        self.health -= amount;
        self.damage_cooldown = cooldown;
        true
    }

    /// Heal without exceeding max health. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let restored = amount.clamp(0, (self.max_health - self.health).max(0));
        self.health += restored;
        restored
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn has_ability(&self, kind: AbilityKind) -> bool {
        self.abilities.iter().any(|a| a.name() == kind.name())
    }

    /// Add an ability unless one with the same name is already owned
    pub fn grant_ability(&mut self, kind: AbilityKind, tuning: &AbilityTuning) -> bool {
        if self.has_ability(kind) {
            return false;
        }
        self.abilities.push(Ability::new(kind, tuning));
        true
    }

    /// Count down, fire and re-arm every owned ability, then advance
    /// projectiles. Returns each fired ability with its projectile count.
    pub fn update_abilities(
        &mut self,
        enemies: &[Enemy],
        tuning: &AbilityTuning,
    ) -> Vec<(AbilityKind, usize)> {
        let origin = self.pos;
        let mut fired = Vec::new();
        for ability in &mut self.abilities {
            ability.update();
            if ability.ready() {
                let spawned = ability.kind.fire(origin, enemies, &mut self.arsenal, tuning);
                ability.start_cooldown();
                fired.push((ability.kind, spawned));
            }
        }
        self.arsenal.update(origin);
        fired
    }
}
