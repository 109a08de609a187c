//! Projectiles spawned by passive abilities
//!
//! Bolts and axes fly straight and age out; flails orbit the player until
//! cleared.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::polar_to_cartesian;
use crate::tuning::AbilityTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    Bolt,
    Axe,
    Flail,
}

/// Straight-line projectile (bolts and axes)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Missile {
    pub kind: ProjectileKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: u32,
    pub max_age: u32,
    pub damage: i32,
    pub rect: Rect,
    /// Set when the missile hits something; pruned at tick end
    pub spent: bool,
}

impl Missile {
    fn new(kind: ProjectileKind, pos: Vec2, vel: Vec2, max_age: u32, damage: i32, size: i32) -> Self {
        Self {
            kind,
            pos,
            vel,
            age: 0,
            max_age,
            damage,
            rect: Rect::from_center(pos, size, size),
            spent: false,
        }
    }

    /// Bolt aimed at the target's position at fire time (no leading)
    pub fn bolt(origin: Vec2, target: Vec2, tuning: &AbilityTuning) -> Self {
        let dir = (target - origin).normalize_or_zero();
        Self::new(
            ProjectileKind::Bolt,
            origin,
            dir * tuning.bolt_speed,
            tuning.bolt_max_age,
            tuning.bolt_damage,
            tuning.projectile_size,
        )
    }

    /// Vertical axe; `up` selects direction (screen y grows downward)
    pub fn axe(origin: Vec2, up: bool, tuning: &AbilityTuning) -> Self {
        let dir = if up { Vec2::NEG_Y } else { Vec2::Y };
        Self::new(
            ProjectileKind::Axe,
            origin,
            dir * tuning.axe_speed,
            tuning.axe_max_age,
            tuning.axe_damage,
            tuning.projectile_size,
        )
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.age += 1;
        self.rect.set_center(self.pos);
    }

    pub fn off_screen(&self) -> bool {
        self.rect.right() < 0
            || self.rect.left() > SCREEN_WIDTH
            || self.rect.bottom() < 0
            || self.rect.top() > SCREEN_HEIGHT
    }

    /// True once the missile should be removed
    pub fn expired(&self) -> bool {
        self.spent || self.age >= self.max_age || self.off_screen()
    }
}

/// Projectile orbiting the player at a fixed radius
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flail {
    /// Orbit angle (radians)
    pub angle: f32,
    pub radius: f32,
    /// Radians per tick
    pub angular_speed: f32,
    pub damage: i32,
    pub pos: Vec2,
    pub rect: Rect,
    /// Ticks until the flail may hit again
    pub hit_cooldown: u32,
    pub hit_cooldown_max: u32,
}

impl Flail {
    pub fn new(owner_center: Vec2, tuning: &AbilityTuning) -> Self {
        let mut flail = Self {
            angle: 0.0,
            radius: tuning.flail_radius,
            angular_speed: tuning.flail_angular_speed,
            damage: tuning.flail_damage,
            pos: owner_center,
            rect: Rect::new(0, 0, tuning.projectile_size, tuning.projectile_size),
            hit_cooldown: 0,
            hit_cooldown_max: tuning.flail_hit_cooldown,
        };
        flail.place(owner_center);
        flail
    }

    fn place(&mut self, owner_center: Vec2) {
        self.pos = owner_center + polar_to_cartesian(self.radius, self.angle);
        self.rect.set_center(self.pos);
    }

    /// Advance the orbit around the owner's current center
    pub fn update(&mut self, owner_center: Vec2) {
        self.angle = crate::normalize_angle(self.angle + self.angular_speed);
        self.hit_cooldown = self.hit_cooldown.saturating_sub(1);
        self.place(owner_center);
    }

    pub fn can_hit(&self) -> bool {
        self.hit_cooldown == 0
    }

    pub fn register_hit(&mut self) {
        self.hit_cooldown = self.hit_cooldown_max;
    }
}
