//! Entity movement rules
//!
//! Enemies only ever seek; the player steps per held key and is clamped to
//! the screen.

use glam::Vec2;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Held direction keys for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Advance `pos` by `speed` toward `target`. Zero distance is a no-op.
///
/// Overshoot is allowed; seekers jitter around a target closer than
/// `speed`.
pub fn move_toward(pos: &mut Vec2, target: Vec2, speed: f32) {
    let delta = target - *pos;
    let distance = delta.length();
    if distance > 0.0 {
        *pos += delta / distance * speed;
    }
}

/// Per-axis key stepping. Diagonals are not normalized, so two held keys
/// move faster than one.
pub fn step_keys(pos: &mut Vec2, keys: Directions, speed: f32) {
    if keys.right {
        pos.x += speed;
    }
    if keys.left {
        pos.x -= speed;
    }
    if keys.down {
        pos.y += speed;
    }
    if keys.up {
        pos.y -= speed;
    }
}

/// Clamp a center position so a sprite of `half_extent` stays on screen
pub fn clamp_to_screen(pos: &mut Vec2, half_extent: Vec2) {
    let max = Vec2::new(SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32) - half_extent;
    *pos = pos.clamp(half_extent, max.max(half_extent));
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_toward_unit_step() {
        let mut pos = Vec2::ZERO;
        move_toward(&mut pos, Vec2::new(30.0, 40.0), 5.0);
        assert!((pos - Vec2::new(3.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_diagonal_is_faster() {
        let mut straight = Vec2::ZERO;
        step_keys(&mut straight, Directions { right: true, ..Default::default() }, 3.0);
        let mut diagonal = Vec2::ZERO;
        step_keys(
            &mut diagonal,
            Directions { right: true, up: true, ..Default::default() },
            3.0,
        );
        assert!(diagonal.length() > straight.length());
        assert_eq!(diagonal, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut pos = Vec2::new(10.0, 10.0);
        step_keys(
            &mut pos,
            Directions { left: true, right: true, up: true, down: true },
            3.0,
        );
        assert_eq!(pos, Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_clamp_keeps_sprite_on_screen() {
        let half = Vec2::new(64.0, 64.0);
        let mut pos = Vec2::new(-50.0, 5000.0);
        clamp_to_screen(&mut pos, half);
        assert_eq!(pos, Vec2::new(64.0, SCREEN_HEIGHT as f32 - 64.0));
    }

    proptest! {
        #[test]
        fn prop_move_toward_self_is_noop(x in -2000.0f32..2000.0, y in -2000.0f32..2000.0, speed in 0.0f32..50.0) {
            let mut pos = Vec2::new(x, y);
            move_toward(&mut pos, Vec2::new(x, y), speed);
            prop_assert_eq!(pos, Vec2::new(x, y));
            prop_assert!(pos.is_finite());
        }

        #[test]
        fn prop_move_toward_travels_speed(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            tx in -500.0f32..500.0, ty in -500.0f32..500.0,
            speed in 0.1f32..10.0,
        ) {
            let start = Vec2::new(x, y);
            let target = Vec2::new(tx, ty);
            prop_assume!(start.distance(target) > 1.0);
            let mut pos = start;
            move_toward(&mut pos, target, speed);
            prop_assert!((pos.distance(start) - speed).abs() < 1e-3);
        }
    }
}
