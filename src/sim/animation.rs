//! Sprite animation clips
//!
//! Clips advance on wall-clock milliseconds, not ticks, so playback speed
//! is independent of the simulation rate. Gameplay never reads a clip's
//! timing except for the attack clip's `finished` flag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SPRITE_HEIGHT, SPRITE_WIDTH};

#[derive(Debug, Error, PartialEq)]
pub enum AnimationError {
    #[error("sprite sheet has no frames")]
    NoFrames,
    #[error("sprite sheet too narrow: expected {expected}px, got {actual}px")]
    TooNarrow { expected: i32, actual: i32 },
    #[error("sprite sheet height must be {expected}px, got {actual}px")]
    WrongHeight { expected: i32, actual: i32 },
    #[error("playback speed must be positive, got {0}")]
    BadSpeed(f32),
}

/// Validated layout of a single-row sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub frame_count: u32,
}

impl SheetLayout {
    pub fn new(frame_count: u32, sheet_width: i32, sheet_height: i32) -> Result<Self, AnimationError> {
        if frame_count == 0 {
            return Err(AnimationError::NoFrames);
        }
        let expected = frame_count as i32 * SPRITE_WIDTH;
        if sheet_width < expected {
            return Err(AnimationError::TooNarrow {
                expected,
                actual: sheet_width,
            });
        }
        if sheet_height != SPRITE_HEIGHT {
            return Err(AnimationError::WrongHeight {
                expected: SPRITE_HEIGHT,
                actual: sheet_height,
            });
        }
        Ok(Self { frame_count })
    }

    /// Layout for a sheet whose frame count is known to be non-zero
    pub(crate) fn frames(frame_count: u32) -> Self {
        Self {
            frame_count: frame_count.max(1),
        }
    }
}

/// Playback state of one clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    pub layout: SheetLayout,
    pub base_fps: f32,
    pub speed_multiplier: f32,
    pub frame_delay_ms: u64,
    pub looping: bool,
    pub current_frame: u32,
    pub last_update_ms: u64,
    pub finished: bool,
}

impl Animation {
    pub fn new(layout: SheetLayout, base_fps: f32, looping: bool, now_ms: u64) -> Self {
        Self {
            layout,
            base_fps,
            speed_multiplier: 1.0,
            frame_delay_ms: frame_delay(base_fps, 1.0),
            looping,
            current_frame: 0,
            last_update_ms: now_ms,
            finished: false,
        }
    }

    /// Advance at most one frame
    pub fn update(&mut self, now_ms: u64) {
        if self.finished {
            return;
        }
        if now_ms.saturating_sub(self.last_update_ms) > self.frame_delay_ms {
            self.last_update_ms = now_ms;
            self.current_frame += 1;
            if self.current_frame >= self.layout.frame_count {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.layout.frame_count - 1;
                    self.finished = true;
                }
            }
        }
    }

    pub fn reset(&mut self, now_ms: u64) {
        self.current_frame = 0;
        self.finished = false;
        self.last_update_ms = now_ms;
    }

    pub fn set_speed(&mut self, multiplier: f32) -> Result<(), AnimationError> {
        if multiplier <= 0.0 {
            return Err(AnimationError::BadSpeed(multiplier));
        }
        self.speed_multiplier = multiplier;
        self.frame_delay_ms = frame_delay(self.base_fps, multiplier);
        Ok(())
    }

    /// Effective playback rate
    pub fn fps(&self) -> f32 {
        1000.0 / self.frame_delay_ms.max(1) as f32
    }
}

fn frame_delay(fps: f32, multiplier: f32) -> u64 {
    (1000.0 / (fps * multiplier)) as u64
}

/// One-shot sprite timed over a fixed window (the slash effect)
///
/// The frame is derived from elapsed time rather than stepped, so it always
/// spans the full sheet across `duration_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimedSprite {
    pub frames: u32,
    pub duration_ms: u64,
    pub start_ms: u64,
    pub frame: u32,
    pub active: bool,
}

impl TimedSprite {
    pub fn new(frames: u32, duration_ms: u64) -> Self {
        Self {
            frames: frames.max(1),
            duration_ms,
            start_ms: 0,
            frame: 0,
            active: false,
        }
    }

    pub fn start(&mut self, now_ms: u64) {
        if !self.active {
            self.active = true;
            self.start_ms = now_ms;
            self.frame = 0;
        }
    }

    pub fn update(&mut self, now_ms: u64) {
        if !self.active {
            return;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let frame = elapsed * self.frames as u64 / self.duration_ms.max(1);
        self.frame = (frame as u32).min(self.frames - 1);
        if elapsed >= self.duration_ms {
            self.active = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_validation() {
        assert!(SheetLayout::new(4, 512, 128).is_ok());
        assert_eq!(SheetLayout::new(0, 512, 128), Err(AnimationError::NoFrames));
        assert_eq!(
            SheetLayout::new(4, 500, 128),
            Err(AnimationError::TooNarrow { expected: 512, actual: 500 })
        );
        assert_eq!(
            SheetLayout::new(4, 512, 64),
            Err(AnimationError::WrongHeight { expected: 128, actual: 64 })
        );
    }

    #[test]
    fn test_frame_delay_from_fps() {
        let anim = Animation::new(SheetLayout::frames(4), 12.0, true, 0);
        assert_eq!(anim.frame_delay_ms, 83);
    }

    #[test]
    fn test_looping_wraps() {
        let mut anim = Animation::new(SheetLayout::frames(3), 10.0, true, 0);
        let mut now = 0;
        for _ in 0..3 {
            now += 101;
            anim.update(now);
        }
        assert_eq!(anim.current_frame, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_one_shot_finishes_on_last_frame() {
        let mut anim = Animation::new(SheetLayout::frames(3), 10.0, false, 0);
        let mut now = 0;
        for _ in 0..5 {
            now += 101;
            anim.update(now);
        }
        assert_eq!(anim.current_frame, 2);
        assert!(anim.finished);

        anim.reset(now);
        assert_eq!(anim.current_frame, 0);
        assert!(!anim.finished);
    }

    #[test]
    fn test_no_advance_before_delay() {
        let mut anim = Animation::new(SheetLayout::frames(3), 10.0, false, 0);
        anim.update(100);
        assert_eq!(anim.current_frame, 0);
        anim.update(101);
        assert_eq!(anim.current_frame, 1);
    }

    #[test]
    fn test_set_speed() {
        let mut anim = Animation::new(SheetLayout::frames(3), 10.0, true, 0);
        anim.set_speed(2.0).unwrap();
        assert_eq!(anim.frame_delay_ms, 50);
        assert!((anim.fps() - 20.0).abs() < 1e-3);
        assert!(anim.set_speed(0.0).is_err());
    }

    #[test]
    fn test_timed_sprite_spans_duration() {
        let mut slash = TimedSprite::new(9, 270);
        slash.start(1000);
        slash.update(1000);
        assert_eq!(slash.frame, 0);
        slash.update(1150);
        assert_eq!(slash.frame, 5);
        slash.update(1269);
        assert_eq!(slash.frame, 8);
        assert!(slash.active);
        slash.update(1270);
        assert!(!slash.active);
    }
}
