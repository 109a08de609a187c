//! Clock providers and fixed-step pacing

use std::time::Instant;

use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS, TICK_MS};

/// Monotonic milliseconds since the clock started
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock backed by `Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock advanced by hand (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

/// Accumulator turning variable frame times into whole fixed ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
    last_ms: Option<u64>,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks to run this frame. Long frames are clamped so a
    /// stall never triggers a spiral of catch-up ticks.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        let dt = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.accumulator += dt.min(MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator >= TICK_MS && substeps < MAX_SUBSTEPS {
            self.accumulator -= TICK_MS;
            substeps += 1;
        }
        substeps
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        (self.accumulator / TICK_MS).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::default();
        clock.advance(40);
        clock.advance(2);
        assert_eq!(clock.now_ms(), 42);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }

    #[test]
    fn test_first_frame_runs_nothing() {
        let mut step = FixedStep::new();
        assert_eq!(step.advance(1000), 0);
    }

    #[test]
    fn test_accumulates_partial_frames() {
        let mut step = FixedStep::new();
        step.advance(0);
        assert_eq!(step.advance(10), 0);
        assert_eq!(step.advance(20), 1);
        assert_eq!(step.advance(60), 2);
        assert!(step.alpha() < 1.0);
    }

    #[test]
    fn test_long_frame_clamped() {
        let mut step = FixedStep::new();
        step.advance(0);
        // 5 seconds of stall only yields the 100ms cap worth of ticks
        let ticks = step.advance(5000);
        assert!((5..=6).contains(&ticks));
        assert!(ticks <= MAX_SUBSTEPS);
    }
}
