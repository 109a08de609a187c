//! Platform abstraction layer
//!
//! The simulation never polls a keyboard or reads a clock itself. Hosts
//! implement these providers and feed the results into `sim::tick`:
//! - Time: monotonic clock and fixed-step pacing
//! - Input: held keys and key-down edges

pub mod input;
pub mod time;

pub use input::{Key, KeyState};
pub use time::{Clock, FixedStep, ManualClock, SystemClock};
