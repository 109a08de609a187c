//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (all gameplay timers count ticks)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies
//!
//! Wall-clock time enters only through `TickInput::now_ms` and only drives
//! sprite animation.

pub mod ability;
pub mod animation;
pub mod collision;
pub mod enemy;
pub mod events;
pub mod movement;
pub mod player;
pub mod progression;
pub mod projectile;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use ability::{Ability, AbilityKind, Arsenal};
pub use animation::{Animation, AnimationError, SheetLayout};
pub use enemy::{Enemy, EnemyTier};
pub use events::{DamageSource, GameEvent};
pub use movement::{Directions, move_toward};
pub use player::{AnimState, Facing, Player};
pub use progression::{xp_fraction, xp_needed};
pub use projectile::{Flail, Missile, ProjectileKind};
pub use rect::{Rect, SwingArc};
pub use state::{Food, GamePhase, GameState};
pub use tick::{TickInput, tick};
