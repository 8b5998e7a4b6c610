//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Bounded delta-time only (clamped in `tick`)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::circle_rect_hit;
pub use input::{InputState, Steering};
pub use rect::Rect;
pub use state::{GamePhase, GameState, Hazard, HazardKind, Player, SimClock};
pub use tick::{TickInput, tick};
