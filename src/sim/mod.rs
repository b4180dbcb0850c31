//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed frame step only (60 Hz, velocities in pixels per frame)
//! - Seeded RNG only
//! - Stable iteration order (bricks in layout order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{intersect_circles, intersect_rect_circle};
pub use rect::Rect;
pub use state::{Ball, Brick, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
