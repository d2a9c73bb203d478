//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio, file or platform dependencies

pub mod apple;
pub mod collision;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::Apple;
pub use collision::{near_edge, out_of_bounds, overlaps};
pub use grid::{Direction, GridPosition, QUEUED_SEGMENT};
pub use snake::SnakeBody;
pub use state::{CrashReason, GameEvent, GameOver, GamePhase, GameState};
pub use tick::{TickInput, tick};
