//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{WallHit, deflect_off_paddle, paddle_contact, reflect_off_walls};
pub use state::{Ball, GameEvent, GameState, Paddle, Score, Side};
pub use tick::{TickInput, tick};
