//! Deterministic simulation module
//!
//! The building blocks every game is made of. This module must be pure and deterministic:
//! - One tick is one logical frame
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering or platform dependencies

pub mod collision;
pub mod game;
pub mod input;
pub mod phase;
pub mod pool;
pub mod rng;

pub use collision::{Rect, circle_circle, circle_rect, point_in_circle, point_in_rect, rect_rect};
pub use game::{Game, GameKind};
pub use input::{Key, KeyState, MouseButton, TickInput};
pub use phase::{GamePhase, PhaseStep, advance_phase};
pub use pool::{Pool, Slot};
pub use rng::GameRng;
