//! Arcade Sim - deterministic cores for classic 2D arcade games
//!
//! Core modules:
//! - `sim`: Shared simulation building blocks (input, RNG, pools, collisions, phases)
//! - `games`: One self-contained simulation per game
//! - `runner`: Fixed timestep driver for host loops
//! - `arcade`: Host-facing session (game + runner + high scores)
//! - `settings`: JSON configuration

pub mod arcade;
pub mod games;
pub mod highscores;
pub mod runner;
pub mod settings;
pub mod sim;

pub use arcade::Arcade;
pub use highscores::HighScores;
pub use runner::FixedStepRunner;
pub use settings::{Settings, SettingsError};
pub use sim::{Game, GameKind, GamePhase, TickInput};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical frame rate every tuned constant assumes
    pub const TICK_RATE_HZ: u32 = 60;
    /// Default fixed simulation timestep (one tick = one frame)
    pub const SIM_DT: f32 = 1.0 / TICK_RATE_HZ as f32;
    /// Maximum substeps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions shared by every game
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;
    /// Integer views of the play field (several games do integer layout math)
    pub const SCREEN_WIDTH_I: i32 = 800;
    pub const SCREEN_HEIGHT_I: i32 = 450;
}

/// Unit direction for a heading in degrees, with 0° pointing up the screen.
///
/// Returns `(sin, cos)` so callers can write `x += sin * speed`, `y -= cos * speed`.
#[inline]
pub fn heading(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.sin(), rad.cos())
}

/// Distance from the ship's center to its nose for the isosceles ship triangle
/// (base angles of 70 degrees).
#[inline]
pub fn ship_height(base_size: f32) -> f32 {
    (base_size / 2.0) / 20.0_f32.to_radians().tan()
}
