//! The game collection
//!
//! Each module is one self-contained simulation: its own state struct, an
//! init that builds a fresh session, and a per-frame update. They share only
//! the building blocks in [`crate::sim`].

pub mod arkanoid;
pub mod asteroids;
pub mod asteroids_survival;
pub mod commander;
pub mod floppy;
pub mod gold_fever;
pub mod gorilas;
pub mod invaders;
pub mod pang;
pub mod snake;
pub mod tetris;

mod ship;

pub use arkanoid::Arkanoid;
pub use asteroids::Asteroids;
pub use asteroids_survival::AsteroidsSurvival;
pub use commander::Commander;
pub use floppy::Floppy;
pub use gold_fever::GoldFever;
pub use gorilas::Gorilas;
pub use invaders::Invaders;
pub use pang::Pang;
pub use snake::Snake;
pub use tetris::Tetris;
