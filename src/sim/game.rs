//! Game lifecycle trait and the registry of available games

use serde::{Deserialize, Serialize};

use super::input::TickInput;
use super::phase::GamePhase;
use crate::games::{
    Arkanoid, Asteroids, AsteroidsSurvival, Commander, Floppy, GoldFever, Gorilas, Invaders, Pang,
    Snake, Tetris,
};

/// One self-contained game simulation.
///
/// `reset` reinitialises the session; `tick` advances exactly one logical
/// frame and never fails. Pause and restart keys are handled inside `tick`.
pub trait Game {
    fn kind(&self) -> GameKind;

    /// Reinitialise every counter and entity (the RNG stream continues)
    fn reset(&mut self);

    /// Advance one frame with the given input snapshot
    fn tick(&mut self, input: &TickInput);

    fn phase(&self) -> GamePhase;

    /// Score used for the high-score table
    fn score(&self) -> u64;
}

/// Every game in the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameKind {
    Arkanoid,
    Asteroids,
    AsteroidsSurvival,
    Commander,
    Floppy,
    GoldFever,
    Gorilas,
    Invaders,
    Pang,
    Snake,
    #[default]
    Tetris,
}

impl GameKind {
    pub const ALL: [GameKind; 11] = [
        GameKind::Arkanoid,
        GameKind::Asteroids,
        GameKind::AsteroidsSurvival,
        GameKind::Commander,
        GameKind::Floppy,
        GameKind::GoldFever,
        GameKind::Gorilas,
        GameKind::Invaders,
        GameKind::Pang,
        GameKind::Snake,
        GameKind::Tetris,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Arkanoid => "arkanoid",
            GameKind::Asteroids => "asteroids",
            GameKind::AsteroidsSurvival => "asteroids-survival",
            GameKind::Commander => "commander",
            GameKind::Floppy => "floppy",
            GameKind::GoldFever => "gold-fever",
            GameKind::Gorilas => "gorilas",
            GameKind::Invaders => "invaders",
            GameKind::Pang => "pang",
            GameKind::Snake => "snake",
            GameKind::Tetris => "tetris",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "arkanoid" => Some(GameKind::Arkanoid),
            "asteroids" => Some(GameKind::Asteroids),
            "asteroids-survival" | "survival" => Some(GameKind::AsteroidsSurvival),
            "commander" | "missile-commander" => Some(GameKind::Commander),
            "floppy" => Some(GameKind::Floppy),
            "gold-fever" | "goldfever" => Some(GameKind::GoldFever),
            "gorilas" => Some(GameKind::Gorilas),
            "invaders" => Some(GameKind::Invaders),
            "pang" => Some(GameKind::Pang),
            "snake" => Some(GameKind::Snake),
            "tetris" => Some(GameKind::Tetris),
            _ => None,
        }
    }

    /// Build a fresh session of this game
    pub fn create(self, seed: u64) -> Box<dyn Game> {
        match self {
            GameKind::Arkanoid => Box::new(Arkanoid::new()),
            GameKind::Asteroids => Box::new(Asteroids::new(seed)),
            GameKind::AsteroidsSurvival => Box::new(AsteroidsSurvival::new(seed)),
            GameKind::Commander => Box::new(Commander::new(seed)),
            GameKind::Floppy => Box::new(Floppy::new(seed)),
            GameKind::GoldFever => Box::new(GoldFever::new(seed)),
            GameKind::Gorilas => Box::new(Gorilas::new(seed)),
            GameKind::Invaders => Box::new(Invaders::new(seed)),
            GameKind::Pang => Box::new(Pang::new(seed)),
            GameKind::Snake => Box::new(Snake::new(seed)),
            GameKind::Tetris => Box::new(Tetris::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::{Key, KeyState};

    #[test]
    fn test_names_round_trip() {
        for kind in GameKind::ALL {
            assert_eq!(GameKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(GameKind::from_str("Gold_Fever"), Some(GameKind::GoldFever));
        assert_eq!(GameKind::from_str("pong"), None);
    }

    #[test]
    fn test_create_every_game() {
        for kind in GameKind::ALL {
            let mut game = kind.create(7);
            assert_eq!(game.kind(), kind);
            assert_eq!(game.phase(), GamePhase::Playing);
            assert_eq!(game.score(), 0);

            // A few idle frames never panic
            for _ in 0..120 {
                game.tick(&TickInput::new());
            }
        }
    }

    #[test]
    fn test_every_game_pauses() {
        let pause = TickInput::new().with_key(Key::P, KeyState::Pressed);
        for kind in GameKind::ALL {
            let mut game = kind.create(11);
            game.tick(&pause);
            assert_eq!(game.phase(), GamePhase::Paused, "{}", kind.as_str());
            game.tick(&pause);
            assert_ne!(game.phase(), GamePhase::Paused, "{}", kind.as_str());
        }
    }
}
