//! Coarse game phase shared by every game

use serde::{Deserialize, Serialize};

use super::input::{Key, TickInput};

/// Current game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Game is paused
    Paused,
    /// Run ended in a loss
    GameOver,
    /// Run ended in a win
    Victory,
}

impl GamePhase {
    /// Run is over, only a restart leaves this phase
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Victory)
    }
}

/// What the caller should do with the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStep {
    /// Simulate the frame
    Run,
    /// Skip simulation (paused or finished)
    Halted,
    /// Reinitialise the game from scratch
    Restart,
}

/// Apply the pause and restart keys to `phase`.
///
/// P toggles between Playing and Paused; the frame that unpauses runs. Enter
/// restarts a finished game. Everything else leaves the phase alone.
pub fn advance_phase(phase: &mut GamePhase, input: &TickInput) -> PhaseStep {
    match *phase {
        GamePhase::Playing => {
            if input.pressed(Key::P) {
                *phase = GamePhase::Paused;
                PhaseStep::Halted
            } else {
                PhaseStep::Run
            }
        }
        GamePhase::Paused => {
            if input.pressed(Key::P) {
                *phase = GamePhase::Playing;
                PhaseStep::Run
            } else {
                PhaseStep::Halted
            }
        }
        GamePhase::GameOver | GamePhase::Victory => {
            if input.pressed(Key::Enter) {
                PhaseStep::Restart
            } else {
                PhaseStep::Halted
            }
        }
    }
}
