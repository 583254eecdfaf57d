//! Host-facing session: one running game, its timestep runner and the
//! leaderboards shared by every game.

use crate::highscores::HighScores;
use crate::runner::FixedStepRunner;
use crate::settings::Settings;
use crate::sim::{Game, GameKind, GamePhase, TickInput};

pub struct Arcade {
    game: Box<dyn Game>,
    runner: FixedStepRunner,
    high_scores: HighScores,
    /// Phase after the last tick, to catch transitions
    last_phase: GamePhase,
    seed: u64,
    /// Ticks run since the session started
    ticks: u64,
}

impl Arcade {
    /// Start the settings' default game
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self::with_game(settings, settings.default_game, seed)
    }

    pub fn with_game(settings: &Settings, kind: GameKind, seed: u64) -> Self {
        log::info!("Starting {} (seed {})", kind.as_str(), seed);
        let game = kind.create(seed);
        let last_phase = game.phase();
        Self {
            game,
            runner: FixedStepRunner::from_settings(settings),
            high_scores: HighScores::new(settings.leaderboard_size),
            last_phase,
            seed,
            ticks: 0,
        }
    }

    pub fn game(&self) -> &dyn Game {
        self.game.as_ref()
    }

    pub fn kind(&self) -> GameKind {
        self.game.kind()
    }

    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    pub fn score(&self) -> u64 {
        self.game.score()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance by one host frame of `elapsed` seconds. Returns ticks run.
    pub fn frame(&mut self, elapsed: f32, input: &TickInput) -> u32 {
        let Self {
            game,
            runner,
            high_scores,
            last_phase,
            ticks,
            ..
        } = self;
        runner.advance(elapsed, input, |input| {
            game.tick(input);
            *ticks += 1;
            observe_phase(&**game, last_phase, high_scores);
        })
    }

    /// Exactly one tick, bypassing the runner
    pub fn step(&mut self, input: &TickInput) {
        self.game.tick(input);
        self.ticks += 1;
        observe_phase(self.game.as_ref(), &mut self.last_phase, &mut self.high_scores);
    }

    /// Replace the running game with a fresh `kind` session
    pub fn switch(&mut self, kind: GameKind) {
        log::info!("Switching from {} to {}", self.kind().as_str(), kind.as_str());
        self.game = kind.create(self.seed);
        self.last_phase = self.game.phase();
        self.runner.clear();
    }

    /// Reinitialise the running game regardless of its phase
    pub fn restart(&mut self) {
        log::info!("Restarting {}", self.kind().as_str());
        self.game.reset();
        self.last_phase = self.game.phase();
        self.runner.clear();
    }
}

/// Record the score once when the game enters GameOver or Victory
fn observe_phase(game: &dyn Game, last_phase: &mut GamePhase, high_scores: &mut HighScores) {
    let phase = game.phase();
    if phase == *last_phase {
        return;
    }
    if phase.is_terminal() && !last_phase.is_terminal() {
        let kind = game.kind();
        let score = game.score();
        match high_scores.record(kind, score) {
            Some(rank) => log::info!(
                "{} ended ({:?}) with {} points, rank #{}",
                kind.as_str(),
                phase,
                score,
                rank
            ),
            None => log::info!("{} ended ({:?}) with {} points", kind.as_str(), phase, score),
        }
    }
    *last_phase = phase;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::games::Invaders;
    use crate::sim::{Key, KeyState};

    fn arcade(kind: GameKind) -> Arcade {
        Arcade::with_game(&Settings::default(), kind, 1)
    }

    /// Snake run straight into the right wall: 25 steps of 5 frames
    fn crash_snake(arcade: &mut Arcade) {
        for _ in 0..200 {
            arcade.step(&TickInput::new());
            if arcade.phase() == GamePhase::GameOver {
                return;
            }
        }
        panic!("snake never reached the wall");
    }

    #[test]
    fn test_new_uses_default_game() {
        let settings = Settings {
            default_game: GameKind::Floppy,
            ..Settings::default()
        };
        let arcade = Arcade::new(&settings, 3);
        assert_eq!(arcade.kind(), GameKind::Floppy);
        assert_eq!(arcade.phase(), GamePhase::Playing);
        assert_eq!(arcade.high_scores().capacity(), 10);
    }

    #[test]
    fn test_frame_runs_fixed_ticks() {
        let mut arcade = arcade(GameKind::Tetris);
        assert_eq!(arcade.frame(SIM_DT * 0.5, &TickInput::new()), 0);
        assert_eq!(arcade.frame(SIM_DT * 0.5, &TickInput::new()), 1);
        assert_eq!(arcade.frame(1.0, &TickInput::new()), 8);
        assert_eq!(arcade.ticks(), 9);
    }

    #[test]
    fn test_game_over_is_recorded_once() {
        let mut arcade = arcade(GameKind::Snake);
        crash_snake(&mut arcade);
        let score = arcade.score();
        let entries = arcade.high_scores().entries(GameKind::Snake).to_vec();
        assert_eq!(entries.len(), usize::from(score > 0));

        // Idle terminal frames don't record again
        for _ in 0..10 {
            arcade.step(&TickInput::new());
        }
        assert_eq!(arcade.high_scores().entries(GameKind::Snake), entries.as_slice());
    }

    #[test]
    fn test_terminal_transition_records_score() {
        let mut scores = HighScores::new(5);
        let mut last = GamePhase::Playing;
        let mut game = Invaders::new(4);
        game.score = 300;
        game.phase = GamePhase::Victory;

        observe_phase(&game, &mut last, &mut scores);
        assert_eq!(last, GamePhase::Victory);
        assert_eq!(scores.best(GameKind::Invaders), Some(300));

        // Still terminal on the next tick
        observe_phase(&game, &mut last, &mut scores);
        assert_eq!(scores.entries(GameKind::Invaders), &[300]);

        // Pausing is not an ending
        let mut last = GamePhase::Playing;
        game.phase = GamePhase::Paused;
        observe_phase(&game, &mut last, &mut scores);
        assert_eq!(last, GamePhase::Paused);
        assert_eq!(scores.entries(GameKind::Invaders).len(), 1);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut arcade = arcade(GameKind::Snake);
        crash_snake(&mut arcade);
        arcade.step(&TickInput::new().with_key(Key::Enter, KeyState::Pressed));
        assert_eq!(arcade.phase(), GamePhase::Playing);
        assert_eq!(arcade.score(), 0);
        crash_snake(&mut arcade);
    }

    #[test]
    fn test_switch_and_restart() {
        let mut arcade = arcade(GameKind::Tetris);
        arcade.switch(GameKind::Snake);
        assert_eq!(arcade.kind(), GameKind::Snake);
        assert_eq!(arcade.game().phase(), GamePhase::Playing);

        crash_snake(&mut arcade);
        arcade.restart();
        assert_eq!(arcade.phase(), GamePhase::Playing);
        assert_eq!(arcade.score(), 0);
    }

    #[test]
    fn test_same_seed_same_session() {
        let settings = Settings::default();
        let input = TickInput::new().with_key(Key::Right, KeyState::Held);
        for kind in GameKind::ALL {
            let mut a = Arcade::with_game(&settings, kind, 99);
            let mut b = Arcade::with_game(&settings, kind, 99);
            for _ in 0..300 {
                a.step(&input);
                b.step(&input);
            }
            assert_eq!(a.phase(), b.phase(), "{}", kind.as_str());
            assert_eq!(a.score(), b.score(), "{}", kind.as_str());
        }
    }
}
