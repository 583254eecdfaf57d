//! Asteroids Survival: no gun, stay alive among the meteors as long as possible

use serde::{Deserialize, Serialize};

use super::ship::{COLLIDER_RADIUS, Meteor, Ship};
use crate::consts::TICK_RATE_HZ;
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, PhaseStep, Pool, TickInput, advance_phase, circle_circle,
};

pub const MAX_MEDIUM_METEORS: usize = 8;
pub const MAX_SMALL_METEORS: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsteroidsSurvival {
    pub phase: GamePhase,
    rng: GameRng,
    pub ship: Ship,
    pub medium: Pool<Meteor>,
    pub small: Pool<Meteor>,
    /// Frames survived this run
    pub frames: u64,
}

impl AsteroidsSurvival {
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let medium = Pool::new_active(MAX_MEDIUM_METEORS, |_| Meteor::random(&mut rng, 20.0));
        let small = Pool::new_active(MAX_SMALL_METEORS, |_| Meteor::random(&mut rng, 10.0));
        Self {
            phase: GamePhase::Playing,
            rng,
            ship: Ship::new(),
            medium,
            small,
            frames: 0,
        }
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.ship = Ship::new();
        self.frames = 0;

        let rng = &mut self.rng;
        self.medium = Pool::new_active(MAX_MEDIUM_METEORS, |_| Meteor::random(rng, 20.0));
        self.small = Pool::new_active(MAX_SMALL_METEORS, |_| Meteor::random(rng, 10.0));
    }

    fn update(&mut self, input: &TickInput) {
        self.frames += 1;

        self.ship.steer(input);
        self.ship.update_collider();

        let collider = self.ship.collider;
        let hit = [&self.medium, &self.small].iter().any(|pool| {
            pool.any_active(|m| circle_circle(collider, COLLIDER_RADIUS, m.position, m.radius))
        });

        for m in self
            .medium
            .iter_active_mut()
            .chain(self.small.iter_active_mut())
        {
            m.advance();
        }

        if hit {
            log::info!(
                "asteroids-survival: hit after {:.2}s",
                self.seconds_survived()
            );
            self.phase = GamePhase::GameOver;
        }
    }

    /// Survival time in seconds at the nominal frame rate
    pub fn seconds_survived(&self) -> f32 {
        self.frames as f32 / TICK_RATE_HZ as f32
    }
}

impl Game for AsteroidsSurvival {
    fn kind(&self) -> GameKind {
        GameKind::AsteroidsSurvival
    }

    fn reset(&mut self) {
        self.init();
    }

    fn tick(&mut self, input: &TickInput) {
        match advance_phase(&mut self.phase, input) {
            PhaseStep::Run => self.update(input),
            PhaseStep::Halted => {}
            PhaseStep::Restart => self.init(),
        }
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn score(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Key, KeyState};
    use glam::Vec2;

    #[test]
    fn test_all_meteors_start_active() {
        let game = AsteroidsSurvival::new(1);
        assert_eq!(game.medium.active_count(), MAX_MEDIUM_METEORS);
        assert_eq!(game.small.active_count(), MAX_SMALL_METEORS);
        assert_eq!(game.frames, 0);
    }

    #[test]
    fn test_frames_count_while_playing_only() {
        let mut game = AsteroidsSurvival::new(2);
        for m in game.medium.iter_mut().chain(game.small.iter_mut()) {
            m.speed = Vec2::ZERO;
            m.position = Vec2::new(-100.0, -100.0);
        }
        for _ in 0..120 {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.frames, 120);
        assert!((game.seconds_survived() - 2.0).abs() < 1e-6);

        let pause = TickInput::new().with_key(Key::P, KeyState::Pressed);
        game.tick(&pause);
        // Holding P keeps the game paused rather than toggling every frame
        let hold = TickInput::new().with_key(Key::P, KeyState::Held);
        for _ in 0..10 {
            game.tick(&hold);
        }
        assert_eq!(game.phase, GamePhase::Paused);
        assert_eq!(game.frames, 120);
    }

    #[test]
    fn test_collision_ends_run_and_restart_resets() {
        let mut game = AsteroidsSurvival::new(3);
        game.ship.update_collider();
        game.small[0].position = game.ship.collider;
        game.small[0].speed = Vec2::ZERO;
        game.tick(&TickInput::new());
        assert_eq!(game.phase, GamePhase::GameOver);
        let score = game.score();
        assert!(score >= 1);

        game.tick(&TickInput::new());
        assert_eq!(game.score(), score);

        game.tick(&TickInput::new().with_key(Key::Enter, KeyState::Pressed));
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.small.active_count(), MAX_SMALL_METEORS);
    }
}
