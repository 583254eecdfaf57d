//! Floppy: keep the bird airborne through an endless row of tubes

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_HEIGHT_I;
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Rect, TickInput, advance_phase,
    circle_rect,
};

pub const MAX_TUBES: usize = 100;
pub const FLOPPY_RADIUS: f32 = 24.0;
pub const TUBES_WIDTH: f32 = 80.0;
const TUBE_HEIGHT: f32 = 255.0;
const TUBE_SPACING: f32 = 280.0;
const FIRST_TUBE_X: f32 = 400.0;
/// Gap between the top of the upper tube and the top of the lower one
const PAIR_SPAN: f32 = 600.0;
const TUBES_SPEED: f32 = 2.0;
const PASS_POINTS: u64 = 100;

/// Upper and lower tube sharing one x position
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TubePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Not yet passed (still worth points)
    pub active: bool,
}

impl TubePair {
    #[inline]
    pub fn x(&self) -> f32 {
        self.top.x
    }

    fn set_x(&mut self, x: f32) {
        self.top.x = x;
        self.bottom.x = x;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floppy {
    pub phase: GamePhase,
    rng: GameRng,
    pub bird: Vec2,
    pub tubes: Vec<TubePair>,
    pub score: u64,
}

impl Floppy {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            bird: Vec2::ZERO,
            tubes: Vec::with_capacity(MAX_TUBES),
            score: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.bird = Vec2::new(80.0, (SCREEN_HEIGHT_I / 2) as f32 - FLOPPY_RADIUS);
        self.score = 0;

        self.tubes.clear();
        for i in 0..MAX_TUBES {
            let x = FIRST_TUBE_X + TUBE_SPACING * i as f32;
            let y = -self.rng.value_f32(0, 120);
            self.tubes.push(TubePair {
                top: Rect::new(x, y, TUBES_WIDTH, TUBE_HEIGHT),
                bottom: Rect::new(x, PAIR_SPAN + y - TUBE_HEIGHT, TUBES_WIDTH, TUBE_HEIGHT),
                active: true,
            });
        }
    }

    fn update(&mut self, input: &TickInput) {
        for pair in self.tubes.iter_mut() {
            let x = pair.x() - TUBES_SPEED;
            pair.set_x(x);
        }

        if input.held(Key::Space) {
            self.bird.y -= 3.0;
        } else {
            self.bird.y += 1.0;
        }

        for pair in self.tubes.iter_mut() {
            if circle_rect(self.bird, FLOPPY_RADIUS, &pair.top)
                || circle_rect(self.bird, FLOPPY_RADIUS, &pair.bottom)
            {
                self.phase = GamePhase::GameOver;
            } else if pair.active && pair.x() < self.bird.x && self.phase == GamePhase::Playing {
                pair.active = false;
                self.score += PASS_POINTS;
            }
        }

        if self.phase == GamePhase::GameOver {
            log::info!("floppy: crashed with {} points", self.score);
        }
    }
}

impl Game for Floppy {
    fn kind(&self) -> GameKind {
        GameKind::Floppy
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
        self.score
    }
}
