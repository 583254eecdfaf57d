//! Snake on a 31px grid: eat fruit to grow, avoid the walls and your own tail

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT_I, SCREEN_WIDTH_I};
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Rect, TickInput, advance_phase, rect_rect,
};

/// Longest the snake can grow (head included)
pub const SNAKE_LENGTH: usize = 256;
pub const SQUARE_SIZE: i32 = 31;
/// The snake steps once every this many frames
const MOVE_PERIOD: u64 = 5;

/// Space left over after fitting whole squares into the field, split evenly
/// on both sides
fn grid_offset() -> Vec2 {
    Vec2::new(
        (SCREEN_WIDTH_I % SQUARE_SIZE) as f32,
        (SCREEN_HEIGHT_I % SQUARE_SIZE) as f32,
    )
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fruit {
    pub position: Vec2,
    /// Placed on the field; cleared when eaten so a new one is placed next frame
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    pub phase: GamePhase,
    rng: GameRng,
    /// Fixed segment storage, head first; only `..counter_tail` is live
    segments: Vec<Vec2>,
    counter_tail: usize,
    /// Head velocity in pixels per step
    pub speed: Vec2,
    /// One direction change per step
    pub allow_move: bool,
    pub fruit: Fruit,
    pub frames: u64,
}

impl Snake {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            segments: vec![Vec2::ZERO; SNAKE_LENGTH],
            counter_tail: 1,
            speed: Vec2::ZERO,
            allow_move: false,
            fruit: Fruit {
                position: Vec2::ZERO,
                active: false,
            },
            frames: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.frames = 0;
        self.allow_move = false;
        self.speed = Vec2::new(SQUARE_SIZE as f32, 0.0);
        self.segments.fill(Vec2::ZERO);
        self.segments[0] = grid_offset() / 2.0;
        self.counter_tail = 1;
        self.fruit.active = false;
    }

    /// Live segments, head first
    pub fn body(&self) -> &[Vec2] {
        &self.segments[..self.counter_tail]
    }

    /// Replace the live segments; anything past `SNAKE_LENGTH` is dropped
    pub fn set_body(&mut self, body: &[Vec2]) {
        let len = body.len().min(SNAKE_LENGTH);
        if len == 0 {
            return;
        }
        self.segments[..len].copy_from_slice(&body[..len]);
        self.counter_tail = len;
    }

    /// Pixel position of grid cell (`col`, `row`)
    pub fn cell(col: i32, row: i32) -> Vec2 {
        Vec2::new((col * SQUARE_SIZE) as f32, (row * SQUARE_SIZE) as f32) + grid_offset() / 2.0
    }

    fn update(&mut self, input: &TickInput) {
        self.steer(input);

        // Tail position before this frame's step, where a new segment grows
        let last = self.segments[self.counter_tail - 1];
        if self.frames % MOVE_PERIOD == 0 {
            for i in (1..self.counter_tail).rev() {
                self.segments[i] = self.segments[i - 1];
            }
            self.segments[0] += self.speed;
            self.allow_move = true;
        }

        let head = self.segments[0];
        let offset = grid_offset();
        let out_of_field = head.x > SCREEN_WIDTH_I as f32 - offset.x
            || head.y > SCREEN_HEIGHT_I as f32 - offset.y
            || head.x < 0.0
            || head.y < 0.0;
        let bit_itself = self.body()[1..].iter().any(|s| *s == head);
        if out_of_field || bit_itself {
            log::info!("snake: crashed at length {}", self.counter_tail);
            self.phase = GamePhase::GameOver;
        }

        if !self.fruit.active {
            self.place_fruit();
        }

        let square = SQUARE_SIZE as f32;
        let head_rect = Rect::new(head.x, head.y, square, square);
        let fruit_rect = Rect::new(self.fruit.position.x, self.fruit.position.y, square, square);
        if rect_rect(&head_rect, &fruit_rect) {
            if self.counter_tail < SNAKE_LENGTH {
                self.segments[self.counter_tail] = last;
                self.counter_tail += 1;
            } else {
                log::debug!("snake: already at full length");
            }
            self.fruit.active = false;
        }

        self.frames += 1;
    }

    /// Direction keys turn the head only across its current axis
    fn steer(&mut self, input: &TickInput) {
        let step = SQUARE_SIZE as f32;
        let turns = [
            (Key::Right, Vec2::new(step, 0.0)),
            (Key::Left, Vec2::new(-step, 0.0)),
            (Key::Up, Vec2::new(0.0, -step)),
            (Key::Down, Vec2::new(0.0, step)),
        ];
        for (key, speed) in turns {
            let perpendicular = if speed.x != 0.0 {
                self.speed.x == 0.0
            } else {
                self.speed.y == 0.0
            };
            if input.pressed(key) && perpendicular && self.allow_move {
                self.speed = speed;
                self.allow_move = false;
            }
        }
    }

    /// Random free cell; resample while it lands on any segment
    fn place_fruit(&mut self) {
        let cols = SCREEN_WIDTH_I / SQUARE_SIZE;
        let rows = SCREEN_HEIGHT_I / SQUARE_SIZE;
        loop {
            let pos = Self::cell(self.rng.value(0, cols - 1), self.rng.value(0, rows - 1));
            if !self.body().contains(&pos) {
                self.fruit.position = pos;
                break;
            }
        }
        self.fruit.active = true;
    }
}

impl Game for Snake {
    fn kind(&self) -> GameKind {
        GameKind::Snake
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

    /// Fruit eaten
    fn score(&self) -> u64 {
        (self.counter_tail - 1) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::KeyState;

    fn press(key: Key) -> TickInput {
        TickInput::new().with_key(key, KeyState::Pressed)
    }

    /// Fruit parked in the bottom-right cell, away from the action
    fn parked_fruit(game: &mut Snake) {
        game.fruit = Fruit {
            position: Snake::cell(24, 13),
            active: true,
        };
    }

    #[test]
    fn test_init() {
        let game = Snake::new(1);
        assert_eq!(game.body(), &[Vec2::new(12.5, 8.0)]);
        assert_eq!(game.speed, Vec2::new(31.0, 0.0));
        assert!(!game.fruit.active);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_moves_every_fifth_frame_starting_now() {
        let mut game = Snake::new(2);
        parked_fruit(&mut game);
        game.tick(&TickInput::new());
        assert_eq!(game.body()[0], Vec2::new(43.5, 8.0));
        for _ in 0..4 {
            game.tick(&TickInput::new());
        }
        assert_eq!(game.body()[0], Vec2::new(43.5, 8.0));
        game.tick(&TickInput::new());
        assert_eq!(game.body()[0], Vec2::new(74.5, 8.0));
    }

    #[test]
    fn test_one_perpendicular_turn_per_step() {
        let mut game = Snake::new(3);
        parked_fruit(&mut game);
        // Turning is locked until the first step
        game.tick(&press(Key::Down));
        assert_eq!(game.speed, Vec2::new(31.0, 0.0));

        // Reversing is never allowed
        game.tick(&press(Key::Left));
        assert_eq!(game.speed, Vec2::new(31.0, 0.0));

        game.tick(&press(Key::Down));
        assert_eq!(game.speed, Vec2::new(0.0, 31.0));
        game.tick(&press(Key::Right));
        assert_eq!(game.speed, Vec2::new(0.0, 31.0));

        game.tick(&TickInput::new());
        game.tick(&TickInput::new());
        assert_eq!(game.body()[0], Vec2::new(43.5, 39.0));
    }

    #[test]
    fn test_eating_grows_tail() {
        let mut game = Snake::new(4);
        game.fruit = Fruit {
            position: Snake::cell(1, 0),
            active: true,
        };
        game.tick(&TickInput::new());
        assert_eq!(game.body(), &[Snake::cell(1, 0), Snake::cell(0, 0)]);
        assert_eq!(game.score(), 1);
        assert!(!game.fruit.active);

        game.tick(&TickInput::new());
        assert!(game.fruit.active);
        assert!(!game.body().contains(&game.fruit.position));
    }

    #[test]
    fn test_segment_storage_never_resizes() {
        let mut game = Snake::new(7);
        game.fruit = Fruit {
            position: Snake::cell(1, 0),
            active: true,
        };
        assert_eq!(game.segments.len(), SNAKE_LENGTH);
        game.tick(&TickInput::new());
        assert_eq!(game.counter_tail, 2);
        assert_eq!(game.segments.len(), SNAKE_LENGTH);

        // A full-length snake stops growing
        let full: Vec<Vec2> = (0..SNAKE_LENGTH).map(|i| Vec2::new(i as f32, 500.0)).collect();
        game.set_body(&full);
        game.segments[0] = Snake::cell(5, 5);
        game.speed = Vec2::ZERO;
        game.fruit = Fruit {
            position: Snake::cell(5, 5),
            active: true,
        };
        game.frames = 1;
        game.tick(&TickInput::new());
        assert_eq!(game.counter_tail, SNAKE_LENGTH);
        assert_eq!(game.segments.len(), SNAKE_LENGTH);
    }

    #[test]
    fn test_fruit_lands_on_free_cell() {
        for seed in 0..5 {
            let mut game = Snake::new(seed);
            let rows: Vec<Vec2> = (0..8)
                .flat_map(|row| (0..25).map(move |col| Snake::cell(col, row)))
                .collect();
            game.set_body(&rows);
            // Off-step frame, nothing moves
            game.frames = 1;
            game.tick(&TickInput::new());
            assert_eq!(game.phase, GamePhase::Playing);
            assert!(game.fruit.active);
            assert!(game.fruit.position.y >= Snake::cell(0, 8).y);
        }
    }

    #[test]
    fn test_wall_ends_game() {
        let mut game = Snake::new(5);
        parked_fruit(&mut game);
        game.set_body(&[Snake::cell(24, 0)]);
        game.tick(&TickInput::new());
        assert_eq!(game.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_biting_own_tail_ends_game_and_restart() {
        let mut game = Snake::new(6);
        parked_fruit(&mut game);
        game.set_body(&[
            Snake::cell(1, 0),
            Snake::cell(2, 0),
            Snake::cell(2, 1),
            Snake::cell(1, 1),
            Snake::cell(0, 1),
        ]);
        game.speed = Vec2::new(0.0, 31.0);
        game.tick(&TickInput::new());
        assert_eq!(game.phase, GamePhase::GameOver);

        game.tick(&press(Key::Enter));
        assert_eq!(game.phase, GamePhase::Playing);
        assert_eq!(game.body().len(), 1);
        assert_eq!(game.counter_tail, 1);
    }
}
