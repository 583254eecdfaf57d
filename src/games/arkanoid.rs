//! Arkanoid: paddle, one ball and a wall of bricks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH};
use crate::impl_slot;
use crate::sim::{
    Game, GameKind, GamePhase, Key, PhaseStep, Pool, Rect, TickInput, advance_phase, circle_rect,
};

pub const PLAYER_MAX_LIFE: i32 = 5;
pub const LINES_OF_BRICKS: usize = 5;
pub const BRICKS_PER_LINE: usize = 20;
pub const BALL_RADIUS: i32 = 7;

const BRICK_SIZE: Vec2 = Vec2::new(SCREEN_WIDTH / BRICKS_PER_LINE as f32, 40.0);
const BRICKS_TOP: f32 = 50.0;
/// Integer layout math: 450 * 7 / 8 = 393
const PADDLE_Y: f32 = (SCREEN_HEIGHT_I * 7 / 8) as f32;
const BALL_REST_Y: f32 = PADDLE_Y - 30.0;
const PADDLE_STEP: f32 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Centre of the paddle
    pub position: Vec2,
    pub size: Vec2,
    pub life: i32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::centered(self.position, self.size.x, self.size.y)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub speed: Vec2,
    pub radius: i32,
    /// Launched and moving; otherwise it rides on the paddle
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    /// Centre of the brick
    pub position: Vec2,
    pub active: bool,
}

impl_slot!(Brick);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arkanoid {
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major grid, `LINES_OF_BRICKS` rows of `BRICKS_PER_LINE`
    pub bricks: Pool<Brick>,
    pub bricks_destroyed: u32,
}

impl Arkanoid {
    pub fn new() -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            paddle: Paddle {
                position: Vec2::ZERO,
                size: Vec2::ZERO,
                life: 0,
            },
            ball: Ball {
                position: Vec2::ZERO,
                speed: Vec2::ZERO,
                radius: BALL_RADIUS,
                active: false,
            },
            bricks: Pool::new(0, |_| Brick {
                position: Vec2::ZERO,
                active: false,
            }),
            bricks_destroyed: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.paddle = Paddle {
            position: Vec2::new(SCREEN_WIDTH / 2.0, PADDLE_Y),
            size: Vec2::new(SCREEN_WIDTH / 10.0, 20.0),
            life: PLAYER_MAX_LIFE,
        };
        self.ball = Ball {
            position: Vec2::new(SCREEN_WIDTH / 2.0, BALL_REST_Y),
            speed: Vec2::ZERO,
            radius: BALL_RADIUS,
            active: false,
        };
        self.bricks = Pool::new_active(LINES_OF_BRICKS * BRICKS_PER_LINE, |idx| {
            let (i, j) = (idx / BRICKS_PER_LINE, idx % BRICKS_PER_LINE);
            Brick {
                position: Vec2::new(
                    j as f32 * BRICK_SIZE.x + BRICK_SIZE.x / 2.0,
                    i as f32 * BRICK_SIZE.y + BRICKS_TOP,
                ),
                active: true,
            }
        });
        self.bricks_destroyed = 0;
    }

    fn update(&mut self, input: &TickInput) {
        let half_w = self.paddle.size.x / 2.0;
        if input.held(Key::Left) {
            self.paddle.position.x -= PADDLE_STEP;
        }
        if self.paddle.position.x - half_w <= 0.0 {
            self.paddle.position.x = half_w;
        }
        if input.held(Key::Right) {
            self.paddle.position.x += PADDLE_STEP;
        }
        if self.paddle.position.x + half_w >= SCREEN_WIDTH {
            self.paddle.position.x = SCREEN_WIDTH - half_w;
        }

        if !self.ball.active && input.pressed(Key::Space) {
            self.ball.active = true;
            self.ball.speed = Vec2::new(0.0, -5.0);
        }

        if self.ball.active {
            self.ball.position += self.ball.speed;
        } else {
            self.ball.position = Vec2::new(self.paddle.position.x, BALL_REST_Y);
        }

        self.collide_walls();
        self.collide_paddle();
        self.collide_bricks();

        if self.paddle.life <= 0 {
            log::info!("arkanoid: out of lives, {} bricks destroyed", self.bricks_destroyed);
            self.phase = GamePhase::GameOver;
        } else if self.bricks.active_count() == 0 {
            log::info!("arkanoid: wall cleared");
            self.phase = GamePhase::Victory;
        }
    }

    fn collide_walls(&mut self) {
        let ball = &mut self.ball;
        let r = ball.radius as f32;
        if ball.position.x + r >= SCREEN_WIDTH || ball.position.x - r <= 0.0 {
            ball.speed.x *= -1.0;
        }
        if ball.position.y - r <= 0.0 {
            ball.speed.y *= -1.0;
        }
        if ball.position.y + r >= SCREEN_HEIGHT {
            ball.speed = Vec2::ZERO;
            ball.active = false;
            self.paddle.life -= 1;
            log::debug!("arkanoid: ball lost, {} lives left", self.paddle.life);
        }
    }

    /// Only a ball travelling down toward the paddle bounces off it
    fn collide_paddle(&mut self) {
        let ball = &mut self.ball;
        if circle_rect(ball.position, ball.radius as f32, &self.paddle.rect())
            && ball.speed.y > 0.0
        {
            ball.speed.y *= -1.0;
            ball.speed.x =
                (ball.position.x - self.paddle.position.x) / (self.paddle.size.x / 2.0) * 5.0;
        }
    }

    /// Face tests in fixed order (below, above, left, right); the first match
    /// breaks the brick and flips one speed component.
    fn collide_bricks(&mut self) {
        let ball = &mut self.ball;
        let r = ball.radius as f32;
        // Integer tolerance band, as in the classic tuning
        let margin = (ball.radius * 2 / 3) as f32;
        let half = BRICK_SIZE / 2.0;

        for idx in 0..self.bricks.capacity() {
            let brick = &self.bricks[idx];
            if !brick.active {
                continue;
            }
            let b = brick.position;
            let dx = (ball.position.x - b.x).abs();
            let dy = (ball.position.y - b.y).abs();

            let below = ball.position.y - r <= b.y + half.y
                && ball.position.y - r > b.y + half.y + ball.speed.y
                && dx < half.x + margin
                && ball.speed.y < 0.0;
            let above = ball.position.y + r >= b.y - half.y
                && ball.position.y + r < b.y - half.y + ball.speed.y
                && dx < half.x + margin
                && ball.speed.y > 0.0;
            let left = ball.position.x + r >= b.x - half.x
                && ball.position.x + r < b.x - half.x + ball.speed.x
                && dy < half.y + margin
                && ball.speed.x > 0.0;
            let right = ball.position.x - r <= b.x + half.x
                && ball.position.x - r > b.x + half.x + ball.speed.x
                && dy < half.y + margin
                && ball.speed.x < 0.0;

            if below || above {
                ball.speed.y *= -1.0;
            } else if left || right {
                ball.speed.x *= -1.0;
            } else {
                continue;
            }
            self.bricks.despawn(idx);
            self.bricks_destroyed += 1;
        }
    }
}

impl Default for Arkanoid {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Arkanoid {
    fn kind(&self) -> GameKind {
        GameKind::Arkanoid
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
        self.bricks_destroyed as u64
    }
}
