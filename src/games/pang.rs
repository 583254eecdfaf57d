//! Pang: pop bouncing balls with a vertical harpoon before they land on you
//!
//! Big balls split into two medium ones, medium into two small. The harpoon is
//! a vertical line from where it was fired up to the shot's current height.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_HEIGHT_I, SCREEN_WIDTH, SCREEN_WIDTH_I};
use crate::sim::{
    Game, GameKind, GamePhase, GameRng, Key, PhaseStep, Pool, TickInput, advance_phase,
    circle_circle,
};
use crate::{impl_slot, ship_height};

pub const PLAYER_MAX_SHOOTS: usize = 1;
pub const MAX_BIG_BALLS: usize = 2;
pub const MAX_MEDIUM_BALLS: usize = MAX_BIG_BALLS * 2;
pub const MAX_SMALL_BALLS: usize = MAX_BIG_BALLS * 4;
pub const TOTAL_BALLS: u32 = (MAX_BIG_BALLS + MAX_MEDIUM_BALLS + MAX_SMALL_BALLS) as u32;

const PLAYER_BASE_SIZE: f32 = 20.0;
const PLAYER_SPEED: f32 = 5.0;
const COLLIDER_RADIUS: f32 = 12.0;
const BALLS_SPEED: i32 = 2;
const GRAVITY: f32 = 0.25;
const SHOT_RADIUS: f32 = 2.0;
const SHOT_LIFESPAN: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallSize {
    Big,
    Medium,
    Small,
}

impl BallSize {
    pub fn radius(self) -> f32 {
        match self {
            BallSize::Big => 40.0,
            BallSize::Medium => 20.0,
            BallSize::Small => 10.0,
        }
    }

    pub fn points(self) -> u64 {
        match self {
            BallSize::Big => 200,
            BallSize::Medium => 100,
            BallSize::Small => 50,
        }
    }

    /// Smaller balls fall faster and bounce lower
    fn gravity(self) -> f32 {
        match self {
            BallSize::Big => GRAVITY,
            BallSize::Medium => GRAVITY + 0.12,
            BallSize::Small => GRAVITY + 0.25,
        }
    }

    /// Vertical speed factor when hitting the ceiling
    fn ceiling_bounce(self) -> f32 {
        match self {
            BallSize::Big => -1.5,
            BallSize::Medium | BallSize::Small => -1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vec2,
    pub speed: Vec2,
    pub size: BallSize,
    pub active: bool,
}

impl_slot!(Ball);

impl Ball {
    fn parked(size: BallSize) -> Self {
        Self {
            position: Vec2::new(-100.0, -100.0),
            speed: Vec2::ZERO,
            size,
            active: false,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size.radius()
    }

    /// Move, bounce off the walls, then apply gravity
    fn advance(&mut self) {
        let r = self.radius();
        self.position += self.speed;

        if self.position.x + r >= SCREEN_WIDTH || self.position.x - r <= 0.0 {
            self.speed.x *= -1.0;
        }
        if self.position.y - r <= 0.0 {
            self.speed.y *= self.size.ceiling_bounce();
        }
        if self.position.y + r >= SCREEN_HEIGHT {
            self.speed.y *= -1.0;
            self.position.y = SCREEN_HEIGHT - r;
        }

        self.speed.y += self.size.gravity();
    }

    /// The harpoon at `line_x` reaching up to `tip_y` touches this ball
    fn harpooned(&self, line_x: f32, tip_y: f32) -> bool {
        let r = self.radius();
        self.position.x - r <= line_x && self.position.x + r >= line_x && self.position.y + r >= tip_y
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub position: Vec2,
    pub speed: f32,
    pub life: u32,
    pub active: bool,
}

impl_slot!(Shot);

impl Shot {
    fn idle() -> Self {
        Self {
            position: Vec2::ZERO,
            speed: 0.0,
            life: 0,
            active: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pang {
    pub phase: GamePhase,
    rng: GameRng,
    pub player: Vec2,
    pub collider: Vec2,
    pub shots: Pool<Shot>,
    /// Foot of the harpoon, set when fired
    pub line_position: Vec2,
    pub big: Pool<Ball>,
    pub medium: Pool<Ball>,
    pub small: Pool<Ball>,
    /// Fragments spawned so far per size; parity picks the fragment direction
    pub medium_splits: u32,
    pub small_splits: u32,
    pub destroyed: u32,
    pub score: u64,
}

impl Pang {
    pub fn new(seed: u64) -> Self {
        let mut game = Self {
            phase: GamePhase::Playing,
            rng: GameRng::new(seed),
            player: Vec2::ZERO,
            collider: Vec2::ZERO,
            shots: Pool::new(PLAYER_MAX_SHOOTS, |_| Shot::idle()),
            line_position: Vec2::ZERO,
            big: Pool::new(MAX_BIG_BALLS, |_| Ball::parked(BallSize::Big)),
            medium: Pool::new(MAX_MEDIUM_BALLS, |_| Ball::parked(BallSize::Medium)),
            small: Pool::new(MAX_SMALL_BALLS, |_| Ball::parked(BallSize::Small)),
            medium_splits: 0,
            small_splits: 0,
            destroyed: 0,
            score: 0,
        };
        game.init();
        game
    }

    fn init(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.destroyed = 0;
        self.medium_splits = 0;
        self.small_splits = 0;
        self.line_position = Vec2::ZERO;
        self.player = Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT);
        self.update_collider();

        self.shots.reset(|_| Shot::idle());
        // Velocity is drawn once; every big ball starts with the same one
        let rng = &mut self.rng;
        let mut speed = Vec2::ZERO;
        self.big = Pool::new_active(MAX_BIG_BALLS, |_| random_big_ball(rng, &mut speed));
        self.medium.reset(|_| Ball::parked(BallSize::Medium));
        self.small.reset(|_| Ball::parked(BallSize::Small));
    }

    fn update_collider(&mut self) {
        self.collider = Vec2::new(
            self.player.x,
            self.player.y - ship_height(PLAYER_BASE_SIZE) / 2.0,
        );
    }

    fn update(&mut self, input: &TickInput) {
        if input.held(Key::Left) {
            self.player.x -= PLAYER_SPEED;
        }
        if input.held(Key::Right) {
            self.player.x += PLAYER_SPEED;
        }
        let half = PLAYER_BASE_SIZE / 2.0;
        self.player.x = self.player.x.clamp(half, SCREEN_WIDTH - half);

        if input.pressed(Key::Space) {
            self.fire();
        }
        self.advance_shots();

        self.update_collider();
        let collider = self.collider;
        let hit_player = [&self.big, &self.medium, &self.small].iter().any(|pool| {
            pool.any_active(|b| circle_circle(collider, COLLIDER_RADIUS, b.position, b.radius()))
        });

        for ball in self
            .big
            .iter_active_mut()
            .chain(self.medium.iter_active_mut())
            .chain(self.small.iter_active_mut())
        {
            ball.advance();
        }

        self.resolve_harpoon_hits();

        if hit_player {
            log::info!("pang: player hit with {} points", self.score);
            self.phase = GamePhase::GameOver;
        } else if self.destroyed == TOTAL_BALLS {
            log::info!("pang: all balls popped, {} points", self.score);
            self.phase = GamePhase::Victory;
        }
    }

    fn fire(&mut self) {
        let Some(i) = self.shots.spawn() else {
            return;
        };
        let shot = &mut self.shots[i];
        shot.position = Vec2::new(self.player.x, self.player.y - ship_height(PLAYER_BASE_SIZE));
        shot.speed = PLAYER_SPEED;
        shot.life = 0;
        self.line_position = self.player;
    }

    fn advance_shots(&mut self) {
        for shot in self.shots.iter_active_mut() {
            shot.life += 1;
            shot.position.y -= shot.speed;

            let p = shot.position;
            let r = SHOT_RADIUS;
            if p.x > SCREEN_WIDTH + r || p.x < -r || p.y > SCREEN_HEIGHT + r || p.y < -r {
                shot.active = false;
                shot.life = 0;
            }
            if shot.life >= SHOT_LIFESPAN {
                *shot = Shot::idle();
            }
        }
    }

    /// Each harpoon pops the first ball it touches, checking big, medium, then small
    fn resolve_harpoon_hits(&mut self) {
        let line_x = self.line_position.x;
        for i in 0..self.shots.capacity() {
            if !self.shots[i].active {
                continue;
            }
            let tip = self.shots[i].position.y;
            let find = |pool: &Pool<Ball>| {
                pool.iter()
                    .position(|b| b.active && b.harpooned(line_x, tip))
            };

            let popped = if let Some(a) = find(&self.big) {
                self.big.despawn(a);
                let origin = self.big[a].position;
                split(&mut self.medium, &mut self.medium_splits, origin, 1.0);
                BallSize::Big
            } else if let Some(b) = find(&self.medium) {
                self.medium.despawn(b);
                let origin = self.medium[b].position;
                split(&mut self.small, &mut self.small_splits, origin, -1.0);
                BallSize::Medium
            } else if let Some(c) = find(&self.small) {
                self.small.despawn(c);
                BallSize::Small
            } else {
                continue;
            };

            self.shots[i].active = false;
            self.shots[i].life = 0;
            self.destroyed += 1;
            self.score += popped.points();
            log::debug!("pang: {:?} ball popped", popped);
        }
    }
}

/// Big ball at a random spot in the upper half. `speed` is only sampled
/// while it still has a zero component.
fn random_big_ball(rng: &mut GameRng, speed: &mut Vec2) -> Ball {
    let r = BallSize::Big.radius() as i32;
    let position = Vec2::new(
        rng.value_f32(r, SCREEN_WIDTH_I - r),
        rng.value_f32(r, SCREEN_HEIGHT_I / 2),
    );
    while speed.x == 0.0 || speed.y == 0.0 {
        *speed = Vec2::new(
            rng.value_f32(-BALLS_SPEED, BALLS_SPEED),
            rng.value_f32(-BALLS_SPEED, BALLS_SPEED),
        );
    }
    Ball {
        position,
        speed: *speed,
        size: BallSize::Big,
        active: true,
    }
}

/// Spawn two fragments at `origin` moving vertically by `vertical`, sideways
/// left on even counter values and right on odd ones.
fn split(pool: &mut Pool<Ball>, counter: &mut u32, origin: Vec2, vertical: f32) {
    let speed = BALLS_SPEED as f32;
    for _ in 0..2 {
        let Some(idx) = pool.spawn() else {
            return;
        };
        let ball = &mut pool[idx];
        ball.position = origin;
        let x = if *counter % 2 == 0 { -speed } else { speed };
        ball.speed = Vec2::new(x, vertical * speed);
        *counter += 1;
    }
}

impl Game for Pang {
    fn kind(&self) -> GameKind {
        GameKind::Pang
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
